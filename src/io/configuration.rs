//! Codec constants and runtime configuration defaults

// Image codec settings
/// Tile side lengths the codec renders and accepts on decode
pub const SUPPORTED_BLOCK_SIZES: &[usize] = &[8, 32, 64];
/// Default tile side length for still images
pub const DEFAULT_BLOCK_SIZE: usize = 64;
/// Default tile side length for animation frames
pub const DEFAULT_GIF_BLOCK_SIZE: usize = 8;
/// Channel values strictly above this binarize to "on"
pub const BINARIZE_THRESHOLD: u8 = 128;
/// JPEG encoder quality for in-memory output
pub const JPEG_QUALITY: u8 = 90;
/// Extension appended when a save path has none
pub const DEFAULT_IMAGE_EXTENSION: &str = "jpg";

// Maze geometry defaults
/// Column of the default entrance (left border)
pub const DEFAULT_ENTER_COL: i32 = 0;
/// Column of the default exit (right border, counted from the end)
pub const DEFAULT_EXIT_COL: i32 = -1;
/// Smallest side length that leaves room for an interior
pub const MIN_DIMENSION: usize = 3;

// Front-end policy
/// Largest maze side length the command-line front end will generate
pub const SIZE_LIMIT: usize = 150;
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Suffix added to solved output filenames
pub const SOLVED_SUFFIX: &str = "_solved";

// Animation settings
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 50;
/// Hold time multiplier for the final frame
pub const FINAL_FRAME_HOLD: u32 = 25;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
