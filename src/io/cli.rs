//! Command-line front end for generating, solving and animating mazes

use crate::io::configuration::{
    DEFAULT_BLOCK_SIZE, DEFAULT_ENTER_COL, DEFAULT_EXIT_COL, DEFAULT_GIF_BLOCK_SIZE, DEFAULT_SEED,
    MIN_DIMENSION, SIZE_LIMIT, SOLVED_SUFFIX,
};
use crate::io::error::{MazeError, Result, invalid_parameter};
use crate::io::progress::ProgressReporter;
use crate::spatial::maze::odd_dimension;
use crate::spatial::{Coord, Maze};
use clap::{ArgAction, Parser, Subcommand};
use log::{LevelFilter, info, warn};
use rand::{SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "labyrinth")]
#[command(
    author,
    version,
    about = "Generate perfect mazes, solve them from images and animate the solution"
)]
/// Command-line arguments for the maze tool
pub struct Cli {
    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Maze operations exposed on the command line
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a square maze and save it as an image
    Generate {
        /// Side length in cells (even sizes are rounded up to odd)
        #[arg(value_name = "SIZE")]
        size: usize,

        /// Output image path (defaults to JPEG when no extension is given)
        #[arg(short, long, default_value = "labyrinth.jpg")]
        output: PathBuf,

        /// Random seed for reproducible generation
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Pixel side length of one cell
        #[arg(short, long, default_value_t = DEFAULT_BLOCK_SIZE)]
        block_size: usize,

        /// Also save the solved maze to this path
        #[arg(long)]
        solved: Option<PathBuf>,
    },

    /// Read a maze image, solve it and save the marked result
    Solve {
        /// Maze image to solve
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output image path (defaults to `<input>_solved.<ext>`)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Seed used when an entrance has to be recreated
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Pixel side length of one cell in the output
        #[arg(short, long, default_value_t = DEFAULT_BLOCK_SIZE)]
        block_size: usize,
    },

    /// Read a maze image and save an animated GIF of its solution
    Animate {
        /// Maze image to solve
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output GIF path (defaults to `<input>_solved.gif`)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Seed used when an entrance has to be recreated
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Pixel side length of one cell in each frame
        #[arg(short, long, default_value_t = DEFAULT_GIF_BLOCK_SIZE)]
        block_size: usize,
    },
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level selected by `--verbose` and `--quiet`
    pub const fn log_level(&self) -> LevelFilter {
        match (self.quiet, self.verbose) {
            (true, _) => LevelFilter::Warn,
            (false, 0) => LevelFilter::Info,
            (false, 1) => LevelFilter::Debug,
            (false, _) => LevelFilter::Trace,
        }
    }
}

/// Validate and coerce a requested side length
///
/// Even sizes are rounded up to the next odd size before the limit is checked.
///
/// # Errors
///
/// Returns [`MazeError::SizeLimitExceeded`] when the coerced size is above
/// `limit`, and an invalid parameter error when it is too small to hold a maze
pub fn coerce_size(requested: usize, limit: usize) -> Result<usize> {
    let size = odd_dimension(requested);
    if size > limit {
        return Err(MazeError::SizeLimitExceeded {
            requested: size,
            limit,
        });
    }
    if size < MIN_DIMENSION {
        return Err(invalid_parameter(
            "size",
            &requested,
            &"a maze needs at least 3 cells per side",
        ));
    }
    Ok(size)
}

/// Executes a parsed command
#[derive(Debug)]
pub struct CommandRunner {
    cli: Cli,
    progress: ProgressReporter,
}

impl CommandRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = if cli.should_show_progress() {
            ProgressReporter::enabled()
        } else {
            ProgressReporter::hidden()
        };

        Self { cli, progress }
    }

    /// Run the selected command, returning every file written
    ///
    /// # Errors
    ///
    /// Returns an error if size validation, decoding, solving or saving fails
    pub fn process(&self) -> Result<Vec<PathBuf>> {
        let written = match &self.cli.command {
            Command::Generate {
                size,
                output,
                seed,
                block_size,
                solved,
            } => self.generate(*size, output, *seed, *block_size, solved.as_deref())?,
            Command::Solve {
                input,
                output,
                seed,
                block_size,
            } => {
                let output = output
                    .clone()
                    .unwrap_or_else(|| Self::get_solved_path(input, None));
                vec![Self::solve(input, &output, *seed, *block_size)?]
            }
            Command::Animate {
                input,
                output,
                seed,
                block_size,
            } => {
                let output = output
                    .clone()
                    .unwrap_or_else(|| Self::get_solved_path(input, Some("gif")));
                vec![self.animate(input, &output, *seed, *block_size)?]
            }
        };

        for path in &written {
            info!("Wrote {}", path.display());
        }
        Ok(written)
    }

    fn generate(
        &self,
        size: usize,
        output: &Path,
        seed: u64,
        block_size: usize,
        solved: Option<&Path>,
    ) -> Result<Vec<PathBuf>> {
        let size = coerce_size(size, SIZE_LIMIT)?;
        let mut rng = StdRng::seed_from_u64(seed);

        let mut maze = Maze::new(size, size);
        maze.generate_with_progress(Coord::new(1, 1), &mut rng, &self.progress)?;

        let mut written = vec![maze.save_as_image(output, block_size)?];

        if let Some(solved_path) = solved {
            let path = maze.solve_between(DEFAULT_ENTER_COL, DEFAULT_EXIT_COL, &mut rng)?;
            if path.is_empty() {
                warn!("Generated maze has no path between its entrances");
            }
            written.push(maze.save_as_image(solved_path, block_size)?);
        }

        Ok(written)
    }

    fn solve(input: &Path, output: &Path, seed: u64, block_size: usize) -> Result<PathBuf> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut maze = Maze::from_image(input)?;

        let path = maze.solve_between(DEFAULT_ENTER_COL, DEFAULT_EXIT_COL, &mut rng)?;
        if path.is_empty() {
            warn!("No path found in {}", input.display());
        } else {
            info!("Solved {} in {} steps", input.display(), path.len() - 1);
        }

        maze.save_as_image(output, block_size)
    }

    fn animate(
        &self,
        input: &Path,
        output: &Path,
        seed: u64,
        block_size: usize,
    ) -> Result<PathBuf> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut maze = Maze::from_image(input)?;

        maze.solve_with_gif_between(
            output,
            block_size,
            DEFAULT_ENTER_COL,
            DEFAULT_EXIT_COL,
            &mut rng,
            &self.progress,
        )
    }

    /// Output path for a solved maze: `<stem>_solved.<ext>` beside the input
    pub fn get_solved_path(input_path: &Path, extension: Option<&str>) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = extension.map_or_else(
            || input_path.extension().unwrap_or_default().to_string_lossy(),
            std::borrow::Cow::Borrowed,
        );
        let solved_name = if extension.is_empty() {
            format!("{}{SOLVED_SUFFIX}", stem.to_string_lossy())
        } else {
            format!("{}{SOLVED_SUFFIX}.{extension}", stem.to_string_lossy())
        };

        if let Some(parent) = input_path.parent() {
            parent.join(solved_name)
        } else {
            PathBuf::from(solved_name)
        }
    }
}
