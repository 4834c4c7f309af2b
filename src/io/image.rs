//! Raster encoding and decoding of mazes as solid-color block images
//!
//! Each cell becomes a square tile: black for walls, white for passages and
//! red for entrances or solution cells. Decoding binarizes every channel,
//! measures the tile size from the shortest run of identical pixels along
//! the rows, and classifies each tile by which channels it lights up. JPEG is
//! the default output format; decoding tolerates compression noise as long
//! as no pixel crosses the binarization threshold.

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use log::{debug, warn};
use ndarray::Array2;
use std::io::{BufWriter, Cursor, Write};
use std::path::{Path, PathBuf};

use crate::io::configuration::{
    BINARIZE_THRESHOLD, DEFAULT_IMAGE_EXTENSION, JPEG_QUALITY, SUPPORTED_BLOCK_SIZES,
};
use crate::io::error::{DecodeError, MazeError, Result, file_system_error, invalid_parameter};
use crate::spatial::{Cell, Maze};

/// Per-pixel "on" flags for the red, green and blue channels
pub type BinaryPixel = [bool; 3];

/// Render a maze as an RGB image with `block_size` pixels per cell
///
/// # Errors
///
/// Returns an error if `block_size` is zero or the image would not fit in
/// `u32` pixel dimensions
pub fn render(maze: &Maze, block_size: usize) -> Result<RgbImage> {
    if block_size == 0 {
        return Err(invalid_parameter(
            "block_size",
            &block_size,
            &"must be positive",
        ));
    }
    if !SUPPORTED_BLOCK_SIZES.contains(&block_size) {
        warn!("Block size {block_size} renders fine but will not decode back");
    }

    let pixels = |cells: usize| {
        cells
            .checked_mul(block_size)
            .and_then(|value| u32::try_from(value).ok())
            .ok_or_else(|| invalid_parameter("block_size", &block_size, &"image too large"))
    };
    let width = pixels(maze.width())?;
    let height = pixels(maze.height())?;

    Ok(RgbImage::from_fn(width, height, |x, y| {
        let row = y as usize / block_size;
        let col = x as usize / block_size;
        let cell = maze.cells().get([row, col]).copied().unwrap_or_default();
        Rgb(cell.color())
    }))
}

/// Write an RGB image, choosing the format from the extension
///
/// A path without extension gets `.jpg`. Parent directories are created.
/// Returns the path actually written.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or encoding fails
pub fn save_image(image: &RgbImage, path: &Path) -> Result<PathBuf> {
    let path = if path.extension().is_none() {
        path.with_extension(DEFAULT_IMAGE_EXTENSION)
    } else {
        path.to_path_buf()
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(file_system_error(parent, "create directory"))?;
    }

    let export_error = |source| MazeError::ImageExport {
        path: path.clone(),
        source,
    };

    match ImageFormat::from_path(&path).map_err(export_error)? {
        ImageFormat::Jpeg => {
            let file =
                std::fs::File::create(&path).map_err(file_system_error(&path, "create file"))?;
            let mut writer = BufWriter::new(file);
            image
                .write_with_encoder(JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY))
                .map_err(export_error)?;
            writer
                .flush()
                .map_err(file_system_error(&path, "flush file"))?;
        }
        _ => image.save(&path).map_err(export_error)?,
    }

    debug!(
        "Saved {}x{} image to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(path)
}

/// Encode an RGB image into memory in the given format
///
/// # Errors
///
/// Returns an error if the encoder rejects the image
pub fn encode_image(image: &RgbImage, format: ImageFormat) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    let export_error = |source| MazeError::ImageExport {
        path: PathBuf::from("<memory>"),
        source,
    };

    if format == ImageFormat::Jpeg {
        image
            .write_with_encoder(JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY))
            .map_err(export_error)?;
    } else {
        image
            .write_to(&mut Cursor::new(&mut bytes), format)
            .map_err(export_error)?;
    }

    Ok(bytes)
}

/// Threshold every channel of every pixel
pub fn binarize(image: &DynamicImage) -> Array2<BinaryPixel> {
    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();
    Array2::from_shape_fn((height as usize, width as usize), |(row, col)| {
        let Rgb(channels) = *rgb.get_pixel(col as u32, row as u32);
        channels.map(|value| value > BINARIZE_THRESHOLD)
    })
}

/// Measure the tile side length of a binarized image
///
/// Scans every row for runs of identical pixels and takes the shortest run,
/// including the run that ends each row.
///
/// # Errors
///
/// Returns [`DecodeError::Unrecognized`] when no run can be measured and
/// [`DecodeError::Unsupported`] when the measured size is not one the codec
/// produces
pub fn recognize_block_size(
    pixels: &Array2<BinaryPixel>,
) -> std::result::Result<usize, DecodeError> {
    let mut block_size: Option<usize> = None;

    for row in pixels.rows() {
        let mut run = 0usize;
        let mut previous: Option<BinaryPixel> = None;

        for &current in row {
            if previous.is_none_or(|last| last == current) {
                run += 1;
            } else {
                block_size = Some(block_size.map_or(run, |size| size.min(run)));
                run = 1;
            }
            previous = Some(current);
        }

        if run > 0 {
            block_size = Some(block_size.map_or(run, |size| size.min(run)));
        }
    }

    let block_size = block_size.ok_or(DecodeError::Unrecognized)?;
    if SUPPORTED_BLOCK_SIZES.contains(&block_size) {
        Ok(block_size)
    } else {
        Err(DecodeError::Unsupported {
            block_size,
            supported: SUPPORTED_BLOCK_SIZES,
        })
    }
}

/// Classify one tile: all channels lit is a passage, red only is an entrance
fn classify(pixels: &Array2<BinaryPixel>, row: usize, col: usize, block_size: usize) -> Cell {
    let (height, width) = pixels.dim();
    let mut lit = [false; 3];

    for y in row * block_size..((row + 1) * block_size).min(height) {
        for x in col * block_size..((col + 1) * block_size).min(width) {
            if let Some(pixel) = pixels.get([y, x]) {
                for (channel, &on) in lit.iter_mut().zip(pixel) {
                    *channel |= on;
                }
            }
        }
    }

    match lit {
        [true, true, true] => Cell::Empty,
        [true, _, _] => Cell::Entrance,
        _ => Cell::Wall,
    }
}

/// Rebuild a maze from a decoded image
///
/// # Errors
///
/// Returns [`MazeError::Decode`] if the tile size cannot be recognized or
/// is not supported
pub fn decode(image: &DynamicImage) -> Result<Maze> {
    let pixels = binarize(image);
    let block_size = recognize_block_size(&pixels)?;

    let (height, width) = pixels.dim();
    let rows = height.div_ceil(block_size);
    let cols = width.div_ceil(block_size);
    debug!("Decoding {rows}x{cols} maze with block size {block_size}");

    let cells = Array2::from_shape_fn((rows, cols), |(row, col)| {
        classify(&pixels, row, col, block_size)
    });
    Ok(Maze::from_cells(cells))
}

impl Maze {
    /// Render this maze as an RGB image
    ///
    /// # Errors
    ///
    /// See [`render`]
    pub fn to_image(&self, block_size: usize) -> Result<RgbImage> {
        render(self, block_size)
    }

    /// Render and save this maze; paths without extension are saved as JPEG
    ///
    /// Returns the path actually written.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering, directory creation or encoding fails
    pub fn save_as_image(&self, path: impl AsRef<Path>, block_size: usize) -> Result<PathBuf> {
        let image = self.to_image(block_size)?;
        save_image(&image, path.as_ref())
    }

    /// Render this maze to JPEG bytes
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or encoding fails
    pub fn save_as_bytes(&self, block_size: usize) -> Result<Vec<u8>> {
        self.save_as_bytes_with_format(block_size, ImageFormat::Jpeg)
    }

    /// Render this maze to bytes in any format the `image` crate can write
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or encoding fails
    pub fn save_as_bytes_with_format(
        &self,
        block_size: usize,
        format: ImageFormat,
    ) -> Result<Vec<u8>> {
        let image = self.to_image(block_size)?;
        encode_image(&image, format)
    }

    /// Load a maze from an image file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded as a maze
    pub fn from_image(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let image = image::open(path).map_err(|source| MazeError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?;
        decode(&image)
    }

    /// Load a maze from encoded image bytes
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not an image or cannot be decoded as a maze
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let image = image::load_from_memory(bytes)?;
        decode(&image)
    }

    /// Rebuild a maze from an already decoded image
    ///
    /// # Errors
    ///
    /// See [`decode`]
    pub fn from_dynamic_image(image: &DynamicImage) -> Result<Self> {
        decode(image)
    }
}
