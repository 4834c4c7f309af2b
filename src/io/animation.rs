//! Frame capture and GIF assembly for animated maze solving
//!
//! Frames are written to a scratch directory as they are captured and read
//! back in order when the GIF is assembled, so memory stays bounded by a
//! single frame. The scratch directory is owned by the recorder and removed
//! when the recorder is cleared or dropped, on every exit path.

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbImage};
use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::io::configuration::{
    DEFAULT_ENTER_COL, DEFAULT_EXIT_COL, DEFAULT_SEED, FINAL_FRAME_HOLD, GIF_FRAME_DELAY_MS,
};
use crate::io::error::{
    MazeError, Result, file_system_error, invalid_parameter, invalid_source_data,
};
use crate::io::image::render;
use crate::io::progress::ProgressReporter;
use crate::spatial::{Cell, Maze};

/// Ordered sequence of frames persisted in a scoped scratch directory
#[derive(Debug)]
pub struct AnimationRecorder {
    scratch: Option<TempDir>,
    frame_paths: Vec<PathBuf>,
    next_frame: usize,
}

impl AnimationRecorder {
    /// Acquire a fresh scratch directory
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary directory cannot be created
    pub fn new() -> Result<Self> {
        let scratch = tempfile::Builder::new()
            .prefix("labyrinth-frames-")
            .tempdir()
            .map_err(file_system_error(std::env::temp_dir(), "create scratch directory"))?;

        Ok(Self {
            scratch: Some(scratch),
            frame_paths: Vec::new(),
            next_frame: 0,
        })
    }

    /// Create a recorder pre-filled with frames
    ///
    /// # Errors
    ///
    /// Returns an error if the scratch directory or any frame cannot be written
    pub fn with_frames<'a>(frames: impl IntoIterator<Item = &'a RgbImage>) -> Result<Self> {
        let mut recorder = Self::new()?;
        for frame in frames {
            recorder.append(frame)?;
        }
        Ok(recorder)
    }

    /// Location of the scratch directory while it is held
    pub fn scratch_dir(&self) -> Option<&Path> {
        self.scratch.as_ref().map(TempDir::path)
    }

    /// Paths of the captured frames in playback order
    pub fn frame_paths(&self) -> &[PathBuf] {
        &self.frame_paths
    }

    /// Number of captured frames
    pub const fn len(&self) -> usize {
        self.frame_paths.len()
    }

    /// Whether no frame has been captured
    pub const fn is_empty(&self) -> bool {
        self.frame_paths.is_empty()
    }

    /// Persist a frame and append it to the sequence
    ///
    /// # Errors
    ///
    /// Returns an error if the recorder was cleared or the frame cannot be written
    pub fn append(&mut self, frame: &RgbImage) -> Result<()> {
        let path = self.write_frame(frame)?;
        self.frame_paths.push(path);
        Ok(())
    }

    /// Replace the frame at `index`
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range, the recorder was cleared,
    /// or the frame cannot be written
    pub fn update(&mut self, index: usize, frame: &RgbImage) -> Result<()> {
        if index >= self.frame_paths.len() {
            return Err(invalid_parameter(
                "index",
                &index,
                &format!("recorder holds {} frames", self.frame_paths.len()),
            ));
        }
        let path = self.write_frame(frame)?;
        if let Some(slot) = self.frame_paths.get_mut(index) {
            *slot = path;
        }
        Ok(())
    }

    /// Remove the frame at `index` from the sequence, returning its path
    ///
    /// The file stays in the scratch directory until the recorder is released.
    pub fn pop(&mut self, index: usize) -> Option<PathBuf> {
        (index < self.frame_paths.len()).then(|| self.frame_paths.remove(index))
    }

    /// Drop all frames and release the scratch directory
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be removed
    pub fn clear(&mut self) -> Result<()> {
        self.frame_paths.clear();
        if let Some(scratch) = self.scratch.take() {
            let path = scratch.path().to_path_buf();
            scratch
                .close()
                .map_err(file_system_error(path, "remove scratch directory"))?;
        }
        Ok(())
    }

    fn write_frame(&mut self, frame: &RgbImage) -> Result<PathBuf> {
        let dir = self
            .scratch_dir()
            .ok_or_else(|| invalid_source_data(&"recorder has been cleared"))?;
        let path = dir.join(format!("frame-{:06}.png", self.next_frame));

        frame.save(&path).map_err(|source| MazeError::ImageExport {
            path: path.clone(),
            source,
        })?;
        self.next_frame += 1;
        Ok(path)
    }

    /// Assemble the captured frames into a looping GIF
    ///
    /// The `.gif` extension is forced onto `path`. The last frame is held
    /// longer so the finished state stays visible. Returns the path written.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - A frame cannot be read back from the scratch directory
    /// - File system operations or GIF encoding fail
    pub fn save_gif(
        &self,
        path: impl AsRef<Path>,
        frame_delay_ms: u32,
        progress: &ProgressReporter,
    ) -> Result<PathBuf> {
        if self.frame_paths.is_empty() {
            return Err(invalid_source_data(&"no frames captured for animation"));
        }

        let path = path.as_ref().with_extension("gif");
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(file_system_error(parent, "create directory"))?;
        }

        let file = std::fs::File::create(&path).map_err(file_system_error(&path, "create file"))?;
        let export_error = |source| MazeError::ImageExport {
            path: path.clone(),
            source,
        };

        let mut encoder = GifEncoder::new(file);
        encoder.set_repeat(Repeat::Infinite).map_err(export_error)?;

        let progress = progress.phase(self.frame_paths.len(), "Saving GIF");
        let last = self.frame_paths.len() - 1;
        for (index, frame_path) in self.frame_paths.iter().enumerate() {
            let image = image::open(frame_path)
                .map_err(|source| MazeError::ImageLoad {
                    path: frame_path.clone(),
                    source,
                })?
                .to_rgba8();

            let delay_ms = if index == last {
                frame_delay_ms * FINAL_FRAME_HOLD
            } else {
                frame_delay_ms
            };
            let frame = Frame::from_parts(image, 0, 0, Delay::from_numer_denom_ms(delay_ms, 1));
            encoder.encode_frame(frame).map_err(export_error)?;
            progress.inc(1);
        }
        progress.finish();
        // The GIF trailer is written when the encoder is dropped
        drop(encoder);

        debug!(
            "Saved {} frame animation to {}",
            self.frame_paths.len(),
            path.display()
        );
        Ok(path)
    }
}

impl Maze {
    /// Solve the maze and record each marking step as a GIF frame
    ///
    /// Uses the default border columns and seed. See
    /// [`Maze::solve_with_gif_between`].
    ///
    /// # Errors
    ///
    /// See [`Maze::solve_with_gif_between`]
    pub fn solve_with_gif(
        &mut self,
        path: impl AsRef<Path>,
        block_size: usize,
    ) -> Result<PathBuf> {
        let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);
        self.solve_with_gif_between(
            path,
            block_size,
            DEFAULT_ENTER_COL,
            DEFAULT_EXIT_COL,
            &mut rng,
            &ProgressReporter::hidden(),
        )
    }

    /// Solve the maze and record each marking step as a GIF frame
    ///
    /// One frame is captured after every path cell is marked, so the
    /// animation walks from the entrance to the exit. An unsolvable maze
    /// produces a single frame of the unchanged maze. The maze ends up in
    /// the same state as after [`Maze::solve_between`].
    ///
    /// # Errors
    ///
    /// Returns an error if solving, rendering, frame capture or GIF encoding fails
    pub fn solve_with_gif_between<R: Rng + ?Sized>(
        &mut self,
        path: impl AsRef<Path>,
        block_size: usize,
        enter_col: i32,
        exit_col: i32,
        rng: &mut R,
        progress: &ProgressReporter,
    ) -> Result<PathBuf> {
        self.clear_solution();
        let way = self.solved_path(enter_col, exit_col, rng)?;

        let mut recorder = AnimationRecorder::new()?;
        if way.is_empty() {
            recorder.append(&render(self, block_size)?)?;
        } else {
            // Start from the unmarked maze so the walk is visible from its first cell
            for &coord in &way {
                self.set(coord, Cell::Empty);
            }

            let capture = progress.phase(way.len(), "Creating GIF");
            for &coord in &way {
                self.mark_path(&[coord]);
                recorder.append(&render(self, block_size)?)?;
                capture.inc(1);
            }
            capture.finish();
        }

        let written = recorder.save_gif(path, GIF_FRAME_DELAY_MS, progress)?;
        recorder.clear()?;
        Ok(written)
    }
}
