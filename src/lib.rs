//! Perfect maze generation, breadth-first solving and raster image round-tripping
//!
//! A [`Maze`] starts as a parity skeleton, is carved into a perfect maze by
//! randomized depth-first search, can be solved by breadth-first search
//! between its two border entrances, and converts to and from solid-color
//! block images. Solving can also be recorded as an animated GIF.

#![forbid(unsafe_code)]

/// Maze generation, connectivity repair and solving
pub mod algorithm;
/// Image coding, animation capture, errors and the command-line front end
pub mod io;
/// Coordinates, cells, the maze grid and the scratch visitation grid
pub mod spatial;

pub use io::error::{DecodeError, MazeError, Result};
pub use spatial::{Cell, Coord, Maze, VisitGrid};
