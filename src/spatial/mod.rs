//! Spatial data structures for the maze grid
//!
//! This module contains:
//! - Grid coordinates and neighborhood helpers
//! - The cell state enumeration
//! - The maze grid itself
//! - The scratch visitation grid used by carving and search

/// Cell state enumeration
pub mod cell;
/// Integer coordinates with stepping and normalization
pub mod coordinate;
/// Maze grid ownership and cell access
pub mod maze;
/// Bit-packed visitation grid and breadth-first search
pub mod visit_grid;

pub use cell::Cell;
pub use coordinate::Coord;
pub use maze::Maze;
pub use visit_grid::VisitGrid;
