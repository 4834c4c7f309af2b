//! Closed set of maze cell states and their raster colors

use std::fmt;

/// State of a single maze cell
///
/// Visitation during carving and search is tracked separately by
/// [`crate::spatial::VisitGrid`]; a finished maze only ever holds these three states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Impassable block
    #[default]
    Wall,
    /// Open passage
    Empty,
    /// Boundary opening, also used to overlay a solved path
    Entrance,
}

impl Cell {
    /// Skeleton state for a `(col, row)` position: walls on every even row or column
    pub const fn skeleton(col: i32, row: i32) -> Self {
        use crate::spatial::coordinate::is_even;
        if is_even(row) || is_even(col) {
            Self::Wall
        } else {
            Self::Empty
        }
    }

    /// Whether the cell blocks movement
    pub const fn is_wall(self) -> bool {
        matches!(self, Self::Wall)
    }

    /// RGB tile color used by the image codec
    pub const fn color(self) -> [u8; 3] {
        match self {
            Self::Wall => [0, 0, 0],
            Self::Empty => [255, 255, 255],
            Self::Entrance => [255, 0, 0],
        }
    }

    /// Single character used by the text rendering of a maze
    pub const fn symbol(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Empty => ' ',
            Self::Entrance => '*',
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
