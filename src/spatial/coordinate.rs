//! Integer grid coordinates with directional stepping and negative-index normalization

use std::fmt;

/// Test whether a grid index is even
pub const fn is_even(value: i32) -> bool {
    value % 2 == 0
}

/// Test whether a grid index is odd
pub const fn is_odd(value: i32) -> bool {
    !is_even(value)
}

/// A point on the maze grid
///
/// `x` is the column and `y` is the row. Either component may be negative,
/// in which case it counts back from the far edge once normalized against a
/// concrete grid size (`-1` is the last column or row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Column index
    pub x: i32,
    /// Row index
    pub y: i32,
}

impl Coord {
    /// Create a coordinate from a column and a row
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Step `n` rows up
    #[must_use]
    pub const fn to_top(self, n: i32) -> Self {
        Self::new(self.x, self.y - n)
    }

    /// Step `n` rows down
    #[must_use]
    pub const fn to_down(self, n: i32) -> Self {
        Self::new(self.x, self.y + n)
    }

    /// Step `n` columns left
    #[must_use]
    pub const fn to_left(self, n: i32) -> Self {
        Self::new(self.x - n, self.y)
    }

    /// Step `n` columns right
    #[must_use]
    pub const fn to_right(self, n: i32) -> Self {
        Self::new(self.x + n, self.y)
    }

    /// The four axis-aligned neighbors at distance `n`
    ///
    /// Order is fixed as top, down, left, right. Breadth-first search relies
    /// on this order for deterministic tie-breaking between equal paths.
    pub const fn neighborhood(self, n: i32) -> [Self; 4] {
        [
            self.to_top(n),
            self.to_down(n),
            self.to_left(n),
            self.to_right(n),
        ]
    }

    /// Resolve negative components against a `(rows, cols)` grid shape
    ///
    /// A negative `x` becomes `cols + x` and a negative `y` becomes `rows + y`.
    /// Non-negative components pass through unchanged, even when out of range.
    #[must_use]
    pub const fn normalize(self, shape: (usize, usize)) -> Self {
        let (rows, cols) = shape;
        Self::new(
            normalize_axis(self.x, cols as i32),
            normalize_axis(self.y, rows as i32),
        )
    }

    /// Convert to `[row, col]` array indices when both components are non-negative
    pub const fn to_index(self) -> Option<[usize; 2]> {
        if self.x < 0 || self.y < 0 {
            None
        } else {
            Some([self.y as usize, self.x as usize])
        }
    }

    /// Build a coordinate from `(row, col)` array indices
    pub const fn from_index(row: usize, col: usize) -> Self {
        Self::new(col as i32, row as i32)
    }
}

const fn normalize_axis(value: i32, limit: i32) -> i32 {
    if value >= 0 { value } else { limit + value }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
