//! Rectangular maze grid and cell-level access
//!
//! The grid is stored row-major as `[row, col]` and addressed externally by
//! [`Coord`] (`x` = column, `y` = row). A freshly constructed maze is the
//! carving skeleton: every cell on an even row or even column is a wall and
//! the odd/odd cells are isolated rooms. Generation and solving live in
//! [`crate::algorithm`] and mutate the grid in place.

use ndarray::Array2;
use std::fmt;
use std::str::FromStr;

use crate::io::error::{MazeError, invalid_source_data};
use crate::spatial::{Cell, Coord, VisitGrid};

/// A grid maze of walls, passages and entrances
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    cells: Array2<Cell>,
}

impl Maze {
    /// Create the all-wall skeleton for a `height x width` maze
    ///
    /// Both dimensions are expected to be odd and at least 3. With an even
    /// height the last row alternates wall and open cells, so the border has
    /// holes; an even width does the same to the last column. Generation
    /// rejects such sizes, and callers coerce them before construction (see
    /// [`odd_dimension`]).
    pub fn new(height: usize, width: usize) -> Self {
        let cells = Array2::from_shape_fn((height, width), |(row, col)| {
            Cell::skeleton(col as i32, row as i32)
        });
        Self { cells }
    }

    /// Wrap an existing grid of cells, e.g. one decoded from an image
    pub const fn from_cells(cells: Array2<Cell>) -> Self {
        Self { cells }
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Grid shape as `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Borrow the raw cell grid
    pub const fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    /// Cell at `coord`, or `None` when out of range
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        coord
            .to_index()
            .and_then(|index| self.cells.get(index).copied())
    }

    /// Overwrite the cell at `coord`; out-of-range coordinates are ignored
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        if let Some(slot) = coord.to_index().and_then(|index| self.cells.get_mut(index)) {
            *slot = cell;
        }
    }

    /// Whether `coord` is a wall; out-of-range coordinates count as walls
    pub fn is_wall(&self, coord: Coord) -> bool {
        self.get(coord).is_none_or(Cell::is_wall)
    }

    /// Whether `coord` is passable
    pub fn is_empty(&self, coord: Coord) -> bool {
        !self.is_wall(coord)
    }

    /// Whether `coord` lies strictly inside the border
    ///
    /// Border cells are reserved for entrances, so carving never touches them.
    pub fn is_legal(&self, coord: Coord) -> bool {
        let (rows, cols) = self.dimensions();
        coord.x > 0
            && coord.y > 0
            && (coord.x as usize) + 1 < cols
            && (coord.y as usize) + 1 < rows
    }

    /// Every entrance-marked cell in row-major order
    pub fn entrances(&self) -> Vec<Coord> {
        self.coords_where(|cell| cell == Cell::Entrance)
    }

    /// Count cells in a given state
    pub fn count(&self, state: Cell) -> usize {
        self.cells.iter().filter(|&&cell| cell == state).count()
    }

    /// Every coordinate whose cell satisfies `predicate`, in row-major order
    pub fn coords_where(&self, mut predicate: impl FnMut(Cell) -> bool) -> Vec<Coord> {
        self.cells
            .indexed_iter()
            .filter(|&(_, &cell)| predicate(cell))
            .map(|((row, col), _)| Coord::from_index(row, col))
            .collect()
    }

    /// Search grid with every wall blocked and everything else open
    pub fn visit_grid(&self) -> VisitGrid {
        let (rows, cols) = self.dimensions();
        VisitGrid::from_fn(rows, cols, |coord| self.is_wall(coord))
    }

    /// Whether two mazes agree on which cells are walls
    pub fn same_walls(&self, other: &Self) -> bool {
        self.dimensions() == other.dimensions()
            && self
                .cells
                .iter()
                .zip(other.cells.iter())
                .all(|(a, b)| a.is_wall() == b.is_wall())
    }
}

/// Round an even side length up to the next odd one
pub const fn odd_dimension(size: usize) -> usize {
    if size % 2 == 0 { size + 1 } else { size }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses the text form produced by `Display`: `#` wall, space empty, `*` entrance
///
/// Trailing spaces may be trimmed by editors, so short rows are padded with
/// empty cells up to the longest row.
impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = text.lines().collect();
        let height = lines.len();
        let width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);

        if height == 0 || width == 0 {
            return Err(invalid_source_data(&"maze text is empty"));
        }

        let mut cells = Array2::from_elem((height, width), Cell::Empty);
        for (row, line) in lines.iter().enumerate() {
            for (col, symbol) in line.chars().enumerate() {
                let cell = match symbol {
                    '#' => Cell::Wall,
                    ' ' => Cell::Empty,
                    '*' => Cell::Entrance,
                    other => {
                        return Err(invalid_source_data(&format!(
                            "unexpected symbol {other:?} at row {row}, column {col}"
                        )));
                    }
                };
                if let Some(slot) = cells.get_mut([row, col]) {
                    *slot = cell;
                }
            }
        }

        Ok(Self::from_cells(cells))
    }
}
