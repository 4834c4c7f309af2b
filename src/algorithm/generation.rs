//! Perfect maze generation by randomized depth-first carving
//!
//! Carving runs on the odd/odd room cells of the skeleton. From the current
//! room a random unvisited room two steps away is chosen and the wall cell
//! between them is removed; dead ends backtrack through a LIFO stack. When
//! the stack empties while rooms are still unvisited, carving restarts from a
//! random unvisited room, and connectivity repair joins the resulting regions
//! afterwards.

use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::algorithm::connectivity::connect_regions;
use crate::io::configuration::{DEFAULT_ENTER_COL, DEFAULT_EXIT_COL, MIN_DIMENSION};
use crate::io::error::{MazeError, Result, invalid_parameter, invalid_source_data};
use crate::io::progress::ProgressReporter;
use crate::spatial::coordinate::is_even;
use crate::spatial::{Cell, Coord, Maze, VisitGrid};

/// Uniformly pick one element of a non-empty slice
pub(crate) fn choose<T: Copy, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Option<T> {
    if items.is_empty() {
        None
    } else {
        items.get(rng.random_range(0..items.len())).copied()
    }
}

impl Maze {
    /// Carve a perfect maze starting from `start` using the default seed source
    ///
    /// # Errors
    ///
    /// See [`Maze::generate_with_progress`]
    pub fn generate_seeded(&mut self, start: Coord, seed: u64) -> Result<()> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate(start, &mut rng)
    }

    /// Carve a perfect maze starting from `start`
    ///
    /// # Errors
    ///
    /// See [`Maze::generate_with_progress`]
    pub fn generate<R: Rng + ?Sized>(&mut self, start: Coord, rng: &mut R) -> Result<()> {
        self.generate_with_progress(start, rng, &ProgressReporter::hidden())
    }

    /// Carve a perfect maze starting from `start`, reporting carved rooms
    ///
    /// The maze is reset to its skeleton first, so generating twice never
    /// merges two mazes. After carving, one entrance is opened on the left
    /// border and one on the right border.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either dimension is smaller than 3 or even
    /// - `start` is not an interior room cell (odd row and odd column)
    pub fn generate_with_progress<R: Rng + ?Sized>(
        &mut self,
        start: Coord,
        rng: &mut R,
        progress: &ProgressReporter,
    ) -> Result<()> {
        let (rows, cols) = self.dimensions();
        if rows < MIN_DIMENSION || cols < MIN_DIMENSION {
            return Err(invalid_parameter(
                "dimensions",
                &format!("{rows}x{cols}"),
                &format!("both sides must be at least {MIN_DIMENSION}"),
            ));
        }
        if is_even(rows as i32) || is_even(cols as i32) {
            return Err(invalid_parameter(
                "dimensions",
                &format!("{rows}x{cols}"),
                &"both sides must be odd",
            ));
        }

        *self = Self::new(rows, cols);
        if !self.is_legal(start) || self.is_wall(start) {
            return Err(invalid_parameter(
                "start",
                &start,
                &"must be an interior cell with odd row and column",
            ));
        }

        // Walls and the border are never carving targets
        let mut visited = VisitGrid::from_fn(rows, cols, |coord| {
            !self.is_legal(coord) || self.is_wall(coord)
        });

        let rooms = visited.not_visited_count();
        let progress = progress.phase(rooms, "Generating maze");
        debug!("Carving {rows}x{cols} maze with {rooms} rooms from {start}");

        visited.visit(start);
        progress.inc(1);

        let mut current = start;
        let mut backtrack: Vec<Coord> = Vec::new();
        let mut restarts = 0usize;

        while visited.has_unvisited() {
            let candidates: Vec<Coord> = current
                .neighborhood(2)
                .into_iter()
                .filter(|&coord| self.is_legal(coord) && visited.is_not_visited(coord))
                .collect();

            if let Some(next) = choose(&candidates, rng) {
                backtrack.push(current);
                self.remove_wall_between(current, next)?;
                visited.visit(next);
                progress.inc(1);
                current = next;
            } else if let Some(previous) = backtrack.pop() {
                current = previous;
            } else {
                let Some(jump) = choose(&visited.not_visited(), rng) else {
                    break;
                };
                restarts += 1;
                visited.visit(jump);
                progress.inc(1);
                current = jump;
            }
        }
        progress.finish();

        if restarts > 0 {
            debug!("Carving restarted {restarts} times; joining regions");
        }
        connect_regions(self, rng)?;

        self.create_entrance(DEFAULT_ENTER_COL, rng)?;
        self.create_entrance(DEFAULT_EXIT_COL, rng)?;
        debug!("Generated maze with entrances {:?}", self.entrances());

        Ok(())
    }

    /// Open the wall cell lying midway between two cells on the same line
    ///
    /// Returns the coordinate that was opened.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidGeometry`] when the cells differ on both
    /// axes or on neither
    pub fn remove_wall_between(&mut self, first: Coord, second: Coord) -> Result<Coord> {
        let same_col = first.x == second.x;
        let same_row = first.y == second.y;

        let middle = match (same_col, same_row) {
            (true, false) => first.min_by_y(second).to_down(1),
            (false, true) => first.min_by_x(second).to_right(1),
            _ => return Err(MazeError::InvalidGeometry { first, second }),
        };

        self.set(middle, Cell::Empty);
        Ok(middle)
    }

    /// Open an entrance on a border column
    ///
    /// `col` may be negative (`-1` is the rightmost column). The column just
    /// inside that border is scanned for passable cells and one of their rows
    /// is picked uniformly; the border cell on that row becomes the entrance.
    ///
    /// # Errors
    ///
    /// Returns an error if `col` is not a border column or no passable cell
    /// lies next to it
    pub fn create_entrance<R: Rng + ?Sized>(&mut self, col: i32, rng: &mut R) -> Result<Coord> {
        let inner = self.inner_column(col)?;
        let col = Coord::new(col, 0).normalize(self.dimensions()).x;

        let rows: Vec<i32> = (1..self.height().saturating_sub(1) as i32)
            .filter(|&row| self.get(Coord::new(inner, row)) == Some(Cell::Empty))
            .collect();

        let row = choose(&rows, rng).ok_or_else(|| {
            invalid_source_data(&format!("no open cell next to border column {col}"))
        })?;

        let entrance = Coord::new(col, row);
        self.set(entrance, Cell::Entrance);
        Ok(entrance)
    }

    // Column adjacent to the given border column, on the interior side
    pub(crate) fn inner_column(&self, col: i32) -> Result<i32> {
        let width = self.width() as i32;
        let normalized = Coord::new(col, 0).normalize(self.dimensions()).x;

        if normalized == 0 {
            Ok(1)
        } else if normalized == width - 1 {
            Ok(width - 2)
        } else {
            Err(invalid_parameter(
                "col",
                &col,
                &format!("entrances live on border column 0 or {}", width - 1),
            ))
        }
    }
}

impl Coord {
    const fn min_by_x(self, other: Self) -> Self {
        if other.x < self.x { other } else { self }
    }

    const fn min_by_y(self, other: Self) -> Self {
        if other.y < self.y { other } else { self }
    }
}
