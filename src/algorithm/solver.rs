//! Breadth-first maze solving between two border entrances

use log::{debug, info};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::configuration::{DEFAULT_ENTER_COL, DEFAULT_EXIT_COL, DEFAULT_SEED};
use crate::io::error::Result;
use crate::spatial::{Cell, Coord, Maze};

impl Maze {
    /// Solve from the left border to the right border
    ///
    /// Entrances missing from either border are recreated with the default
    /// seed, so repeated calls on the same maze are deterministic.
    ///
    /// # Errors
    ///
    /// See [`Maze::solve_between`]
    pub fn solve(&mut self) -> Result<Vec<Coord>> {
        let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);
        self.solve_between(DEFAULT_ENTER_COL, DEFAULT_EXIT_COL, &mut rng)
    }

    /// Find the shortest path between two border columns and mark it
    ///
    /// Any earlier solution overlay is cleared first, so solving twice marks
    /// the same path. Every cell on the path, both entrances included, is set
    /// to [`Cell::Entrance`]. When no path exists the maze is left as it was
    /// and an empty path is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if a column is not a border column, or if an entrance
    /// has to be created and no open cell lies next to that border
    pub fn solve_between<R: Rng + ?Sized>(
        &mut self,
        enter_col: i32,
        exit_col: i32,
        rng: &mut R,
    ) -> Result<Vec<Coord>> {
        self.clear_solution();
        let path = self.solved_path(enter_col, exit_col, rng)?;
        if path.is_empty() {
            info!("No path between border columns {enter_col} and {exit_col}");
        } else {
            self.mark_path(&path);
            debug!("Marked path of {} cells", path.len());
        }
        Ok(path)
    }

    /// Shortest path between the entrances on two border columns
    ///
    /// The entrances are looked up (or created) and restored afterwards, so
    /// the maze is unchanged by this call apart from any newly created
    /// entrance. The path is empty when the exit is unreachable.
    ///
    /// # Errors
    ///
    /// See [`Maze::solve_between`]
    pub fn solved_path<R: Rng + ?Sized>(
        &mut self,
        enter_col: i32,
        exit_col: i32,
        rng: &mut R,
    ) -> Result<Vec<Coord>> {
        let start = self.find_entrance(enter_col, rng)?;
        let end = self.find_entrance(exit_col, rng)?;

        let mut grid = self.visit_grid();
        let path = grid.bfs(start, end);

        self.set(start, Cell::Entrance);
        self.set(end, Cell::Entrance);

        Ok(path)
    }

    /// Locate the entrance on a border column, creating one if none is marked
    ///
    /// The column is scanned top to bottom and the first entrance wins. The
    /// returned cell is reset to [`Cell::Empty`] so that search treats it as
    /// an ordinary open cell.
    ///
    /// # Errors
    ///
    /// See [`Maze::create_entrance`]
    pub fn find_entrance<R: Rng + ?Sized>(&mut self, col: i32, rng: &mut R) -> Result<Coord> {
        // Validates that `col` is a border column
        self.inner_column(col)?;
        let border = Coord::new(col, 0).normalize(self.dimensions()).x;

        let found = (0..self.height() as i32)
            .map(|row| Coord::new(border, row))
            .find(|&coord| self.get(coord) == Some(Cell::Entrance));

        let entrance = if let Some(coord) = found {
            coord
        } else {
            debug!("Entrance not found on column {border}; creating one");
            self.create_entrance(col, rng)?
        };

        self.set(entrance, Cell::Empty);
        Ok(entrance)
    }

    /// Mark every cell on `path` as part of the solution overlay
    pub fn mark_path(&mut self, path: &[Coord]) {
        for &coord in path {
            self.set(coord, Cell::Entrance);
        }
    }

    /// Reset the solution overlay, keeping entrances on the border columns
    pub fn clear_solution(&mut self) {
        let last = self.width().saturating_sub(1) as i32;
        for coord in self.coords_where(|cell| cell == Cell::Entrance) {
            if coord.x != 0 && coord.x != last {
                self.set(coord, Cell::Empty);
            }
        }
    }
}
