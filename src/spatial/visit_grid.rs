//! Scratch visitation grid shared by maze carving and breadth-first search
//!
//! Each cell holds one flag. During generation the flag means "visited"; for
//! search the grid is seeded with walls as already visited, so the same flag
//! also reads as "blocked". The grid is bit-packed and lives only for the
//! duration of a single generate or solve call.

use bitvec::prelude::*;
use ndarray::Array2;
use std::collections::VecDeque;

use crate::spatial::coordinate::Coord;

/// Bit-packed visited/blocked flags mirroring a maze's dimensions
#[derive(Clone, Debug)]
pub struct VisitGrid {
    bits: BitVec,
    rows: usize,
    cols: usize,
}

impl VisitGrid {
    /// Create a grid with every cell unvisited
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            bits: bitvec![0; rows * cols],
            rows,
            cols,
        }
    }

    /// Create a grid whose initial flags come from `visited`
    pub fn from_fn(rows: usize, cols: usize, mut visited: impl FnMut(Coord) -> bool) -> Self {
        let mut grid = Self::new(rows, cols);
        for row in 0..rows {
            for col in 0..cols {
                let coord = Coord::from_index(row, col);
                if visited(coord) {
                    grid.visit(coord);
                }
            }
        }
        grid
    }

    /// Grid shape as `(rows, cols)`
    pub const fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Check the coordinate lies within `[0, cols) x [0, rows)`
    pub const fn is_legal(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.cols
            && (coord.y as usize) < self.rows
    }

    fn offset(&self, coord: Coord) -> Option<usize> {
        self.is_legal(coord)
            .then(|| coord.y as usize * self.cols + coord.x as usize)
    }

    /// Mark a cell visited; out-of-range coordinates are ignored
    pub fn visit(&mut self, coord: Coord) {
        if let Some(offset) = self.offset(coord) {
            self.bits.set(offset, true);
        }
    }

    /// Test the flag; out-of-range coordinates read as visited
    pub fn is_visited(&self, coord: Coord) -> bool {
        self.offset(coord)
            .is_none_or(|offset| self.bits.get(offset).is_none_or(|bit| *bit))
    }

    /// Inverse of [`Self::is_visited`]
    pub fn is_not_visited(&self, coord: Coord) -> bool {
        !self.is_visited(coord)
    }

    /// Every unvisited coordinate in row-major order
    pub fn not_visited(&self) -> Vec<Coord> {
        self.bits
            .iter_zeros()
            .map(|offset| Coord::from_index(offset / self.cols, offset % self.cols))
            .collect()
    }

    /// Number of unvisited cells
    pub fn not_visited_count(&self) -> usize {
        self.bits.count_zeros()
    }

    /// Test whether any cell is still unvisited
    pub fn has_unvisited(&self) -> bool {
        self.bits.not_all()
    }

    /// Shortest path between two cells over unvisited (open) cells
    ///
    /// Both endpoints are normalized against the grid shape first, so `-1`
    /// addresses the last row or column. The returned path includes both
    /// endpoints. It is empty when `end` cannot be reached. The search
    /// consumes the grid: every cell it reaches is left visited.
    pub fn bfs(&mut self, start: Coord, end: Coord) -> Vec<Coord> {
        let start = start.normalize(self.shape());
        let end = end.normalize(self.shape());

        if !self.is_legal(start) || !self.is_legal(end) {
            return Vec::new();
        }
        if start == end {
            return vec![start];
        }

        let mut came_from: Array2<Option<Coord>> =
            Array2::from_elem((self.rows, self.cols), None);
        let mut queue = VecDeque::from([start]);
        self.visit(start);

        while let Some(current) = queue.pop_front() {
            for neighbor in current.neighborhood(1) {
                if self.is_visited(neighbor) {
                    continue;
                }

                if let Some(slot) = neighbor.to_index().and_then(|index| came_from.get_mut(index)) {
                    *slot = Some(current);
                }
                self.visit(neighbor);

                if neighbor == end {
                    return Self::trace_back(end, &came_from);
                }
                queue.push_back(neighbor);
            }
        }

        Vec::new()
    }

    // Walks back-pointers from `end` until a cell with no predecessor (the start)
    fn trace_back(end: Coord, came_from: &Array2<Option<Coord>>) -> Vec<Coord> {
        let mut path = vec![end];
        let mut current = end;
        while let Some(previous) = current
            .to_index()
            .and_then(|index| came_from.get(index).copied().flatten())
        {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        path
    }
}
