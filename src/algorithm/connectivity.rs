//! Region labelling and repair for carved mazes
//!
//! Restarted carving runs can leave pockets that never share an opened wall
//! with the rest of the maze. Repair labels the interior's open regions and
//! opens exactly one wall per merge until a single region remains, which
//! keeps a perfect maze a tree.

use log::debug;
use ndarray::Array2;
use rand::Rng;
use std::collections::VecDeque;

use crate::algorithm::generation::choose;
use crate::io::error::{Result, invalid_source_data};
use crate::spatial::{Cell, Coord, Maze};

/// Connected-component labels for the open interior cells of a maze
#[derive(Debug, Clone)]
pub struct RegionMap {
    labels: Array2<Option<usize>>,
    count: usize,
}

impl RegionMap {
    /// Label every open interior cell by its 4-connected region
    ///
    /// Regions are numbered in row-major order of their first cell.
    pub fn label(maze: &Maze) -> Self {
        let mut labels = Array2::from_elem(maze.dimensions(), None);
        let mut count = 0;

        for seed in maze.coords_where(|cell| !cell.is_wall()) {
            if !maze.is_legal(seed) || Self::label_at(&labels, seed).is_some() {
                continue;
            }

            let mut queue = VecDeque::from([seed]);
            Self::assign(&mut labels, seed, count);
            while let Some(current) = queue.pop_front() {
                for neighbor in current.neighborhood(1) {
                    if maze.is_legal(neighbor)
                        && maze.is_empty(neighbor)
                        && Self::label_at(&labels, neighbor).is_none()
                    {
                        Self::assign(&mut labels, neighbor, count);
                        queue.push_back(neighbor);
                    }
                }
            }
            count += 1;
        }

        Self { labels, count }
    }

    fn label_at(labels: &Array2<Option<usize>>, coord: Coord) -> Option<usize> {
        coord
            .to_index()
            .and_then(|index| labels.get(index).copied().flatten())
    }

    fn assign(labels: &mut Array2<Option<usize>>, coord: Coord, region: usize) {
        if let Some(slot) = coord.to_index().and_then(|index| labels.get_mut(index)) {
            *slot = Some(region);
        }
    }

    /// Region of an open interior cell
    pub fn region(&self, coord: Coord) -> Option<usize> {
        Self::label_at(&self.labels, coord)
    }

    /// Number of distinct regions
    pub const fn count(&self) -> usize {
        self.count
    }

    // Interior walls whose opposite neighbors along one axis belong to
    // region 0 and some other region
    fn bridges(&self, maze: &Maze) -> Vec<Coord> {
        maze.coords_where(Cell::is_wall)
            .into_iter()
            .filter(|&wall| maze.is_legal(wall))
            .filter(|&wall| {
                [
                    (wall.to_top(1), wall.to_down(1)),
                    (wall.to_left(1), wall.to_right(1)),
                ]
                .into_iter()
                .any(|(a, b)| match (self.region(a), self.region(b)) {
                    (Some(ra), Some(rb)) => ra != rb && (ra == 0 || rb == 0),
                    _ => false,
                })
            })
            .collect()
    }
}

/// Whether all open interior cells form a single region
pub fn is_connected(maze: &Maze) -> bool {
    RegionMap::label(maze).count() <= 1
}

/// Open walls until the interior is one connected region
///
/// Each round picks one wall bordering the first region at random and opens
/// it. Returns the number of walls opened.
///
/// # Errors
///
/// Returns an error if two regions are separated by more than a single wall
/// cell, which cannot happen on a carving skeleton
pub fn connect_regions<R: Rng + ?Sized>(maze: &mut Maze, rng: &mut R) -> Result<usize> {
    let mut opened = 0;

    loop {
        let regions = RegionMap::label(maze);
        if regions.count() <= 1 {
            break;
        }

        let bridge = choose(&regions.bridges(maze), rng).ok_or_else(|| {
            invalid_source_data(&format!(
                "{} regions cannot be joined through a single wall",
                regions.count()
            ))
        })?;

        debug!("Joining regions through {bridge}");
        maze.set(bridge, Cell::Empty);
        opened += 1;
    }

    Ok(opened)
}
