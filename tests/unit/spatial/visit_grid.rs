//! Tests for the bit-packed visitation grid and its breadth-first search

#[cfg(test)]
mod tests {
    use labyrinth::{Coord, VisitGrid};

    // Tests visiting marks exactly one cell and out-of-range reads as visited
    // Verified by making out-of-range cells read as unvisited
    #[test]
    fn test_visit_flags() {
        let mut grid = VisitGrid::new(3, 4);

        assert!(grid.is_not_visited(Coord::new(3, 2)));
        grid.visit(Coord::new(3, 2));
        assert!(grid.is_visited(Coord::new(3, 2)));
        assert!(grid.is_not_visited(Coord::new(-1, -1).normalize((3, 4)).to_left(1)));

        assert!(grid.is_visited(Coord::new(4, 0)));
        assert!(grid.is_visited(Coord::new(0, -1)));
        assert_eq!(grid.not_visited_count(), 11);
    }

    // Tests unvisited cells are listed in row-major order
    // Verified by iterating columns first
    #[test]
    fn test_not_visited_row_major() {
        let grid = VisitGrid::from_fn(2, 3, |coord| coord.x == 1);

        assert_eq!(
            grid.not_visited(),
            vec![
                Coord::new(0, 0),
                Coord::new(2, 0),
                Coord::new(0, 1),
                Coord::new(2, 1),
            ]
        );
    }

    #[test]
    fn test_has_unvisited() {
        let mut grid = VisitGrid::new(1, 2);
        assert!(grid.has_unvisited());

        grid.visit(Coord::new(0, 0));
        grid.visit(Coord::new(1, 0));
        assert!(!grid.has_unvisited());
    }

    // Tests neighbor expansion order top, down, left, right on an open grid
    // Verified by expanding left before top
    #[test]
    fn test_bfs_open_grid_path() {
        let mut grid = VisitGrid::new(3, 3);

        let path = grid.bfs(Coord::new(0, 0), Coord::new(2, 2));

        assert_eq!(
            path,
            vec![
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(0, 2),
                Coord::new(1, 2),
                Coord::new(2, 2),
            ]
        );
    }

    // Tests search routes around blocked cells
    // Verified by ignoring the blocked flag for neighbors
    #[test]
    fn test_bfs_detour() {
        // .#.
        // .#.
        // ...
        let mut grid = VisitGrid::from_fn(3, 3, |coord| coord.x == 1 && coord.y < 2);

        let path = grid.bfs(Coord::new(0, 0), Coord::new(2, 0));

        assert_eq!(path.len(), 7);
        assert_eq!(path.first(), Some(&Coord::new(0, 0)));
        assert_eq!(path.last(), Some(&Coord::new(2, 0)));
        assert!(!path.contains(&Coord::new(1, 0)));
        assert!(!path.contains(&Coord::new(1, 1)));
    }

    // Tests negative endpoints address the far edges
    // Verified by skipping normalization of the end point
    #[test]
    fn test_bfs_normalizes_endpoints() {
        let mut grid = VisitGrid::new(1, 4);

        let path = grid.bfs(Coord::new(0, 0), Coord::new(-1, -1));

        assert_eq!(path.last(), Some(&Coord::new(3, 0)));
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn test_bfs_unreachable_is_empty() {
        let mut grid = VisitGrid::from_fn(1, 3, |coord| coord.x == 1);

        assert!(grid.bfs(Coord::new(0, 0), Coord::new(2, 0)).is_empty());
    }

    #[test]
    fn test_bfs_same_endpoint() {
        let mut grid = VisitGrid::new(2, 2);

        assert_eq!(
            grid.bfs(Coord::new(1, 1), Coord::new(1, 1)),
            vec![Coord::new(1, 1)]
        );
    }

    #[test]
    fn test_bfs_out_of_range_endpoint() {
        let mut grid = VisitGrid::new(2, 2);

        assert!(grid.bfs(Coord::new(0, 0), Coord::new(5, 0)).is_empty());
    }
}
