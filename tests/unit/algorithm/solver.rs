//! Tests for breadth-first solving, entrance lookup and the solution overlay

#[cfg(test)]
mod tests {
    use labyrinth::{Cell, Coord, Maze};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn maze(rows: &[&str]) -> Maze {
        rows.join("\n").parse().expect("valid maze text")
    }

    fn winding() -> Maze {
        maze(&[
            "#########",
            "*   #   #",
            "### # # #",
            "#     # *",
            "#########",
        ])
    }

    // Tests the unique route is found and every cell on it is marked
    // Verified by marking only the interior of the path
    #[test]
    fn test_solve_marks_unique_path() {
        let mut maze = winding();

        let path = maze.solve().expect("solvable");

        assert_eq!(path.len(), 15);
        assert_eq!(path.first(), Some(&Coord::new(0, 1)));
        assert_eq!(path.last(), Some(&Coord::new(8, 3)));
        assert_eq!(maze.count(Cell::Entrance), 15);
        for coord in &path {
            assert_eq!(maze.get(*coord), Some(Cell::Entrance));
        }
        // Dead end stays unmarked
        assert_eq!(maze.get(Coord::new(1, 3)), Some(Cell::Empty));
    }

    // Tests consecutive path cells are orthogonal neighbors
    // Verified by returning back-pointers in discovery order
    #[test]
    fn test_path_is_contiguous() {
        let mut maze = winding();

        let path = maze.solve().expect("solvable");

        for pair in path.windows(2) {
            if let [a, b] = pair {
                assert!(a.neighborhood(1).contains(b), "{a} -> {b}");
            }
        }
    }

    // Tests solving twice produces the same overlay
    // Verified by skipping the overlay reset before solving
    #[test]
    fn test_solve_is_idempotent() {
        let mut maze = winding();

        let first_path = maze.solve().expect("solvable");
        let first = maze.clone();
        let second_path = maze.solve().expect("solvable");

        assert_eq!(first_path, second_path);
        assert_eq!(first, maze);
    }

    // Tests an unsolvable maze is left exactly as it was
    // Verified by leaving the entrances reset to empty
    #[test]
    fn test_no_path_leaves_maze_unchanged() {
        let mut maze = maze(&["#####", "*# #*", "#####"]);
        let before = maze.clone();

        let path = maze.solve().expect("entrances exist");

        assert!(path.is_empty());
        assert_eq!(maze, before);
    }

    // Tests missing entrances are created beside the inner column
    // Verified by failing when no entrance is marked
    #[test]
    fn test_missing_entrances_are_created() {
        let mut maze = maze(&["#####", "#   #", "#####"]);

        let path = maze.solve().expect("solvable");

        assert_eq!(
            path,
            vec![
                Coord::new(0, 1),
                Coord::new(1, 1),
                Coord::new(2, 1),
                Coord::new(3, 1),
                Coord::new(4, 1),
            ]
        );
        assert_eq!(maze.count(Cell::Entrance), 5);
    }

    #[test]
    fn test_straight_corridor() {
        let mut maze = maze(&["#####", "*   *", "#####"]);

        assert_eq!(maze.solve().map(|path| path.len()).ok(), Some(5));
        assert_eq!(maze.count(Cell::Empty), 0);
    }

    // Tests the topmost entrance on a column wins and is reset to empty
    // Verified by picking the last entrance found
    #[test]
    fn test_find_entrance_prefers_topmost() {
        let mut maze = maze(&["#####", "*   #", "#   #", "*   #", "#####"]);
        let mut rng = StdRng::seed_from_u64(0);

        let entrance = maze.find_entrance(0, &mut rng).expect("entrance present");

        assert_eq!(entrance, Coord::new(0, 1));
        assert_eq!(maze.get(entrance), Some(Cell::Empty));
        assert_eq!(maze.get(Coord::new(0, 3)), Some(Cell::Entrance));
    }

    #[test]
    fn test_solve_between_rejects_interior_column() {
        let mut maze = winding();
        let mut rng = StdRng::seed_from_u64(0);

        assert!(maze.solve_between(3, -1, &mut rng).is_err());
    }

    // Tests the overlay reset keeps border entrances
    // Verified by clearing every entrance cell
    #[test]
    fn test_clear_solution_keeps_border_entrances() {
        let mut maze = winding();
        maze.solve().expect("solvable");

        maze.clear_solution();

        assert_eq!(maze, winding());
    }

    #[test]
    fn test_mark_path() {
        let mut maze = Maze::new(5, 5);

        maze.mark_path(&[Coord::new(1, 1), Coord::new(1, 2)]);

        assert_eq!(maze.count(Cell::Entrance), 2);
    }

    // Tests a generated maze solves from its left entrance to its right one
    // Verified by swapping the default enter and exit columns
    #[test]
    fn test_solve_generated_maze() {
        let mut maze = Maze::new(31, 31);
        maze.generate_seeded(Coord::new(1, 1), 2024)
            .expect("generation succeeds");
        let entrances = maze.entrances();

        let path = maze.solve().expect("solvable");

        assert!(path.len() >= 31);
        assert_eq!(path.first().map(|coord| coord.x), Some(0));
        assert_eq!(path.last().map(|coord| coord.x), Some(30));
        assert!(entrances.iter().all(|coord| path.contains(coord)));
    }
}
