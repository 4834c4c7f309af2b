//! Tests for coordinate stepping, neighborhoods and negative-index normalization

#[cfg(test)]
mod tests {
    use labyrinth::spatial::coordinate::{Coord, is_even, is_odd};

    // Tests each direction moves along exactly one axis by the stride
    // Verified by swapping the signs of to_top and to_down
    #[test]
    fn test_directional_steps() {
        let origin = Coord::new(5, 5);

        assert_eq!(origin.to_top(1), Coord::new(5, 4));
        assert_eq!(origin.to_down(2), Coord::new(5, 7));
        assert_eq!(origin.to_left(3), Coord::new(2, 5));
        assert_eq!(origin.to_right(1), Coord::new(6, 5));
    }

    // Tests neighborhood order is top, down, left, right with no diagonals
    // Verified by reordering the neighborhood array
    #[test]
    fn test_neighborhood_order() {
        let center = Coord::new(3, 3);

        assert_eq!(
            center.neighborhood(1),
            [
                Coord::new(3, 2),
                Coord::new(3, 4),
                Coord::new(2, 3),
                Coord::new(4, 3),
            ]
        );
        assert_eq!(
            center.neighborhood(2),
            [
                Coord::new(3, 1),
                Coord::new(3, 5),
                Coord::new(1, 3),
                Coord::new(5, 3),
            ]
        );
    }

    // Tests negative components count back from the far edge of each axis
    // Verified by normalizing x against rows instead of cols
    #[test]
    fn test_normalize_negative_components() {
        let shape = (5, 9);

        assert_eq!(Coord::new(-1, 0).normalize(shape), Coord::new(8, 0));
        assert_eq!(Coord::new(0, -1).normalize(shape), Coord::new(0, 4));
        assert_eq!(Coord::new(-2, -2).normalize(shape), Coord::new(7, 3));
    }

    // Tests non-negative components pass through unchanged, even out of range
    // Verified by clamping positive values to the shape
    #[test]
    fn test_normalize_non_negative_passthrough() {
        let shape = (5, 5);

        assert_eq!(Coord::new(3, 2).normalize(shape), Coord::new(3, 2));
        assert_eq!(Coord::new(12, 0).normalize(shape), Coord::new(12, 0));
    }

    // Tests conversion to row-major indices and back
    // Verified by returning [x, y] instead of [y, x]
    #[test]
    fn test_index_conversion() {
        let coord = Coord::new(4, 1);

        assert_eq!(coord.to_index(), Some([1, 4]));
        assert_eq!(Coord::from_index(1, 4), coord);
        assert_eq!(Coord::new(-1, 2).to_index(), None);
    }

    #[test]
    fn test_parity_helpers() {
        assert!(is_even(0));
        assert!(is_even(-2));
        assert!(is_odd(3));
        assert!(is_odd(-1));
        assert_eq!(Coord::from((2, 7)), Coord::new(2, 7));
        assert_eq!(Coord::new(2, 7).to_string(), "(2, 7)");
    }
}
