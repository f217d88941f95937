use crate::geometry::Position;

/// A grid cell snapshot: coordinates plus the value found at them when the
/// tile was built. Equality and hashing cover the full (row, col, value)
/// triple, so tiles from grids of different value types must not be mixed
/// in one visited set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile<T> {
    pub row: usize,
    pub col: usize,
    pub value: T,
}

impl<T> Tile<T> {
    pub fn new(row: usize, col: usize, value: T) -> Self {
        Self { row, col, value }
    }

    /// The tile's coordinates as a free-standing integer point.
    pub fn position(&self) -> Position {
        Position::new(self.row as isize, self.col as isize)
    }
}

/// Match predicate that accepts every in-bounds neighbour: pure adjacency,
/// values ignored.
pub fn match_always<T>(_tile: &Tile<T>, _neighbour: &Tile<T>) -> bool {
    true
}

/// Match predicate that accepts a neighbour only when it holds the same
/// value as the tile being expanded.
pub fn match_value<T: PartialEq>(tile: &Tile<T>, neighbour: &Tile<T>) -> bool {
    tile.value == neighbour.value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_equality_includes_value() {
        let a = Tile::new(0, 0, 'A');
        let b = Tile::new(0, 0, 'B');

        assert_ne!(a, b);
        assert_eq!(a, Tile::new(0, 0, 'A'));
    }

    #[test]
    fn test_match_predicates() {
        let a = Tile::new(1, 1, 'A');
        let b = Tile::new(1, 2, 'B');
        let a2 = Tile::new(2, 1, 'A');

        assert!(match_always(&a, &b));
        assert!(!match_value(&a, &b));
        assert!(match_value(&a, &a2));
    }

    #[test]
    fn test_position() {
        let tile = Tile::new(3, 7, 'x');
        assert_eq!(tile.position(), Position::new(3, 7));
    }
}
