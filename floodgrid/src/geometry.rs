//! Integer directions and line-of-sight queries, independent of any grid.

/// An integer point in a (row, column) frame where row increases downward.
/// Doubles as a grid index and as a free 2-D point for sight-line tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: isize,
    pub col: isize,
}

impl Position {
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }
}

/// A step vector in the (row, column) frame. The four unit constants cover
/// axis-aligned movement; rotation keeps unit vectors unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub di: isize,
    pub dj: isize,
}

pub const UP: Direction = Direction::new(-1, 0);
pub const RIGHT: Direction = Direction::new(0, 1);
pub const DOWN: Direction = Direction::new(1, 0);
pub const LEFT: Direction = Direction::new(0, -1);

impl Direction {
    pub const fn new(di: isize, dj: isize) -> Self {
        Self { di, dj }
    }

    /// Rotate 90 degrees clockwise: (di, dj) -> (dj, -di).
    pub const fn turn_right(self) -> Self {
        Self::new(self.dj, -self.di)
    }

    /// Rotate 90 degrees counter-clockwise: (di, dj) -> (-dj, di).
    pub const fn turn_left(self) -> Self {
        Self::new(-self.dj, self.di)
    }
}

/// Whether `target` lies on the infinite line through `viewpoint` with
/// slope `direction`.
///
/// Exact integer cross-product test, no floating point. Does not check
/// that the target is on the forward ray, nor for intervening obstacles;
/// a target coincident with the viewpoint is always visible. Any integer
/// direction vector is accepted.
pub fn can_see(viewpoint: Position, target: Position, direction: Direction) -> bool {
    let dv = target.row - viewpoint.row;
    if direction.di == 0 && dv != 0 {
        // may not move vertically
        return false;
    }
    let dh = target.col - viewpoint.col;
    if direction.dj == 0 && dh != 0 {
        // may not move horizontally
        return false;
    }
    dv * direction.dj == dh * direction.di
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(UP, RIGHT)]
    #[case(RIGHT, DOWN)]
    #[case(DOWN, LEFT)]
    #[case(LEFT, UP)]
    fn test_turn_right(#[case] from: Direction, #[case] expected: Direction) {
        assert_eq!(expected, from.turn_right());
    }

    #[rstest]
    #[case(UP, LEFT)]
    #[case(LEFT, DOWN)]
    #[case(DOWN, RIGHT)]
    #[case(RIGHT, UP)]
    fn test_turn_left(#[case] from: Direction, #[case] expected: Direction) {
        assert_eq!(expected, from.turn_left());
    }

    #[rstest]
    #[case(UP)]
    #[case(RIGHT)]
    #[case(DOWN)]
    #[case(LEFT)]
    fn test_rotation_laws(#[case] direction: Direction) {
        assert_eq!(direction, direction.turn_right().turn_left());
        assert_eq!(direction, direction.turn_left().turn_right());

        let full_circle = direction
            .turn_right()
            .turn_right()
            .turn_right()
            .turn_right();
        assert_eq!(direction, full_circle);
    }

    #[rstest]
    #[case((0, 0), (3, 0), (1, 0), true)] // straight down the column
    #[case((0, 0), (3, 1), (1, 0), false)] // off the column
    #[case((0, 0), (2, 2), (1, 1), true)] // diagonal slope match
    #[case((0, 0), (0, 5), (0, 1), true)] // straight along the row
    #[case((0, 0), (1, 0), (0, 1), false)] // off the row
    #[case((2, 2), (2, 2), (1, 0), true)] // coincident points
    #[case((0, 0), (1, 1), (2, 2), true)] // non-unit direction, same line
    #[case((0, 0), (1, 2), (2, 2), false)]
    #[case((5, 5), (3, 7), (-1, 1), true)] // opposite ray still counts
    fn test_can_see(
        #[case] viewpoint: (isize, isize),
        #[case] target: (isize, isize),
        #[case] direction: (isize, isize),
        #[case] expected: bool,
    ) {
        let result = can_see(
            Position::new(viewpoint.0, viewpoint.1),
            Position::new(target.0, target.1),
            Direction::new(direction.0, direction.1),
        );
        assert_eq!(expected, result);
    }
}
