use crate::consts::{GRID_HEIGHT, GRID_WIDTH};

/// A cell on the playing field.  `(0, 0)` is the top-left corner; `x` grows
/// rightwards and `y` grows downwards.
///
/// Coordinates are signed so that a snake that has just run off the edge of
/// the field can still be represented.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct Position {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Position {
    pub(crate) const fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }

    /// Is the position inside the playing field?
    pub(crate) fn in_bounds(self) -> bool {
        (0..GRID_WIDTH).contains(&self.x) && (0..GRID_HEIGHT).contains(&self.y)
    }

    /// The cell at the center of the field
    pub(crate) const fn center() -> Position {
        Position::new(GRID_WIDTH / 2, GRID_HEIGHT / 2)
    }

    /// Iterate over every cell of the field, column by column
    pub(crate) fn all() -> impl Iterator<Item = Position> {
        (0..GRID_WIDTH).flat_map(|x| (0..GRID_HEIGHT).map(move |y| Position::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Position::new(0, 0), true)]
    #[case(Position::new(29, 19), true)]
    #[case(Position::new(15, 10), true)]
    #[case(Position::new(-1, 5), false)]
    #[case(Position::new(5, -1), false)]
    #[case(Position::new(30, 5), false)]
    #[case(Position::new(5, 20), false)]
    #[case(Position::new(30, 20), false)]
    fn test_in_bounds(#[case] pos: Position, #[case] inside: bool) {
        assert_eq!(pos.in_bounds(), inside);
    }

    #[test]
    fn center() {
        assert_eq!(Position::center(), Position::new(15, 10));
    }

    #[test]
    fn all_cells() {
        let cells = Position::all().collect::<Vec<_>>();
        assert_eq!(cells.len(), 600);
        assert!(cells.iter().all(|p| p.in_bounds()));
        assert_eq!(cells.first(), Some(&Position::new(0, 0)));
        assert_eq!(cells.last(), Some(&Position::new(29, 19)));
    }
}
