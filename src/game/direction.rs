use super::grid::Position;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Return the position one cell away from `pos` in this direction.  The
    /// result may lie outside the playing field.
    pub(super) fn advance(self, pos: Position) -> Position {
        let Position { x, y } = pos;
        match self {
            Direction::Up => Position::new(x, y - 1),
            Direction::Down => Position::new(x, y + 1),
            Direction::Left => Position::new(x - 1, y),
            Direction::Right => Position::new(x + 1, y),
        }
    }

    pub(super) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}
