use super::direction::Direction;
use super::grid::Position;
use crate::consts;
use std::collections::{HashSet, VecDeque};

/// The snake: its body, head first, and its heading
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The positions of all of the cells in the snake, head first
    pub(super) body: VecDeque<Position>,

    /// The direction in which the snake moved on the last tick
    pub(super) direction: Direction,

    /// The direction in which the snake will move on the next tick
    pub(super) next_direction: Direction,
}

impl Snake {
    /// Create a new snake in the center of the field: a vertical line of
    /// [`INITIAL_SNAKE_LENGTH`][consts::INITIAL_SNAKE_LENGTH] cells with the
    /// head on top, facing up.
    pub(super) fn new() -> Snake {
        let head = Position::center();
        Snake {
            body: (0..consts::INITIAL_SNAKE_LENGTH)
                .map(|i| Position::new(head.x, head.y + i))
                .collect(),
            direction: Direction::Up,
            next_direction: Direction::Up,
        }
    }

    pub(super) fn head(&self) -> Position {
        self.body[0]
    }

    pub(super) fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    pub(super) fn direction(&self) -> Direction {
        self.direction
    }

    /// Return the glyph to use for drawing the snake's head
    pub(super) fn head_symbol(&self) -> &'static str {
        match self.direction {
            Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
            Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
            Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
            Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
        }
    }

    /// Queue a change of direction for the next tick.  Turning back the way
    /// the snake is currently going is ignored.  Returns whether the turn was
    /// accepted.
    pub(super) fn turn(&mut self, direction: Direction) -> bool {
        if direction == self.direction.reverse() {
            false
        } else {
            self.next_direction = direction;
            true
        }
    }

    /// Commit the queued direction and push a new head one cell forwards.
    /// The tail is left in place; call [`Snake::shed_tail()`] afterwards if
    /// the snake did not grow.  Returns the new head.
    pub(super) fn advance(&mut self) -> Position {
        self.direction = self.next_direction;
        let head = self.direction.advance(self.head());
        self.body.push_front(head);
        head
    }

    pub(super) fn shed_tail(&mut self) {
        let _ = self.body.pop_back();
    }

    /// Has the head run off the field, into an obstacle, or into the rest of
    /// the body?
    pub(super) fn collides(&self, obstacles: &HashSet<Position>) -> bool {
        let head = self.head();
        !head.in_bounds() || obstacles.contains(&head) || self.body.iter().skip(1).any(|&p| p == head)
    }

    pub(super) fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }
}
