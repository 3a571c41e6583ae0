mod direction;
mod grid;
mod levels;
mod over;
mod paused;
mod snake;
mod speed;
pub(crate) use self::direction::Direction;
pub(crate) use self::grid::Position;
pub(crate) use self::levels::LevelMap;
pub(crate) use self::over::Verdict;
pub(crate) use self::paused::Paused;
use self::snake::Snake;
pub(crate) use self::speed::{difficulty_level, speed_progress, tick_interval};
use crate::consts;
use log::debug;
use rand::{seq::IteratorRandom, Rng};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Margin, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Gauge, Widget},
};
use std::time::Duration;

/// A single round of play: the snake, the food, and the score, plus the time
/// accumulated towards the next tick
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Round {
    snake: Snake,
    food: Position,
    score: u32,
    move_timer: Duration,
    outcome: Option<Outcome>,
}

impl Round {
    /// Start a fresh round: a new snake in the center of the field, a score
    /// of zero, and food on a random empty cell
    pub(crate) fn new<R: Rng + ?Sized>(level: &LevelMap, rng: &mut R) -> Round {
        let mut round = Round {
            snake: Snake::new(),
            food: Position::default(),
            score: 0,
            move_timer: Duration::ZERO,
            outcome: None,
        };
        round.place_food(level, rng);
        round
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn food(&self) -> Position {
        self.food
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, pos: Position) {
        self.food = pos;
    }

    /// How the round ended, if it has
    pub(crate) fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Queue a change of direction for the next tick.  A request to reverse
    /// is dropped.
    pub(crate) fn turn(&mut self, direction: Direction) {
        if !self.snake.turn(direction) {
            debug!("Ignoring reversal from {:?} to {direction:?}", self.snake.direction());
        }
    }

    /// Advance the round's clock by `elapsed`.  Once the accumulated time
    /// reaches the tick interval for the current score, the timer is reset
    /// and exactly one tick is performed, even if several intervals' worth of
    /// time has passed.
    ///
    /// Returns `Some` on the tick that ends the round.
    pub(crate) fn update<R: Rng + ?Sized>(
        &mut self,
        elapsed: Duration,
        level: &LevelMap,
        rng: &mut R,
    ) -> Option<Outcome> {
        if self.outcome.is_some() {
            return None;
        }
        self.move_timer = self.move_timer.saturating_add(elapsed);
        if self.move_timer < tick_interval(self.score) {
            return None;
        }
        self.move_timer = Duration::ZERO;
        self.tick(level, rng)
    }

    /// Move the snake one cell, then resolve collisions and food.  The old
    /// tail is still in place while collisions are checked.
    fn tick<R: Rng + ?Sized>(&mut self, level: &LevelMap, rng: &mut R) -> Option<Outcome> {
        let head = self.snake.advance();
        if self.snake.collides(level.obstacles()) {
            self.outcome = Some(Outcome::Collided);
        } else if head == self.food {
            self.score = self.score.saturating_add(consts::FOOD_SCORE);
            if !self.place_food(level, rng) {
                self.outcome = Some(Outcome::Cleared);
            }
        } else {
            self.snake.shed_tail();
        }
        self.outcome
    }

    /// Put the food on a cell chosen uniformly from those not occupied by the
    /// snake or an obstacle.  If there are none, the food is left where it is
    /// and `false` is returned.
    fn place_food<R: Rng + ?Sized>(&mut self, level: &LevelMap, rng: &mut R) -> bool {
        let free = Position::all()
            .filter(|&p| !self.snake.occupies(p) && !level.is_obstacle(p))
            .choose(rng);
        match free {
            Some(pos) => {
                self.food = pos;
                true
            }
            None => false,
        }
    }
}

/// How a round ended
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Outcome {
    /// The snake hit a wall, an obstacle, or itself
    Collided,

    /// The snake filled every free cell of the field
    Cleared,
}

/// The playing field with the score sidebar beside it
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Board<'a> {
    pub(crate) round: &'a Round,
    pub(crate) level: &'a LevelMap,
    pub(crate) show_grid: bool,
    pub(crate) personal_best: u32,
    pub(crate) overall_highest: u32,
}

impl Board<'_> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    const ARENA_WIDTH: u16 = consts::GRID_WIDTH as u16 * consts::CELL_WIDTH + 2;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    const ARENA_HEIGHT: u16 = consts::GRID_HEIGHT as u16 + 2;
}

impl Widget for Board<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [arena_area, sidebar_area] =
            Layout::horizontal([Constraint::Length(Board::ARENA_WIDTH), Constraint::Fill(1)])
                .spacing(1)
                .areas(area);
        let [arena_area] = Layout::vertical([Board::ARENA_HEIGHT])
            .flex(Flex::Center)
            .areas(arena_area);
        let [sidebar_area] = Layout::vertical([Board::ARENA_HEIGHT])
            .flex(Flex::Center)
            .areas(sidebar_area);
        Arena {
            round: self.round,
            level: self.level,
            show_grid: self.show_grid,
        }
        .render(arena_area, buf);
        Sidebar {
            score: self.round.score(),
            personal_best: self.personal_best,
            overall_highest: self.overall_highest,
        }
        .render(sidebar_area, buf);
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Arena<'a> {
    round: &'a Round,
    level: &'a LevelMap,
    show_grid: bool,
}

impl Widget for Arena<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::bordered().render(area, buf);
        let mut canvas = Canvas {
            area: area.inner(Margin::new(1, 1)),
            buf,
        };
        if self.show_grid {
            for pos in Position::all() {
                canvas.draw_cell(pos, consts::GRID_SYMBOL, consts::GRID_STYLE);
            }
        }
        for &pos in self.level.obstacles() {
            canvas.draw_cell(pos, consts::OBSTACLE_SYMBOL, consts::OBSTACLE_STYLE);
        }
        canvas.draw_cell(self.round.food(), consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        for &pos in self.round.snake.body().iter().skip(1) {
            canvas.draw_cell(pos, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_BODY_STYLE);
        }
        // Drawn last so that a collision overwrites whatever was hit
        let head = self.round.snake.head();
        if self.round.outcome() == Some(Outcome::Collided) {
            canvas.draw_cell(head, consts::COLLISION_SYMBOL, consts::COLLISION_STYLE);
        } else {
            canvas.draw_cell(head, self.round.snake.head_symbol(), consts::SNAKE_HEAD_STYLE);
        }
    }
}

/// Score, records, level, speed, and controls
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Sidebar {
    score: u32,
    personal_best: u32,
    overall_highest: u32,
}

impl Widget for Sidebar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [stats_area, speed_label_area, gauge_area, controls_area] =
            Layout::vertical([4, 1, 1, 6].map(Constraint::Length))
                .flex(Flex::Start)
                .spacing(1)
                .areas(area);
        Text::from_iter([
            Line::from(format!("Score: {}", self.score)).style(consts::ACCENT_STYLE),
            Line::from(format!("Best: {}", self.personal_best)),
            Line::from(format!("Highest: {}", self.overall_highest)),
            Line::from(format!("Level: {}", difficulty_level(self.score))),
        ])
        .render(stats_area, buf);
        Line::from("Speed").render(speed_label_area, buf);
        Gauge::default()
            .ratio(speed_progress(self.score))
            .label(format!("{}ms", tick_interval(self.score).as_millis()))
            .gauge_style(consts::SPEED_GAUGE_STYLE)
            .use_unicode(true)
            .render(gauge_area, buf);
        Text::from_iter([
            Line::from("Controls").style(consts::ACCENT_STYLE),
            key_line("↑↓←→", "move"),
            key_line("wasd", "move"),
            key_line("p", "pause"),
            key_line("q", "menu"),
        ])
        .render(controls_area, buf);
    }
}

fn key_line(key: &'static str, action: &'static str) -> Line<'static> {
    Line::from_iter([
        Span::styled(key, consts::KEY_STYLE),
        Span::raw(" "),
        Span::raw(action),
    ])
}

/// Draws grid cells, each [`CELL_WIDTH`][consts::CELL_WIDTH] columns wide,
/// into a buffer.  Anything falling outside `area` is clipped.
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: &str, style: Style) {
        let (Ok(col), Ok(row)) = (u16::try_from(pos.x), u16::try_from(pos.y)) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(row).filter(|&y| y < self.area.bottom()) else {
            return;
        };
        let Some(x) = col
            .checked_mul(consts::CELL_WIDTH)
            .and_then(|c| self.area.x.checked_add(c))
        else {
            return;
        };
        for (x, ch) in (x..self.area.right()).zip(symbol.chars()) {
            if let Some(cell) = self.buf.cell_mut((x, y)) {
                cell.set_char(ch);
                cell.set_style(Style::reset().patch(style));
            }
        }
    }
}
