//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Number of columns in the playing field
pub(crate) const GRID_WIDTH: i32 = 30;

/// Number of rows in the playing field
pub(crate) const GRID_HEIGHT: i32 = 20;

/// Number of terminal columns used to draw a single grid cell
pub(crate) const CELL_WIDTH: u16 = 2;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Time between frames of the main loop (60 FPS)
pub(crate) const FRAME_PERIOD: Duration = Duration::from_micros(16_667);

/// Time between movements of the snake at a score of zero
pub(crate) const BASE_TICK_INTERVAL: Duration = Duration::from_millis(150);

/// Amount by which the tick interval shrinks every [`SPEEDUP_SCORE`] points
pub(crate) const TICK_INTERVAL_STEP: Duration = Duration::from_millis(20);

/// The tick interval never drops below this
pub(crate) const MIN_TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Points needed for each speed-up of the snake
pub(crate) const SPEEDUP_SCORE: u32 = 30;

/// Points needed for each displayed difficulty level
pub(crate) const LEVEL_SCORE: u32 = 50;

/// Points awarded for eating a piece of food
pub(crate) const FOOD_SCORE: u32 = 10;

/// Length of the snake at the start of a round
pub(crate) const INITIAL_SNAKE_LENGTH: i32 = 3;

/// Maximum number of entries kept on the leaderboard
pub(crate) const MAX_LEADERBOARD_ENTRIES: usize = 10;

/// Maximum number of obstacles read from the obstacles file
pub(crate) const MAX_OBSTACLES: usize = 100;

/// Name used when the player does not give one
pub(crate) const DEFAULT_PLAYER_NAME: &str = "Player";

/// Glyphs for the snake's head, by direction of travel
pub(crate) const SNAKE_HEAD_UP_SYMBOL: &str = "^^";
pub(crate) const SNAKE_HEAD_DOWN_SYMBOL: &str = "vv";
pub(crate) const SNAKE_HEAD_LEFT_SYMBOL: &str = "<<";
pub(crate) const SNAKE_HEAD_RIGHT_SYMBOL: &str = ">>";

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: &str = "██";

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: &str = "()";

/// Glyph for obstacles
pub(crate) const OBSTACLE_SYMBOL: &str = "▒▒";

/// Glyph for empty cells when the grid is shown
pub(crate) const GRID_SYMBOL: &str = " ·";

/// Glyph for the snake's head when it's collided with something
pub(crate) const COLLISION_SYMBOL: &str = "××";

pub(crate) const SNAKE_HEAD_STYLE: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::LightGreen)
    .add_modifier(Modifier::BOLD);

pub(crate) const SNAKE_BODY_STYLE: Style = Style::new().fg(Color::Green);

pub(crate) const FOOD_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::BOLD);

pub(crate) const OBSTACLE_STYLE: Style = Style::new().fg(Color::Gray);

pub(crate) const GRID_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the speed gauge in the sidebar
pub(crate) const SPEED_GAUGE_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the currently-selected menu item
pub(crate) const MENU_SELECTION_STYLE: Style = Style::new()
    .fg(Color::LightBlue)
    .add_modifier(Modifier::UNDERLINED);

/// Style for headings and other highlighted text
pub(crate) const ACCENT_STYLE: Style = Style::new()
    .fg(Color::LightBlue)
    .add_modifier(Modifier::BOLD);

/// Style for record-breaking banners
pub(crate) const SUCCESS_STYLE: Style = Style::new()
    .fg(Color::LightGreen)
    .add_modifier(Modifier::BOLD);

/// Style for attention-grabbing text such as the game-over title
pub(crate) const WARNING_STYLE: Style = Style::new()
    .fg(Color::LightYellow)
    .add_modifier(Modifier::BOLD);
