use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::Widget,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Logo;

impl Logo {
    const GRID_WIDTH: u16 = 20;
    const SNAKE_WIDTH: u16 = 28;
    const SNAKE_BODY_CELLS: usize = 6;
    const TEXT_HEIGHT: u16 = 5;
    pub(super) const HEIGHT: u16 = Self::TEXT_HEIGHT + 2;
    pub(super) const WIDTH: u16 = Self::GRID_WIDTH + Self::SNAKE_WIDTH;

    #[rustfmt::skip]
    const GRID: [&'static str; Self::TEXT_HEIGHT as usize] = [
         "  ____      _     _ ",
         " / ___|_ __(_) __| |",
         "| |  _| '__| |/ _` |",
         "| |_| | |  | | (_| |",
        r" \____|_|  |_|\__,_|",
    ];

    #[rustfmt::skip]
    const SNAKE: [&'static str; Self::TEXT_HEIGHT as usize] = [
         " ____              _        ",
         "/ ___| _ __   __ _| | _____ ",
        r"\___ \| '_ \ / _` | |/ / _ \",
         " ___) | | | | (_| |   <  __/",
        r"|____/|_| |_|\__,_|_|\_\___|",
    ];
}

impl Widget for Logo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [area] = Layout::horizontal([Self::WIDTH])
            .flex(Flex::Start)
            .areas(area);
        let [words_area, diagram_area] = Layout::vertical([Self::TEXT_HEIGHT, 1])
            .flex(Flex::Start)
            .spacing(1)
            .areas(area);
        let [grid_area, snake_area] = Layout::horizontal([
            Constraint::Length(Self::GRID_WIDTH),
            Constraint::Length(Self::SNAKE_WIDTH),
        ])
        .flex(Flex::Start)
        .areas(words_area);
        Text::from_iter(Self::GRID)
            .style(consts::ACCENT_STYLE)
            .render(grid_area, buf);
        Text::from_iter(Self::SNAKE)
            .style(consts::SNAKE_BODY_STYLE)
            .render(snake_area, buf);
        Line::from_iter([
            Span::styled(
                consts::SNAKE_BODY_SYMBOL.repeat(Self::SNAKE_BODY_CELLS),
                consts::SNAKE_BODY_STYLE,
            ),
            Span::styled(consts::SNAKE_HEAD_RIGHT_SYMBOL, consts::SNAKE_HEAD_STYLE),
            Span::styled("  ", Style::new()),
            Span::styled(consts::FOOD_SYMBOL, consts::FOOD_STYLE),
        ])
        .centered()
        .render(diagram_area, buf);
    }
}
