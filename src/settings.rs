//! The settings screen
use crate::command::{Command, FrameInput};
use crate::consts;
use crate::util::{center_rect, get_display_area};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Flex, Layout, Rect, Size},
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Widget,
    },
};

/// Display settings as edited on the settings screen
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Settings {
    pub(crate) show_grid: bool,
}

impl Settings {
    /// Apply a frame's input.  Returns `true` if the player asked to leave
    /// the screen.
    pub(crate) fn handle_input(&mut self, input: &FrameInput) -> bool {
        if input.pressed(Command::Cancel) {
            return true;
        }
        if input.pressed(Command::Toggle) {
            self.show_grid = !self.show_grid;
        }
        false
    }

    const WIDTH: u16 = 30;
    const HEIGHT: u16 = 5;
}

impl Widget for Settings {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [panel_area, hint_area] = Layout::vertical([Settings::HEIGHT, 1])
            .flex(Flex::Center)
            .spacing(1)
            .areas(display);
        let panel_area = center_rect(panel_area, Size::new(Settings::WIDTH, Settings::HEIGHT));
        let block = Block::bordered()
            .title(Span::styled(" SETTINGS ", consts::ACCENT_STYLE))
            .title_alignment(Alignment::Center)
            .padding(Padding::uniform(1));
        let inner = block.inner(panel_area);
        block.render(panel_area, buf);
        Line::from_iter([
            Span::styled("» Show grid", consts::MENU_SELECTION_STYLE),
            Span::raw("   "),
            Span::raw(if self.show_grid { "[✓]" } else { "[ ]" }),
        ])
        .render(inner, buf);
        Line::from_iter([
            Span::styled("Enter", consts::KEY_STYLE),
            Span::raw("/"),
            Span::styled("Space", consts::KEY_STYLE),
            Span::raw(" toggle  "),
            Span::styled("q", consts::KEY_STYLE),
            Span::raw(" back"),
        ])
        .centered()
        .render(hint_area, buf);
    }
}
