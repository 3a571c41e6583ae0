use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Widget,
    },
};

/// A widget for displaying the pause pop-up over the board
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Paused;

impl Paused {
    /// The height that should be used for the `Rect` passed to
    /// `Paused::render()`
    pub(crate) const HEIGHT: u16 = 4;

    /// The width that should be used for the `Rect` passed to
    /// `Paused::render()`
    pub(crate) const WIDTH: u16 = 19;

    const CHOICES: [(&'static str, &'static str); 2] = [("Resume", "p"), ("Main Menu", "q")];
}

impl Widget for Paused {
    /*
     * ┌──── PAUSED ─────┐
     * │ Resume (p)      │
     * │ Main Menu (q)   │
     * └─────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" PAUSED ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(area);
        block.render(area, buf);
        for ((label, key), row) in Self::CHOICES.into_iter().zip(inner.rows()) {
            Line::from_iter([
                Span::raw(label),
                Span::raw(" ("),
                Span::styled(key, consts::KEY_STYLE),
                Span::raw(")"),
            ])
            .render(row, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn render() {
        let area = Rect::new(0, 0, Paused::WIDTH, Paused::HEIGHT);
        let mut buffer = Buffer::empty(area);
        Paused.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "┌──── PAUSED ─────┐",
            "│ Resume (p)      │",
            "│ Main Menu (q)   │",
            "└─────────────────┘",
        ]);
        expected.set_style(area, Style::reset());
        expected.set_style(Rect::new(10, 1, 1, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(13, 2, 1, 1), consts::KEY_STYLE);
        assert_eq!(buffer, expected);
    }
}
