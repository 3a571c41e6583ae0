use super::Outcome;
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

/// The result of a finished round, as shown on the game-over panel
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Verdict {
    outcome: Outcome,
    score: u32,
    new_personal_best: bool,
    new_highest: bool,
}

impl Verdict {
    pub(crate) const HEIGHT: u16 = 10;
    pub(crate) const WIDTH: u16 = 26;

    /// Judge `score` against the records as they stood before the round was
    /// saved.  A record only counts as broken if there was one to break.
    pub(crate) fn new(
        outcome: Outcome,
        score: u32,
        personal_best: u32,
        overall_highest: u32,
    ) -> Verdict {
        Verdict {
            outcome,
            score,
            new_personal_best: personal_best > 0 && score > personal_best,
            new_highest: overall_highest > 0 && score > overall_highest,
        }
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn new_personal_best(&self) -> bool {
        self.new_personal_best
    }

    pub(crate) fn new_highest(&self) -> bool {
        self.new_highest
    }

    fn title(&self) -> &'static str {
        match self.outcome {
            Outcome::Collided => " GAME OVER ",
            Outcome::Cleared => " BOARD CLEARED ",
        }
    }
}

impl Widget for Verdict {
    /*
     * ┌────── GAME OVER ───────┐
     * │ Final Score: 120       │
     * │ NEW PERSONAL BEST!     │
     * │ NEW HIGHEST SCORE!     │
     * │                        │
     * │ Restart (r)            │
     * │ Main Menu (q)          │
     * │ Leaderboard (l)        │
     * └────────────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(Span::styled(self.title(), consts::WARNING_STYLE))
            .title_alignment(Alignment::Center)
            .padding(Padding::new(1, 1, 1, 0))
            .style(Style::reset());
        let inner = block.inner(area);
        block.render(area, buf);
        let mut lines = vec![Line::from(format!("Final Score: {}", self.score()))];
        if self.new_personal_best() {
            lines.push(Line::styled("NEW PERSONAL BEST!", consts::SUCCESS_STYLE));
        }
        if self.new_highest() {
            lines.push(Line::styled("NEW HIGHEST SCORE!", consts::SUCCESS_STYLE));
        }
        lines.push(Line::default());
        for (label, key) in [("Restart", "r"), ("Main Menu", "q"), ("Leaderboard", "l")] {
            lines.push(Line::from_iter([
                Span::raw(label),
                Span::raw(" ("),
                Span::styled(key, consts::KEY_STYLE),
                Span::raw(")"),
            ]));
        }
        for (line, row) in lines.into_iter().zip(inner.rows()) {
            line.render(row, buf);
        }
    }
}
