//! The leaderboard screen
use crate::consts;
use crate::store::ScoreEntry;
use crate::util::{center_rect, get_display_area};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Row, Table, Widget},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct LeaderboardView<'a> {
    pub(crate) entries: &'a [ScoreEntry],
    /// Rows with this name are highlighted
    pub(crate) player: &'a str,
}

impl LeaderboardView<'_> {
    const WIDTH: u16 = 40;

    #[allow(clippy::cast_possible_truncation)]
    const HEIGHT: u16 = consts::MAX_LEADERBOARD_ENTRIES as u16 + 2 /* header */ + 2 /* border */;

    const RANK_WIDTH: u16 = 4;
    const SCORE_WIDTH: u16 = 8;
}

impl Widget for LeaderboardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [board_area, hint_area] =
            Layout::vertical([LeaderboardView::HEIGHT, 1])
                .flex(Flex::Center)
                .spacing(1)
                .areas(display);
        let board_area = center_rect(
            board_area,
            Size::new(LeaderboardView::WIDTH, LeaderboardView::HEIGHT),
        );
        let block = Block::bordered()
            .title(Span::styled(" LEADERBOARD ", consts::ACCENT_STYLE))
            .title_alignment(Alignment::Center);
        let inner = block.inner(board_area);
        block.render(board_area, buf);

        if self.entries.is_empty() {
            let [msg_area] = Layout::vertical([Constraint::Length(1)]).flex(Flex::Center).areas(inner);
            Line::from("No scores yet.  Play a game!")
                .centered()
                .render(msg_area, buf);
        } else {
            let rows = self
                .entries
                .iter()
                .take(consts::MAX_LEADERBOARD_ENTRIES)
                .enumerate()
                .map(|(i, entry)| {
                    let style = if entry.name == self.player {
                        consts::SUCCESS_STYLE
                    } else {
                        Style::new()
                    };
                    Row::new([
                        Line::from(format!("{}.", i + 1)).right_aligned(),
                        Line::from(entry.name.clone()),
                        Line::from(entry.score.to_string()).right_aligned(),
                    ])
                    .style(style)
                });
            Table::new(
                rows,
                [
                    Constraint::Length(LeaderboardView::RANK_WIDTH),
                    Constraint::Fill(1),
                    Constraint::Length(LeaderboardView::SCORE_WIDTH),
                ],
            )
            .header(
                Row::new([
                    Line::from("#").right_aligned(),
                    Line::from("Name"),
                    Line::from("Score").right_aligned(),
                ])
                .style(consts::ACCENT_STYLE)
                .bottom_margin(1),
            )
            .column_spacing(2)
            .render(inner, buf);
        }

        Line::from_iter([
            Span::styled("Enter", consts::KEY_STYLE),
            Span::raw("/"),
            Span::styled("q", consts::KEY_STYLE),
            Span::raw(" back to menu"),
        ])
        .centered()
        .render(hint_area, buf);
    }
}
