mod widgets;
use self::widgets::Logo;
use crate::command::{Command, FrameInput};
use crate::consts;
use crate::util::{get_display_area, EnumExt};
use enum_map::Enum;
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::{
        block::{Block, Padding},
        Widget,
    },
};

/// The main menu.  Only the highlighted item is stateful; the records shown
/// alongside it are supplied when drawing.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct MainMenu {
    selection: MenuItem,
}

impl MainMenu {
    pub(crate) fn selection(&self) -> MenuItem {
        self.selection
    }

    /// Move the highlight for any up/down presses and return the highlighted
    /// item if it was chosen
    pub(crate) fn handle_input(&mut self, input: &FrameInput) -> Option<MenuItem> {
        if input.pressed(Command::Down) {
            self.selection = self.selection.cycle_next();
        }
        if input.pressed(Command::Up) {
            self.selection = self.selection.cycle_prev();
        }
        input.pressed(Command::Confirm).then_some(self.selection)
    }
}

/// The items of the main menu, in display order
#[derive(Clone, Copy, Debug, Default, Enum, Eq, PartialEq)]
pub(crate) enum MenuItem {
    #[default]
    StartGame,
    Leaderboard,
    Settings,
    Exit,
}

impl MenuItem {
    const DISPLAY_WIDTH: u16 = 11;

    fn label(self) -> &'static str {
        match self {
            MenuItem::StartGame => "Start Game",
            MenuItem::Leaderboard => "Leaderboard",
            MenuItem::Settings => "Settings",
            MenuItem::Exit => "Exit",
        }
    }
}

/// Everything drawn on the main menu screen
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct MenuView<'a> {
    pub(crate) menu: MainMenu,
    pub(crate) player: &'a str,
    pub(crate) overall_highest: u32,
    pub(crate) personal_best: u32,
}

impl MenuView<'_> {
    #[allow(clippy::cast_possible_truncation)]
    const ITEMS_HEIGHT: u16 = (MenuItem::LENGTH as u16) + 2 /* for border */;
    const HORIZONTAL_PADDING: u16 = 1; // padding on each side
    const POINTER_WIDTH: u16 = 2;
    const ITEMS_WIDTH: u16 =
        2 /* for border */ + 2 * Self::HORIZONTAL_PADDING + Self::POINTER_WIDTH + MenuItem::DISPLAY_WIDTH;
}

impl Widget for MenuView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [logo_area, records_area, items_area, hint_area] =
            Layout::vertical([Logo::HEIGHT, 3, MenuView::ITEMS_HEIGHT, 1])
                .flex(Flex::Start)
                .spacing(1)
                .areas(display);

        let [logo_area] = Layout::horizontal([Logo::WIDTH])
            .flex(Flex::Center)
            .areas(logo_area);
        Logo.render(logo_area, buf);

        Text::from_iter([
            Line::styled(format!("Welcome, {}!", self.player), consts::ACCENT_STYLE),
            Line::from(format!("Highest Score: {}", self.overall_highest)),
            Line::from(format!("Your Best: {}", self.personal_best)),
        ])
        .centered()
        .render(records_area, buf);

        let [items_area] = Layout::horizontal([MenuView::ITEMS_WIDTH])
            .flex(Flex::Center)
            .areas(items_area);
        let block = Block::bordered().padding(Padding::horizontal(MenuView::HORIZONTAL_PADDING));
        let inner = block.inner(items_area);
        block.render(items_area, buf);
        for (item, row) in MenuItem::iter().zip(inner.rows()) {
            let selected = item == self.menu.selection();
            let style = if selected {
                consts::MENU_SELECTION_STYLE
            } else {
                Style::new()
            };
            let s = format!(
                "{pointer:pwidth$}{label}",
                pointer = if selected { "»" } else { "" },
                pwidth = usize::from(MenuView::POINTER_WIDTH),
                label = item.label(),
            );
            Span::styled(s, style).render(row, buf);
        }

        Line::from_iter([
            Span::styled("↑↓", consts::KEY_STYLE),
            Span::raw(" select  "),
            Span::styled("Enter", consts::KEY_STYLE),
            Span::raw(" confirm  "),
            Span::styled("Ctrl-C", consts::KEY_STYLE),
            Span::raw(" quit"),
        ])
        .centered()
        .render(hint_area, buf);
    }
}
