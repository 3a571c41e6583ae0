use crate::consts;
use enum_map::Enum;
use ratatui::layout::{Flex, Layout, Rect, Size};

/// Helpers for stepping through the variants of a fieldless enum
pub(crate) trait EnumExt: Enum + Sized {
    fn iter() -> impl Iterator<Item = Self> {
        (0..Self::LENGTH).map(Self::from_usize)
    }

    /// The next variant, wrapping around after the last one
    fn cycle_next(self) -> Self {
        Self::from_usize((self.into_usize() + 1) % Self::LENGTH)
    }

    /// The previous variant, wrapping around before the first one
    fn cycle_prev(self) -> Self {
        Self::from_usize((self.into_usize() + Self::LENGTH - 1) % Self::LENGTH)
    }
}

impl<T: Enum> EnumExt for T {}

pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    center_rect(buffer_area, consts::DISPLAY_SIZE)
}

/// Return a `Rect` of the given size centered in `area`, shrunk to fit if
/// `area` is too small
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [area] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(area);
    area
}

/// Turn a name entered by the player into one that can be stored as a single
/// token: runs of whitespace become `_`, and a blank name becomes `default`.
pub(crate) fn player_name(raw: &str, default: &str) -> String {
    let name = raw.split_whitespace().collect::<Vec<_>>().join("_");
    if name.is_empty() {
        default.to_owned()
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
    enum Color {
        Red,
        Green,
        Blue,
    }

    #[test]
    fn enum_cycling() {
        assert_eq!(
            Color::iter().collect::<Vec<_>>(),
            [Color::Red, Color::Green, Color::Blue]
        );
        assert_eq!(Color::Red.cycle_next(), Color::Green);
        assert_eq!(Color::Blue.cycle_next(), Color::Red);
        assert_eq!(Color::Red.cycle_prev(), Color::Blue);
        assert_eq!(Color::Green.cycle_prev(), Color::Red);
    }

    #[rstest]
    #[case(Rect::new(0, 0, 80, 24), Size::new(20, 4), Rect::new(30, 10, 20, 4))]
    #[case(Rect::new(10, 5, 80, 24), Size::new(80, 24), Rect::new(10, 5, 80, 24))]
    #[case(Rect::new(0, 0, 100, 30), Size::new(80, 24), Rect::new(10, 3, 80, 24))]
    #[case(Rect::new(0, 0, 40, 10), Size::new(80, 24), Rect::new(0, 0, 40, 10))]
    fn test_center_rect(#[case] area: Rect, #[case] size: Size, #[case] centered: Rect) {
        assert_eq!(center_rect(area, size), centered);
    }

    #[rstest]
    #[case("alice", "alice")]
    #[case("  alice  ", "alice")]
    #[case("Mary Ann", "Mary_Ann")]
    #[case("a \t b\nc", "a_b_c")]
    #[case("", "Player")]
    #[case(" \t ", "Player")]
    fn test_player_name(#[case] raw: &str, #[case] name: &str) {
        assert_eq!(player_name(raw, consts::DEFAULT_PLAYER_NAME), name);
    }
}
