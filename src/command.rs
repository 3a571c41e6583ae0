use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use enum_map::{Enum, EnumMap};
use std::time::Duration;

/// A logical input action, independent of the key that produced it
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Cancel,
    Pause,
    Restart,
    Leaderboard,
    Toggle,
}

impl Command {
    /// Return the commands triggered by a key press.  A single key may stand
    /// for several commands; e.g., the space bar confirms in menus, pauses
    /// during play, and toggles settings.
    pub(crate) fn from_key_event(ev: KeyEvent) -> &'static [Command] {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => &[Command::Quit],
            (KeyModifiers::NONE, KeyCode::Char('w') | KeyCode::Up) => &[Command::Up],
            (KeyModifiers::NONE, KeyCode::Char('s') | KeyCode::Down) => &[Command::Down],
            (KeyModifiers::NONE, KeyCode::Char('a') | KeyCode::Left) => &[Command::Left],
            (KeyModifiers::NONE, KeyCode::Char('d') | KeyCode::Right) => &[Command::Right],
            (_, KeyCode::Enter) => &[Command::Confirm, Command::Toggle],
            (KeyModifiers::NONE, KeyCode::Char(' ')) => {
                &[Command::Confirm, Command::Pause, Command::Toggle]
            }
            (_, KeyCode::Esc) | (KeyModifiers::NONE, KeyCode::Char('q')) => &[Command::Cancel],
            (KeyModifiers::NONE, KeyCode::Char('p')) => &[Command::Pause],
            (KeyModifiers::NONE, KeyCode::Char('r')) => &[Command::Restart],
            (KeyModifiers::NONE, KeyCode::Char('l')) => &[Command::Leaderboard],
            _ => &[],
        }
    }
}

/// Everything the game needs to know about a single frame: how long it lasted
/// and which commands were issued during it
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct FrameInput {
    elapsed: Duration,
    pressed: EnumMap<Command, bool>,
}

impl FrameInput {
    pub(crate) fn new(elapsed: Duration) -> FrameInput {
        FrameInput {
            elapsed,
            pressed: EnumMap::default(),
        }
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Was `cmd` issued during this frame?
    pub(crate) fn pressed(&self, cmd: Command) -> bool {
        self.pressed[cmd]
    }

    pub(crate) fn press(&mut self, cmd: Command) {
        self.pressed[cmd] = true;
    }

    pub(crate) fn press_key(&mut self, ev: KeyEvent) {
        for &cmd in Command::from_key_event(ev) {
            self.press(cmd);
        }
    }

    #[cfg(test)]
    pub(crate) fn with(mut self, cmd: Command) -> FrameInput {
        self.press(cmd);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Char('w'), &[Command::Up])]
    #[case(KeyCode::Up, &[Command::Up])]
    #[case(KeyCode::Char('s'), &[Command::Down])]
    #[case(KeyCode::Left, &[Command::Left])]
    #[case(KeyCode::Char('d'), &[Command::Right])]
    #[case(KeyCode::Enter, &[Command::Confirm, Command::Toggle])]
    #[case(KeyCode::Char(' '), &[Command::Confirm, Command::Pause, Command::Toggle])]
    #[case(KeyCode::Esc, &[Command::Cancel])]
    #[case(KeyCode::Char('q'), &[Command::Cancel])]
    #[case(KeyCode::Char('p'), &[Command::Pause])]
    #[case(KeyCode::Char('r'), &[Command::Restart])]
    #[case(KeyCode::Char('l'), &[Command::Leaderboard])]
    #[case(KeyCode::Char('x'), &[])]
    fn test_from_key_event(#[case] code: KeyCode, #[case] cmds: &[Command]) {
        assert_eq!(Command::from_key_event(KeyEvent::from(code)), cmds);
    }

    #[test]
    fn ctrl_c_quits() {
        let ev = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(Command::from_key_event(ev), &[Command::Quit]);
    }

    #[test]
    fn frame_input_records_presses() {
        let mut input = FrameInput::new(Duration::from_millis(16));
        assert!(!input.pressed(Command::Pause));
        input.press_key(KeyEvent::from(KeyCode::Char(' ')));
        assert!(input.pressed(Command::Pause));
        assert!(input.pressed(Command::Confirm));
        assert!(input.pressed(Command::Toggle));
        assert!(!input.pressed(Command::Cancel));
        assert_eq!(input.elapsed(), Duration::from_millis(16));
    }
}
