//! Presentation and input: everything the game needs from the terminal
use crate::command::FrameInput;
use crate::consts;
use crossterm::event::{poll, read};
use ratatui::{widgets::Widget, DefaultTerminal};
use std::io;
use std::time::Instant;

/// A source of per-frame input and a sink for rendered screens
pub(crate) trait Frontend {
    /// Wait for the end of the current frame and return how long it lasted
    /// along with the commands issued during it
    fn next_frame(&mut self) -> io::Result<FrameInput>;

    fn draw<W: Widget>(&mut self, widget: W) -> io::Result<()>;
}

/// A [`Frontend`] running in the terminal at a fixed frame rate
#[derive(Debug)]
pub(crate) struct TerminalFrontend {
    terminal: DefaultTerminal,
    last_frame: Instant,
}

impl TerminalFrontend {
    pub(crate) fn new(terminal: DefaultTerminal) -> TerminalFrontend {
        TerminalFrontend {
            terminal,
            last_frame: Instant::now(),
        }
    }
}

impl Frontend for TerminalFrontend {
    fn next_frame(&mut self) -> io::Result<FrameInput> {
        let deadline = self.last_frame + consts::FRAME_PERIOD;
        let mut keys = Vec::new();
        loop {
            let wait = deadline.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                break;
            }
            keys.extend(read()?.as_key_press_event());
        }
        let now = Instant::now();
        let mut input = FrameInput::new(now.duration_since(self.last_frame));
        self.last_frame = now;
        for ev in keys {
            input.press_key(ev);
        }
        Ok(input)
    }

    fn draw<W: Widget>(&mut self, widget: W) -> io::Result<()> {
        self.terminal
            .draw(|frame| frame.render_widget(widget, frame.area()))?;
        Ok(())
    }
}
