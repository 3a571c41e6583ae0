use crate::command::{Command, FrameInput};
use crate::frontend::Frontend;
use crate::game::{Board, Direction, LevelMap, Outcome, Paused, Round, Verdict};
use crate::leaderboard::LeaderboardView;
use crate::menu::{MainMenu, MenuItem, MenuView};
use crate::settings::Settings;
use crate::store::{Medium, ScoreEntry, Store};
use crate::util::{center_rect, get_display_area};
use log::{info, warn};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Rect, Size},
    widgets::{Clear, Widget},
};
use std::io;

/// The game as a whole: the current screen, the round in progress, and the
/// collaborators that persist records and talk to the player
#[derive(Clone, Debug)]
pub(crate) struct App<M, F, R> {
    screen: Screen,
    round: Round,
    level: LevelMap,
    settings: Settings,
    store: Store<M>,
    frontend: F,
    rng: R,
    running: bool,
}

impl<M: Medium, F: Frontend, R: Rng> App<M, F, R> {
    /// Create an app showing the main menu, with settings and obstacles
    /// loaded from `store`
    pub(crate) fn new(store: Store<M>, frontend: F, mut rng: R) -> App<M, F, R> {
        let settings = Settings {
            show_grid: store.load_settings(),
        };
        let level = LevelMap::new(store.load_obstacles());
        let round = Round::new(&level, &mut rng);
        App {
            screen: Screen::Menu(MainMenu::default()),
            round,
            level,
            settings,
            store,
            frontend,
            rng,
            running: true,
        }
    }

    /// Run frames until the player quits, then save what is left to save.
    /// The final save also happens if the frontend fails.
    pub(crate) fn run(&mut self) -> io::Result<()> {
        info!("Starting session for {}", self.store.player());
        let r = self.run_frames();
        if let Err(e) = &r {
            warn!("Frontend failed: {e}");
        }
        self.shutdown();
        r
    }

    fn run_frames(&mut self) -> io::Result<()> {
        while self.running {
            let input = self.frontend.next_frame()?;
            self.step(&input);
            if self.running {
                self.draw()?;
            }
        }
        Ok(())
    }

    /// Apply one frame's worth of input and, while playing, elapsed time
    fn step(&mut self, input: &FrameInput) {
        if input.pressed(Command::Quit) {
            info!("Quit requested");
            self.running = false;
            return;
        }
        match self.screen {
            Screen::Menu(mut menu) => {
                let choice = menu.handle_input(input);
                self.screen = Screen::Menu(menu);
                match choice {
                    Some(MenuItem::StartGame) => self.start_round(),
                    Some(MenuItem::Leaderboard) => self.open_leaderboard(),
                    Some(MenuItem::Settings) => self.enter(Screen::Settings),
                    Some(MenuItem::Exit) => {
                        info!("Exit chosen from menu");
                        self.running = false;
                    }
                    None => (),
                }
            }
            Screen::Playing => {
                if input.pressed(Command::Pause) {
                    self.enter(Screen::Paused);
                } else if input.pressed(Command::Cancel) {
                    self.enter_menu();
                } else {
                    for (cmd, direction) in [
                        (Command::Up, Direction::Up),
                        (Command::Down, Direction::Down),
                        (Command::Left, Direction::Left),
                        (Command::Right, Direction::Right),
                    ] {
                        if input.pressed(cmd) {
                            self.round.turn(direction);
                        }
                    }
                    if let Some(outcome) =
                        self.round
                            .update(input.elapsed(), &self.level, &mut self.rng)
                    {
                        self.finish_round(outcome);
                    }
                }
            }
            Screen::Paused => {
                if input.pressed(Command::Pause) {
                    self.enter(Screen::Playing);
                } else if input.pressed(Command::Cancel) {
                    self.enter_menu();
                }
            }
            Screen::GameOver(_) => {
                if input.pressed(Command::Restart) {
                    self.start_round();
                } else if input.pressed(Command::Cancel) {
                    self.enter_menu();
                } else if input.pressed(Command::Leaderboard) {
                    self.open_leaderboard();
                }
            }
            Screen::Leaderboard => {
                if input.pressed(Command::Confirm) || input.pressed(Command::Cancel) {
                    self.enter_menu();
                }
            }
            Screen::Settings => {
                if self.settings.handle_input(input) {
                    self.store.save_settings(self.settings.show_grid);
                    self.enter_menu();
                }
            }
        }
    }

    fn start_round(&mut self) {
        self.round = Round::new(&self.level, &mut self.rng);
        self.enter(Screen::Playing);
    }

    /// Record the round's score and move to the game-over screen.  The
    /// banners are judged against the records from before the save.
    fn finish_round(&mut self, outcome: Outcome) {
        let score = self.round.score();
        info!("Round ended ({outcome:?}) with score {score}");
        let verdict = Verdict::new(
            outcome,
            score,
            self.store.personal_best(),
            self.store.overall_highest(),
        );
        self.store.save_to_leaderboard(score);
        self.store.save_if_new_personal_best(score);
        self.enter(Screen::GameOver(verdict));
    }

    fn open_leaderboard(&mut self) {
        self.store.load_leaderboard();
        self.enter(Screen::Leaderboard);
    }

    fn enter_menu(&mut self) {
        self.enter(Screen::Menu(MainMenu::default()));
    }

    fn enter(&mut self, screen: Screen) {
        info!("Entering {} screen", screen.name());
        self.screen = screen;
    }

    fn shutdown(&mut self) {
        self.store.merge_session_best_on_shutdown();
        self.store.save_settings(self.settings.show_grid);
        info!("Session over");
    }

    fn draw(&mut self) -> io::Result<()> {
        let scene = Scene {
            screen: self.screen,
            round: &self.round,
            level: &self.level,
            settings: self.settings,
            player: self.store.player(),
            personal_best: self.store.personal_best(),
            overall_highest: self.store.overall_highest(),
            leaderboard: self.store.leaderboard(),
        };
        self.frontend.draw(scene)
    }
}

/// The screen currently shown, with any state that belongs to it alone
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Screen {
    Menu(MainMenu),
    Playing,
    Paused,
    GameOver(Verdict),
    Leaderboard,
    Settings,
}

impl Screen {
    fn name(&self) -> &'static str {
        match self {
            Screen::Menu(_) => "menu",
            Screen::Playing => "playing",
            Screen::Paused => "paused",
            Screen::GameOver(_) => "game over",
            Screen::Leaderboard => "leaderboard",
            Screen::Settings => "settings",
        }
    }
}

/// Everything needed to draw one frame
#[derive(Clone, Copy, Debug)]
struct Scene<'a> {
    screen: Screen,
    round: &'a Round,
    level: &'a LevelMap,
    settings: Settings,
    player: &'a str,
    personal_best: u32,
    overall_highest: u32,
    leaderboard: &'a [ScoreEntry],
}

impl Widget for Scene<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.screen {
            Screen::Menu(menu) => MenuView {
                menu,
                player: self.player,
                overall_highest: self.overall_highest,
                personal_best: self.personal_best,
            }
            .render(area, buf),
            Screen::Playing | Screen::Paused | Screen::GameOver(_) => {
                let display = get_display_area(area);
                Board {
                    round: self.round,
                    level: self.level,
                    show_grid: self.settings.show_grid,
                    personal_best: self.personal_best,
                    overall_highest: self.overall_highest,
                }
                .render(display, buf);
                if self.screen == Screen::Paused {
                    let popup = center_rect(display, Size::new(Paused::WIDTH, Paused::HEIGHT));
                    Clear.render(popup, buf);
                    Paused.render(popup, buf);
                } else if let Screen::GameOver(verdict) = self.screen {
                    let popup = center_rect(display, Size::new(Verdict::WIDTH, Verdict::HEIGHT));
                    Clear.render(popup, buf);
                    verdict.render(popup, buf);
                }
            }
            Screen::Leaderboard => LeaderboardView {
                entries: self.leaderboard,
                player: self.player,
            }
            .render(area, buf),
            Screen::Settings => self.settings.render(area, buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Position;
    use crate::store::{MemoryMedium, Record};
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use std::collections::VecDeque;
    use std::time::Duration;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    /// Plays back a fixed list of frames, then quits, or fails if
    /// `broken` is set
    #[derive(Debug, Default)]
    struct Scripted {
        frames: VecDeque<FrameInput>,
        broken: bool,
        last_drawn: Option<Buffer>,
        draws: usize,
    }

    impl Frontend for Scripted {
        fn next_frame(&mut self) -> io::Result<FrameInput> {
            match self.frames.pop_front() {
                Some(input) => Ok(input),
                None if self.broken => Err(io::Error::other("terminal gone")),
                None => Ok(FrameInput::default().with(Command::Quit)),
            }
        }

        fn draw<W: Widget>(&mut self, widget: W) -> io::Result<()> {
            let area = Rect::new(0, 0, 80, 24);
            let mut buffer = Buffer::empty(area);
            widget.render(area, &mut buffer);
            self.last_drawn = Some(buffer);
            self.draws += 1;
            Ok(())
        }
    }

    type TestApp = App<MemoryMedium, Scripted, ChaCha12Rng>;

    fn app_with(medium: MemoryMedium) -> TestApp {
        App::new(
            Store::open(medium, String::from("alice")),
            Scripted::default(),
            ChaCha12Rng::seed_from_u64(RNG_SEED),
        )
    }

    fn press(cmd: Command) -> FrameInput {
        FrameInput::default().with(cmd)
    }

    fn wait(millis: u64) -> FrameInput {
        FrameInput::new(Duration::from_millis(millis))
    }

    fn screen_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut s = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                s.push_str(buffer[(x, y)].symbol());
            }
            s.push('\n');
        }
        s
    }

    #[test]
    fn starts_at_menu() {
        let app = app_with(MemoryMedium::default());
        assert_eq!(app.screen, Screen::Menu(MainMenu::default()));
        assert!(app.settings.show_grid);
        assert!(app.running);
    }

    #[test]
    fn loads_settings_and_obstacles() {
        let medium = MemoryMedium::default()
            .with(Record::Settings, "0\n")
            .with(Record::Obstacles, "1 1\n2 2\n");
        let app = app_with(medium);
        assert!(!app.settings.show_grid);
        assert!(app.level.is_obstacle(Position::new(1, 1)));
        assert!(app.level.is_obstacle(Position::new(2, 2)));
    }

    #[test]
    fn pause_and_resume() {
        let mut app = app_with(MemoryMedium::default());
        app.step(&press(Command::Confirm));
        assert_eq!(app.screen, Screen::Playing);
        app.step(&press(Command::Pause));
        assert_eq!(app.screen, Screen::Paused);
        let frozen = app.round.clone();
        app.step(&wait(1000));
        assert_eq!(app.round, frozen);
        app.step(&press(Command::Pause));
        assert_eq!(app.screen, Screen::Playing);
        app.step(&press(Command::Cancel));
        assert_eq!(app.screen, Screen::Menu(MainMenu::default()));
    }

    #[test]
    fn paused_to_menu() {
        let mut app = app_with(MemoryMedium::default());
        app.step(&press(Command::Confirm));
        app.step(&press(Command::Pause));
        app.step(&press(Command::Cancel));
        assert_eq!(app.screen, Screen::Menu(MainMenu::default()));
    }

    #[test]
    fn game_over_saves_records() {
        let medium = MemoryMedium::default()
            .with(Record::PlayerBests, "alice 5\nbob 50\n")
            .with(Record::Leaderboard, "bob 50\n")
            .with(Record::Obstacles, "15 8\n");
        let mut app = app_with(medium);
        app.step(&press(Command::Confirm));
        assert_eq!(app.screen, Screen::Playing);
        app.round.set_food(Position::new(15, 9));
        app.step(&wait(150));
        assert_eq!(app.round.score(), 10);
        assert_eq!(app.screen, Screen::Playing);
        app.step(&wait(150));
        let Screen::GameOver(verdict) = app.screen else {
            panic!("Expected game over, got {:?}", app.screen);
        };
        assert_eq!(verdict, Verdict::new(Outcome::Collided, 10, 5, 50));
        assert!(verdict.new_personal_best());
        assert!(!verdict.new_highest());
        assert_eq!(app.store.personal_best(), 10);
        assert_eq!(
            app.store.medium().get(Record::PlayerBests),
            Some("alice 10\nbob 50\n")
        );
        assert_eq!(
            app.store.medium().get(Record::Leaderboard),
            Some("bob 50\nalice 10\n")
        );

        app.step(&press(Command::Leaderboard));
        assert_eq!(app.screen, Screen::Leaderboard);
        assert_eq!(
            app.store.leaderboard(),
            [ScoreEntry::new("bob", 50), ScoreEntry::new("alice", 10)]
        );
        app.step(&press(Command::Confirm));
        assert_eq!(app.screen, Screen::Menu(MainMenu::default()));
    }

    #[test]
    fn zero_score_not_recorded() {
        let medium = MemoryMedium::default().with(Record::Obstacles, "15 9\n");
        let mut app = app_with(medium);
        app.step(&press(Command::Confirm));
        app.step(&wait(150));
        assert!(matches!(app.screen, Screen::GameOver(_)));
        assert_eq!(app.store.medium().get(Record::Leaderboard), None);
        assert_eq!(app.store.medium().get(Record::PlayerBests), None);
    }

    #[test]
    fn restart_after_game_over() {
        let medium = MemoryMedium::default().with(Record::Obstacles, "15 9\n");
        let mut app = app_with(medium);
        app.step(&press(Command::Confirm));
        app.step(&wait(150));
        assert!(matches!(app.screen, Screen::GameOver(_)));
        app.step(&press(Command::Restart));
        assert_eq!(app.screen, Screen::Playing);
        assert_eq!(app.round.score(), 0);
        assert_eq!(app.round.outcome(), None);
        app.step(&wait(150));
        app.step(&press(Command::Cancel));
        assert_eq!(app.screen, Screen::Menu(MainMenu::default()));
    }

    #[test]
    fn turning_while_playing() {
        let mut app = app_with(MemoryMedium::default());
        app.step(&press(Command::Confirm));
        app.round.set_food(Position::new(0, 0));
        let mut input = wait(150);
        input.press(Command::Left);
        app.step(&input);
        let mut again = app.round.clone();
        // Left was committed, so Right is now a reversal
        app.round.turn(Direction::Right);
        again.turn(Direction::Left);
        assert_eq!(app.round, again);
    }

    #[test]
    fn settings_toggle_and_save() {
        let mut app = app_with(MemoryMedium::default());
        app.step(&press(Command::Down));
        app.step(&press(Command::Down));
        app.step(&press(Command::Confirm));
        assert_eq!(app.screen, Screen::Settings);
        app.step(&press(Command::Toggle));
        assert!(!app.settings.show_grid);
        assert_eq!(app.store.medium().get(Record::Settings), None);
        app.step(&press(Command::Cancel));
        assert_eq!(app.screen, Screen::Menu(MainMenu::default()));
        assert_eq!(app.store.medium().get(Record::Settings), Some("0\n"));
    }

    #[test]
    fn leaderboard_from_menu() {
        let medium = MemoryMedium::default().with(Record::Leaderboard, "bob 20\nbob 40\n");
        let mut app = app_with(medium);
        app.step(&press(Command::Down));
        app.step(&press(Command::Confirm));
        assert_eq!(app.screen, Screen::Leaderboard);
        assert_eq!(app.store.leaderboard(), [ScoreEntry::new("bob", 40)]);
        app.step(&press(Command::Cancel));
        assert_eq!(app.screen, Screen::Menu(MainMenu::default()));
    }

    #[test]
    fn exit_from_menu() {
        let mut app = app_with(MemoryMedium::default());
        app.step(&press(Command::Up));
        assert!(app.running);
        app.step(&press(Command::Confirm));
        assert!(!app.running);
    }

    #[test]
    fn quit_while_playing() {
        let mut app = app_with(MemoryMedium::default());
        app.step(&press(Command::Confirm));
        app.step(&press(Command::Quit));
        assert!(!app.running);
        assert_eq!(app.screen, Screen::Playing);
    }

    #[test]
    fn run_draws_and_saves_on_exit() {
        let medium = MemoryMedium::default()
            .with(Record::PlayerBests, "bob 7\nalice 3\nbob 9\n")
            .with(Record::Settings, "0\n");
        let mut app = app_with(medium);
        app.frontend.frames = VecDeque::from([
            FrameInput::default(),
            press(Command::Confirm),
            press(Command::Pause),
        ]);
        app.run().unwrap();
        assert!(!app.running);
        assert_eq!(app.frontend.draws, 3);
        let text = screen_text(app.frontend.last_drawn.as_ref().unwrap());
        assert!(text.contains("PAUSED"));
        assert!(text.contains("Score: 0"));
        assert_eq!(
            app.store.medium().get(Record::PlayerBests),
            Some("alice 3\nbob 9\n")
        );
        assert_eq!(app.store.medium().get(Record::Settings), Some("0\n"));
    }

    #[test]
    fn frontend_failure_still_saves() {
        let medium = MemoryMedium::default().with(Record::PlayerBests, "bob 7\nalice 3\nbob 9\n");
        let mut app = app_with(medium);
        app.settings.show_grid = false;
        app.frontend.frames = VecDeque::from([FrameInput::default()]);
        app.frontend.broken = true;
        let e = app.run().unwrap_err();
        assert_eq!(e.to_string(), "terminal gone");
        assert_eq!(app.frontend.draws, 1);
        assert_eq!(app.store.medium().get(Record::Settings), Some("0\n"));
        assert_eq!(
            app.store.medium().get(Record::PlayerBests),
            Some("alice 3\nbob 9\n")
        );
    }

    #[test]
    fn menu_screen_drawn() {
        let medium = MemoryMedium::default().with(Record::PlayerBests, "alice 30\nbob 70\n");
        let mut app = app_with(medium);
        app.draw().unwrap();
        let text = screen_text(app.frontend.last_drawn.as_ref().unwrap());
        assert!(text.contains("Welcome, alice!"));
        assert!(text.contains("Highest Score: 70"));
        assert!(text.contains("Your Best: 30"));
    }

    #[test]
    fn game_over_screen_drawn() {
        let medium = MemoryMedium::default().with(Record::Obstacles, "15 9\n");
        let mut app = app_with(medium);
        app.step(&press(Command::Confirm));
        app.step(&wait(150));
        app.draw().unwrap();
        let text = screen_text(app.frontend.last_drawn.as_ref().unwrap());
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("Final Score: 0"));
        assert!(!text.contains("NEW PERSONAL BEST!"));
    }
}
