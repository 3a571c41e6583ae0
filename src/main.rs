mod app;
mod command;
mod config;
mod consts;
mod frontend;
mod game;
mod leaderboard;
mod menu;
mod settings;
mod store;
mod util;
use crate::app::App;
use crate::config::Config;
use crate::frontend::TerminalFrontend;
use crate::store::{FileMedium, Store};
use lexopt::{Arg, Parser, ValueExt};
use log::{info, LevelFilter};
use simplelog::WriteLogger;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Clone, Debug, Eq, PartialEq)]
enum Invocation {
    Run {
        config: Option<PathBuf>,
        name: Option<String>,
    },
    Help,
    Version,
}

impl Invocation {
    fn from_parser(mut parser: Parser) -> Result<Invocation, lexopt::Error> {
        let mut config = None;
        let mut name = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('n') | Arg::Long("name") => {
                    name = Some(parser.value()?.string()?);
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Invocation::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Invocation::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Invocation::Run { config, name })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Invocation::Run { config, name } => run(config, name),
            Invocation::Help => {
                println!(
                    "Usage: gridsnake [-c|--config FILE] [-n|--name NAME]\n\
                     \n\
                     Play snake on a 30x20 grid in the terminal\n\
                     \n\
                     Options:\n  \
                       -c, --config FILE  Read configuration from FILE\n  \
                       -n, --name NAME    Play as NAME instead of asking\n  \
                       -h, --help         Show this help and exit\n  \
                       -V, --version      Show the program version and exit"
                );
                Ok(())
            }
            Invocation::Version => {
                println!("gridsnake {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn run(config_path: Option<PathBuf>, name: Option<String>) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => Config::load(&path, false)?,
        None => Config::load(&Config::default_path()?, true)?,
    };
    init_logging(&config.log_file());
    info!("Starting gridsnake {}", env!("CARGO_PKG_VERSION"));
    let default_name = &config.player.default_name;
    let player = match name {
        Some(name) => util::player_name(&name, default_name),
        None => prompt_name(default_name)?,
    };
    let data_dir = config.data_dir();
    info!("Using data directory {}", data_dir.display());
    let store = Store::open(FileMedium::new(data_dir, config.obstacles_file()), player);
    let terminal = ratatui::init();
    let r = App::new(store, TerminalFrontend::new(terminal), rand::rng()).run();
    ratatui::restore();
    r?;
    info!("Exiting");
    Ok(())
}

/// Send log messages to `path`.  If the file cannot be opened, nothing is
/// logged.
fn init_logging(path: &Path) {
    if let Some(parent) = path.parent() {
        if fs_err::create_dir_all(parent).is_err() {
            return;
        }
    }
    if let Ok(fp) = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
    {
        // Only fails if a logger is already set
        let _ = WriteLogger::init(LevelFilter::Debug, simplelog::Config::default(), fp);
    }
}

fn prompt_name(default: &str) -> io::Result<String> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "Enter your name [{default}]: ")?;
    stdout.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(util::player_name(&line, default))
}

fn main() -> ExitCode {
    match Invocation::from_parser(Parser::from_env())
        .map_err(anyhow::Error::from)
        .and_then(Invocation::run)
    {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gridsnake: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Result<Invocation, lexopt::Error> {
        Invocation::from_parser(Parser::from_iter(
            std::iter::once("gridsnake").chain(args.iter().copied()),
        ))
    }

    #[test]
    fn no_args() {
        assert_eq!(
            parse(&[]).unwrap(),
            Invocation::Run {
                config: None,
                name: None
            }
        );
    }

    #[test]
    fn config_and_name() {
        assert_eq!(
            parse(&["-c", "my.toml", "--name", "alice"]).unwrap(),
            Invocation::Run {
                config: Some(PathBuf::from("my.toml")),
                name: Some(String::from("alice"))
            }
        );
    }

    #[rstest]
    #[case(&["-h"], Invocation::Help)]
    #[case(&["--help"], Invocation::Help)]
    #[case(&["-n", "bob", "-V"], Invocation::Version)]
    #[case(&["--version"], Invocation::Version)]
    fn early_exit(#[case] args: &[&str], #[case] expected: Invocation) {
        assert_eq!(parse(args).unwrap(), expected);
    }

    #[rstest]
    #[case(&["--level", "3"])]
    #[case(&["extra"])]
    #[case(&["--name"])]
    fn bad_args(#[case] args: &[&str]) {
        assert!(parse(args).is_err());
    }
}
