use crate::consts;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Where data files are kept
    #[serde(default)]
    pub(crate) files: FileConfig,

    /// Settings about the player
    #[serde(default)]
    pub(crate) player: PlayerConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// The directory holding the score, settings, and obstacle records: the
    /// configured directory, else the platform's local data directory, else
    /// the current directory
    pub(crate) fn data_dir(&self) -> PathBuf {
        self.files
            .data_dir
            .clone()
            .or_else(|| dirs::data_local_dir().map(|p| p.join("gridsnake")))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Path to the obstacles record.  A relative path is taken relative to
    /// the data directory.
    pub(crate) fn obstacles_file(&self) -> PathBuf {
        self.in_data_dir(self.files.obstacles_file.as_deref(), "obstacles.txt")
    }

    /// Path to the log file.  A relative path is taken relative to the data
    /// directory.
    pub(crate) fn log_file(&self) -> PathBuf {
        self.in_data_dir(self.files.log_file.as_deref(), "gridsnake.log")
    }

    fn in_data_dir(&self, configured: Option<&Path>, default: &str) -> PathBuf {
        self.data_dir()
            .join(configured.unwrap_or_else(|| Path::new(default)))
    }
}

#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct FileConfig {
    data_dir: Option<PathBuf>,
    obstacles_file: Option<PathBuf>,
    log_file: Option<PathBuf>,
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct PlayerConfig {
    /// Name used when the player enters a blank name
    pub(crate) default_name: String,
}

impl Default for PlayerConfig {
    fn default() -> PlayerConfig {
        PlayerConfig {
            default_name: String::from(consts::DEFAULT_PLAYER_NAME),
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn parse_full() {
        let cfg = toml::from_str::<Config>(concat!(
            "[files]\n",
            "data-dir = \"/var/games/gridsnake\"\n",
            "obstacles-file = \"walls.txt\"\n",
            "log-file = \"/tmp/gridsnake.log\"\n",
            "\n",
            "[player]\n",
            "default-name = \"Anon\"\n",
        ))
        .unwrap();
        assert_eq!(cfg.data_dir(), PathBuf::from("/var/games/gridsnake"));
        assert_eq!(
            cfg.obstacles_file(),
            PathBuf::from("/var/games/gridsnake/walls.txt")
        );
        assert_eq!(cfg.log_file(), PathBuf::from("/tmp/gridsnake.log"));
        assert_eq!(cfg.player.default_name, "Anon");
    }

    #[test]
    fn parse_empty() {
        let cfg = toml::from_str::<Config>("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.player.default_name, "Player");
    }

    #[test]
    fn defaults_follow_data_dir() {
        let cfg = toml::from_str::<Config>("[files]\ndata-dir = \"scores\"\n").unwrap();
        assert_eq!(cfg.obstacles_file(), Path::new("scores").join("obstacles.txt"));
        assert_eq!(cfg.log_file(), Path::new("scores").join("gridsnake.log"));
    }

    #[test]
    fn parse_bad_type() {
        let r = toml::from_str::<Config>("[player]\ndefault-name = 42\n");
        assert!(r.is_err());
    }

    #[test]
    fn load_missing() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        assert_eq!(Config::load(&path, true).unwrap(), Config::default());
        assert!(matches!(
            Config::load(&path, false),
            Err(ConfigError::Read(_))
        ));
    }

    #[test]
    fn load_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        fs_err::write(&path, "[player]\ndefault-name = \"Guest\"\n").unwrap();
        let cfg = Config::load(&path, false).unwrap();
        assert_eq!(cfg.player.default_name, "Guest");
        fs_err::write(&path, "[player\n").unwrap();
        assert!(matches!(
            Config::load(&path, true),
            Err(ConfigError::Parse(_))
        ));
    }
}
