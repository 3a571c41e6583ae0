//! Persistence of scores, settings, and the obstacle layout
mod records;
mod scores;
pub(crate) use self::records::ScoreEntry;
pub(crate) use self::scores::Store;
use enum_map::Enum;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The independent records kept on the storage medium
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum Record {
    /// Best score ever achieved by each player
    PlayerBests,
    /// Top scores across all players
    Leaderboard,
    /// The show-grid display setting
    Settings,
    /// Obstacle positions for the playing field
    Obstacles,
}

impl Record {
    pub(crate) fn file_name(self) -> &'static str {
        match self {
            Record::PlayerBests => "user_scores.txt",
            Record::Leaderboard => "scores.txt",
            Record::Settings => "settings.txt",
            Record::Obstacles => "obstacles.txt",
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Record::PlayerBests => "player bests",
            Record::Leaderboard => "leaderboard",
            Record::Settings => "settings",
            Record::Obstacles => "obstacles",
        };
        f.pad(name)
    }
}

/// Where records are kept.  Every record is read and written whole.
pub(crate) trait Medium {
    /// Read the full text of a record.  Returns `Ok(None)` if the record has
    /// never been written.
    fn read(&self, record: Record) -> Result<Option<String>, LoadError>;

    /// Replace the full text of a record
    fn write(&mut self, record: Record, content: &str) -> Result<(), SaveError>;
}

/// Records stored as flat text files in a data directory
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct FileMedium {
    dir: PathBuf,
    obstacles_file: PathBuf,
}

impl FileMedium {
    pub(crate) fn new(dir: PathBuf, obstacles_file: PathBuf) -> FileMedium {
        FileMedium {
            dir,
            obstacles_file,
        }
    }

    fn path(&self, record: Record) -> PathBuf {
        match record {
            Record::Obstacles => self.obstacles_file.clone(),
            _ => self.dir.join(record.file_name()),
        }
    }
}

impl Medium for FileMedium {
    fn read(&self, record: Record) -> Result<Option<String>, LoadError> {
        match fs_err::read_to_string(self.path(record)) {
            Ok(src) => Ok(Some(src)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(LoadError { record, source: e }),
        }
    }

    fn write(&mut self, record: Record, content: &str) -> Result<(), SaveError> {
        let path = self.path(record);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(|e| SaveError::mkdir(record, e))?;
        }
        fs_err::write(&path, content).map_err(|e| SaveError::write(record, e))?;
        Ok(())
    }
}

#[derive(Debug, Error)]
#[error("Failed to read {record} record")]
pub(crate) struct LoadError {
    record: Record,
    #[source]
    source: std::io::Error,
}

#[derive(Debug, Error)]
#[error("Failed to save {record} record")]
pub(crate) struct SaveError {
    record: Record,
    #[source]
    source: SaveErrorSource,
}

impl SaveError {
    fn mkdir(record: Record, e: std::io::Error) -> Self {
        SaveError {
            record,
            source: SaveErrorSource::Mkdir(e),
        }
    }

    fn write(record: Record, e: std::io::Error) -> Self {
        SaveError {
            record,
            source: SaveErrorSource::Write(e),
        }
    }
}

#[derive(Debug, Error)]
enum SaveErrorSource {
    #[error("failed to create parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to write file")]
    Write(#[source] std::io::Error),
}

/// In-memory records for tests
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub(crate) struct MemoryMedium {
    records: enum_map::EnumMap<Record, Option<String>>,
    /// If set, every write fails
    pub(crate) read_only: bool,
}

#[cfg(test)]
impl MemoryMedium {
    pub(crate) fn with(mut self, record: Record, content: &str) -> MemoryMedium {
        self.records[record] = Some(String::from(content));
        self
    }

    pub(crate) fn get(&self, record: Record) -> Option<&str> {
        self.records[record].as_deref()
    }
}

#[cfg(test)]
impl Medium for MemoryMedium {
    fn read(&self, record: Record) -> Result<Option<String>, LoadError> {
        Ok(self.records[record].clone())
    }

    fn write(&mut self, record: Record, content: &str) -> Result<(), SaveError> {
        if self.read_only {
            return Err(SaveError::write(
                record,
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only medium"),
            ));
        }
        self.records[record] = Some(String::from(content));
        Ok(())
    }
}
