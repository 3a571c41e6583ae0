//! Text formats of the persisted records and the merge rules shared by the
//! score records
use super::Record;
use crate::consts;
use crate::game::Position;
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// A player's name paired with a score
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub(crate) struct ScoreEntry {
    pub(crate) name: String,
    pub(crate) score: u32,
}

impl ScoreEntry {
    pub(crate) fn new<S: Into<String>>(name: S, score: u32) -> ScoreEntry {
        ScoreEntry {
            name: name.into(),
            score,
        }
    }
}

/// How a score record is arranged on disk once its entries have been merged
pub(crate) trait Schema {
    const RECORD: Record;

    /// Turn the merged name → best score mapping into the entries to write
    fn arrange(merged: BTreeMap<String, u32>) -> Vec<ScoreEntry>;
}

/// The record of every player's best score, one line per player in name
/// order
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct PlayerBests;

impl Schema for PlayerBests {
    const RECORD: Record = Record::PlayerBests;

    fn arrange(merged: BTreeMap<String, u32>) -> Vec<ScoreEntry> {
        merged
            .into_iter()
            .map(|(name, score)| ScoreEntry { name, score })
            .collect()
    }
}

/// The leaderboard: highest scores first, capped at
/// [`MAX_LEADERBOARD_ENTRIES`][consts::MAX_LEADERBOARD_ENTRIES]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Leaderboard;

impl Schema for Leaderboard {
    const RECORD: Record = Record::Leaderboard;

    fn arrange(merged: BTreeMap<String, u32>) -> Vec<ScoreEntry> {
        let mut entries = PlayerBests::arrange(merged);
        // Stable, so equal scores stay in name order
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(consts::MAX_LEADERBOARD_ENTRIES);
        entries
    }
}

/// Parse `name score` pairs of whitespace-separated tokens.  Parsing stops at
/// the first pair whose score is not a non-negative integer.
pub(crate) fn parse_scores(src: &str) -> Vec<ScoreEntry> {
    let mut tokens = src.split_whitespace();
    let mut entries = Vec::new();
    while let (Some(name), Some(score)) = (tokens.next(), tokens.next()) {
        let Ok(score) = score.parse::<u32>() else {
            break;
        };
        entries.push(ScoreEntry::new(name, score));
    }
    entries
}

/// Render entries as one `name score` line each
pub(crate) fn render_scores(entries: &[ScoreEntry]) -> String {
    let mut s = String::new();
    for ScoreEntry { name, score } in entries {
        let _ = writeln!(s, "{name} {score}");
    }
    s
}

/// Collapse entries into a mapping from each name to the highest score seen
/// for it
pub(crate) fn merge_max<I: IntoIterator<Item = ScoreEntry>>(entries: I) -> BTreeMap<String, u32> {
    let mut merged = BTreeMap::new();
    for ScoreEntry { name, score } in entries {
        merged
            .entry(name)
            .and_modify(|best: &mut u32| *best = (*best).max(score))
            .or_insert(score);
    }
    merged
}

/// Parse `x y` integer pairs.  Parsing stops at the first malformed token or
/// once [`MAX_OBSTACLES`][consts::MAX_OBSTACLES] in-bounds positions have been
/// read; positions outside the field are skipped.
pub(crate) fn parse_obstacles(src: &str) -> Vec<Position> {
    let mut tokens = src.split_whitespace().map(str::parse::<i32>);
    let mut obstacles = Vec::new();
    while obstacles.len() < consts::MAX_OBSTACLES {
        let (Some(Ok(x)), Some(Ok(y))) = (tokens.next(), tokens.next()) else {
            break;
        };
        let pos = Position::new(x, y);
        if pos.in_bounds() {
            obstacles.push(pos);
        }
    }
    obstacles
}

/// Parse a single `0`/`1` flag.  Returns `None` if the first token is
/// anything else.
pub(crate) fn parse_flag(src: &str) -> Option<bool> {
    match src.split_whitespace().next()? {
        "0" => Some(false),
        "1" => Some(true),
        _ => None,
    }
}

pub(crate) fn render_flag(flag: bool) -> String {
    format!("{}\n", u8::from(flag))
}
