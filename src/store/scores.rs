use super::records::{self, Leaderboard, PlayerBests, ScoreEntry, Schema};
use super::{Medium, Record};
use crate::game::Position;
use log::{debug, info, warn};

/// The player's view of the persisted records: their best score, the best
/// score of anyone, and the leaderboard, kept in memory and written back at
/// save points.
///
/// Persistence is best-effort.  A record that cannot be read is treated as
/// empty, and a record that cannot be written is left as it was; either
/// failure is logged and the in-memory state stays authoritative.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Store<M> {
    medium: M,
    player: String,
    overall_highest: u32,
    personal_best: u32,
    leaderboard: Vec<ScoreEntry>,
}

impl<M: Medium> Store<M> {
    /// Open the records for `player`, loading their best scores and the
    /// leaderboard
    pub(crate) fn open(medium: M, player: String) -> Store<M> {
        let mut store = Store {
            medium,
            player,
            overall_highest: 0,
            personal_best: 0,
            leaderboard: Vec::new(),
        };
        store.load_global_best();
        store.load_leaderboard();
        store
    }

    /// Rescan the player-bests record and return `(overall_highest,
    /// personal_best)`
    pub(crate) fn load_global_best(&mut self) -> (u32, u32) {
        let entries = records::parse_scores(&self.read(Record::PlayerBests));
        self.overall_highest = entries.iter().map(|e| e.score).max().unwrap_or(0);
        self.personal_best = entries
            .iter()
            .filter(|e| e.name == self.player)
            .map(|e| e.score)
            .max()
            .unwrap_or(0);
        debug!(
            "Loaded best scores: overall {}, {} {}",
            self.overall_highest, self.player, self.personal_best
        );
        (self.overall_highest, self.personal_best)
    }

    /// If `score` beats the player's personal best, record it as the new
    /// personal best
    pub(crate) fn save_if_new_personal_best(&mut self, score: u32) {
        if score <= self.personal_best {
            return;
        }
        let entry = ScoreEntry::new(self.player.clone(), score);
        self.merge_record::<PlayerBests>(Some(entry));
        info!("New personal best for {}: {score}", self.player);
        self.personal_best = score;
        self.overall_highest = self.overall_highest.max(score);
    }

    /// Re-merge the player-bests record with what is known in memory, keeping
    /// the higher score for every player.  Run once when the session ends.
    pub(crate) fn merge_session_best_on_shutdown(&mut self) {
        let known = (self.personal_best > 0)
            .then(|| ScoreEntry::new(self.player.clone(), self.personal_best));
        self.merge_record::<PlayerBests>(known);
    }

    /// Reread the leaderboard record
    pub(crate) fn load_leaderboard(&mut self) -> &[ScoreEntry] {
        let merged = records::merge_max(records::parse_scores(&self.read(Record::Leaderboard)));
        self.leaderboard = Leaderboard::arrange(merged);
        &self.leaderboard
    }

    /// Enter `score` on the leaderboard for the player, keeping their higher
    /// entry if they already have one.  Zero scores are not recorded.
    pub(crate) fn save_to_leaderboard(&mut self, score: u32) {
        if score == 0 {
            return;
        }
        let entry = ScoreEntry::new(self.player.clone(), score);
        self.leaderboard = self.merge_record::<Leaderboard>(Some(entry));
    }

    /// Load the show-grid setting, defaulting to on
    pub(crate) fn load_settings(&self) -> bool {
        records::parse_flag(&self.read(Record::Settings)).unwrap_or(true)
    }

    pub(crate) fn save_settings(&mut self, show_grid: bool) {
        self.write(Record::Settings, &records::render_flag(show_grid));
    }

    pub(crate) fn load_obstacles(&self) -> Vec<Position> {
        let obstacles = records::parse_obstacles(&self.read(Record::Obstacles));
        debug!("Loaded {} obstacles", obstacles.len());
        obstacles
    }

    pub(crate) fn player(&self) -> &str {
        &self.player
    }

    pub(crate) fn overall_highest(&self) -> u32 {
        self.overall_highest
    }

    pub(crate) fn personal_best(&self) -> u32 {
        self.personal_best
    }

    pub(crate) fn leaderboard(&self) -> &[ScoreEntry] {
        &self.leaderboard
    }

    #[cfg(test)]
    pub(crate) fn medium(&self) -> &M {
        &self.medium
    }

    /// Load a score record, merge `extra` into it by maximum, and write it
    /// back arranged per `S`.  Returns the entries as written.
    fn merge_record<S: Schema>(&mut self, extra: Option<ScoreEntry>) -> Vec<ScoreEntry> {
        let stored = records::parse_scores(&self.read(S::RECORD));
        let entries = S::arrange(records::merge_max(stored.into_iter().chain(extra)));
        self.write(S::RECORD, &records::render_scores(&entries));
        entries
    }

    fn read(&self, record: Record) -> String {
        match self.medium.read(record) {
            Ok(Some(src)) => src,
            Ok(None) => {
                debug!("No {record} record yet");
                String::new()
            }
            Err(e) => {
                warn!("{:#}", anyhow::Error::from(e));
                String::new()
            }
        }
    }

    fn write(&mut self, record: Record, content: &str) {
        match self.medium.write(record, content) {
            Ok(()) => debug!("Saved {record} record"),
            Err(e) => warn!("{:#}", anyhow::Error::from(e)),
        }
    }
}
