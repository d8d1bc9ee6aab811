//! High score leaderboard system
//!
//! Tracks the top 10 named scores plus a separately persisted personal best.
//! Both are loaded fail-soft: unreadable data is logged and replaced by an
//! empty default.

use serde::{Deserialize, Serialize};

use crate::persistence::Storage;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// Maximum player name length, in characters
pub const MAX_NAME_LEN: usize = 10;

/// Name used when the player submits a blank one
pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Player's name (trimmed, at most `MAX_NAME_LEN` chars)
    pub name: String,
    /// Player's score
    pub score: u64,
}

impl ScoreEntry {
    /// Build an entry, normalizing the submitted name
    pub fn new(name: &str, score: u64) -> Self {
        Self {
            name: normalize_name(name),
            score,
        }
    }
}

/// Trim, substitute the default for blanks, and cap at `MAX_NAME_LEN` chars
pub fn normalize_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DEFAULT_PLAYER_NAME.to_string();
    }
    let capped: String = trimmed.chars().take(MAX_NAME_LEN).collect();
    capped.trim_end().to_string()
}

/// High score leaderboard
///
/// Serialized as a bare JSON array of `{name, score}` records.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Leaderboard {
    entries: Vec<ScoreEntry>,
}

impl Leaderboard {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "heli_run_highscores_v1";

    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build from arbitrary entries, restoring sort order and size bound
    pub fn from_entries(entries: Vec<ScoreEntry>) -> Self {
        let mut board = Self { entries };
        board.normalize();
        board
    }

    /// Entries, best first
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Check if a score qualifies for the leaderboard
    ///
    /// Matching the lowest score of a full board is enough to qualify.
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        match self.entries.get(MAX_HIGH_SCORES - 1) {
            Some(lowest) => score >= lowest.score,
            None => true,
        }
    }

    /// Get the rank a score would achieve (1-indexed)
    ///
    /// Ties land after existing entries with the same score, so a score equal
    /// to the lowest of a full board qualifies but would not be kept; that
    /// case, like a non-qualifying score, yields None.
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().filter(|e| e.score >= score).count() + 1;
        (rank <= MAX_HIGH_SCORES).then_some(rank)
    }

    /// Add an entry: append, stable sort descending, trim to size
    ///
    /// Returns the rank achieved (1-indexed), or None if trimming dropped it.
    pub fn insert(&mut self, entry: ScoreEntry) -> Option<usize> {
        let rank = self.entries.iter().filter(|e| e.score >= entry.score).count() + 1;
        self.entries.push(entry);
        self.normalize();
        (rank <= MAX_HIGH_SCORES).then_some(rank)
    }

    /// Remove every entry
    ///
    /// Irreversible once saved; callers confirm with the player first.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn normalize(&mut self) {
        // sort_by is stable, so equal scores keep insertion order
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_HIGH_SCORES);
    }

    /// Load high scores from storage
    ///
    /// A corrupt record is discarded from storage and treated as empty.
    pub fn load(storage: &mut impl Storage) -> Self {
        match storage.get(Self::STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<Vec<ScoreEntry>>(&json) {
                Ok(entries) => {
                    let board = Self::from_entries(entries);
                    log::info!("Loaded {} high scores", board.len());
                    return board;
                }
                Err(e) => {
                    log::warn!("Discarding corrupt high scores: {}", e);
                    if let Err(e) = storage.remove(Self::STORAGE_KEY) {
                        log::warn!("Could not discard corrupt high scores: {}", e);
                    }
                }
            },
            Ok(None) => {}
            Err(e) => log::warn!("Could not read high scores: {}", e),
        }

        log::info!("No high scores found, starting fresh");
        Self::new()
    }

    /// Save high scores to storage
    pub fn save(&self, storage: &mut impl Storage) {
        match serde_json::to_string(self) {
            Ok(json) => match storage.set(Self::STORAGE_KEY, &json) {
                Ok(()) => log::info!("High scores saved ({} entries)", self.entries.len()),
                Err(e) => log::warn!("Could not save high scores: {}", e),
            },
            Err(e) => log::warn!("Could not serialize high scores: {}", e),
        }
    }

    /// Drop the stored leaderboard entirely
    pub fn erase(storage: &mut impl Storage) {
        match storage.remove(Self::STORAGE_KEY) {
            Ok(()) => log::info!("High scores cleared"),
            Err(e) => log::warn!("Could not clear high scores: {}", e),
        }
    }
}

/// Personal best, persisted independently of the leaderboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BestScore(u64);

impl BestScore {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "heli_run_best_score";

    pub fn new(score: u64) -> Self {
        Self(score)
    }

    pub fn get(&self) -> u64 {
        self.0
    }

    /// Raise the best to `score` if it is higher; returns whether it was
    pub fn record(&mut self, score: u64) -> bool {
        if score > self.0 {
            self.0 = score;
            true
        } else {
            false
        }
    }

    /// Load the personal best, 0 if absent or unreadable
    pub fn load(storage: &impl Storage) -> Self {
        match storage.get(Self::STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<u64>(raw.trim()) {
                Ok(best) => return Self(best),
                Err(e) => log::warn!("Ignoring unreadable best score {:?}: {}", raw, e),
            },
            Ok(None) => {}
            Err(e) => log::warn!("Could not read best score: {}", e),
        }
        Self::default()
    }

    /// Save the personal best
    pub fn save(&self, storage: &mut impl Storage) {
        if let Err(e) = storage.set(Self::STORAGE_KEY, &self.0.to_string()) {
            log::warn!("Could not save best score: {}", e);
        }
    }
}
