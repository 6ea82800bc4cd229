use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset};

use crate::error::StoreError;
use crate::game::GameSession;
use crate::leaderboard::GameRecord;

/// Configuration for the leaderboard file.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LeaderboardConfig {
    pub path: PathBuf,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        LeaderboardConfig {
            path: PathBuf::from("leaderboard.txt"),
        }
    }
}

/// Append-only history of finished games, kept as one JSON array on disk.
///
/// The store holds no lock of its own; concurrent appends must be serialized
/// by the caller.
#[derive(Debug, Clone)]
pub struct LeaderboardStore {
    path: PathBuf,
}

impl LeaderboardStore {
    pub fn new(config: &LeaderboardConfig) -> Self {
        LeaderboardStore {
            path: config.path.clone(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record in file order. A missing, unreadable or malformed
    /// file yields an empty list.
    pub fn load(&self) -> Vec<GameRecord> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "cannot read leaderboard");
                return Vec::new();
            }
        };
        if content.trim().is_empty() {
            return Vec::new();
        }

        let mut records: Vec<GameRecord> = match serde_json::from_str(&content) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "malformed leaderboard, ignoring it");
                return Vec::new();
            }
        };

        for (i, record) in records.iter_mut().enumerate() {
            if record.id == 0 {
                record.id = i as u32 + 1;
            }
        }

        records
    }

    /// One past the highest id in use, or 1 for an empty history.
    pub fn next_id(records: &[GameRecord]) -> Result<u32, StoreError> {
        match records.iter().map(|r| r.id).max() {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or(StoreError::IdsExhausted(max)),
        }
    }

    /// Record a finished session and rewrite the file. Returns the stored
    /// record with its assigned id.
    pub fn append(
        &self,
        session: &GameSession,
        date: DateTime<FixedOffset>,
    ) -> Result<GameRecord, StoreError> {
        let mut records = self.load();
        let record = GameRecord::from_session(Self::next_id(&records)?, session, date)?;
        records.push(record.clone());
        self.write_all(&records)?;

        tracing::info!(
            id = record.id,
            winner = %record.winner,
            draw = record.draw,
            turns = record.turn_count,
            "game recorded"
        );
        Ok(record)
    }

    /// All records, most recent first.
    pub fn newest_first(&self) -> Vec<GameRecord> {
        let mut records = self.load();
        records.reverse();
        records
    }

    pub fn find(&self, id: u32) -> Option<GameRecord> {
        self.load().into_iter().find(|r| r.id == id)
    }

    /// Replace the file contents. Writes a sibling temp file and renames it
    /// over the target so readers never see a half-written array.
    fn write_all(&self, records: &[GameRecord]) -> Result<(), StoreError> {
        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        let mut json = serde_json::to_string_pretty(records)?;
        json.push('\n');

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let mut tmp_name = OsString::from(self.path.as_os_str());
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        fs::write(&tmp_path, json).map_err(write_err)?;
        fs::rename(&tmp_path, &self.path).map_err(write_err)?;
        Ok(())
    }
}
