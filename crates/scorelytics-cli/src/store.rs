//! JSON file holding every saved score record
//!
//! The file contains a single array of records. A missing file reads as an
//! empty collection. Writes go to a temporary file in the same directory that
//! then replaces the store, so an interrupted write never truncates it.

use std::{
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use chrono::{DateTime, TimeDelta, Utc};
use scorelytics_analytics::{
    collection::ScoreCollection,
    record::{ScoreRecord, UserId},
};
use tracing::{debug, info};

use crate::util;

#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new<P>(path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> anyhow::Result<ScoreCollection> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "store file does not exist yet");
            return Ok(ScoreCollection::new());
        }
        let collection: ScoreCollection = util::read_json_file("score store", &self.path)?;
        debug!(
            path = %self.path.display(),
            records = collection.len(),
            "loaded score store"
        );
        Ok(collection)
    }

    pub fn save(&self, collection: &ScoreCollection) -> anyhow::Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let tmp = tempfile::NamedTempFile::new_in(dir).with_context(|| {
            format!("Failed to create temporary file in {}", dir.display())
        })?;

        let mut writer = BufWriter::new(tmp.as_file());
        serde_json::to_writer_pretty(&mut writer, collection)
            .with_context(|| format!("Failed to serialize score store {}", self.path.display()))?;
        writer
            .flush()
            .with_context(|| format!("Failed to write score store {}", self.path.display()))?;
        drop(writer);

        tmp.persist(&self.path)
            .with_context(|| format!("Failed to replace score store {}", self.path.display()))?;
        Ok(())
    }

    /// Records a new score for `user_id`, stamped with the current time.
    pub fn append(&self, user_id: UserId, score: f64) -> anyhow::Result<ScoreRecord> {
        self.append_at(user_id, score, Utc::now())
    }

    fn append_at(
        &self,
        user_id: UserId,
        score: f64,
        now: DateTime<Utc>,
    ) -> anyhow::Result<ScoreRecord> {
        let mut collection = self.load()?;
        let recorded_at = next_recorded_at(collection.latest_recorded_at(), now);
        let record = ScoreRecord::new(user_id, score, recorded_at)
            .with_context(|| format!("Rejected score {score}"))?;

        collection.insert(record.clone());
        self.save(&collection)?;

        info!(
            user_id = %record.user_id(),
            score = record.score(),
            recorded_at = %record.recorded_at(),
            total = collection.len(),
            "saved score"
        );
        Ok(record)
    }
}

/// Timestamp for a new record: `now`, unless that would not be strictly
/// later than the newest stored record.
fn next_recorded_at(latest: Option<DateTime<Utc>>, now: DateTime<Utc>) -> DateTime<Utc> {
    match latest {
        Some(latest) if now <= latest => latest + TimeDelta::milliseconds(1),
        _ => now,
    }
}
