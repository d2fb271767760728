use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::{ScoreRecord, UserId};

/// Score records ordered by `recorded_at`, newest first.
///
/// The ordering is established on construction, so code holding a
/// `ScoreCollection` may rely on it. Records sharing a timestamp keep their
/// relative input order.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone as _, Utc};
/// use scorelytics_analytics::{
///     collection::ScoreCollection,
///     record::{ScoreRecord, UserId},
/// };
///
/// let ana = UserId::new("ana").unwrap();
/// let older = ScoreRecord::new(ana.clone(), 50.0, Utc.timestamp_opt(10, 0).unwrap()).unwrap();
/// let newer = ScoreRecord::new(ana, 80.0, Utc.timestamp_opt(20, 0).unwrap()).unwrap();
///
/// let collection = ScoreCollection::from(vec![older, newer]);
/// assert_eq!(collection.scores().collect::<Vec<_>>(), vec![80.0, 50.0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<ScoreRecord>", into = "Vec<ScoreRecord>")]
pub struct ScoreCollection {
    records: Vec<ScoreRecord>,
}

/// Returns `true` if `records` are ordered by `recorded_at`, newest first.
#[must_use]
pub fn is_newest_first(records: &[ScoreRecord]) -> bool {
    records.is_sorted_by(|a, b| a.recorded_at() >= b.recorded_at())
}

/// Sorts `records` newest first. Stable, so ties keep their order.
pub fn sort_newest_first(records: &mut [ScoreRecord]) {
    records.sort_by(|a, b| b.recorded_at().cmp(&a.recorded_at()));
}

impl From<Vec<ScoreRecord>> for ScoreCollection {
    fn from(mut records: Vec<ScoreRecord>) -> Self {
        if !is_newest_first(&records) {
            sort_newest_first(&mut records);
        }
        Self { records }
    }
}

impl From<ScoreCollection> for Vec<ScoreRecord> {
    fn from(value: ScoreCollection) -> Self {
        value.records
    }
}

impl FromIterator<ScoreRecord> for ScoreCollection {
    fn from_iter<T: IntoIterator<Item = ScoreRecord>>(iter: T) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl ScoreCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Scores in collection order (newest first).
    pub fn scores(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(ScoreRecord::score)
    }

    /// Timestamp of the newest record.
    #[must_use]
    pub fn latest_recorded_at(&self) -> Option<DateTime<Utc>> {
        self.records.first().map(ScoreRecord::recorded_at)
    }

    /// Records belonging to `user_id`, still newest first.
    #[must_use]
    pub fn for_user(&self, user_id: &UserId) -> Self {
        let records = self
            .records
            .iter()
            .filter(|record| record.user_id() == user_id)
            .cloned()
            .collect();
        Self { records }
    }

    /// Inserts `record` at its position in the ordering.
    ///
    /// A record sharing its timestamp with existing ones is placed before
    /// them, as it arrived later.
    pub fn insert(&mut self, record: ScoreRecord) {
        let at = self
            .records
            .partition_point(|existing| existing.recorded_at() > record.recorded_at());
        self.records.insert(at, record);
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;

    use super::*;

    fn record(user: &str, score: f64, secs: i64) -> ScoreRecord {
        ScoreRecord::new(
            UserId::new(user).unwrap(),
            score,
            Utc.timestamp_opt(secs, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_from_unordered_records() {
        let collection = ScoreCollection::from(vec![
            record("ana", 1.0, 10),
            record("bo", 2.0, 30),
            record("ana", 3.0, 20),
        ]);
        assert!(is_newest_first(collection.records()));
        assert_eq!(collection.scores().collect::<Vec<_>>(), vec![2.0, 3.0, 1.0]);
        assert_eq!(
            collection.latest_recorded_at(),
            Some(Utc.timestamp_opt(30, 0).unwrap())
        );
    }

    #[test]
    fn test_ties_keep_input_order() {
        let collection = ScoreCollection::from(vec![
            record("ana", 1.0, 10),
            record("ana", 2.0, 20),
            record("ana", 3.0, 20),
        ]);
        assert_eq!(collection.scores().collect::<Vec<_>>(), vec![2.0, 3.0, 1.0]);
    }

    #[test]
    fn test_for_user_keeps_order() {
        let collection: ScoreCollection = [
            record("ana", 1.0, 10),
            record("bo", 2.0, 30),
            record("ana", 3.0, 20),
            record("ana", 4.0, 40),
        ]
        .into_iter()
        .collect();

        let ana = collection.for_user(&UserId::new("ana").unwrap());
        assert_eq!(ana.len(), 3);
        assert_eq!(ana.scores().collect::<Vec<_>>(), vec![4.0, 3.0, 1.0]);

        let nobody = collection.for_user(&UserId::new("cy").unwrap());
        assert!(nobody.is_empty());
    }

    #[test]
    fn test_insert() {
        let mut collection = ScoreCollection::new();
        collection.insert(record("ana", 1.0, 10));
        collection.insert(record("ana", 2.0, 30));
        collection.insert(record("ana", 3.0, 20));
        collection.insert(record("ana", 4.0, 20));
        assert_eq!(
            collection.scores().collect::<Vec<_>>(),
            vec![2.0, 4.0, 3.0, 1.0]
        );
        assert!(is_newest_first(collection.records()));
    }

    #[test]
    fn test_deserialize_sorts() {
        let json = r#"[
            {"userId":"ana","score":50,"recordedAt":"2025-01-01T00:00:00Z"},
            {"userId":"ana","score":80,"recordedAt":"2025-02-01T00:00:00Z"}
        ]"#;
        let collection: ScoreCollection = serde_json::from_str(json).unwrap();
        assert_eq!(collection.scores().collect::<Vec<_>>(), vec![80.0, 50.0]);

        let round_trip = serde_json::to_string(&collection).unwrap();
        let again: ScoreCollection = serde_json::from_str(&round_trip).unwrap();
        assert_eq!(again, collection);
    }
}
