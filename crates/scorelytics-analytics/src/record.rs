//! Score records as supplied by the storage layer
//!
//! A [`ScoreRecord`] can only be built through [`ScoreRecord::new`] or by
//! deserializing, and both paths validate their input. Holding a record
//! therefore guarantees a non-empty user id and a finite score.
//!
//! # Serialization
//!
//! ```json
//! { "userId": "ana", "score": 87.5, "recordedAt": "2025-03-01T10:15:00Z" }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Validation failure for a score record received at the boundary.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum InvalidRecordError {
    #[display("user id must not be empty")]
    EmptyUserId,
    #[display("score must be a finite number, got {score}")]
    NonFiniteScore { score: f64 },
}

/// Opaque, non-empty user identifier.
///
/// Surrounding whitespace is trimmed on construction.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    pub fn new<S>(id: S) -> Result<Self, InvalidRecordError>
    where
        S: Into<String>,
    {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(InvalidRecordError::EmptyUserId);
        }
        if trimmed.len() == id.len() {
            Ok(Self(id))
        } else {
            Ok(Self(trimmed.to_owned()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = InvalidRecordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

/// One persisted score observation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawScoreRecord")]
pub struct ScoreRecord {
    user_id: UserId,
    score: f64,
    recorded_at: DateTime<Utc>,
}

/// Unvalidated wire form of [`ScoreRecord`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawScoreRecord {
    user_id: String,
    score: f64,
    recorded_at: DateTime<Utc>,
}

impl TryFrom<RawScoreRecord> for ScoreRecord {
    type Error = InvalidRecordError;

    fn try_from(raw: RawScoreRecord) -> Result<Self, Self::Error> {
        Self::new(UserId::new(raw.user_id)?, raw.score, raw.recorded_at)
    }
}

impl ScoreRecord {
    pub fn new(
        user_id: UserId,
        score: f64,
        recorded_at: DateTime<Utc>,
    ) -> Result<Self, InvalidRecordError> {
        if !score.is_finite() {
            return Err(InvalidRecordError::NonFiniteScore { score });
        }
        Ok(Self {
            user_id,
            score,
            recorded_at,
        })
    }

    #[must_use]
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    #[must_use]
    pub fn score(&self) -> f64 {
        self.score
    }

    #[must_use]
    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;

    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_user_id_rejects_blank() {
        assert_eq!(UserId::new(""), Err(InvalidRecordError::EmptyUserId));
        assert_eq!(UserId::new("  \t"), Err(InvalidRecordError::EmptyUserId));
    }

    #[test]
    fn test_user_id_is_trimmed() {
        assert_eq!(UserId::new(" ana ").unwrap().as_str(), "ana");
        assert_eq!(UserId::new("ana").unwrap().to_string(), "ana");
    }

    #[test]
    fn test_record_rejects_non_finite_score() {
        let user = UserId::new("ana").unwrap();
        for score in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = ScoreRecord::new(user.clone(), score, at(0)).unwrap_err();
            assert!(matches!(err, InvalidRecordError::NonFiniteScore { .. }));
        }
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let record = ScoreRecord::new(UserId::new("ana").unwrap(), 87.5, at(0)).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["userId"], "ana");
        assert_eq!(json["score"], 87.5);
        assert_eq!(json["recordedAt"], "1970-01-01T00:00:00Z");
    }

    #[test]
    fn test_deserialize_validates() {
        let record: ScoreRecord = serde_json::from_str(
            r#"{"userId":"bo","score":12,"recordedAt":"2025-03-01T10:15:00Z"}"#,
        )
        .unwrap();
        assert_eq!(record.user_id().as_str(), "bo");
        assert_eq!(record.score(), 12.0);

        let err = serde_json::from_str::<ScoreRecord>(
            r#"{"userId":"","score":12,"recordedAt":"2025-03-01T10:15:00Z"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("user id must not be empty"));

        let err = serde_json::from_str::<ScoreRecord>(
            r#"{"userId":"bo","score":"12","recordedAt":"2025-03-01T10:15:00Z"}"#,
        );
        assert!(err.is_err());

        let err = serde_json::from_str::<ScoreRecord>(r#"{"score":12}"#);
        assert!(err.is_err());
    }
}
