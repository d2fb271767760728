//! Score analytics over a history of quiz and game results
//!
//! This crate turns a collection of score records into client-facing reports.
//!
//! # Overview
//!
//! 1. **Records** ([`record::ScoreRecord`]): validated observations (non-empty
//!    user id, finite score, timestamp)
//! 2. **Collection** ([`collection::ScoreCollection`]): records ordered newest first
//! 3. **Engine** ([`engine`]): the two operations
//!    - [`engine::compute_global_statistics`]: descriptive statistics, a
//!      51-point Gaussian density curve and a 10-bin histogram over all scores
//!    - [`engine::compute_user_trend`]: one user's statistics and the change
//!      from their oldest to their newest score
//! 4. **Reports** ([`report`]): JSON-serializable results
//!
//! Empty input is not an error: both operations return an explicit
//! insufficient-data report. Metrics that cannot be computed (a coefficient of
//! variation with zero mean, a density curve with zero variance, an
//! improvement with a single record or a zero baseline) are reported as `null`
//! and listed under `undefinedMetrics`. `NaN` and `Infinity` never reach a
//! report.
//!
//! # Examples
//!
//! ```
//! use chrono::{TimeZone as _, Utc};
//! use scorelytics_analytics::{
//!     collection::ScoreCollection,
//!     engine::{compute_global_statistics, compute_user_trend},
//!     record::{ScoreRecord, UserId},
//! };
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//!
//! let ana = UserId::new("ana")?;
//! let bo = UserId::new("bo")?;
//! let collection = ScoreCollection::from(vec![
//!     ScoreRecord::new(ana.clone(), 50.0, Utc.timestamp_opt(100, 0).unwrap())?,
//!     ScoreRecord::new(bo.clone(), 90.0, Utc.timestamp_opt(200, 0).unwrap())?,
//!     ScoreRecord::new(ana.clone(), 80.0, Utc.timestamp_opt(300, 0).unwrap())?,
//! ]);
//!
//! let global = compute_global_statistics(collection.scores())?;
//! assert_eq!(global.count(), 3);
//!
//! let trend = compute_user_trend(&ana, collection.for_user(&ana).records())?;
//! let json = serde_json::to_value(&trend)?;
//! assert_eq!(json["lastScore"], 80.0);
//! assert_eq!(json["improvementPercent"], 60.0);
//! # Ok(())
//! # }
//! ```

pub mod collection;
pub mod engine;
pub mod format;
pub mod record;
pub mod report;
