//! The two analytics operations
//!
//! Both operations are pure: they read their input, allocate a fresh report
//! and share no state between calls.

use std::borrow::Cow;

use scorelytics_stats::{
    bounds::PaddedBounds,
    descriptive::DescriptiveStats,
    gaussian::GaussianCurve,
    histogram::{DEFAULT_NUM_BINS, Histogram},
    ratio::{Ratio, UndefinedReason},
};
use tracing::{debug, warn};

use crate::{
    collection::{is_newest_first, sort_newest_first},
    record::{ScoreRecord, UserId},
    report::{
        CurvePointReport, GlobalStatistics, HistogramBinReport, InsufficientData, Interpretation,
        Metric, NoUserData, StatisticsReport, UndefinedMetric, UndefinedMetricReason, UserTrend,
        UserTrendReport,
    },
};

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum AnalyticsError {
    #[display("score at position {index} is not a finite number: {score}")]
    NonFiniteScore { index: usize, score: f64 },
    #[display("record of user '{found}' passed to the trend of user '{expected}'")]
    UserMismatch { expected: UserId, found: UserId },
    #[display("statistics exceed the range of finite numbers")]
    NumericOverflow,
}

/// Computes descriptive statistics, a density curve and a histogram over `scores`.
///
/// An empty input is not an error: it yields
/// [`StatisticsReport::InsufficientData`].
///
/// # Errors
///
/// * [`AnalyticsError::NonFiniteScore`] if any score is `NaN` or infinite
/// * [`AnalyticsError::NumericOverflow`] if the scores are too large to summarize
///
/// # Examples
///
/// ```
/// use scorelytics_analytics::{engine::compute_global_statistics, report::Interpretation};
///
/// let report = compute_global_statistics([70.0, 75.0, 80.0, 85.0]).unwrap();
/// let stats = report.computed().unwrap();
/// assert_eq!(stats.count, 4);
/// assert_eq!(stats.median, 77.5);
/// assert_eq!(stats.gaussian_curve.len(), 51);
/// assert_eq!(stats.histogram.len(), 10);
/// assert_eq!(stats.interpretation, Some(Interpretation::Low));
/// ```
pub fn compute_global_statistics<I>(scores: I) -> Result<StatisticsReport, AnalyticsError>
where
    I: IntoIterator<Item = f64>,
{
    let scores = scores.into_iter().collect::<Vec<_>>();
    validate_scores(&scores)?;

    let Some(stats) = DescriptiveStats::new(scores.iter().copied()) else {
        debug!("no scores, returning insufficient-data report");
        return Ok(StatisticsReport::InsufficientData(
            InsufficientData::default(),
        ));
    };
    ensure_finite(&stats)?;

    let mut undefined_metrics = vec![];

    let coefficient_of_variation = stats.coefficient_of_variation;
    let interpretation = match coefficient_of_variation {
        Ratio::Defined(cv) => Some(Interpretation::from_coefficient_of_variation(cv)),
        Ratio::Undefined(reason) => {
            let reason = ratio_reason(reason, UndefinedMetricReason::ZeroMean);
            undefined_metrics.push(UndefinedMetric {
                metric: Metric::CoefficientOfVariation,
                reason,
            });
            undefined_metrics.push(UndefinedMetric {
                metric: Metric::Interpretation,
                reason,
            });
            None
        }
    };

    let gaussian_curve = match GaussianCurve::fit(&stats) {
        Some(curve) => {
            let points = curve
                .points()
                .map(CurvePointReport::from)
                .collect::<Vec<_>>();
            if !points.iter().all(|p| p.x.is_finite() && p.y.is_finite()) {
                return Err(AnalyticsError::NumericOverflow);
            }
            points
        }
        None => {
            undefined_metrics.push(UndefinedMetric {
                metric: Metric::GaussianCurve,
                reason: UndefinedMetricReason::ZeroVariance,
            });
            vec![]
        }
    };

    let bounds = PaddedBounds::from_stats(&stats);
    let histogram = Histogram::fixed_width(scores.iter().copied(), bounds, DEFAULT_NUM_BINS);

    debug!(
        count = stats.count,
        mean = stats.mean,
        std_dev = stats.std_dev,
        lo = bounds.lo,
        hi = bounds.hi,
        "computed global statistics"
    );

    Ok(StatisticsReport::Computed(GlobalStatistics {
        count: stats.count,
        mean: stats.mean,
        median: stats.median,
        variance: stats.variance,
        standard_deviation: stats.std_dev,
        coefficient_of_variation,
        max_score: stats.max,
        min_score: stats.min,
        gaussian_curve,
        histogram: HistogramBinReport::from_histogram(&histogram),
        interpretation,
        undefined_metrics,
    }))
}

/// Summarizes the scores of one user and compares the newest to the oldest.
///
/// `records` should be ordered by `recorded_at`, newest first (as a
/// [`ScoreCollection`](crate::collection::ScoreCollection) is). Records in any
/// other order are re-sorted before use.
///
/// # Errors
///
/// * [`AnalyticsError::UserMismatch`] if a record belongs to another user
/// * [`AnalyticsError::NumericOverflow`] if the scores are too large to summarize
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone as _, Utc};
/// use scorelytics_analytics::{
///     engine::compute_user_trend,
///     record::{ScoreRecord, UserId},
/// };
///
/// let ana = UserId::new("ana").unwrap();
/// let records = [
///     ScoreRecord::new(ana.clone(), 80.0, Utc.timestamp_opt(20, 0).unwrap()).unwrap(),
///     ScoreRecord::new(ana.clone(), 50.0, Utc.timestamp_opt(10, 0).unwrap()).unwrap(),
/// ];
///
/// let report = compute_user_trend(&ana, &records).unwrap();
/// let trend = report.computed().unwrap();
/// assert_eq!(trend.last_score, 80.0);
/// assert!((trend.improvement_percent.value().unwrap() - 60.0).abs() < 1e-9);
/// ```
pub fn compute_user_trend(
    user_id: &UserId,
    records: &[ScoreRecord],
) -> Result<UserTrendReport, AnalyticsError> {
    if let Some(foreign) = records.iter().find(|r| r.user_id() != user_id) {
        return Err(AnalyticsError::UserMismatch {
            expected: user_id.clone(),
            found: foreign.user_id().clone(),
        });
    }

    let records = if is_newest_first(records) {
        Cow::Borrowed(records)
    } else {
        warn!(%user_id, "records are not ordered newest first, re-sorting");
        let mut sorted = records.to_vec();
        sort_newest_first(&mut sorted);
        Cow::Owned(sorted)
    };

    let Some(stats) = DescriptiveStats::new(records.iter().map(ScoreRecord::score)) else {
        debug!(%user_id, "no scores for user");
        return Ok(UserTrendReport::NoData(NoUserData::new(user_id.clone())));
    };
    ensure_finite(&stats)?;

    let newest = &records[0];
    let oldest = &records[records.len() - 1];

    let mut undefined_metrics = vec![];
    let improvement_percent = if records.len() == 1 {
        undefined_metrics.push(UndefinedMetric {
            metric: Metric::ImprovementPercent,
            reason: UndefinedMetricReason::SingleRecord,
        });
        Ratio::Undefined(UndefinedReason::InsufficientObservations)
    } else {
        let ratio = Ratio::percent(newest.score() - oldest.score(), oldest.score());
        if let Ratio::Undefined(reason) = ratio {
            undefined_metrics.push(UndefinedMetric {
                metric: Metric::ImprovementPercent,
                reason: ratio_reason(reason, UndefinedMetricReason::ZeroBaseline),
            });
        }
        ratio
    };

    debug!(
        %user_id,
        count = stats.count,
        mean = stats.mean,
        improvement = ?improvement_percent.value(),
        "computed user trend"
    );

    Ok(UserTrendReport::Computed(UserTrend {
        user_id: user_id.clone(),
        count: stats.count,
        mean: stats.mean,
        standard_deviation: stats.std_dev,
        max_score: stats.max,
        min_score: stats.min,
        last_score: newest.score(),
        improvement_percent,
        undefined_metrics,
    }))
}

fn validate_scores(scores: &[f64]) -> Result<(), AnalyticsError> {
    match scores.iter().position(|score| !score.is_finite()) {
        Some(index) => Err(AnalyticsError::NonFiniteScore {
            index,
            score: scores[index],
        }),
        None => Ok(()),
    }
}

fn ensure_finite(stats: &DescriptiveStats) -> Result<(), AnalyticsError> {
    let bounds = PaddedBounds::from_stats(stats);
    let values = [
        stats.mean,
        stats.median,
        stats.variance,
        stats.std_dev,
        bounds.lo,
        bounds.hi,
    ];
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(AnalyticsError::NumericOverflow)
    }
}

/// Maps a ratio failure to the report vocabulary. `zero_denominator` names
/// what a zero denominator means for the metric at hand.
fn ratio_reason(
    reason: UndefinedReason,
    zero_denominator: UndefinedMetricReason,
) -> UndefinedMetricReason {
    match reason {
        UndefinedReason::ZeroDenominator => zero_denominator,
        UndefinedReason::NonFinite => UndefinedMetricReason::NonFinite,
        UndefinedReason::InsufficientObservations => UndefinedMetricReason::SingleRecord,
    }
}
