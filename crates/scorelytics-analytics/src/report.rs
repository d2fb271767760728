//! JSON-serializable analytics reports
//!
//! Report values keep full precision in memory. Rounding happens only in the
//! `Serialize` implementations (see [`crate::format`]): two decimal places for
//! derived statistics, six for curve densities. Echoed input values
//! (`maxScore`, `minScore`, `lastScore`) are written unrounded.
//!
//! A metric that cannot be computed is written as `null` and listed in
//! `undefinedMetrics` together with the reason.

use scorelytics_stats::{
    gaussian::CurvePoint,
    histogram::{Histogram, HistogramBin},
    ratio::Ratio,
};
use serde::Serialize;

use crate::{format, record::UserId};

/// Coefficient of variation below which scores count as consistent.
pub const LOW_VARIABILITY_THRESHOLD: f64 = 15.0;
/// Coefficient of variation below which spread counts as moderate.
pub const MODERATE_VARIABILITY_THRESHOLD: f64 = 30.0;

/// Global statistics over every score, or the reason there are none.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatisticsReport {
    InsufficientData(InsufficientData),
    Computed(GlobalStatistics),
}

impl StatisticsReport {
    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            StatisticsReport::InsufficientData(_) => 0,
            StatisticsReport::Computed(stats) => stats.count,
        }
    }

    #[must_use]
    pub fn computed(&self) -> Option<&GlobalStatistics> {
        match self {
            StatisticsReport::InsufficientData(_) => None,
            StatisticsReport::Computed(stats) => Some(stats),
        }
    }
}

/// Per-user trend, or the reason there is none.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UserTrendReport {
    NoData(NoUserData),
    Computed(UserTrend),
}

impl UserTrendReport {
    #[must_use]
    pub fn user_id(&self) -> &UserId {
        match self {
            UserTrendReport::NoData(no_data) => &no_data.user_id,
            UserTrendReport::Computed(trend) => &trend.user_id,
        }
    }

    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            UserTrendReport::NoData(_) => 0,
            UserTrendReport::Computed(trend) => trend.count,
        }
    }

    #[must_use]
    pub fn computed(&self) -> Option<&UserTrend> {
        match self {
            UserTrendReport::NoData(_) => None,
            UserTrendReport::Computed(trend) => Some(trend),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsufficientData {
    count: usize,
    message: &'static str,
}

impl Default for InsufficientData {
    fn default() -> Self {
        Self {
            count: 0,
            message: "insufficient data to compute statistics",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoUserData {
    user_id: UserId,
    count: usize,
    message: &'static str,
}

impl NoUserData {
    #[must_use]
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            count: 0,
            message: "no data for this user",
        }
    }
}

/// Descriptive statistics, density curve and histogram over all scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStatistics {
    pub count: usize,
    #[serde(serialize_with = "format::two_places")]
    pub mean: f64,
    #[serde(serialize_with = "format::two_places")]
    pub median: f64,
    #[serde(serialize_with = "format::two_places")]
    pub variance: f64,
    #[serde(serialize_with = "format::two_places")]
    pub standard_deviation: f64,
    #[serde(serialize_with = "format::ratio_two_places")]
    pub coefficient_of_variation: Ratio,
    pub max_score: f64,
    pub min_score: f64,
    pub gaussian_curve: Vec<CurvePointReport>,
    pub histogram: Vec<HistogramBinReport>,
    pub interpretation: Option<Interpretation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub undefined_metrics: Vec<UndefinedMetric>,
}

/// Score summary for a single user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTrend {
    pub user_id: UserId,
    pub count: usize,
    #[serde(serialize_with = "format::two_places")]
    pub mean: f64,
    #[serde(serialize_with = "format::two_places")]
    pub standard_deviation: f64,
    pub max_score: f64,
    pub min_score: f64,
    pub last_score: f64,
    /// Percentage change from the oldest to the newest score.
    #[serde(serialize_with = "format::ratio_two_places")]
    pub improvement_percent: Ratio,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub undefined_metrics: Vec<UndefinedMetric>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePointReport {
    #[serde(serialize_with = "format::two_places")]
    pub x: f64,
    #[serde(serialize_with = "format::six_places")]
    pub y: f64,
}

impl From<CurvePoint> for CurvePointReport {
    fn from(point: CurvePoint) -> Self {
        Self {
            x: point.x,
            y: point.y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBinReport {
    /// `start-end` label, one decimal place each.
    pub range: String,
    pub count: u64,
    /// Share of all scores in this bin, as a percentage.
    #[serde(serialize_with = "format::two_places")]
    pub frequency: f64,
}

impl HistogramBinReport {
    #[must_use]
    pub fn from_bin(bin: &HistogramBin, total: u64) -> Self {
        Self {
            range: format!("{:.1}-{:.1}", bin.range.start, bin.range.end),
            count: bin.count,
            frequency: bin.frequency(total),
        }
    }

    #[must_use]
    pub fn from_histogram(histogram: &Histogram) -> Vec<Self> {
        let total = histogram.total();
        histogram
            .bins
            .iter()
            .map(|bin| Self::from_bin(bin, total))
            .collect()
    }
}

/// Dispersion category derived from the coefficient of variation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Interpretation {
    #[serde(rename = "low variability")]
    Low,
    #[serde(rename = "moderate variability")]
    Moderate,
    #[serde(rename = "high variability")]
    High,
}

impl Interpretation {
    /// Classifies a coefficient of variation given as a percentage.
    ///
    /// # Examples
    ///
    /// ```
    /// use scorelytics_analytics::report::Interpretation;
    ///
    /// assert_eq!(Interpretation::from_coefficient_of_variation(14.9), Interpretation::Low);
    /// assert_eq!(Interpretation::from_coefficient_of_variation(15.0), Interpretation::Moderate);
    /// assert_eq!(Interpretation::from_coefficient_of_variation(30.0), Interpretation::High);
    /// ```
    #[must_use]
    pub fn from_coefficient_of_variation(cv: f64) -> Self {
        if cv < LOW_VARIABILITY_THRESHOLD {
            Interpretation::Low
        } else if cv < MODERATE_VARIABILITY_THRESHOLD {
            Interpretation::Moderate
        } else {
            Interpretation::High
        }
    }
}

/// A metric reported as `null`, and why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct UndefinedMetric {
    pub metric: Metric,
    pub reason: UndefinedMetricReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    CoefficientOfVariation,
    GaussianCurve,
    Interpretation,
    ImprovementPercent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UndefinedMetricReason {
    #[serde(rename = "zero mean")]
    ZeroMean,
    #[serde(rename = "zero variance")]
    ZeroVariance,
    #[serde(rename = "single record")]
    SingleRecord,
    #[serde(rename = "zero baseline")]
    ZeroBaseline,
    #[serde(rename = "non-finite result")]
    NonFinite,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_insufficient_data_shape() {
        let report = StatisticsReport::InsufficientData(InsufficientData::default());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["count"], 0);
        assert!(json["message"].is_string());
        assert_eq!(report.count(), 0);
        assert!(report.computed().is_none());
    }

    #[test]
    fn test_no_user_data_shape() {
        let report = UserTrendReport::NoData(NoUserData::new(UserId::new("ana").unwrap()));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["userId"], "ana");
        assert_eq!(json["count"], 0);
        assert_eq!(report.user_id().as_str(), "ana");
    }

    #[test]
    fn test_user_trend_rounding_and_nulls() {
        let trend = UserTrend {
            user_id: UserId::new("ana").unwrap(),
            count: 1,
            mean: 66.666_666,
            standard_deviation: 0.0,
            max_score: 66.666_666,
            min_score: 66.666_666,
            last_score: 66.666_666,
            improvement_percent: Ratio::Undefined(
                scorelytics_stats::ratio::UndefinedReason::InsufficientObservations,
            ),
            undefined_metrics: vec![UndefinedMetric {
                metric: Metric::ImprovementPercent,
                reason: UndefinedMetricReason::SingleRecord,
            }],
        };
        let json = serde_json::to_value(UserTrendReport::Computed(trend)).unwrap();
        assert_eq!(
            json,
            json!({
                "userId": "ana",
                "count": 1,
                "mean": 66.67,
                "standardDeviation": 0.0,
                "maxScore": 66.666_666,
                "minScore": 66.666_666,
                "lastScore": 66.666_666,
                "improvementPercent": null,
                "undefinedMetrics": [
                    { "metric": "improvementPercent", "reason": "single record" }
                ]
            })
        );
    }

    #[test]
    fn test_histogram_bin_label() {
        let bin = HistogramBin {
            range: -4.0..-2.5,
            count: 3,
        };
        let report = HistogramBinReport::from_bin(&bin, 8);
        assert_eq!(report.range, "-4.0--2.5");
        assert_eq!(report.frequency, 37.5);
    }

    #[test]
    fn test_interpretation_names() {
        assert_eq!(
            serde_json::to_value(Interpretation::Moderate).unwrap(),
            "moderate variability"
        );
    }
}
