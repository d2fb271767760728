use std::ops::Range;

use crate::bounds::PaddedBounds;

/// Number of bins used when none is given.
pub const DEFAULT_NUM_BINS: usize = 10;

/// A histogram representation of a dataset's distribution.
///
/// The histogram divides `[lo, hi]` into equal-width bins and counts how many
/// values fall into each one. Every value is counted exactly once: a value
/// equal to `hi` belongs to the last bin, and values outside the range are
/// clamped into the first or last bin.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// The bins comprising the histogram, ordered by range.
    pub bins: Vec<HistogramBin>,
}

/// A single bin in a histogram.
///
/// Each bin represents a range of values and the count of data points falling within that range.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// The range of values covered by this bin (inclusive start, exclusive end).
    pub range: Range<f64>,
    /// The number of values that fall within this bin's range.
    pub count: u64,
}

impl HistogramBin {
    /// Share of `total` values that fell into this bin, as a percentage.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn frequency(&self, total: u64) -> f64 {
        if total == 0 {
            return 0.0;
        }
        self.count as f64 / total as f64 * 100.0
    }
}

impl Histogram {
    /// Creates a histogram with `num_bins` equal-width bins spanning `bounds`.
    ///
    /// When `bounds` has zero width (every value identical and integral), the
    /// span is widened to one unit so that bins keep a non-zero width.
    ///
    /// # Arguments
    ///
    /// * `values` - The data points to count.
    /// * `bounds` - The range to partition.
    /// * `num_bins` - The number of bins to create.
    ///
    /// # Returns
    ///
    /// A `Histogram` with bins populated based on the input values. An empty
    /// histogram is returned when `num_bins` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use scorelytics_stats::{bounds::PaddedBounds, histogram::Histogram};
    /// let values = [0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0];
    /// let bounds = PaddedBounds { lo: 0.0, hi: 100.0 };
    /// let histogram = Histogram::fixed_width(values, bounds, 10);
    ///
    /// assert_eq!(histogram.bins.len(), 10);
    /// assert_eq!(histogram.bins[9].count, 2); // 90 and 100
    /// assert_eq!(histogram.total(), 11);
    /// ```
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    #[must_use]
    pub fn fixed_width<I>(values: I, bounds: PaddedBounds, num_bins: usize) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        if num_bins == 0 {
            return Self { bins: vec![] };
        }

        let lo = bounds.lo;
        let mut hi = bounds.hi;
        if hi - lo < f64::EPSILON {
            // Edge case: distribution is concentrated at a single value
            hi = lo + 1.0;
        }
        let bin_width = (hi - lo) / num_bins as f64;

        let mut bins = (0..num_bins)
            .map(|bin_idx| {
                // Recompute bin boundaries to avoid floating-point accumulation errors
                let start = lo + bin_width * bin_idx as f64;
                let end = if bin_idx == num_bins - 1 {
                    hi
                } else {
                    lo + bin_width * (bin_idx + 1) as f64
                };
                HistogramBin {
                    range: start..end,
                    count: 0,
                }
            })
            .collect::<Vec<_>>();

        for val in values {
            let position = ((val - lo) / bin_width).floor();
            // `as usize` saturates: negative positions land in bin 0
            let idx = (position.max(0.0) as usize).min(num_bins - 1);
            bins[idx].count += 1;
        }

        Self { bins }
    }

    /// Total number of values counted across all bins.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).sum()
    }
}
