use crate::ratio::Ratio;

/// Descriptive statistics summarizing a dataset.
///
/// This structure contains the common measures of central tendency and
/// dispersion for a dataset of `f64` values. Dispersion is measured over the
/// whole population: the variance divides by `n`, not `n - 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveStats {
    /// The number of values in the dataset.
    pub count: usize,
    /// The minimum value in the dataset.
    pub min: f64,
    /// The maximum value in the dataset.
    pub max: f64,
    /// The arithmetic mean (average) of the dataset.
    pub mean: f64,
    /// The median value of the dataset.
    ///
    /// For an even number of values this is the average of the two central values.
    pub median: f64,
    /// The population variance of the dataset.
    pub variance: f64,
    /// The population standard deviation of the dataset.
    pub std_dev: f64,
    /// The standard deviation as a percentage of the mean.
    ///
    /// Undefined when the mean is zero.
    pub coefficient_of_variation: Ratio,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// This method will sort the values internally before computing statistics.
    ///
    /// # Arguments
    ///
    /// * `values` - An iterator over `f64` values. The values will be collected and sorted internally.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use scorelytics_stats::descriptive::DescriptiveStats;
    /// let values = [5.0, 2.0, 4.0, 1.0, 3.0];
    /// let stats = DescriptiveStats::new(values).unwrap();
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// assert_eq!(stats.variance, 2.0);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// This is an optimized version that skips the sorting step.
    /// Use this when you already have sorted data to avoid unnecessary work.
    ///
    /// # Arguments
    ///
    /// * `sorted_values` - Values sorted in ascending order
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use scorelytics_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::from_sorted(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(stats.median, 2.5);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let count = sorted_values.len();
        let n = count as f64;

        // A constant dataset has exactly its value as mean and no spread.
        // Summing and dividing could otherwise leave a rounding residue.
        let (mean, variance) = if min == max {
            (min, 0.0)
        } else {
            let mean = sorted_values.iter().sum::<f64>() / n;
            let variance = sorted_values
                .iter()
                .map(|v| (v - mean).powi(2))
                .sum::<f64>()
                / n;
            (mean, variance)
        };

        let mid = count / 2;
        let median = if count % 2 == 0 {
            (sorted_values[mid - 1] + sorted_values[mid]) / 2.0
        } else {
            sorted_values[mid]
        };

        let std_dev = variance.sqrt();
        let coefficient_of_variation = Ratio::percent(std_dev, mean);

        Some(Self {
            count,
            min,
            max,
            mean,
            median,
            variance,
            std_dev,
            coefficient_of_variation,
        })
    }

    /// Returns `true` if every value in the dataset is identical.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.variance == 0.0
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng as _, SeedableRng as _};
    use rand_pcg::Pcg32;

    use super::*;
    use crate::ratio::UndefinedReason;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_empty_values() {
        assert!(DescriptiveStats::new(Vec::<f64>::new()).is_none());
    }

    #[test]
    fn test_median_odd_count() {
        let stats = DescriptiveStats::new([3.0, 1.0, 5.0, 2.0, 4.0]).unwrap();
        assert_eq!(stats.median, 3.0);
    }

    #[test]
    fn test_median_even_count() {
        let stats = DescriptiveStats::new([4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(stats.median, 2.5);
    }

    #[test]
    fn test_population_variance() {
        // Population variance of 2, 4, 4, 4, 5, 5, 7, 9 is exactly 4.
        let stats = DescriptiveStats::new([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(stats.count, 8);
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.variance, 4.0);
        assert_eq!(stats.std_dev, 2.0);
        assert_close(stats.coefficient_of_variation.value().unwrap(), 40.0);
    }

    #[test]
    fn test_min_max() {
        let stats = DescriptiveStats::new([70.0, -3.5, 12.0, 99.5]).unwrap();
        assert_eq!(stats.min, -3.5);
        assert_eq!(stats.max, 99.5);
    }

    #[test]
    fn test_single_value() {
        let stats = DescriptiveStats::new([42.0]).unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.mean, 42.0);
        assert_eq!(stats.median, 42.0);
        assert_eq!(stats.variance, 0.0);
        assert_eq!(stats.coefficient_of_variation, Ratio::Defined(0.0));
        assert!(stats.is_constant());
    }

    #[test]
    fn test_constant_values_have_no_rounding_residue() {
        // 0.1 * 3 / 3 is not exactly 0.1 in binary floating point
        let stats = DescriptiveStats::new([0.1, 0.1, 0.1]).unwrap();
        assert_eq!(stats.mean, 0.1);
        assert_eq!(stats.median, 0.1);
        assert_eq!(stats.variance, 0.0);
        assert_eq!(stats.std_dev, 0.0);
        assert!(stats.is_constant());
    }

    #[test]
    fn test_zero_mean_coefficient_of_variation() {
        let stats = DescriptiveStats::new([-5.0, 5.0]).unwrap();
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.std_dev, 5.0);
        assert_eq!(
            stats.coefficient_of_variation,
            Ratio::Undefined(UndefinedReason::ZeroDenominator)
        );

        let stats = DescriptiveStats::new([0.0, 0.0]).unwrap();
        assert!(!stats.coefficient_of_variation.is_defined());
    }

    #[test]
    #[should_panic(expected = "values must be sorted in ascending order")]
    fn test_from_sorted_rejects_unsorted() {
        let _ = DescriptiveStats::from_sorted(&[3.0, 1.0]);
    }

    #[test]
    fn test_random_datasets_are_consistent() {
        let mut rng = Pcg32::seed_from_u64(0x5c0e);
        for _ in 0..200 {
            let len = rng.random_range(1..=60);
            let values = (0..len)
                .map(|_| rng.random_range(-500.0..500.0))
                .collect::<Vec<f64>>();
            let stats = DescriptiveStats::new(values.iter().copied()).unwrap();

            assert!(stats.variance >= 0.0);
            assert_close(stats.std_dev, stats.variance.sqrt());
            assert!(stats.min <= stats.median && stats.median <= stats.max);
            assert!(stats.min - 1e-9 <= stats.mean && stats.mean <= stats.max + 1e-9);
            assert_eq!(stats.count, values.len());
        }
    }
}
