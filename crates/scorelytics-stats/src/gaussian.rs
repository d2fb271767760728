use std::{f64::consts::PI, iter::FusedIterator};

use crate::{bounds::PaddedBounds, descriptive::DescriptiveStats};

/// Number of steps between the first and last sample of a curve.
pub const DEFAULT_STEPS: usize = 50;

/// A normal density curve fitted to a sample, discretized over [`PaddedBounds`].
///
/// The curve does not store its points. [`GaussianCurve::points`] returns a
/// fresh iterator on every call, so the sequence can be walked any number of
/// times.
///
/// # Examples
///
/// ```
/// use scorelytics_stats::{descriptive::DescriptiveStats, gaussian::GaussianCurve};
///
/// let stats = DescriptiveStats::new([60.0, 70.0, 80.0, 90.0]).unwrap();
/// let curve = GaussianCurve::fit(&stats).unwrap();
///
/// let points = curve.points().collect::<Vec<_>>();
/// assert_eq!(points.len(), 51);
/// assert_eq!(points[0].x, curve.bounds().lo);
/// assert_eq!(points[50].x, curve.bounds().hi);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianCurve {
    mean: f64,
    variance: f64,
    std_dev: f64,
    bounds: PaddedBounds,
    steps: usize,
}

/// A single `(x, density)` sample of a [`GaussianCurve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

impl GaussianCurve {
    /// Fits a curve with [`DEFAULT_STEPS`] steps to the given statistics.
    ///
    /// Returns `None` when the variance is zero, since the density is not
    /// defined for a distribution without spread.
    #[must_use]
    pub fn fit(stats: &DescriptiveStats) -> Option<Self> {
        Self::with_steps(stats, DEFAULT_STEPS)
    }

    /// Fits a curve sampled at `steps + 1` evenly spaced points.
    ///
    /// Returns `None` when the variance is zero or `steps` is zero.
    #[must_use]
    pub fn with_steps(stats: &DescriptiveStats, steps: usize) -> Option<Self> {
        if stats.is_constant() || steps == 0 {
            return None;
        }
        Some(Self {
            mean: stats.mean,
            variance: stats.variance,
            std_dev: stats.std_dev,
            bounds: PaddedBounds::from_stats(stats),
            steps,
        })
    }

    #[must_use]
    pub fn bounds(&self) -> PaddedBounds {
        self.bounds
    }

    /// Number of points the curve yields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps + 1
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Evaluates the normal probability density at `x`.
    #[must_use]
    pub fn density(&self, x: f64) -> f64 {
        let exponent = -(x - self.mean).powi(2) / (2.0 * self.variance);
        exponent.exp() / (self.std_dev * (2.0 * PI).sqrt())
    }

    /// Returns an iterator over the samples, from `lo` to `hi` inclusive.
    #[must_use]
    pub fn points(&self) -> CurvePoints<'_> {
        CurvePoints {
            curve: self,
            next: 0,
        }
    }

    #[expect(clippy::cast_precision_loss)]
    fn x_at(&self, index: usize) -> f64 {
        // Computed from the index rather than accumulated so the last sample
        // lands exactly on `hi`.
        if index == self.steps {
            return self.bounds.hi;
        }
        let step = self.bounds.width() / self.steps as f64;
        self.bounds.lo + step * index as f64
    }
}

impl<'a> IntoIterator for &'a GaussianCurve {
    type Item = CurvePoint;
    type IntoIter = CurvePoints<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.points()
    }
}

/// Iterator over the samples of a [`GaussianCurve`].
#[derive(Debug, Clone)]
pub struct CurvePoints<'a> {
    curve: &'a GaussianCurve,
    next: usize,
}

impl Iterator for CurvePoints<'_> {
    type Item = CurvePoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.curve.steps {
            return None;
        }
        let x = self.curve.x_at(self.next);
        self.next += 1;
        Some(CurvePoint {
            x,
            y: self.curve.density(x),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.curve.steps + 1).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CurvePoints<'_> {}
impl FusedIterator for CurvePoints<'_> {}

#[cfg(test)]
mod tests {
    use rand::{Rng as _, SeedableRng as _};
    use rand_distr::Normal;
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn test_constant_sample_has_no_curve() {
        let stats = DescriptiveStats::new([75.0, 75.0, 75.0]).unwrap();
        assert!(GaussianCurve::fit(&stats).is_none());

        let stats = DescriptiveStats::new([12.5]).unwrap();
        assert!(GaussianCurve::fit(&stats).is_none());
    }

    #[test]
    fn test_zero_steps_has_no_curve() {
        let stats = DescriptiveStats::new([1.0, 2.0]).unwrap();
        assert!(GaussianCurve::with_steps(&stats, 0).is_none());
    }

    #[test]
    fn test_point_count_and_span() {
        let stats = DescriptiveStats::new([1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let curve = GaussianCurve::fit(&stats).unwrap();
        let points = curve.points().collect::<Vec<_>>();

        // std_dev = sqrt(2), so the span is [floor(1 - 1.41), ceil(5 + 1.41)] = [-1, 7]
        assert_eq!(points.len(), 51);
        assert_eq!(curve.len(), 51);
        assert_eq!(points.first().unwrap().x, -1.0);
        assert_eq!(points.last().unwrap().x, 7.0);
        assert!(points.is_sorted_by(|a, b| a.x <= b.x));
    }

    #[test]
    fn test_points_are_restartable() {
        let stats = DescriptiveStats::new([10.0, 20.0, 35.0]).unwrap();
        let curve = GaussianCurve::fit(&stats).unwrap();

        let first = curve.points().collect::<Vec<_>>();
        let second = (&curve).into_iter().collect::<Vec<_>>();
        assert_eq!(first, second);

        let mut iter = curve.points();
        assert_eq!(iter.len(), 51);
        iter.next();
        assert_eq!(iter.len(), 50);
        assert_eq!(iter.by_ref().count(), 50);
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_density_peaks_at_mean() {
        let stats = DescriptiveStats::new([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        let curve = GaussianCurve::fit(&stats).unwrap();

        // mean 5, std_dev 2: peak density is 1 / (2 * sqrt(2 pi))
        let peak = 1.0 / (2.0 * (2.0 * PI).sqrt());
        assert!((curve.density(5.0) - peak).abs() < 1e-12);
        assert!(curve.density(3.0) < peak);
        assert!((curve.density(3.0) - curve.density(7.0)).abs() < 1e-12);
    }

    #[test]
    fn test_densities_are_finite_for_random_samples() {
        let mut rng = Pcg32::seed_from_u64(7);
        let normal = Normal::new(70.0, 12.0).unwrap();
        for _ in 0..50 {
            let len = rng.random_range(2..=200);
            let values = (0..len).map(|_| rng.sample(normal)).collect::<Vec<f64>>();
            let stats = DescriptiveStats::new(values).unwrap();
            let curve = GaussianCurve::fit(&stats).unwrap();

            let points = curve.points().collect::<Vec<_>>();
            assert_eq!(points.len(), 51);
            assert!(points.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
            assert!(points.iter().all(|p| p.y >= 0.0));
            assert!(points.is_sorted_by(|a, b| a.x <= b.x));
        }
    }
}
