use crate::descriptive::DescriptiveStats;

/// Integer-aligned value range padded by one standard deviation on each side.
///
/// Both the density curve and the histogram are laid out over this range so
/// that they can be drawn on the same axis:
///
/// ```text
/// lo = floor(min - std_dev)
/// hi = ceil(max + std_dev)
/// ```
///
/// # Examples
///
/// ```
/// use scorelytics_stats::{bounds::PaddedBounds, descriptive::DescriptiveStats};
///
/// let stats = DescriptiveStats::new([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
/// let bounds = PaddedBounds::from_stats(&stats);
/// assert_eq!(bounds.lo, 0.0);
/// assert_eq!(bounds.hi, 11.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddedBounds {
    pub lo: f64,
    pub hi: f64,
}

impl PaddedBounds {
    #[must_use]
    pub fn new(min: f64, max: f64, std_dev: f64) -> Self {
        Self {
            lo: (min - std_dev).floor(),
            hi: (max + std_dev).ceil(),
        }
    }

    #[must_use]
    pub fn from_stats(stats: &DescriptiveStats) -> Self {
        Self::new(stats.min, stats.max, stats.std_dev)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_outwards() {
        let bounds = PaddedBounds::new(10.2, 19.6, 1.5);
        assert_eq!(bounds.lo, 8.0);
        assert_eq!(bounds.hi, 22.0);
        assert_eq!(bounds.width(), 14.0);
    }

    #[test]
    fn test_negative_values() {
        let bounds = PaddedBounds::new(-3.5, -1.0, 0.25);
        assert_eq!(bounds.lo, -4.0);
        assert_eq!(bounds.hi, 0.0);
    }

    #[test]
    fn test_constant_integer_sample_collapses() {
        let bounds = PaddedBounds::new(7.0, 7.0, 0.0);
        assert_eq!(bounds.lo, 7.0);
        assert_eq!(bounds.hi, 7.0);
        assert_eq!(bounds.width(), 0.0);
    }
}
