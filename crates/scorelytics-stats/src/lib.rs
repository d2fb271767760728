//! Numeric kernels for score analytics.
//!
//! This crate provides the statistical building blocks used to summarize a
//! collection of scores:
//!
//! - **Descriptive statistics**: mean, median, population variance, standard deviation,
//!   coefficient of variation
//! - **Padded bounds**: the shared `[floor(min - σ), ceil(max + σ)]` axis
//! - **Gaussian curve**: a discretized normal density fitted to a sample
//! - **Histogram**: fixed-width frequency bins over the padded bounds
//! - **Ratios**: quotients that may be undefined, without `NaN` or `Infinity`
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`bounds`]: Value range shared by the curve and the histogram
//! - [`gaussian`]: Normal density curve sampled at evenly spaced points
//! - [`histogram`]: Histogram construction for visualizing data distributions
//! - [`ratio`]: Tagged result type for divisions with a possibly-zero denominator
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use scorelytics_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! assert_eq!(stats.median, 3.0);
//! ```
//!
//! ## Drawing a curve over a histogram
//!
//! ```
//! use scorelytics_stats::{
//!     bounds::PaddedBounds, descriptive::DescriptiveStats, gaussian::GaussianCurve,
//!     histogram::Histogram,
//! };
//!
//! let values = [55.0, 62.0, 70.0, 71.0, 80.0, 93.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//!
//! let curve = GaussianCurve::fit(&stats).unwrap();
//! let histogram = Histogram::fixed_width(values, PaddedBounds::from_stats(&stats), 10);
//!
//! assert_eq!(curve.points().count(), 51);
//! assert_eq!(histogram.total(), 6);
//! ```

pub mod bounds;
pub mod descriptive;
pub mod gaussian;
pub mod histogram;
pub mod ratio;
