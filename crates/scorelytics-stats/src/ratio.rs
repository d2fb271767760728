use std::fmt;

/// The outcome of a division whose denominator may be zero.
///
/// Quotients such as the coefficient of variation or a percentage change are
/// not defined for every input. Instead of letting `NaN` or `Infinity` leak
/// into formatted output, such quotients are computed as a `Ratio` and callers
/// must handle both variants.
///
/// # Examples
///
/// ```
/// use scorelytics_stats::ratio::{Ratio, UndefinedReason};
///
/// assert_eq!(Ratio::percent(1.0, 4.0), Ratio::Defined(25.0));
/// assert_eq!(
///     Ratio::percent(1.0, 0.0),
///     Ratio::Undefined(UndefinedReason::ZeroDenominator)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ratio {
    /// The quotient exists and is finite.
    Defined(f64),
    /// The quotient does not exist for the given input.
    Undefined(UndefinedReason),
}

/// Why a [`Ratio`] could not be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UndefinedReason {
    /// The denominator was exactly zero.
    ZeroDenominator,
    /// The quotient overflowed to a non-finite value.
    NonFinite,
    /// There were not enough observations to form the quotient.
    InsufficientObservations,
}

impl fmt::Display for UndefinedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UndefinedReason::ZeroDenominator => "zero denominator",
            UndefinedReason::NonFinite => "non-finite result",
            UndefinedReason::InsufficientObservations => "insufficient observations",
        };
        f.write_str(s)
    }
}

impl Ratio {
    /// Computes `numerator / denominator`.
    #[must_use]
    pub fn new(numerator: f64, denominator: f64) -> Self {
        if denominator == 0.0 {
            return Ratio::Undefined(UndefinedReason::ZeroDenominator);
        }
        let value = numerator / denominator;
        if value.is_finite() {
            Ratio::Defined(value)
        } else {
            Ratio::Undefined(UndefinedReason::NonFinite)
        }
    }

    /// Computes `numerator / denominator × 100`.
    #[must_use]
    pub fn percent(numerator: f64, denominator: f64) -> Self {
        Self::new(numerator, denominator).map(|v| v * 100.0)
    }

    /// Returns the quotient, or `None` when it is undefined.
    #[must_use]
    pub fn value(self) -> Option<f64> {
        match self {
            Ratio::Defined(v) => Some(v),
            Ratio::Undefined(_) => None,
        }
    }

    /// Returns the reason the quotient is undefined, if it is.
    #[must_use]
    pub fn undefined_reason(self) -> Option<UndefinedReason> {
        match self {
            Ratio::Defined(_) => None,
            Ratio::Undefined(reason) => Some(reason),
        }
    }

    #[must_use]
    pub fn is_defined(self) -> bool {
        matches!(self, Ratio::Defined(_))
    }

    /// Applies `f` to a defined quotient.
    ///
    /// A result that is no longer finite turns into
    /// [`UndefinedReason::NonFinite`].
    #[must_use]
    pub fn map<F>(self, f: F) -> Self
    where
        F: FnOnce(f64) -> f64,
    {
        match self {
            Ratio::Defined(v) => {
                let mapped = f(v);
                if mapped.is_finite() {
                    Ratio::Defined(mapped)
                } else {
                    Ratio::Undefined(UndefinedReason::NonFinite)
                }
            }
            undefined @ Ratio::Undefined(_) => undefined,
        }
    }
}
