use crate::error::EstimatorError;
use crate::float_trait::Float;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Location and scale of the logistic psychometric curve in lg-intensity space
///
/// Fields are public so callers can sanity-check a fit: gradient descent does
/// not constrain `beta`, and a degenerate sample may leave it negative or
/// tiny. Both values persist across estimator calls as the warm start of the
/// next fit.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LogisticParams<T> {
    pub alpha: T,
    pub beta: T,
}

impl<T> LogisticParams<T>
where
    T: Float,
{
    pub fn new(alpha: T, beta: T) -> Self {
        Self { alpha, beta }
    }

    /// Raw logistic component in `(0, 1)`, the quantity the fitter matches
    /// against the 0/1 correctness labels
    pub fn sigmoid(&self, x: T) -> T {
        T::one() / (T::one() + T::exp(-(x - self.alpha) / self.beta))
    }

    /// Chance-floored psychometric curve in `(0.5, 1.0)`
    ///
    /// The 0.5 asymptote encodes the guessing floor of a two-alternative
    /// forced-choice task.
    pub fn predict(&self, x: T) -> T {
        T::half() + T::half() * self.sigmoid(x)
    }

    /// Rejects explicitly degenerate parameters passed as a warm start
    pub fn validate(&self) -> Result<(), EstimatorError> {
        if !self.alpha.is_finite() || !self.beta.is_finite() {
            return Err(EstimatorError::NonFiniteParams);
        }
        if self.beta.is_zero() {
            return Err(EstimatorError::ZeroScale);
        }
        Ok(())
    }

    #[inline]
    pub fn default_alpha() -> T {
        -T::one()
    }

    #[inline]
    pub fn default_beta() -> T {
        // This conversion should never fail for f32 and f64
        T::from(0.3).unwrap()
    }
}

impl<T> Default for LogisticParams<T>
where
    T: Float,
{
    fn default() -> Self {
        Self {
            alpha: Self::default_alpha(),
            beta: Self::default_beta(),
        }
    }
}
