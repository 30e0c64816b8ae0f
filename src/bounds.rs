use crate::error::EstimatorError;
use crate::float_trait::Float;

use rand::Rng;
use rand::distr::{Distribution, StandardUniform};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Sampling interval `[low, high]` for future stimulus intensities
///
/// Both bounds are finite, positive and ordered; every constructor (including
/// deserialization) enforces it, so a held value is always a valid interval.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    into = "SamplingBoundsParameters<T>",
    try_from = "SamplingBoundsParameters<T>",
    bound(serialize = "T: Float", deserialize = "T: Float")
)]
pub struct SamplingBounds<T>
where
    T: Float,
{
    low: T,
    high: T,
}

impl<T> SamplingBounds<T>
where
    T: Float,
{
    pub fn new(low: T, high: T) -> Result<Self, EstimatorError> {
        if !low.is_finite() || !high.is_finite() || low <= T::zero() || high < low {
            return Err(EstimatorError::InvalidBounds);
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> T {
        self.low
    }

    pub fn high(&self) -> T {
        self.high
    }

    /// Smallest value either bound may take
    #[inline]
    pub fn default_floor() -> T {
        // This conversion should never fail for f32 and f64
        T::from(0.01).unwrap()
    }

    #[inline]
    pub fn default_low() -> T {
        Self::default_floor()
    }

    #[inline]
    pub fn default_high() -> T {
        T::two()
    }

    /// Floors both values at [Self::default_floor] and falls back when the
    /// pair inverts or is not finite
    pub fn clamped(low: T, high: T, fallback: Self) -> Self {
        // T::max returns the other operand for a NaN input, so a NaN bound
        // lands on the floor rather than poisoning the comparison below
        let low = T::max(low, Self::default_floor());
        let high = T::max(high, Self::default_floor());
        if !low.is_finite() || !high.is_finite() || high < low {
            fallback
        } else {
            Self { low, high }
        }
    }

    /// Draws an intensity log-uniformly from the interval
    ///
    /// A degenerate interval (`lg(high) <= lg(low)`) yields its arithmetic
    /// midpoint.
    pub fn sample_lg_uniform<R>(&self, rng: &mut R) -> T
    where
        R: Rng + ?Sized,
        StandardUniform: Distribution<T>,
    {
        let lg_low = self.low.log10();
        let lg_high = self.high.log10();
        if lg_high <= lg_low {
            return T::half() * (self.low + self.high);
        }
        let u: T = rng.random();
        T::ten().powf(lg_low + u * (lg_high - lg_low))
    }
}

impl<T> Default for SamplingBounds<T>
where
    T: Float,
{
    fn default() -> Self {
        Self {
            low: Self::default_low(),
            high: Self::default_high(),
        }
    }
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename = "SamplingBounds")]
struct SamplingBoundsParameters<T> {
    low: T,
    high: T,
}

impl<T> From<SamplingBounds<T>> for SamplingBoundsParameters<T>
where
    T: Float,
{
    fn from(bounds: SamplingBounds<T>) -> Self {
        Self {
            low: bounds.low,
            high: bounds.high,
        }
    }
}

impl<T> TryFrom<SamplingBoundsParameters<T>> for SamplingBounds<T>
where
    T: Float,
{
    type Error = EstimatorError;

    fn try_from(p: SamplingBoundsParameters<T>) -> Result<Self, Self::Error> {
        Self::new(p.low, p.high)
    }
}

impl<T> JsonSchema for SamplingBounds<T>
where
    T: Float,
{
    json_schema!(SamplingBoundsParameters<T>, false);
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::prelude::*;

    #[test]
    fn new_validates() {
        assert!(SamplingBounds::new(0.01_f64, 2.0).is_ok());
        assert!(SamplingBounds::new(0.5_f64, 0.5).is_ok());
        assert_eq!(
            SamplingBounds::new(0.0_f64, 2.0).unwrap_err(),
            EstimatorError::InvalidBounds
        );
        assert_eq!(
            SamplingBounds::new(-0.1_f64, 2.0).unwrap_err(),
            EstimatorError::InvalidBounds
        );
        assert_eq!(
            SamplingBounds::new(1.0_f64, 0.5).unwrap_err(),
            EstimatorError::InvalidBounds
        );
        assert_eq!(
            SamplingBounds::new(f64::NAN, 2.0).unwrap_err(),
            EstimatorError::InvalidBounds
        );
        assert_eq!(
            SamplingBounds::new(0.1_f64, f64::INFINITY).unwrap_err(),
            EstimatorError::InvalidBounds
        );
    }

    #[test]
    fn default_pair() {
        let bounds = SamplingBounds::<f64>::default();
        assert_eq!(bounds.low(), 0.01);
        assert_eq!(bounds.high(), 2.0);
    }

    #[test]
    fn clamped_floors_both_values() {
        let fallback = SamplingBounds::<f64>::default();
        let bounds = SamplingBounds::clamped(0.001, 1.0, fallback);
        assert_eq!(bounds.low(), 0.01);
        assert_eq!(bounds.high(), 1.0);

        let bounds = SamplingBounds::clamped(-1.0, 0.001, fallback);
        assert_eq!(bounds.low(), 0.01);
        assert_eq!(bounds.high(), 0.01);
    }

    #[test]
    fn clamped_falls_back_on_inversion() {
        let fallback = SamplingBounds::new(0.05_f64, 1.5).unwrap();
        assert_eq!(SamplingBounds::clamped(1.0, 0.5, fallback), fallback);
        assert_eq!(
            SamplingBounds::clamped(0.1, f64::INFINITY, fallback),
            fallback
        );
    }

    #[test]
    fn clamped_tolerates_nan() {
        let fallback = SamplingBounds::new(0.05_f64, 1.5).unwrap();
        let bounds = SamplingBounds::clamped(f64::NAN, 1.0, fallback);
        assert_eq!(bounds.low(), 0.01);
        assert_eq!(bounds.high(), 1.0);
    }

    #[test]
    fn sample_lg_uniform_stays_inside() {
        let bounds = SamplingBounds::new(0.01_f64, 2.0).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..1000 {
            let x = bounds.sample_lg_uniform(&mut rng);
            assert!(x >= bounds.low() && x <= bounds.high(), "{x} out of bounds");
        }
    }

    #[test]
    fn sample_lg_uniform_degenerate_interval() {
        let bounds = SamplingBounds::new(0.5_f64, 0.5).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(bounds.sample_lg_uniform(&mut rng), 0.5);
    }

    #[test]
    fn serialization() {
        let bounds = SamplingBounds::new(0.05_f64, 1.5).unwrap();
        let json = serde_json::to_string(&bounds).unwrap();
        assert_eq!(json, r#"{"low":0.05,"high":1.5}"#);
        let bounds_serde: SamplingBounds<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(bounds, bounds_serde);
    }

    #[test]
    fn deserialization_validates() {
        assert!(serde_json::from_str::<SamplingBounds<f64>>(r#"{"low":1.0,"high":0.5}"#).is_err());
        assert!(serde_json::from_str::<SamplingBounds<f64>>(r#"{"low":0.0,"high":1.0}"#).is_err());
    }
}
