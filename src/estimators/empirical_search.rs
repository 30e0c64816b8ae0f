use crate::bounds::SamplingBounds;
use crate::data::TrialSample;
use crate::error::EstimatorError;
use crate::estimator::{BoundsEstimator, EstimatorState};
use crate::float_trait::Float;

use macro_const::macro_const;
use ordered_float::NotNan;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

macro_const! {
    const DOC: &str = r"
Empirical threshold search over the observed distinct intensities

No model is assumed: the estimator scans the distinct intensity values
present in the sample, ascending. The new high bound is the first value $c$
whose accuracy over trials with intensity $> c$ exceeds the high criterion
(default 0.90) -- everything above it is too easy to keep sampling. The new
low bound is the first value $c$ whose accuracy over the window
$c \leq \mathrm{intensity} \leq \mathrm{high}$ exceeds the low criterion
(default 0.60) -- below it the subject is essentially guessing. A scan with
no qualifying value keeps the corresponding current bound. Both values are
floored at 0.01 and an inverted pair falls back to the current bounds, so the
returned interval is always valid.

- Depends on: **intensity**, **correctness**
- Minimum number of trials: **50**
";
}

#[doc = DOC!()]
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(
    from = "EmpiricalSearchParameters",
    into = "EmpiricalSearchParameters",
    bound(deserialize = "T: Float")
)]
pub struct EmpiricalSearch<T>
where
    T: Float,
{
    min_trials: usize,
    high_accuracy: NotNan<f32>,
    low_accuracy: NotNan<f32>,
    #[serde(skip)]
    _phantom: std::marker::PhantomData<T>,
}

impl<T> EmpiricalSearch<T>
where
    T: Float,
{
    pub fn new(min_trials: usize, high_accuracy: f32, low_accuracy: f32) -> Self {
        assert!(
            high_accuracy > 0.0 && high_accuracy < 1.0,
            "high_accuracy must be in (0, 1)"
        );
        assert!(
            low_accuracy > 0.0 && low_accuracy < 1.0,
            "low_accuracy must be in (0, 1)"
        );
        Self {
            min_trials,
            high_accuracy: NotNan::new(high_accuracy).expect("high_accuracy must not be NaN"),
            low_accuracy: NotNan::new(low_accuracy).expect("low_accuracy must not be NaN"),
            _phantom: std::marker::PhantomData,
        }
    }

    #[inline]
    pub fn default_min_trials() -> usize {
        50
    }

    #[inline]
    pub fn default_high_accuracy() -> f32 {
        0.9
    }

    #[inline]
    pub fn default_low_accuracy() -> f32 {
        0.6
    }

    pub const fn doc() -> &'static str {
        DOC
    }
}

impl<T> Default for EmpiricalSearch<T>
where
    T: Float,
{
    fn default() -> Self {
        Self::new(
            Self::default_min_trials(),
            Self::default_high_accuracy(),
            Self::default_low_accuracy(),
        )
    }
}

impl<T> BoundsEstimator<T> for EmpiricalSearch<T>
where
    T: Float,
{
    fn min_trials(&self) -> usize {
        self.min_trials
    }

    fn estimate(
        &self,
        sample: &mut TrialSample<T>,
        state: &EstimatorState<T>,
    ) -> Result<EstimatorState<T>, EstimatorError> {
        if sample.len() < self.min_trials {
            return Ok(*state);
        }
        // These conversions should never fail because f32 is always convertible to f32 or f64
        let high_accuracy = T::from(self.high_accuracy.into_inner()).unwrap();
        let low_accuracy = T::from(self.low_accuracy.into_inner()).unwrap();

        let distinct = sample.get_distinct_intensities().to_vec();

        let new_high = distinct
            .iter()
            .copied()
            .find(|&c| sample.accuracy_above(c) > high_accuracy)
            .unwrap_or_else(|| state.bounds.high());
        let new_low = distinct
            .iter()
            .copied()
            .find(|&c| sample.accuracy_within(c, new_high) > low_accuracy)
            .unwrap_or_else(|| state.bounds.low());

        Ok(EstimatorState {
            bounds: SamplingBounds::clamped(new_low, new_high, state.bounds),
            params: state.params,
        })
    }
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename = "EmpiricalSearch")]
struct EmpiricalSearchParameters {
    min_trials: usize,
    high_accuracy: f32,
    low_accuracy: f32,
}

impl<T> From<EmpiricalSearch<T>> for EmpiricalSearchParameters
where
    T: Float,
{
    fn from(e: EmpiricalSearch<T>) -> Self {
        Self {
            min_trials: e.min_trials,
            high_accuracy: e.high_accuracy.into_inner(),
            low_accuracy: e.low_accuracy.into_inner(),
        }
    }
}

impl<T> From<EmpiricalSearchParameters> for EmpiricalSearch<T>
where
    T: Float,
{
    fn from(p: EmpiricalSearchParameters) -> Self {
        Self::new(p.min_trials, p.high_accuracy, p.low_accuracy)
    }
}

impl<T> JsonSchema for EmpiricalSearch<T>
where
    T: Float,
{
    json_schema!(EmpiricalSearchParameters, false);
}
