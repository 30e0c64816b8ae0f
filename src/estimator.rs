use crate::bounds::SamplingBounds;
use crate::data::TrialSample;
use crate::error::EstimatorError;
use crate::estimators::{EmpiricalSearch, LogisticFit};
use crate::fit::LogisticParams;
use crate::float_trait::Float;

use enum_dispatch::enum_dispatch;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Caller-owned estimator state, threaded explicitly through every
/// [BoundsEstimator::estimate] call
///
/// Holds the current sampling interval and, for the curve-fit estimator, the
/// warm-start logistic parameters of the next fit. There is no hidden state
/// anywhere else: sessions can be checkpointed and replayed by serializing
/// this value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(bound = "T: Float")]
pub struct EstimatorState<T>
where
    T: Float,
{
    pub bounds: SamplingBounds<T>,
    pub params: LogisticParams<T>,
}

/// Common interface of the bounds estimators
#[enum_dispatch]
pub trait BoundsEstimator<T: Float>:
    Clone + Debug + Send + Serialize + DeserializeOwned + JsonSchema
{
    /// Minimum number of trials required before bounds are recomputed
    fn min_trials(&self) -> usize;

    /// Computes an updated state from the accumulated trials
    ///
    /// Returns `state` unchanged when the sample holds fewer than
    /// [BoundsEstimator::min_trials] trials. A pure function of its inputs
    /// (`sample` mutation is cache-only).
    fn estimate(
        &self,
        sample: &mut TrialSample<T>,
        state: &EstimatorState<T>,
    ) -> Result<EstimatorState<T>, EstimatorError>;
}

/// All estimator variants are available through this enum
///
/// Consider to import [crate::BoundsEstimator] as well
#[enum_dispatch(BoundsEstimator<T>)]
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(bound = "T: Float")]
#[non_exhaustive]
pub enum Estimator<T>
where
    T: Float,
{
    EmpiricalSearch(EmpiricalSearch<T>),
    LogisticFit(LogisticFit<T>),
}
