use crate::bounds::SamplingBounds;
use crate::data::TrialSample;
use crate::error::EstimatorError;
use crate::estimator::{BoundsEstimator, EstimatorState};
use crate::fit::{GradientDescent, project_bounds};
use crate::float_trait::Float;

use macro_const::macro_const;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

macro_const! {
    const DOC: &str = r"
Logistic curve fit over lg-intensity with warm-started gradient descent

Fits the two-parameter logistic psychometric curve to the correctness
sequence by full-batch gradient descent, warm-starting from the parameters
carried in the estimator state, then inverts the fitted curve over the
informative-accuracy band (0.70 to 0.80) on a fixed lg-intensity grid to
obtain the new sampling interval. The fitted parameters are returned in the
updated state, so consecutive calls refine the same fit instead of starting
over.

- Depends on: **intensity**, **correctness**
- Minimum number of trials: **50**
";
}

#[doc = DOC!()]
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(
    from = "LogisticFitParameters",
    into = "LogisticFitParameters",
    bound(deserialize = "T: Float")
)]
pub struct LogisticFit<T>
where
    T: Float,
{
    min_trials: usize,
    fitter: GradientDescent,
    #[serde(skip)]
    _phantom: std::marker::PhantomData<T>,
}

impl<T> LogisticFit<T>
where
    T: Float,
{
    pub fn new(min_trials: usize, fitter: GradientDescent) -> Self {
        Self {
            min_trials,
            fitter,
            _phantom: std::marker::PhantomData,
        }
    }

    #[inline]
    pub fn default_min_trials() -> usize {
        50
    }

    pub fn fitter(&self) -> &GradientDescent {
        &self.fitter
    }

    pub const fn doc() -> &'static str {
        DOC
    }
}

impl<T> Default for LogisticFit<T>
where
    T: Float,
{
    fn default() -> Self {
        Self::new(Self::default_min_trials(), GradientDescent::default())
    }
}

impl<T> BoundsEstimator<T> for LogisticFit<T>
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
        let xs = sample.lg_intensities();
        let ys = sample.correctness();
        let result = self.fitter.fit(&xs, &ys, state.params)?;
        let bounds = project_bounds(&result.params, SamplingBounds::default_floor())?;
        Ok(EstimatorState {
            bounds,
            params: result.params,
        })
    }
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename = "LogisticFit")]
struct LogisticFitParameters {
    min_trials: usize,
    fitter: GradientDescent,
}

impl<T> From<LogisticFit<T>> for LogisticFitParameters
where
    T: Float,
{
    fn from(e: LogisticFit<T>) -> Self {
        Self {
            min_trials: e.min_trials,
            fitter: e.fitter,
        }
    }
}

impl<T> From<LogisticFitParameters> for LogisticFit<T>
where
    T: Float,
{
    fn from(p: LogisticFitParameters) -> Self {
        Self::new(p.min_trials, p.fitter)
    }
}

impl<T> JsonSchema for LogisticFit<T>
where
    T: Float,
{
    json_schema!(LogisticFitParameters, false);
}
