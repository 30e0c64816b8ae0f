use crate::error::EstimatorError;
use crate::fit::model::LogisticParams;
use crate::float_trait::Float;

use conv::prelude::*;
use ndarray::{Array1, Zip};
use ordered_float::NotNan;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Full-batch mean-squared-error gradient descent for [LogisticParams]
///
/// An intentionally simple fixed-budget heuristic, not a general-purpose
/// solver: constant learning rate, no line search, no regularization, and no
/// sign guard on `beta`. On degenerate data (constant labels, a single
/// distinct abscissa, `beta` drifting towards zero) it runs to the iteration
/// cap and reports whatever it reached; callers should inspect
/// [FitResult::converged] and the sign of [LogisticParams::beta] before
/// trusting the result.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(
    from = "GradientDescentParameters",
    into = "GradientDescentParameters"
)]
pub struct GradientDescent {
    learning_rate: NotNan<f32>,
    max_iterations: u32,
    tolerance: NotNan<f32>,
}

impl GradientDescent {
    pub fn new(learning_rate: f32, max_iterations: u32, tolerance: f32) -> Self {
        assert!(
            learning_rate.is_finite() && learning_rate > 0.0,
            "learning_rate must be finite and positive"
        );
        assert!(
            tolerance.is_finite() && tolerance > 0.0,
            "tolerance must be finite and positive"
        );
        Self {
            learning_rate: NotNan::new(learning_rate).expect("learning_rate must not be NaN"),
            max_iterations,
            tolerance: NotNan::new(tolerance).expect("tolerance must not be NaN"),
        }
    }

    #[inline]
    pub fn default_learning_rate() -> f32 {
        0.1
    }

    #[inline]
    pub fn default_max_iterations() -> u32 {
        1000
    }

    #[inline]
    pub fn default_tolerance() -> f32 {
        1e-6
    }

    /// Fits the raw sigmoid of [LogisticParams] to 0/1 labels
    ///
    /// `xs` are lg-intensities, `ys` are correctness labels as zeros and
    /// ones. Starts from `init` (which is validated, so an explicit
    /// `beta == 0` or non-finite warm start fails fast) and stops early once
    /// both gradient magnitudes fall under the tolerance in the same
    /// iteration. Empty input returns `init` untouched and unconverged.
    pub fn fit<T>(
        &self,
        xs: &Array1<T>,
        ys: &Array1<T>,
        init: LogisticParams<T>,
    ) -> Result<FitResult<T>, EstimatorError>
    where
        T: Float,
    {
        init.validate()?;
        assert_eq!(xs.len(), ys.len(), "xs and ys must have the same length");
        if xs.is_empty() {
            return Ok(FitResult {
                params: init,
                iterations: 0,
                converged: false,
                mse: T::zero(),
            });
        }

        // These conversions should never fail because f32 is always convertible to f32 or f64
        let learning_rate = T::from(self.learning_rate.into_inner()).unwrap();
        let tolerance = T::from(self.tolerance.into_inner()).unwrap();
        let n = xs.len().approx_as::<T>().unwrap();

        let mut params = init;
        let mut iterations = 0;
        let mut converged = false;
        while iterations < self.max_iterations {
            iterations += 1;
            let (grad_alpha, grad_beta) =
                Zip::from(xs)
                    .and(ys)
                    .fold((T::zero(), T::zero()), |(ga, gb), &x, &y| {
                        let p = params.sigmoid(x);
                        let residual = p - y;
                        let derivative = p * (T::one() - p);
                        (
                            ga + residual * derivative * (-T::one() / params.beta),
                            gb + residual * derivative
                                * (-(x - params.alpha) / (params.beta * params.beta)),
                        )
                    });
            let grad_alpha = grad_alpha / n;
            let grad_beta = grad_beta / n;
            params.alpha -= learning_rate * grad_alpha;
            params.beta -= learning_rate * grad_beta;
            if grad_alpha.abs() < tolerance && grad_beta.abs() < tolerance {
                converged = true;
                break;
            }
        }

        let mse = Zip::from(xs).and(ys).fold(T::zero(), |acc, &x, &y| {
            let residual = params.sigmoid(x) - y;
            acc + residual * residual
        }) / n;

        Ok(FitResult {
            params,
            iterations,
            converged,
            mse,
        })
    }
}

impl Default for GradientDescent {
    fn default() -> Self {
        Self::new(
            Self::default_learning_rate(),
            Self::default_max_iterations(),
            Self::default_tolerance(),
        )
    }
}

/// Outcome of a [GradientDescent::fit] call
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitResult<T> {
    /// Fitted parameters, low-confidence when `converged` is false
    pub params: LogisticParams<T>,
    /// Iterations actually spent
    pub iterations: u32,
    /// Whether both gradients fell under the tolerance before the cap
    pub converged: bool,
    /// Mean squared error of the raw sigmoid at the returned parameters
    pub mse: T,
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename = "GradientDescent")]
struct GradientDescentParameters {
    learning_rate: f32,
    max_iterations: u32,
    tolerance: f32,
}

impl From<GradientDescent> for GradientDescentParameters {
    fn from(g: GradientDescent) -> Self {
        Self {
            learning_rate: g.learning_rate.into_inner(),
            max_iterations: g.max_iterations,
            tolerance: g.tolerance.into_inner(),
        }
    }
}

impl From<GradientDescentParameters> for GradientDescent {
    fn from(p: GradientDescentParameters) -> Self {
        Self::new(p.learning_rate, p.max_iterations, p.tolerance)
    }
}

impl JsonSchema for GradientDescent {
    json_schema!(GradientDescentParameters, false);
}
