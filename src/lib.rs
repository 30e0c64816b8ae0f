#![doc = include_str!("../README.md")]


#[macro_use]
mod macros;

mod bounds;
pub use bounds::SamplingBounds;

mod data;
pub use data::{Trial, TrialSample, accuracy};

mod error;
pub use error::EstimatorError;

mod estimator;
pub use estimator::{BoundsEstimator, Estimator, EstimatorState};

pub mod estimators;
pub use estimators::*;

mod fit;
pub use fit::{
    FitResult, GradientDescent, LG_SWEEP_START, LG_SWEEP_STEP, LG_SWEEP_STOP, LogisticParams,
    TARGET_BAND_HIGH, TARGET_BAND_LOW, project_bounds,
};

mod float_trait;
pub use float_trait::Float;

pub mod prelude;

pub use ndarray;
