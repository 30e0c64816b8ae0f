//! Everything a typical caller needs in one import

pub use crate::bounds::SamplingBounds;
pub use crate::data::{Trial, TrialSample, accuracy};
pub use crate::error::EstimatorError;
pub use crate::estimator::{BoundsEstimator, Estimator, EstimatorState};
pub use crate::estimators::{EmpiricalSearch, LogisticFit};
pub use crate::fit::{FitResult, GradientDescent, LogisticParams, project_bounds};
pub use crate::float_trait::Float;
