/// Error returned from [crate::BoundsEstimator] and its building blocks
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EstimatorError {
    #[error("trial #{index} has a non-finite or non-positive intensity")]
    InvalidIntensity { index: usize },

    #[error("sampling bounds must be finite and satisfy 0 < low <= high")]
    InvalidBounds,

    #[error("logistic scale parameter beta is zero")]
    ZeroScale,

    #[error("logistic parameters must be finite")]
    NonFiniteParams,
}
