mod gradient_descent;
pub use gradient_descent::{FitResult, GradientDescent};

mod model;
pub use model::LogisticParams;

mod projection;
pub use projection::{
    LG_SWEEP_START, LG_SWEEP_STEP, LG_SWEEP_STOP, TARGET_BAND_HIGH, TARGET_BAND_LOW,
    project_bounds,
};
