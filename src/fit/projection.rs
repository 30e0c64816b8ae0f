use crate::bounds::SamplingBounds;
use crate::error::EstimatorError;
use crate::fit::model::LogisticParams;
use crate::float_trait::Float;

use ndarray::Array1;

/// First lg-intensity of the inversion sweep
pub const LG_SWEEP_START: f64 = -3.0;
/// Last lg-intensity of the inversion sweep, inclusive
pub const LG_SWEEP_STOP: f64 = 0.3;
/// Sweep step in lg-intensity
pub const LG_SWEEP_STEP: f64 = 0.01;
// (LG_SWEEP_STOP - LG_SWEEP_START) / LG_SWEEP_STEP + 1
const LG_SWEEP_LEN: usize = 331;

/// Lower edge of the informative-accuracy band
///
/// The band marks where the psychometric curve is steep enough for a trial to
/// carry information. It is a separate constant from the empirical-search
/// accuracy criteria and must not be conflated with them.
pub const TARGET_BAND_LOW: f64 = 0.70;
/// Upper edge of the informative-accuracy band
pub const TARGET_BAND_HIGH: f64 = 0.80;

/// Inverts a fitted curve into the sampling interval covering the
/// informative-accuracy band
///
/// Sweeps the fixed lg-intensity grid, keeps the points whose predicted
/// accuracy lies in `[TARGET_BAND_LOW, TARGET_BAND_HIGH]` and exponentiates
/// the extremes, flooring the low bound at `floor`. When no grid point
/// qualifies (e.g. a near-step curve falling between grid points, or
/// non-finite parameters) the fixed default pair is returned. Deterministic
/// given the parameters.
pub fn project_bounds<T>(
    params: &LogisticParams<T>,
    floor: T,
) -> Result<SamplingBounds<T>, EstimatorError>
where
    T: Float,
{
    if params.beta.is_zero() {
        return Err(EstimatorError::ZeroScale);
    }
    // These conversions should never fail for f32 and f64
    let start = T::from(LG_SWEEP_START).unwrap();
    let stop = T::from(LG_SWEEP_STOP).unwrap();
    let band_low = T::from(TARGET_BAND_LOW).unwrap();
    let band_high = T::from(TARGET_BAND_HIGH).unwrap();

    let grid = Array1::linspace(start, stop, LG_SWEEP_LEN);
    let mut lg_min = None;
    let mut lg_max = None;
    for &x in &grid {
        let p = params.predict(x);
        if p >= band_low && p <= band_high {
            if lg_min.is_none() {
                lg_min = Some(x);
            }
            lg_max = Some(x);
        }
    }
    Ok(match (lg_min, lg_max) {
        (Some(lg_min), Some(lg_max)) => {
            let low = T::max(floor, T::ten().powf(lg_min));
            let high = T::max(low, T::ten().powf(lg_max));
            SamplingBounds::clamped(low, high, SamplingBounds::default())
        }
        _ => SamplingBounds::default(),
    })
}
