use crate::data::accuracy::accuracy;
use crate::data::trial::Trial;
use crate::error::EstimatorError;
use crate::float_trait::Float;

use itertools::Itertools;
use ndarray::Array1;

/// Validated collection of trials, sorted ascending by intensity
///
/// Construction checks every intensity and fails fast on the first invalid
/// one. Derived properties which are worth keeping (the distinct-intensity
/// list and the overall accuracy) are cached lazily, so the getters take
/// `&mut self`; subset accuracies are computed on demand.
#[derive(Clone, Debug)]
pub struct TrialSample<T>
where
    T: Float,
{
    trials: Vec<Trial<T>>,
    distinct_intensities: Option<Vec<T>>,
    accuracy: Option<T>,
}

impl<T> TrialSample<T>
where
    T: Float,
{
    pub fn new(mut trials: Vec<Trial<T>>) -> Result<Self, EstimatorError> {
        for (index, trial) in trials.iter().enumerate() {
            if !trial.intensity.is_finite() || trial.intensity <= T::zero() {
                return Err(EstimatorError::InvalidIntensity { index });
            }
        }
        // All intensities are finite here, so the comparison is total
        trials.sort_unstable_by(|a, b| a.intensity.partial_cmp(&b.intensity).unwrap());
        Ok(Self {
            trials,
            distinct_intensities: None,
            accuracy: None,
        })
    }

    pub fn len(&self) -> usize {
        self.trials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }

    pub fn trials(&self) -> &[Trial<T>] {
        &self.trials
    }

    /// Distinct intensity values in ascending order
    pub fn get_distinct_intensities(&mut self) -> &[T] {
        if self.distinct_intensities.is_none() {
            self.distinct_intensities = Some(
                self.trials
                    .iter()
                    .map(|trial| trial.intensity)
                    .dedup()
                    .collect(),
            );
        }
        self.distinct_intensities.as_ref().unwrap()
    }

    /// Overall fraction of correct responses
    pub fn get_accuracy(&mut self) -> T {
        match self.accuracy {
            Some(x) => x,
            None => {
                let value = accuracy(self.trials.iter().map(|trial| trial.correct));
                self.accuracy = Some(value);
                value
            }
        }
    }

    /// Accuracy over trials with intensity strictly above `threshold`
    pub fn accuracy_above(&self, threshold: T) -> T {
        accuracy(
            self.trials
                .iter()
                .filter(|trial| trial.intensity > threshold)
                .map(|trial| trial.correct),
        )
    }

    /// Accuracy over trials with `low <= intensity <= high`
    pub fn accuracy_within(&self, low: T, high: T) -> T {
        accuracy(
            self.trials
                .iter()
                .filter(|trial| trial.intensity >= low && trial.intensity <= high)
                .map(|trial| trial.correct),
        )
    }

    /// Base-10 logarithms of the intensities, in sample order
    pub fn lg_intensities(&self) -> Array1<T> {
        self.trials.iter().map(|trial| trial.lg_intensity()).collect()
    }

    /// Correctness flags as zeros and ones, in sample order
    pub fn correctness(&self) -> Array1<T> {
        self.trials
            .iter()
            .map(|trial| if trial.correct { T::one() } else { T::zero() })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_by_intensity() {
        let sample = TrialSample::new(vec![
            Trial::new(1.5_f64, false),
            Trial::new(0.05, true),
            Trial::new(0.5, true),
        ])
        .unwrap();
        let intensities: Vec<_> = sample.trials().iter().map(|t| t.intensity).collect();
        assert_eq!(intensities, [0.05, 0.5, 1.5]);
    }

    #[test]
    fn rejects_invalid_intensity() {
        assert_eq!(
            TrialSample::new(vec![Trial::new(0.5_f64, true), Trial::new(0.0, false)])
                .unwrap_err(),
            EstimatorError::InvalidIntensity { index: 1 },
        );
        assert_eq!(
            TrialSample::new(vec![Trial::new(-0.1_f64, true)]).unwrap_err(),
            EstimatorError::InvalidIntensity { index: 0 },
        );
        assert_eq!(
            TrialSample::new(vec![Trial::new(f64::NAN, true)]).unwrap_err(),
            EstimatorError::InvalidIntensity { index: 0 },
        );
        assert_eq!(
            TrialSample::new(vec![Trial::new(f64::INFINITY, true)]).unwrap_err(),
            EstimatorError::InvalidIntensity { index: 0 },
        );
    }

    #[test]
    fn distinct_intensities() {
        let mut sample = TrialSample::new(vec![
            Trial::new(0.5_f64, true),
            Trial::new(0.05, true),
            Trial::new(0.5, false),
            Trial::new(0.05, false),
            Trial::new(1.5, true),
        ])
        .unwrap();
        assert_eq!(sample.get_distinct_intensities(), [0.05, 0.5, 1.5]);
        // Cached path returns the same list
        assert_eq!(sample.get_distinct_intensities(), [0.05, 0.5, 1.5]);
    }

    #[test]
    fn overall_accuracy() {
        let mut sample = TrialSample::new(vec![
            Trial::new(0.1_f64, true),
            Trial::new(0.2, false),
            Trial::new(0.3, true),
            Trial::new(0.4, true),
        ])
        .unwrap();
        assert_eq!(sample.get_accuracy(), 0.75);
        assert_eq!(sample.get_accuracy(), 0.75);
    }

    #[test]
    fn subset_accuracies() {
        let mut trials: Vec<Trial<f64>> = (0..10).map(|_| Trial::new(0.05, true)).collect();
        trials.extend((0..10).map(|_| Trial::new(1.5, false)));
        let sample = TrialSample::new(trials).unwrap();

        assert_eq!(sample.accuracy_above(0.05), 0.0);
        assert_eq!(sample.accuracy_above(0.01), 0.5);
        // Empty above the maximum observed value
        assert_eq!(sample.accuracy_above(1.5), 1.0);
        assert_eq!(sample.accuracy_within(0.05, 0.05), 1.0);
        assert_eq!(sample.accuracy_within(0.05, 1.5), 0.5);
        // Empty window
        assert_eq!(sample.accuracy_within(2.0, 3.0), 1.0);
    }

    #[test]
    fn fitter_views() {
        let sample = TrialSample::new(vec![
            Trial::new(1.0_f64, false),
            Trial::new(0.1, true),
        ])
        .unwrap();
        assert_eq!(sample.lg_intensities().to_vec(), [-1.0, 0.0]);
        assert_eq!(sample.correctness().to_vec(), [1.0, 0.0]);
    }
}
