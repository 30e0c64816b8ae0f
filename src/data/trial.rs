use crate::float_trait::Float;

use serde::{Deserialize, Serialize};

/// A single binary-response discrimination trial
///
/// The serialized field names match the trial-log JSON records produced by
/// the experiment drivers (`relativeDiffSemitones` / `correctness`); any
/// extra metadata fields in such records are ignored on deserialization.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Float"))]
pub struct Trial<T>
where
    T: Float,
{
    /// Stimulus intensity in semitones, must be finite and positive
    #[serde(rename = "relativeDiffSemitones")]
    pub intensity: T,
    /// Whether the subject responded correctly
    #[serde(rename = "correctness")]
    pub correct: bool,
}

impl<T> Trial<T>
where
    T: Float,
{
    pub fn new(intensity: T, correct: bool) -> Self {
        Self { intensity, correct }
    }

    /// Base-10 logarithm of the intensity
    pub fn lg_intensity(&self) -> T {
        self.intensity.log10()
    }
}
