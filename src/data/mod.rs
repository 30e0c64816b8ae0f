mod accuracy;
pub use accuracy::accuracy;

mod trial;
pub use trial::Trial;

mod trial_sample;
pub use trial_sample::TrialSample;
