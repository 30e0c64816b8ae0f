use conv::prelude::*;
use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Floating number trait, it is implemented by [f32] and [f64] only
pub trait Float:
    'static
    + ndarray::NdFloat
    + num_traits::FloatConst
    + ApproxFrom<usize>
    + Serialize
    + DeserializeOwned
    + JsonSchema
{
    fn half() -> Self;
    fn two() -> Self;
    fn ten() -> Self;
}

impl Float for f32 {
    #[inline]
    fn half() -> Self {
        0.5
    }

    #[inline]
    fn two() -> Self {
        2.0
    }

    #[inline]
    fn ten() -> Self {
        10.0
    }
}

impl Float for f64 {
    #[inline]
    fn half() -> Self {
        0.5
    }

    #[inline]
    fn two() -> Self {
        2.0
    }

    #[inline]
    fn ten() -> Self {
        10.0
    }
}
