use crate::float_trait::Float;

use conv::prelude::*;

/// Fraction of correct responses in a correctness sequence
///
/// Empty input yields `1.0`: an empty subset carries no evidence of failure,
/// so subsets which are empty by construction (e.g. "above the largest
/// observed intensity") count as perfect. The value is deterministic and does
/// not depend on the input order.
pub fn accuracy<T>(correctness: impl IntoIterator<Item = bool>) -> T
where
    T: Float,
{
    let (correct, total) = correctness
        .into_iter()
        .fold((0_usize, 0_usize), |(correct, total), c| {
            (correct + usize::from(c), total + 1)
        });
    if total == 0 {
        return T::one();
    }
    // These conversions should never fail because usize is always approximately convertible to f32 or f64
    correct.approx_as::<T>().unwrap() / total.approx_as::<T>().unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_perfect() {
        assert_eq!(accuracy::<f64>([]), 1.0);
        assert_eq!(accuracy::<f32>(std::iter::empty()), 1.0);
    }

    #[test]
    fn half_correct() {
        assert_eq!(accuracy::<f64>([true, false]), 0.5);
    }

    #[test]
    fn order_independent() {
        let forward = [true, true, false, true, false];
        let mut backward = forward;
        backward.reverse();
        assert_eq!(accuracy::<f64>(forward), accuracy::<f64>(backward));
        assert_eq!(accuracy::<f64>(forward), 0.6);
    }

    #[test]
    fn all_extremes() {
        assert_eq!(accuracy::<f64>([true; 7]), 1.0);
        assert_eq!(accuracy::<f64>([false; 7]), 0.0);
    }
}
