use rand::Rng;
use thiserror::Error;

/// A bounded box of solver variables.
///
/// Each variable is constrained to a closed interval `[lower, upper]`.
/// Reversed intervals are normalized on construction; non-finite or
/// zero-width intervals are rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<const N: usize> {
    lower: [f64; N],
    upper: [f64; N],
}

/// Errors that can occur when validating solver bounds.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BoundsError {
    #[error("bound for variable {index} contains non-finite value: {value}")]
    NonFinite { index: usize, value: f64 },

    #[error("bound for variable {index} has zero width: both ends are {value}")]
    ZeroWidth { index: usize, value: f64 },
}

impl<const N: usize> Bounds<N> {
    /// Creates a box from per-variable `[lower, upper]` pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if any bound is non-finite or zero-width.
    pub fn new(bounds: [[f64; 2]; N]) -> Result<Self, BoundsError> {
        let mut lower = [0.0; N];
        let mut upper = [0.0; N];

        for (index, [a, b]) in bounds.into_iter().enumerate() {
            if !a.is_finite() {
                return Err(BoundsError::NonFinite { index, value: a });
            }
            if !b.is_finite() {
                return Err(BoundsError::NonFinite { index, value: b });
            }

            #[allow(clippy::float_cmp)]
            if a == b {
                return Err(BoundsError::ZeroWidth { index, value: a });
            }

            let (lo, hi) = if a < b { (a, b) } else { (b, a) };
            lower[index] = lo;
            upper[index] = hi;
        }

        Ok(Self { lower, upper })
    }

    /// Returns the lower bound of each variable.
    #[must_use]
    pub fn lower(&self) -> [f64; N] {
        self.lower
    }

    /// Returns the upper bound of each variable.
    #[must_use]
    pub fn upper(&self) -> [f64; N] {
        self.upper
    }

    /// Draws a uniform point from the box.
    pub(super) fn sample(&self, rng: &mut impl Rng) -> [f64; N] {
        std::array::from_fn(|k| rng.random_range(self.lower[k]..=self.upper[k]))
    }

    /// Returns the width of the interval for variable `index`.
    pub(super) fn width(&self, index: usize) -> f64 {
        self.upper[index] - self.lower[index]
    }

    /// Clamps a value into the interval for variable `index`.
    pub(super) fn clamp(&self, index: usize, value: f64) -> f64 {
        value.clamp(self.lower[index], self.upper[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rand::{SeedableRng, rngs::SmallRng};

    #[test]
    fn normalizes_reversed_intervals() {
        let bounds = Bounds::new([[1.0, 0.0], [0.0, 1.0]]).expect("should validate");

        assert_eq!(bounds.lower(), [0.0, 0.0]);
        assert_eq!(bounds.upper(), [1.0, 1.0]);
        assert_relative_eq!(bounds.width(0), 1.0);
    }

    #[test]
    fn rejects_non_finite_bounds() {
        let result = Bounds::new([[0.0, f64::NAN], [0.0, 1.0]]);
        assert!(matches!(result, Err(BoundsError::NonFinite { index: 0, .. })));

        let result = Bounds::new([[0.0, 1.0], [f64::INFINITY, 1.0]]);
        assert!(matches!(result, Err(BoundsError::NonFinite { index: 1, .. })));
    }

    #[test]
    fn rejects_zero_width_bounds() {
        let result = Bounds::new([[0.5, 0.5], [0.0, 1.0]]);
        assert!(matches!(
            result,
            Err(BoundsError::ZeroWidth {
                index: 0,
                value: 0.5
            })
        ));
    }

    #[test]
    fn samples_stay_inside_the_box() {
        let bounds = Bounds::new([[0.0, 1.0], [-2.0, 2.0]]).expect("should validate");
        let mut rng = SmallRng::seed_from_u64(7);

        for _ in 0..100 {
            let [x, y] = bounds.sample(&mut rng);
            assert!((0.0..=1.0).contains(&x));
            assert!((-2.0..=2.0).contains(&y));
        }
    }

    #[test]
    fn clamp_pulls_values_back_into_the_interval() {
        let bounds = Bounds::new([[0.0, 1.0]]).expect("should validate");

        assert_relative_eq!(bounds.clamp(0, 1.7), 1.0);
        assert_relative_eq!(bounds.clamp(0, -0.3), 0.0);
        assert_relative_eq!(bounds.clamp(0, 0.4), 0.4);
    }
}
