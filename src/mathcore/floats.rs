//! `mathcore::floats` submodule implements several consts, functions and traits that help in
//! work with `f32` type.
//!
//! [`equal`] function, [`Tolerance`] struct and [`EPSILON`]/[`PRECISION`] consts are dealing with
//! floating point equality.
//!
//! [`FloatOperations`] trait and [`CLOSE_TO_ZERO`], [`CLOSE_TO_ONE`] consts are dealing with
//! distortions that may be caused by float operations.
//!

use serde::{Deserialize, Serialize};

/// Constant that is used in floating point equality.
///
/// It represents amount of difference that is allowed for two `f32` values to still be considered
/// equal.
///
pub const EPSILON: f32 = 0.00001;
/// Constant that is used in geometric classification (parallelism, perpendicularity, containment).
///
/// `Point3::collinear` is the exception: it compares cross product with zero vector by
/// [`EPSILON`].
///
/// Results of cross and dot products accumulate more error than plain arithmetic,
/// so those checks are performed with looser tolerance.
///
pub const PRECISION: f32 = 0.001;

/// [`Tolerance`] struct is a numeric-tolerance configuration that is passed explicitly to
/// comparisons which need something other than the default.
///
/// # Example
/// ```rust
/// # use ggcollide::mathcore::floats::{equal_within, Tolerance};
/// let tolerance: Tolerance = Tolerance::new(0.1);
/// assert!(equal_within(1.0, 1.05, tolerance));
/// assert!(!equal_within(1.0, 1.05, Tolerance::DEFAULT));
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Tolerance {
    /// Maximal allowed difference between absolute values.
    ///
    pub epsilon: f32,
}
impl Tolerance {
    /// Tolerance that is used by `PartialEq` implementations of all float-backed types.
    ///
    pub const DEFAULT: Tolerance = Tolerance { epsilon: EPSILON };
    /// Tolerance that is used in geometric classification.
    ///
    pub const GEOMETRIC: Tolerance = Tolerance { epsilon: PRECISION };

    /// Initializes tolerance with given epsilon.
    ///
    pub const fn new(epsilon: f32) -> Self {
        Tolerance { epsilon }
    }
}
impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// This function implements floating point equality for `ggcollide` crate.
///
/// Comparison is sign-insensitive: absolute values of both numbers are compared, so `-3.0` is
/// equal to `3.0`. Every `PartialEq` implementation in this crate inherits that property;
/// use `approx` traits when the sign matters.
///
/// # Example
/// ```rust
/// # use ggcollide::mathcore::floats::equal;
/// assert!(equal(0.15 + 0.15, 0.1 + 0.2));
/// assert!(equal(-2.5, 2.5));
/// assert!(!equal(1.0, 1.001));
/// ```
///
pub fn equal(a: f32, b: f32) -> bool {
    equal_within(a, b, Tolerance::DEFAULT)
}
/// Sign-insensitive float equality with explicitly passed tolerance.
///
pub fn equal_within(a: f32, b: f32, tolerance: Tolerance) -> bool {
    if a == b {
        return true;
    }
    (a.abs() - b.abs()).abs() < tolerance.epsilon
}

/// Constant that is used in floating point correction.
///
/// It defines the threshold for number to be considered small enough to then be floored.
///
pub const CLOSE_TO_ZERO: f32 = 0.0001;
/// Constant that is used in floating point correction.
///
/// It defines the threshold for number to be considered big enough to then be ceiled.
///
pub const CLOSE_TO_ONE: f32 = 0.9999;
/// [`FloatOperations`] trait defines `correct_to` and `round_up_to` associated functions that work
/// with floating point values.
///
pub trait FloatOperations {
    /// Corrects distortions that may be caused by float operations.
    ///
    /// For example, this function fixes such things as -0.0 into 0.0,
    /// 0.0001 (anything that is less than `CLOSE_TO_ZERO`) into 0.0 and
    /// 0.9999 (anything that is greater than `CLOSE_TO_ONE`) into 1.0.
    ///
    fn correct_to(self, digits: i32) -> Self;

    /// Rounds to given amount of digits after floating point.
    ///
    /// Passing negative number shifts floating point to the left.
    ///
    fn round_up_to(self, digits: i32) -> Self;
}
impl FloatOperations for f32 {
    /// Corrects distortions that may be caused by float operations.
    ///
    /// # Example
    /// ```rust
    /// # use ggcollide::mathcore::floats::FloatOperations;
    /// assert_eq!(-0.0_f32.correct_to(0), 0.0);
    /// assert_eq!(0.00009_f32.correct_to(0), 0.0);
    /// assert_eq!(0.99999_f32.correct_to(0), 1.0);
    /// assert_eq!(0.200009_f32.correct_to(1), 0.2);
    /// ```
    ///
    fn correct_to(self, digits: i32) -> Self {
        let mul = 10_f32.powi(digits);

        let n = self * mul;

        if n == -0.0 {
            return 0.0;
        }

        let fract = n.abs().fract();
        if !(CLOSE_TO_ZERO..=CLOSE_TO_ONE).contains(&fract) {
            return n.round() / mul;
        }

        n / mul
    }

    /// Rounds to given amount of digits after floating point.
    ///
    /// # Example
    /// ```rust
    /// # use ggcollide::mathcore::floats::FloatOperations;
    /// assert_eq!(12.345_f32.round_up_to(2), 12.35);
    /// assert_eq!(12.345_f32.round_up_to(-1), 10.0);
    /// ```
    ///
    fn round_up_to(self, digits: i32) -> Self {
        let mul = 10_f32.powi(digits);
        (self * mul).round() / mul
    }
}
impl<T: FloatOperations, const N: usize> FloatOperations for [T; N] {
    fn correct_to(self, digits: i32) -> Self {
        self.map(|elem| elem.correct_to(digits))
    }

    fn round_up_to(self, digits: i32) -> Self {
        self.map(|elem| elem.round_up_to(digits))
    }
}

#[cfg(test)]
mod tests {
    use super::{equal, equal_within, Tolerance, EPSILON};

    #[test]
    fn sign_insensitive_equality() {
        assert!(equal(1.0, 1.0));
        assert!(equal(-1.0, 1.0));
        assert!(equal(0.0, -0.0));
        assert!(equal(1.0, 1.0 + EPSILON / 2.0));
        assert!(!equal(1.0, 1.0 + EPSILON * 2.0));
        assert!(!equal(f32::NAN, f32::NAN));
    }

    #[test]
    fn explicit_tolerance() {
        assert!(equal_within(10.0, 10.4, Tolerance::new(0.5)));
        assert!(!equal_within(10.0, 10.6, Tolerance::new(0.5)));
        assert_eq!(Tolerance::default(), Tolerance::DEFAULT);
        assert!(Tolerance::GEOMETRIC > Tolerance::DEFAULT);
    }
}
