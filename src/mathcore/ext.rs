//! `mathcore::ext` hidden submodule supplies helper newtypes and enums that are
//! used throughout `ggcollide` crate.
//!

use crate::mathcore::floats::{equal, FloatOperations};
use serde::{Deserialize, Serialize};
use std::{
    f32::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// [`Sign`] enum represents sign of a float (negative, zero or positive).
///
/// It is used to classify points against planes and lines.
///
/// # Example
/// ```rust
/// # use ggcollide::mathcore::Sign;
/// let mut sign: Sign = Sign::from(-3.0);
/// assert_eq!(sign, Sign::Negative);
/// sign = -sign;
/// assert_eq!(sign, Sign::Negative * Sign::Negative);
/// assert_eq!(1 * (sign as i8), 1);
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Negative sign (-1).
    ///
    Negative = -1,
    /// Zero (0).
    ///
    Zero = 0,
    /// Positive sign (+1).
    ///
    Positive = 1,
}
impl Sign {
    /// Returns whether sign is strictly positive.
    ///
    /// Zero is not positive, which is important for side tests that land exactly on a border.
    ///
    pub fn is_positive(self) -> bool {
        self == Sign::Positive
    }
    /// Returns whether sign is strictly negative.
    ///
    pub fn is_negative(self) -> bool {
        self == Sign::Negative
    }
}
impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Negative => Self::Positive,
            Self::Zero => Self::Zero,
            Self::Positive => Self::Negative,
        }
    }
}
impl Mul<Self> for Sign {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Positive, Self::Positive) | (Self::Negative, Self::Negative) => Self::Positive,
            (Self::Positive, Self::Negative) | (Self::Negative, Self::Positive) => Self::Negative,
            _ => Self::Zero,
        }
    }
}
impl MulAssign<Self> for Sign {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
impl From<f32> for Sign {
    /// Takes sign from given value. `NaN` is treated as zero.
    ///
    fn from(value: f32) -> Self {
        if value > 0.0 {
            Self::Positive
        } else if value < 0.0 {
            Self::Negative
        } else {
            Self::Zero
        }
    }
}

/// [`Angle`] newtype represents rotation angle which is always kept in [0.0; TAU)
/// (non-finite input becomes zero).
///
/// Value is stored in radians; all rotation constructors of `mathcore` take angles
/// of this type, so degrees and radians are never mixed up.
///
/// # Example
/// ```rust
/// # use ggcollide::mathcore::Angle;
/// # use std::f32::consts::FRAC_PI_2;
/// let angle: Angle = Angle::from_radians(-FRAC_PI_2);
/// assert_eq!(angle, Angle::from_degrees(270.0));
/// assert_eq!(angle, Angle::from_radians(3.0 * FRAC_PI_2));
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialOrd)]
pub struct Angle(f32);
impl Angle {
    /// Angle that corresponds to zero.
    ///
    pub const ZERO: Angle = Angle(0.0);
    /// Angle that corresponds to 45 degree angle.
    ///
    pub const DEG45: Angle = Angle(FRAC_PI_4);
    /// Angle that corresponds to 90 degree angle.
    ///
    pub const DEG90: Angle = Angle(FRAC_PI_2);
    /// Angle that corresponds to 180 degree angle.
    ///
    pub const DEG180: Angle = Angle(PI);
    /// Angle that corresponds to 270 degree angle.
    ///
    pub const DEG270: Angle = Angle(3.0 * FRAC_PI_2);

    /// Wraps radians into [0.0; TAU).
    ///
    fn normalize(angle: f32) -> f32 {
        if !angle.is_finite() {
            return 0.0;
        }
        let wrapped: f32 = angle.rem_euclid(TAU);
        if wrapped < TAU {
            wrapped
        } else {
            0.0
        }
    }

    /// Returns angle value in radians.
    ///
    pub fn radians(&self) -> f32 {
        self.0
    }
    /// Returns angle value in degrees.
    ///
    /// # Example
    /// ```rust
    /// # use ggcollide::mathcore::Angle;
    /// # use std::f32::consts::FRAC_PI_2;
    /// let angle: Angle = Angle::from_radians(FRAC_PI_2);
    /// assert_eq!(angle.degrees().round(), 90.0);
    /// ```
    ///
    pub fn degrees(&self) -> f32 {
        self.0.to_degrees()
    }

    /// Initializes zeroed angle.
    ///
    pub const fn zero() -> Self {
        Self::ZERO
    }
    /// Initializes angle from radians.
    ///
    pub fn from_radians(radians: f32) -> Self {
        Angle(Self::normalize(radians))
    }
    /// Initializes angle from degrees.
    ///
    pub fn from_degrees(degrees: f32) -> Self {
        Angle::from_radians(degrees.to_radians())
    }

    /// Returns sine of angle.
    ///
    pub fn sin(&self) -> f32 {
        self.0.sin()
    }
    /// Returns cosine of angle.
    ///
    pub fn cos(&self) -> f32 {
        self.0.cos()
    }
    /// Returns tangent of angle.
    ///
    pub fn tan(&self) -> f32 {
        self.0.tan()
    }
    /// Returns sine and cosine of angle packed in tuple.
    ///
    pub fn sin_cos(&self) -> (f32, f32) {
        self.0.sin_cos()
    }
}
impl FloatOperations for Angle {
    fn correct_to(self, digits: i32) -> Self {
        Angle::from_radians(self.0.correct_to(digits))
    }

    fn round_up_to(self, digits: i32) -> Self {
        Angle::from_radians(self.0.round_up_to(digits))
    }
}
impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Angle::from_radians(-self.0)
    }
}
/// [`impl_angle_operations`] macro implements arithmetic on angles by wrapping the result
/// back into [0.0; TAU).
///
macro_rules! impl_angle_operations {
    ($($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $rhs:ty => |$a:ident, $b:ident| $op:expr;)+) => {$(
        impl $trait<$rhs> for Angle {
            type Output = Self;

            fn $method(self, rhs: $rhs) -> Self::Output {
                let ($a, $b) = (self, rhs);
                Angle::from_radians($op)
            }
        }
        impl $assign_trait<$rhs> for Angle {
            fn $assign_method(&mut self, rhs: $rhs) {
                *self = $trait::$method(*self, rhs);
            }
        }
    )+};
}
impl_angle_operations!(
    Add, add, AddAssign, add_assign, Angle => |a, b| a.0 + b.0;
    Sub, sub, SubAssign, sub_assign, Angle => |a, b| a.0 - b.0;
    Mul, mul, MulAssign, mul_assign, f32 => |a, b| a.0 * b;
    Div, div, DivAssign, div_assign, f32 => |a, b| a.0 / b;
);
impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        equal(self.0, other.0)
    }
}
