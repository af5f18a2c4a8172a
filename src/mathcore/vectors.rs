//! `mathcore::vectors` submodule implements three- and four-dimensional free vectors which
//! represent directions and magnitudes (never positions - see `mathcore::points` for those).
//!

use crate::mathcore::floats::{equal, equal_within, FloatOperations, Tolerance};
use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};
use std::ops::{
    Add, AddAssign, BitXor, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
};
use thiserror::Error;

/// [`ZeroLengthError`] is returned by strict normalization when vector has no direction.
///
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
#[error("vector of zero length cannot be normalized")]
pub struct ZeroLengthError;

/// [`impl_tuple`] macro implements component-wise associated functions and `FloatOperations`,
/// `PartialEq`, `approx` traits for any float tuple type (vectors and points).
///
/// This macro depends on manual implementation of `elements` function and
/// `From<[f32; $size]>` trait implementation.
///
macro_rules! impl_tuple {
    ($struct:ident, $size:expr) => {
        impl $struct {
            /// Applies function to every element and returns changed value.
            ///
            pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
                Self::from(self.elements().map(f))
            }
            /// Combines two values by applying function on their elements.
            ///
            pub fn combine(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
                let (e1, e2): ([f32; $size], [f32; $size]) = (self.elements(), other.elements());
                let mut elements: [f32; $size] = [0.0; $size];
                for i in 0..$size {
                    elements[i] = f(e1[i], e2[i]);
                }
                Self::from(elements)
            }
            /// Returns value that is made from the largest components of two values.
            ///
            pub fn max(self, other: Self) -> Self {
                self.combine(other, f32::max)
            }
            /// Returns value that is made from the smallest components of two values.
            ///
            pub fn min(self, other: Self) -> Self {
                self.combine(other, f32::min)
            }
            /// Returns whether any of the components is `NaN`.
            ///
            pub fn is_nan(&self) -> bool {
                self.elements().iter().any(|elem| elem.is_nan())
            }
            /// Compares values component-wise with explicitly passed tolerance.
            ///
            pub fn equal_within(&self, other: &Self, tolerance: Tolerance) -> bool {
                self.elements()
                    .iter()
                    .zip(other.elements().iter())
                    .all(|(&a, &b)| equal_within(a, b, tolerance))
            }
        }
        impl FloatOperations for $struct {
            fn correct_to(self, digits: i32) -> Self {
                self.map(|elem| elem.correct_to(digits))
            }
            fn round_up_to(self, digits: i32) -> Self {
                self.map(|elem| elem.round_up_to(digits))
            }
        }
        impl PartialEq for $struct {
            /// Sign-insensitive component-wise equality (see `floats::equal`).
            ///
            fn eq(&self, other: &Self) -> bool {
                self.elements()
                    .iter()
                    .zip(other.elements().iter())
                    .all(|(&a, &b)| equal(a, b))
            }
        }
        impl From<$struct> for [f32; $size] {
            fn from(value: $struct) -> Self {
                value.elements()
            }
        }
        impl AbsDiffEq for $struct {
            type Epsilon = f32;

            fn default_epsilon() -> Self::Epsilon {
                crate::mathcore::floats::EPSILON
            }
            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                self.elements()
                    .iter()
                    .zip(other.elements().iter())
                    .all(|(a, b)| a.abs_diff_eq(b, epsilon))
            }
        }
        impl RelativeEq for $struct {
            fn default_max_relative() -> Self::Epsilon {
                crate::mathcore::floats::EPSILON
            }
            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                self.elements()
                    .iter()
                    .zip(other.elements().iter())
                    .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
            }
        }
    };
}
pub(crate) use impl_tuple;

/// [`impl_vector`] macro implements metric operations (which only make sense for directions)
/// and arithmetic operation traits for vector.
///
/// This macro depends on [`impl_tuple`] macro.
///
macro_rules! impl_vector {
    ($struct:ident, $size:expr) => {
        impl $struct {
            /// Initializes vector with zeroes.
            ///
            pub fn zero() -> Self {
                Self::from([0.0; $size])
            }
            /// Initializes vector with ones.
            ///
            pub fn one() -> Self {
                Self::from([1.0; $size])
            }

            /// Performs dot product operation on two vectors.
            ///
            pub fn dot(self, other: Self) -> f32 {
                self.elements()
                    .iter()
                    .zip(other.elements().iter())
                    .fold(0.0, |acc, (a, b)| acc + *a * *b)
            }
            /// Returns squared length of a vector.
            ///
            pub fn length_squared(&self) -> f32 {
                self.dot(*self)
            }
            /// Returns length (magnitude) of a vector.
            ///
            pub fn length(&self) -> f32 {
                self.length_squared().sqrt()
            }

            /// Returns new vector that is normalized.
            ///
            /// Normalizing zero vector is a precondition violation: every component of the
            /// result will be `NaN`. Use `try_normalized` to have that case reported.
            ///
            pub fn normalized(self) -> Self {
                self / self.length()
            }
            /// Normalizes vector in place.
            ///
            pub fn normalize(&mut self) {
                *self = self.normalized();
            }
            /// Returns normalized vector or [`ZeroLengthError`] if vector has zero length.
            ///
            pub fn try_normalized(self) -> Result<Self, ZeroLengthError> {
                let length: f32 = self.length();
                if length == 0.0 || !length.is_finite() {
                    log::debug!("refusing to normalize degenerate vector {:?}", self);
                    return Err(ZeroLengthError);
                }
                Ok(self / length)
            }

            /// Returns projection of this vector onto other vector.
            ///
            pub fn projected_onto(self, onto: Self) -> Self {
                onto * (self.dot(onto) / onto.dot(onto))
            }
            /// Returns component of this vector that is perpendicular to other vector.
            ///
            pub fn rejected_from(self, from: Self) -> Self {
                self - self.projected_onto(from)
            }
            /// Returns angle between two vectors in radians.
            ///
            pub fn angle_between(self, other: Self) -> f32 {
                (self.dot(other) / (self.length() * other.length()))
                    .clamp(-1.0, 1.0)
                    .acos()
            }
            /// Returns whether vectors are perpendicular (dot product is close to zero).
            ///
            pub fn is_perpendicular_to(self, other: Self) -> bool {
                equal_within(self.dot(other), 0.0, Tolerance::GEOMETRIC)
            }
        }
        impl Neg for $struct {
            type Output = Self;

            fn neg(self) -> Self::Output {
                self.map(|a| -a)
            }
        }
        impl Mul for $struct {
            type Output = f32;

            /// Performs dot product operation on two vectors.
            ///
            fn mul(self, other: Self) -> Self::Output {
                self.dot(other)
            }
        }
        impl Mul<$struct> for f32 {
            type Output = $struct;

            fn mul(self, vector: $struct) -> Self::Output {
                vector * self
            }
        }
        impl_operations!($struct, Self, combine, ((Add, add, +), (Sub, sub, -),));
        impl_assign_operations!($struct, Self, ((AddAssign, add_assign, +), (SubAssign, sub_assign, -),));
        impl_operations!($struct, f32, map, ((Add, add, +), (Sub, sub, -), (Mul, mul, *), (Div, div, /),));
        impl_assign_operations!($struct, f32, ((AddAssign, add_assign, +),
                                               (SubAssign, sub_assign, -),
                                               (MulAssign, mul_assign, *),
                                               (DivAssign, div_assign, /),));
    };
}

/// [`impl_operations`] macro implements binary operations that produce `Self`.
///
/// `combine` flavour applies operation component-wise on two values, `map` flavour applies
/// operation with scalar rhs on every component.
///
macro_rules! impl_operations {
    ($struct:ident, $rhs:ty, combine, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl $trait<$rhs> for $struct {
            type Output = Self;

            fn $method(self, rhs: $rhs) -> Self::Output {
                self.combine(rhs, |a, b| a $op b)
            }
        }
    )+};
    ($struct:ident, $rhs:ty, map, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl $trait<$rhs> for $struct {
            type Output = Self;

            fn $method(self, rhs: $rhs) -> Self::Output {
                self.map(|a| a $op rhs)
            }
        }
    )+};
}
pub(crate) use impl_operations;
/// [`impl_assign_operations`] macro implements `...Assign` traits through their binary counterparts,
/// so `a @= b` is always the same as `a = a @ b`.
///
// This could've been integrated in `impl_operations` macro but until `concat_idents` macro
// is in stable it is not possible.
macro_rules! impl_assign_operations {
    ($struct:ident, $rhs:ty, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl $trait<$rhs> for $struct {
            fn $method(&mut self, rhs: $rhs) {
                *self = *self $op rhs;
            }
        }
    )+};
}
pub(crate) use impl_assign_operations;

/// [`Vector3`] struct represents three-dimensional free vector.
///
/// # Example
/// ```rust
/// # use ggcollide::mathcore::vectors::Vector3;
/// let u: Vector3 = Vector3::new(6.0, 2.0, 6.0);
/// let v: Vector3 = Vector3::new(-10.0, -8.0, 8.0);
/// assert_eq!(u.cross(v), Vector3::new(64.0, -108.0, -28.0));
/// assert_eq!(u ^ v, u.cross(v));
/// assert_eq!(u * v, u.dot(v));
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default)]
#[repr(C)]
pub struct Vector3 {
    /// X component of vector.
    ///
    pub x: f32,
    /// Y component of vector.
    ///
    pub y: f32,
    /// Z component of vector.
    ///
    pub z: f32,
}
impl Vector3 {
    /// Initializes vector from components.
    ///
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vector3 { x, y, z }
    }
    /// Unit vector along X axis.
    ///
    pub const fn unit_x() -> Self {
        Vector3::new(1.0, 0.0, 0.0)
    }
    /// Unit vector along Y axis.
    ///
    pub const fn unit_y() -> Self {
        Vector3::new(0.0, 1.0, 0.0)
    }
    /// Unit vector along Z axis.
    ///
    pub const fn unit_z() -> Self {
        Vector3::new(0.0, 0.0, 1.0)
    }

    /// Returns elements of vector.
    ///
    pub fn elements(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
    /// Sets from values to elements of vector.
    ///
    pub fn set(&mut self, elements: [f32; 3]) {
        [self.x, self.y, self.z] = elements;
    }

    /// Returns cross product of two vectors.
    ///
    /// Result is perpendicular to both operands; it is zero vector if they are parallel.
    ///
    pub fn cross(self, other: Self) -> Self {
        Vector3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }
    /// Returns whether vectors are parallel (their cross product is close to zero vector).
    ///
    pub fn is_parallel_to(self, other: Self) -> bool {
        self.cross(other)
            .equal_within(&Vector3::zero(), Tolerance::GEOMETRIC)
    }
}
impl_tuple!(Vector3, 3);
impl_vector!(Vector3, 3);
impl BitXor for Vector3 {
    type Output = Vector3;

    /// Returns cross product of two vectors.
    ///
    fn bitxor(self, rhs: Self) -> Self::Output {
        self.cross(rhs)
    }
}
impl From<[f32; 3]> for Vector3 {
    fn from(arr: [f32; 3]) -> Self {
        Vector3 {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }
}

/// [`Vector4`] struct represents four-dimensional (homogeneous) free vector.
///
/// It shares its layout with `Point4`, but it is a direction: `w` is 0.0 when vector is
/// made from [`Vector3`].
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default)]
#[repr(C)]
pub struct Vector4 {
    /// X component of vector.
    ///
    pub x: f32,
    /// Y component of vector.
    ///
    pub y: f32,
    /// Z component of vector.
    ///
    pub z: f32,
    /// W component of vector.
    ///
    pub w: f32,
}
impl Vector4 {
    /// Initializes vector from components.
    ///
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Vector4 { x, y, z, w }
    }

    /// Returns elements of vector.
    ///
    pub fn elements(&self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }
    /// Sets from values to elements of vector.
    ///
    pub fn set(&mut self, elements: [f32; 4]) {
        [self.x, self.y, self.z, self.w] = elements;
    }

    /// Returns three-dimensional part of vector (`w` is dropped).
    ///
    pub fn xyz(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Returns cross product of three-dimensional parts of vectors (`w` of result is 0.0).
    ///
    pub fn cross(self, other: Self) -> Self {
        Vector4::from(self.xyz().cross(other.xyz()))
    }
}
impl_tuple!(Vector4, 4);
impl_vector!(Vector4, 4);
impl BitXor for Vector4 {
    type Output = Vector4;

    /// Returns cross product of three-dimensional parts of vectors.
    ///
    fn bitxor(self, rhs: Self) -> Self::Output {
        self.cross(rhs)
    }
}
impl From<[f32; 4]> for Vector4 {
    fn from(arr: [f32; 4]) -> Self {
        Vector4 {
            x: arr[0],
            y: arr[1],
            z: arr[2],
            w: arr[3],
        }
    }
}
impl From<Vector3> for Vector4 {
    /// Directions have zero `w`, so translation part of matrices does not affect them.
    ///
    fn from(vector: Vector3) -> Self {
        Vector4::new(vector.x, vector.y, vector.z, 0.0)
    }
}
