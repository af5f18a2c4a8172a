//! `mathcore::points` submodule implements affine positions in three-dimensional space and their
//! homogeneous four-dimensional form.
//!
//! Points and vectors are different types on purpose: `Point - Point` yields a vector,
//! `Point ± Vector` yields a point, and metric operations (`dot`, `cross`, `length`,
//! `normalize`) are only available on vectors.
//!

use crate::mathcore::{
    floats::{equal, equal_within, FloatOperations, Tolerance},
    vectors::{impl_assign_operations, impl_operations, impl_tuple, Vector3, Vector4},
};
use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// [`impl_point`] macro implements affine arithmetic for point type with its vector counterpart.
///
macro_rules! impl_point {
    ($struct:ident, $vector:ident, $size:expr) => {
        impl $struct {
            /// Returns squared distance between two points.
            ///
            pub fn distance_squared_to(self, other: Self) -> f32 {
                (other - self).length_squared()
            }
            /// Returns distance between two points.
            ///
            pub fn distance_to(self, other: Self) -> f32 {
                (other - self).length()
            }
            /// Returns point that lies in the middle between two points.
            ///
            pub fn midpoint(self, other: Self) -> Self {
                self + (other - self) * 0.5
            }
            /// Linearly interpolates between points `self` and `other` by `t` (`t` is not clamped).
            ///
            pub fn lerp(self, other: Self, t: f32) -> Self {
                self + (other - self) * t
            }
        }
        impl Sub<Self> for $struct {
            type Output = $vector;

            /// Difference of two positions is a direction.
            ///
            fn sub(self, rhs: Self) -> Self::Output {
                $vector::from(self.combine(rhs, |a, b| a - b).elements())
            }
        }
        impl Add<$vector> for $struct {
            type Output = Self;

            /// Translates point along vector.
            ///
            fn add(self, rhs: $vector) -> Self::Output {
                self.combine(Self::from(rhs.elements()), |a, b| a + b)
            }
        }
        impl Sub<$vector> for $struct {
            type Output = Self;

            fn sub(self, rhs: $vector) -> Self::Output {
                self.combine(Self::from(rhs.elements()), |a, b| a - b)
            }
        }
        impl Neg for $struct {
            type Output = Self;

            fn neg(self) -> Self::Output {
                self.map(|a| -a)
            }
        }
        impl_operations!($struct, Self, combine, ((Add, add, +),));
        impl_assign_operations!($struct, Self, ((AddAssign, add_assign, +),));
        impl_assign_operations!($struct, $vector, ((AddAssign, add_assign, +), (SubAssign, sub_assign, -),));
        impl_operations!($struct, f32, map, ((Add, add, +), (Sub, sub, -), (Mul, mul, *), (Div, div, /),));
        impl_assign_operations!($struct, f32, ((AddAssign, add_assign, +),
                                               (SubAssign, sub_assign, -),
                                               (MulAssign, mul_assign, *),
                                               (DivAssign, div_assign, /),));
    };
}

/// [`Point3`] struct represents position in three-dimensional space.
///
/// # Example
/// ```rust
/// # use ggcollide::mathcore::{points::Point3, vectors::Vector3};
/// let a: Point3 = Point3::new(1.0, 2.0, 3.0);
/// let b: Point3 = Point3::new(4.0, 6.0, 3.0);
/// let ab: Vector3 = b - a;
/// assert_eq!(ab, Vector3::new(3.0, 4.0, 0.0));
/// assert_eq!(a + ab, b);
/// assert_eq!(a.distance_to(b), 5.0);
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default)]
#[repr(C)]
pub struct Point3 {
    /// X coordinate of point.
    ///
    pub x: f32,
    /// Y coordinate of point.
    ///
    pub y: f32,
    /// Z coordinate of point.
    ///
    pub z: f32,
}
impl Point3 {
    /// Initializes point from coordinates.
    ///
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Point3 { x, y, z }
    }
    /// Returns origin of coordinate system.
    ///
    pub const fn origin() -> Self {
        Point3::new(0.0, 0.0, 0.0)
    }

    /// Returns coordinates of point.
    ///
    pub fn elements(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
    /// Sets from values to coordinates of point.
    ///
    pub fn set(&mut self, elements: [f32; 3]) {
        [self.x, self.y, self.z] = elements;
    }

    /// Returns vector that leads from origin to this point.
    ///
    pub fn to_vector(self) -> Vector3 {
        Vector3::from(self.elements())
    }

    /// Returns whether three points lie on one line.
    ///
    /// Points are collinear iff `(b - a) × (c - a)` is zero vector.
    ///
    /// # Example
    /// ```rust
    /// # use ggcollide::mathcore::points::Point3;
    /// assert!(Point3::collinear(
    ///     Point3::new(-5.0, -6.0, 1.0),
    ///     Point3::new(6.0, -1.0, 1.0),
    ///     Point3::new(-38.0, -21.0, 1.0),
    /// ));
    /// ```
    ///
    pub fn collinear(a: Point3, b: Point3, c: Point3) -> bool {
        (b - a)
            .cross(c - a)
            .equal_within(&Vector3::zero(), Tolerance::DEFAULT)
    }
}
impl_tuple!(Point3, 3);
impl_point!(Point3, Vector3, 3);
impl From<[f32; 3]> for Point3 {
    fn from(arr: [f32; 3]) -> Self {
        Point3 {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }
}
impl From<Point4> for Point3 {
    /// Converts homogeneous point to three-dimensional by division on `w`.
    ///
    fn from(point: Point4) -> Self {
        point.homogenized()
    }
}

/// [`Point4`] struct represents position in homogeneous coordinates.
///
/// `w` is 1.0 for positions (that is what [`Point4::new`] sets); `w` of 0.0 turns point into
/// direction that is not affected by translation.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug)]
#[repr(C)]
pub struct Point4 {
    /// X coordinate of point.
    ///
    pub x: f32,
    /// Y coordinate of point.
    ///
    pub y: f32,
    /// Z coordinate of point.
    ///
    pub z: f32,
    /// Homogeneous coordinate.
    ///
    pub w: f32,
}
impl Point4 {
    /// Initializes position from coordinates (`w` is 1.0).
    ///
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Point4 { x, y, z, w: 1.0 }
    }
    /// Initializes point with explicit homogeneous coordinate.
    ///
    pub const fn with_w(x: f32, y: f32, z: f32, w: f32) -> Self {
        Point4 { x, y, z, w }
    }
    /// Returns origin of coordinate system.
    ///
    pub const fn origin() -> Self {
        Point4::new(0.0, 0.0, 0.0)
    }

    /// Returns coordinates of point.
    ///
    pub fn elements(&self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }
    /// Sets from values to coordinates of point.
    ///
    pub fn set(&mut self, elements: [f32; 4]) {
        [self.x, self.y, self.z, self.w] = elements;
    }

    /// Returns three-dimensional part of point without division on `w`.
    ///
    pub fn xyz(&self) -> Point3 {
        Point3::new(self.x, self.y, self.z)
    }
    /// Returns three-dimensional point by dividing coordinates on `w`.
    ///
    /// Points with `w` equal to 0.0 are directions, so their coordinates are returned as is.
    ///
    pub fn homogenized(&self) -> Point3 {
        if self.w == 0.0 {
            self.xyz()
        } else {
            Point3::new(self.x / self.w, self.y / self.w, self.z / self.w)
        }
    }
    /// Returns vector that leads from origin to this point.
    ///
    pub fn to_vector(self) -> Vector4 {
        Vector4::from(self.elements())
    }
}
impl Default for Point4 {
    fn default() -> Self {
        Point4::origin()
    }
}
impl_tuple!(Point4, 4);
impl_point!(Point4, Vector4, 4);
impl From<[f32; 4]> for Point4 {
    fn from(arr: [f32; 4]) -> Self {
        Point4 {
            x: arr[0],
            y: arr[1],
            z: arr[2],
            w: arr[3],
        }
    }
}
impl From<Point3> for Point4 {
    fn from(point: Point3) -> Self {
        Point4::new(point.x, point.y, point.z)
    }
}
