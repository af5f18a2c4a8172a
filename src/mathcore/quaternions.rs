//! `mathcore::quaternions` submodule implements quaternions which represent rotations in
//! three-dimensional space without gimbal lock.
//!

use crate::mathcore::{
    floats::{equal, FloatOperations, EPSILON},
    matrices::{Matrix3, Matrix4},
    points::Point3,
    vectors::Vector3,
    Angle,
};
use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};
use std::ops::{Mul, MulAssign, Neg};

/// [`Quaternion`] struct represents quaternion as scalar part `w` and vector part `v`.
///
/// Unit quaternions represent rotations; product of two quaternions is composition of their
/// rotations (`(a * b).rotate(v) == a.rotate(b.rotate(v))`).
///
/// # Example
/// ```rust
/// # use ggcollide::mathcore::{Angle, quaternions::Quaternion, vectors::Vector3};
/// # use approx::assert_abs_diff_eq;
/// let q: Quaternion = Quaternion::from_axis_angle(Vector3::unit_z(), Angle::DEG90);
/// assert_abs_diff_eq!(q.rotate(Vector3::unit_x()), Vector3::unit_y(), epsilon = 0.0001);
/// assert_eq!(q * q.inverted(), Quaternion::identity());
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug)]
pub struct Quaternion {
    /// Scalar part.
    ///
    pub w: f32,
    /// Vector part.
    ///
    pub v: Vector3,
}
impl Quaternion {
    /// Initializes quaternion from its parts.
    ///
    pub const fn new(w: f32, v: Vector3) -> Self {
        Quaternion { w, v }
    }
    /// Returns quaternion that represents no rotation.
    ///
    pub const fn identity() -> Self {
        Quaternion::new(1.0, Vector3::new(0.0, 0.0, 0.0))
    }
    /// Constructs rotation around given axis by given angle.
    ///
    /// Axis is expected to be normalized; `w = cos(angle / 2)`, `v = sin(angle / 2) * axis`.
    ///
    pub fn from_axis_angle(axis: Vector3, angle: Angle) -> Self {
        let (sin, cos): (f32, f32) = (angle.radians() / 2.0).sin_cos();
        Quaternion::new(cos, axis * sin)
    }
    /// Returns rotation axis and angle of normalized quaternion.
    ///
    /// Quaternion without rotation reports X axis and zero angle.
    ///
    pub fn to_axis_angle(&self) -> (Vector3, Angle) {
        let q: Quaternion = self.normalized();
        let half_angle: f32 = q.w.clamp(-1.0, 1.0).acos();
        let sin: f32 = half_angle.sin();
        if sin.abs() < EPSILON {
            return (Vector3::unit_x(), Angle::ZERO);
        }
        (q.v / sin, Angle::from_radians(half_angle * 2.0))
    }

    /// Returns conjugated quaternion (vector part is negated).
    ///
    pub fn conjugate(&self) -> Self {
        Quaternion::new(self.w, -self.v)
    }
    /// Performs dot product on four components of quaternions.
    ///
    pub fn dot(&self, other: Quaternion) -> f32 {
        self.w * other.w + self.v.dot(other.v)
    }
    /// Returns length (norm) of quaternion.
    ///
    pub fn length(&self) -> f32 {
        self.dot(*self).sqrt()
    }
    /// Returns quaternion of unit length.
    ///
    pub fn normalized(&self) -> Self {
        let length: f32 = self.length();
        Quaternion::new(self.w / length, self.v / length)
    }
    /// Returns inverse of quaternion (`conjugate / |q|^2`).
    ///
    pub fn inverted(&self) -> Self {
        let length_squared: f32 = self.dot(*self);
        let conjugate: Quaternion = self.conjugate();
        Quaternion::new(conjugate.w / length_squared, conjugate.v / length_squared)
    }

    /// Rotates vector by sandwich product `q * (0, v) * q^-1`.
    ///
    pub fn rotate(&self, vector: Vector3) -> Vector3 {
        (*self * Quaternion::new(0.0, vector) * self.inverted()).v
    }
    /// Rotates point around origin.
    ///
    pub fn rotate_point(&self, point: Point3) -> Point3 {
        Point3::from(self.rotate(point.to_vector()).elements())
    }

    /// Spherically interpolates between two rotations by `t` in [0; 1].
    ///
    /// Shortest path is taken; nearly identical rotations are interpolated linearly.
    ///
    pub fn slerp(&self, other: Quaternion, t: f32) -> Self {
        let (mut other, mut dot): (Quaternion, f32) = (other, self.dot(other));
        if dot < 0.0 {
            other = -other;
            dot = -dot;
        }
        if dot > 0.9995 {
            return Quaternion::new(
                self.w + (other.w - self.w) * t,
                self.v + (other.v - self.v) * t,
            )
            .normalized();
        }
        let theta: f32 = dot.acos();
        let sin_theta: f32 = theta.sin();
        let (s0, s1): (f32, f32) = (
            ((1.0 - t) * theta).sin() / sin_theta,
            (t * theta).sin() / sin_theta,
        );
        Quaternion::new(self.w * s0 + other.w * s1, self.v * s0 + other.v * s1)
    }
}
impl Default for Quaternion {
    fn default() -> Self {
        Quaternion::identity()
    }
}
impl Neg for Quaternion {
    type Output = Self;

    /// Negated quaternion represents the same rotation.
    ///
    fn neg(self) -> Self::Output {
        Quaternion::new(-self.w, -self.v)
    }
}
impl Mul<Self> for Quaternion {
    type Output = Self;

    /// Hamilton product.
    ///
    fn mul(self, rhs: Self) -> Self::Output {
        Quaternion::new(
            self.w * rhs.w - self.v.dot(rhs.v),
            rhs.v * self.w + self.v * rhs.w + self.v.cross(rhs.v),
        )
    }
}
impl MulAssign<Self> for Quaternion {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
impl FloatOperations for Quaternion {
    fn correct_to(self, digits: i32) -> Self {
        Quaternion::new(self.w.correct_to(digits), self.v.correct_to(digits))
    }
    fn round_up_to(self, digits: i32) -> Self {
        Quaternion::new(self.w.round_up_to(digits), self.v.round_up_to(digits))
    }
}
impl PartialEq for Quaternion {
    fn eq(&self, other: &Self) -> bool {
        equal(self.w, other.w) && self.v == other.v
    }
}
impl AbsDiffEq for Quaternion {
    type Epsilon = f32;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.w.abs_diff_eq(&other.w, epsilon) && self.v.abs_diff_eq(&other.v, epsilon)
    }
}
impl RelativeEq for Quaternion {
    fn default_max_relative() -> Self::Epsilon {
        EPSILON
    }
    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.w.relative_eq(&other.w, epsilon, max_relative)
            && self.v.relative_eq(&other.v, epsilon, max_relative)
    }
}
impl From<Quaternion> for Matrix3 {
    /// Converts rotation to matrix (quaternion is normalized first).
    ///
    fn from(quaternion: Quaternion) -> Self {
        let q: Quaternion = quaternion.normalized();
        let (x, y, z, w): (f32, f32, f32, f32) = (q.v.x, q.v.y, q.v.z, q.w);
        Matrix3::from([
            [
                1.0 - 2.0 * (y * y + z * z),
                2.0 * (x * y - w * z),
                2.0 * (x * z + w * y),
            ],
            [
                2.0 * (x * y + w * z),
                1.0 - 2.0 * (x * x + z * z),
                2.0 * (y * z - w * x),
            ],
            [
                2.0 * (x * z - w * y),
                2.0 * (y * z + w * x),
                1.0 - 2.0 * (x * x + y * y),
            ],
        ])
    }
}
impl From<Quaternion> for Matrix4 {
    fn from(quaternion: Quaternion) -> Self {
        Matrix4::from_rotation(Matrix3::from(quaternion))
    }
}
