//! `mathcore::transforms` submodule implements enum which describes basic affine transformations
//! and composes them into transformation matrices.
//!

use crate::mathcore::{
    matrices::{EulerAngles, Matrix4},
    points::Point3,
    quaternions::Quaternion,
    vectors::Vector3,
};
use serde::{Deserialize, Serialize};

/// [`Transform`] struct-like enum represents basic matrix transformations in three-dimensional
/// space.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub enum Transform {
    /// Translation moves an object along given vector.
    ///
    Translation {
        /// Vector along which object will be translated.
        ///
        vector: Vector3,
    },

    /// Rotation by Euler angles (composed as `Rx * Ry * Rz`).
    ///
    Rotation {
        /// Angles of rotation around each axis.
        ///
        angles: EulerAngles,
    },
    /// Rotation that is described by quaternion.
    ///
    QuaternionRotation {
        /// Rotation quaternion.
        ///
        quaternion: Quaternion,
    },

    /// Scaling transform changes the size of an object by expanding or contracting all vertices
    /// along axes by given scalar values.
    ///
    Scaling {
        /// Scale factor of every axis.
        ///
        scale: Vector3,
    },
}
impl Transform {
    /// Constructs corresponding transformation matrix.
    ///
    /// # Examples
    /// ### Translation
    /// ```rust
    /// # use ggcollide::mathcore::{points::Point3, transforms::Transform, vectors::Vector3};
    /// let transform: Transform = Transform::Translation { vector: Vector3::new(2.0, 3.0, 4.0) };
    /// assert_eq!(
    ///     transform.matrix().transform_point(Point3::new(0.0, 2.0, 0.0)),
    ///     Point3::new(2.0, 5.0, 4.0)
    /// );
    /// ```
    ///
    /// ### Rotation
    /// ```rust
    /// # use ggcollide::mathcore::{matrices::EulerAngles, points::Point3, transforms::Transform};
    /// # use approx::assert_abs_diff_eq;
    /// let transform: Transform = Transform::Rotation {
    ///     angles: EulerAngles::from_radians(0.0, 0.0, std::f32::consts::FRAC_PI_2),
    /// };
    /// assert_abs_diff_eq!(
    ///     transform.matrix().transform_point(Point3::new(0.0, 2.0, 0.0)),
    ///     Point3::new(-2.0, 0.0, 0.0),
    ///     epsilon = 0.0001
    /// );
    /// ```
    ///
    /// ### Scaling
    /// ```rust
    /// # use ggcollide::mathcore::{points::Point3, transforms::Transform, vectors::Vector3};
    /// let transform: Transform = Transform::Scaling { scale: Vector3::new(3.0, 2.0, 1.0) };
    /// assert_eq!(
    ///     transform.matrix().transform_point(Point3::new(2.0, 2.0, 2.0)),
    ///     Point3::new(6.0, 4.0, 2.0)
    /// );
    /// ```
    ///
    pub fn matrix(self) -> Matrix4 {
        match self {
            Self::Translation { vector } => Matrix4::translation(vector),
            Self::Rotation { angles } => Matrix4::rotation(angles.x, angles.y, angles.z),
            Self::QuaternionRotation { quaternion } => Matrix4::from(quaternion),
            Self::Scaling { scale } => Matrix4::scale(scale.x, scale.y, scale.z),
        }
    }

    /// Applies transform to a point.
    ///
    pub fn apply_to(self, point: Point3) -> Point3 {
        self.matrix().transform_point(point)
    }

    /// Combines given transforms by using dot product.
    ///
    /// This function automatically reverses the order, so if you need to combine transforms `A -> B -> C`
    /// just pass them in that order (matrices multiplication will be performed in order `C * B * A`).
    ///
    /// # Example
    /// ```rust
    /// # use ggcollide::mathcore::{Angle, matrices::{EulerAngles, Matrix3, Matrix4}, transforms::Transform, vectors::Vector3};
    /// # use approx::assert_abs_diff_eq;
    /// let scale: Transform = Transform::Scaling { scale: Vector3::new(2.0, 2.0, 2.0) };
    /// let rotation: Transform = Transform::Rotation {
    ///     angles: EulerAngles { x: Angle::ZERO, y: Angle::DEG90, z: Angle::ZERO },
    /// };
    /// let translation: Transform = Transform::Translation { vector: Vector3::new(3.0, 2.0, 1.0) };
    /// assert_abs_diff_eq!(
    ///     Transform::combine([scale, rotation, translation].into_iter()),
    ///     Matrix4::trs(
    ///         Vector3::new(3.0, 2.0, 1.0),
    ///         Matrix3::rotation_y(Angle::DEG90),
    ///         Vector3::new(2.0, 2.0, 2.0),
    ///     ),
    ///     epsilon = 0.0001
    /// );  // scaling -> rotation -> translation
    /// ```
    ///
    pub fn combine(transforms: impl DoubleEndedIterator<Item = Transform>) -> Matrix4 {
        transforms
            .rev()
            .fold(Matrix4::identity(), |acc, transform| {
                acc * transform.matrix()
            })
    }
}
