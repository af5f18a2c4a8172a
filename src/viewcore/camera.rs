//! `viewcore::camera` submodule implements camera which produces view and projection
//! matrices.
//!

use crate::mathcore::{
    floats::EPSILON,
    matrices::Matrix4,
    points::Point3,
    vectors::Vector3,
    Angle,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// [`CameraError`] enum lists errors that could happen on camera construction.
///
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum CameraError {
    /// Camera position coincides with its target, so there is no view direction.
    ///
    #[error("camera position coincides with its target")]
    DegenerateViewDirection,
    /// Up vector is parallel to view direction (or has zero length), so camera roll is undefined.
    ///
    #[error("up vector is parallel to view direction")]
    UpParallelToView,
    /// Frustum has no volume.
    ///
    #[error("frustum extents are empty")]
    EmptyFrustum,
}

/// [`Frustum`] struct describes visible volume in view space.
///
/// `near` and `far` are distances along view direction (camera looks along `-z` in view space).
///
/// If you do not want to tweak the volume, just pass `..Default::default()` to fill up remaining
/// extents.
///
/// # Example
/// ```rust
/// # use ggcollide::viewcore::camera::Frustum;
/// let frustum: Frustum = Frustum {
///     far: 1000.0,
///     ..Default::default()
/// };
/// assert_eq!(frustum.left, -1.0);
/// assert!(!frustum.is_empty());
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Frustum {
    /// Left extent.
    ///
    pub left: f32,
    /// Right extent.
    ///
    pub right: f32,

    /// Bottom extent.
    ///
    pub bottom: f32,
    /// Top extent.
    ///
    pub top: f32,

    /// Distance to near clipping plane.
    ///
    pub near: f32,
    /// Distance to far clipping plane.
    ///
    pub far: f32,
}
impl Frustum {
    /// Initializes frustum which is centered on view direction.
    ///
    pub fn symmetric(width: f32, height: f32, near: f32, far: f32) -> Self {
        Frustum {
            left: -width / 2.0,
            right: width / 2.0,
            bottom: -height / 2.0,
            top: height / 2.0,
            near,
            far,
        }
    }
    /// Initializes perspective frustum from vertical field of view and aspect ratio (width / height).
    ///
    pub fn perspective(fov_y: Angle, aspect: f32, near: f32, far: f32) -> Self {
        let top: f32 = near * (fov_y / 2.0).tan();
        Frustum::symmetric(2.0 * top * aspect, 2.0 * top, near, far)
    }
    /// Returns whether frustum has no volume.
    ///
    pub fn is_empty(&self) -> bool {
        !(self.right > self.left && self.top > self.bottom && self.far > self.near)
    }
}
impl Default for Frustum {
    fn default() -> Self {
        Frustum {
            left: -1.0,
            right: 1.0,

            bottom: -1.0,
            top: 1.0,

            near: 0.1,
            far: 100.0,
        }
    }
}

/// [`Camera`] struct represents right-handed look-at camera.
///
/// Camera is a value: moving it means constructing another camera
/// (see [`Camera::with_position`] and [`Camera::with_target`]).
///
/// # Example
/// ```rust
/// # use ggcollide::viewcore::camera::{Camera, Frustum};
/// # use ggcollide::mathcore::{points::Point3, vectors::Vector3};
/// let camera: Camera = Camera::new(
///     Point3::new(0.0, 0.0, 5.0),
///     Point3::origin(),
///     Vector3::unit_y(),
///     Frustum::default(),
/// )
/// .expect("Camera should be valid");
/// assert_eq!(camera.forward(), Vector3::new(0.0, 0.0, -1.0));
/// assert_eq!(
///     camera.world_to_view().transform_point(Point3::origin()),
///     Point3::new(0.0, 0.0, -5.0)
/// );
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    /// Position of camera.
    ///
    position: Point3,
    /// Point camera looks at.
    ///
    target: Point3,
    /// Approximate up direction.
    ///
    up: Vector3,
    /// Visible volume.
    ///
    frustum: Frustum,
}
impl Camera {
    /// Initializes camera and validates its parameters.
    ///
    pub fn new(
        position: Point3,
        target: Point3,
        up: Vector3,
        frustum: Frustum,
    ) -> Result<Self, CameraError> {
        let view: Vector3 = target - position;
        if view.length() <= EPSILON {
            log::debug!("rejected camera at {:?}: target coincides with position", position);
            return Err(CameraError::DegenerateViewDirection);
        }
        if view.normalized().cross(up).length() <= EPSILON * up.length() {
            log::debug!("rejected camera at {:?}: up {:?} is parallel to view", position, up);
            return Err(CameraError::UpParallelToView);
        }
        if frustum.is_empty() {
            log::debug!("rejected camera at {:?}: empty frustum {:?}", position, frustum);
            return Err(CameraError::EmptyFrustum);
        }
        log::debug!(
            "built camera at {:?} looking at {:?} with {:?}",
            position,
            target,
            frustum
        );
        Ok(Camera {
            position,
            target,
            up,
            frustum,
        })
    }
    /// Constructs camera at another position which looks at the same target.
    ///
    pub fn with_position(&self, position: Point3) -> Result<Self, CameraError> {
        Camera::new(position, self.target, self.up, self.frustum)
    }
    /// Constructs camera at the same position which looks at another target.
    ///
    pub fn with_target(&self, target: Point3) -> Result<Self, CameraError> {
        Camera::new(self.position, target, self.up, self.frustum)
    }

    /// Returns position of camera.
    ///
    pub fn position(&self) -> Point3 {
        self.position
    }
    /// Returns point camera looks at.
    ///
    pub fn target(&self) -> Point3 {
        self.target
    }
    /// Returns up vector camera was constructed with.
    ///
    pub fn up(&self) -> Vector3 {
        self.up
    }
    /// Returns visible volume.
    ///
    pub fn frustum(&self) -> Frustum {
        self.frustum
    }

    /// Returns normalized view direction.
    ///
    pub fn forward(&self) -> Vector3 {
        (self.target - self.position).normalized()
    }
    /// Returns normalized right direction (`forward × up`).
    ///
    pub fn right(&self) -> Vector3 {
        self.forward().cross(self.up).normalized()
    }
    /// Returns normalized up direction which is orthogonal to view direction.
    ///
    pub fn up_direction(&self) -> Vector3 {
        self.right().cross(self.forward())
    }

    /// Returns matrix that moves world into view space (camera at origin looking along `-z`).
    ///
    pub fn world_to_view(&self) -> Matrix4 {
        let (s, u, f): (Vector3, Vector3, Vector3) =
            (self.right(), self.up_direction(), self.forward());
        let eye: Vector3 = self.position.to_vector();
        Matrix4::from([
            [s.x, s.y, s.z, -s.dot(eye)],
            [u.x, u.y, u.z, -u.dot(eye)],
            [-f.x, -f.y, -f.z, f.dot(eye)],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }
    /// Returns matrix that moves view space back into the world.
    ///
    pub fn view_to_world(&self) -> Matrix4 {
        self.world_to_view().inverted_trs()
    }

    /// Returns orthographic projection of frustum to normalized device coordinates.
    ///
    pub fn ortho_ndc(&self) -> Matrix4 {
        let Frustum {
            left: l,
            right: r,
            bottom: b,
            top: t,
            near: n,
            far: f,
        } = self.frustum;
        Matrix4::from([
            [2.0 / (r - l), 0.0, 0.0, -(r + l) / (r - l)],
            [0.0, 2.0 / (t - b), 0.0, -(t + b) / (t - b)],
            [0.0, 0.0, -2.0 / (f - n), -(f + n) / (f - n)],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }
    /// Returns perspective projection of frustum to clip space.
    ///
    /// Result should be homogenized to get normalized device coordinates.
    ///
    pub fn perspective_ndc(&self) -> Matrix4 {
        let Frustum {
            left: l,
            right: r,
            bottom: b,
            top: t,
            near: n,
            far: f,
        } = self.frustum;
        Matrix4::from([
            [2.0 * n / (r - l), 0.0, (r + l) / (r - l), 0.0],
            [0.0, 2.0 * n / (t - b), (t + b) / (t - b), 0.0],
            [0.0, 0.0, -(f + n) / (f - n), -2.0 * f * n / (f - n)],
            [0.0, 0.0, -1.0, 0.0],
        ])
    }
    /// Returns composition of view and orthographic projection.
    ///
    pub fn world_to_ndc_ortho(&self) -> Matrix4 {
        self.ortho_ndc() * self.world_to_view()
    }
    /// Returns composition of view and perspective projection.
    ///
    pub fn world_to_ndc_perspective(&self) -> Matrix4 {
        self.perspective_ndc() * self.world_to_view()
    }
}
impl Default for Camera {
    /// Camera at `(0, 0, 1)` which looks at origin with `y` axis up.
    ///
    fn default() -> Self {
        Camera {
            position: Point3::new(0.0, 0.0, 1.0),
            target: Point3::origin(),
            up: Vector3::unit_y(),
            frustum: Frustum::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Camera, CameraError, Frustum};
    use crate::mathcore::{matrices::Matrix4, points::Point3, vectors::Vector3, Angle};
    use approx::assert_abs_diff_eq;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn validation() {
        init_logger();
        let frustum: Frustum = Frustum::default();
        assert_eq!(
            Camera::new(Point3::origin(), Point3::origin(), Vector3::unit_y(), frustum),
            Err(CameraError::DegenerateViewDirection)
        );
        assert_eq!(
            Camera::new(Point3::origin(), Point3::new(0.0, 3.0, 0.0), Vector3::unit_y(), frustum),
            Err(CameraError::UpParallelToView)
        );
        assert_eq!(
            Camera::new(Point3::origin(), Point3::new(0.0, 0.0, -1.0), Vector3::zero(), frustum),
            Err(CameraError::UpParallelToView)
        );
        assert_eq!(
            Camera::new(
                Point3::origin(),
                Point3::new(0.0, 0.0, -1.0),
                Vector3::unit_y(),
                Frustum {
                    near: 10.0,
                    far: 1.0,
                    ..Default::default()
                }
            ),
            Err(CameraError::EmptyFrustum)
        );

        let camera: Camera = Camera::default();
        assert_eq!(camera.with_position(Point3::origin()), Err(CameraError::DegenerateViewDirection));
        assert_eq!(
            camera.with_target(Point3::new(0.0, 0.0, -4.0)).map(|moved| moved.target()),
            Ok(Point3::new(0.0, 0.0, -4.0))
        );
    }

    #[test]
    fn basis() {
        let camera: Camera = Camera::new(
            Point3::new(3.0, 2.0, 1.0),
            Point3::new(-4.0, 0.5, 7.0),
            Vector3::new(0.1, 1.0, 0.3),
            Frustum::default(),
        )
        .expect("Camera should be valid");
        let (f, s, u): (Vector3, Vector3, Vector3) =
            (camera.forward(), camera.right(), camera.up_direction());
        assert_abs_diff_eq!(f.length(), 1.0, epsilon = 0.0001);
        assert_abs_diff_eq!(s.length(), 1.0, epsilon = 0.0001);
        assert_abs_diff_eq!(u.length(), 1.0, epsilon = 0.0001);
        assert_abs_diff_eq!(f.dot(s), 0.0, epsilon = 0.0001);
        assert_abs_diff_eq!(f.dot(u), 0.0, epsilon = 0.0001);
        assert_abs_diff_eq!(s.dot(u), 0.0, epsilon = 0.0001);
        assert!(u.dot(camera.up()) > 0.0);
    }

    #[test]
    fn view_transform() {
        let camera: Camera = Camera::new(
            Point3::new(0.0, 0.0, 5.0),
            Point3::origin(),
            Vector3::unit_y(),
            Frustum::default(),
        )
        .expect("Camera should be valid");
        assert_abs_diff_eq!(camera.right(), Vector3::unit_x(), epsilon = 0.0001);
        assert_abs_diff_eq!(camera.up_direction(), Vector3::unit_y(), epsilon = 0.0001);
        assert_abs_diff_eq!(
            camera.world_to_view().transform_point(Point3::new(1.0, 2.0, 0.0)),
            Point3::new(1.0, 2.0, -5.0),
            epsilon = 0.0001
        );
        assert_abs_diff_eq!(
            camera.world_to_view().transform_point(camera.position()),
            Point3::origin(),
            epsilon = 0.0001
        );

        let tilted: Camera = Camera::new(
            Point3::new(3.0, -2.0, 4.0),
            Point3::new(-1.0, 1.0, 0.5),
            Vector3::new(0.2, 1.0, 0.0),
            Frustum::default(),
        )
        .expect("Camera should be valid");
        let point: Point3 = Point3::new(7.0, 0.5, -2.0);
        assert_abs_diff_eq!(
            tilted
                .view_to_world()
                .transform_point(tilted.world_to_view().transform_point(point)),
            point,
            epsilon = 0.0001
        );
        assert_abs_diff_eq!(
            tilted.view_to_world() * tilted.world_to_view(),
            Matrix4::identity(),
            epsilon = 0.0001
        );
        assert_abs_diff_eq!(
            tilted.world_to_view().transform_point(tilted.target()),
            Point3::new(0.0, 0.0, -tilted.position().distance_to(tilted.target())),
            epsilon = 0.0001
        );
    }

    #[test]
    fn orthographic_projection() {
        let camera: Camera = Camera::new(
            Point3::origin(),
            Point3::new(0.0, 0.0, -1.0),
            Vector3::unit_y(),
            Frustum::symmetric(4.0, 2.0, 1.0, 11.0),
        )
        .expect("Camera should be valid");
        let ortho: Matrix4 = camera.ortho_ndc();
        assert_abs_diff_eq!(
            ortho.transform_point(Point3::new(2.0, 1.0, -1.0)),
            Point3::new(1.0, 1.0, -1.0),
            epsilon = 0.0001
        );
        assert_abs_diff_eq!(
            ortho.transform_point(Point3::new(-2.0, -1.0, -11.0)),
            Point3::new(-1.0, -1.0, 1.0),
            epsilon = 0.0001
        );
        assert_abs_diff_eq!(camera.world_to_ndc_ortho(), ortho, epsilon = 0.0001);
    }

    #[test]
    fn perspective_projection() {
        let frustum: Frustum = Frustum::perspective(Angle::DEG90, 2.0, 1.0, 10.0);
        assert_abs_diff_eq!(frustum.top, 1.0, epsilon = 0.0001);
        assert_abs_diff_eq!(frustum.right, 2.0, epsilon = 0.0001);

        let camera: Camera = Camera::new(
            Point3::new(0.0, 0.0, 5.0),
            Point3::origin(),
            Vector3::unit_y(),
            frustum,
        )
        .expect("Camera should be valid");
        let projection: Matrix4 = camera.perspective_ndc();
        assert_abs_diff_eq!(
            projection.transform_point(Point3::new(2.0, 1.0, -1.0)),
            Point3::new(1.0, 1.0, -1.0),
            epsilon = 0.0001
        );
        assert_abs_diff_eq!(
            projection.transform_point(Point3::new(0.0, 0.0, -10.0)),
            Point3::new(0.0, 0.0, 1.0),
            epsilon = 0.0001
        );
        assert_abs_diff_eq!(
            projection.transform_point(Point3::new(10.0, 0.0, -10.0)),
            Point3::new(0.5, 0.0, 1.0),
            epsilon = 0.0001
        );
        assert_abs_diff_eq!(
            camera
                .world_to_ndc_perspective()
                .transform_point(Point3::new(0.0, 0.0, 4.0)),
            Point3::new(0.0, 0.0, -1.0),
            epsilon = 0.0001
        );
    }
}
