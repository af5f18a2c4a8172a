//! `collisioncore::obbox` submodule implements oriented bounding boxes and
//! separating axis test between them.
//!

use crate::{
    collisioncore::{
        aabbox::{segment_slab, AABBox},
        bsphere::BSphere,
        collisions::Collides,
    },
    mathcore::{
        lines::Line3,
        matrices::{Matrix3, Matrix4},
        planes::Plane,
        points::Point3,
        vectors::Vector3,
    },
};
use seq_macro::seq;
use serde::{Deserialize, Serialize};

/// [`OBBox`] struct represents box which is described in local space and is placed in the
/// world by arbitrary affine transformation.
///
/// All derived values (inverse transform, centers and world corners) are computed on
/// construction, so box is immutable.
///
/// # Example
/// ```rust
/// # use ggcollide::collisioncore::{collisions::Collides, obbox::OBBox};
/// # use ggcollide::mathcore::{Angle, matrices::{Matrix3, Matrix4}, points::Point3};
/// let diamond: OBBox = OBBox::with_transform(
///     Point3::new(-1.0, -1.0, -1.0),
///     Point3::new(1.0, 1.0, 1.0),
///     Matrix4::from_rotation(Matrix3::rotation_z(Angle::DEG45)),
/// );
/// assert!(diamond.collides(&Point3::new(1.3, 0.0, 0.0)));
/// assert!(!diamond.collides(&Point3::new(0.9, 0.9, 0.0)));
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct OBBox {
    /// Minimal corner in local space.
    ///
    min: Point3,
    /// Maximal corner in local space.
    ///
    max: Point3,
    /// Local-to-world transform.
    ///
    world: Matrix4,
    /// World-to-local transform.
    ///
    local: Matrix4,
    /// Center in local space.
    ///
    center: Point3,
    /// Center in world space.
    ///
    center_world: Point3,
    /// Minimal local corner moved to world space.
    ///
    min_world: Point3,
    /// Maximal local corner moved to world space.
    ///
    max_world: Point3,
}
impl OBBox {
    /// Initializes box that is not transformed.
    ///
    pub fn new(a: Point3, b: Point3) -> Self {
        OBBox::with_transform(a, b, Matrix4::identity())
    }
    /// Initializes box from local corners (they are reordered component-wise) and
    /// local-to-world transform.
    ///
    pub fn with_transform(a: Point3, b: Point3, world: Matrix4) -> Self {
        let (min, max): (Point3, Point3) = (a.min(b), a.max(b));
        let center: Point3 = min.midpoint(max);
        OBBox {
            min,
            max,
            world,
            local: world.inverted(),
            center,
            center_world: world.transform_point(center),
            min_world: world.transform_point(min),
            max_world: world.transform_point(max),
        }
    }
    /// Views axis-aligned box as oriented box with identity transform.
    ///
    pub fn from_aabbox(aabbox: &AABBox) -> Self {
        OBBox::new(aabbox.min(), aabbox.max())
    }

    /// Returns minimal corner in local space.
    ///
    pub fn min(&self) -> Point3 {
        self.min
    }
    /// Returns maximal corner in local space.
    ///
    pub fn max(&self) -> Point3 {
        self.max
    }
    /// Returns local-to-world transform.
    ///
    pub fn world(&self) -> Matrix4 {
        self.world
    }
    /// Returns world-to-local transform.
    ///
    pub fn local(&self) -> Matrix4 {
        self.local
    }
    /// Returns center in local space.
    ///
    pub fn center(&self) -> Point3 {
        self.center
    }
    /// Returns center in world space.
    ///
    pub fn center_world(&self) -> Point3 {
        self.center_world
    }
    /// Returns minimal local corner in world space.
    ///
    pub fn min_world(&self) -> Point3 {
        self.min_world
    }
    /// Returns maximal local corner in world space.
    ///
    pub fn max_world(&self) -> Point3 {
        self.max_world
    }
    /// Returns distances from center to faces in local space.
    ///
    pub fn half_extents(&self) -> Vector3 {
        (self.max - self.min) * 0.5
    }
    /// Returns normalized box axes in world space.
    ///
    pub fn axes(&self) -> [Vector3; 3] {
        let rotation: Matrix3 = self.world.get_rotation();
        [0, 1, 2].map(|i| Vector3::from(rotation.column(i)))
    }
    /// Returns all eight corners of box in world space (in order of `AABBox::corners`).
    ///
    pub fn corners(&self) -> [Point3; 8] {
        AABBox::new(self.min, self.max)
            .corners()
            .map(|corner| self.world.transform_point(corner))
    }
    /// Returns half of the length of box projection onto axis.
    ///
    /// Local half extents are projected along normalized box axes and multiplied by scale
    /// of `x` basis column, so (like `BSphere`) only uniform scaling is represented exactly.
    /// `axis` should be normalized for result to be in world units.
    ///
    pub fn scaled_projection(&self, axis: Vector3) -> f32 {
        let half_extents: [f32; 3] = self.half_extents().elements();
        let projection: f32 = self
            .axes()
            .iter()
            .zip(half_extents.iter())
            .map(|(box_axis, h)| h * axis.dot(*box_axis).abs())
            .sum::<f32>();
        projection * self.world.get_x_scale()
    }
}
impl Collides<Point3> for OBBox {
    /// Point is moved to local space, where it should lie strictly inside of the box.
    ///
    fn collides(&self, other: &Point3) -> bool {
        let (min, max, point): ([f32; 3], [f32; 3], [f32; 3]) = (
            self.min.elements(),
            self.max.elements(),
            self.local.transform_point(*other).elements(),
        );
        (0..3).all(|axis| min[axis] < point[axis] && point[axis] < max[axis])
    }
}
impl Collides<BSphere> for OBBox {
    fn collides(&self, other: &BSphere) -> bool {
        other.collides(self)
    }
}
impl Collides<OBBox> for OBBox {
    /// Separating axis test on 15 axes: three faces of each box and nine cross products
    /// of their edges.
    ///
    /// Cross product of parallel edges has no direction; such axis is skipped.
    ///
    fn collides(&self, other: &OBBox) -> bool {
        let (a, b): ([Vector3; 3], [Vector3; 3]) = (self.axes(), other.axes());
        let crossed: [Vector3; 9] =
            seq!(K in 0..9 { [#(a[K / 3].cross(b[K % 3]).normalized(),)*] });
        let offset: Vector3 = other.center_world - self.center_world;

        for &axis in a.iter().chain(b.iter()).chain(crossed.iter()) {
            let distance: f32 = offset.dot(axis).abs();
            let reach: f32 = self.scaled_projection(axis) + other.scaled_projection(axis);
            if distance.is_nan() || reach.is_nan() {
                log::trace!("skipping degenerate separating axis {:?}", axis);
                continue;
            }
            if distance > reach {
                return false;
            }
        }
        true
    }
}
impl Collides<AABBox> for OBBox {
    fn collides(&self, other: &AABBox) -> bool {
        self.collides(&OBBox::from_aabbox(other))
    }
}
impl Collides<Plane> for OBBox {
    fn collides(&self, other: &Plane) -> bool {
        let normal: Vector3 = other.normal.normalized();
        other.signed_distance(self.center_world).abs() <= self.scaled_projection(normal)
    }
}
impl Collides<Line3> for OBBox {
    /// Line is treated as a segment between its two points.
    ///
    fn collides(&self, other: &Line3) -> bool {
        let (p, t): (Point3, Point3) = (
            self.local.transform_point(other.p),
            self.local.transform_point(other.t),
        );
        segment_slab(self.min, self.max, p, t - p)
    }
}

#[cfg(test)]
mod tests {
    use super::OBBox;
    use crate::{
        collisioncore::{aabbox::AABBox, collisions::Collides},
        mathcore::{
            lines::Line3,
            matrices::{Matrix3, Matrix4},
            planes::Plane,
            points::Point3,
            vectors::Vector3,
            Angle,
        },
    };
    use approx::assert_abs_diff_eq;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn cube(world: Matrix4) -> OBBox {
        OBBox::with_transform(
            Point3::new(-1.0, -1.0, -1.0),
            Point3::new(1.0, 1.0, 1.0),
            world,
        )
    }

    fn diamond(x: f32) -> OBBox {
        cube(Matrix4::trs(
            Vector3::new(x, 0.0, 0.0),
            Matrix3::rotation_z(Angle::DEG45),
            Vector3::one(),
        ))
    }

    #[test]
    fn construction() {
        let obbox: OBBox = OBBox::with_transform(
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(-1.0, 0.0, 1.0),
            Matrix4::translation(Vector3::new(10.0, 0.0, 0.0)),
        );
        assert_eq!(obbox.min(), Point3::new(-1.0, 0.0, 1.0));
        assert_eq!(obbox.max(), Point3::new(1.0, 2.0, 3.0));
        assert_eq!(obbox.center(), Point3::new(0.0, 1.0, 2.0));
        assert_eq!(obbox.center_world(), Point3::new(10.0, 1.0, 2.0));
        assert_eq!(obbox.min_world(), Point3::new(9.0, 0.0, 1.0));
        assert_eq!(obbox.max_world(), Point3::new(11.0, 2.0, 3.0));
        assert_eq!(obbox.half_extents(), Vector3::one());
        assert_eq!(obbox.corners()[7], obbox.max_world());

        let aabbox: AABBox = AABBox::new(Point3::new(-2.0, -1.0, 0.0), Point3::new(2.0, 1.0, 4.0));
        let viewed: OBBox = OBBox::from_aabbox(&aabbox);
        assert_eq!(viewed.center_world(), aabbox.center());
        assert_eq!(viewed.world(), Matrix4::identity());
    }

    #[test]
    fn axes_and_projection() {
        let scaled: OBBox = cube(Matrix4::trs(
            Vector3::zero(),
            Matrix3::rotation_z(Angle::DEG90),
            Vector3::new(2.0, 1.0, 1.0),
        ));
        let axes: [Vector3; 3] = scaled.axes();
        assert_abs_diff_eq!(axes[0], Vector3::unit_y(), epsilon = 0.0001);
        assert_abs_diff_eq!(axes[1], -Vector3::unit_x(), epsilon = 0.0001);
        assert_abs_diff_eq!(axes[2], Vector3::unit_z(), epsilon = 0.0001);
        assert_abs_diff_eq!(scaled.scaled_projection(Vector3::unit_y()), 2.0, epsilon = 0.0001);
        assert_abs_diff_eq!(scaled.scaled_projection(Vector3::unit_x()), 2.0, epsilon = 0.0001);
        assert_abs_diff_eq!(
            diamond(0.0).scaled_projection(Vector3::unit_x()),
            std::f32::consts::SQRT_2,
            epsilon = 0.0001
        );
    }

    #[test]
    fn point_collisions() {
        let scaled: OBBox = cube(Matrix4::scale(2.0, 1.0, 1.0));
        assert!(scaled.collides(&Point3::new(1.5, 0.0, 0.0)));
        assert!(!scaled.collides(&Point3::new(2.5, 0.0, 0.0)));
        assert!(!scaled.collides(&Point3::new(2.0, 0.0, 0.0)));
        assert!(Point3::new(-1.9, 0.5, 0.5).collides(&scaled));
    }

    #[test]
    fn separating_axis_test() {
        init_logger();
        let identity: OBBox = cube(Matrix4::identity());
        assert!(identity.collides(&diamond(1.5)));
        assert!(diamond(1.5).collides(&identity));
        assert!(!identity.collides(&diamond(3.0)));
        assert!(!diamond(3.0).collides(&identity));

        let shifted: OBBox = cube(Matrix4::translation(Vector3::new(1.5, 0.5, 0.0)));
        assert!(identity.collides(&shifted));
        let apart: OBBox = cube(Matrix4::translation(Vector3::new(0.0, 0.0, 2.5)));
        assert!(!identity.collides(&apart));

        let scaled: OBBox = cube(Matrix4::scale(2.0, 1.0, 1.0));
        assert!(!scaled.collides(&cube(Matrix4::translation(Vector3::new(3.5, 0.0, 0.0)))));
        assert!(scaled.collides(&cube(Matrix4::translation(Vector3::new(2.9, 0.0, 0.0)))));
    }

    #[test]
    fn projection_uses_uniform_scale() {
        init_logger();
        let stretched: OBBox = cube(Matrix4::scale(3.0, 1.0, 1.0));
        assert_abs_diff_eq!(stretched.scaled_projection(Vector3::unit_x()), 3.0, epsilon = 0.0001);
        assert_abs_diff_eq!(stretched.scaled_projection(Vector3::unit_y()), 3.0, epsilon = 0.0001);

        let above: OBBox = cube(Matrix4::translation(Vector3::new(0.0, 2.5, 0.0)));
        assert!(stretched.collides(&above));
        assert!(above.collides(&stretched));
        let higher: OBBox = cube(Matrix4::translation(Vector3::new(0.0, 4.5, 0.0)));
        assert!(!stretched.collides(&higher));
    }

    #[test]
    fn edge_to_edge_separation() {
        init_logger();
        let tilted: OBBox = cube(Matrix4::trs(
            Vector3::new(2.9, 2.9, 0.0),
            Matrix3::rotation(Angle::DEG45, Angle::ZERO, Angle::DEG45),
            Vector3::one(),
        ));
        let far: OBBox = cube(Matrix4::trs(
            Vector3::new(4.0, 4.0, 0.0),
            Matrix3::rotation(Angle::DEG45, Angle::ZERO, Angle::DEG45),
            Vector3::one(),
        ));
        let identity: OBBox = cube(Matrix4::identity());
        assert!(!identity.collides(&far));
        assert_eq!(identity.collides(&tilted), tilted.collides(&identity));
    }

    #[test]
    fn aabbox_collisions() {
        let aabbox: AABBox = AABBox::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
        assert!(aabbox.collides(&diamond(1.5)));
        assert!(diamond(1.5).collides(&aabbox));
        assert!(!aabbox.collides(&diamond(3.0)));
    }

    #[test]
    fn plane_collisions() {
        let obbox: OBBox = diamond(0.0);
        assert!(obbox.collides(&Plane::new(Point3::new(1.3, 0.0, 0.0), Vector3::new(2.0, 0.0, 0.0))));
        assert!(!obbox.collides(&Plane::new(Point3::new(1.5, 0.0, 0.0), Vector3::new(2.0, 0.0, 0.0))));
        assert!(Plane::new(Point3::origin(), Vector3::unit_z()).collides(&obbox));
    }

    #[test]
    fn segment_collisions() {
        let obbox: OBBox = diamond(0.0);
        let hit: Line3 = Line3::from_points(Point3::new(1.3, -5.0, 0.0), Point3::new(1.3, 5.0, 0.0));
        let miss: Line3 = Line3::from_points(Point3::new(1.5, -5.0, 0.0), Point3::new(1.5, 5.0, 0.0));
        assert!(obbox.collides(&hit));
        assert!(!obbox.collides(&miss));
        assert!(!miss.collides(&obbox));
    }
}
