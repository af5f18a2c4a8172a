//! `collisioncore::bsphere` submodule implements bounding spheres.
//!

use crate::{
    collisioncore::{aabbox::AABBox, collisions::Collides, obbox::OBBox},
    mathcore::{lines::Line3, matrices::Matrix4, planes::Plane, points::Point3},
};
use serde::{Deserialize, Serialize};

/// [`BSphere`] struct represents bounding sphere which is placed in the world by
/// transformation matrix.
///
/// Sphere is described in local space and is moved to the world by `world` matrix;
/// radius is scaled by scale of `x` basis column, so only uniform scaling keeps the
/// volume spherical.
///
/// # Example
/// ```rust
/// # use ggcollide::collisioncore::{bsphere::BSphere, collisions::Collides};
/// # use ggcollide::mathcore::{matrices::{Matrix3, Matrix4}, points::Point3, vectors::Vector3};
/// let bsphere: BSphere = BSphere::with_transform(
///     Point3::origin(),
///     1.0,
///     Matrix4::trs(Vector3::new(5.0, 0.0, 0.0), Matrix3::identity(), Vector3::new(2.0, 2.0, 2.0)),
/// );
/// assert_eq!(bsphere.center_world(), Point3::new(5.0, 0.0, 0.0));
/// assert_eq!(bsphere.scaled_radius(), 2.0);
/// assert!(bsphere.collides(&Point3::new(6.9, 0.0, 0.0)));
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct BSphere {
    /// Center in local space.
    ///
    center: Point3,
    /// Radius in local space.
    ///
    radius: f32,
    /// Local-to-world transform.
    ///
    world: Matrix4,
    /// World-to-local transform.
    ///
    local: Matrix4,
}
impl BSphere {
    /// Initializes sphere that is not transformed.
    ///
    pub fn new(center: Point3, radius: f32) -> Self {
        BSphere::with_transform(center, radius, Matrix4::identity())
    }
    /// Initializes sphere that is placed to the world by given matrix.
    ///
    pub fn with_transform(center: Point3, radius: f32, world: Matrix4) -> Self {
        BSphere {
            center,
            radius,
            world,
            local: world.inverted(),
        }
    }

    /// Returns center in local space.
    ///
    pub fn center(&self) -> Point3 {
        self.center
    }
    /// Returns radius in local space.
    ///
    pub fn radius(&self) -> f32 {
        self.radius
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
    /// Returns center in world space.
    ///
    pub fn center_world(&self) -> Point3 {
        self.world.transform_point(self.center)
    }
    /// Returns radius in world space.
    ///
    pub fn scaled_radius(&self) -> f32 {
        self.radius * self.world.get_x_scale()
    }
    /// Returns whether center of sphere lies strictly on the side plane normal points to.
    ///
    pub fn above_plane(&self, plane: &Plane) -> bool {
        plane.above(self.center_world())
    }
}
impl Collides<BSphere> for BSphere {
    fn collides(&self, other: &BSphere) -> bool {
        let reach: f32 = self.scaled_radius() + other.scaled_radius();
        self.center_world().distance_squared_to(other.center_world()) < reach * reach
    }
}
impl Collides<Point3> for BSphere {
    fn collides(&self, other: &Point3) -> bool {
        let radius: f32 = self.scaled_radius();
        self.center_world().distance_squared_to(*other) < radius * radius
    }
}
impl Collides<AABBox> for BSphere {
    fn collides(&self, other: &AABBox) -> bool {
        self.collides(&other.closest_point(self.center_world()))
    }
}
impl Collides<OBBox> for BSphere {
    fn collides(&self, other: &OBBox) -> bool {
        let center: Point3 = other.local().transform_point(self.center_world());
        let closest: Point3 = center.max(other.min()).min(other.max());
        self.collides(&other.world().transform_point(closest))
    }
}
impl Collides<Plane> for BSphere {
    fn collides(&self, other: &Plane) -> bool {
        other.distance_to(self.center_world()) < self.scaled_radius()
    }
}
impl Collides<Line3> for BSphere {
    /// Line is treated as a segment between its two points.
    ///
    fn collides(&self, other: &Line3) -> bool {
        self.collides(&other.nearest_approach_segment(self.center_world()))
    }
}

#[cfg(test)]
mod tests {
    use super::BSphere;
    use crate::{
        collisioncore::{aabbox::AABBox, collisions::Collides, obbox::OBBox},
        mathcore::{
            lines::Line3,
            matrices::{Matrix3, Matrix4},
            planes::Plane,
            points::Point3,
            vectors::Vector3,
            Angle,
        },
    };

    fn diamond() -> OBBox {
        OBBox::with_transform(
            Point3::new(-1.0, -1.0, -1.0),
            Point3::new(1.0, 1.0, 1.0),
            Matrix4::from_rotation(Matrix3::rotation_z(Angle::DEG45)),
        )
    }

    #[test]
    fn bsphere_collisions() {
        let a: BSphere = BSphere::new(Point3::new(-6.77, 0.0, -6.7), 5.0);
        let b: BSphere = BSphere::new(Point3::new(9.0, 0.0, 5.0), 2.5);
        assert!(!a.collides(&b));
        assert!(!b.collides(&a));

        let c: BSphere = BSphere::new(Point3::new(7.844, 0.0, 5.774), 3.0);
        let d: BSphere = BSphere::new(Point3::new(6.0, 0.0, 4.0), 2.5);
        assert!(c.collides(&d));
        assert!(d.collides(&c));
        assert!(b.collides(&c));
    }

    #[test]
    fn transformed_sphere() {
        let bsphere: BSphere = BSphere::with_transform(
            Point3::origin(),
            1.0,
            Matrix4::trs(Vector3::new(5.0, 0.0, 0.0), Matrix3::identity(), Vector3::new(2.0, 2.0, 2.0)),
        );
        assert_eq!(bsphere.center(), Point3::origin());
        assert_eq!(bsphere.radius(), 1.0);
        assert_eq!(bsphere.scaled_radius(), 2.0);
        assert_eq!(
            bsphere.local().transform_point(Point3::new(7.0, 0.0, 0.0)),
            Point3::new(1.0, 0.0, 0.0)
        );
        assert!(bsphere.collides(&Point3::new(6.9, 0.0, 0.0)));
        assert!(!bsphere.collides(&Point3::new(7.1, 0.0, 0.0)));
        assert!(Point3::new(3.5, 0.5, 0.5).collides(&bsphere));
    }

    #[test]
    fn radius_follows_x_scale() {
        let bsphere: BSphere =
            BSphere::with_transform(Point3::origin(), 1.0, Matrix4::scale(1.0, 4.0, 1.0));
        assert_eq!(bsphere.scaled_radius(), bsphere.radius());
        assert!(bsphere.collides(&Point3::new(0.0, 0.9, 0.0)));
        assert!(!bsphere.collides(&Point3::new(0.0, 2.0, 0.0)));
    }

    #[test]
    fn box_collisions() {
        let aabbox: AABBox = AABBox::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
        let obbox: OBBox = diamond();

        let near: BSphere = BSphere::new(Point3::new(1.8, 0.0, 0.0), 0.5);
        assert!(near.collides(&obbox));
        assert!(obbox.collides(&near));
        assert!(!near.collides(&aabbox));
        assert!(!aabbox.collides(&near));

        let small: BSphere = BSphere::new(Point3::new(1.8, 0.0, 0.0), 0.3);
        assert!(!small.collides(&obbox));

        let inside: BSphere = BSphere::new(Point3::new(0.1, 0.2, 0.3), 0.1);
        assert!(inside.collides(&obbox));
        assert!(inside.collides(&aabbox));
    }

    #[test]
    fn plane_collisions() {
        let plane: Plane = Plane::new(Point3::origin(), Vector3::unit_y());
        let small: BSphere = BSphere::new(Point3::new(0.0, 3.0, 0.0), 1.0);
        let large: BSphere = BSphere::new(Point3::new(0.0, 3.0, 0.0), 3.5);
        assert!(!small.collides(&plane));
        assert!(large.collides(&plane));
        assert!(plane.collides(&large));
        assert!(small.above_plane(&plane));
        assert!(!small.above_plane(&Plane::new(Point3::origin(), -Vector3::unit_y())));
    }

    #[test]
    fn segment_collisions() {
        let bsphere: BSphere = BSphere::new(Point3::origin(), 1.0);
        let through: Line3 = Line3::from_points(Point3::new(-5.0, 0.5, 0.0), Point3::new(5.0, 0.5, 0.0));
        let outside: Line3 = Line3::from_points(Point3::new(2.0, 0.0, 0.0), Point3::new(5.0, 0.0, 0.0));
        assert!(bsphere.collides(&through));
        assert!(!bsphere.collides(&outside));
        assert!(!outside.collides(&bsphere));

        let pointing: Line3 = Line3::from_points(Point3::new(-5.0, 0.0, 0.0), Point3::new(-2.0, 0.0, 0.0));
        assert!(!bsphere.collides(&pointing));
        assert!(bsphere.collides(&Line3::from_points(pointing.p, Point3::new(-0.5, 0.0, 0.0))));
    }
}
