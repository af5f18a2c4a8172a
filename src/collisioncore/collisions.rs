//! `collisioncore::collisions` submodule defines interface of collision detection and
//! implements collision queries of geometric primitives against volumes.
//!

use crate::{
    collisioncore::{aabbox::AABBox, bsphere::BSphere, obbox::OBBox},
    mathcore::{lines::Line3, planes::Plane, points::Point3},
};

/// [`Collides`] trait defines objects that can detect whether they intersect with `T`.
///
/// Implementations are required to be symmetric: if both `A: Collides<B>` and `B: Collides<A>`
/// are implemented, `a.collides(&b) == b.collides(&a)`.
///
/// # Example
/// ```rust
/// # use ggcollide::collisioncore::{aabbox::AABBox, bsphere::BSphere, collisions::Collides};
/// # use ggcollide::mathcore::points::Point3;
/// let aabbox: AABBox = AABBox::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
/// let bsphere: BSphere = BSphere::new(Point3::new(1.5, 0.0, 0.0), 1.0);
/// assert!(aabbox.collides(&bsphere));
/// assert!(bsphere.collides(&aabbox));
/// ```
///
pub trait Collides<T: ?Sized> {
    /// Returns whether two objects intersect.
    ///
    fn collides(&self, other: &T) -> bool;
}

/// Returns whether two objects collide.
///
/// This function is a shorthand for `a.collides(b)` which reads better when neither of objects
/// is more important than the other.
///
pub fn is_colliding<A, B>(a: &A, b: &B) -> bool
where
    A: Collides<B>,
{
    a.collides(b)
}

/// [`impl_reversed_collision`] macro implements collision query by swapping operands
/// of already implemented one.
///
macro_rules! impl_reversed_collision {
    ($lhs:ty => $($rhs:ty),+ $(,)?) => {$(
        impl Collides<$rhs> for $lhs {
            fn collides(&self, other: &$rhs) -> bool {
                other.collides(self)
            }
        }
    )+};
}
impl_reversed_collision!(Point3 => AABBox, BSphere, OBBox);
impl_reversed_collision!(Plane => AABBox, BSphere, OBBox);
impl_reversed_collision!(Line3 => AABBox, BSphere, OBBox);

#[cfg(test)]
mod tests {
    use super::{is_colliding, Collides};
    use crate::{
        collisioncore::{aabbox::AABBox, bsphere::BSphere, obbox::OBBox},
        mathcore::{
            lines::Line3,
            matrices::{Matrix3, Matrix4},
            planes::Plane,
            points::Point3,
            vectors::Vector3,
            Angle,
        },
    };

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn cube(center: Point3, half: f32) -> AABBox {
        let offset: Vector3 = Vector3::new(half, half, half);
        AABBox::new(center - offset, center + offset)
    }

    fn rotated_cube(center: Vector3, degrees: f32) -> OBBox {
        OBBox::with_transform(
            Point3::new(-1.0, -1.0, -1.0),
            Point3::new(1.0, 1.0, 1.0),
            Matrix4::trs(
                center,
                Matrix3::rotation(Angle::ZERO, Angle::from_degrees(degrees / 2.0), Angle::from_degrees(degrees)),
                Vector3::one(),
            ),
        )
    }

    fn aabboxes() -> Vec<AABBox> {
        vec![
            cube(Point3::origin(), 1.0),
            cube(Point3::new(1.4, 0.0, 0.0), 0.5),
            cube(Point3::new(5.0, 5.0, 5.0), 1.0),
            AABBox::new(Point3::new(2.5, -1.0, -3.0), Point3::new(9.5, 1.0, 3.0)),
        ]
    }

    fn bspheres() -> Vec<BSphere> {
        vec![
            BSphere::new(Point3::origin(), 0.5),
            BSphere::new(Point3::new(1.9, 0.0, 0.0), 0.5),
            BSphere::new(Point3::new(0.0, 3.0, 0.0), 1.0),
            BSphere::with_transform(
                Point3::origin(),
                1.0,
                Matrix4::trs(Vector3::new(4.0, 4.0, 4.0), Matrix3::identity(), Vector3::new(2.0, 2.0, 2.0)),
            ),
        ]
    }

    fn obboxes() -> Vec<OBBox> {
        vec![
            rotated_cube(Vector3::zero(), 0.0),
            rotated_cube(Vector3::new(1.5, 0.0, 0.0), 45.0),
            rotated_cube(Vector3::new(3.3, 0.5, 0.0), 30.0),
            rotated_cube(Vector3::new(5.0, 5.0, 6.0), 60.0),
        ]
    }

    fn primitives() -> (Vec<Point3>, Vec<Plane>, Vec<Line3>) {
        (
            vec![
                Point3::origin(),
                Point3::new(1.9, 0.1, 0.0),
                Point3::new(4.0, 4.0, 4.5),
            ],
            vec![
                Plane::new(Point3::new(0.0, 1.0, 0.0), Vector3::new(0.0, 2.0, 0.0)),
                Plane::new(Point3::new(2.0, 0.0, 0.0), Vector3::new(1.0, 1.0, 0.0)),
            ],
            vec![
                Line3::from_points(Point3::new(-5.0, 0.5, 0.0), Point3::new(5.0, 0.5, 0.0)),
                Line3::from_points(Point3::new(3.0, 3.0, 3.0), Point3::new(6.0, 6.0, 6.0)),
            ],
        )
    }

    #[test]
    fn volume_pairs_are_symmetric() {
        init_logger();
        let (aabboxes, bspheres, obboxes): (Vec<AABBox>, Vec<BSphere>, Vec<OBBox>) =
            (aabboxes(), bspheres(), obboxes());

        for a in &aabboxes {
            for b in &aabboxes {
                assert_eq!(a.collides(b), b.collides(a));
            }
            for b in &bspheres {
                assert_eq!(a.collides(b), b.collides(a));
            }
            for b in &obboxes {
                assert_eq!(a.collides(b), b.collides(a));
            }
        }
        for a in &bspheres {
            for b in &bspheres {
                assert_eq!(a.collides(b), b.collides(a));
            }
            for b in &obboxes {
                assert_eq!(a.collides(b), b.collides(a));
            }
        }
        for a in &obboxes {
            for b in &obboxes {
                assert_eq!(a.collides(b), b.collides(a));
            }
        }
    }

    #[test]
    fn primitives_are_symmetric() {
        let (points, planes, lines): (Vec<Point3>, Vec<Plane>, Vec<Line3>) = primitives();
        for aabbox in aabboxes() {
            for point in &points {
                assert_eq!(aabbox.collides(point), point.collides(&aabbox));
            }
            for plane in &planes {
                assert_eq!(aabbox.collides(plane), plane.collides(&aabbox));
            }
            for line in &lines {
                assert_eq!(aabbox.collides(line), line.collides(&aabbox));
            }
        }
        for bsphere in bspheres() {
            for point in &points {
                assert_eq!(bsphere.collides(point), is_colliding(point, &bsphere));
            }
            for plane in &planes {
                assert_eq!(bsphere.collides(plane), is_colliding(plane, &bsphere));
            }
            for line in &lines {
                assert_eq!(bsphere.collides(line), is_colliding(line, &bsphere));
            }
        }
        for obbox in obboxes() {
            for point in &points {
                assert_eq!(obbox.collides(point), point.collides(&obbox));
            }
            for plane in &planes {
                assert_eq!(obbox.collides(plane), plane.collides(&obbox));
            }
            for line in &lines {
                assert_eq!(obbox.collides(line), line.collides(&obbox));
            }
        }
    }

    #[test]
    fn mixed_fixtures() {
        init_logger();
        let (aabboxes, bspheres, obboxes): (Vec<AABBox>, Vec<BSphere>, Vec<OBBox>) =
            (aabboxes(), bspheres(), obboxes());

        assert!(is_colliding(&aabboxes[0], &aabboxes[1]));
        assert!(!is_colliding(&aabboxes[0], &aabboxes[2]));
        assert!(is_colliding(&aabboxes[0], &bspheres[0]));
        assert!(!is_colliding(&aabboxes[0], &bspheres[2]));
        assert!(is_colliding(&aabboxes[2], &bspheres[3]));
        assert!(is_colliding(&aabboxes[0], &obboxes[1]));
        assert!(!is_colliding(&aabboxes[2], &obboxes[1]));
        assert!(is_colliding(&bspheres[1], &obboxes[1]));
        assert!(!is_colliding(&bspheres[2], &obboxes[0]));
        assert!(is_colliding(&obboxes[0], &obboxes[1]));
        assert!(!is_colliding(&obboxes[0], &obboxes[3]));
    }
}
