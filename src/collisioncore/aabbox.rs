//! `collisioncore::aabbox` submodule implements axis-aligned bounding boxes.
//!

use crate::{
    collisioncore::{bsphere::BSphere, collisions::Collides, obbox::OBBox},
    mathcore::{lines::Line3, planes::Plane, points::Point3, vectors::Vector3},
};
use serde::{Deserialize, Serialize};

/// [`AABBox`] struct represents box whose faces are parallel to coordinate planes.
///
/// Box is stored in world space by its minimal and maximal corners; boundary counts
/// as a part of the box.
///
/// # Example
/// ```rust
/// # use ggcollide::collisioncore::{aabbox::AABBox, collisions::Collides};
/// # use ggcollide::mathcore::{points::Point3, vectors::Vector3};
/// let aabbox: AABBox = AABBox::new(Point3::new(1.0, 1.0, 1.0), Point3::new(-1.0, -1.0, -1.0));
/// assert_eq!(aabbox.min(), Point3::new(-1.0, -1.0, -1.0));
/// assert_eq!(aabbox.half_extents(), Vector3::new(1.0, 1.0, 1.0));
/// assert!(aabbox.collides(&Point3::new(1.0, 0.0, 0.0)));
/// assert!(!aabbox.collides(&Point3::new(1.5, 0.0, 0.0)));
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct AABBox {
    /// Corner with the smallest coordinates.
    ///
    min: Point3,
    /// Corner with the largest coordinates.
    ///
    max: Point3,
}
impl AABBox {
    /// Initializes box from two opposite corners (they are reordered component-wise).
    ///
    pub fn new(a: Point3, b: Point3) -> Self {
        AABBox {
            min: a.min(b),
            max: a.max(b),
        }
    }
    /// Initializes the smallest box that contains all given points.
    ///
    /// Returns `None` if slice is empty.
    ///
    pub fn from_points(points: &[Point3]) -> Option<Self> {
        let (first, rest): (&Point3, &[Point3]) = points.split_first()?;
        Some(
            rest.iter()
                .fold(AABBox::new(*first, *first), |aabbox, &point| {
                    aabbox.expanded_to(point)
                }),
        )
    }
    /// Initializes box from its center and half extents.
    ///
    pub fn from_center_half_extents(center: Point3, half_extents: Vector3) -> Self {
        AABBox::new(center - half_extents, center + half_extents)
    }

    /// Returns corner with the smallest coordinates.
    ///
    pub fn min(&self) -> Point3 {
        self.min
    }
    /// Returns corner with the largest coordinates.
    ///
    pub fn max(&self) -> Point3 {
        self.max
    }
    /// Returns center of box.
    ///
    pub fn center(&self) -> Point3 {
        self.min.midpoint(self.max)
    }
    /// Returns distances from center to faces.
    ///
    pub fn half_extents(&self) -> Vector3 {
        self.size() * 0.5
    }
    /// Returns lengths of box edges.
    ///
    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }
    /// Returns all eight corners of box.
    ///
    /// Bit `0` of corner index selects `x`, bit `1` selects `y` and bit `2` selects `z`
    /// (set bit means maximal coordinate).
    ///
    pub fn corners(&self) -> [Point3; 8] {
        let (min, max): ([f32; 3], [f32; 3]) = (self.min.elements(), self.max.elements());
        let mut corners: [Point3; 8] = [Point3::origin(); 8];
        for (index, corner) in corners.iter_mut().enumerate() {
            let mut elements: [f32; 3] = min;
            for (axis, element) in elements.iter_mut().enumerate() {
                if index & (1 << axis) != 0 {
                    *element = max[axis];
                }
            }
            *corner = Point3::from(elements);
        }
        corners
    }

    /// Returns whether point lies inside of box or on its boundary.
    ///
    pub fn contains(&self, point: Point3) -> bool {
        let (min, max, point): ([f32; 3], [f32; 3], [f32; 3]) =
            (self.min.elements(), self.max.elements(), point.elements());
        (0..3).all(|axis| min[axis] <= point[axis] && point[axis] <= max[axis])
    }
    /// Returns point of box that is the closest to given point.
    ///
    pub fn closest_point(&self, point: Point3) -> Point3 {
        point.max(self.min).min(self.max)
    }
    /// Returns the smallest box that contains both this box and given point.
    ///
    pub fn expanded_to(&self, point: Point3) -> Self {
        AABBox {
            min: self.min.min(point),
            max: self.max.max(point),
        }
    }
    /// Returns the smallest box that contains both boxes.
    ///
    pub fn union(&self, other: &AABBox) -> Self {
        AABBox {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

/// Returns whether segment `p + v * s` (`s` in [0; 1]) touches box `[min; max]`.
///
/// Segment is clipped against three slabs; axis along which segment does not move
/// only checks that segment lies between slab planes.
///
pub(crate) fn segment_slab(min: Point3, max: Point3, p: Point3, v: Vector3) -> bool {
    let (min, max, p, v): ([f32; 3], [f32; 3], [f32; 3], [f32; 3]) =
        (min.elements(), max.elements(), p.elements(), v.elements());
    let (mut enter, mut exit): (f32, f32) = (0.0, 1.0);
    for axis in 0..3 {
        if v[axis] == 0.0 {
            if p[axis] < min[axis] || p[axis] > max[axis] {
                return false;
            }
            continue;
        }
        let (mut near, mut far): (f32, f32) = (
            (min[axis] - p[axis]) / v[axis],
            (max[axis] - p[axis]) / v[axis],
        );
        if near > far {
            (near, far) = (far, near);
        }
        (enter, exit) = (enter.max(near), exit.min(far));
        if enter > exit {
            return false;
        }
    }
    true
}

impl Collides<AABBox> for AABBox {
    fn collides(&self, other: &AABBox) -> bool {
        let (min1, max1): ([f32; 3], [f32; 3]) = (self.min.elements(), self.max.elements());
        let (min2, max2): ([f32; 3], [f32; 3]) = (other.min.elements(), other.max.elements());
        (0..3).all(|axis| min1[axis] <= max2[axis] && min2[axis] <= max1[axis])
    }
}
impl Collides<Point3> for AABBox {
    fn collides(&self, other: &Point3) -> bool {
        self.contains(*other)
    }
}
impl Collides<BSphere> for AABBox {
    fn collides(&self, other: &BSphere) -> bool {
        other.collides(self)
    }
}
impl Collides<OBBox> for AABBox {
    fn collides(&self, other: &OBBox) -> bool {
        OBBox::from_aabbox(self).collides(other)
    }
}
impl Collides<Plane> for AABBox {
    fn collides(&self, other: &Plane) -> bool {
        let distance: f32 = other.signed_distance(self.center());
        let reach: f32 = self
            .half_extents()
            .dot(other.normal.map(f32::abs))
            / other.normal.length();
        distance.abs() <= reach
    }
}
impl Collides<Line3> for AABBox {
    /// Line is treated as a segment between its two points.
    ///
    fn collides(&self, other: &Line3) -> bool {
        segment_slab(self.min, self.max, other.p, other.v)
    }
}

#[cfg(test)]
mod tests {
    use super::AABBox;
    use crate::{
        collisioncore::collisions::Collides,
        mathcore::{lines::Line3, planes::Plane, points::Point3, vectors::Vector3},
    };

    fn unit_cube() -> AABBox {
        AABBox::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn construction() {
        let aabbox: AABBox = AABBox::new(Point3::new(3.0, -1.0, 6.5), Point3::new(-3.0, 1.0, 1.5));
        assert_eq!(aabbox.min(), Point3::new(-3.0, -1.0, 1.5));
        assert_eq!(aabbox.max(), Point3::new(3.0, 1.0, 6.5));
        assert_eq!(aabbox.center(), Point3::new(0.0, 0.0, 4.0));
        assert_eq!(aabbox.size(), Vector3::new(6.0, 2.0, 5.0));
        assert_eq!(aabbox.half_extents(), Vector3::new(3.0, 1.0, 2.5));

        let corners: [Point3; 8] = aabbox.corners();
        assert_eq!(corners[0], aabbox.min());
        assert_eq!(corners[7], aabbox.max());
        assert_eq!(corners[1], Point3::new(3.0, -1.0, 1.5));
        assert_eq!(corners[6], Point3::new(-3.0, 1.0, 6.5));
        assert!(corners.iter().all(|&corner| aabbox.contains(corner)));

        assert_eq!(
            AABBox::from_points(&[
                Point3::new(1.0, 5.0, -2.0),
                Point3::new(-4.0, 0.0, 3.0),
                Point3::new(2.0, 1.0, 0.0),
            ]),
            Some(AABBox::new(Point3::new(-4.0, 0.0, -2.0), Point3::new(2.0, 5.0, 3.0)))
        );
        assert_eq!(AABBox::from_points(&[]), None);
        assert_eq!(
            AABBox::from_center_half_extents(Point3::origin(), Vector3::one()),
            unit_cube()
        );
    }

    #[test]
    fn closest_point_and_union() {
        let aabbox: AABBox = unit_cube();
        assert_eq!(
            aabbox.closest_point(Point3::new(5.0, 0.5, -3.0)),
            Point3::new(1.0, 0.5, -1.0)
        );
        assert_eq!(
            aabbox.closest_point(Point3::new(0.2, 0.3, 0.4)),
            Point3::new(0.2, 0.3, 0.4)
        );
        assert_eq!(
            aabbox.union(&AABBox::new(Point3::new(2.0, 2.0, 2.0), Point3::new(3.0, 3.0, 3.0))),
            AABBox::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(3.0, 3.0, 3.0))
        );
    }

    #[test]
    fn aabbox_collisions() {
        let a: AABBox = AABBox::new(Point3::new(-3.0, -1.0, 1.5), Point3::new(3.0, 1.0, 6.5));
        let b: AABBox = AABBox::new(Point3::new(2.5, -1.0, -3.0), Point3::new(9.5, 1.0, 3.0));
        assert!(a.collides(&b));
        assert!(b.collides(&a));

        let c: AABBox = AABBox::new(Point3::new(-1.0, -1.0, 4.0), Point3::new(1.0, 1.0, 8.0));
        let d: AABBox = AABBox::new(Point3::new(-5.5, -1.0, 1.5), Point3::new(-2.5, 1.0, 2.5));
        assert!(!c.collides(&d));
        assert!(!d.collides(&c));

        let touching: AABBox = AABBox::new(Point3::new(1.0, -1.0, -1.0), Point3::new(2.0, 1.0, 1.0));
        assert!(unit_cube().collides(&touching));
    }

    #[test]
    fn point_collisions() {
        let aabbox: AABBox = unit_cube();
        assert!(aabbox.collides(&Point3::origin()));
        assert!(aabbox.collides(&Point3::new(1.0, 1.0, 1.0)));
        assert!(!aabbox.collides(&Point3::new(1.0, 1.0, 1.01)));
        assert!(Point3::new(0.5, -0.5, 0.0).collides(&aabbox));
    }

    #[test]
    fn plane_collisions() {
        let aabbox: AABBox = unit_cube();
        assert!(aabbox.collides(&Plane::new(Point3::new(0.0, 0.5, 0.0), Vector3::new(0.0, 2.0, 0.0))));
        assert!(aabbox.collides(&Plane::new(Point3::new(0.0, 1.0, 0.0), Vector3::new(0.0, 2.0, 0.0))));
        assert!(!aabbox.collides(&Plane::new(Point3::new(0.0, 1.5, 0.0), Vector3::new(0.0, 2.0, 0.0))));

        let diagonal: Plane = Plane::new(Point3::new(2.9, 0.0, 0.0), Vector3::new(1.0, 1.0, 1.0));
        assert!(aabbox.collides(&diagonal));
        let far: Plane = Plane::new(Point3::new(3.1, 0.0, 0.0), Vector3::new(1.0, 1.0, 1.0));
        assert!(!aabbox.collides(&far));
        assert!(!far.collides(&aabbox));
    }

    #[test]
    fn segment_collisions() {
        let aabbox: AABBox = unit_cube();
        let through: Line3 = Line3::from_points(Point3::new(-5.0, 0.0, 0.0), Point3::new(5.0, 0.0, 0.0));
        let away: Line3 = Line3::from_points(Point3::new(2.0, 2.0, 2.0), Point3::new(5.0, 5.0, 5.0));
        let short: Line3 = Line3::from_points(Point3::new(-5.0, 0.5, 0.0), Point3::new(-2.0, 0.5, 0.0));
        let into: Line3 = Line3::from_points(Point3::new(-5.0, 0.0, 0.0), Point3::origin());
        let beside: Line3 = Line3::from_points(Point3::new(-5.0, 2.0, 0.0), Point3::new(5.0, 2.0, 0.0));

        assert!(aabbox.collides(&through));
        assert!(!aabbox.collides(&away));
        assert!(!aabbox.collides(&short));
        assert!(aabbox.collides(&into));
        assert!(!aabbox.collides(&beside));
        assert!(into.collides(&aabbox));
    }
}
