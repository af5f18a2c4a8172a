//! `mathcore::planes` submodule implements infinite planes in three-dimensional space.
//!

use crate::mathcore::{
    floats::{equal_within, FloatOperations, Tolerance},
    lines::Line3,
    points::Point3,
    vectors::Vector3,
    Sign,
};
use serde::{Deserialize, Serialize};

/// [`Plane`] struct represents infinite plane defined by a point on it and its normal.
///
/// Normal is not required to be of unit length: functions that return distances divide by
/// its length, while side tests (`above`, `same_side`) only rely on sign.
///
/// # Example
/// ```rust
/// # use ggcollide::mathcore::{planes::Plane, points::Point3, vectors::Vector3};
/// let plane: Plane = Plane::from_points(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// );
/// assert_eq!(plane.normal, Vector3::new(0.0, 0.0, 1.0));
/// assert_eq!(plane.distance_to(Point3::new(3.0, 3.0, -2.0)), 2.0);
/// assert!(!plane.above(Point3::new(3.0, 3.0, -2.0)));
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Plane {
    /// Point that lies on plane.
    ///
    pub point: Point3,
    /// Normal of plane (not necessarily normalized).
    ///
    pub normal: Vector3,
}
impl Plane {
    /// Initializes plane from point and normal (normal is stored as given).
    ///
    pub const fn new(point: Point3, normal: Vector3) -> Self {
        Plane { point, normal }
    }
    /// Initializes plane that goes through three points.
    ///
    /// Normal is `(b - a) × (c - a)` and is not normalized.
    ///
    pub fn from_points(a: Point3, b: Point3, c: Point3) -> Self {
        Plane::new(a, (b - a).cross(c - a))
    }
    /// Returns copy of plane with unit normal.
    ///
    pub fn normalized(&self) -> Self {
        Plane::new(self.point, self.normal.normalized())
    }

    /// Classifies point relative to line that lies in this plane.
    ///
    /// Result is `(bisect.direction × normal) · point`: its sign tells on which side of the line
    /// point is, and zero means that point is on the line.
    ///
    pub fn direction_test(&self, bisect: &Line3, point: Point3) -> f32 {
        bisect.v.cross(self.normal).dot(point.to_vector())
    }
    /// Returns sign of [`Plane::direction_test`] (exact zero is `Sign::Zero`, which is not positive).
    ///
    pub fn direction_sign(&self, bisect: &Line3, point: Point3) -> Sign {
        Sign::from(self.direction_test(bisect, point))
    }

    /// Returns unnormalized dot product of `point - plane.point` and normal.
    ///
    fn side_value(&self, point: Point3) -> f32 {
        (point - self.point).dot(self.normal)
    }
    /// Returns signed distance from plane to point (positive on the side normal points to).
    ///
    pub fn signed_distance(&self, point: Point3) -> f32 {
        self.side_value(point) / self.normal.length()
    }
    /// Returns distance from plane to point.
    ///
    pub fn distance_to(&self, point: Point3) -> f32 {
        self.signed_distance(point).abs()
    }
    /// Returns whether point lies strictly on the side normal points to.
    ///
    pub fn above(&self, point: Point3) -> bool {
        self.side_value(point) > 0.0
    }
    /// Returns whether both points lie strictly on the same side of plane.
    ///
    /// This is a fast test which does not normalize anything.
    ///
    pub fn same_side(&self, p1: Point3, p2: Point3) -> bool {
        (Sign::from(self.side_value(p1)) * Sign::from(self.side_value(p2))).is_positive()
    }
    /// Returns whether point lies on plane.
    ///
    pub fn contains(&self, point: Point3) -> bool {
        equal_within(self.signed_distance(point), 0.0, Tolerance::GEOMETRIC)
    }
    /// Returns orthogonal projection of point onto plane.
    ///
    pub fn project(&self, point: Point3) -> Point3 {
        point - self.normal * (self.side_value(point) / self.normal.length_squared())
    }
    /// Returns whether planes are parallel (or coincide).
    ///
    pub fn is_parallel_to(&self, other: &Plane) -> bool {
        self.normal
            .normalized()
            .is_parallel_to(other.normal.normalized())
    }
}
impl FloatOperations for Plane {
    fn correct_to(self, digits: i32) -> Self {
        Plane::new(self.point.correct_to(digits), self.normal.correct_to(digits))
    }
    fn round_up_to(self, digits: i32) -> Self {
        Plane::new(
            self.point.round_up_to(digits),
            self.normal.round_up_to(digits),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Plane;
    use crate::mathcore::{lines::Line3, points::Point3, vectors::Vector3, Sign};
    use approx::assert_abs_diff_eq;

    #[test]
    fn construction() {
        let plane: Plane = Plane::from_points(
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
            Point3::new(0.0, 0.0, 3.0),
        );
        assert_abs_diff_eq!(plane.normal, Vector3::new(6.0, 3.0, 2.0));
        assert_abs_diff_eq!(plane.normalized().normal.length(), 1.0);
        assert!(plane.contains(Point3::new(0.0, 2.0, 0.0)));
        assert!(plane.contains(Point3::new(0.5, 1.0, 0.0)));
        assert!(!plane.contains(Point3::origin()));
    }

    #[test]
    fn distances_and_sides() {
        let plane: Plane = Plane::new(Point3::new(0.0, 1.0, 0.0), Vector3::new(0.0, 4.0, 0.0));
        assert_eq!(plane.signed_distance(Point3::new(5.0, 3.0, 1.0)), 2.0);
        assert_eq!(plane.signed_distance(Point3::new(5.0, -1.0, 1.0)), -2.0);
        assert_eq!(plane.distance_to(Point3::new(5.0, -1.0, 1.0)), 2.0);

        assert!(plane.above(Point3::new(0.0, 1.5, 0.0)));
        assert!(!plane.above(Point3::new(0.0, 1.0, 0.0)));
        assert!(plane.same_side(Point3::new(0.0, 2.0, 0.0), Point3::new(9.0, 7.0, -3.0)));
        assert!(!plane.same_side(Point3::new(0.0, 2.0, 0.0), Point3::new(9.0, -7.0, -3.0)));
        assert!(!plane.same_side(Point3::new(0.0, 1.0, 0.0), Point3::new(9.0, 7.0, -3.0)));
    }

    #[test]
    fn projection() {
        let plane: Plane = Plane::new(Point3::new(0.0, 0.0, 2.0), Vector3::new(0.0, 0.0, -3.0));
        assert_abs_diff_eq!(
            plane.project(Point3::new(1.0, -4.0, 9.0)),
            Point3::new(1.0, -4.0, 2.0)
        );
        assert!(plane.is_parallel_to(&Plane::new(Point3::origin(), Vector3::new(0.0, 0.0, 1.0))));
        assert!(!plane.is_parallel_to(&Plane::new(Point3::origin(), Vector3::new(0.0, 1.0, 1.0))));
    }

    #[test]
    fn direction_test() {
        let plane: Plane = Plane::new(Point3::origin(), Vector3::unit_z());
        let bisect: Line3 = Line3::from_points(Point3::origin(), Point3::new(0.0, 1.0, 0.0));
        assert_eq!(plane.direction_test(&bisect, Point3::new(2.0, 5.0, 0.0)), 2.0);
        assert_eq!(
            plane.direction_sign(&bisect, Point3::new(-2.0, 5.0, 0.0)),
            Sign::Negative
        );
        assert_eq!(
            plane.direction_sign(&bisect, Point3::new(0.0, 5.0, 0.0)),
            Sign::Zero
        );
        assert!(!plane.direction_sign(&bisect, Point3::new(0.0, 5.0, 0.0)).is_positive());
    }
}
