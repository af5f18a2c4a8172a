//! `mathcore::lines` submodule implements parametric lines in three-dimensional space and their
//! homogeneous four-dimensional form.
//!
//! Line is stored as anchor `p`, second point `t` and direction `v = t - p`. Whether it is
//! treated as infinite line, segment `[p; t]` or ray from `p` depends on the query:
//! `nearest_approach` works with infinite line, `nearest_approach_segment` clamps parameter to
//! [0; 1] and `nearest_approach_ray` clamps it to [0; +inf).
//!

use crate::mathcore::{
    floats::{equal_within, Tolerance, EPSILON},
    planes::Plane,
    points::{Point3, Point4},
    vectors::{Vector3, Vector4},
};
use serde::{Deserialize, Serialize};

/// [`impl_line`] macro implements parametric queries that are shared by three- and
/// four-dimensional lines.
///
macro_rules! impl_line {
    ($struct:ident, $point:ident, $vector:ident) => {
        impl $struct {
            /// Initializes line that goes through two points (`v = t - p`).
            ///
            pub fn from_points(p: $point, t: $point) -> Self {
                $struct { p, t, v: t - p }
            }
            /// Initializes line from anchor and direction (`t = p + v`).
            ///
            pub fn from_direction(p: $point, v: $vector) -> Self {
                $struct { p, t: p + v, v }
            }

            /// Returns point at parameter `s` (`p + v * s`).
            ///
            pub fn point_at(&self, s: f32) -> $point {
                self.p + self.v * s
            }
            /// Returns length of direction vector (length of segment).
            ///
            pub fn length(&self) -> f32 {
                self.v.length()
            }

            /// Returns parameter of orthogonal projection of point onto line.
            ///
            fn projection_parameter(&self, point: $point) -> f32 {
                self.v.dot(point - self.p) / self.v.dot(self.v)
            }
            /// Returns point on infinite line that is closest to given point.
            ///
            pub fn nearest_approach(&self, point: $point) -> $point {
                self.point_at(self.projection_parameter(point))
            }
            /// Returns point on segment `[p; t]` that is closest to given point.
            ///
            pub fn nearest_approach_segment(&self, point: $point) -> $point {
                let s: f32 = self.projection_parameter(point);
                if s <= 0.0 {
                    self.p
                } else if s >= 1.0 {
                    self.p + self.v
                } else {
                    self.point_at(s)
                }
            }
            /// Returns point on ray that starts at `p` and goes along `v` that is closest to
            /// given point.
            ///
            pub fn nearest_approach_ray(&self, point: $point) -> $point {
                self.point_at(self.projection_parameter(point).max(0.0))
            }
            /// Returns distance from infinite line to point.
            ///
            pub fn distance_to_point(&self, point: $point) -> f32 {
                point.distance_to(self.nearest_approach(point))
            }

            /// Returns whether lines are parallel (their closest approach system is degenerate).
            ///
            pub fn is_parallel_to(&self, other: &Self) -> bool {
                let (a, b, c): (f32, f32, f32) = (
                    self.v.dot(self.v),
                    self.v.dot(other.v),
                    other.v.dot(other.v),
                );
                (b * b - a * c).abs() <= EPSILON * a * c
            }
            /// Returns minimal distance between two infinite lines.
            ///
            /// Closest approach is found from `Δ = b² - ac` (`a = v·v`, `b = v·w`, `c = w·w`).
            /// Parallel lines have no unique closest pair, so perpendicular distance from
            /// other line's anchor is returned for them.
            ///
            pub fn distance_to(&self, other: &Self) -> f32 {
                let w0: $vector = self.p - other.p;
                let (a, b, c): (f32, f32, f32) = (
                    self.v.dot(self.v),
                    self.v.dot(other.v),
                    other.v.dot(other.v),
                );
                let (d, e): (f32, f32) = (self.v.dot(w0), other.v.dot(w0));
                let delta: f32 = b * b - a * c;
                if delta.abs() <= EPSILON * a * c {
                    return (other.p - self.p).rejected_from(self.v).length();
                }
                let s: f32 = (c * d - b * e) / delta;
                let t: f32 = (b * d - a * e) / delta;
                (w0 + self.v * s - other.v * t).length()
            }
        }
    };
}

/// [`Line3`] struct represents line in three-dimensional space.
///
/// # Example
/// ```rust
/// # use ggcollide::mathcore::{lines::Line3, planes::Plane, points::Point3, vectors::Vector3};
/// let plane: Plane = Plane::new(Point3::origin(), Vector3::unit_z());
/// let crossing: Line3 = Line3::from_points(Point3::new(0.0, 0.0, -1.0), Point3::new(0.0, 0.0, 3.0));
/// assert!(crossing.intersects(&plane));
/// assert_eq!(crossing.intersects_depth(&plane), 0.25);
/// assert_eq!(crossing.intersects_at(&plane), Point3::origin());
///
/// let touching: Line3 = Line3::from_points(Point3::origin(), Point3::new(0.0, 0.0, 1.0));
/// assert!(!touching.intersects(&plane));
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Line3 {
    /// Anchor point.
    ///
    pub p: Point3,
    /// Second point (`p + v`).
    ///
    pub t: Point3,
    /// Direction.
    ///
    pub v: Vector3,
}
impl_line!(Line3, Point3, Vector3);
impl Line3 {
    /// Returns whether line is parallel to plane (direction is perpendicular to normal).
    ///
    pub fn parallel_to_plane(&self, plane: &Plane) -> bool {
        equal_within(
            self.v.normalized().dot(plane.normal.normalized()),
            0.0,
            Tolerance::GEOMETRIC,
        )
    }
    /// Returns whether anchor point of line lies in plane.
    ///
    /// Direction is not checked: combine with [`Line3::parallel_to_plane`] to know whether
    /// the whole line lies in plane.
    ///
    pub fn within_plane(&self, plane: &Plane) -> bool {
        plane.contains(self.p)
    }
    /// Returns whether segment `[p; t]` crosses plane.
    ///
    /// Endpoints have to lie strictly on opposite sides, so segment that touches plane with
    /// one of its endpoints (or lies in it) does not intersect it.
    ///
    pub fn intersects(&self, plane: &Plane) -> bool {
        let (a, b): (f32, f32) = (
            (self.p - plane.point).dot(plane.normal),
            (self.t - plane.point).dot(plane.normal),
        );
        (a < 0.0 && b > 0.0) || (a > 0.0 && b < 0.0)
    }
    /// Returns parameter at which line meets plane.
    ///
    /// Line that is parallel to plane has no such parameter: result is infinite or `NaN`.
    ///
    pub fn intersects_depth(&self, plane: &Plane) -> f32 {
        (plane.point - self.p).dot(plane.normal) / (self.t - self.p).dot(plane.normal)
    }
    /// Returns point at which line meets plane.
    ///
    pub fn intersects_at(&self, plane: &Plane) -> Point3 {
        self.point_at(self.intersects_depth(plane))
    }
}
impl From<Line4> for Line3 {
    fn from(line: Line4) -> Self {
        line.xyz()
    }
}

/// [`Line4`] struct represents line in homogeneous coordinates.
///
/// Closest point queries work on all four components; plane queries are available through
/// [`Line4::xyz`].
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Line4 {
    /// Anchor point.
    ///
    pub p: Point4,
    /// Second point (`p + v`).
    ///
    pub t: Point4,
    /// Direction.
    ///
    pub v: Vector4,
}
impl_line!(Line4, Point4, Vector4);
impl Line4 {
    /// Returns three-dimensional line that goes through homogenized anchor and second point.
    ///
    pub fn xyz(&self) -> Line3 {
        Line3::from_points(self.p.homogenized(), self.t.homogenized())
    }
}
impl From<Line3> for Line4 {
    fn from(line: Line3) -> Self {
        Line4::from_points(Point4::from(line.p), Point4::from(line.t))
    }
}
