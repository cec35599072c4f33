//! Plane representation and line/plane intersection.

use nalgebra::{Point3, Vector3};

/// Outcome of intersecting an infinite line with a plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinePlane {
    /// The line direction is exactly orthogonal to the plane normal.
    Parallel,
    /// The line crosses the plane at `point = start + t * (end - start)`.
    ///
    /// `t` is not restricted to `[0, 1]`.
    Crossing { t: f64, point: Point3<f64> },
}

/// A plane in 3D space, represented as `normal · point = offset`.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane3D {
    normal: Vector3<f64>,
    offset: f64,
}

impl Plane3D {
    /// Creates a plane from a point on the plane and a normal vector.
    /// The normal will be normalized automatically.
    ///
    /// Returns `None` if the normal vector has zero length.
    pub fn from_point_and_normal(point: Point3<f64>, normal: Vector3<f64>) -> Option<Self> {
        let norm = normal.norm();
        if norm == 0.0 {
            return None;
        }
        let unit_normal = normal / norm;
        let offset = unit_normal.dot(&point.coords);
        Some(Self {
            normal: unit_normal,
            offset,
        })
    }

    /// Returns the unit normal vector of the plane.
    #[inline]
    pub fn normal(&self) -> Vector3<f64> {
        self.normal
    }

    /// Computes the signed distance from a point to the plane.
    /// - Positive: point is in front (same side as normal)
    /// - Negative: point is behind (opposite side from normal)
    #[inline]
    pub fn signed_distance(&self, point: Point3<f64>) -> f64 {
        self.normal.dot(&point.coords) - self.offset
    }

    /// Projects a point onto the plane (finds the closest point on the plane).
    #[inline]
    pub fn project_point(&self, point: Point3<f64>) -> Point3<f64> {
        point - self.normal * self.signed_distance(point)
    }

    /// Intersects the infinite line through `start` and `end` with the plane.
    ///
    /// The line counts as parallel only when `normal · (end - start)` is
    /// exactly zero. Nearly parallel lines produce far-away crossings.
    pub fn intersect_line(&self, start: Point3<f64>, end: Point3<f64>) -> LinePlane {
        let direction = end - start;
        let denom = self.normal.dot(&direction);

        if denom == 0.0 {
            return LinePlane::Parallel;
        }

        let t = (self.offset - self.normal.dot(&start.coords)) / denom;
        LinePlane::Crossing {
            t,
            point: start + direction * t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn xy_plane() -> Plane3D {
        Plane3D::from_point_and_normal(Point3::origin(), Vector3::new(0.0, 0.0, 2.0)).unwrap()
    }

    #[test]
    fn normal_is_normalized() {
        let plane = Plane3D::from_point_and_normal(
            Point3::new(0.0, 0.0, 3.0),
            Vector3::new(0.0, 0.0, 5.0),
        )
        .unwrap();
        assert_relative_eq!(plane.normal(), Vector3::new(0.0, 0.0, 1.0));
        assert_relative_eq!(plane.signed_distance(Point3::origin()), -3.0);
    }

    #[test]
    fn zero_normal_is_rejected() {
        assert!(Plane3D::from_point_and_normal(Point3::origin(), Vector3::zeros()).is_none());
        let p = Point3::new(1.0, 1.0, 1.0);
    }

    #[test]
    fn signed_distance_and_projection() {
        let plane = xy_plane();
        let p = Point3::new(1.0, 2.0, -3.0);
        assert_relative_eq!(plane.signed_distance(p), -3.0);
        assert_relative_eq!(plane.project_point(p), Point3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn crossing_inside_segment() {
        let hit = xy_plane().intersect_line(Point3::new(1.0, 1.0, -1.0), Point3::new(1.0, 1.0, 3.0));
        match hit {
            LinePlane::Crossing { t, point } => {
                assert_relative_eq!(t, 0.25);
                assert_relative_eq!(point, Point3::new(1.0, 1.0, 0.0));
            }
            LinePlane::Parallel => panic!("expected a crossing"),
        }
    }

    #[test]
    fn crossing_beyond_segment_is_still_reported() {
        let hit = xy_plane().intersect_line(Point3::new(0.0, 0.0, 1.0), Point3::new(0.0, 0.0, 2.0));
        match hit {
            LinePlane::Crossing { t, point } => {
                assert_relative_eq!(t, -1.0);
                assert_relative_eq!(point, Point3::origin());
            }
            LinePlane::Parallel => panic!("expected a crossing"),
        }
    }

    #[test]
    fn parallel_line() {
        let hit = xy_plane().intersect_line(Point3::new(0.0, 0.0, 1.0), Point3::new(5.0, 2.0, 1.0));
        assert_eq!(hit, LinePlane::Parallel);
    }
}
