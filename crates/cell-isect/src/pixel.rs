//! Pixel cells: axis-aligned rectangles.

use log::trace;
use nalgebra::{Point3, Vector3, distance_squared};

use crate::edge::nearest_edge_crossing;
use crate::plane::LinePlane;
use crate::topology::PIXEL_EDGES;
use crate::{Evaluation, Hit, KernelConfig, Plane3D, Segment};

/// An axis-aligned rectangle.
///
/// Corners are ordered x fastest, then y (or the two in-plane axes in
/// order), so corner 3 is diagonally opposite corner 0:
/// - `vertices[0]`: min corner
/// - `vertices[1]`: min + first edge
/// - `vertices[2]`: min + second edge
/// - `vertices[3]`: max corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pixel {
    vertices: [Point3<f64>; 4],
}

impl Pixel {
    pub fn new(vertices: [Point3<f64>; 4]) -> Self {
        Self { vertices }
    }

    /// Creates a pixel from its min corner and two edge vectors.
    pub fn from_edges(origin: Point3<f64>, u: Vector3<f64>, v: Vector3<f64>) -> Self {
        Self::new([origin, origin + u, origin + v, origin + u + v])
    }

    #[inline]
    pub fn vertices(&self) -> &[Point3<f64>; 4] {
        &self.vertices
    }

    /// Index of the first axis along which the diagonal corners coincide,
    /// i.e. the axis the pixel is orthogonal to.
    pub fn normal_axis(&self) -> Option<usize> {
        let [first, _, _, last] = &self.vertices;
        (0..3).find(|&i| last[i] == first[i])
    }

    /// Returns the plane of the pixel with a unit normal along [`Pixel::normal_axis`].
    pub fn plane(&self) -> Option<Plane3D> {
        let axis = self.normal_axis()?;
        let mut normal = Vector3::zeros();
        normal[axis] = 1.0;
        Plane3D::from_point_and_normal(self.vertices[0], normal)
    }

    /// Locates `x` relative to the pixel using its bilinear parametrization.
    ///
    /// Returns `None` if the pixel has zero area.
    pub fn evaluate_position(&self, x: Point3<f64>) -> Option<Evaluation> {
        let [origin, along_r, along_s, _] = self.vertices;
        let e_r = along_r - origin;
        let e_s = along_s - origin;
        if e_r.cross(&e_s) == Vector3::zeros() {
            return None;
        }

        let local = x - origin;
        let r = e_r.dot(&local) / e_r.norm_squared();
        let s = e_s.dot(&local) / e_s.norm_squared();
        let inside = (0.0..=1.0).contains(&r) && (0.0..=1.0).contains(&s);

        let closest_point = origin + e_r * r.clamp(0.0, 1.0) + e_s * s.clamp(0.0, 1.0);

        Some(Evaluation {
            inside,
            closest_point,
            sub_id: 0,
            pcoords: Point3::new(r, s, 0.0),
            dist2: distance_squared(&x, &closest_point),
            weights: vec![
                (1.0 - r) * (1.0 - s),
                r * (1.0 - s),
                (1.0 - r) * s,
                r * s,
            ],
        })
    }

    /// Intersects the infinite line through `segment` with the pixel.
    ///
    /// Same scheme as [`Polygon::intersect_line`](crate::Polygon::intersect_line),
    /// with the plane derived from the pixel's axis.
    pub fn intersect_line(&self, segment: &Segment, config: &KernelConfig) -> Option<Hit> {
        let plane = self.plane()?;

        match plane.intersect_line(segment.p1, segment.p2) {
            LinePlane::Parallel => {
                if !config.test_coplanar || plane.signed_distance(segment.p1) != 0.0 {
                    return None;
                }
                trace!("segment lies in the plane of pixel {:?}", self.vertices);
                nearest_edge_crossing(&self.vertices, PIXEL_EDGES, segment, config)
            }
            LinePlane::Crossing { point, .. } => {
                let evaluation = self.evaluate_position(point)?;
                if !evaluation.inside {
                    return None;
                }
                config.accept(segment, point)
            }
        }
    }
}
