//! Triangle and triangle-strip cells.

use log::trace;
use nalgebra::{Point3, Vector3};

use crate::edge::nearest_edge_crossing;
use crate::topology::TRIANGLE_EDGES;
use crate::{Hit, KernelConfig, NearestHit, Segment};

/// A triangle in 3D space, defined by three vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    vertices: [Point3<f64>; 3],
}

impl Triangle {
    /// Creates a new triangle from three points.
    ///
    /// The winding order determines the normal direction via the right-hand rule:
    /// normal = (b - a) × (c - a)
    pub fn new(a: Point3<f64>, b: Point3<f64>, c: Point3<f64>) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Returns the three vertices of the triangle.
    #[inline]
    pub fn vertices(&self) -> &[Point3<f64>; 3] {
        &self.vertices
    }

    /// Intersects the line through `segment` with the triangle (Möller–Trumbore).
    ///
    /// A zero-length segment or a zero-area triangle never intersects. When
    /// the line lies exactly in the triangle's plane the triangle's edges are
    /// tested instead if `config.test_coplanar` is set; a line parallel to
    /// the plane but off it misses.
    ///
    /// The distance along the line is not bounded: any crossing of the
    /// infinite line with the triangle is reported unless
    /// `config.clip_to_segment` is set.
    pub fn intersect_line(&self, segment: &Segment, config: &KernelConfig) -> Option<Hit> {
        let [v0, v1, v2] = self.vertices;
        let e1 = v1 - v0;
        let e2 = v2 - v0;
        let d = segment.direction();

        let normal = e1.cross(&e2);
        if d == Vector3::zeros() || normal == Vector3::zeros() {
            return None;
        }

        let p = d.cross(&e2);
        let det = p.dot(&e1);

        if det == 0.0 {
            // parallel: only a line lying in the plane gets the edge test
            if !config.test_coplanar || (segment.p1 - v0).dot(&normal) != 0.0 {
                return None;
            }
            trace!("segment lies in the plane of triangle {:?}", self.vertices);
            return nearest_edge_crossing(&self.vertices, TRIANGLE_EDGES, segment, config);
        }

        let s = segment.p1 - v0;
        let u = s.dot(&p) / det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(&e1);
        let v = d.dot(&q) / det;
        if !(0.0..=1.0).contains(&v) || u + v > 1.0 {
            return None;
        }

        let dt = e2.dot(&q) / det;
        config.accept(segment, segment.p1 + d * dt)
    }
}

impl From<[Point3<f64>; 3]> for Triangle {
    fn from(vertices: [Point3<f64>; 3]) -> Self {
        Self { vertices }
    }
}

/// Splits a strip into its consecutive triangles and keeps the nearest hit.
pub fn intersect_triangle_strip(
    points: &[Point3<f64>],
    segment: &Segment,
    config: &KernelConfig,
) -> Option<Hit> {
    let mut nearest = NearestHit::new();
    for triple in points.windows(3) {
        let triangle = Triangle::new(triple[0], triple[1], triple[2]);
        nearest.offer(triangle.intersect_line(segment, config));
    }
    nearest.into_hit()
}
