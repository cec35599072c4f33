//! Quad cells, possibly non-planar.

use nalgebra::Point3;

use crate::topology::QUAD_TRIANGLES;
use crate::{Hit, KernelConfig, NearestHit, Segment, Triangle};

/// A four-sided cell whose vertices need not be coplanar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    vertices: [Point3<f64>; 4],
}

impl Quad {
    pub fn new(vertices: [Point3<f64>; 4]) -> Self {
        Self { vertices }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point3<f64>; 4] {
        &self.vertices
    }

    /// Returns the four triangles of both diagonal splits.
    pub fn triangles(&self) -> [Triangle; 4] {
        QUAD_TRIANGLES.map(|[a, b, c]| {
            Triangle::new(self.vertices[a], self.vertices[b], self.vertices[c])
        })
    }

    /// Intersects the line with both diagonal splits of the quad and keeps
    /// the nearest hit.
    ///
    /// Testing both splits finds crossings a single triangulation of a
    /// warped quad would miss.
    pub fn intersect_line(&self, segment: &Segment, config: &KernelConfig) -> Option<Hit> {
        let mut nearest = NearestHit::new();
        for triangle in self.triangles() {
            nearest.offer(triangle.intersect_line(segment, config));
        }
        nearest.into_hit()
    }
}
