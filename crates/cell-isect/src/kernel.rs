//! Dispatch of cell/line intersection queries.

use log::warn;
use nalgebra::Point3;

use crate::line::{intersect_line_segment, intersect_poly_line};
use crate::point::{intersect_poly_vertex, intersect_vertex};
use crate::topology::{HEXAHEDRON_FACES, PYRAMID_FACES, TETRA_FACES, WEDGE_FACES};
use crate::triangle::intersect_triangle_strip;
use crate::volume::{intersect_faces, intersect_voxel};
use crate::{Cell, Hit, KernelConfig, Pixel, Polygon, Quad, Segment, Triangle};

/// Intersects cells with line segments.
///
/// The kernel only holds its [`KernelConfig`]; sub-cells used while testing
/// faces live on the stack of each call, so one kernel can serve any number
/// of queries, from any number of threads.
///
/// # Example
///
/// ```
/// use cell_isect::{Cell, IntersectKernel};
/// use nalgebra::Point3;
///
/// let cube = Cell::Voxel([
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
///     Point3::new(1.0, 1.0, 0.0),
///     Point3::new(0.0, 0.0, 1.0),
///     Point3::new(1.0, 0.0, 1.0),
///     Point3::new(0.0, 1.0, 1.0),
///     Point3::new(1.0, 1.0, 1.0),
/// ]);
///
/// let kernel = IntersectKernel::new();
/// let hit = kernel
///     .intersect_with_line(&cube, Point3::new(-1.0, 0.5, 0.5), Point3::new(2.0, 0.5, 0.5))
///     .unwrap();
/// assert_eq!(hit.x, Point3::new(0.0, 0.5, 0.5));
/// ```
#[derive(Debug, Clone, Default)]
pub struct IntersectKernel {
    config: KernelConfig,
}

impl IntersectKernel {
    /// Creates a kernel with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a kernel with the given configuration.
    pub fn with_config(config: KernelConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: KernelConfig) {
        self.config = config;
    }

    /// Returns whether the coplanar edge fallback is enabled.
    #[inline]
    pub fn test_coplanar(&self) -> bool {
        self.config.test_coplanar
    }

    /// Enables or disables the coplanar edge fallback.
    pub fn set_test_coplanar(&mut self, test_coplanar: bool) {
        self.config.test_coplanar = test_coplanar;
    }

    /// Intersects `cell` with the line from `p1` to `p2`.
    ///
    /// Returns the hit nearest to `p1` (by squared distance, reported as
    /// [`Hit::t`]), or `None` if there is no intersection. Unsupported cell
    /// types are logged and reported as a miss.
    pub fn intersect_with_line(
        &self,
        cell: &Cell,
        p1: Point3<f64>,
        p2: Point3<f64>,
    ) -> Option<Hit> {
        let segment = Segment::new(p1, p2);
        let config = &self.config;

        match cell {
            Cell::Vertex(vertex) => intersect_vertex(*vertex, &segment, config),
            Cell::PolyVertex(points) => intersect_poly_vertex(points, &segment, config),
            Cell::Line([a, b]) => intersect_line_segment(*a, *b, &segment, config),
            Cell::PolyLine(points) => intersect_poly_line(points, &segment, config),
            Cell::Triangle(points) => Triangle::from(*points).intersect_line(&segment, config),
            Cell::TriangleStrip(points) => intersect_triangle_strip(points, &segment, config),
            Cell::Polygon(points) => Polygon::new(points).intersect_line(&segment, config),
            Cell::Pixel(points) => Pixel::new(*points).intersect_line(&segment, config),
            Cell::Quad(points) => Quad::new(*points).intersect_line(&segment, config),
            Cell::Tetra(points) => intersect_faces(points, &TETRA_FACES, &segment, config),
            Cell::Voxel(points) => intersect_voxel(points, &segment, config),
            Cell::Hexahedron(points) => {
                intersect_faces(points, &HEXAHEDRON_FACES, &segment, config)
            }
            Cell::Wedge(points) => intersect_faces(points, &WEDGE_FACES, &segment, config),
            Cell::Pyramid(points) => intersect_faces(points, &PYRAMID_FACES, &segment, config),
            Cell::Unsupported { type_id, .. } => {
                warn!("cell type {type_id} is not supported by the line intersection kernel");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    fn p(x: f64, y: f64, z: f64) -> Point3<f64> {
        Point3::new(x, y, z)
    }

    fn wedge() -> Cell {
        Cell::Wedge([
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(0.0, 1.0, 0.0),
            p(0.0, 0.0, 1.0),
            p(1.0, 0.0, 1.0),
            p(0.0, 1.0, 1.0),
        ])
    }

    fn pyramid() -> Cell {
        Cell::Pyramid([
            p(0.0, 0.0, 0.0),
            p(2.0, 0.0, 0.0),
            p(2.0, 2.0, 0.0),
            p(0.0, 2.0, 0.0),
            p(1.0, 1.0, 2.0),
        ])
    }

    #[test]
    fn coplanar_flag_is_configurable() {
        let mut kernel = IntersectKernel::new();
        assert!(kernel.test_coplanar());
        kernel.set_test_coplanar(false);
        assert!(!kernel.test_coplanar());
        assert!(!kernel.config().test_coplanar);

        kernel.set_config(KernelConfig::new().with_clip_to_segment(true));
        assert!(kernel.test_coplanar());
        assert!(kernel.config().clip_to_segment);
    }

    #[test]
    fn vertex_and_line_cells() {
        let kernel = IntersectKernel::new();
        let vertex = Cell::Vertex(p(1.0, 1.0, 0.0));
        let hit = kernel
            .intersect_with_line(&vertex, p(0.0, 0.0, 0.0), p(2.0, 2.0, 0.0))
            .unwrap();
        assert_eq!(hit.t, 0.0);

        let line = Cell::Line([p(0.0, 2.0, 0.0), p(2.0, 0.0, 0.0)]);
        let hit = kernel
            .intersect_with_line(&line, p(0.0, 0.0, 0.0), p(2.0, 2.0, 0.0))
            .unwrap();
        assert_eq!(hit.x, p(1.0, 1.0, 0.0));
        assert_relative_eq!(hit.t, 2.0);
    }

    #[test]
    fn oblique_line_and_poly_line_cells() {
        let kernel = IntersectKernel::new();
        let line = Cell::Line([p(0.0, 0.0, 0.0), p(3.0, 1.0, 0.0)]);
        let hit = kernel
            .intersect_with_line(&line, p(0.1, 1.0, 0.0), p(2.9, -0.3, 0.0))
            .unwrap();
        assert_relative_eq!(hit.x.y, hit.x.x / 3.0, epsilon = 1e-12);

        // bent poly-line crossed by a tilted 3D segment on its second piece
        let poly_line = Cell::PolyLine(vec![p(0.0, 0.0, 0.0), p(1.0, 0.2, 0.3), p(2.0, 1.1, 0.7)]);
        let x = p(1.6, 0.74, 0.54);
        let d = Vector3::new(0.3, -0.7, 0.45);
        let hit = kernel.intersect_with_line(&poly_line, x - d, x + d).unwrap();
        assert_relative_eq!(hit.x, x, epsilon = 1e-12);
    }

    #[test]
    fn zero_length_segment_misses_voxel_and_hexahedron() {
        let kernel = IntersectKernel::new();
        let voxel = Cell::Voxel([
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(0.0, 1.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 0.0, 1.0),
            p(1.0, 0.0, 1.0),
            p(0.0, 1.0, 1.0),
            p(1.0, 1.0, 1.0),
        ]);
        let hexahedron = Cell::Hexahedron([
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
            p(0.0, 0.0, 1.0),
            p(1.0, 0.0, 1.0),
            p(1.0, 1.0, 1.0),
            p(0.0, 1.0, 1.0),
        ]);
        let point = p(0.5, 0.5, 0.5);
        assert!(kernel.intersect_with_line(&voxel, point, point).is_none());
        assert!(kernel.intersect_with_line(&hexahedron, point, point).is_none());
    }

    #[test]
    fn wedge_top_and_side() {
        let kernel = IntersectKernel::new();
        let down = kernel
            .intersect_with_line(&wedge(), p(0.2, 0.2, 3.0), p(0.2, 0.2, -3.0))
            .unwrap();
        assert_relative_eq!(down.x, p(0.2, 0.2, 1.0), epsilon = 1e-12);

        let across = kernel
            .intersect_with_line(&wedge(), p(2.0, 0.25, 0.5), p(-2.0, 0.25, 0.5))
            .unwrap();
        // slanted side x + y = 1
        assert_relative_eq!(across.x, p(0.75, 0.25, 0.5), epsilon = 1e-12);
    }

    #[test]
    fn pyramid_apex_side_and_base() {
        let kernel = IntersectKernel::new();
        let down = kernel
            .intersect_with_line(&pyramid(), p(1.0, 0.5, 5.0), p(1.0, 0.5, -5.0))
            .unwrap();
        // face 0-1-4 rises as z = 2y
        assert_relative_eq!(down.x, p(1.0, 0.5, 1.0), epsilon = 1e-12);

        let up = kernel
            .intersect_with_line(&pyramid(), p(1.0, 0.5, -5.0), p(1.0, 0.5, 5.0))
            .unwrap();
        assert_relative_eq!(up.x, p(1.0, 0.5, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn polygon_and_strip_cells() {
        let kernel = IntersectKernel::new();
        let square = vec![
            p(0.0, 0.0, 1.0),
            p(1.0, 0.0, 1.0),
            p(1.0, 1.0, 1.0),
            p(0.0, 1.0, 1.0),
        ];
        let polygon = Cell::Polygon(square.clone());
        let hit = kernel
            .intersect_with_line(&polygon, p(0.5, 0.5, 0.0), p(0.5, 0.5, 2.0))
            .unwrap();
        assert_relative_eq!(hit.x, p(0.5, 0.5, 1.0));

        let strip = Cell::TriangleStrip(vec![square[0], square[1], square[3], square[2]]);
        let hit = kernel
            .intersect_with_line(&strip, p(0.5, 0.5, 0.0), p(0.5, 0.5, 2.0))
            .unwrap();
        assert_relative_eq!(hit.x, p(0.5, 0.5, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn unsupported_cell_is_a_miss() {
        let kernel = IntersectKernel::new();
        let cell = Cell::from_points(24, &[p(0.0, 0.0, 0.0); 10]).unwrap();
        assert!(
            kernel
                .intersect_with_line(&cell, p(-1.0, 0.0, 0.0), p(1.0, 0.0, 0.0))
                .is_none()
        );
    }

    #[test]
    fn kernel_is_shareable_between_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IntersectKernel>();
    }
}
