//! Cell/line intersection kernel for unstructured-grid cells.
//!
//! Given a mesh cell (vertex, poly-vertex, line, poly-line, triangle,
//! triangle strip, polygon, pixel, quad, tetrahedron, voxel, hexahedron,
//! wedge or pyramid) and a line segment, [`IntersectKernel`] reports whether
//! the line meets the cell and, if so, the intersection nearest to the
//! segment's first end point. This is the primitive beneath picking and
//! probing: callers iterate candidate cells and keep the nearest [`Hit`].
//!
//! # Example
//!
//! ```
//! use cell_isect::{Cell, IntersectKernel};
//! use nalgebra::Point3;
//!
//! let triangle = Cell::from_points(5, &[
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ])?;
//!
//! let kernel = IntersectKernel::new();
//! let hit = kernel.intersect_with_line(
//!     &triangle,
//!     Point3::new(0.25, 0.25, 1.0),
//!     Point3::new(0.25, 0.25, -1.0),
//! );
//! assert_eq!(hit.map(|h| h.x), Some(Point3::new(0.25, 0.25, 0.0)));
//! # Ok::<(), cell_isect::CellError>(())
//! ```
//!
//! # Conventions
//!
//! - [`Hit::t`] is the squared distance from `p1` to the hit, used to rank hits.
//! - Planar and box routines intersect the infinite line through the segment
//!   unless [`KernelConfig::clip_to_segment`] is set.
//! - Degeneracy checks (parallel line, coplanar line, zero-area faces) use
//!   exact comparisons against zero.

mod bounds;
mod cell;
mod config;
mod edge;
mod error;
mod kernel;
mod line;
mod pixel;
mod plane;
mod point;
mod polygon;
mod quad;
mod segment;
mod triangle;
mod volume;

pub mod topology;

pub use bounds::{Aabb, SlabInterval};
pub use cell::{Cell, CellKind};
pub use config::KernelConfig;
pub use edge::{nearest_edge_crossing, segments_cross_xy};
pub use error::CellError;
pub use kernel::IntersectKernel;
pub use line::{intersect_line_segment, intersect_poly_line};
pub use pixel::Pixel;
pub use plane::{LinePlane, Plane3D};
pub use point::{intersect_poly_vertex, intersect_vertex};
pub use polygon::{Evaluation, Polygon};
pub use quad::Quad;
pub use segment::{Hit, NearestHit, Segment};
pub use triangle::{Triangle, intersect_triangle_strip};
pub use volume::{intersect_faces, intersect_voxel};
