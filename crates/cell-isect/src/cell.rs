//! Cell topologies and their vertex data.

use nalgebra::Point3;

use crate::topology::{
    self, Edge, Face, HEXAHEDRON_EDGES, HEXAHEDRON_FACES, LINE_EDGES, PIXEL_EDGES, PYRAMID_EDGES,
    PYRAMID_FACES, QUAD_EDGES, TETRA_EDGES, TETRA_FACES, TRIANGLE_EDGES, VOXEL_EDGES, VOXEL_FACES,
    WEDGE_EDGES, WEDGE_FACES,
};
use crate::{Aabb, CellError};

/// Topology tag of a cell.
///
/// The integer ids used by [`CellKind::from_type_id`] are the conventional
/// unstructured-grid cell type ids. Any id without a linear implementation
/// (quadratic and other higher-order cells included) maps to
/// [`CellKind::Unsupported`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Vertex,
    PolyVertex,
    Line,
    PolyLine,
    Triangle,
    TriangleStrip,
    Polygon,
    Pixel,
    Quad,
    Tetra,
    Voxel,
    Hexahedron,
    Wedge,
    Pyramid,
    Unsupported(u8),
}

impl CellKind {
    /// Maps a cell type id to its kind.
    pub fn from_type_id(type_id: u8) -> Self {
        match type_id {
            1 => CellKind::Vertex,
            2 => CellKind::PolyVertex,
            3 => CellKind::Line,
            4 => CellKind::PolyLine,
            5 => CellKind::Triangle,
            6 => CellKind::TriangleStrip,
            7 => CellKind::Polygon,
            8 => CellKind::Pixel,
            9 => CellKind::Quad,
            10 => CellKind::Tetra,
            11 => CellKind::Voxel,
            12 => CellKind::Hexahedron,
            13 => CellKind::Wedge,
            14 => CellKind::Pyramid,
            other => CellKind::Unsupported(other),
        }
    }
}

/// A mesh cell: a topology tag together with its ordered vertices.
///
/// Fixed-size topologies store their vertices inline, so building and
/// testing one does not allocate.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Vertex(Point3<f64>),
    PolyVertex(Vec<Point3<f64>>),
    Line([Point3<f64>; 2]),
    PolyLine(Vec<Point3<f64>>),
    Triangle([Point3<f64>; 3]),
    TriangleStrip(Vec<Point3<f64>>),
    Polygon(Vec<Point3<f64>>),
    Pixel([Point3<f64>; 4]),
    Quad([Point3<f64>; 4]),
    Tetra([Point3<f64>; 4]),
    Voxel([Point3<f64>; 8]),
    Hexahedron([Point3<f64>; 8]),
    Wedge([Point3<f64>; 6]),
    Pyramid([Point3<f64>; 5]),
    Unsupported {
        type_id: u8,
        points: Vec<Point3<f64>>,
    },
}

impl Cell {
    /// Builds a cell from a type id and its vertices, as handed out by a mesh.
    ///
    /// Unknown type ids produce [`Cell::Unsupported`] rather than an error:
    /// intersection queries report a miss for them.
    ///
    /// # Errors
    /// Returns [`CellError`] when the number of vertices does not fit the topology.
    pub fn from_points(type_id: u8, points: &[Point3<f64>]) -> Result<Self, CellError> {
        let kind = CellKind::from_type_id(type_id);
        let cell = match kind {
            CellKind::Vertex => Cell::Vertex(fixed::<1>(kind, points)?[0]),
            CellKind::PolyVertex => Cell::PolyVertex(at_least(kind, 1, points)?),
            CellKind::Line => Cell::Line(fixed(kind, points)?),
            CellKind::PolyLine => Cell::PolyLine(at_least(kind, 2, points)?),
            CellKind::Triangle => Cell::Triangle(fixed(kind, points)?),
            CellKind::TriangleStrip => Cell::TriangleStrip(at_least(kind, 3, points)?),
            CellKind::Polygon => Cell::Polygon(at_least(kind, 3, points)?),
            CellKind::Pixel => Cell::Pixel(fixed(kind, points)?),
            CellKind::Quad => Cell::Quad(fixed(kind, points)?),
            CellKind::Tetra => Cell::Tetra(fixed(kind, points)?),
            CellKind::Voxel => Cell::Voxel(fixed(kind, points)?),
            CellKind::Hexahedron => Cell::Hexahedron(fixed(kind, points)?),
            CellKind::Wedge => Cell::Wedge(fixed(kind, points)?),
            CellKind::Pyramid => Cell::Pyramid(fixed(kind, points)?),
            CellKind::Unsupported(type_id) => Cell::Unsupported {
                type_id,
                points: points.to_vec(),
            },
        };
        Ok(cell)
    }

    /// Returns the topology tag of the cell.
    pub fn kind(&self) -> CellKind {
        match self {
            Cell::Vertex(_) => CellKind::Vertex,
            Cell::PolyVertex(_) => CellKind::PolyVertex,
            Cell::Line(_) => CellKind::Line,
            Cell::PolyLine(_) => CellKind::PolyLine,
            Cell::Triangle(_) => CellKind::Triangle,
            Cell::TriangleStrip(_) => CellKind::TriangleStrip,
            Cell::Polygon(_) => CellKind::Polygon,
            Cell::Pixel(_) => CellKind::Pixel,
            Cell::Quad(_) => CellKind::Quad,
            Cell::Tetra(_) => CellKind::Tetra,
            Cell::Voxel(_) => CellKind::Voxel,
            Cell::Hexahedron(_) => CellKind::Hexahedron,
            Cell::Wedge(_) => CellKind::Wedge,
            Cell::Pyramid(_) => CellKind::Pyramid,
            Cell::Unsupported { type_id, .. } => CellKind::Unsupported(*type_id),
        }
    }

    /// Returns the vertices of the cell, in topology order.
    pub fn points(&self) -> &[Point3<f64>] {
        match self {
            Cell::Vertex(p) => std::slice::from_ref(p),
            Cell::Line(p) => p,
            Cell::Triangle(p) => p,
            Cell::Pixel(p) | Cell::Quad(p) | Cell::Tetra(p) => p,
            Cell::Voxel(p) | Cell::Hexahedron(p) => p,
            Cell::Wedge(p) => p,
            Cell::Pyramid(p) => p,
            Cell::PolyVertex(p) | Cell::PolyLine(p) | Cell::TriangleStrip(p) | Cell::Polygon(p) => p,
            Cell::Unsupported { points, .. } => points,
        }
    }

    /// Returns the edges of the cell as pairs of vertex indices.
    ///
    /// Point cells and unsupported cells have no edges.
    pub fn edges(&self) -> Vec<Edge> {
        let n = self.points().len();
        match self {
            Cell::Vertex(_) | Cell::PolyVertex(_) | Cell::Unsupported { .. } => Vec::new(),
            Cell::Line(_) => LINE_EDGES.to_vec(),
            Cell::PolyLine(_) => topology::chain_edges(n).collect(),
            Cell::Triangle(_) => TRIANGLE_EDGES.to_vec(),
            Cell::TriangleStrip(_) => topology::strip_edges(n).collect(),
            Cell::Polygon(_) => topology::loop_edges(n).collect(),
            Cell::Pixel(_) => PIXEL_EDGES.to_vec(),
            Cell::Quad(_) => QUAD_EDGES.to_vec(),
            Cell::Tetra(_) => TETRA_EDGES.to_vec(),
            Cell::Voxel(_) => VOXEL_EDGES.to_vec(),
            Cell::Hexahedron(_) => HEXAHEDRON_EDGES.to_vec(),
            Cell::Wedge(_) => WEDGE_EDGES.to_vec(),
            Cell::Pyramid(_) => PYRAMID_EDGES.to_vec(),
        }
    }

    /// Returns the boundary faces of a volumetric cell, or an empty slice
    /// for every other kind.
    pub fn faces(&self) -> &'static [Face] {
        match self {
            Cell::Tetra(_) => &TETRA_FACES,
            Cell::Voxel(_) => &VOXEL_FACES,
            Cell::Hexahedron(_) => &HEXAHEDRON_FACES,
            Cell::Wedge(_) => &WEDGE_FACES,
            Cell::Pyramid(_) => &PYRAMID_FACES,
            _ => &[],
        }
    }

    /// Returns the axis-aligned bounds of the cell's vertices.
    ///
    /// Every constructed cell except an empty [`Cell::Unsupported`] has bounds.
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(self.points())
    }
}

fn fixed<const N: usize>(
    kind: CellKind,
    points: &[Point3<f64>],
) -> Result<[Point3<f64>; N], CellError> {
    <[Point3<f64>; N]>::try_from(points).map_err(|_| CellError::VertexCount {
        kind,
        expected: N,
        found: points.len(),
    })
}

fn at_least(
    kind: CellKind,
    minimum: usize,
    points: &[Point3<f64>],
) -> Result<Vec<Point3<f64>>, CellError> {
    if points.len() < minimum {
        return Err(CellError::TooFewVertices {
            kind,
            minimum,
            found: points.len(),
        });
    }
    Ok(points.to_vec())
}
