//! Static vertex-index tables describing cell topologies.
//!
//! Vertex ordering follows the usual unstructured-grid conventions:
//! - pixel and voxel corners vary x fastest, then y, then z, so the
//!   diagonal corners are 0/3 (pixel) and 0/7 (voxel);
//! - quad, hexahedron, wedge and pyramid vertices go around each ring
//!   counter-clockwise, bottom ring first.

/// A pair of vertex indices.
pub type Edge = [usize; 2];

/// A boundary face of a volumetric cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Triangle([usize; 3]),
    Quad([usize; 4]),
}

impl Face {
    /// Returns the vertex indices of the face, in order.
    pub fn indices(&self) -> &[usize] {
        match self {
            Face::Triangle(indices) => indices,
            Face::Quad(indices) => indices,
        }
    }
}

pub const LINE_EDGES: [Edge; 1] = [[0, 1]];

pub const TRIANGLE_EDGES: [Edge; 3] = [[0, 1], [1, 2], [2, 0]];

pub const PIXEL_EDGES: [Edge; 4] = [[0, 1], [1, 3], [2, 3], [0, 2]];

pub const QUAD_EDGES: [Edge; 4] = [[0, 1], [1, 2], [2, 3], [3, 0]];

/// Both diagonal splits of a quad: 0-1-2 / 2-3-0 and 0-1-3 / 2-3-1.
pub const QUAD_TRIANGLES: [[usize; 3]; 4] = [[0, 1, 2], [2, 3, 0], [0, 1, 3], [2, 3, 1]];

pub const TETRA_EDGES: [Edge; 6] = [[0, 1], [1, 2], [2, 0], [0, 3], [1, 3], [2, 3]];

pub const TETRA_FACES: [Face; 4] = [
    Face::Triangle([0, 1, 3]),
    Face::Triangle([1, 2, 3]),
    Face::Triangle([2, 0, 3]),
    Face::Triangle([0, 2, 1]),
];

pub const VOXEL_EDGES: [Edge; 12] = [
    [0, 1],
    [1, 3],
    [2, 3],
    [0, 2],
    [4, 5],
    [5, 7],
    [6, 7],
    [4, 6],
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
];

pub const VOXEL_FACES: [Face; 6] = [
    Face::Quad([0, 4, 6, 2]),
    Face::Quad([1, 3, 7, 5]),
    Face::Quad([0, 1, 5, 4]),
    Face::Quad([2, 6, 7, 3]),
    Face::Quad([0, 2, 3, 1]),
    Face::Quad([4, 5, 7, 6]),
];

pub const HEXAHEDRON_EDGES: [Edge; 12] = [
    [0, 1],
    [1, 2],
    [3, 2],
    [0, 3],
    [4, 5],
    [5, 6],
    [7, 6],
    [4, 7],
    [0, 4],
    [1, 5],
    [3, 7],
    [2, 6],
];

pub const HEXAHEDRON_FACES: [Face; 6] = [
    Face::Quad([0, 4, 7, 3]),
    Face::Quad([1, 2, 6, 5]),
    Face::Quad([0, 1, 5, 4]),
    Face::Quad([3, 7, 6, 2]),
    Face::Quad([0, 3, 2, 1]),
    Face::Quad([4, 5, 6, 7]),
];

pub const WEDGE_EDGES: [Edge; 9] = [
    [0, 1],
    [1, 2],
    [2, 0],
    [3, 4],
    [4, 5],
    [5, 3],
    [0, 3],
    [1, 4],
    [2, 5],
];

/// Triangular caps first, then the three quadrilateral sides.
pub const WEDGE_FACES: [Face; 5] = [
    Face::Triangle([0, 1, 2]),
    Face::Triangle([3, 5, 4]),
    Face::Quad([0, 3, 4, 1]),
    Face::Quad([1, 4, 5, 2]),
    Face::Quad([2, 5, 3, 0]),
];

pub const PYRAMID_EDGES: [Edge; 8] = [
    [0, 1],
    [1, 2],
    [2, 3],
    [3, 0],
    [0, 4],
    [1, 4],
    [2, 4],
    [3, 4],
];

pub const PYRAMID_FACES: [Face; 5] = [
    Face::Quad([0, 3, 2, 1]),
    Face::Triangle([0, 1, 4]),
    Face::Triangle([1, 2, 4]),
    Face::Triangle([2, 3, 4]),
    Face::Triangle([3, 0, 4]),
];

/// Consecutive pairs `i, i + 1` of an open chain of `n` points.
pub fn chain_edges(n: usize) -> impl Iterator<Item = Edge> {
    (1..n).map(|i| [i - 1, i])
}

/// Boundary edges of a closed loop of `n` points.
pub fn loop_edges(n: usize) -> impl Iterator<Item = Edge> {
    (0..n).map(move |i| [i, (i + 1) % n])
}

/// All edges of a triangle strip with `n` points: the chain plus every
/// `i, i + 2` pair.
pub fn strip_edges(n: usize) -> impl Iterator<Item = Edge> {
    chain_edges(n).chain((2..n).map(|i| [i - 2, i]))
}
