//! Generic planar polygon cells.

use log::trace;
use nalgebra::{Point3, Vector3, distance_squared};

use crate::edge::nearest_edge_crossing;
use crate::plane::LinePlane;
use crate::topology::loop_edges;
use crate::{Hit, KernelConfig, Plane3D, Segment};

/// Result of locating a point relative to a planar cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The point projects inside the cell boundary.
    pub inside: bool,
    /// The projection of the point when inside, otherwise the nearest
    /// boundary point.
    pub closest_point: Point3<f64>,
    /// Index of the sub-cell the point was located in (always 0 for the
    /// cells in this crate).
    pub sub_id: usize,
    /// Parametric coordinates of the projected point; the third one is unused.
    pub pcoords: Point3<f64>,
    /// Squared distance from the point to `closest_point`.
    pub dist2: f64,
    /// Per-vertex interpolation weights of the projected point.
    pub weights: Vec<f64>,
}

/// A planar polygon given by its ordered vertices.
///
/// The polygon borrows its vertices so testing a mesh cell does not copy them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polygon<'a> {
    vertices: &'a [Point3<f64>],
}

impl<'a> Polygon<'a> {
    /// Creates a polygon over the given vertices.
    pub fn new(vertices: &'a [Point3<f64>]) -> Self {
        Self { vertices }
    }

    /// Returns the vertices of the polygon.
    #[inline]
    pub fn vertices(&self) -> &'a [Point3<f64>] {
        self.vertices
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Best-fit (Newell) normal, scaled by twice the polygon area.
    ///
    /// Counter-clockwise winding seen from the front gives a normal
    /// pointing towards the viewer.
    pub fn normal(&self) -> Vector3<f64> {
        let n = self.vertices.len();
        let mut normal = Vector3::zeros();
        for i in 0..n {
            let cur = self.vertices[i];
            let next = self.vertices[(i + 1) % n];
            normal.x += (cur.y - next.y) * (cur.z + next.z);
            normal.y += (cur.z - next.z) * (cur.x + next.x);
            normal.z += (cur.x - next.x) * (cur.y + next.y);
        }
        normal
    }

    /// Returns the plane of the polygon, or `None` if its best-fit normal vanishes.
    pub fn plane(&self) -> Option<Plane3D> {
        let first = *self.vertices.first()?;
        Plane3D::from_point_and_normal(first, self.normal())
    }

    /// Locates `x` relative to the polygon.
    ///
    /// `x` is projected onto the polygon's plane; it is inside if the
    /// projection falls within the parametric bounding frame of the polygon
    /// and passes an even-odd crossing test. Weights are normalized inverse
    /// squared distances to the vertices.
    ///
    /// Returns `None` for a degenerate polygon.
    pub fn evaluate_position(&self, x: Point3<f64>) -> Option<Evaluation> {
        let plane = self.plane()?;
        let normal = plane.normal();
        let projected = plane.project_point(x);

        let frame = ParametricFrame::new(self.vertices, &normal)?;
        let pcoords = frame.pcoords(projected);
        let inside = (0.0..=1.0).contains(&pcoords.x)
            && (0.0..=1.0).contains(&pcoords.y)
            && self.contains_projected(projected, &normal);

        let closest_point = if inside {
            projected
        } else {
            self.closest_boundary_point(x)
        };

        Some(Evaluation {
            inside,
            closest_point,
            sub_id: 0,
            pcoords,
            dist2: distance_squared(&x, &closest_point),
            weights: self.interpolation_weights(projected),
        })
    }

    /// Intersects the infinite line through `segment` with the polygon.
    ///
    /// The crossing with the polygon's plane is accepted only when
    /// [`Polygon::evaluate_position`] places it inside the polygon. A line
    /// lying exactly in the plane falls back to the edges when
    /// `config.test_coplanar` is set.
    pub fn intersect_line(&self, segment: &Segment, config: &KernelConfig) -> Option<Hit> {
        let plane = self.plane()?;

        match plane.intersect_line(segment.p1, segment.p2) {
            LinePlane::Parallel => {
                if !config.test_coplanar || plane.signed_distance(segment.p1) != 0.0 {
                    return None;
                }
                trace!("segment lies in the plane of a {}-gon", self.len());
                nearest_edge_crossing(self.vertices, loop_edges(self.len()), segment, config)
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

    /// Even-odd test of a point in the polygon's plane, done in the
    /// coordinate plane where the polygon's projection is largest.
    fn contains_projected(&self, point: Point3<f64>, normal: &Vector3<f64>) -> bool {
        let (i, j) = match normal.iamax() {
            0 => (1, 2),
            1 => (2, 0),
            _ => (0, 1),
        };

        let (px, py) = (point[i], point[j]);
        let n = self.vertices.len();
        let mut inside = false;
        for k in 0..n {
            let a = self.vertices[k];
            let b = self.vertices[(k + 1) % n];
            let (ax, ay, bx, by) = (a[i], a[j], b[i], b[j]);
            if (ay > py) != (by > py) {
                let cross_x = ax + (py - ay) * (bx - ax) / (by - ay);
                if px < cross_x {
                    inside = !inside;
                }
            }
        }
        inside
    }

    fn closest_boundary_point(&self, x: Point3<f64>) -> Point3<f64> {
        let mut best = self.vertices[0];
        let mut best_dist2 = f64::INFINITY;
        for [i, j] in loop_edges(self.len()) {
            let candidate = closest_point_on_segment(x, self.vertices[i], self.vertices[j]);
            let dist2 = distance_squared(&x, &candidate);
            if dist2 < best_dist2 {
                best = candidate;
                best_dist2 = dist2;
            }
        }
        best
    }

    fn interpolation_weights(&self, x: Point3<f64>) -> Vec<f64> {
        let dist2: Vec<f64> = self
            .vertices
            .iter()
            .map(|v| distance_squared(&x, v))
            .collect();

        if let Some(hit) = dist2.iter().position(|&d| d == 0.0) {
            let mut weights = vec![0.0; dist2.len()];
            weights[hit] = 1.0;
            return weights;
        }

        let inverse: Vec<f64> = dist2.iter().map(|d| 1.0 / d).collect();
        let sum: f64 = inverse.iter().sum();
        inverse.into_iter().map(|w| w / sum).collect()
    }
}

/// Local 2D frame spanning the bounding rectangle of a polygon in its plane.
struct ParametricFrame {
    origin: Point3<f64>,
    axes: [Vector3<f64>; 2],
    min: [f64; 2],
    extent: [f64; 2],
}

impl ParametricFrame {
    fn new(vertices: &[Point3<f64>], normal: &Vector3<f64>) -> Option<Self> {
        let origin = *vertices.first()?;
        let first_axis = vertices
            .iter()
            .map(|v| v - origin)
            .find(|d| *d != Vector3::zeros())?
            .normalize();
        let axes = [first_axis, normal.cross(&first_axis)];

        let mut min = [f64::INFINITY; 2];
        let mut max = [f64::NEG_INFINITY; 2];
        for v in vertices {
            let local = v - origin;
            for k in 0..2 {
                let s = local.dot(&axes[k]);
                min[k] = min[k].min(s);
                max[k] = max[k].max(s);
            }
        }

        let extent = [max[0] - min[0], max[1] - min[1]];
        if extent[0] == 0.0 || extent[1] == 0.0 {
            return None;
        }

        Some(Self {
            origin,
            axes,
            min,
            extent,
        })
    }

    fn pcoords(&self, x: Point3<f64>) -> Point3<f64> {
        let local = x - self.origin;
        Point3::new(
            (local.dot(&self.axes[0]) - self.min[0]) / self.extent[0],
            (local.dot(&self.axes[1]) - self.min[1]) / self.extent[1],
            0.0,
        )
    }
}

pub(crate) fn closest_point_on_segment(
    x: Point3<f64>,
    a: Point3<f64>,
    b: Point3<f64>,
) -> Point3<f64> {
    let ab = b - a;
    let len2 = ab.norm_squared();
    if len2 == 0.0 {
        return a;
    }
    let s = ((x - a).dot(&ab) / len2).clamp(0.0, 1.0);
    a + ab * s
}
