//! Vertex and poly-vertex cells.

use nalgebra::Point3;

use crate::{Hit, KernelConfig, Segment};

/// A vertex is hit only if it lies exactly on the infinite line through
/// the segment; no tolerance is applied.
///
/// On a hit `t` is zero and `x` is the vertex itself.
pub fn intersect_vertex(
    vertex: Point3<f64>,
    segment: &Segment,
    config: &KernelConfig,
) -> Option<Hit> {
    if segment.line_distance_squared(vertex) != 0.0 {
        return None;
    }
    config
        .accept(segment, vertex)
        .map(|hit| Hit { t: 0.0, ..hit })
}

/// Returns the first vertex, in index order, that the line hits exactly.
pub fn intersect_poly_vertex(
    vertices: &[Point3<f64>],
    segment: &Segment,
    config: &KernelConfig,
) -> Option<Hit> {
    vertices
        .iter()
        .find_map(|vertex| intersect_vertex(*vertex, segment, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagonal() -> Segment {
        Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn vertex_on_line() {
        let v = Point3::new(0.5, 0.5, 0.5);
        let hit = intersect_vertex(v, &diagonal(), &KernelConfig::new()).unwrap();
        assert_eq!(hit.t, 0.0);
        assert_eq!(hit.x, v);
    }

    #[test]
    fn vertex_on_line_beyond_segment() {
        let v = Point3::new(3.0, 3.0, 3.0);
        assert!(intersect_vertex(v, &diagonal(), &KernelConfig::new()).is_some());
        let clipped = KernelConfig::new().with_clip_to_segment(true);
        assert!(intersect_vertex(v, &diagonal(), &clipped).is_none());
    }

    #[test]
    fn vertex_barely_off_line_misses() {
        let v = Point3::new(0.5, 0.5, 0.5 + 1e-12);
        assert!(intersect_vertex(v, &diagonal(), &KernelConfig::new()).is_none());
    }

    #[test]
    fn poly_vertex_returns_first_match_not_nearest() {
        let vertices = [
            Point3::new(5.0, 0.0, 0.0),
            Point3::new(0.75, 0.75, 0.75),
            Point3::new(0.25, 0.25, 0.25),
        ];
        let hit = intersect_poly_vertex(&vertices, &diagonal(), &KernelConfig::new()).unwrap();
        assert_eq!(hit.x, vertices[1]);
    }

    #[test]
    fn poly_vertex_miss() {
        let vertices = [Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)];
        assert!(intersect_poly_vertex(&vertices, &diagonal(), &KernelConfig::new()).is_none());
    }
}
