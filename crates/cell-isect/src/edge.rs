//! Planar segment crossings and the coplanar edge fallback.

use log::trace;
use nalgebra::Point3;

use crate::topology::Edge;
use crate::{Hit, KernelConfig, NearestHit, Segment};

/// Crossing of segments `p1-p2` and `p3-p4`, both read in the XY plane.
///
/// Each segment's supporting line `a*x + b*y + c = 0` is evaluated at the
/// other segment's end points; two results of the same strict sign mean the
/// segments cannot cross. Collinear segments (zero determinant) never cross,
/// overlap is not resolved.
///
/// Z coordinates are ignored and the crossing is returned with `z = 0`.
pub fn segments_cross_xy(
    p1: Point3<f64>,
    p2: Point3<f64>,
    p3: Point3<f64>,
    p4: Point3<f64>,
) -> Option<Point3<f64>> {
    let a1 = p2.y - p1.y;
    let b1 = p1.x - p2.x;
    let c1 = p2.x * p1.y - p1.x * p2.y;

    let r3 = a1 * p3.x + b1 * p3.y + c1;
    let r4 = a1 * p4.x + b1 * p4.y + c1;
    if same_strict_sign(r3, r4) {
        return None;
    }

    let a2 = p4.y - p3.y;
    let b2 = p3.x - p4.x;
    let c2 = p4.x * p3.y - p3.x * p4.y;

    let r1 = a2 * p1.x + b2 * p1.y + c2;
    let r2 = a2 * p2.x + b2 * p2.y + c2;
    if same_strict_sign(r1, r2) {
        return None;
    }

    let denom = a1 * b2 - a2 * b1;
    if denom == 0.0 {
        return None;
    }

    let x = (b1 * c2 - b2 * c1) / denom;
    let y = (a2 * c1 - a1 * c2) / denom;
    Some(Point3::new(x, y, 0.0))
}

#[inline]
fn same_strict_sign(a: f64, b: f64) -> bool {
    (a > 0.0 && b > 0.0) || (a < 0.0 && b < 0.0)
}

/// Tests `segment` against every listed edge of a cell and keeps the
/// crossing nearest to `segment.p1`.
///
/// This is the fallback used by planar cells when the test line lies in
/// their plane.
pub fn nearest_edge_crossing(
    points: &[Point3<f64>],
    edges: impl IntoIterator<Item = Edge>,
    segment: &Segment,
    config: &KernelConfig,
) -> Option<Hit> {
    let mut nearest = NearestHit::new();
    for [i, j] in edges {
        let crossing = segments_cross_xy(segment.p1, segment.p2, points[i], points[j]);
        nearest.offer(crossing.and_then(|x| config.accept(segment, x)));
    }
    trace!("coplanar edge fallback: {:?}", nearest.get());
    nearest.into_hit()
}
