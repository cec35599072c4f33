//! Line and poly-line cells.

use nalgebra::{Point3, distance_squared};

use crate::{Hit, KernelConfig, NearestHit, Segment};

/// Relative gap allowed between the two closest points of a crossing,
/// scaled by the magnitude of the inputs.
const CROSSING_TOLERANCE: f64 = 1.0e-9;

/// Intersects the cell edge `a-b` with `segment`.
///
/// The closest-approach parameters `u` (along the edge) and `v` (along the
/// segment) come from the 2x2 normal equations. Parallel lines (zero
/// determinant) miss and both parameters must lie in `[0, 1]`. The two
/// closest points must then agree up to rounding: their distance may not
/// exceed [`CROSSING_TOLERANCE`] times the largest coordinate or length
/// involved. The reported point lies on the segment.
pub fn intersect_line_segment(
    a: Point3<f64>,
    b: Point3<f64>,
    segment: &Segment,
    config: &KernelConfig,
) -> Option<Hit> {
    let edge = b - a;
    let dir = segment.direction();
    let w = a - segment.p1;

    let a11 = edge.dot(&edge);
    let a12 = -edge.dot(&dir);
    let a22 = dir.dot(&dir);
    let b1 = -edge.dot(&w);
    let b2 = dir.dot(&w);

    let det = a11 * a22 - a12 * a12;
    if det == 0.0 {
        return None;
    }

    let u = (b1 * a22 - a12 * b2) / det;
    let v = (a11 * b2 - a12 * b1) / det;
    if !(0.0..=1.0).contains(&u) || !(0.0..=1.0).contains(&v) {
        return None;
    }

    let on_edge = a + edge * u;
    let on_segment = segment.p1 + dir * v;

    let scale = [
        edge.norm(),
        dir.norm(),
        a.coords.amax(),
        b.coords.amax(),
        segment.p1.coords.amax(),
        segment.p2.coords.amax(),
    ]
    .into_iter()
    .fold(0.0, f64::max);
    let tolerance = CROSSING_TOLERANCE * scale;
    if distance_squared(&on_edge, &on_segment) > tolerance * tolerance {
        return None;
    }

    config.accept(segment, on_segment)
}

/// Tests every piece of a poly-line and keeps the nearest crossing.
pub fn intersect_poly_line(
    points: &[Point3<f64>],
    segment: &Segment,
    config: &KernelConfig,
) -> Option<Hit> {
    let mut nearest = NearestHit::new();
    for pair in points.windows(2) {
        nearest.offer(intersect_line_segment(pair[0], pair[1], segment, config));
    }
    nearest.into_hit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;
    use proptest::prelude::*;

    fn vertical() -> Segment {
        Segment::new(Point3::new(1.0, -1.0, 0.0), Point3::new(1.0, 1.0, 0.0))
    }

    #[test]
    fn crossing_lines() {
        let hit = intersect_line_segment(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            &vertical(),
            &KernelConfig::new(),
        )
        .unwrap();
        assert_eq!(hit.x, Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(hit.t, 1.0);
    }

    #[test]
    fn skew_lines_miss() {
        let hit = intersect_line_segment(
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(2.0, 0.0, 1.0),
            &vertical(),
            &KernelConfig::new(),
        );
        assert!(hit.is_none());
    }

    #[test]
    fn parallel_lines_miss() {
        let hit = intersect_line_segment(
            Point3::new(0.0, -1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            &vertical(),
            &KernelConfig::new(),
        );
        assert!(hit.is_none());
    }

    #[test]
    fn crossing_outside_segment_misses() {
        let short = Segment::new(Point3::new(1.0, 0.5, 0.0), Point3::new(1.0, 1.0, 0.0));
        let hit = intersect_line_segment(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            &short,
            &KernelConfig::new(),
        );
        assert!(hit.is_none());
    }

    #[test]
    fn oblique_planar_crossing() {
        // edge runs along y = x / 3, the segment descends across it
        let segment = Segment::new(Point3::new(0.1, 1.0, 0.0), Point3::new(2.9, -0.3, 0.0));
        let hit = intersect_line_segment(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(3.0, 1.0, 0.0),
            &segment,
            &KernelConfig::new(),
        )
        .unwrap();

        // edge: (3u, u); segment: (0.1 + 2.8v, 1 - 1.3v)
        let v = (3.0 - 0.1) / (2.8 + 3.0 * 1.3);
        let expected = Point3::new(0.1 + 2.8 * v, 1.0 - 1.3 * v, 0.0);
        assert_relative_eq!(hit.x, expected, epsilon = 1e-12);
        assert_relative_eq!(hit.x.y, hit.x.x / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn oblique_3d_crossing() {
        let x = Point3::new(0.3, -1.7, 2.9);
        let d1 = Vector3::new(0.7, 0.2, -1.1);
        let d2 = Vector3::new(-0.4, 1.3, 0.6);
        let segment = Segment::new(x - d2 * 0.35, x + d2 * 0.65);

        let hit =
            intersect_line_segment(x - d1 * 0.8, x + d1 * 0.2, &segment, &KernelConfig::new())
                .unwrap();
        assert_relative_eq!(hit.x, x, epsilon = 1e-12);
        assert_relative_eq!(hit.t, (d2 * 0.35).norm_squared(), epsilon = 1e-12);
    }

    #[test]
    fn oblique_skew_lines_miss() {
        let x = Point3::new(0.3, -1.7, 2.9);
        let d1 = Vector3::new(0.7, 0.2, -1.1);
        let d2 = Vector3::new(-0.4, 1.3, 0.6);
        let offset = d1.cross(&d2).normalize() * 1e-4;
        let segment = Segment::new(x - d2 + offset, x + d2 + offset);

        assert!(
            intersect_line_segment(x - d1, x + d1, &segment, &KernelConfig::new()).is_none()
        );
    }

    #[test]
    fn poly_line_keeps_nearest() {
        // zig-zag crossed twice by the vertical line x = 1
        let points = [
            Point3::new(0.0, 0.5, 0.0),
            Point3::new(2.0, 0.5, 0.0),
            Point3::new(2.0, -0.5, 0.0),
            Point3::new(0.0, -0.5, 0.0),
        ];
        let hit = intersect_poly_line(&points, &vertical(), &KernelConfig::new()).unwrap();
        assert_eq!(hit.x, Point3::new(1.0, -0.5, 0.0));

        let hit =
            intersect_poly_line(&points, &vertical().reversed(), &KernelConfig::new()).unwrap();
        assert_eq!(hit.x, Point3::new(1.0, 0.5, 0.0));
    }

    proptest! {
        #[test]
        fn crossing_segments_meet_at_their_shared_point(
            x in prop::array::uniform3(-10.0f64..10.0),
            d1 in prop::array::uniform3(-5.0f64..5.0),
            d2 in prop::array::uniform3(-5.0f64..5.0),
            s1 in 0.05f64..0.95,
            s2 in 0.05f64..0.95,
        ) {
            let x = Point3::from(x);
            let (d1, d2) = (Vector3::from(d1), Vector3::from(d2));
            prop_assume!(d1.norm() > 0.1 && d2.norm() > 0.1);
            prop_assume!(d1.cross(&d2).norm() > 0.1 * d1.norm() * d2.norm());

            let segment = Segment::new(x - d2 * s2, x + d2 * (1.0 - s2));
            let hit = intersect_line_segment(
                x - d1 * s1,
                x + d1 * (1.0 - s1),
                &segment,
                &KernelConfig::new(),
            );
            prop_assert!(hit.is_some());
            let hit = hit.unwrap();
            prop_assert!((hit.x - x).norm() < 1e-9, "{} vs {}", hit.x, x);

            // lifting the segment off the edge's line by a visible gap misses
            let lift = d1.cross(&d2).normalize() * 1e-3;
            let lifted = Segment::new(segment.p1 + lift, segment.p2 + lift);
            prop_assert!(
                intersect_line_segment(x - d1 * s1, x + d1 * (1.0 - s1), &lifted, &KernelConfig::new())
                    .is_none()
            );
        }
    }
}
