//! Volumetric cells, tested through their boundary faces.

use nalgebra::{Point3, Vector3};

use crate::topology::Face;
use crate::{Aabb, Hit, KernelConfig, NearestHit, Quad, Segment, Triangle};

/// Tests every listed face of a volumetric cell and keeps the nearest hit.
///
/// Triangular faces use [`Triangle::intersect_line`], quadrilateral faces
/// use [`Quad::intersect_line`] (both diagonal splits).
pub fn intersect_faces(
    points: &[Point3<f64>],
    faces: &[Face],
    segment: &Segment,
    config: &KernelConfig,
) -> Option<Hit> {
    let mut nearest = NearestHit::new();
    for face in faces {
        let candidate = match *face {
            Face::Triangle([a, b, c]) => {
                Triangle::new(points[a], points[b], points[c]).intersect_line(segment, config)
            }
            Face::Quad([a, b, c, d]) => {
                Quad::new([points[a], points[b], points[c], points[d]])
                    .intersect_line(segment, config)
            }
        };
        nearest.offer(candidate);
    }
    nearest.into_hit()
}

/// Intersects a voxel through the slab test on its min (0) and max (7) corners.
///
/// The reported point is where the line enters the box. When `p1` already
/// lies inside the voxel that entry is behind `p1`, so the result differs
/// from the same box tested face by face as a hexahedron, which returns the
/// nearest face in either direction. A zero-length segment misses.
pub fn intersect_voxel(
    points: &[Point3<f64>; 8],
    segment: &Segment,
    config: &KernelConfig,
) -> Option<Hit> {
    if segment.direction() == Vector3::zeros() {
        return None;
    }
    let bounds = Aabb::new(points[0], points[7]);
    let (_, x) = bounds.line_intersect_box(&segment.p1, &segment.p2)?;
    config.accept(segment, x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::{HEXAHEDRON_FACES, VOXEL_FACES};
    use approx::assert_relative_eq;

    fn unit_voxel() -> [Point3<f64>; 8] {
        let mut points = [Point3::origin(); 8];
        for (i, p) in points.iter_mut().enumerate() {
            *p = Point3::new((i & 1) as f64, ((i >> 1) & 1) as f64, ((i >> 2) & 1) as f64);
        }
        points
    }

    #[test]
    fn voxel_slab_hit() {
        let segment = Segment::new(Point3::new(-1.0, 0.5, 0.5), Point3::new(2.0, 0.5, 0.5));
        let hit = intersect_voxel(&unit_voxel(), &segment, &KernelConfig::new()).unwrap();
        assert_relative_eq!(hit.x, Point3::new(0.0, 0.5, 0.5));
        assert_relative_eq!(hit.t, 1.0);
    }

    #[test]
    fn voxel_faces_agree_with_slab() {
        let segment = Segment::new(Point3::new(0.3, -2.0, 0.6), Point3::new(0.3, 3.0, 0.6));
        let config = KernelConfig::new();
        let slab = intersect_voxel(&unit_voxel(), &segment, &config).unwrap();
        let faces = intersect_faces(&unit_voxel(), &VOXEL_FACES, &segment, &config).unwrap();
        assert_relative_eq!(slab.x, faces.x, epsilon = 1e-12);
        assert_relative_eq!(slab.x, Point3::new(0.3, 0.0, 0.6), epsilon = 1e-12);
    }

    #[test]
    fn hexahedron_faces_nearest() {
        // unit cube in hexahedron order: bottom ring counter-clockwise, then top ring
        let points = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(0.0, 1.0, 1.0),
        ];
        let segment = Segment::new(Point3::new(0.25, 0.5, 3.0), Point3::new(0.25, 0.5, -3.0));
        let hit =
            intersect_faces(&points, &HEXAHEDRON_FACES, &segment, &KernelConfig::new()).unwrap();
        assert_relative_eq!(hit.x, Point3::new(0.25, 0.5, 1.0), epsilon = 1e-12);
        assert_relative_eq!(hit.t, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_length_segment_misses_voxel() {
        let p = Point3::new(0.5, 0.5, 0.5);
        let segment = Segment::new(p, p);
        assert!(intersect_voxel(&unit_voxel(), &segment, &KernelConfig::new()).is_none());
    }

    #[test]
    fn start_inside_voxel_reports_entry_behind() {
        let segment = Segment::new(Point3::new(0.8, 0.5, 0.5), Point3::new(0.9, 0.5, 0.5));
        let hit = intersect_voxel(&unit_voxel(), &segment, &KernelConfig::new()).unwrap();
        assert_relative_eq!(hit.x, Point3::new(0.0, 0.5, 0.5), epsilon = 1e-12);
        assert_relative_eq!(hit.t, 0.64, epsilon = 1e-12);
    }

    #[test]
    fn voxel_miss() {
        let segment = Segment::new(Point3::new(-1.0, 1.5, 0.5), Point3::new(2.0, 1.5, 0.5));
        assert!(intersect_voxel(&unit_voxel(), &segment, &KernelConfig::new()).is_none());
    }
}
