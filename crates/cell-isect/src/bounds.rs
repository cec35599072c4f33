//! Axis-aligned bounding boxes and the slab test.

use std::mem;

use nalgebra::{Point3, Vector3};

/// An axis-aligned box given by its minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub mins: Point3<f64>,
    pub maxs: Point3<f64>,
}

/// Line parameters at which a line enters and leaves a box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlabInterval {
    pub t_near: f64,
    pub t_far: f64,
}

impl Aabb {
    /// Creates a box from its minimum and maximum corners.
    pub fn new(mins: Point3<f64>, maxs: Point3<f64>) -> Self {
        Self { mins, maxs }
    }

    /// Computes the bounds of a point set. Returns `None` for an empty set.
    pub fn from_points(points: &[Point3<f64>]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self::new(*first, *first);
        for p in rest {
            bounds.mins = bounds.mins.inf(p);
            bounds.maxs = bounds.maxs.sup(p);
        }
        Some(bounds)
    }

    /// Slab test of the line `origin + t * direction` against the box.
    ///
    /// Each axis clips the running `[t_near, t_far]` interval, which starts
    /// unbounded. An axis along which the direction is exactly zero rejects
    /// the line unless the origin already lies between that axis' bounds.
    /// Returns `None` if the interval becomes empty or lies entirely behind
    /// the origin (`t_far < 0`).
    ///
    /// A zero direction with the origin inside the box yields `t_near = 0`.
    pub fn clip_line(&self, origin: &Point3<f64>, direction: &Vector3<f64>) -> Option<SlabInterval> {
        let mut t_near = f64::NEG_INFINITY;
        let mut t_far = f64::INFINITY;

        for i in 0..3 {
            if direction[i] == 0.0 {
                if origin[i] < self.mins[i] || origin[i] > self.maxs[i] {
                    return None;
                }
                continue;
            }

            let mut t1 = (self.mins[i] - origin[i]) / direction[i];
            let mut t2 = (self.maxs[i] - origin[i]) / direction[i];
            if t1 > t2 {
                mem::swap(&mut t1, &mut t2);
            }

            t_near = t_near.max(t1);
            t_far = t_far.min(t2);

            if t_near > t_far || t_far < 0.0 {
                return None;
            }
        }

        if t_near == f64::NEG_INFINITY {
            t_near = 0.0;
        }

        Some(SlabInterval { t_near, t_far })
    }

    /// Intersects the ray `origin + t * direction` with the box.
    ///
    /// Returns the entry parameter and the entry point. The entry may lie
    /// behind the origin when the origin is inside the box.
    pub fn intersect_box(
        &self,
        origin: &Point3<f64>,
        direction: &Vector3<f64>,
    ) -> Option<(f64, Point3<f64>)> {
        let interval = self.clip_line(origin, direction)?;
        Some((interval.t_near, origin + direction * interval.t_near))
    }

    /// Intersects the line through `p1` and `p2` with the box.
    ///
    /// Same answer as [`Aabb::intersect_box`] with `origin = p1` and
    /// `direction = p2 - p1`; the returned parameter is in units of the
    /// segment length.
    pub fn line_intersect_box(
        &self,
        p1: &Point3<f64>,
        p2: &Point3<f64>,
    ) -> Option<(f64, Point3<f64>)> {
        self.intersect_box(p1, &(p2 - p1))
    }
}
