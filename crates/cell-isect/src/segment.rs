//! Finite line segments and the hit record produced by intersection queries.

use nalgebra::{Point3, Vector3, distance_squared};

/// A line segment between two points, `p1` being the reference end.
///
/// Most cell routines only use the segment to define a line; whether a hit
/// must also lie between the two end points is decided by
/// [`KernelConfig::clip_to_segment`](crate::KernelConfig::clip_to_segment).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub p1: Point3<f64>,
    pub p2: Point3<f64>,
}

impl Segment {
    /// Creates a new segment from `p1` to `p2`.
    pub fn new(p1: Point3<f64>, p2: Point3<f64>) -> Self {
        Self { p1, p2 }
    }

    /// Returns the (unnormalized) direction `p2 - p1`.
    #[inline]
    pub fn direction(&self) -> Vector3<f64> {
        self.p2 - self.p1
    }

    /// Returns the segment with its end points swapped.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self::new(self.p2, self.p1)
    }

    /// Returns true if the orthogonal projection of `x` onto the line falls
    /// between `p1` and `p2` (inclusive).
    ///
    /// A zero-length segment only spans its own end point.
    pub fn spans(&self, x: Point3<f64>) -> bool {
        let d = self.direction();
        let len2 = d.norm_squared();
        if len2 == 0.0 {
            return x == self.p1;
        }
        let s = (x - self.p1).dot(&d) / len2;
        (0.0..=1.0).contains(&s)
    }

    /// Squared distance from `x` to the infinite line through the segment.
    ///
    /// Falls back to the squared distance to `p1` when the segment has zero length.
    pub fn line_distance_squared(&self, x: Point3<f64>) -> f64 {
        let d = self.direction();
        let w = x - self.p1;
        let len2 = d.norm_squared();
        if len2 == 0.0 {
            return w.norm_squared();
        }
        w.cross(&d).norm_squared() / len2
    }
}

/// An accepted intersection.
///
/// `t` is **not** a line parameter: it is the squared distance from the
/// segment's `p1` to `x`, and only serves to rank candidate hits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub t: f64,
    pub x: Point3<f64>,
}

impl Hit {
    /// Creates a hit at `x`, ranked by its squared distance to `start`.
    #[inline]
    pub fn from_start(start: Point3<f64>, x: Point3<f64>) -> Self {
        Self {
            t: distance_squared(&start, &x),
            x,
        }
    }
}

/// Accumulates candidate hits and keeps the one closest to `p1`.
///
/// Ties keep the first candidate offered.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestHit {
    best: Option<Hit>,
}

impl NearestHit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers a candidate. `None` candidates are ignored.
    pub fn offer(&mut self, candidate: Option<Hit>) {
        let Some(candidate) = candidate else {
            return;
        };
        match self.best {
            Some(best) if best.t <= candidate.t => {}
            _ => self.best = Some(candidate),
        }
    }

    /// Returns the nearest hit offered so far.
    #[inline]
    pub fn get(&self) -> Option<Hit> {
        self.best
    }

    pub fn into_hit(self) -> Option<Hit> {
        self.best
    }
}
