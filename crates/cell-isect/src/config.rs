//! Kernel configuration.

use nalgebra::Point3;

use crate::{Hit, Segment};

/// Options shared by every cell routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernelConfig {
    /// When the test line lies exactly in the plane of a planar face, test
    /// the face's edges one by one instead of reporting a miss.
    pub test_coplanar: bool,

    /// Discard candidate hits whose projection onto the segment falls
    /// outside `p1..=p2`.
    ///
    /// Off by default: planar and box routines then intersect the infinite
    /// line through the segment and only check containment in the cell.
    pub clip_to_segment: bool,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            test_coplanar: true,
            clip_to_segment: false,
        }
    }
}

impl KernelConfig {
    /// Creates the default configuration (coplanar fallback on, no clipping).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the coplanar edge fallback.
    pub fn with_test_coplanar(mut self, test_coplanar: bool) -> Self {
        self.test_coplanar = test_coplanar;
        self
    }

    /// Sets clipping of hits to the finite segment.
    pub fn with_clip_to_segment(mut self, clip_to_segment: bool) -> Self {
        self.clip_to_segment = clip_to_segment;
        self
    }

    /// Turns a candidate point into a [`Hit`], applying segment clipping.
    pub(crate) fn accept(&self, segment: &Segment, x: Point3<f64>) -> Option<Hit> {
        if self.clip_to_segment && !segment.spans(x) {
            return None;
        }
        Some(Hit::from_start(segment.p1, x))
    }
}
