//! Nearest-cell picking along a ray.

use cell_isect::{Cell, Hit, IntersectKernel};
use log::debug;
use nalgebra::Point3;

/// A cell hit by a pick ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pick {
    /// Index of the cell in the scene.
    pub cell: usize,
    pub hit: Hit,
}

/// Returns the cell whose intersection lies nearest to `p1`.
///
/// Cells whose bounding box the line misses are skipped before the kernel
/// runs. Ties keep the earlier cell.
pub fn pick(
    kernel: &IntersectKernel,
    cells: &[Cell],
    p1: Point3<f64>,
    p2: Point3<f64>,
) -> Option<Pick> {
    let mut best: Option<Pick> = None;
    let mut tested = 0;

    for (index, cell) in cells.iter().enumerate() {
        let Some(bounds) = cell.bounds() else {
            continue;
        };
        if bounds.line_intersect_box(&p1, &p2).is_none() {
            continue;
        }

        tested += 1;
        let Some(hit) = kernel.intersect_with_line(cell, p1, p2) else {
            continue;
        };
        if best.is_none_or(|b| hit.t < b.hit.t) {
            best = Some(Pick { cell: index, hit });
        }
    }

    debug!("pick tested {tested} of {} cells", cells.len());
    best
}
