use std::f64::consts::SQRT_2;

use gridpath_core::Cell;

/// Octile distance between two cells under 8-directional movement.
///
/// Straight moves cost 1 and diagonal moves cost √2, so the cheapest
/// obstacle-free route takes `min(dr, dc)` diagonal steps and the rest
/// straight: `max(dr, dc) + (√2 - 1) * min(dr, dc)`. Admissible and
/// consistent for [`step_cost`] edges.
#[inline]
pub fn octile(a: Cell, b: Cell) -> f64 {
    let (dr, dc) = delta(a, b);
    let (dr, dc) = (dr.abs(), dc.abs());
    dr.max(dc) + (SQRT_2 - 1.0) * dr.min(dc)
}

/// Euclidean distance between two cells, used as the cost of one step.
///
/// Gives 1 for orthogonal neighbors and √2 for diagonal ones.
#[inline]
pub fn step_cost(from: Cell, to: Cell) -> f64 {
    let (dr, dc) = delta(from, to);
    (dr * dr + dc * dc).sqrt()
}

/// Coordinate difference `b - a`, exact in `f64` for any pair of `i32`s.
#[inline]
fn delta(a: Cell, b: Cell) -> (f64, f64) {
    (
        f64::from(b.row) - f64::from(a.row),
        f64::from(b.col) - f64::from(a.col),
    )
}
