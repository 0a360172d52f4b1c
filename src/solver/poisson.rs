//! Pseudo-time Poisson solver.
//!
//! Relaxes `w` toward a steady state of `w = w - h F + h lap(w)` by
//! repeated ADI half-steps, which approximates a solution of the Poisson
//! equation `lap(w) = F`. The iteration count is a fixed budget chosen by
//! the caller; nothing here detects convergence.

use super::adi::{sweep, Axis, EdgeRule, SweepTerms};
use crate::grid::Grid;

/// One relaxation step: an implicit y sweep followed by an implicit x
/// sweep, both with zero-gradient folding at the edges. `neg_src` must
/// hold `-h * F`.
fn relax(grid: &Grid, w: &[f64], neg_src: &[f64], h: f64) -> Vec<f64> {
    let terms = SweepTerms { alpha: 1.0, kappa: h, advection: None };
    let half = sweep(
        grid,
        Axis::Y,
        EdgeRule::ZeroGradient,
        EdgeRule::ZeroGradient,
        &terms,
        w,
        neg_src,
    );
    sweep(
        grid,
        Axis::X,
        EdgeRule::ZeroGradient,
        EdgeRule::ZeroGradient,
        &terms,
        &half,
        neg_src,
    )
}

/// Approximate the solution of `lap(w) = source` starting from `initial`,
/// using `iterations` relaxation steps with pseudo-timestep `h`. More
/// iterations buy a better solution; the budget is fixed, not adaptive.
pub fn solve(grid: &Grid, initial: &[f64], source: &[f64], h: f64, iterations: usize) -> Vec<f64> {
    assert_eq!(initial.len(), grid.len(), "field size must match grid");
    assert_eq!(source.len(), grid.len(), "source size must match grid");
    let neg_src: Vec<f64> = source.iter().map(|s| -h * s).collect();
    let mut w = initial.to_vec();
    for _ in 0..iterations {
        w = relax(grid, &w, &neg_src, h);
    }
    w
}
