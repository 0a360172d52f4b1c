//! Chorin projection: subtract the gradient of a pressure-like potential to
//! push the velocity field toward zero divergence. The correction is tapered
//! by a smooth window so it does not fight the fixed boundary values.

use log::trace;

use super::{diagnostics, operators, poisson};
use crate::grid::Grid;

/// Smooth rectangular window on `[0, l]`: polynomial ramp from 0 to 1 over
/// width `q`, flat 1 in the middle, mirrored ramp back down. C1 at the
/// seams, 0 outside.
pub fn rect_smooth(x: f64, q: f64, l: f64) -> f64 {
    if (0.0..=q).contains(&x) {
        x * x * (x - 2.0 * q) * (x - 2.0 * q) / q.powi(4)
    } else if x > q && x < l - q {
        1.0
    } else if (l - q..=l).contains(&x) {
        (l - x) * (l - x) * (l - x - 2.0 * q) * (l - x - 2.0 * q) / q.powi(4)
    } else {
        0.0
    }
}

/// Precompute the projection taper: a product of 1D smooth windows, 1 in
/// the bulk and falling to 0 over the outer `edge_frac` of each axis.
/// Built once at setup and never mutated.
pub fn smoothing_mask(grid: &Grid, edge_frac: f64) -> Vec<f64> {
    let (lx, ly) = (grid.lx(), grid.ly());
    let (qx, qy) = (edge_frac * lx, edge_frac * ly);
    let mut mask = grid.zeros();
    for i in 0..=grid.nx() {
        let wx = rect_smooth(grid.x(i) + lx / 2.0, qx, lx);
        for j in 0..=grid.ny() {
            let wy = rect_smooth(grid.y(j) + ly / 2.0, qy, ly);
            mask[grid.idx(i, j)] = wx * wy;
        }
    }
    mask
}

/// Project `(u, v)` toward a divergence-free field: solve for a potential
/// `p` with the divergence as source, then subtract `mask * grad(p)`.
/// The result is only approximately divergence-free, bounded by the fixed
/// Poisson iteration budget.
pub fn project(
    grid: &Grid,
    mask: &[f64],
    u: &[f64],
    v: &[f64],
    h: f64,
    iterations: usize,
) -> (Vec<f64>, Vec<f64>) {
    assert_eq!(mask.len(), grid.len(), "mask size must match grid");
    assert_eq!(u.len(), grid.len(), "u size must match grid");
    assert_eq!(v.len(), grid.len(), "v size must match grid");

    let div = operators::divergence(grid, u, v);
    let p = poisson::solve(grid, &grid.zeros(), &div, h, iterations);
    let px = operators::partial_x(grid, &p);
    let py = operators::partial_y(grid, &p);

    let u1: Vec<f64> = u
        .iter()
        .zip(mask.iter().zip(px.iter()))
        .map(|(vel, (m, g))| vel - m * g)
        .collect();
    let v1: Vec<f64> = v
        .iter()
        .zip(mask.iter().zip(py.iter()))
        .map(|(vel, (m, g))| vel - m * g)
        .collect();

    if log::log_enabled!(log::Level::Trace) {
        trace!(
            "projection: interior |div| {:.3e} -> {:.3e}",
            diagnostics::divergence_l1(grid, u, v),
            diagnostics::divergence_l1(grid, &u1, &v1),
        );
    }

    (u1, v1)
}
