//! Centered finite-difference operators on padded 2D fields.
//!
//! All operators are pure and defined on the interior only; boundary rows
//! and columns of the output stay zero. Boundary treatment is the caller's
//! job.

use crate::grid::Grid;

/// First derivative along x: `(f[i+1,j] - f[i-1,j]) / (2 dx)`.
pub fn partial_x(grid: &Grid, f: &[f64]) -> Vec<f64> {
    assert_eq!(f.len(), grid.len(), "field size must match grid");
    let mut out = grid.zeros();
    let inv = 1.0 / (2.0 * grid.dx());
    for i in 1..grid.nx() {
        for j in 1..grid.ny() {
            out[grid.idx(i, j)] = (f[grid.idx(i + 1, j)] - f[grid.idx(i - 1, j)]) * inv;
        }
    }
    out
}

/// First derivative along y: `(f[i,j+1] - f[i,j-1]) / (2 dy)`.
pub fn partial_y(grid: &Grid, f: &[f64]) -> Vec<f64> {
    assert_eq!(f.len(), grid.len(), "field size must match grid");
    let mut out = grid.zeros();
    let inv = 1.0 / (2.0 * grid.dy());
    for i in 1..grid.nx() {
        for j in 1..grid.ny() {
            out[grid.idx(i, j)] = (f[grid.idx(i, j + 1)] - f[grid.idx(i, j - 1)]) * inv;
        }
    }
    out
}

/// Second derivative along x: `(f[i+1,j] - 2 f[i,j] + f[i-1,j]) / dx^2`.
pub fn partial2_x(grid: &Grid, f: &[f64]) -> Vec<f64> {
    assert_eq!(f.len(), grid.len(), "field size must match grid");
    let mut out = grid.zeros();
    let inv = 1.0 / (grid.dx() * grid.dx());
    for i in 1..grid.nx() {
        for j in 1..grid.ny() {
            out[grid.idx(i, j)] =
                (f[grid.idx(i + 1, j)] - 2.0 * f[grid.idx(i, j)] + f[grid.idx(i - 1, j)]) * inv;
        }
    }
    out
}

/// Second derivative along y: `(f[i,j+1] - 2 f[i,j] + f[i,j-1]) / dy^2`.
pub fn partial2_y(grid: &Grid, f: &[f64]) -> Vec<f64> {
    assert_eq!(f.len(), grid.len(), "field size must match grid");
    let mut out = grid.zeros();
    let inv = 1.0 / (grid.dy() * grid.dy());
    for i in 1..grid.nx() {
        for j in 1..grid.ny() {
            out[grid.idx(i, j)] =
                (f[grid.idx(i, j + 1)] - 2.0 * f[grid.idx(i, j)] + f[grid.idx(i, j - 1)]) * inv;
        }
    }
    out
}

/// Laplacian: `d2f/dx2 + d2f/dy2`.
pub fn laplacian(grid: &Grid, f: &[f64]) -> Vec<f64> {
    let d2x = partial2_x(grid, f);
    let d2y = partial2_y(grid, f);
    d2x.iter().zip(d2y.iter()).map(|(a, b)| a + b).collect()
}

/// Divergence of a vector field: `du/dx + dv/dy`.
pub fn divergence(grid: &Grid, u: &[f64], v: &[f64]) -> Vec<f64> {
    let du = partial_x(grid, u);
    let dv = partial_y(grid, v);
    du.iter().zip(dv.iter()).map(|(a, b)| a + b).collect()
}
