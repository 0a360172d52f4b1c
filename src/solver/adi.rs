//! Alternating-Direction-Implicit advection-diffusion stepper.
//!
//! One timestep of `rho (dF/dt + u dF/dx + v dF/dy) = kappa lap(F) + S`
//! is split into two implicit 1D sweeps: first along y (one tridiagonal
//! system per interior x-line), then along x, with the cross-axis advection
//! and diffusion taken explicitly from the previous sweep's result.
//!
//! Both boundary-condition families share a single sweep routine; they
//! differ only in the edge rule applied per axis. A pinned edge keeps the
//! input field's boundary values and injects them into the neighbouring
//! interior equations; a zero-gradient edge eliminates the boundary unknown
//! by folding its diagonal contribution into the adjacent interior row, then
//! copies the nearest interior value outward.

use rayon::prelude::*;

use super::{operators, tridiag};
use crate::grid::Grid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Axis {
    X,
    Y,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum EdgeRule {
    /// Boundary values fixed to the input field's edges.
    Pinned,
    /// Zero-gradient: boundary copies the nearest interior line.
    ZeroGradient,
}

/// Coefficients of one implicit sweep.
pub(super) struct SweepTerms<'a> {
    /// Main-diagonal pseudo-time coefficient (`2 rho / dt` for the flow
    /// steps, `1` for the Poisson relaxation).
    pub alpha: f64,
    /// Diffusion coefficient.
    pub kappa: f64,
    /// Advective transport, if any: density factor, velocity component
    /// along the implicit axis, velocity component along the explicit axis.
    pub advection: Option<(f64, &'a [f64], &'a [f64])>,
}

/// One implicit sweep along `axis`, solving a tridiagonal system per
/// interior grid line. Lines are independent and solved in parallel; the
/// caller sequences the two sweeps of a full step.
pub(super) fn sweep(
    grid: &Grid,
    axis: Axis,
    x_edges: EdgeRule,
    y_edges: EdgeRule,
    terms: &SweepTerms,
    f: &[f64],
    src: &[f64],
) -> Vec<f64> {
    assert_eq!(f.len(), grid.len(), "field size must match grid");
    assert_eq!(src.len(), grid.len(), "source size must match grid");
    if let Some((_, along, cross)) = terms.advection {
        assert_eq!(along.len(), grid.len(), "velocity size must match grid");
        assert_eq!(cross.len(), grid.len(), "velocity size must match grid");
    }

    let (nx, ny) = (grid.nx(), grid.ny());
    let (spacing, n_lines, n_unknowns, implicit_rule) = match axis {
        Axis::Y => (grid.dy(), nx, ny - 1, y_edges),
        Axis::X => (grid.dx(), ny, nx - 1, x_edges),
    };
    let at = |line: usize, pos: usize| match axis {
        Axis::Y => grid.idx(line, pos),
        Axis::X => grid.idx(pos, line),
    };

    // Explicit cross-axis terms, evaluated once from the incoming field.
    let (cross_adv, cross_diff) = match axis {
        Axis::Y => (
            terms.advection.map(|_| operators::partial_x(grid, f)),
            operators::partial2_x(grid, f),
        ),
        Axis::X => (
            terms.advection.map(|_| operators::partial_y(grid, f)),
            operators::partial2_y(grid, f),
        ),
    };

    let inv_sq = 1.0 / (spacing * spacing);
    let diag = terms.alpha + 2.0 * terms.kappa * inv_sq;

    let lines: Vec<(usize, Vec<f64>)> = (1..n_lines)
        .into_par_iter()
        .map(|line| {
            let mut a = vec![0.0; n_unknowns];
            let mut b = vec![diag; n_unknowns];
            let mut c = vec![0.0; n_unknowns];
            let mut rhs = vec![0.0; n_unknowns];

            for m in 0..n_unknowns {
                let ii = at(line, m + 1);
                let upwind = match terms.advection {
                    Some((rho, along, _)) => 0.5 / spacing * rho * along[ii],
                    None => 0.0,
                };
                a[m] = -upwind - terms.kappa * inv_sq;
                c[m] = upwind - terms.kappa * inv_sq;

                rhs[m] = terms.alpha * f[ii] + terms.kappa * cross_diff[ii] + src[ii];
                if let (Some((rho, _, cross_vel)), Some(cadv)) =
                    (terms.advection, cross_adv.as_ref())
                {
                    rhs[m] -= rho * cross_vel[ii] * cadv[ii];
                }
            }

            match implicit_rule {
                EdgeRule::Pinned => {
                    // Known boundary values feed the adjacent interior rows.
                    rhs[0] -= a[0] * f[at(line, 0)];
                    rhs[n_unknowns - 1] -= c[n_unknowns - 1] * f[at(line, n_unknowns + 1)];
                }
                EdgeRule::ZeroGradient => {
                    // Boundary unknown equals its neighbour; substitute it out.
                    b[0] += a[0];
                    b[n_unknowns - 1] += c[n_unknowns - 1];
                }
            }

            (line, tridiag::solve(&a, &b, &c, &rhs))
        })
        .collect();

    let mut out = grid.zeros();
    for (line, vals) in lines {
        for (m, v) in vals.into_iter().enumerate() {
            out[at(line, m + 1)] = v;
        }
    }

    // Edge copy-out, x edges first, then y (y wins the corners).
    match x_edges {
        EdgeRule::Pinned => {
            for j in 0..=ny {
                out[grid.idx(0, j)] = f[grid.idx(0, j)];
                out[grid.idx(nx, j)] = f[grid.idx(nx, j)];
            }
        }
        EdgeRule::ZeroGradient => {
            for j in 0..=ny {
                out[grid.idx(0, j)] = out[grid.idx(1, j)];
                out[grid.idx(nx, j)] = out[grid.idx(nx - 1, j)];
            }
        }
    }
    match y_edges {
        EdgeRule::Pinned => {
            for i in 0..=nx {
                out[grid.idx(i, 0)] = f[grid.idx(i, 0)];
                out[grid.idx(i, ny)] = f[grid.idx(i, ny)];
            }
        }
        EdgeRule::ZeroGradient => {
            for i in 0..=nx {
                out[grid.idx(i, 0)] = out[grid.idx(i, 1)];
                out[grid.idx(i, ny)] = out[grid.idx(i, ny - 1)];
            }
        }
    }

    out
}

/// Advance `f` one timestep with boundary values pinned on every edge.
/// `u`, `v` is the frozen velocity field, `rho` the density-like
/// coefficient, `src` the external source, `kappa` the diffusion
/// coefficient.
#[allow(clippy::too_many_arguments)]
pub fn advance_dirichlet(
    grid: &Grid,
    u: &[f64],
    v: &[f64],
    rho: f64,
    f: &[f64],
    src: &[f64],
    kappa: f64,
    dt: f64,
) -> Vec<f64> {
    let alpha = 2.0 * rho / dt;
    let half = sweep(
        grid,
        Axis::Y,
        EdgeRule::Pinned,
        EdgeRule::Pinned,
        &SweepTerms { alpha, kappa, advection: Some((rho, v, u)) },
        f,
        src,
    );
    sweep(
        grid,
        Axis::X,
        EdgeRule::Pinned,
        EdgeRule::Pinned,
        &SweepTerms { alpha, kappa, advection: Some((rho, u, v)) },
        &half,
        src,
    )
}

/// Advance `f` one timestep with boundary values pinned on the x edges and
/// zero-gradient extrapolation on the y edges.
#[allow(clippy::too_many_arguments)]
pub fn advance_mixed(
    grid: &Grid,
    u: &[f64],
    v: &[f64],
    rho: f64,
    f: &[f64],
    src: &[f64],
    kappa: f64,
    dt: f64,
) -> Vec<f64> {
    let alpha = 2.0 * rho / dt;
    let half = sweep(
        grid,
        Axis::Y,
        EdgeRule::Pinned,
        EdgeRule::ZeroGradient,
        &SweepTerms { alpha, kappa, advection: Some((rho, v, u)) },
        f,
        src,
    );
    sweep(
        grid,
        Axis::X,
        EdgeRule::Pinned,
        EdgeRule::ZeroGradient,
        &SweepTerms { alpha, kappa, advection: Some((rho, u, v)) },
        &half,
        src,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const RHO: f64 = 2.0;
    const KAPPA: f64 = 0.2;
    const DT: f64 = 5e-3;

    fn grid() -> Grid {
        Grid::new(16, 16, 1.0, 1.0)
    }

    #[test]
    fn test_dirichlet_uniform_field_is_steady() {
        let g = grid();
        let f = vec![0.7; g.len()];
        let zero = g.zeros();
        let out = advance_dirichlet(&g, &zero, &zero, RHO, &f, &zero, KAPPA, DT);
        for (m, (got, want)) in out.iter().zip(f.iter()).enumerate() {
            assert!(
                (got - want).abs() < 1e-10,
                "uniform field should be a steady state, cell {}: {} vs {}",
                m,
                got,
                want
            );
        }
    }

    #[test]
    fn test_mixed_uniform_field_is_steady() {
        let g = grid();
        let f = vec![-1.3; g.len()];
        let zero = g.zeros();
        let out = advance_mixed(&g, &zero, &zero, RHO, &f, &zero, KAPPA, DT);
        for (m, (got, want)) in out.iter().zip(f.iter()).enumerate() {
            assert!(
                (got - want).abs() < 1e-10,
                "uniform field should be a steady state, cell {}: {} vs {}",
                m,
                got,
                want
            );
        }
    }

    #[test]
    fn test_dirichlet_preserves_boundary_values() {
        let g = grid();
        let mut f = g.zeros();
        for i in 0..=g.nx() {
            for j in 0..=g.ny() {
                f[g.idx(i, j)] = g.x(i) + 2.0 * g.y(j) * g.y(j);
            }
        }
        let zero = g.zeros();
        let out = advance_dirichlet(&g, &zero, &zero, RHO, &f, &zero, KAPPA, DT);
        for j in 0..=g.ny() {
            assert_eq!(out[g.idx(0, j)], f[g.idx(0, j)], "left edge must be pinned at j={}", j);
            assert_eq!(
                out[g.idx(g.nx(), j)],
                f[g.idx(g.nx(), j)],
                "right edge must be pinned at j={}",
                j
            );
        }
        for i in 1..g.nx() {
            assert_eq!(out[g.idx(i, 0)], f[g.idx(i, 0)], "bottom edge must be pinned at i={}", i);
            assert_eq!(
                out[g.idx(i, g.ny())],
                f[g.idx(i, g.ny())],
                "top edge must be pinned at i={}",
                i
            );
        }
    }

    #[test]
    fn test_mixed_enforces_zero_gradient_on_y_edges() {
        let g = grid();
        let mut f = g.zeros();
        for i in 0..=g.nx() {
            for j in 0..=g.ny() {
                f[g.idx(i, j)] = (g.x(i) * 3.1).sin() + 0.5 * g.y(j);
            }
        }
        let zero = g.zeros();
        let out = advance_mixed(&g, &zero, &zero, RHO, &f, &zero, KAPPA, DT);
        for i in 0..=g.nx() {
            assert_eq!(
                out[g.idx(i, 0)],
                out[g.idx(i, 1)],
                "bottom edge should copy its interior neighbour at i={}",
                i
            );
            assert_eq!(
                out[g.idx(i, g.ny())],
                out[g.idx(i, g.ny() - 1)],
                "top edge should copy its interior neighbour at i={}",
                i
            );
        }
        // x edges stay pinned to the first sweep's x edges, which carry the
        // input values.
        for j in 1..g.ny() {
            assert_eq!(out[g.idx(0, j)], f[g.idx(0, j)], "left edge must be pinned at j={}", j);
        }
    }

    #[test]
    fn test_diffusion_smooths_a_spike() {
        let g = grid();
        let mut f = g.zeros();
        let mid = g.idx(g.nx() / 2, g.ny() / 2);
        f[mid] = 100.0;
        let zero = g.zeros();
        let out = advance_dirichlet(&g, &zero, &zero, RHO, &f, &zero, KAPPA, DT);
        assert!(out[mid] < 100.0, "spike should decay, got {}", out[mid]);
        let neighbour = out[g.idx(g.nx() / 2 + 1, g.ny() / 2)];
        assert!(neighbour > 0.0, "neighbours should pick up mass, got {}", neighbour);
    }

    #[test]
    fn test_advection_moves_blob_downstream() {
        let g = grid();
        let mut f = g.zeros();
        for i in 0..=g.nx() {
            for j in 0..=g.ny() {
                let (x, y) = (g.x(i), g.y(j));
                f[g.idx(i, j)] = (-(x * x + y * y) / 0.02).exp();
            }
        }
        let u = vec![1.0; g.len()];
        let v = g.zeros();
        let zero = g.zeros();
        let out = advance_dirichlet(&g, &u, &v, RHO, &f, &zero, 0.0, DT);
        let mid = g.ny() / 2;
        let right = g.idx(g.nx() / 2 + 2, mid);
        let left = g.idx(g.nx() / 2 - 2, mid);
        assert!(
            out[right] > f[right],
            "downstream side should grow: {} -> {}",
            f[right],
            out[right]
        );
        assert!(
            out[left] < f[left],
            "upstream side should shrink: {} -> {}",
            f[left],
            out[left]
        );
    }
}
