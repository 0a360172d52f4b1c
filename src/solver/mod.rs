mod adi;
pub mod diagnostics;
pub mod operators;
mod params;
pub mod poisson;
pub mod projection;
pub mod tridiag;

pub use adi::{advance_dirichlet, advance_mixed};
pub use params::SolverParams;

use crate::grid::Grid;

/// The time integrator: owns the grid, the parameter set and the
/// precomputed projection taper, and advances one full timestep at a time.
pub struct FlowSolver {
    grid: Grid,
    params: SolverParams,
    mask: Vec<f64>,
}

impl FlowSolver {
    pub fn new(grid: Grid, params: SolverParams) -> Self {
        let mask = projection::smoothing_mask(&grid, params.mask_edge_frac);
        Self { grid, params, mask }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn params(&self) -> &SolverParams {
        &self.params
    }

    /// One full timestep. Advances both velocity components (Dirichlet
    /// edges, viscosity `mu`, forcing `fx`/`fy`) and the scalar (mixed
    /// edges, diffusivity `kappa`, source `s`), all against the same frozen
    /// pre-update velocity, then projects the new velocity toward zero
    /// divergence. Returns fresh `(u, v, q)` fields.
    pub fn step(
        &self,
        u: &[f64],
        v: &[f64],
        q: &[f64],
        fx: &[f64],
        fy: &[f64],
        s: &[f64],
    ) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let (u1, v1, q1) = self.step_no_projection(u, v, q, fx, fy, s);
        let (u2, v2) = projection::project(
            &self.grid,
            &self.mask,
            &u1,
            &v1,
            self.params.proj_h,
            self.params.proj_iter,
        );
        (u2, v2, q1)
    }

    /// The advection-diffusion part of a step, without the projection.
    /// Exposed for diagnostics and tests.
    pub fn step_no_projection(
        &self,
        u: &[f64],
        v: &[f64],
        q: &[f64],
        fx: &[f64],
        fy: &[f64],
        s: &[f64],
    ) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let p = &self.params;
        let u1 = adi::advance_dirichlet(&self.grid, u, v, p.rho, u, fx, p.mu, p.dt);
        let v1 = adi::advance_dirichlet(&self.grid, u, v, p.rho, v, fy, p.mu, p.dt);
        let q1 = adi::advance_mixed(&self.grid, u, v, p.rho, q, s, p.kappa, p.dt);
        (u1, v1, q1)
    }
}
