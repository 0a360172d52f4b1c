//! Simulation state: the evolving fields plus the forcing and source
//! fields that drive them. The heat-exchanger scenario lives here: a linear
//! scalar ramp (hot left, cold right), a smooth heat source in the
//! lower-left quadrant, and buoyancy forcing recomputed from the scalar
//! after every step.

use crate::grid::Grid;
use crate::solver::{operators, projection, FlowSolver, SolverParams};

pub struct SimState {
    pub u: Vec<f64>,
    pub v: Vec<f64>,
    pub q: Vec<f64>,
    /// Horizontal forcing (zero in this scenario).
    pub fx: Vec<f64>,
    /// Vertical forcing: buoyancy, a function of the current scalar.
    pub fy: Vec<f64>,
    /// Heat source, fixed for the whole run.
    pub s: Vec<f64>,
    pub step_count: usize,
}

/// Buoyancy forcing `fy = -rho g (1 + beta dQ/dy)`: the background weight
/// plus a convective term from the scalar's vertical gradient.
pub fn buoyancy_forcing(grid: &Grid, params: &SolverParams, q: &[f64]) -> Vec<f64> {
    let dq = operators::partial_y(grid, q);
    dq.iter()
        .map(|d| -params.rho * params.gravity * (1.0 + params.beta * d))
        .collect()
}

/// Fixed heat source: a smooth bump over the lower-left quadrant, peak
/// `source_strength * rho`.
fn heat_source(grid: &Grid, params: &SolverParams) -> Vec<f64> {
    let (lx, ly) = (grid.lx(), grid.ly());
    let mut s = grid.zeros();
    for i in 0..=grid.nx() {
        let wx = projection::rect_smooth(grid.x(i) + lx / 2.0, 0.1 * lx, lx / 2.0);
        for j in 0..=grid.ny() {
            let wy = projection::rect_smooth(grid.y(j) + ly / 2.0, 0.1 * ly, ly / 2.0);
            s[grid.idx(i, j)] = params.source_strength * params.rho * wx * wy;
        }
    }
    s
}

impl SimState {
    /// Initial state: fluid at rest, scalar ramp `Q = rho (1/2 - x/lx)`
    /// running hot-to-cold across the domain.
    pub fn new(grid: &Grid, params: &SolverParams) -> Self {
        let mut q = grid.zeros();
        for i in 0..=grid.nx() {
            let val = params.rho * (0.5 - grid.x(i) / grid.lx());
            for j in 0..=grid.ny() {
                q[grid.idx(i, j)] = val;
            }
        }
        let fy = buoyancy_forcing(grid, params, &q);
        Self {
            u: grid.zeros(),
            v: grid.zeros(),
            q,
            fx: grid.zeros(),
            fy,
            s: heat_source(grid, params),
            step_count: 0,
        }
    }

    /// Advance one timestep and refresh the buoyancy forcing from the new
    /// scalar field.
    pub fn advance(&mut self, solver: &FlowSolver) {
        let (u, v, q) = solver.step(&self.u, &self.v, &self.q, &self.fx, &self.fy, &self.s);
        self.u = u;
        self.v = v;
        self.q = q;
        self.fy = buoyancy_forcing(solver.grid(), solver.params(), &self.q);
        self.step_count += 1;
    }
}
