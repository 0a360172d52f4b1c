/// Physical and numerical parameters of the flow solver. Built once from
/// configuration and threaded through every component call; nothing here
/// changes during a run.
#[derive(Clone, Debug)]
pub struct SolverParams {
    /// Density-like coefficient multiplying the material derivative.
    pub rho: f64,
    /// Kinematic viscosity (velocity diffusion).
    pub mu: f64,
    /// Scalar diffusivity (heat/mass diffusion).
    pub kappa: f64,
    /// Gravitational acceleration used by the buoyancy forcing.
    pub gravity: f64,
    /// Convection coefficient in the buoyancy forcing.
    pub beta: f64,
    /// Timestep.
    pub dt: f64,
    /// Pseudo-timestep of the projection's Poisson relaxation.
    pub proj_h: f64,
    /// Fixed Poisson iteration budget per projection.
    pub proj_iter: usize,
    /// Peak heat-source amplitude, in units of rho.
    pub source_strength: f64,
    /// Fraction of each axis over which the projection taper falls to zero.
    pub mask_edge_frac: f64,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            rho: 2.0,
            mu: 0.1,
            kappa: 0.2,
            gravity: 10.0,
            beta: 2.0,
            dt: 5e-3,
            proj_h: 1e-3,
            proj_iter: 25,
            source_strength: 2.0,
            mask_edge_frac: 0.2,
        }
    }
}
