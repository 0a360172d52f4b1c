use log::warn;
use serde::Deserialize;
use thiserror::Error;

use crate::grid::Grid;
use crate::solver::SolverParams;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub grid: GridConfig,
    pub physics: PhysicsConfig,
    pub display: DisplayConfig,
    /// Stop after this many steps; 0 runs until the window closes.
    pub max_steps: usize,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub nx: usize,
    pub ny: usize,
    pub lx: f64,
    pub ly: f64,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub rho: f64,
    pub mu: f64,
    pub kappa: f64,
    pub gravity: f64,
    pub beta: f64,
    pub dt: f64,
    pub proj_h: f64,
    pub proj_iter: usize,
    pub source_strength: f64,
    pub mask_edge_frac: f64,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: usize,
    pub height: usize,
    pub target_fps: usize,
    pub steps_per_frame: usize,
    /// Velocity arrows per axis, subsampled from the grid.
    pub ticks: usize,
    /// Scalar value mapped to the hottest palette colour.
    pub scale_max: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            physics: PhysicsConfig::default(),
            display: DisplayConfig::default(),
            max_steps: 0,
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            nx: 25,
            ny: 25,
            lx: 1.0,
            ly: 1.0,
        }
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        let p = SolverParams::default();
        Self {
            rho: p.rho,
            mu: p.mu,
            kappa: p.kappa,
            gravity: p.gravity,
            beta: p.beta,
            dt: p.dt,
            proj_h: p.proj_h,
            proj_iter: p.proj_iter,
            source_strength: p.source_strength,
            mask_edge_frac: p.mask_edge_frac,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 640,
            target_fps: 30,
            steps_per_frame: 1,
            ticks: 20,
            scale_max: 2.0,
        }
    }
}

impl Config {
    pub fn grid(&self) -> Grid {
        Grid::new(self.grid.nx, self.grid.ny, self.grid.lx, self.grid.ly)
    }

    pub fn solver_params(&self) -> SolverParams {
        let p = &self.physics;
        SolverParams {
            rho: p.rho,
            mu: p.mu,
            kappa: p.kappa,
            gravity: p.gravity,
            beta: p.beta,
            dt: p.dt,
            proj_h: p.proj_h,
            proj_iter: p.proj_iter,
            source_strength: p.source_strength,
            mask_edge_frac: p.mask_edge_frac,
        }
    }
}

pub fn load(path: &str) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_string(),
        source,
    })?;
    serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_string(),
        source,
    })
}

/// Load `caldarium.yaml` from the working directory; a missing file is
/// normal, a broken one logs a warning. Either way the run proceeds with
/// defaults.
pub fn load_default() -> Config {
    let path = "caldarium.yaml";
    if !std::path::Path::new(path).exists() {
        return Config::default();
    }
    match load(path) {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("{e}; using defaults");
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let cfg = Config::default();
        assert_eq!(cfg.grid.nx, 25);
        assert_eq!(cfg.grid.ny, 25);
        assert_eq!(cfg.grid.lx, 1.0);
        assert_eq!(cfg.grid.ly, 1.0);
        assert_eq!(cfg.physics.rho, 2.0);
        assert_eq!(cfg.physics.mu, 0.1);
        assert_eq!(cfg.physics.kappa, 0.2);
        assert_eq!(cfg.physics.gravity, 10.0);
        assert_eq!(cfg.physics.beta, 2.0);
        assert_eq!(cfg.physics.dt, 5e-3);
        assert_eq!(cfg.physics.proj_h, 1e-3);
        assert_eq!(cfg.physics.proj_iter, 25);
        assert_eq!(cfg.physics.source_strength, 2.0);
        assert_eq!(cfg.physics.mask_edge_frac, 0.2);
        assert_eq!(cfg.display.width, 640);
        assert_eq!(cfg.display.height, 640);
        assert_eq!(cfg.display.target_fps, 30);
        assert_eq!(cfg.display.steps_per_frame, 1);
        assert_eq!(cfg.display.ticks, 20);
        assert_eq!(cfg.display.scale_max, 2.0);
        assert_eq!(cfg.max_steps, 0);
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = "physics:\n  mu: 0.05\nmax_steps: 500\n";
        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.physics.mu, 0.05);
        assert_eq!(cfg.physics.kappa, 0.2); // default
        assert_eq!(cfg.max_steps, 500);
        assert_eq!(cfg.grid.nx, 25); // default
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
grid:
  nx: 50
  ny: 40
  lx: 2.0
  ly: 1.5
physics:
  rho: 1.0
  mu: 0.02
  kappa: 0.1
  gravity: 9.8
  beta: 1.5
  dt: 0.002
  proj_h: 0.0005
  proj_iter: 40
  source_strength: 3.0
  mask_edge_frac: 0.25
display:
  width: 800
  height: 600
  target_fps: 60
  steps_per_frame: 4
  ticks: 16
  scale_max: 1.5
max_steps: 10000
"#;
        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.grid.nx, 50);
        assert_eq!(cfg.grid.ny, 40);
        assert_eq!(cfg.grid.lx, 2.0);
        assert_eq!(cfg.grid.ly, 1.5);
        assert_eq!(cfg.physics.rho, 1.0);
        assert_eq!(cfg.physics.mu, 0.02);
        assert_eq!(cfg.physics.kappa, 0.1);
        assert_eq!(cfg.physics.gravity, 9.8);
        assert_eq!(cfg.physics.beta, 1.5);
        assert_eq!(cfg.physics.dt, 0.002);
        assert_eq!(cfg.physics.proj_h, 0.0005);
        assert_eq!(cfg.physics.proj_iter, 40);
        assert_eq!(cfg.physics.source_strength, 3.0);
        assert_eq!(cfg.physics.mask_edge_frac, 0.25);
        assert_eq!(cfg.display.width, 800);
        assert_eq!(cfg.display.height, 600);
        assert_eq!(cfg.display.target_fps, 60);
        assert_eq!(cfg.display.steps_per_frame, 4);
        assert_eq!(cfg.display.ticks, 16);
        assert_eq!(cfg.display.scale_max, 1.5);
        assert_eq!(cfg.max_steps, 10000);
    }

    #[test]
    fn test_converters_mirror_config() {
        let cfg = Config::default();
        let grid = cfg.grid();
        assert_eq!(grid.nx(), cfg.grid.nx);
        assert_eq!(grid.ny(), cfg.grid.ny);
        let params = cfg.solver_params();
        assert_eq!(params.mu, cfg.physics.mu);
        assert_eq!(params.proj_iter, cfg.physics.proj_iter);
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let cfg = load_default();
        assert_eq!(cfg.grid.nx, 25);
        assert_eq!(cfg.physics.rho, 2.0);
    }

    #[test]
    fn test_load_reports_missing_path() {
        let err = load("/nonexistent/caldarium.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }), "expected Io error, got {err}");
    }
}
