//! Run diagnostics shared by the driver's periodic logging and the tests.

use super::operators;
use crate::grid::Grid;

/// Mean absolute divergence over the interior.
pub fn divergence_l1(grid: &Grid, u: &[f64], v: &[f64]) -> f64 {
    let div = operators::divergence(grid, u, v);
    let mut sum = 0.0;
    let mut count = 0usize;
    for i in 1..grid.nx() {
        for j in 1..grid.ny() {
            sum += div[grid.idx(i, j)].abs();
            count += 1;
        }
    }
    if count > 0 { sum / count as f64 } else { 0.0 }
}

/// Spatial mean of a field, boundary layer included.
pub fn field_mean(f: &[f64]) -> f64 {
    if f.is_empty() {
        return 0.0;
    }
    f.iter().sum::<f64>() / f.len() as f64
}

/// Largest speed anywhere in the field.
pub fn max_speed(u: &[f64], v: &[f64]) -> f64 {
    u.iter()
        .zip(v.iter())
        .map(|(a, b)| (a * a + b * b).sqrt())
        .fold(0.0_f64, f64::max)
}

/// Volume-averaged kinetic energy over the interior: `0.5 <u^2 + v^2>`.
pub fn kinetic_energy(grid: &Grid, u: &[f64], v: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for i in 1..grid.nx() {
        for j in 1..grid.ny() {
            let ii = grid.idx(i, j);
            sum += u[ii] * u[ii] + v[ii] * v[ii];
            count += 1;
        }
    }
    if count > 0 { 0.5 * sum / count as f64 } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(8, 8, 1.0, 1.0)
    }

    #[test]
    fn test_divergence_l1_zero_for_constant_flow() {
        let g = grid();
        let u = vec![0.4; g.len()];
        let v = vec![-0.2; g.len()];
        assert_eq!(divergence_l1(&g, &u, &v), 0.0);
    }

    #[test]
    fn test_field_mean() {
        let g = grid();
        let f = vec![2.5; g.len()];
        assert!((field_mean(&f) - 2.5).abs() < 1e-12);
        assert_eq!(field_mean(&[]), 0.0);
    }

    #[test]
    fn test_max_speed() {
        let g = grid();
        let mut u = g.zeros();
        let mut v = g.zeros();
        u[5] = 3.0;
        v[5] = 4.0;
        assert!((max_speed(&u, &v) - 5.0).abs() < 1e-12, "3-4-5 triangle");
    }

    #[test]
    fn test_kinetic_energy_uniform_flow() {
        let g = grid();
        let u = vec![1.0; g.len()];
        let v = g.zeros();
        let ke = kinetic_energy(&g, &u, &v);
        assert!((ke - 0.5).abs() < 1e-12, "KE of unit flow should be 0.5, got {}", ke);
    }
}
