//! Thomas algorithm for tridiagonal linear systems.

/// Solve a tridiagonal system in O(n): `a` is the sub-diagonal, `b` the main
/// diagonal, `c` the super-diagonal, `d` the right-hand side. `a[0]` and
/// `c[n-1]` are ignored.
///
/// The system must be well conditioned for elimination without pivoting; a
/// zero pivot is a fatal numerical fault (the result degenerates to
/// inf/NaN), not a recoverable error.
///
/// # Panics
///
/// Panics if the sequences differ in length or have fewer than 2 entries.
pub fn solve(a: &[f64], b: &[f64], c: &[f64], d: &[f64]) -> Vec<f64> {
    let n = d.len();
    assert!(n >= 2, "tridiagonal system needs at least 2 rows, got {}", n);
    assert!(
        a.len() == n && b.len() == n && c.len() == n,
        "coefficient lengths must match rhs: a={} b={} c={} d={}",
        a.len(),
        b.len(),
        c.len(),
        n
    );

    // Forward elimination: modified super-diagonal cc and rhs dd.
    let mut cc = vec![0.0; n - 1];
    let mut dd = vec![0.0; n];
    cc[0] = c[0] / b[0];
    dd[0] = d[0] / b[0];
    for i in 1..n - 1 {
        let base = b[i] - a[i] * cc[i - 1];
        cc[i] = c[i] / base;
        dd[i] = (d[i] - a[i] * dd[i - 1]) / base;
    }
    let base = b[n - 1] - a[n - 1] * cc[n - 2];
    dd[n - 1] = (d[n - 1] - a[n - 1] * dd[n - 2]) / base;

    // Back substitution.
    let mut x = vec![0.0; n];
    x[n - 1] = dd[n - 1];
    for i in (0..n - 1).rev() {
        x[i] = dd[i] - cc[i] * x[i + 1];
    }
    x
}
