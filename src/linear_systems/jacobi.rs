//! Jacobi Iteration
//!
//! [Jacobi method](https://en.wikipedia.org/wiki/Jacobi_method): every
//! component of the new iterate is computed from the previous full iterate
//!
//! ```text
//! x_new[i] = (b[i] - Σ_{j≠i} A[i][j] x[j]) / A[i][i]
//! ```
//!
//! Converges for strictly diagonally dominant `A`.

use super::algorithms::Algorithm;
use super::common::fixed_point;
use super::config::IterativeCfg;
use super::errors::IterativeError;
use super::matrix::Matrix;
use super::report::IterativeReport;


#[inline]
fn sweep(a: &Matrix, b: &[f64], x: &[f64], x_new: &mut [f64]) {
    for (i, row) in a.rows().enumerate() {
        let s: f64 = row.iter()
            .zip(x)
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, (aij, xj))| aij * xj)
            .sum();
        x_new[i] = (b[i] - s) / row[i];
    }
}


/// Solves `A x = b` by Jacobi iteration starting from `x0`.
///
/// # Arguments
///
/// ┌ `a`   - `n × n` coefficient matrix, nonzero diagonal assumed.
/// ├ `b`   - right-hand side of length `n`.
/// ├ `x0`  - initial guess of length `n`.
/// └ `cfg` - [`IterativeCfg`]
///    Defaults:
///    ├ cfg.tol      = 1e-10
///    └ cfg.max_iter = 100
///
/// # Returns
///
/// [`IterativeReport`] with the converged iterate, the sweep count and the
/// final max step. `algorithm` is `"jacobi"`.
///
/// # Errors
///
/// ├ [`IterativeError::DidNotConverge`] - `max_iter` sweeps without meeting `tol`.
/// └ [`IterativeError::Common`]         - shape, configuration, or (strict) zero diagonal.
pub fn jacobi(a: &Matrix, b: &[f64], x0: &[f64], cfg: IterativeCfg) -> Result<IterativeReport, IterativeError> {
    fixed_point(Algorithm::Jacobi, a, b, x0, cfg, sweep)
}
