//! Gauss-Seidel Iteration
//!
//! Like Jacobi, but each sweep uses the components already updated in the
//! same sweep
//!
//! ```text
//! x_new[i] = (b[i] - Σ_{j<i} A[i][j] x_new[j] - Σ_{j>i} A[i][j] x[j]) / A[i][i]
//! ```

use super::algorithms::Algorithm;
use super::common::fixed_point;
use super::config::IterativeCfg;
use super::errors::IterativeError;
use super::matrix::{dot, Matrix};
use super::report::IterativeReport;


#[inline]
fn sweep(a: &Matrix, b: &[f64], x: &[f64], x_new: &mut [f64]) {
    x_new.copy_from_slice(x);
    for (i, row) in a.rows().enumerate() {
        let s1 = dot(&row[..i], &x_new[..i]);
        let s2 = dot(&row[i + 1..], &x[i + 1..]);
        x_new[i] = (b[i] - s1 - s2) / row[i];
    }
}


/// Solves `A x = b` by Gauss-Seidel iteration starting from `x0`.
///
/// Same arguments, defaults and errors as [`super::jacobi::jacobi`];
/// `algorithm` in the report is `"gauss_seidel"`.
pub fn gauss_seidel(a: &Matrix, b: &[f64], x0: &[f64], cfg: IterativeCfg) -> Result<IterativeReport, IterativeError> {
    fixed_point(Algorithm::GaussSeidel, a, b, x0, cfg, sweep)
}
