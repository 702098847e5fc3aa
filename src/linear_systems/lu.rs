//! LU Decomposition
//!
//! Doolittle factorization `A = L U` without pivoting: `L` is unit
//! lower-triangular, `U` upper-triangular. Matrices that need a row
//! interchange (e.g. a zero leading principal minor) divide by a zero
//! `U[i][i]` and produce inf/NaN unless strict mode is on.

use super::algorithms::Algorithm;
use super::common::{check_len, check_pivot, warn_non_finite};
use super::config::DirectCfg;
use super::errors::LinearSystemError;
use super::matrix::Matrix;

const ALGORITHM: Algorithm = Algorithm::LuDecomposition;


/// Result of [`lu_decompose`].
///
/// [`LuFactors`]
/// - `l` : unit lower-triangular factor
/// - `u` : upper-triangular factor
#[derive(Debug, Clone, PartialEq)]
pub struct LuFactors {
    l: Matrix,
    u: Matrix,
}

impl LuFactors {
    pub fn l(&self) -> &Matrix { &self.l }
    pub fn u(&self) -> &Matrix { &self.u }

    pub fn into_parts(self) -> (Matrix, Matrix) {
        (self.l, self.u)
    }

    /// `L · U`, which reproduces `A` up to rounding.
    pub fn reconstruct(&self) -> Result<Matrix, LinearSystemError> {
        self.l.matmul(&self.u)
    }

    /// Solves `A x = b` with the stored factors.
    ///
    /// Forward substitution `L y = b` (unit diagonal) followed by back
    /// substitution `U x = y`. A zero `U[i][i]` is not checked here.
    pub fn solve(&self, b: &[f64]) -> Result<Vec<f64>, LinearSystemError> {
        let n = self.l.n();
        check_len(n, b.len())?;

        let mut y = vec![0.0; n];
        for i in 0..n {
            let s: f64 = (0..i).map(|j| self.l[(i, j)] * y[j]).sum();
            y[i] = b[i] - s;
        }

        let mut x = vec![0.0; n];
        for i in (0..n).rev() {
            let s: f64 = (i + 1..n).map(|j| self.u[(i, j)] * x[j]).sum();
            x[i] = (y[i] - s) / self.u[(i, i)];
        }

        warn_non_finite(ALGORITHM, &x);
        Ok(x)
    }
}


/// Computes the Doolittle LU factorization of `a`.
///
/// For each `i`:
///
/// ```text
/// U[i][k] = A[i][k] - Σ_{j<i} L[i][j] U[j][k]              k = i..n
/// L[k][i] = (A[k][i] - Σ_{j<i} L[k][j] U[j][i]) / U[i][i]   k = i+1..n
/// L[i][i] = 1
/// ```
///
/// # Errors
///
/// ├ [`LinearSystemError::InvalidPivotTol`] - invalid `cfg.pivot_tol`.
/// └ [`LinearSystemError::ZeroPivot`]       - strict mode only; `U[i][i]`
///                                            degenerate before dividing by it.
pub fn lu_decompose(a: &Matrix, cfg: DirectCfg) -> Result<LuFactors, LinearSystemError> {
    let n = a.n();

    let cfg       = cfg.validate()?;
    let strict    = cfg.strict();
    let pivot_tol = cfg.pivot_tol();

    log::debug!("{ALGORITHM}: n={n}, strict={strict}");

    let mut l = Matrix::zeros(n)?;
    let mut u = Matrix::zeros(n)?;

    for i in 0..n {
        // upper
        for k in i..n {
            let s: f64 = (0..i).map(|j| l[(i, j)] * u[(j, k)]).sum();
            u[(i, k)] = a[(i, k)] - s;
        }

        let u_ii = u[(i, i)];
        if strict {
            check_pivot(i, u_ii, pivot_tol)?;
        }

        // lower
        l[(i, i)] = 1.0;
        for k in i + 1..n {
            let s: f64 = (0..i).map(|j| l[(k, j)] * u[(j, i)]).sum();
            l[(k, i)] = (a[(k, i)] - s) / u_ii;
        }
    }

    if let Some(idx) = l.as_slice().iter().chain(u.as_slice()).position(|v| !v.is_finite()) {
        log::warn!("{ALGORITHM}: non-finite factor entry at flat index {idx}; a row interchange may be required");
    }

    Ok(LuFactors { l, u })
}
