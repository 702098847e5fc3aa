//! Gauss-Jordan Elimination
//!
//! Reduces `[A | b]` to `[I | x]`. Each row is normalized by its own
//! diagonal entry and column `i` is cleared in every other row, above and
//! below. No row interchanges are ever performed, so a zero diagonal entry
//! met along the way is fatal even when the system is solvable.

use super::algorithms::Algorithm;
use super::common::{check_len, check_pivot, eliminate_row, normalize_row, warn_non_finite};
use super::config::DirectCfg;
use super::errors::LinearSystemError;
use super::matrix::Matrix;

const ALGORITHM: Algorithm = Algorithm::GaussJordan;


/// Solves `A x = b` by Gauss-Jordan elimination without pivoting.
///
/// Works on copies of `a` and `b`. See [`gauss_jordan_in_place`].
///
/// # Errors
///
/// ├ [`LinearSystemError::DimensionMismatch`] - `b.len() != n`.
/// ├ [`LinearSystemError::InvalidPivotTol`]   - invalid `cfg.pivot_tol`.
/// └ [`LinearSystemError::ZeroPivot`]         - strict mode only; a diagonal
///                                              entry is degenerate when reached.
pub fn gauss_jordan(a: &Matrix, b: &[f64], cfg: DirectCfg) -> Result<Vec<f64>, LinearSystemError> {
    let mut a = a.clone();
    let mut b = b.to_vec();
    gauss_jordan_in_place(&mut a, &mut b, cfg)?;
    Ok(b)
}


/// Destructive Gauss-Jordan elimination.
///
/// On success `a` is (numerically) the identity and `b` holds the solution.
pub fn gauss_jordan_in_place(a: &mut Matrix, b: &mut [f64], cfg: DirectCfg) -> Result<(), LinearSystemError> {
    let n = a.n();
    check_len(n, b.len())?;

    let cfg       = cfg.validate()?;
    let strict    = cfg.strict();
    let pivot_tol = cfg.pivot_tol();

    log::debug!("{ALGORITHM}: n={n}, strict={strict}");

    for i in 0..n {
        let diag = a[(i, i)];
        if strict {
            check_pivot(i, diag, pivot_tol)?;
        }
        normalize_row(a, b, i, diag);

        for j in (0..n).filter(|&j| j != i) {
            eliminate_row(a, b, j, i);
        }
    }

    warn_non_finite(ALGORITHM, b);
    Ok(())
}
