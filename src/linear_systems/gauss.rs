//! Gaussian Elimination
//!
//! Solves `A x = b` by [Gaussian elimination](https://en.wikipedia.org/wiki/Gaussian_elimination)
//! with partial pivoting: forward elimination to a unit upper-triangular
//! system, then back substitution.

use super::algorithms::Algorithm;
use super::common::{check_len, check_pivot, eliminate_row, normalize_row, warn_non_finite};
use super::config::DirectCfg;
use super::errors::LinearSystemError;
use super::matrix::Matrix;

const ALGORITHM: Algorithm = Algorithm::GaussElimination;


/// First row in `[i, n)` maximizing `|A[r][i]|`. Ties keep the earliest row.
#[inline]
fn pivot_row(a: &Matrix, i: usize) -> usize {
    let mut best_row = i;
    let mut best     = a[(i, i)].abs();
    for r in i + 1..a.n() {
        let v = a[(r, i)].abs();
        if v > best {
            best     = v;
            best_row = r;
        }
    }
    best_row
}


/// Solves `A x = b` by Gaussian elimination with partial pivoting.
///
/// Works on copies of `a` and `b`; the caller's data is left untouched.
/// See [`gauss_elimination_in_place`] for the destructive variant.
///
/// # Arguments
///
/// ┌ `a`   - `n × n` coefficient matrix.
/// ├ `b`   - right-hand side of length `n`.
/// └ `cfg` - [`DirectCfg`]; strict mode rejects degenerate pivots.
///
/// # Errors
///
/// ├ [`LinearSystemError::DimensionMismatch`] - `b.len() != n`.
/// ├ [`LinearSystemError::InvalidPivotTol`]   - invalid `cfg.pivot_tol`.
/// └ [`LinearSystemError::ZeroPivot`]         - strict mode only.
///
/// # Warning
/// └ Outside strict mode a singular matrix is not detected. The zero
///   pivot is divided through and the result holds inf/NaN.
pub fn gauss_elimination(a: &Matrix, b: &[f64], cfg: DirectCfg) -> Result<Vec<f64>, LinearSystemError> {
    let mut a = a.clone();
    let mut b = b.to_vec();
    gauss_elimination_in_place(&mut a, &mut b, cfg)
}


/// Destructive Gaussian elimination.
///
/// On return `a` holds the row-swapped, normalized upper-triangular factor
/// (unit diagonal) and `b` the correspondingly transformed right-hand side.
/// If strict mode rejects a pivot, `a` and `b` are left partially reduced.
pub fn gauss_elimination_in_place(
    a: &mut Matrix,
    b: &mut [f64],
    cfg: DirectCfg,
) -> Result<Vec<f64>, LinearSystemError> {
    let n = a.n();
    check_len(n, b.len())?;

    let cfg       = cfg.validate()?;
    let strict    = cfg.strict();
    let pivot_tol = cfg.pivot_tol();

    log::debug!("{ALGORITHM}: n={n}, strict={strict}");

    // forward elimination
    for i in 0..n {
        let p = pivot_row(a, i);
        if p != i {
            a.swap_rows(i, p);
            b.swap(i, p);
        }

        let diag = a[(i, i)];
        if strict {
            check_pivot(i, diag, pivot_tol)?;
        }
        normalize_row(a, b, i, diag);

        for j in i + 1..n {
            eliminate_row(a, b, j, i);
        }
    }

    // back substitution, diagonal is 1
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let s: f64 = (i + 1..n).map(|j| a[(i, j)] * x[j]).sum();
        x[i] = b[i] - s;
    }

    warn_non_finite(ALGORITHM, &x);
    Ok(x)
}
