//! Helpers shared by the linear-system routines.

use super::algorithms::Algorithm;
use super::config::IterativeCfg;
use super::errors::{IterativeError, LinearSystemError};
use super::matrix::{max_abs_diff, Matrix};
use super::report::IterativeReport;


/// Checks a vector length against the expected dimension.
#[inline]
pub(crate) fn check_len(expected: usize, got: usize) -> Result<(), LinearSystemError> {
    if expected != got {
        return Err(LinearSystemError::DimensionMismatch { expected, got });
    }
    Ok(())
}


/// Strict-mode pivot check.
///
/// A pivot is degenerate when `|pivot| <= pivot_tol` or non-finite.
#[inline]
pub(crate) fn check_pivot(row: usize, pivot: f64, pivot_tol: f64) -> Result<(), LinearSystemError> {
    if !pivot.is_finite() || pivot.abs() <= pivot_tol {
        return Err(LinearSystemError::ZeroPivot { row, pivot });
    }
    Ok(())
}


/// Strict-mode diagonal check for the iterative methods.
pub(crate) fn check_diagonal(a: &Matrix) -> Result<(), LinearSystemError> {
    for row in 0..a.n() {
        let value = a[(row, row)];
        if !value.is_finite() || value == 0.0 {
            return Err(LinearSystemError::ZeroDiagonal { row, value });
        }
    }
    Ok(())
}


/// Logs a warning when an unchecked solver produced inf/NaN.
pub(crate) fn warn_non_finite(algorithm: Algorithm, x: &[f64]) {
    if let Some(idx) = x.iter().position(|v| !v.is_finite()) {
        log::warn!(
            "{algorithm}: non-finite solution component x[{idx}]={}; matrix may be singular",
            x[idx]
        );
    }
}


/// Divides row `i` of `A` and `b[i]` by `diag`.
#[inline]
pub(crate) fn normalize_row(a: &mut Matrix, b: &mut [f64], i: usize, diag: f64) {
    for v in a.row_mut(i) {
        *v /= diag;
    }
    b[i] /= diag;
}


/// Subtracts `A[target][col] ×` row `col` from row `target` so that
/// `A[target][col]` becomes zero. Row `col` must already be normalized.
#[inline]
pub(crate) fn eliminate_row(a: &mut Matrix, b: &mut [f64], target: usize, col: usize) {
    let factor = a[(target, col)];
    for k in 0..a.n() {
        let update = factor * a[(col, k)];
        a[(target, k)] -= update;
    }
    b[target] -= factor * b[col];
}


/// Fixed-point driver shared by Jacobi and Gauss-Seidel.
///
/// `sweep(a, b, x, x_new)` must fill every entry of `x_new` from the
/// previous iterate `x`. The run converges on the first sweep where every
/// `|x_new[i] - x[i]| < tol`; a NaN difference never satisfies this.
///
/// # Errors
///
/// ├ [`LinearSystemError::DimensionMismatch`] - `b` or `x0` length != n.
/// ├ [`LinearSystemError::InvalidTolerance`]  - `cfg.tol` <= 0 or non-finite.
/// ├ [`LinearSystemError::InvalidMaxIter`]    - `cfg.max_iter` == 0.
/// ├ [`LinearSystemError::ZeroDiagonal`]      - strict mode only.
/// └ [`IterativeError::DidNotConverge`]       - `max_iter` sweeps exhausted.
pub(crate) fn fixed_point<S>(
    algorithm: Algorithm,
    a: &Matrix,
    b: &[f64],
    x0: &[f64],
    cfg: IterativeCfg,
    mut sweep: S,
) -> Result<IterativeReport, IterativeError>
where S: FnMut(&Matrix, &[f64], &[f64], &mut [f64]) {
    let n = a.n();
    check_len(n, b.len())?;
    check_len(n, x0.len())?;

    let cfg      = cfg.validate()?;
    let tol      = cfg.tol();
    let max_iter = cfg.max_iter();

    if cfg.strict() {
        check_diagonal(a)?;
    }

    log::debug!("{algorithm}: n={n}, tol={tol:e}, max_iter={max_iter}");

    let mut x         = x0.to_vec();
    let mut x_new     = vec![0.0; n];
    let mut max_delta = f64::INFINITY;

    for iter in 1..=max_iter {
        sweep(a, b, &x, &mut x_new);

        let converged = x_new.iter().zip(&x).all(|(xn, xo)| (xn - xo).abs() < tol);
        max_delta = max_abs_diff(&x_new, &x);
        log::trace!("{algorithm}: iter={iter}, max |dx|={max_delta:e}");

        if converged {
            log::debug!("{algorithm}: converged after {iter} iterations");
            return Ok(IterativeReport::new(algorithm, x_new, iter, max_delta));
        }

        std::mem::swap(&mut x, &mut x_new);
    }

    log::debug!("{algorithm}: no convergence after {max_iter} iterations, max |dx|={max_delta:e}");
    Err(IterativeError::DidNotConverge { algorithm, iterations: max_iter, max_delta })
}
