//! Cramer's Rule
//!
//! `x[i] = det(A_i) / det(A)` where `A_i` is `A` with column `i` replaced
//! by `b`. One full determinant per unknown, `O(n⁴)` overall. Intended for
//! small systems where the direct formula is the point.

use super::algorithms::Algorithm;
use super::common::check_len;
use super::errors::CramerError;
use super::matrix::Matrix;

const ALGORITHM: Algorithm = Algorithm::Cramer;


/// Determinant of `a`. See [`Matrix::determinant`].
#[inline]
pub fn determinant(a: &Matrix) -> f64 {
    a.determinant()
}


/// Solves `A x = b` by Cramer's rule.
///
/// # Errors
///
/// ├ [`CramerError::Common`]   - `b.len() != n`.
/// └ [`CramerError::Singular`] - `det(A) == 0.0` exactly.
///
/// # Warning
/// └ There is no tolerance band around zero. A nearly singular matrix with
///   a tiny nonzero determinant is solved anyway and the result may be
///   dominated by rounding error.
pub fn cramer(a: &Matrix, b: &[f64]) -> Result<Vec<f64>, CramerError> {
    let n = a.n();
    check_len(n, b.len())?;

    let det = a.determinant();
    if det == 0.0 {
        return Err(CramerError::Singular { det });
    }

    log::debug!("{ALGORITHM}: n={n}, det(A)={det}");

    let mut x = Vec::with_capacity(n);
    for i in 0..n {
        let a_i = a.with_column(i, b)?;
        x.push(a_i.determinant() / det);
    }

    Ok(x)
}
