//! Linear-system error types.
//!
//! ┌ [`LinearSystemError`] : common errors
//! │  ├ malformed matrix / vector shapes
//! │  ├ invalid configuration (tolerance, max_iter, pivot_tol)
//! │  └ degenerate pivot or diagonal (strict mode only)
//! │
//! ├ [`CramerError`]       : [`LinearSystemError`] + singular determinant
//! │
//! └ [`IterativeError`]    : [`LinearSystemError`] + non-convergence


use thiserror::Error;
use super::algorithms::Algorithm;


/// Errors shared by every linear-system routine.
///
/// ┌ Shape errors are always checked.
/// └ [`LinearSystemError::ZeroPivot`] and [`LinearSystemError::ZeroDiagonal`]
///   are only raised when the routine runs in strict mode. Otherwise a
///   degenerate pivot propagates as inf/NaN in the output.
#[derive(Debug, Error)]
pub enum LinearSystemError {
    #[error("empty matrix: need at least one row")]
    EmptyMatrix,

    #[error("matrix is not square: {rows} rows, row of length {cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("dimension mismatch: expected length {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("invalid `tol`: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },

    #[error("invalid `pivot_tol`: must be finite and >= 0. got {got}")]
    InvalidPivotTol { got: f64 },

    #[error("zero or non-finite pivot at row {row}: pivot={pivot}")]
    ZeroPivot { row: usize, pivot: f64 },

    #[error("zero or non-finite diagonal entry at row {row}: a[{row}][{row}]={value}")]
    ZeroDiagonal { row: usize, value: f64 },
}


/// Cramer's rule errors.
#[derive(Debug, Error)]
pub enum CramerError {
    #[error(transparent)]
    Common(#[from] LinearSystemError),

    #[error("system has no unique solution: det(A) = {det}")]
    Singular { det: f64 },
}


/// Jacobi / Gauss-Seidel errors.
#[derive(Debug, Error)]
pub enum IterativeError {
    #[error(transparent)]
    Common(#[from] LinearSystemError),

    #[error("{algorithm} did not converge after {iterations} iterations (last max |Δx| = {max_delta})")]
    DidNotConverge { algorithm: Algorithm, iterations: usize, max_delta: f64 },
}
