//! Numerical routines for solving equations.
//!
//! ┌ [`linear_systems`] : dense linear systems `A x = b`
//! │  ├ direct    : Gaussian elimination, Gauss-Jordan, Cramer's rule
//! │  ├ factor    : LU decomposition (Doolittle, no pivoting)
//! │  └ iterative : Jacobi, Gauss-Seidel
//! │
//! └ [`root_finding`]   : scalar roots of `f(x) = 0`
//!    └ bisection

pub mod linear_systems;
pub mod root_finding;
