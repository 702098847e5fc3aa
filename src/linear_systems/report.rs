//! Defines the [`IterativeReport`] struct returned by the iterative
//! linear-system solvers.

use super::algorithms::Algorithm;

/// Summary of a converged Jacobi / Gauss-Seidel run.
///
/// [`IterativeReport`]
/// - `solution`   : converged iterate
/// - `iterations` : sweeps performed, including the converging one
/// - `max_delta`  : final `max_i |x_new[i] - x[i]|`, always `< tol`
/// - `algorithm`  : algorithm name (e.g. `"jacobi"`)
#[derive(Debug, Clone)]
pub struct IterativeReport {
    pub solution:   Vec<f64>,
    pub iterations: usize,
    pub max_delta:  f64,
    pub algorithm:  &'static str,
}

impl IterativeReport {
    pub(crate) fn new(algorithm: Algorithm, solution: Vec<f64>, iterations: usize, max_delta: f64) -> Self {
        Self {
            solution,
            iterations,
            max_delta,
            algorithm: algorithm.algorithm_name(),
        }
    }

    pub fn solution(&self)   -> &[f64]       { &self.solution }
    pub fn iterations(&self) -> usize        { self.iterations }
    pub fn max_delta(&self)  -> f64          { self.max_delta }
    pub fn algorithm(&self)  -> &'static str { self.algorithm }

    pub fn into_solution(self) -> Vec<f64> { self.solution }
}
