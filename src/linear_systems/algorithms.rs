//! Linear-system algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods.

use super::config::IterativeCfg;

/// Linear-system algorithm variants.
/// - direct    : [`Algorithm::GaussElimination`], [`Algorithm::GaussJordan`], [`Algorithm::Cramer`]
/// - factor    : [`Algorithm::LuDecomposition`]
/// - iterative : [`Algorithm::Jacobi`], [`Algorithm::GaussSeidel`]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    GaussElimination,
    GaussJordan,
    Cramer,
    LuDecomposition,
    Jacobi,
    GaussSeidel,
}

impl Algorithm {
    /// Default iteration count if `max_iter` is unset in config.
    ///
    /// # Notes
    /// - Direct methods finish in a fixed number of steps and return `None`.
    pub const fn default_max_iter(self) -> Option<usize> {
        match self {
            Algorithm::Jacobi | Algorithm::GaussSeidel => Some(IterativeCfg::DEFAULT_MAX_ITER),
            Algorithm::GaussElimination
            | Algorithm::GaussJordan
            | Algorithm::Cramer
            | Algorithm::LuDecomposition => None,
        }
    }

    pub const fn is_iterative(self) -> bool {
        matches!(self, Algorithm::Jacobi | Algorithm::GaussSeidel)
    }

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::GaussElimination => "gauss_elimination",
            Algorithm::GaussJordan      => "gauss_jordan",
            Algorithm::Cramer           => "cramer",
            Algorithm::LuDecomposition  => "lu_decomposition",
            Algorithm::Jacobi           => "jacobi",
            Algorithm::GaussSeidel      => "gauss_seidel",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
