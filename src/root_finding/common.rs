use thiserror::Error;


/// Outcome of a successful root-finding run.
///
/// [`RootReport`]
/// ├ `root`       : the computed root approximation
/// ├ `f_root`     : f(root)
/// ├ `iterations` : iterations performed, including the one that returned
/// ├ `evals`      : total function evaluations
/// ├ `tolerance`  : which stopping test fired ([`ToleranceReason`])
/// ├ `left`       : left bound of the bracket the root was taken from
/// ├ `right`      : right bound of the bracket the root was taken from
/// └ `algorithm`  : algorithm name (e.g. "bisection")
#[derive(Debug, Clone, Copy)]
pub struct RootReport {
    pub root:       f64,
    pub f_root:     f64,
    pub iterations: usize,
    pub evals:      usize,
    pub tolerance:  ToleranceReason,
    pub left:       f64,
    pub right:      f64,
    pub algorithm:  &'static str,
}

impl RootReport {
    pub fn root(&self)       -> f64             { self.root }
    pub fn f_root(&self)     -> f64             { self.f_root }
    pub fn iterations(&self) -> usize           { self.iterations }
    pub fn evals(&self)      -> usize           { self.evals }
    pub fn tolerance(&self)  -> ToleranceReason { self.tolerance }
    pub fn algorithm(&self)  -> &'static str    { self.algorithm }

    /// Final bracket `[left, right]`.
    pub fn bracket(&self) -> (f64, f64) {
        (self.left, self.right)
    }
}


/// Common error type for root-finding algorithms.
///
/// Encapsulates invalid input parameters and evaluation failures
/// that can occur during execution.
#[derive(Debug, Error)]
pub enum RootFindingError {
    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("invalid `tol`: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },
}


/// Which stopping test was satisfied.
/// ├ [`ToleranceReason::AbsFxReached`]
/// │   └ |f(c)| < tol
/// │
/// └ [`ToleranceReason::WidthTolReached`]
///     └ (b - a) / 2 < tol
///
/// When both hold on the same iteration `AbsFxReached` is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceReason {
    AbsFxReached,
    WidthTolReached,
}
