use super::common::{RootReport, RootFindingError, ToleranceReason};
use thiserror::Error;

const ALGORITHM: &str = "bisection";

#[derive(Debug, Error)]
pub enum BisectionError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error("no sign change on [{a}, {b}]: f(a) * f(b) >= 0 (f(a)={fa}, f(b)={fb})")]
    NoSignChange { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("bisection did not converge after {iterations} iterations (last midpoint {last})")]
    DidNotConverge { iterations: usize, last: f64 },
}

/// Bisection Configuration
///
/// # Defaults
///
/// ┌ DEFAULT_TOL      - tolerance for both |f(c)| and the bracket half-width
/// └ DEFAULT_MAX_ITER - iteration budget
///
/// # Validation:
/// └ Configuration validation occurs in [`bisection`] via [`BisectionCfg::validate()`].
///
///    The following checks are performed:
///    ├ `tol`      >  0 and finite
///    └ `max_iter` >= 1
#[derive(Debug, Copy, Clone)]
pub struct BisectionCfg {
    tol:      Option<f64>,
    max_iter: Option<usize>,
}
impl BisectionCfg {
    pub const DEFAULT_TOL:      f64   = 1e-10;
    pub const DEFAULT_MAX_ITER: usize = 100;

    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn with_tol     (mut self, v: f64)   -> Self { self.tol      = Some(v); self }
    pub fn with_max_iter(mut self, v: usize) -> Self { self.max_iter = Some(v); self }

    #[inline] #[must_use] pub fn tol     (&self) -> f64   { self.tol     .unwrap_or(Self::DEFAULT_TOL) }
    #[inline] #[must_use] pub fn max_iter(&self) -> usize { self.max_iter.unwrap_or(Self::DEFAULT_MAX_ITER) }

    pub fn validate(&self) -> Result<BisectionCfg, RootFindingError> {
        let tol = self.tol();
        if !(tol.is_finite() && tol > 0.0) {
            return Err(RootFindingError::InvalidTolerance { got: tol });
        }

        let max_iter = self.max_iter();
        if max_iter == 0 {
            return Err(RootFindingError::InvalidMaxIter { got: max_iter });
        }

        Ok(Self {
            tol:      Some(tol),
            max_iter: Some(max_iter),
        })
    }
}

impl Default for BisectionCfg {
    fn default() -> Self {
        Self {
            tol:      Some(Self::DEFAULT_TOL),
            max_iter: Some(Self::DEFAULT_MAX_ITER),
        }
    }
}

/// Calculates midpoint of [a, b]
#[inline]
fn midpoint(a: f64, b: f64) -> f64 {
    (a + b) / 2.0
}

/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// This method assumes that the function `func` is continuous on the interval `[a, b]`
/// and that `func(a)` and `func(b)` have opposite signs, guaranteeing a root exists
/// within the interval.
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `a`    - Lower bound of the search interval. Must be finite and less than `b`.
/// ├ `b`    - Upper bound of the search interval. Must be finite and greater than `a`.
/// └ `cfg`  - [`BisectionCfg`]
///    Defaults:
///    ├ cfg.tol      = 1e-10
///    └ cfg.max_iter = 100
///
/// # Algorithm
///
/// Each iteration takes `c = (a + b) / 2` and returns it as soon as
/// `|f(c)| < tol` or `(b - a) / 2 < tol`. Otherwise the half of the bracket
/// where `f(a) * f(c) < 0` is kept.
///
/// # Returns
///
/// On success, returns a [`RootReport`] with
/// ├ `root`, `f_root`     : the accepted midpoint and its function value
/// ├ `iterations`, `evals`: iterations performed and function evaluations (2 + iterations)
/// ├ `tolerance`          : [`ToleranceReason::AbsFxReached`] or [`ToleranceReason::WidthTolReached`]
/// └ `left`, `right`      : the bracket the root was bisected from
///
/// # Errors
///
/// ┌ [`BisectionError::InvalidBounds`]  - `a` or `b` is NaN/inf or `a >= b`.
/// ├ [`BisectionError::NoSignChange`]   - `func(a) * func(b) >= 0`. Raised before any
/// │                                      iteration; an endpoint that is an exact root
/// │                                      also lands here.
/// ├ [`BisectionError::DidNotConverge`] - `max_iter` iterations without meeting `tol`.
/// │
/// The following are propagated via [`BisectionError::Common`]
/// ├ [`RootFindingError::NonFiniteEvaluation`] - `func(x)` produces NaN or inf.
/// ├ [`RootFindingError::InvalidTolerance`]    - `cfg.tol` <= 0 or not finite.
/// └ [`RootFindingError::InvalidMaxIter`]      - `cfg.max_iter` == 0.
pub fn bisection<F>(
    mut func: F,
    mut a: f64,
    mut b: f64,
    cfg: BisectionCfg
) -> Result<RootReport, BisectionError>
where F: FnMut(f64) -> f64 {

    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(BisectionError::InvalidBounds { a, b });
    }

    let cfg      = cfg.validate()?;
    let tol      = cfg.tol();
    let max_iter = cfg.max_iter();

    // number of function evaluations
    let mut evals = 0;

    // closure function, checks finiteness
    let mut eval = |x: f64| -> Result<f64, BisectionError> {
        let fx = { evals += 1; func(x) };
        if !fx.is_finite() {
            Err(RootFindingError::NonFiniteEvaluation { x, fx }.into())
        } else {
            Ok(fx)
        }
    };

    let mut fa = eval(a)?;
    let fb     = eval(b)?;
    if fa * fb >= 0.0 {
        return Err(BisectionError::NoSignChange { a, b, fa, fb });
    }

    log::debug!("{ALGORITHM}: [{a}, {b}], tol={tol:e}, max_iter={max_iter}");

    let mut c = a;     // gets overwritten
    for iter in 1..=max_iter {
        c = midpoint(a, b);
        let fc = eval(c)?;

        let abs_fx_hit = fc.abs() < tol;
        if abs_fx_hit || (b - a) / 2.0 < tol {
            let tolerance = if abs_fx_hit {
                ToleranceReason::AbsFxReached
            } else {
                ToleranceReason::WidthTolReached
            };
            log::debug!("{ALGORITHM}: root {c} after {iter} iterations ({tolerance:?})");

            return Ok(RootReport {
                root       : c,
                f_root     : fc,
                iterations : iter,
                evals,
                tolerance,
                left       : a,
                right      : b,
                algorithm  : ALGORITHM,
            });
        }

        // shrink interval
        if fa * fc < 0.0 {
            b = c;
        } else {
            a  = c;
            fa = fc;
        }
        log::trace!("{ALGORITHM}: iter={iter}, bracket=[{a}, {b}]");
    }

    Err(BisectionError::DidNotConverge { iterations: max_iter, last: c })
}
