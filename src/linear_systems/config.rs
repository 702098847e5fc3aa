//! Configuration for linear-system routines.
//!
//! ┌ [`DirectCfg`]    : Gaussian elimination, Gauss-Jordan, LU
//! │  ├ `strict`    : reject degenerate pivots instead of propagating inf/NaN
//! │  └ `pivot_tol` : |pivot| <= pivot_tol counts as degenerate (strict only)
//! │
//! └ [`IterativeCfg`] : Jacobi, Gauss-Seidel
//!    ├ `tol`       : stop once every |x_new[i] - x[i]| < tol
//!    ├ `max_iter`  : sweep budget
//!    └ `strict`    : reject zero/non-finite diagonal entries up front
//!
//! Both follow the same shape: `new()` gives defaults, `with_*` setters
//! record values, `validate()` checks them and fills in defaults.

use super::errors::LinearSystemError;


/// Direct solver configuration
///
/// # Defaults
///
/// ┌ DEFAULT_STRICT    - `false`, degenerate pivots are not checked
/// └ DEFAULT_PIVOT_TOL - `0.0`, only an exact zero pivot is degenerate
///
/// # Validation:
/// └ `pivot_tol` >= 0 and finite
#[derive(Debug, Copy, Clone)]
pub struct DirectCfg {
    strict:    Option<bool>,
    pivot_tol: Option<f64>,
}
impl DirectCfg {
    pub const DEFAULT_STRICT:    bool = false;
    pub const DEFAULT_PIVOT_TOL: f64  = 0.0;

    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn with_strict   (mut self, v: bool) -> Self { self.strict    = Some(v); self }
    pub fn with_pivot_tol(mut self, v: f64)  -> Self { self.pivot_tol = Some(v); self }

    #[inline] #[must_use] pub fn strict   (&self) -> bool { self.strict   .unwrap_or(Self::DEFAULT_STRICT) }
    #[inline] #[must_use] pub fn pivot_tol(&self) -> f64  { self.pivot_tol.unwrap_or(Self::DEFAULT_PIVOT_TOL) }

    pub fn validate(&self) -> Result<DirectCfg, LinearSystemError> {
        let pivot_tol = self.pivot_tol();
        if !(pivot_tol.is_finite() && pivot_tol >= 0.0) {
            return Err(LinearSystemError::InvalidPivotTol { got: pivot_tol });
        }

        Ok(Self {
            strict:    Some(self.strict()),
            pivot_tol: Some(pivot_tol),
        })
    }
}

impl Default for DirectCfg {
    fn default() -> Self {
        Self {
            strict:    Some(Self::DEFAULT_STRICT),
            pivot_tol: Some(Self::DEFAULT_PIVOT_TOL),
        }
    }
}


/// Iterative solver configuration
///
/// # Defaults
///
/// ┌ DEFAULT_TOL      - `1e-10`
/// ├ DEFAULT_MAX_ITER - `100`
/// └ DEFAULT_STRICT   - `false`
///
/// # Validation:
/// ├ `tol`      >  0 and finite
/// └ `max_iter` >= 1
#[derive(Debug, Copy, Clone)]
pub struct IterativeCfg {
    tol:      Option<f64>,
    max_iter: Option<usize>,
    strict:   Option<bool>,
}
impl IterativeCfg {
    pub const DEFAULT_TOL:      f64   = 1e-10;
    pub const DEFAULT_MAX_ITER: usize = 100;
    pub const DEFAULT_STRICT:   bool  = false;

    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn with_tol     (mut self, v: f64)   -> Self { self.tol      = Some(v); self }
    pub fn with_max_iter(mut self, v: usize) -> Self { self.max_iter = Some(v); self }
    pub fn with_strict  (mut self, v: bool)  -> Self { self.strict   = Some(v); self }

    #[inline] #[must_use] pub fn tol     (&self) -> f64   { self.tol     .unwrap_or(Self::DEFAULT_TOL) }
    #[inline] #[must_use] pub fn max_iter(&self) -> usize { self.max_iter.unwrap_or(Self::DEFAULT_MAX_ITER) }
    #[inline] #[must_use] pub fn strict  (&self) -> bool  { self.strict  .unwrap_or(Self::DEFAULT_STRICT) }

    pub fn validate(&self) -> Result<IterativeCfg, LinearSystemError> {
        let tol = self.tol();
        if !(tol.is_finite() && tol > 0.0) {
            return Err(LinearSystemError::InvalidTolerance { got: tol });
        }

        let max_iter = self.max_iter();
        if max_iter == 0 {
            return Err(LinearSystemError::InvalidMaxIter { got: max_iter });
        }

        Ok(Self {
            tol:      Some(tol),
            max_iter: Some(max_iter),
            strict:   Some(self.strict()),
        })
    }
}

impl Default for IterativeCfg {
    fn default() -> Self {
        Self {
            tol:      Some(Self::DEFAULT_TOL),
            max_iter: Some(Self::DEFAULT_MAX_ITER),
            strict:   Some(Self::DEFAULT_STRICT),
        }
    }
}
