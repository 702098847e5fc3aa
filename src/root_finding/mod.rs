// common helpers
pub mod common;

// algorithms
pub mod bisection;

pub use bisection::{bisection, BisectionCfg, BisectionError};
pub use common::{RootFindingError, RootReport, ToleranceReason};
