// common helpers
pub mod algorithms;
pub mod config;
pub mod errors;
pub mod matrix;
pub mod report;
pub(crate) mod common;

// direct
pub mod gauss;
pub mod gauss_jordan;
pub mod cramer;
pub mod lu;

// iterative
pub mod jacobi;
pub mod gauss_seidel;

pub use matrix::Matrix;
pub use config::{DirectCfg, IterativeCfg};
pub use errors::{CramerError, IterativeError, LinearSystemError};
pub use report::IterativeReport;
