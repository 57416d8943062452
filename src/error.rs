//! Frontier error types

use thiserror::Error;

/// Errors produced by frontier computation.
///
/// The computation is pure and has no I/O, so rejected inputs are the only
/// failure mode. Validation happens eagerly before any point is generated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FrontierError {
  /// Out-of-domain input rejected before computation.
  #[error("Invalid parameter: {0}")]
  InvalidParameter(String),
}
