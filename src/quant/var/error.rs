use thiserror::Error;

/// Errors raised by the VaR simulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VarError {
  /// A portfolio or simulation parameter lies outside its admissible range.
  #[error("invalid parameter: {0}")]
  InvalidParameter(String),
}
