use thiserror::Error;

/// Errors originating from the checked entry points of the core crate.
///
/// Plain arithmetic never fails; these only surface from validated
/// constructors and configuration parsing.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("negative exponent: {0} (must be >= 0)")]
    NegativeExponent(i64),

    #[error("exponent too large: {0} (must fit in u32)")]
    ExponentTooLarge(i64),

    #[error("invalid viewport: {reason}")]
    InvalidViewport { reason: String },

    #[error("invalid viewport config: {0}")]
    Config(#[from] serde_json::Error),
}
