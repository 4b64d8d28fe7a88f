//! Stats routing error types.

use thiserror::Error;

/// Errors raised while validating stats route parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// A required route parameter was not supplied.
    #[error("Missing stats parameter: {0}")]
    MissingParameter(&'static str),

    /// A route parameter had a value outside its allowed set.
    #[error("Invalid stats {name}: {value}")]
    InvalidParameter { name: &'static str, value: String },
}
