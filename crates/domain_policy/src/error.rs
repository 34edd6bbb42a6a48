//! Policy domain errors

use thiserror::Error;

/// Errors that can occur in the policy domain
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("Invalid policy period: start {start} is after end {end}")]
    InvalidPeriod { start: String, end: String },

    #[error("Negative amount for {field}")]
    NegativeAmount { field: &'static str },
}
