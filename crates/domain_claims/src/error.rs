//! Claims domain errors

use thiserror::Error;

/// Errors that can occur in the claims domain
#[derive(Debug, Error, PartialEq)]
pub enum ClaimError {
    #[error("Fraud score {0} is outside [0, 1]")]
    ScoreOutOfRange(f64),
}
