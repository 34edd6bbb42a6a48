//! Store errors
//!
//! Every failure here is local and recoverable: the caller decides how to
//! surface it. The original system silently no-opped on an unknown claim id;
//! this store reports `ClaimNotFound` instead so callers can tell an applied
//! update from a missed one.

use thiserror::Error;

use crate::access::Role;
use core_kernel::{ClaimId, PolicyId};

/// Errors returned by the store's mutation surface
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Claim not found: {0}")]
    ClaimNotFound(ClaimId),

    #[error("Policy not found: {0}")]
    PolicyNotFound(PolicyId),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Role {role:?} is not allowed to {action}")]
    Unauthorized { role: Role, action: &'static str },
}

impl StoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        StoreError::Validation(message.into())
    }
}
