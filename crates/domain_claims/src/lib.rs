//! Claims Domain
//!
//! This crate implements the claim lifecycle from submission through review
//! to a terminal status, plus the fraud-risk scoring applied at submission.
//!
//! # Claim Lifecycle
//!
//! ```text
//! Pending -> Processing -> Approved/Rejected
//! ```
//!
//! Reviewers may move a claim between any two statuses; the dashboard shows
//! whatever the current status is, so no transition matrix is enforced.

pub mod claim;
pub mod error;
pub mod fraud;

pub use claim::{Claim, ClaimStatus, ClaimSubmission};
pub use error::ClaimError;
pub use fraud::{FixedScorer, FraudScore, FraudScorer, RandomScorer, RiskBand};
