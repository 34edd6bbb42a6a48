//! Claim aggregate

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::fraud::{FraudScore, RiskBand};
use core_kernel::{ClaimId, Money, PolicyId};

/// Claim status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    /// Awaiting review
    Pending,
    /// Under review
    Processing,
    /// Approved for payout
    Approved,
    /// Rejected
    Rejected,
}

impl ClaimStatus {
    /// All statuses, in dashboard display order
    pub const ALL: [ClaimStatus; 4] = [
        ClaimStatus::Pending,
        ClaimStatus::Processing,
        ClaimStatus::Approved,
        ClaimStatus::Rejected,
    ];
}

/// Input for submitting a new claim
///
/// Deliberately carries no status and no dates: a submitted claim always
/// starts `Pending` with both dates set to the submission day, so those
/// fields cannot be forged by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimSubmission {
    pub policy_id: PolicyId,
    /// Free text; the intake form offers a fixed list but the store accepts any value
    pub claim_type: String,
    pub amount: Money,
    pub description: String,
    /// Uploaded document filenames, insertion order preserved
    pub documents: Vec<String>,
}

/// A claim filed against a policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier, assigned by the store
    pub id: ClaimId,
    /// Policy the claim is filed against
    pub policy_id: PolicyId,
    /// Category label, free text
    pub claim_type: String,
    /// Claimed amount
    pub amount: Money,
    /// Status
    pub status: ClaimStatus,
    /// Description
    pub description: String,
    /// Day the claim was submitted, set once
    pub date_submitted: NaiveDate,
    /// Day of the last status change; never earlier than `date_submitted`
    pub last_updated: NaiveDate,
    /// Uploaded document filenames
    pub documents: Vec<String>,
    /// Fraud-risk score assigned at submission; absence reads as 0 (low risk)
    pub fraud_score: Option<FraudScore>,
}

impl Claim {
    /// Creates a claim from a submission
    ///
    /// Status is `Pending` unconditionally and both dates are the submission
    /// day; the fraud score is whatever the store's scorer produced.
    pub fn submit(
        id: ClaimId,
        submission: ClaimSubmission,
        today: NaiveDate,
        fraud_score: FraudScore,
    ) -> Self {
        Self {
            id,
            policy_id: submission.policy_id,
            claim_type: submission.claim_type,
            amount: submission.amount,
            status: ClaimStatus::Pending,
            description: submission.description,
            date_submitted: today,
            last_updated: today,
            documents: submission.documents,
            fraud_score: Some(fraud_score),
        }
    }

    /// Replaces the status and touches `last_updated`
    ///
    /// Any status may move to any other status, including itself; re-entering
    /// a status only refreshes `last_updated`.
    pub fn set_status(&mut self, status: ClaimStatus, on: NaiveDate) {
        self.status = status;
        // last_updated never moves backwards even if the caller's clock does
        self.last_updated = self.last_updated.max(on);
    }

    /// Returns the risk band for this claim, treating a missing score as low
    pub fn risk_band(&self) -> RiskBand {
        RiskBand::from_optional(self.fraud_score)
    }
}
