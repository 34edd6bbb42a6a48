//! Policy aggregate

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::PolicyError;
use core_kernel::{Money, PolicyId};

/// Policy status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyStatus {
    Active,
    Expired,
    Pending,
}

/// An insurance policy record
///
/// Fields are immutable once the policy is constructed; the core exposes no
/// mutation surface for policies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    /// Unique identifier
    pub id: PolicyId,
    /// Product category, free text ("Auto Insurance", "Health Insurance", ...)
    pub policy_type: String,
    /// Annual premium
    pub premium: Money,
    /// Coverage limit
    pub coverage: Money,
    /// Status
    pub status: PolicyStatus,
    /// First day of cover (inclusive)
    pub start_date: NaiveDate,
    /// Last day of cover (inclusive)
    pub end_date: NaiveDate,
    /// Description
    pub description: String,
}

impl Policy {
    /// Creates a policy, enforcing the period and amount invariants
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: PolicyId,
        policy_type: impl Into<String>,
        premium: Money,
        coverage: Money,
        status: PolicyStatus,
        start_date: NaiveDate,
        end_date: NaiveDate,
        description: impl Into<String>,
    ) -> Result<Self, PolicyError> {
        if start_date > end_date {
            return Err(PolicyError::InvalidPeriod {
                start: start_date.to_string(),
                end: end_date.to_string(),
            });
        }
        if premium.is_negative() {
            return Err(PolicyError::NegativeAmount { field: "premium" });
        }
        if coverage.is_negative() {
            return Err(PolicyError::NegativeAmount { field: "coverage" });
        }

        Ok(Self {
            id,
            policy_type: policy_type.into(),
            premium,
            coverage,
            status,
            start_date,
            end_date,
            description: description.into(),
        })
    }

    /// Returns true if the policy is currently active
    pub fn is_active(&self) -> bool {
        self.status == PolicyStatus::Active
    }
}
