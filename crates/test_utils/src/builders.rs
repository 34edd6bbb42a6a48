//! Test data builders
//!
//! Builders construct fully-populated entities with sensible defaults so a
//! test only spells out the fields it is actually about.

use chrono::NaiveDate;
use core_kernel::{ClaimId, Money, PolicyId};
use domain_claims::{Claim, ClaimStatus, FraudScore};
use domain_policy::{Policy, PolicyStatus};

use crate::fixtures::{DateFixtures, MoneyFixtures};

/// Builder for test claims
pub struct ClaimBuilder {
    id: ClaimId,
    policy_id: PolicyId,
    claim_type: String,
    amount: Money,
    status: ClaimStatus,
    description: String,
    date_submitted: NaiveDate,
    last_updated: NaiveDate,
    documents: Vec<String>,
    fraud_score: Option<FraudScore>,
}

impl Default for ClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            id: ClaimId::generate(),
            policy_id: PolicyId::new("1"),
            claim_type: "Auto Accident".to_string(),
            amount: MoneyFixtures::usd_5000(),
            status: ClaimStatus::Pending,
            description: "test claim".to_string(),
            date_submitted: DateFixtures::submission_day(),
            last_updated: DateFixtures::submission_day(),
            documents: Vec::new(),
            fraud_score: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<ClaimId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_policy_id(mut self, id: impl Into<PolicyId>) -> Self {
        self.policy_id = id.into();
        self
    }

    pub fn with_type(mut self, claim_type: impl Into<String>) -> Self {
        self.claim_type = claim_type.into();
        self
    }

    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn submitted_on(mut self, date: NaiveDate) -> Self {
        self.date_submitted = date;
        self.last_updated = self.last_updated.max(date);
        self
    }

    pub fn with_documents(mut self, documents: Vec<String>) -> Self {
        self.documents = documents;
        self
    }

    /// Sets the fraud score; panics on an out-of-range value (test code)
    pub fn with_fraud_score(mut self, score: f64) -> Self {
        self.fraud_score = Some(FraudScore::new(score).expect("test score in range"));
        self
    }

    pub fn without_fraud_score(mut self) -> Self {
        self.fraud_score = None;
        self
    }

    pub fn build(self) -> Claim {
        Claim {
            id: self.id,
            policy_id: self.policy_id,
            claim_type: self.claim_type,
            amount: self.amount,
            status: self.status,
            description: self.description,
            date_submitted: self.date_submitted,
            last_updated: self.last_updated,
            documents: self.documents,
            fraud_score: self.fraud_score,
        }
    }
}

/// Builder for test policies
pub struct PolicyBuilder {
    id: PolicyId,
    policy_type: String,
    premium: Money,
    coverage: Money,
    status: PolicyStatus,
    start_date: NaiveDate,
    end_date: NaiveDate,
    description: String,
}

impl Default for PolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            id: PolicyId::new("1"),
            policy_type: "Auto Insurance".to_string(),
            premium: MoneyFixtures::usd_premium(),
            coverage: MoneyFixtures::usd_coverage(),
            status: PolicyStatus::Active,
            start_date: DateFixtures::policy_start(),
            end_date: DateFixtures::policy_end(),
            description: "test policy".to_string(),
        }
    }

    pub fn with_id(mut self, id: impl Into<PolicyId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_type(mut self, policy_type: impl Into<String>) -> Self {
        self.policy_type = policy_type.into();
        self
    }

    pub fn with_premium(mut self, premium: Money) -> Self {
        self.premium = premium;
        self
    }

    pub fn with_coverage(mut self, coverage: Money) -> Self {
        self.coverage = coverage;
        self
    }

    pub fn with_status(mut self, status: PolicyStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds the policy; panics if the builder was given invalid data (test code)
    pub fn build(self) -> Policy {
        Policy::new(
            self.id,
            self.policy_type,
            self.premium,
            self.coverage,
            self.status,
            self.start_date,
            self.end_date,
            self.description,
        )
        .expect("test policy data is valid")
    }
}
