//! The dashboard entity store

use chrono::{Local, NaiveDate};
use std::fmt;
use tracing::{info, warn};

use crate::access::UserContext;
use crate::error::StoreError;
use crate::seed;
use core_kernel::{ClaimId, Currency, PolicyId};
use domain_claims::{Claim, ClaimStatus, ClaimSubmission, FraudScorer};
use domain_policy::Policy;

/// A borrowed view of the complete store state at one instant
///
/// This is what the aggregation functions and snapshot listeners consume.
#[derive(Clone, Copy)]
pub struct Snapshot<'a> {
    pub policies: &'a [Policy],
    pub claims: &'a [Claim],
}

type SnapshotListener = Box<dyn for<'a> Fn(Snapshot<'a>) + Send>;

/// Owns the policy and claim collections and exposes the only mutation surface
///
/// Constructed once per session, injected into callers; there is no ambient
/// global instance. All mutation goes through [`DashboardStore::submit_claim`]
/// and [`DashboardStore::update_claim_status`].
pub struct DashboardStore {
    policies: Vec<Policy>,
    claims: Vec<Claim>,
    scorer: Box<dyn FraudScorer>,
    listeners: Vec<SnapshotListener>,
}

impl DashboardStore {
    /// Creates an empty store with the given fraud scorer
    pub fn new(scorer: impl FraudScorer + 'static) -> Self {
        Self {
            policies: Vec::new(),
            claims: Vec::new(),
            scorer: Box::new(scorer),
            listeners: Vec::new(),
        }
    }

    /// Creates a store preloaded with the session seed data
    pub fn seeded(scorer: impl FraudScorer + 'static) -> Self {
        let mut store = Self::new(scorer);
        store.policies = seed::seed_policies();
        store.claims = seed::seed_claims();
        store
    }

    /// Creates an empty store with the given policy book
    pub fn with_policies(scorer: impl FraudScorer + 'static, policies: Vec<Policy>) -> Self {
        let mut store = Self::new(scorer);
        store.policies = policies;
        store
    }

    /// Current policies, in seed order
    pub fn policies(&self) -> &[Policy] {
        &self.policies
    }

    /// Current claims, in insertion order (most recently added last)
    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    /// Looks up a policy for a detail view; absence is not an error
    pub fn find_policy(&self, id: &PolicyId) -> Option<&Policy> {
        self.policies.iter().find(|p| &p.id == id)
    }

    /// Looks up a claim for a detail view; absence is not an error
    pub fn find_claim(&self, id: &ClaimId) -> Option<&Claim> {
        self.claims.iter().find(|c| &c.id == id)
    }

    /// Returns a borrowed view of the full state
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            policies: &self.policies,
            claims: &self.claims,
        }
    }

    /// Registers a listener invoked after every successful mutation
    pub fn subscribe(&mut self, listener: impl for<'a> Fn(Snapshot<'a>) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Submits a new claim
    ///
    /// The claim starts `Pending` regardless of anything the caller intended,
    /// both dates are set to today, and the fraud score is assigned exactly
    /// once by the configured scorer. On success the claim is appended to the
    /// end of the collection and its id returned.
    pub fn submit_claim(
        &mut self,
        user: &UserContext,
        submission: ClaimSubmission,
    ) -> Result<ClaimId, StoreError> {
        self.validate_submission(&submission)?;

        let id = self.fresh_claim_id();
        let score = self.scorer.assess(&submission);
        let claim = Claim::submit(id.clone(), submission, today(), score);

        info!(
            claim_id = %claim.id,
            policy_id = %claim.policy_id,
            amount = %claim.amount,
            user = %user.user_id,
            "claim submitted"
        );

        self.claims.push(claim);
        self.notify();
        Ok(id)
    }

    /// Changes a claim's status
    ///
    /// Requires the admin role. Unknown ids yield `ClaimNotFound` and leave
    /// the collection untouched. No transition matrix is enforced: any status
    /// may follow any other, and re-applying the current status only touches
    /// `last_updated`.
    pub fn update_claim_status(
        &mut self,
        user: &UserContext,
        claim_id: &ClaimId,
        status: ClaimStatus,
    ) -> Result<(), StoreError> {
        if !user.can_review_claims() {
            warn!(user = %user.user_id, role = ?user.role, "rejected status update");
            return Err(StoreError::Unauthorized {
                role: user.role,
                action: "update claim status",
            });
        }

        let claim = self
            .claims
            .iter_mut()
            .find(|c| &c.id == claim_id)
            .ok_or_else(|| StoreError::ClaimNotFound(claim_id.clone()))?;

        claim.set_status(status, today());
        info!(claim_id = %claim_id, status = ?status, user = %user.user_id, "claim status updated");

        self.notify();
        Ok(())
    }

    fn validate_submission(&self, submission: &ClaimSubmission) -> Result<(), StoreError> {
        if submission.description.trim().is_empty() {
            return Err(StoreError::validation("description must not be empty"));
        }
        if submission.amount.is_negative() {
            return Err(StoreError::validation("claim amount must be non-negative"));
        }
        // The book is single-currency; the aggregation sums rely on it.
        if submission.amount.currency() != Currency::USD {
            return Err(StoreError::validation(format!(
                "claim amount must be in USD, got {}",
                submission.amount.currency()
            )));
        }
        if self.find_policy(&submission.policy_id).is_none() {
            return Err(StoreError::PolicyNotFound(submission.policy_id.clone()));
        }
        Ok(())
    }

    /// Generates an id not present in the current collection
    fn fresh_claim_id(&self) -> ClaimId {
        loop {
            let id = ClaimId::generate();
            if self.find_claim(&id).is_none() {
                return id;
            }
        }
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        for listener in &self.listeners {
            listener(snapshot);
        }
    }
}

impl fmt::Debug for DashboardStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashboardStore")
            .field("policies", &self.policies.len())
            .field("claims", &self.claims.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
