//! Aggregation Engine
//!
//! Pure, stateless functions deriving dashboard and analytics metrics from a
//! snapshot of the entity store. Nothing here mutates or fails: the same
//! snapshot always produces the same numbers, which is what makes these
//! functions trivial to test and safe to recompute on every render.
//!
//! The dashboard book is single-currency (USD); monetary folds start from a
//! USD zero.

pub mod claims;
pub mod policies;

pub use claims::{
    approval_rate, approved_claim_amount, average_payout, claim_type_distribution,
    count_by_status, fraud_risk_buckets, high_risk_count, monthly_claim_volume, pending_amount,
    recent_claims, total_claim_amount, MonthlyVolume, RiskBuckets, StatusCounts, TypeBreakdown,
};
pub use policies::{active_policy_count, total_coverage, total_premium};
