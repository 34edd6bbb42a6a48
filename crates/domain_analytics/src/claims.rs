//! Claim aggregates

use chrono::Datelike;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use core_kernel::{Currency, Money};
use domain_claims::{Claim, ClaimStatus, RiskBand};

/// Claim counts per status, zero-filled so every status is always present
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub pending: usize,
    pub processing: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl StatusCounts {
    /// Sum over all statuses; always equals the claim count
    pub fn total(&self) -> usize {
        self.pending + self.processing + self.approved + self.rejected
    }

    /// Count for a single status
    pub fn get(&self, status: ClaimStatus) -> usize {
        match status {
            ClaimStatus::Pending => self.pending,
            ClaimStatus::Processing => self.processing,
            ClaimStatus::Approved => self.approved,
            ClaimStatus::Rejected => self.rejected,
        }
    }
}

/// Claim counts per fraud-risk band
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskBuckets {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Count and amount aggregated per distinct claim type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeBreakdown {
    pub claim_type: String,
    pub count: usize,
    pub total_amount: Money,
}

/// Claim count and amount for one calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyVolume {
    pub year: i32,
    pub month: u32,
    pub count: usize,
    pub total_amount: Money,
}

/// Counts claims by status, covering all four statuses
pub fn count_by_status(claims: &[Claim]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for claim in claims {
        match claim.status {
            ClaimStatus::Pending => counts.pending += 1,
            ClaimStatus::Processing => counts.processing += 1,
            ClaimStatus::Approved => counts.approved += 1,
            ClaimStatus::Rejected => counts.rejected += 1,
        }
    }
    counts
}

/// Approved share of all claims as a percentage, rounded to one decimal place
///
/// Defined as 0 for an empty collection.
pub fn approval_rate(claims: &[Claim]) -> Decimal {
    if claims.is_empty() {
        return Decimal::ZERO;
    }
    let approved = claims
        .iter()
        .filter(|c| c.status == ClaimStatus::Approved)
        .count();

    (Decimal::from(approved) * dec!(100) / Decimal::from(claims.len())).round_dp(1)
}

fn sum_amounts<'a>(claims: impl Iterator<Item = &'a Claim>) -> Money {
    claims.fold(Money::zero(Currency::USD), |acc, c| acc + c.amount)
}

/// Sum of all claim amounts
pub fn total_claim_amount(claims: &[Claim]) -> Money {
    sum_amounts(claims.iter())
}

/// Sum of approved claim amounts
pub fn approved_claim_amount(claims: &[Claim]) -> Money {
    sum_amounts(claims.iter().filter(|c| c.status == ClaimStatus::Approved))
}

/// Sum of pending claim amounts
pub fn pending_amount(claims: &[Claim]) -> Money {
    sum_amounts(claims.iter().filter(|c| c.status == ClaimStatus::Pending))
}

/// Mean amount of approved claims; zero when nothing is approved yet
pub fn average_payout(claims: &[Claim]) -> Money {
    let approved = claims
        .iter()
        .filter(|c| c.status == ClaimStatus::Approved)
        .count();
    if approved == 0 {
        return Money::zero(Currency::USD);
    }
    Money::new(
        approved_claim_amount(claims).amount() / Decimal::from(approved),
        Currency::USD,
    )
}

/// Buckets claims by fraud-risk band; a missing score counts as low risk
pub fn fraud_risk_buckets(claims: &[Claim]) -> RiskBuckets {
    let mut buckets = RiskBuckets::default();
    for claim in claims {
        match claim.risk_band() {
            RiskBand::High => buckets.high += 1,
            RiskBand::Medium => buckets.medium += 1,
            RiskBand::Low => buckets.low += 1,
        }
    }
    buckets
}

/// Number of claims needing fraud attention (score above the high threshold)
pub fn high_risk_count(claims: &[Claim]) -> usize {
    claims
        .iter()
        .filter(|c| c.risk_band() == RiskBand::High)
        .count()
}

/// Count and amount per distinct claim type, in first-seen order
pub fn claim_type_distribution(claims: &[Claim]) -> Vec<TypeBreakdown> {
    let mut breakdown: Vec<TypeBreakdown> = Vec::new();
    for claim in claims {
        match breakdown
            .iter_mut()
            .find(|b| b.claim_type == claim.claim_type)
        {
            Some(entry) => {
                entry.count += 1;
                entry.total_amount = entry.total_amount + claim.amount;
            }
            None => breakdown.push(TypeBreakdown {
                claim_type: claim.claim_type.clone(),
                count: 1,
                total_amount: claim.amount,
            }),
        }
    }
    breakdown
}

/// The last `n` claims by insertion order (not by date)
pub fn recent_claims(claims: &[Claim], n: usize) -> &[Claim] {
    &claims[claims.len().saturating_sub(n)..]
}

/// Claims-over-time series grouped by submission month, chronological
pub fn monthly_claim_volume(claims: &[Claim]) -> Vec<MonthlyVolume> {
    let mut months: BTreeMap<(i32, u32), (usize, Money)> = BTreeMap::new();
    for claim in claims {
        let key = (claim.date_submitted.year(), claim.date_submitted.month());
        let entry = months
            .entry(key)
            .or_insert((0, Money::zero(Currency::USD)));
        entry.0 += 1;
        entry.1 = entry.1 + claim.amount;
    }

    months
        .into_iter()
        .map(|((year, month), (count, total_amount))| MonthlyVolume {
            year,
            month,
            count,
            total_amount,
        })
        .collect()
}
