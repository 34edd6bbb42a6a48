//! Policy aggregates

use core_kernel::{Currency, Money};
use domain_policy::Policy;

/// Number of policies currently active
pub fn active_policy_count(policies: &[Policy]) -> usize {
    policies.iter().filter(|p| p.is_active()).count()
}

/// Sum of coverage limits across the whole book
pub fn total_coverage(policies: &[Policy]) -> Money {
    policies
        .iter()
        .fold(Money::zero(Currency::USD), |acc, p| acc + p.coverage)
}

/// Sum of premiums across the whole book
pub fn total_premium(policies: &[Policy]) -> Money {
    policies
        .iter()
        .fold(Money::zero(Currency::USD), |acc, p| acc + p.premium)
}
