//! Session seed data
//!
//! The dashboard starts from a fixed book of three policies and three claims
//! so every view has something to render before the first submission.

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use core_kernel::{ClaimId, Currency, Money, PolicyId};
use domain_claims::{Claim, ClaimStatus, FraudScore};
use domain_policy::{Policy, PolicyStatus};

fn usd(amount: rust_decimal::Decimal) -> Money {
    Money::new(amount, Currency::USD)
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("seed date is valid")
}

/// The seed policy book: auto, health, and home cover for calendar year 2024
pub fn seed_policies() -> Vec<Policy> {
    let year_2024 = (day(2024, 1, 1), day(2024, 12, 31));

    [
        (
            "1",
            "Auto Insurance",
            dec!(1200),
            dec!(100000),
            "Comprehensive auto insurance coverage",
        ),
        (
            "2",
            "Health Insurance",
            dec!(2400),
            dec!(500000),
            "Premium health insurance plan",
        ),
        (
            "3",
            "Home Insurance",
            dec!(1800),
            dec!(300000),
            "Complete home and property coverage",
        ),
    ]
    .into_iter()
    .map(|(id, policy_type, premium, coverage, description)| {
        Policy::new(
            PolicyId::new(id),
            policy_type,
            usd(premium),
            usd(coverage),
            PolicyStatus::Active,
            year_2024.0,
            year_2024.1,
            description,
        )
        .expect("seed policy data is valid")
    })
    .collect()
}

/// The seed claims: one per policy, covering three lifecycle stages
pub fn seed_claims() -> Vec<Claim> {
    vec![
        Claim {
            id: ClaimId::new("1"),
            policy_id: PolicyId::new("1"),
            claim_type: "Auto Accident".to_string(),
            amount: usd(dec!(5000)),
            status: ClaimStatus::Processing,
            description: "Minor collision damage to front bumper".to_string(),
            date_submitted: day(2024, 1, 15),
            last_updated: day(2024, 1, 16),
            documents: vec!["accident_report.pdf".to_string(), "photos.zip".to_string()],
            fraud_score: Some(FraudScore::new(0.2).expect("seed score in range")),
        },
        Claim {
            id: ClaimId::new("2"),
            policy_id: PolicyId::new("2"),
            claim_type: "Medical Expense".to_string(),
            amount: usd(dec!(15000)),
            status: ClaimStatus::Approved,
            description: "Emergency room visit and treatment".to_string(),
            date_submitted: day(2024, 1, 10),
            last_updated: day(2024, 1, 12),
            documents: vec![
                "medical_bills.pdf".to_string(),
                "doctor_report.pdf".to_string(),
            ],
            fraud_score: Some(FraudScore::new(0.1).expect("seed score in range")),
        },
        Claim {
            id: ClaimId::new("3"),
            policy_id: PolicyId::new("3"),
            claim_type: "Property Damage".to_string(),
            amount: usd(dec!(25000)),
            status: ClaimStatus::Pending,
            description: "Water damage from burst pipe".to_string(),
            date_submitted: day(2024, 1, 20),
            last_updated: day(2024, 1, 20),
            documents: vec![
                "damage_photos.zip".to_string(),
                "repair_estimate.pdf".to_string(),
            ],
            fraud_score: Some(FraudScore::new(0.7).expect("seed score in range")),
        },
    ]
}
