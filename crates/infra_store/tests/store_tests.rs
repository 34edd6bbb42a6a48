//! Integration tests for the entity store

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use core_kernel::{ClaimId, Currency, Money, PolicyId};
use domain_claims::{ClaimStatus, ClaimSubmission, FixedScorer, RandomScorer};
use domain_policy::{Policy, PolicyStatus};
use infra_store::{DashboardStore, StoreError, UserContext};

fn single_policy_book() -> Vec<Policy> {
    vec![Policy::new(
        PolicyId::new("1"),
        "Auto Insurance",
        Money::new(dec!(1200), Currency::USD),
        Money::new(dec!(100000), Currency::USD),
        PolicyStatus::Active,
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        "Comprehensive auto insurance coverage",
    )
    .unwrap()]
}

fn fender_bender() -> ClaimSubmission {
    ClaimSubmission {
        policy_id: PolicyId::new("1"),
        claim_type: "Auto Accident".to_string(),
        amount: Money::new(dec!(5000), Currency::USD),
        description: "fender bender".to_string(),
        documents: vec![],
    }
}

#[test]
fn test_submit_claim_scenario() {
    let mut store = DashboardStore::with_policies(RandomScorer, single_policy_book());
    let agent = UserContext::agent("bob");

    let id = store.submit_claim(&agent, fender_bender()).unwrap();

    let claim = store.claims().last().unwrap();
    assert_eq!(claim.id, id);
    assert_eq!(claim.status, ClaimStatus::Pending);
    assert_eq!(claim.amount.amount(), dec!(5000));
    assert_eq!(claim.date_submitted, claim.last_updated);

    let score = claim.fraud_score.unwrap().value();
    assert!((0.0..1.0).contains(&score));
}

#[test]
fn test_submitted_claims_append_in_order() {
    let mut store = DashboardStore::with_policies(RandomScorer, single_policy_book());
    let agent = UserContext::agent("bob");

    let first = store.submit_claim(&agent, fender_bender()).unwrap();
    let second = store.submit_claim(&agent, fender_bender()).unwrap();

    let ids: Vec<_> = store.claims().iter().map(|c| c.id.clone()).collect();
    assert_eq!(ids, vec![first, second]);
}

#[test]
fn test_update_status_on_unknown_id_is_not_found() {
    let mut store = DashboardStore::new(RandomScorer);
    let admin = UserContext::admin("alice");

    let result = store.update_claim_status(
        &admin,
        &ClaimId::new("does-not-exist"),
        ClaimStatus::Approved,
    );

    assert!(matches!(result, Err(StoreError::ClaimNotFound(_))));
    assert!(store.claims().is_empty());
}

#[test]
fn test_update_status_requires_admin() {
    let mut store = DashboardStore::seeded(RandomScorer);
    let agent = UserContext::agent("bob");
    let before = store.find_claim(&ClaimId::new("3")).unwrap().status;

    let result = store.update_claim_status(&agent, &ClaimId::new("3"), ClaimStatus::Approved);

    assert!(matches!(result, Err(StoreError::Unauthorized { .. })));
    assert_eq!(store.find_claim(&ClaimId::new("3")).unwrap().status, before);
}

#[test]
fn test_double_approve_is_idempotent() {
    let mut store = DashboardStore::seeded(RandomScorer);
    let admin = UserContext::admin("alice");
    let id = ClaimId::new("3");

    store
        .update_claim_status(&admin, &id, ClaimStatus::Approved)
        .unwrap();
    assert_eq!(store.find_claim(&id).unwrap().status, ClaimStatus::Approved);

    store
        .update_claim_status(&admin, &id, ClaimStatus::Approved)
        .unwrap();
    let claim = store.find_claim(&id).unwrap();
    assert_eq!(claim.status, ClaimStatus::Approved);
    assert!(claim.last_updated >= claim.date_submitted);
}

#[test]
fn test_status_update_leaves_other_fields_alone() {
    let mut store = DashboardStore::seeded(FixedScorer::new(0.33).unwrap());
    let admin = UserContext::admin("alice");
    let id = ClaimId::new("1");
    let before = store.find_claim(&id).unwrap().clone();

    store
        .update_claim_status(&admin, &id, ClaimStatus::Rejected)
        .unwrap();

    let after = store.find_claim(&id).unwrap();
    assert_eq!(after.status, ClaimStatus::Rejected);
    assert_eq!(after.amount, before.amount);
    assert_eq!(after.description, before.description);
    assert_eq!(after.documents, before.documents);
    assert_eq!(after.fraud_score, before.fraud_score);
    assert_eq!(after.date_submitted, before.date_submitted);
}

#[test]
fn test_fraud_score_assigned_by_scorer_and_stable() {
    let mut store = DashboardStore::with_policies(
        FixedScorer::new(0.42).unwrap(),
        single_policy_book(),
    );
    let agent = UserContext::agent("bob");
    let admin = UserContext::admin("alice");

    let id = store.submit_claim(&agent, fender_bender()).unwrap();
    assert_eq!(store.find_claim(&id).unwrap().fraud_score.unwrap().value(), 0.42);

    store
        .update_claim_status(&admin, &id, ClaimStatus::Processing)
        .unwrap();
    assert_eq!(store.find_claim(&id).unwrap().fraud_score.unwrap().value(), 0.42);
}

#[test]
fn test_submission_validation() {
    let mut store = DashboardStore::with_policies(RandomScorer, single_policy_book());
    let agent = UserContext::agent("bob");

    let mut blank = fender_bender();
    blank.description = "   ".to_string();
    assert!(matches!(
        store.submit_claim(&agent, blank),
        Err(StoreError::Validation(_))
    ));

    let mut negative = fender_bender();
    negative.amount = Money::new(dec!(-100), Currency::USD);
    assert!(matches!(
        store.submit_claim(&agent, negative),
        Err(StoreError::Validation(_))
    ));

    let mut dangling = fender_bender();
    dangling.policy_id = PolicyId::new("999");
    assert!(matches!(
        store.submit_claim(&agent, dangling),
        Err(StoreError::PolicyNotFound(_))
    ));

    let mut foreign = fender_bender();
    foreign.amount = Money::new(dec!(5000), Currency::EUR);
    assert!(matches!(
        store.submit_claim(&agent, foreign),
        Err(StoreError::Validation(_))
    ));

    assert!(store.claims().is_empty());
}

#[test]
fn test_seeded_store_contents() {
    let store = DashboardStore::seeded(RandomScorer);

    assert_eq!(store.policies().len(), 3);
    assert_eq!(store.claims().len(), 3);
    assert!(store.find_policy(&PolicyId::new("2")).is_some());
    assert!(store.find_claim(&ClaimId::new("2")).is_some());
    assert!(store.find_claim(&ClaimId::new("nope")).is_none());
}

#[test]
fn test_subscribers_fire_on_successful_mutations_only() {
    let mut store = DashboardStore::with_policies(RandomScorer, single_policy_book());
    let calls = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&calls);
    store.subscribe(move |snapshot| {
        assert_eq!(snapshot.policies.len(), 1);
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let agent = UserContext::agent("bob");
    let admin = UserContext::admin("alice");

    let id = store.submit_claim(&agent, fender_bender()).unwrap();
    store
        .update_claim_status(&admin, &id, ClaimStatus::Processing)
        .unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    // Failed mutations do not notify.
    let _ = store.update_claim_status(&agent, &id, ClaimStatus::Approved);
    let _ = store.update_claim_status(&admin, &ClaimId::new("missing"), ClaimStatus::Approved);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_new_claim_ids_do_not_collide_with_seed() {
    let mut store = DashboardStore::seeded(RandomScorer);
    let agent = UserContext::agent("bob");

    let mut submission = fender_bender();
    submission.policy_id = PolicyId::new("1");
    let id = store.submit_claim(&agent, submission).unwrap();

    let matching = store.claims().iter().filter(|c| c.id == id).count();
    assert_eq!(matching, 1);
    assert_eq!(store.claims().len(), 4);
}
