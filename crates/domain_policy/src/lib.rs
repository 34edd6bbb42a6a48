//! Policy Domain
//!
//! Policies are the insurance contracts that claims are filed against.
//! In this core they are created once from seed data and never mutated;
//! the dashboard reads them for coverage and premium aggregates.

pub mod error;
pub mod policy;

pub use error::PolicyError;
pub use policy::{Policy, PolicyStatus};
