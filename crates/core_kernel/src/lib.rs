//! Core Kernel - Foundational types for the claims dashboard
//!
//! This crate provides the building blocks shared across the domain modules:
//! - Money types with precise decimal arithmetic
//! - Opaque string-backed identifiers for policies and claims

pub mod identifiers;
pub mod money;

pub use identifiers::{ClaimId, PolicyId};
pub use money::{Currency, Money, MoneyError};
