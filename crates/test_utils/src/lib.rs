//! Shared test utilities for the claims dashboard workspace
//!
//! Builders let tests state only the fields they care about; fixtures supply
//! the standing values everything else defaults to.

pub mod builders;
pub mod fixtures;

pub use builders::{ClaimBuilder, PolicyBuilder};
pub use fixtures::{DateFixtures, MoneyFixtures};
