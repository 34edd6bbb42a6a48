//! In-Memory Entity Store
//!
//! This crate owns the authoritative snapshot of policies and claims for the
//! process lifetime and provides the only mutation surface. There is no
//! network or disk layer: every operation is a synchronous call that runs to
//! completion, so no partially-updated state is ever observable.
//!
//! Callers hold the store exclusively (or behind a mutex in a multi-client
//! adaptation); reads hand out borrowed slices of the live collections.

pub mod access;
pub mod error;
pub mod seed;
pub mod store;

pub use access::{Role, UserContext};
pub use error::StoreError;
pub use store::{DashboardStore, Snapshot};
