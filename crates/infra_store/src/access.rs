//! Caller identity and role gating
//!
//! The review action (changing a claim's status) is enforced at the store
//! boundary rather than trusting the UI to hide the button. The core only
//! needs to know who is calling and whether they hold the admin role;
//! authentication itself happens outside.

use serde::{Deserialize, Serialize};

/// Role resolved by the external session layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// May review claims and change their status
    Admin,
    /// May browse and submit claims
    Agent,
}

/// The current user, as supplied by the session collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserContext {
    pub user_id: String,
    pub role: Role,
}

impl UserContext {
    pub fn new(user_id: impl Into<String>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            role,
        }
    }

    /// Shorthand for an admin caller
    pub fn admin(user_id: impl Into<String>) -> Self {
        Self::new(user_id, Role::Admin)
    }

    /// Shorthand for a non-admin caller
    pub fn agent(user_id: impl Into<String>) -> Self {
        Self::new(user_id, Role::Agent)
    }

    /// Returns true if this user may change claim statuses
    pub fn can_review_claims(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_admin_reviews_claims() {
        assert!(UserContext::admin("alice").can_review_claims());
        assert!(!UserContext::agent("bob").can_review_claims());
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::to_string(&Role::Agent).unwrap(), "\"agent\"");
    }
}
