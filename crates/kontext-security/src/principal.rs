//! Authenticated caller principal.

use kontext_core::ContextId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The authenticated caller supplied to the process layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPrincipal {
    /// Record id of the caller.
    pub id: ContextId,
    /// Caller's account name.
    pub username: String,
    /// Caller's role set. May be empty.
    pub roles: HashSet<String>,
}

impl UserPrincipal {
    /// Creates a principal with no roles.
    #[must_use]
    pub fn new(id: ContextId, username: String) -> Self {
        Self {
            id,
            username,
            roles: HashSet::new(),
        }
    }

    /// Creates a principal with the given role set.
    #[must_use]
    pub fn with_roles(id: ContextId, username: String, roles: HashSet<String>) -> Self {
        Self {
            id,
            username,
            roles,
        }
    }

    /// Checks whether the principal carries the given role.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }
}
