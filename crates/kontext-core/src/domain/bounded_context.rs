//! Bounded context entity.

use crate::{ContextId, Entity};
use serde::{Deserialize, Serialize};

/// A bounded context registry record.
///
/// The identifier is assigned by the store on creation; `username` and
/// `password` are stored as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundedContext {
    /// Unique identifier, assigned by the store.
    pub id: ContextId,

    /// Account name, set at creation.
    pub username: String,

    /// Credential, stored as supplied.
    pub password: String,
}

impl BoundedContext {
    /// Creates a new record that has not been persisted yet.
    ///
    /// The id is a placeholder until the store assigns one on save.
    #[must_use]
    pub fn new(username: String, password: String) -> Self {
        Self {
            id: ContextId::new(0),
            username,
            password,
        }
    }

    /// Creates a record with a known identifier, as read back from the
    /// store.
    #[must_use]
    pub fn with_id(id: ContextId, username: String, password: String) -> Self {
        Self {
            id,
            username,
            password,
        }
    }

    /// Whether the store has assigned an identifier to this record.
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.id.into_inner() != 0
    }
}

impl Entity<ContextId> for BoundedContext {
    fn id(&self) -> &ContextId {
        &self.id
    }
}
