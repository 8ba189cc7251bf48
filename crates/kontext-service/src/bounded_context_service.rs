//! Bounded context service trait definition.

use crate::dto::BoundedContextResponse;
use async_trait::async_trait;
use kontext_core::{ContextId, KontextResult};

/// Bounded context service trait.
#[async_trait]
pub trait BoundedContextService: Send + Sync {
    /// Gets a bounded context record by ID.
    ///
    /// Fails with a not-found error if no record matches.
    async fn get(&self, id: ContextId) -> KontextResult<BoundedContextResponse>;
}
