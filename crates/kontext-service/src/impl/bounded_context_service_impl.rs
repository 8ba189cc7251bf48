//! Bounded context service implementation.

use crate::bounded_context_service::BoundedContextService;
use crate::dto::BoundedContextResponse;
use async_trait::async_trait;
use kontext_core::{ContextId, KontextError, KontextResult};
use kontext_repository::BoundedContextRepository;
use std::sync::Arc;
use tracing::debug;

/// Bounded context service implementation.
pub struct BoundedContextServiceImpl {
    repository: Arc<dyn BoundedContextRepository>,
}

impl BoundedContextServiceImpl {
    /// Creates a new bounded context service.
    #[must_use]
    pub fn new(repository: Arc<dyn BoundedContextRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl BoundedContextService for BoundedContextServiceImpl {
    async fn get(&self, id: ContextId) -> KontextResult<BoundedContextResponse> {
        debug!("Getting bounded context: {}", id);

        let ctx = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| KontextError::not_found("BoundedContext", id))?;

        Ok(BoundedContextResponse::from(ctx))
    }
}

impl std::fmt::Debug for BoundedContextServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundedContextServiceImpl")
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kontext_core::{BoundedContext, Repository};
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct InMemoryRepository {
        records: Mutex<HashMap<ContextId, BoundedContext>>,
    }

    impl InMemoryRepository {
        fn with_records(records: Vec<BoundedContext>) -> Self {
            let map = records.into_iter().map(|r| (r.id, r)).collect();
            Self {
                records: Mutex::new(map),
            }
        }
    }

    #[async_trait]
    impl Repository<BoundedContext, ContextId> for InMemoryRepository {
        async fn find_by_id(&self, id: ContextId) -> KontextResult<Option<BoundedContext>> {
            Ok(self.records.lock().unwrap().get(&id).cloned())
        }

        async fn find_all(&self) -> KontextResult<Vec<BoundedContext>> {
            Ok(self.records.lock().unwrap().values().cloned().collect())
        }

        async fn save(&self, entity: &BoundedContext) -> KontextResult<BoundedContext> {
            self.records
                .lock()
                .unwrap()
                .insert(entity.id, entity.clone());
            Ok(entity.clone())
        }

        async fn update(&self, entity: &BoundedContext) -> KontextResult<BoundedContext> {
            self.records
                .lock()
                .unwrap()
                .insert(entity.id, entity.clone());
            Ok(entity.clone())
        }

        async fn delete_by_id(&self, id: ContextId) -> KontextResult<bool> {
            Ok(self.records.lock().unwrap().remove(&id).is_some())
        }

        async fn exists(&self, id: ContextId) -> KontextResult<bool> {
            Ok(self.records.lock().unwrap().contains_key(&id))
        }

        async fn count(&self) -> KontextResult<u64> {
            Ok(self.records.lock().unwrap().len() as u64)
        }
    }

    impl BoundedContextRepository for InMemoryRepository {}

    fn service_with(records: Vec<BoundedContext>) -> BoundedContextServiceImpl {
        BoundedContextServiceImpl::new(Arc::new(InMemoryRepository::with_records(records)))
    }

    #[tokio::test]
    async fn test_get_returns_matching_record() {
        let service = service_with(vec![BoundedContext::with_id(
            ContextId::new(1),
            "usertest".to_string(),
            "passTest".to_string(),
        )]);

        let response = service.get(ContextId::new(1)).await.unwrap();
        assert_eq!(response.id, ContextId::new(1));
        assert_eq!(response.username, "usertest");
        assert_eq!(response.password, "passTest");
    }

    #[tokio::test]
    async fn test_get_missing_record_is_not_found() {
        let service = service_with(vec![]);

        let err = service.get(ContextId::new(1)).await.unwrap_err();
        assert!(matches!(err, KontextError::NotFound { .. }));
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_get_is_idempotent() {
        let service = service_with(vec![BoundedContext::with_id(
            ContextId::new(1),
            "usertest".to_string(),
            "passTest".to_string(),
        )]);

        let first = service.get(ContextId::new(1)).await.unwrap();
        let second = service.get(ContextId::new(1)).await.unwrap();
        assert_eq!(first, second);
    }
}
