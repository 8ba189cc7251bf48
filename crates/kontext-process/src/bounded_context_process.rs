//! Bounded context request orchestration.

use crate::{MessagingService, ReferenceDataClient};
use kontext_core::{ContextId, KontextResult};
use kontext_security::UserPrincipal;
use kontext_service::{BoundedContextResponse, BoundedContextService};
use std::sync::Arc;
use tracing::debug;

/// Request-scoped orchestration for bounded context operations.
///
/// Sits between the HTTP resource and the domain service. The caller's
/// identity is resolved at the transport boundary and handed in here;
/// external collaborators are injected at construction and available to
/// request orchestration.
pub struct BoundedContextProcess {
    service: Arc<dyn BoundedContextService>,
    reference_data: Arc<dyn ReferenceDataClient>,
    messaging: Arc<dyn MessagingService>,
}

impl BoundedContextProcess {
    /// Creates a new process layer over the given service and
    /// collaborators.
    #[must_use]
    pub fn new(
        service: Arc<dyn BoundedContextService>,
        reference_data: Arc<dyn ReferenceDataClient>,
        messaging: Arc<dyn MessagingService>,
    ) -> Self {
        Self {
            service,
            reference_data,
            messaging,
        }
    }

    /// Gets a bounded context record on behalf of the authenticated caller.
    ///
    /// The read has no side effects; the record comes back exactly as the
    /// domain service materializes it.
    pub async fn get(
        &self,
        principal: &UserPrincipal,
        id: ContextId,
    ) -> KontextResult<BoundedContextResponse> {
        debug!(
            caller = %principal.username,
            "Process: get bounded context {}",
            id
        );

        self.service.get(id).await
    }

    /// Returns the reference data collaborator.
    #[must_use]
    pub fn reference_data(&self) -> &Arc<dyn ReferenceDataClient> {
        &self.reference_data
    }

    /// Returns the messaging collaborator.
    #[must_use]
    pub fn messaging(&self) -> &Arc<dyn MessagingService> {
        &self.messaging
    }
}

impl std::fmt::Debug for BoundedContextProcess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundedContextProcess").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Notification, SelectItemDto};
    use async_trait::async_trait;
    use kontext_core::KontextError;
    use std::sync::Mutex;

    struct FakeService {
        records: Vec<BoundedContextResponse>,
    }

    #[async_trait]
    impl BoundedContextService for FakeService {
        async fn get(&self, id: ContextId) -> KontextResult<BoundedContextResponse> {
            self.records
                .iter()
                .find(|r| r.id == id)
                .cloned()
                .ok_or_else(|| KontextError::not_found("BoundedContext", id))
        }
    }

    /// Stubbed reference data client, mirroring the mocked collaborator the
    /// read path never calls.
    struct StubReferenceDataClient {
        calls: Mutex<u32>,
    }

    #[async_trait]
    impl ReferenceDataClient for StubReferenceDataClient {
        async fn select(
            &self,
            _category: i32,
            codes: &[i32],
        ) -> KontextResult<Vec<SelectItemDto>> {
            *self.calls.lock().unwrap() += 1;
            Ok(codes
                .iter()
                .map(|c| SelectItemDto::from(*c, format!("label-{}", c)))
                .collect())
        }
    }

    struct RecordingMessagingService {
        sent: Mutex<Vec<Notification>>,
    }

    #[async_trait]
    impl MessagingService for RecordingMessagingService {
        async fn send(&self, notification: Notification) -> KontextResult<()> {
            self.sent.lock().unwrap().push(notification);
            Ok(())
        }
    }

    fn process_with(records: Vec<BoundedContextResponse>) -> BoundedContextProcess {
        BoundedContextProcess::new(
            Arc::new(FakeService { records }),
            Arc::new(StubReferenceDataClient {
                calls: Mutex::new(0),
            }),
            Arc::new(RecordingMessagingService {
                sent: Mutex::new(Vec::new()),
            }),
        )
    }

    fn seeded_response() -> BoundedContextResponse {
        BoundedContextResponse {
            id: ContextId::new(1),
            username: "usertest".to_string(),
            password: "passTest".to_string(),
        }
    }

    fn authenticated_principal() -> UserPrincipal {
        UserPrincipal::new(ContextId::new(1), "usertest".to_string())
    }

    #[tokio::test]
    async fn test_get_delegates_to_service() {
        let process = process_with(vec![seeded_response()]);

        let response = process
            .get(&authenticated_principal(), ContextId::new(1))
            .await
            .unwrap();
        assert_eq!(response, seeded_response());
    }

    #[tokio::test]
    async fn test_get_propagates_not_found() {
        let process = process_with(vec![]);

        let err = process
            .get(&authenticated_principal(), ContextId::new(1))
            .await
            .unwrap_err();
        assert!(matches!(err, KontextError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_does_not_touch_collaborators() {
        let reference_data = Arc::new(StubReferenceDataClient {
            calls: Mutex::new(0),
        });
        let messaging = Arc::new(RecordingMessagingService {
            sent: Mutex::new(Vec::new()),
        });
        let process = BoundedContextProcess::new(
            Arc::new(FakeService {
                records: vec![seeded_response()],
            }),
            reference_data.clone(),
            messaging.clone(),
        );

        process
            .get(&authenticated_principal(), ContextId::new(1))
            .await
            .unwrap();

        assert_eq!(*reference_data.calls.lock().unwrap(), 0);
        assert!(messaging.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_collaborators_are_reachable() {
        let process = process_with(vec![]);

        let items = process
            .reference_data()
            .select(3, &[2])
            .await
            .unwrap();
        assert_eq!(items, vec![SelectItemDto::from(2, "label-2")]);

        process
            .messaging()
            .send(Notification::new("registry.ping", "hello"))
            .await
            .unwrap();
    }
}
