//! HTTP-based messaging service client.

use async_trait::async_trait;
use kontext_config::RemoteConfig;
use kontext_core::{KontextError, KontextResult};
use kontext_process::{MessagingService, Notification};
use reqwest::Client;
use tracing::debug;

/// HTTP-based fire-and-forget notification sender.
///
/// Posts notifications to the messaging service; the caller only learns
/// whether the handoff was accepted, never about downstream processing.
pub struct HttpMessagingService {
    client: Client,
    base_url: String,
}

impl HttpMessagingService {
    /// Creates a new HTTP messaging service from remote configuration.
    pub fn new(config: &RemoteConfig) -> KontextResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| KontextError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.messaging_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a client with a custom reqwest client and base URL.
    #[must_use]
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl MessagingService for HttpMessagingService {
    async fn send(&self, notification: Notification) -> KontextResult<()> {
        debug!("HTTP messaging send: {}", notification.subject);

        let response = self
            .client
            .post(self.url("/api/v1/notifications"))
            .json(&notification)
            .send()
            .await
            .map_err(|e| {
                KontextError::external_service("messaging", format!("HTTP error: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(KontextError::external_service(
                "messaging",
                format!("HTTP error {}: {}", status, body),
            ));
        }

        Ok(())
    }
}

impl std::fmt::Debug for HttpMessagingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpMessagingService")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_send_posts_notification() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/notifications"))
            .and(body_json(serde_json::json!({
                "subject": "registry.read",
                "body": "record fetched"
            })))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpMessagingService::with_client(Client::new(), &server.uri());
        client
            .send(Notification::new("registry.read", "record fetched"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_send_maps_upstream_failure() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/notifications"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = HttpMessagingService::with_client(Client::new(), &server.uri());
        let err = client
            .send(Notification::new("registry.read", "record fetched"))
            .await
            .unwrap_err();

        assert!(matches!(err, KontextError::ExternalService { .. }));
    }
}
