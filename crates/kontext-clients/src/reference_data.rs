//! HTTP-based reference data client.

use async_trait::async_trait;
use kontext_config::RemoteConfig;
use kontext_core::{KontextError, KontextResult};
use kontext_process::{ReferenceDataClient, SelectItemDto};
use reqwest::Client;
use tracing::debug;

/// HTTP-based reference data client.
///
/// Uses HTTP/1.1 with JSON serialization against the reference data
/// service's select endpoint.
pub struct HttpReferenceDataClient {
    client: Client,
    base_url: String,
}

impl HttpReferenceDataClient {
    /// Creates a new HTTP reference data client from remote configuration.
    pub fn new(config: &RemoteConfig) -> KontextResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| KontextError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.reference_data_url.trim_end_matches('/').to_string(),
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
impl ReferenceDataClient for HttpReferenceDataClient {
    async fn select(&self, category: i32, codes: &[i32]) -> KontextResult<Vec<SelectItemDto>> {
        debug!("HTTP reference data select: category={}", category);

        let codes_param = codes
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");

        let response = self
            .client
            .get(self.url("/api/v1/referencedata/select"))
            .query(&[
                ("category", category.to_string()),
                ("codes", codes_param),
            ])
            .send()
            .await
            .map_err(|e| {
                KontextError::external_service("referencedata", format!("HTTP error: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(KontextError::external_service(
                "referencedata",
                format!("HTTP error {}: {}", status, body),
            ));
        }

        response.json().await.map_err(|e| {
            KontextError::external_service("referencedata", format!("JSON parse error: {}", e))
        })
    }
}

impl std::fmt::Debug for HttpReferenceDataClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpReferenceDataClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
