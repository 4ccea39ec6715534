//! HTTP catalog client for SWAPI-compatible endpoints

use std::time::Duration;

use async_trait::async_trait;
use shared::{Category, FetchFailure, RawEntity};
use url::Url;

use crate::error::{HarvesterError, HarvesterResult};
use crate::traits::CatalogClient;

/// Public SWAPI root
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";

/// Catalog client issuing `GET {base}/{category}/{id}/`
pub struct HttpCatalogClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpCatalogClient {
    /// Create a client for `base_url` with a per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> HarvesterResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| HarvesterError::config(format!("Invalid catalog URL '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(HarvesterError::config(format!("Catalog URL '{}' cannot be a base", base_url)));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HarvesterError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// URL of one entity; SWAPI expects the trailing slash
    pub fn entity_url(&self, category: Category, id: u32) -> String {
        format!(
            "{}/{}/{}/",
            self.base_url.as_str().trim_end_matches('/'),
            category.as_str(),
            id
        )
    }
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn fetch(&self, category: Category, id: u32) -> HarvesterResult<RawEntity> {
        let url = self.entity_url(category, id);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| HarvesterError::upstream(category, id, FetchFailure::NetworkError(e.to_string())))?;

        if !response.status().is_success() {
            let failure = match response.status().as_u16() {
                404 => FetchFailure::NotFound,
                _ => FetchFailure::ServerError(response.status().to_string()),
            };
            return Err(HarvesterError::upstream(category, id, failure));
        }

        let body: serde_json::Value = response.json().await.map_err(|e| {
            HarvesterError::upstream(
                category,
                id,
                FetchFailure::InvalidResponse(format!("Failed to parse response: {}", e)),
            )
        })?;

        RawEntity::from_value(body)
            .map_err(|e| HarvesterError::upstream(category, id, FetchFailure::InvalidResponse(e.to_string())))
    }
}
