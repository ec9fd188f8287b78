//! Steam store HTTP client.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};

use crate::api::resolver::{LookupOutcome, NameResolver};
use crate::api::types::AppDetailsResponse;
use crate::config::LookupConfig;
use crate::error::{Error, Result};

/// Client for the store `appdetails` endpoint.
pub struct SteamStoreApi {
    client: Client,
    endpoint: String,
}

impl SteamStoreApi {
    /// Create a new API client from the lookup settings.
    pub fn new(config: &LookupConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::Lookup(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Make a GET request for a single app ID.
    async fn get(&self, app_id: &str) -> Result<Response> {
        tracing::debug!("GET {}?appids={}", self.endpoint, app_id);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("appids", app_id)])
            .send()
            .await?;

        tracing::debug!("Response status: {}", response.status());
        Ok(response)
    }

    /// Fetch and classify the store entry for an app ID.
    pub async fn get_app_name(&self, app_id: &str) -> LookupOutcome {
        let response = match self.get(app_id).await {
            Ok(response) => response,
            Err(e) => return LookupOutcome::Error(e.to_string()),
        };

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => return LookupOutcome::Error(format!("Failed to read response: {}", e)),
        };
        tracing::debug!("App details response: {}", text);

        classify_response(app_id, status, &text)
    }
}

#[async_trait]
impl NameResolver for SteamStoreApi {
    async fn resolve(&self, identifier: &str) -> LookupOutcome {
        self.get_app_name(identifier).await
    }
}

/// Classify a raw `appdetails` response for `app_id`.
///
/// A well-formed response that lacks the requested key is `NotFound`; a
/// present entry with `success: false` is an `Error`.
pub fn classify_response(app_id: &str, status: StatusCode, body: &str) -> LookupOutcome {
    if !status.is_success() {
        return LookupOutcome::Error(format!("HTTP {}", status));
    }

    let mut details: AppDetailsResponse = match serde_json::from_str(body) {
        Ok(details) => details,
        Err(e) => {
            return LookupOutcome::Error(format!(
                "Failed to parse app details: {} - Response: {}",
                e,
                body.chars().take(200).collect::<String>()
            ))
        }
    };

    let Some(entry) = details.remove(app_id) else {
        return LookupOutcome::NotFound;
    };

    if !entry.success {
        return LookupOutcome::Error(format!("Lookup reported failure for app ID {}", app_id));
    }

    match entry.data {
        Some(data) => LookupOutcome::Resolved(data.name),
        None => LookupOutcome::Error(format!("No data returned for app ID {}", app_id)),
    }
}
