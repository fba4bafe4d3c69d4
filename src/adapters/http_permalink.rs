//! HTTP adapter for the permalink service.
//!
//! Implements [`PermalinkService`] against the dashboard backend's permalink
//! endpoint using reqwest.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::{PermalinkError, ShareResult};
use crate::traits::{PermalinkRequest, PermalinkService};

/// Body returned by the permalink endpoint.
#[derive(Debug, Clone, Deserialize)]
struct PermalinkResponse {
    /// Absolute short-link URL.
    url: String,
}

/// Permalink client backed by the dashboard backend.
///
/// # Example
///
/// ```ignore
/// use dashlink::adapters::HttpPermalinkClient;
///
/// let client = HttpPermalinkClient::new("https://bi.example.com")
///     .with_auth("access-token");
/// let url = client.create_permalink(&request).await?;
/// ```
pub struct HttpPermalinkClient {
    /// Base URL of the dashboard backend
    pub base_url: String,
    /// Reusable HTTP client
    client: Client,
    /// Optional authentication token for Bearer auth
    auth_token: Option<String>,
}

impl HttpPermalinkClient {
    /// Create a new client for the given backend base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
            auth_token: None,
        }
    }

    /// Set the authentication token for Bearer auth.
    pub fn with_auth(mut self, token: &str) -> Self {
        self.auth_token = Some(token.to_string());
        self
    }

    /// Helper to add auth header to a request builder if token is set.
    fn add_auth_header(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(ref token) = self.auth_token {
            builder.header("Authorization", format!("Bearer {}", token))
        } else {
            builder
        }
    }

    fn endpoint(&self, dashboard_id: &str) -> String {
        format!(
            "{}/api/v1/dashboard/{}/permalink",
            self.base_url.trim_end_matches('/'),
            dashboard_id
        )
    }
}

#[async_trait]
impl PermalinkService for HttpPermalinkClient {
    /// Persist the view state and return the short-link URL.
    ///
    /// POST /api/v1/dashboard/{id}/permalink
    async fn create_permalink(&self, request: &PermalinkRequest) -> ShareResult<String> {
        let url = self.endpoint(&request.dashboard_id);

        let response = self
            .add_auth_header(self.client.post(&url))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(PermalinkError::from)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(PermalinkError::ServerError { status, message }.into());
        }

        let text = response.text().await.map_err(PermalinkError::from)?;
        let parsed: PermalinkResponse =
            serde_json::from_str(&text).map_err(|err| PermalinkError::InvalidResponse {
                message: format!(
                    "{}; body: {}",
                    err,
                    text.chars().take(200).collect::<String>()
                ),
            })?;

        tracing::debug!("Permalink created for dashboard {}", request.dashboard_id);
        Ok(parsed.url)
    }
}
