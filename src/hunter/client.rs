//! Hunter API client
//!
//! Thin wrapper over the three Hunter endpoints the gateway exposes.

use serde_json::Value;

use crate::config::hunter::{endpoints, API_BASE_URL, API_KEY_PARAM};
use crate::config::ApiKey;
use crate::error::{HunterApiError, Result};
use crate::hunter::types::*;

/// Hunter API client
///
/// Holds no mutable state; one instance is shared by every request.
pub struct HunterClient {
    /// HTTP client
    http_client: reqwest::Client,

    /// API credential, sent as a query parameter
    api_key: ApiKey,

    /// Base URL, without trailing slash
    base_url: String,
}

impl HunterClient {
    /// Create a client against the public Hunter API
    pub fn new(api_key: ApiKey) -> Self {
        Self::with_base_url(api_key, API_BASE_URL)
    }

    /// Create a client against another base URL (proxy or mock server)
    pub fn with_base_url(api_key: ApiKey, base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    /// Find the most likely email address for a person at a domain
    pub async fn find_email(&self, params: &FindEmailParams) -> Result<Value> {
        self.get(endpoints::EMAIL_FINDER, params.query_pairs()).await
    }

    /// Verify the deliverability of an email address
    pub async fn verify_email(&self, params: &VerifyEmailParams) -> Result<Value> {
        self.get(endpoints::EMAIL_VERIFIER, params.query_pairs()).await
    }

    /// List email addresses found for a domain
    pub async fn domain_search(&self, params: &DomainSearchParams) -> Result<Value> {
        self.get(endpoints::DOMAIN_SEARCH, params.query_pairs()).await
    }

    /// Issue a GET and unwrap the `data` envelope
    async fn get(&self, endpoint: &str, params: QueryPairs) -> Result<Value> {
        let url = self.endpoint_url(endpoint);
        tracing::debug!(endpoint, params = ?params, "Hunter API request");

        let response = self
            .http_client
            .get(&url)
            .query(&params)
            .query(&[(API_KEY_PARAM, self.api_key.expose())])
            .send()
            .await
            .map_err(|e| {
                let err = HunterApiError::from(e);
                tracing::warn!(endpoint, "Hunter API transport failure: {}", err);
                err
            })?;

        let status = response.status();

        if status.is_success() {
            let envelope: DataEnvelope = response.json().await.map_err(|e| {
                HunterApiError::MalformedResponse {
                    message: e.without_url().to_string(),
                }
            })?;
            return Ok(envelope.into_data());
        }

        let body = response.text().await.unwrap_or_default();
        let details = serde_json::from_str::<ErrorEnvelope>(&body)
            .ok()
            .and_then(|envelope| envelope.first_details().map(str::to_string))
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .map(str::to_string)
                    .unwrap_or_else(|| status.to_string())
            });

        tracing::warn!(endpoint, status = status.as_u16(), "Hunter API error: {}", details);

        Err(HunterApiError::Rejected {
            status: status.as_u16(),
            details,
        }
        .into())
    }
}
