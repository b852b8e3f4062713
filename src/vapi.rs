use crate::config::AppConfig;
use crate::error::AppError;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::error;

/// Body of the outbound `POST /call` to Vapi, with request-level overrides
/// already merged over the configured defaults.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assistant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number_id: Option<String>,
    pub customer_number: String,
    pub metadata: Map<String, Value>,
}

/// The part of Vapi's response the relay passes back to its caller.
#[derive(Debug, Deserialize)]
pub struct CallCreated {
    pub id: String,
}

/// Thin client for the upstream voice-call API. One request per dispatch, no
/// retries; the idempotency key lets Vapi deduplicate caller-side retries.
pub struct VapiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl VapiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.vapi_base_url.trim_end_matches('/').to_string(),
            api_key: config.vapi_api_key.clone(),
            timeout: config.upstream_timeout,
        }
    }

    pub async fn create_call(
        &self,
        payload: &CallPayload,
        idempotency_key: &str,
    ) -> Result<CallCreated, AppError> {
        let url = format!("{}/call", self.base_url);
        let resp = self
            .http
            .post(&url)
            .header(
                http::header::AUTHORIZATION,
                format!("Bearer {}", self.api_key),
            )
            .header("Idempotency-Key", idempotency_key)
            .timeout(self.timeout)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    error!(url = %url, "Vapi call timed out");
                    AppError::UpstreamTimeout
                } else {
                    error!(error = %e, url = %url, "failed to reach Vapi");
                    AppError::Internal(format!("Failed to reach Vapi: {e}"))
                }
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Vapi rejected call request");
            return Err(AppError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        resp.json::<CallCreated>().await.map_err(|e| {
            error!(error = %e, "failed to deserialize Vapi call response");
            AppError::Internal("Unexpected response body from Vapi".to_string())
        })
    }
}
