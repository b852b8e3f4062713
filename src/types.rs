use crate::config::AppConfig;
use crate::sink::EventSink;
use crate::vapi::VapiClient;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Inbound body for `POST /call`. Everything except the customer number is an
/// optional override of the configured defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assistant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

impl CallRequest {
    /// Names of required fields that are absent or empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self
            .customer_number
            .as_ref()
            .map_or(true, |n| n.is_empty())
        {
            missing.push("customerNumber");
        }
        missing
    }
}

/// Asynchronous event callback from Vapi: a category tag plus an arbitrary
/// payload. No ordering guarantees across events.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub data: Value,
}

pub struct AppState {
    pub config: AppConfig,
    pub vapi: VapiClient,
    pub sink: Arc<dyn EventSink>,
}

impl AppState {
    pub fn new(config: AppConfig, sink: Arc<dyn EventSink>) -> Self {
        let vapi = VapiClient::new(&config);
        Self { config, vapi, sink }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_customer_number_is_reported_missing() {
        let req: CallRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.missing_fields(), vec!["customerNumber"]);
    }

    #[test]
    fn empty_customer_number_is_reported_missing() {
        let req: CallRequest = serde_json::from_str(r#"{"customerNumber":""}"#).unwrap();
        assert_eq!(req.missing_fields(), vec!["customerNumber"]);
    }

    #[test]
    fn present_customer_number_passes() {
        let req: CallRequest =
            serde_json::from_str(r#"{"customerNumber":"+14155551234"}"#).unwrap();
        assert!(req.missing_fields().is_empty());
    }

    #[test]
    fn webhook_event_data_defaults_to_null() {
        let event: WebhookEvent = serde_json::from_str(r#"{"type":"call-started"}"#).unwrap();
        assert_eq!(event.event_type, "call-started");
        assert!(event.data.is_null());
    }
}
