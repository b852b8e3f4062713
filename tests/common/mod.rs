#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use serde_json::Value;
use vapi_rs::config::AppConfig;
use vapi_rs::sink::EventSink;
use vapi_rs::types::AppState;

/// Sink that remembers every event it receives, so tests can assert on the
/// presence or absence of the logging side effect.
pub struct RecordingSink {
    pub events: Mutex<Vec<(String, Value)>>,
}

impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            events: Mutex::new(Vec::new()),
        })
    }

    pub fn recorded(&self) -> Vec<(String, Value)> {
        self.events.lock().unwrap().clone()
    }
}

impl EventSink for RecordingSink {
    fn record(&self, event_type: &str, data: &Value) {
        self.events
            .lock()
            .unwrap()
            .push((event_type.to_string(), data.clone()));
    }
}

pub fn test_config(vapi_base_url: &str) -> AppConfig {
    AppConfig {
        port: 0,
        vapi_api_key: "test-key".to_string(),
        vapi_base_url: vapi_base_url.to_string(),
        default_assistant_id: Some("asst_default".to_string()),
        default_phone_number_id: Some("phone_default".to_string()),
        webhook_secret: None,
        verify_signature: false,
        upstream_timeout: Duration::from_secs(5),
    }
}

pub fn app(config: AppConfig, sink: Arc<dyn EventSink>) -> Router {
    vapi_rs::router(Arc::new(AppState::new(config, sink)))
}

pub async fn response_json(response: axum::response::Response) -> Value {
    let bytes = hyper::body::to_bytes(response.into_body())
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body is not JSON")
}
