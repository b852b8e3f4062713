use serde_json::Value;
use tracing::info;

/// Destination for verified webhook events. The relay does nothing with an
/// event beyond handing it to the sink.
pub trait EventSink: Send + Sync {
    fn record(&self, event_type: &str, data: &Value);
}

/// Production sink: one structured log line per event.
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&self, event_type: &str, data: &Value) {
        info!(event_type = %event_type, data = %data, "vapi event");
    }
}
