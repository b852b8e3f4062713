//! HTTP relay forwarding outbound phone-call requests to the Vapi voice API,
//! plus verification of its webhook callbacks.

pub mod config;
pub mod error;
pub mod handlers;
pub mod idempotency;
pub mod signature;
pub mod sink;
pub mod types;
pub mod vapi;

pub use handlers::router;
