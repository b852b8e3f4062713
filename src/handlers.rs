use crate::error::AppError;
use crate::idempotency;
use crate::signature;
use crate::types::{AppState, CallRequest, WebhookEvent};
use crate::vapi::CallPayload;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use bytes::Bytes;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, error, warn};

pub fn router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/call", post(create_call))
        .route("/vapi/webhook", post(vapi_webhook))
        .with_state(app_state)
}

/// Liveness only; says nothing about upstream reachability.
pub async fn health() -> impl IntoResponse {
    Json(json!({ "ok": true, "service": env!("CARGO_PKG_NAME") }))
}

/// Forwards one validated call request to Vapi and relays the outcome. The
/// call is asynchronous on the provider side, hence 202 on success.
pub async fn create_call(
    State(app_state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let request: CallRequest = serde_json::from_slice(&body).map_err(|e| {
        error!(error = %e, "failed to deserialize call request");
        AppError::Internal(format!("Malformed request body: {e}"))
    })?;

    let missing = request.missing_fields();
    if !missing.is_empty() {
        return Err(AppError::MissingField(missing));
    }

    // A caller-supplied header wins verbatim; otherwise hash the body so
    // retries of the same request land on the same key.
    let idempotency_key = match headers
        .get("idempotency-key")
        .and_then(|v| v.to_str().ok())
        .filter(|k| !k.is_empty())
    {
        Some(key) => key.to_string(),
        None => idempotency::derive_key(&request),
    };
    debug!(idempotency_key = %idempotency_key, "dispatching call");

    let payload = CallPayload {
        assistant_id: request
            .assistant_id
            .clone()
            .or_else(|| app_state.config.default_assistant_id.clone()),
        phone_number_id: request
            .phone_number_id
            .clone()
            .or_else(|| app_state.config.default_phone_number_id.clone()),
        // non-empty per the missing_fields check above
        customer_number: request.customer_number.clone().unwrap_or_default(),
        metadata: request.metadata.clone().unwrap_or_default(),
    };

    let created = app_state.vapi.create_call(&payload, &idempotency_key).await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(json!({
            "ok": true,
            "id": created.id,
            "idempotencyKey": idempotency_key,
        })),
    ))
}

/// Accepts Vapi event callbacks, verifying the HMAC signature over the raw
/// body when verification is enabled. Rejected events never reach the sink.
pub async fn vapi_webhook(
    State(app_state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    if app_state.config.verify_signature {
        // config validation guarantees a secret when verification is on
        let secret = app_state
            .config
            .webhook_secret
            .as_deref()
            .unwrap_or_default();
        let provided = headers
            .get("x-vapi-signature")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        if !signature::verify(&body, provided, secret) {
            warn!("webhook signature verification failed");
            return Err(AppError::Unauthorized);
        }
    }

    let event: WebhookEvent = serde_json::from_slice(&body).map_err(|e| {
        error!(error = %e, "failed to deserialize webhook event");
        AppError::Internal(format!("Malformed webhook body: {e}"))
    })?;

    app_state.sink.record(&event.event_type, &event.data);

    Ok(Json(json!({ "ok": true })))
}
