use std::env;
use std::error::Error;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_VAPI_BASE_URL: &str = "https://api.vapi.ai";

/// Process-wide configuration, read once at startup and immutable afterwards.
/// Handlers receive it through `AppState`; nothing reads the environment past
/// this point.
#[derive(Clone)]
pub struct AppConfig {
    pub port: u16,
    pub vapi_api_key: String,
    pub vapi_base_url: String,
    pub default_assistant_id: Option<String>,
    pub default_phone_number_id: Option<String>,
    pub webhook_secret: Option<String>,
    pub verify_signature: bool,
    pub upstream_timeout: Duration,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("port", &self.port)
            .field("vapi_api_key", &"***REDACTED***")
            .field("vapi_base_url", &self.vapi_base_url)
            .field("default_assistant_id", &self.default_assistant_id)
            .field("default_phone_number_id", &self.default_phone_number_id)
            .field(
                "webhook_secret",
                &self.webhook_secret.as_ref().map(|_| "***REDACTED***"),
            )
            .field("verify_signature", &self.verify_signature)
            .field("upstream_timeout", &self.upstream_timeout)
            .finish()
    }
}

impl AppConfig {
    pub fn load_from_env() -> Result<Self, Box<dyn Error>> {
        dotenvy::dotenv().ok();

        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()?;

        let vapi_api_key =
            env::var("VAPI_API_KEY").map_err(|_| "Missing VAPI_API_KEY in env")?;

        let vapi_base_url = env::var("VAPI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_VAPI_BASE_URL.to_string());

        let webhook_secret = env::var("VAPI_WEBHOOK_SECRET").ok().filter(|s| !s.is_empty());

        // Defaults to on exactly when a secret is present; can be set explicitly.
        let verify_signature = match env::var("VERIFY_WEBHOOK_SIGNATURE") {
            Ok(raw) => raw
                .parse::<bool>()
                .map_err(|_| format!("VERIFY_WEBHOOK_SIGNATURE must be a bool, got '{raw}'"))?,
            Err(_) => webhook_secret.is_some(),
        };

        let timeout_secs = env::var("VAPI_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()?;

        let config = AppConfig {
            port,
            vapi_api_key,
            vapi_base_url,
            default_assistant_id: env::var("VAPI_ASSISTANT_ID").ok().filter(|s| !s.is_empty()),
            default_phone_number_id: env::var("VAPI_PHONE_NUMBER_ID")
                .ok()
                .filter(|s| !s.is_empty()),
            webhook_secret,
            verify_signature,
            upstream_timeout: Duration::from_secs(timeout_secs),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        if self.verify_signature && self.webhook_secret.is_none() {
            return Err(
                "VERIFY_WEBHOOK_SIGNATURE is enabled but VAPI_WEBHOOK_SECRET is not set".into(),
            );
        }
        if self.vapi_base_url.is_empty() {
            return Err("VAPI_BASE_URL must not be empty".into());
        }
        Ok(())
    }
}
