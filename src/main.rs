use vapi_rs::config::AppConfig;
use vapi_rs::sink::TracingSink;
use vapi_rs::types::AppState;

use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() {
    let subscriber = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_file(true)
                .with_line_number(true),
        )
        .with(tracing_subscriber::filter::Targets::new().with_targets([
            ("hyper", tracing_subscriber::filter::LevelFilter::OFF),
            ("vapi_rs", tracing_subscriber::filter::LevelFilter::DEBUG),
        ]));
    tracing::subscriber::set_global_default(subscriber).unwrap();

    // A missing API key must exit before any traffic is served.
    let config = AppConfig::load_from_env().unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });
    info!(config = ?config, "configuration loaded");

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app_state = Arc::new(AppState::new(config, Arc::new(TracingSink)));
    let app = vapi_rs::router(app_state);

    info!(%addr, "vapi-rs listening");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
