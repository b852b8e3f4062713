//! Places one outbound call through a running relay's `/call` route.

use serde_json::{json, Value};
use std::env;
use std::process;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let customer_number = match env::var("CUSTOMER_NUMBER") {
        Ok(v) if !v.is_empty() => v,
        _ => {
            eprintln!("Missing required environment variable(s): CUSTOMER_NUMBER");
            process::exit(1);
        }
    };
    let base_url =
        env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

    println!("Triggering Vapi call to {customer_number} via {base_url}");

    let body = json!({
        "customerNumber": customer_number,
        "metadata": { "triggeredBy": "script" },
    });

    let resp = reqwest::Client::new()
        .post(format!("{}/call", base_url.trim_end_matches('/')))
        .json(&body)
        .send()
        .await
        .unwrap_or_else(|e| {
            eprintln!("Error triggering call: {e}");
            if e.is_connect() {
                eprintln!("Make sure the relay is running (cargo run --bin vapi-rs)");
            }
            process::exit(1);
        });

    let status = resp.status();
    let text = resp.text().await.unwrap_or_default();
    if !status.is_success() {
        eprintln!("Server error {status}: {text}");
        process::exit(1);
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(result) => println!(
            "Call initiated via server:\n{}",
            serde_json::to_string_pretty(&result).unwrap_or(text)
        ),
        Err(_) => println!("Call initiated via server: {text}"),
    }
}
