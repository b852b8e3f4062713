//! Places one outbound call directly against the Vapi API, bypassing the
//! relay. Configuration comes entirely from the environment.

use vapi_rs::config::DEFAULT_VAPI_BASE_URL;

use serde_json::{json, Value};
use std::env;
use std::process;

fn require_env(missing: &mut Vec<&'static str>, name: &'static str) -> String {
    match env::var(name) {
        Ok(v) if !v.is_empty() => v,
        _ => {
            missing.push(name);
            String::new()
        }
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let mut missing = Vec::new();
    let api_key = require_env(&mut missing, "VAPI_API_KEY");
    let assistant_id = require_env(&mut missing, "VAPI_ASSISTANT_ID");
    let phone_number_id = require_env(&mut missing, "VAPI_PHONE_NUMBER_ID");
    let customer_number = require_env(&mut missing, "CUSTOMER_NUMBER");
    if !missing.is_empty() {
        eprintln!(
            "Missing required environment variable(s): {}",
            missing.join(", ")
        );
        process::exit(1);
    }

    let base_url = env::var("VAPI_BASE_URL")
        .unwrap_or_else(|_| DEFAULT_VAPI_BASE_URL.to_string());

    println!("Triggering Vapi call to {customer_number}");

    let body = json!({
        "assistantId": assistant_id,
        "phoneNumberId": phone_number_id,
        "customerNumber": customer_number,
        "metadata": {},
    });

    let resp = reqwest::Client::new()
        .post(format!("{}/call", base_url.trim_end_matches('/')))
        .header(
            reqwest::header::AUTHORIZATION,
            format!("Bearer {api_key}"),
        )
        .json(&body)
        .send()
        .await
        .unwrap_or_else(|e| {
            eprintln!("Error triggering call: {e}");
            process::exit(1);
        });

    let status = resp.status();
    let text = resp.text().await.unwrap_or_default();
    if !status.is_success() {
        eprintln!("Vapi error {status}: {text}");
        process::exit(1);
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(result) => println!(
            "Call initiated:\n{}",
            serde_json::to_string_pretty(&result).unwrap_or(text)
        ),
        Err(_) => println!("Call initiated: {text}"),
    }
}
