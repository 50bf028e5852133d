use anyhow::Result;
use colored::*;
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::time::{Duration, Instant};

use crate::api_client::{ApiClient, QueryResponse};
use crate::output::{print_event, TestResult};
use crate::sse_client::Connection;

/// Extra time allowed on top of the heartbeat period before a heartbeat counts as missing.
const HEARTBEAT_GRACE: Duration = Duration::from_secs(3);

pub async fn test_connection(sse: &mut Connection) -> Result<TestResult> {
    let start = Instant::now();

    println!("\n{}", "=== TEST: Welcome Event ===".bright_cyan().bold());
    println!("{} Waiting for the welcome event...", "→".blue());

    let outcome = match sse.next_event(Duration::from_secs(5)).await {
        Ok(event) => {
            print_event(&sse.label, &event);
            check_welcome(&event.data)
        }
        Err(e) => Err(e.to_string()),
    };

    Ok(report("connection_test", outcome, start))
}

pub async fn test_heartbeat(sse: &mut Connection, period: Duration) -> Result<TestResult> {
    let start = Instant::now();

    println!("\n{}", "=== TEST: Heartbeat ===".bright_cyan().bold());
    println!(
        "{} Waiting up to {:?} for a heartbeat event...",
        "→".blue(),
        period + HEARTBEAT_GRACE
    );

    let outcome = match sse.next_event(period + HEARTBEAT_GRACE).await {
        Ok(event) => {
            print_event(&sse.label, &event);
            check_heartbeat(&event.data)
        }
        Err(e) => Err(e.to_string()),
    };

    Ok(report("heartbeat", outcome, start))
}

pub async fn test_user_data_query(api_client: &ApiClient) -> Result<TestResult> {
    let start = Instant::now();

    println!("\n{}", "=== TEST: get_user_data ===".bright_cyan().bold());
    println!("{} Querying get_user_data...", "→".blue());

    let response = api_client.query("get_user_data").await?;
    if let Some(documents) = response.body.as_array() {
        println!("{} {} user document(s) returned", "→".blue(), documents.len());
    }

    Ok(report("get_user_data", check_user_data(&response), start))
}

pub async fn test_unknown_query(api_client: &ApiClient) -> Result<TestResult> {
    let start = Instant::now();

    println!("\n{}", "=== TEST: Unknown Query ===".bright_cyan().bold());
    println!("{} Querying delete_everything...", "→".blue());

    let response = api_client.query("delete_everything").await?;

    Ok(report("unknown_query", check_unknown_query(&response), start))
}

fn report(scenario: &str, outcome: Result<(), String>, start: Instant) -> TestResult {
    match outcome {
        Ok(()) => {
            println!("{} Verified", "✓".green());
            TestResult::pass(scenario, start.elapsed())
        }
        Err(message) => {
            println!("{} {}", "✗".red(), message);
            TestResult::fail(scenario, message, start.elapsed())
        }
    }
}

pub fn check_welcome(data: &Value) -> Result<(), String> {
    if *data == json!({"message": "MCP Server Connected"}) {
        Ok(())
    } else {
        Err(format!("Unexpected welcome payload: {data}"))
    }
}

pub fn check_heartbeat(data: &Value) -> Result<(), String> {
    let heartbeat = data
        .get("heartbeat")
        .and_then(Value::as_str)
        .ok_or_else(|| format!("Expected a heartbeat payload, got {data}"))?;

    chrono::DateTime::parse_from_rfc3339(heartbeat)
        .map(|_| ())
        .map_err(|e| format!("Heartbeat {heartbeat:?} is not an ISO-8601 timestamp: {e}"))
}

pub fn check_user_data(response: &QueryResponse) -> Result<(), String> {
    match (response.status, response.body.is_array()) {
        (StatusCode::OK, true) => Ok(()),
        (status, _) => Err(format!(
            "Expected 200 with a JSON array, got {status}: {}",
            response.body
        )),
    }
}

pub fn check_unknown_query(response: &QueryResponse) -> Result<(), String> {
    if response.status == StatusCode::BAD_REQUEST
        && response.body == json!({"error": "Unknown query"})
    {
        Ok(())
    } else {
        Err(format!(
            "Expected 400 Unknown query, got {}: {}",
            response.status, response.body
        ))
    }
}
