use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

pub struct ApiClient {
    client: Client,
    base_url: String,
}

/// Status and parsed JSON body of a query call.
#[derive(Debug)]
pub struct QueryResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiClient {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    pub async fn query(&self, name: &str) -> Result<QueryResponse> {
        let url = format!("{}/mcp/query", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&json!({ "query": name }))
            .send()
            .await
            .with_context(|| format!("Failed to send query {name}"))?;

        let status = response.status();
        let body = response
            .json::<Value>()
            .await
            .with_context(|| format!("Query {name} returned a non-JSON body ({status})"))?;

        Ok(QueryResponse { status, body })
    }

    pub async fn health(&self) -> Result<()> {
        let url = format!("{}/health", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to reach the health endpoint")?;

        if !response.status().is_success() {
            anyhow::bail!("Health check failed: {}", response.status());
        }

        Ok(())
    }
}
