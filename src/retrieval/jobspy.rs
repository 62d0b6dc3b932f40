//! JobSpy retrieval client
//!
//! Talks to a JobSpy-compatible HTTP service that fans a single search out
//! to the configured job boards (Indeed, LinkedIn, Glassdoor, ...). The
//! response body is loosely typed: either a bare JSON array of postings or
//! a `{"jobs": [...]}` envelope, with no guarantees about the shape of the
//! individual postings beyond "JSON object".

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::RetrievalConfig;
use crate::models::{RawJobRecord, RetrievalRequest};
use crate::retrieval::{JobRetriever, RetrievalError};

/// HTTP client for a JobSpy-compatible retrieval service
pub struct JobSpyClient {
    client: reqwest::Client,
    endpoint: String,
}

impl JobSpyClient {
    /// Create a client against the given service base URL
    pub fn new(endpoint: String) -> Result<Self, RetrievalError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| RetrievalError::RequestFailed(e.to_string()))?;
        Ok(Self { client, endpoint })
    }

    /// Configure client from config
    pub fn from_config(config: &RetrievalConfig) -> Result<Self, RetrievalError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RetrievalError::RequestFailed(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    fn search_url(&self) -> String {
        format!("{}/jobs/search", self.endpoint.trim_end_matches('/'))
    }
}

#[async_trait]
impl JobRetriever for JobSpyClient {
    async fn fetch_jobs(
        &self,
        request: &RetrievalRequest,
    ) -> Result<Vec<RawJobRecord>, RetrievalError> {
        info!(
            search_term = %request.search_term,
            location = %request.location,
            results_wanted = request.results_wanted,
            "Requesting jobs from retrieval service"
        );

        let response = self
            .client
            .post(self.search_url())
            .json(request)
            .send()
            .await
            .map_err(|e| RetrievalError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RetrievalError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| RetrievalError::ParseError(e.to_string()))?;

        debug!("Raw retrieval response received");

        // Accept both a bare array and a {"jobs": [...]} envelope.
        let items = body
            .get("jobs")
            .and_then(Value::as_array)
            .or_else(|| body.as_array())
            .ok_or_else(|| {
                RetrievalError::ParseError("expected an array of job postings".to_string())
            })?;

        let mut records = Vec::with_capacity(items.len());
        for item in items {
            match serde_json::from_value::<RawJobRecord>(item.clone()) {
                Ok(record) => records.push(record),
                Err(error) => {
                    warn!(%error, "Skipping non-object posting in retrieval response");
                }
            }
        }

        info!(count = records.len(), "Retrieval request completed");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request() -> RetrievalRequest {
        RetrievalRequest {
            site_names: vec!["indeed".to_string(), "linkedin".to_string()],
            search_term: "veteran preferred".to_string(),
            location: "United States".to_string(),
            results_wanted: 10,
            hours_old: 24,
            country: "USA".to_string(),
        }
    }

    #[tokio::test]
    async fn parses_enveloped_job_array() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/jobs/search")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "jobs": [
                        {"title": "Logistics Coordinator", "site": "indeed"},
                        {"title": "Security Analyst", "min_amount": "NaN"}
                    ]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = JobSpyClient::new(server.url()).unwrap();
        let records = client.fetch_jobs(&request()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, Some(json!("Logistics Coordinator")));
        assert_eq!(records[1].min_amount, Some(json!("NaN")));
    }

    #[tokio::test]
    async fn parses_bare_job_array() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/jobs/search")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!([{"title": "Driver"}]).to_string())
            .create_async()
            .await;

        let client = JobSpyClient::new(server.url()).unwrap();
        let records = client.fetch_jobs(&request()).await.unwrap();
        assert_eq!(records.len(), 1);
    }

    #[tokio::test]
    async fn surfaces_http_error_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/jobs/search")
            .with_status(429)
            .with_body("rate limited")
            .create_async()
            .await;

        let client = JobSpyClient::new(server.url()).unwrap();
        let error = client.fetch_jobs(&request()).await.unwrap_err();
        match error {
            RetrievalError::Api { status, message } => {
                assert_eq!(status, 429);
                assert_eq!(message, "rate limited");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn rejects_non_array_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/jobs/search")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"message": "ok"}).to_string())
            .create_async()
            .await;

        let client = JobSpyClient::new(server.url()).unwrap();
        let error = client.fetch_jobs(&request()).await.unwrap_err();
        assert!(matches!(error, RetrievalError::ParseError(_)));
    }
}
