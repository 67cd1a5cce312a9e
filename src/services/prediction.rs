use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde_json::json;

use crate::error::AppResult;

/// Default timeout for calls to the prediction server
///
/// The batch tools have no retry logic, so a hung call would otherwise
/// stall the whole run indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the recommender's query endpoint
///
/// The recommender is an opaque external service; this trait is the seam
/// that lets the exporter run against a mock in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QueryClient: Send + Sync {
    /// POSTs `{"user": "<id>"}` and returns the raw response body
    async fn query(&self, user: &str) -> AppResult<String>;
}

/// reqwest-backed client for a prediction server's `queries.json` endpoint
pub struct PredictionQueryClient {
    http: HttpClient,
    endpoint: String,
}

impl PredictionQueryClient {
    pub fn new(endpoint: impl Into<String>) -> AppResult<Self> {
        let http = HttpClient::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl QueryClient for PredictionQueryClient {
    async fn query(&self, user: &str) -> AppResult<String> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&json!({ "user": user }))
            .send()
            .await?;
        Ok(response.text().await?)
    }
}
