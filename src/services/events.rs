use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;

use crate::error::{AppError, AppResult};
use crate::models::Event;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the recommender's event-ingestion API
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventClient: Send + Sync {
    /// Submits one create-event call
    async fn create_event(&self, event: &Event) -> AppResult<()>;
}

/// reqwest-backed client for a prediction server's event API
///
/// Events are POSTed to `{url}/events.json` with the access key passed as
/// a query parameter, per the server's wire protocol.
pub struct PredictionEventClient {
    http: HttpClient,
    url: String,
    access_key: String,
}

impl PredictionEventClient {
    pub fn new(url: impl Into<String>, access_key: impl Into<String>) -> AppResult<Self> {
        let http = HttpClient::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            url: url.into(),
            access_key: access_key.into(),
        })
    }
}

#[async_trait]
impl EventClient for PredictionEventClient {
    async fn create_event(&self, event: &Event) -> AppResult<()> {
        let endpoint = format!("{}/events.json", self.url.trim_end_matches('/'));
        let response = self
            .http
            .post(&endpoint)
            .query(&[("accessKey", self.access_key.as_str())])
            .json(event)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "event server returned {}",
                response.status()
            )));
        }

        Ok(())
    }
}
