//! Job API client
//!
//! Talks to the remote job source: one call to list jobs, one to create a
//! job. The landing page depends on the [`JobSource`] trait rather than on
//! the HTTP client directly.
//!
//! # Example
//!
//! ```no_run
//! use client::{ApiConfig, JobBoardClient, JobSource};
//!
//! # async fn example() -> client::Result<()> {
//! let client = JobBoardClient::new(ApiConfig::new("http://127.0.0.1:8000"))?;
//! let jobs = client.fetch_jobs().await?;
//! println!("{} jobs", jobs.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;

pub use config::ApiConfig;
pub use error::{ClientError, Result};

use async_trait::async_trait;
use common::{Job, NewJob};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

/// Anything that can list and create jobs
#[async_trait]
pub trait JobSource: Send + Sync {
    /// Read the full job list
    async fn fetch_jobs(&self) -> Result<Vec<Job>>;

    /// Create a job from a draft; returns the stored record with its id
    async fn create_job(&self, draft: &NewJob) -> Result<Job>;
}

/// HTTP implementation of [`JobSource`]
#[derive(Debug, Clone)]
pub struct JobBoardClient {
    config: ApiConfig,
    client: Client,
}

impl JobBoardClient {
    /// Create a client with a default reqwest client (no timeout)
    pub fn new(config: ApiConfig) -> Result<Self> {
        Self::with_client(config, Client::new())
    }

    /// Create a client around a pre-configured reqwest client
    pub fn with_client(config: ApiConfig, client: Client) -> Result<Self> {
        for url in [config.list_url(), config.create_url()] {
            Url::parse(&url).map_err(|e| ClientError::InvalidUrl(format!("{url}: {e}")))?;
        }
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body)
            .map_err(|e| ClientError::Parse(format!("Failed to parse JSON response: {e}")))
    }
}

#[async_trait]
impl JobSource for JobBoardClient {
    async fn fetch_jobs(&self) -> Result<Vec<Job>> {
        let url = self.config.list_url();
        tracing::debug!(%url, "fetching job list");

        let response = self.client.get(&url).send().await?;
        let jobs: Vec<Job> = self.handle_response(response).await?;

        tracing::debug!(count = jobs.len(), "job list received");
        Ok(jobs)
    }

    async fn create_job(&self, draft: &NewJob) -> Result<Job> {
        let url = self.config.create_url();
        tracing::debug!(%url, title = %draft.title, "posting job");

        let response = self.client.post(&url).json(draft).send().await?;
        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = JobBoardClient::new(ApiConfig::new("http://localhost:8000/")).unwrap();
        assert_eq!(
            client.config().list_url(),
            "http://localhost:8000/api/api/jobs/"
        );
    }

    #[test]
    fn test_client_rejects_unparseable_base() {
        let err = JobBoardClient::new(ApiConfig::new("not a url")).unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }
}
