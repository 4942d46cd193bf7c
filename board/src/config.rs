//! Runtime configuration
//!
//! Built by the binary from command-line flags and environment variables.

use client::{ApiConfig, JobBoardClient};

#[derive(Debug, Clone)]
pub struct Config {
    /// Where the job API lives; one base URL for listing and posting
    pub api: ApiConfig,
    /// Explicit tracing filter, overriding `RUST_LOG`
    pub log_filter: Option<String>,
}

impl Config {
    pub fn client(&self) -> client::Result<JobBoardClient> {
        JobBoardClient::new(self.api.clone())
    }
}
