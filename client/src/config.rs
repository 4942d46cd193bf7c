//! Endpoint configuration
//!
//! One base URL serves both the listing and the create endpoint.

/// Default base URL of the job API
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default path of the job listing endpoint
pub const DEFAULT_LIST_PATH: &str = "/api/api/jobs/";

/// Default path of the job creation endpoint
pub const DEFAULT_CREATE_PATH: &str = "/api/jobs/";

/// Where the job API lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub list_path: String,
    pub create_path: String,
}

impl ApiConfig {
    /// Config for `base_url` with the default endpoint paths
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_paths(mut self, list_path: impl Into<String>, create_path: impl Into<String>) -> Self {
        self.list_path = list_path.into();
        self.create_path = create_path.into();
        self
    }

    pub fn list_url(&self) -> String {
        join(&self.base_url, &self.list_path)
    }

    pub fn create_url(&self) -> String {
        join(&self.base_url, &self.create_path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            list_path: DEFAULT_LIST_PATH.to_string(),
            create_path: DEFAULT_CREATE_PATH.to_string(),
        }
    }
}

fn join(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let config = ApiConfig::default();
        assert_eq!(config.list_url(), "http://127.0.0.1:8000/api/api/jobs/");
        assert_eq!(config.create_url(), "http://127.0.0.1:8000/api/jobs/");
    }

    #[test]
    fn test_trailing_slash_on_base() {
        let config = ApiConfig::new("https://jobs.example.com/");
        assert_eq!(config.list_url(), "https://jobs.example.com/api/api/jobs/");
    }

    #[test]
    fn test_custom_paths_share_base() {
        let config = ApiConfig::new("http://localhost:9000").with_paths("jobs", "/jobs/new");
        assert_eq!(config.list_url(), "http://localhost:9000/jobs");
        assert_eq!(config.create_url(), "http://localhost:9000/jobs/new");
    }
}
