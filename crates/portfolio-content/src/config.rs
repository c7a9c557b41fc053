//! Client Configuration
//!
//! The backend location is a build-time constant; there is no runtime config file.

/// Base URL used when `PORTFOLIO_API_BASE` was not set at compile time
pub const DEFAULT_API_BASE: &str = "http://localhost:8070/api/portfolio";

/// Settings for [`crate::ContentClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Absolute base URL every endpoint path is appended to (no trailing slash)
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Configuration baked in by the build (`PORTFOLIO_API_BASE`), falling back to localhost
    pub fn from_build_env() -> Self {
        Self::new(option_env!("PORTFOLIO_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }

    /// Full URL for a relative endpoint such as `/projects`
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}/{}", self.base_url, endpoint)
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ClientConfig::new("http://example.test:8070/api/portfolio/");
        assert_eq!(config.base_url, "http://example.test:8070/api/portfolio");
    }

    #[test]
    fn test_endpoint_url() {
        let config = ClientConfig::new(DEFAULT_API_BASE);
        assert_eq!(
            config.endpoint_url("/projects"),
            "http://localhost:8070/api/portfolio/projects"
        );
        assert_eq!(
            config.endpoint_url("health"),
            "http://localhost:8070/api/portfolio/health"
        );
    }
}
