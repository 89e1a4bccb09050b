//! API configuration.

/// Where the todo backend lives.
///
/// # Configuration
///
/// Set the `TODO_API_URL` environment variable to point at the backend;
/// defaults to the local development server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the todo API, without trailing slash.
    pub base_url: String,
}

impl ApiConfig {
    /// Default API base for local development.
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:3000/api";

    /// Create a configuration with an explicit base URL.
    ///
    /// A trailing slash is stripped so request paths can always be joined
    /// with a single `/`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Read the configuration from the environment.
    ///
    /// Uses `TODO_API_URL` when set, otherwise the local default.
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var("TODO_API_URL") {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::new(Self::DEFAULT_BASE_URL),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped() {
        let config = ApiConfig::new("http://example.com/api///");
        assert_eq!(config.base_url, "http://example.com/api");
    }

    #[test]
    fn default_points_at_local_backend() {
        assert_eq!(ApiConfig::default().base_url, ApiConfig::DEFAULT_BASE_URL);
    }
}
