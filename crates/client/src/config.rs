//! Shared client configuration.

/// Production API endpoint, used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://laundromat-server.vercel.app/api/v1";

/// Environment variable that overrides the base URL.
pub const BASE_URL_ENV: &str = "WASHBOARD_API_BASE_URL";

/// Client-type discriminator sent with every request.
pub const CLIENT_TYPE: &str = "web";

/// Base configuration shared by every resource client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub client_type: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            client_type: CLIENT_TYPE.to_owned(),
        }
    }
}

impl ApiConfig {
    /// Configuration from the environment, falling back to the production
    /// endpoint.
    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        Self {
            base_url,
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
