//! Backend client configuration from environment variables.

/// Environment variable holding the backend base URL.
pub const API_URL_VAR: &str = "POKEBATTLE_API_URL";

const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// PokeBattle backend client configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL without trailing slash, e.g. `http://localhost:5000`.
    pub base_url: String,
    /// Request timeout. Ignored in the browser, where fetch has no timeout.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 15,
        }
    }
}

impl ApiConfig {
    /// Read the config from `POKEBATTLE_API_URL`.
    ///
    /// Native builds read the runtime environment (loading `.env` first);
    /// wasm builds can only see the value baked in at compile time.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let base_url = {
            dotenvy::dotenv().ok();
            std::env::var(API_URL_VAR).ok()
        };
        #[cfg(target_arch = "wasm32")]
        let base_url = option_env!("POKEBATTLE_API_URL").map(str::to_string);

        match base_url.filter(|url| !url.trim().is_empty()) {
            Some(url) => Self::default().with_base_url(url),
            None => Self::default(),
        }
    }

    /// Builder method to set the base URL. Trailing slashes are dropped.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim().trim_end_matches('/').to_string();
        self
    }

    /// Builder method to set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Absolute URL of a backend route such as `/user/signin`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_trimmed() {
        let config = ApiConfig::default().with_base_url("https://api.pokebattle.dev//");
        assert_eq!(config.base_url, "https://api.pokebattle.dev");
    }

    #[test]
    fn test_endpoint_joins_single_slash() {
        let config = ApiConfig::default().with_base_url("https://api.pokebattle.dev/");
        assert_eq!(
            config.endpoint("/user/create"),
            "https://api.pokebattle.dev/user/create"
        );
        assert_eq!(
            config.endpoint("user/signin"),
            "https://api.pokebattle.dev/user/signin"
        );
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default().with_timeout(3);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 3);
    }
}
