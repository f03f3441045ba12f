//! HTTP client for the two account operations.

use std::sync::OnceLock;

use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::models::{CreateUserRequest, SignInRequest, UserInfo};

static CLIENT: OnceLock<ApiClient> = OnceLock::new();

/// Successful account response. Some backend versions wrap the user next to
/// the issued token, others return the user document directly.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AccountResponse {
    Wrapped {
        user: UserInfo,
        #[serde(default)]
        token: Option<String>,
    },
    Plain(UserInfo),
}

impl AccountResponse {
    fn into_user(self) -> UserInfo {
        match self {
            AccountResponse::Wrapped { mut user, token } => {
                if token.is_some() {
                    user.token = token;
                }
                user
            }
            AccountResponse::Plain(user) => user,
        }
    }
}

/// Typed client for the PokeBattle backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(config.timeout_secs));
        let http = builder.build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Create a trainer account. `POST /user/create`.
    pub async fn create_user(&self, request: &CreateUserRequest) -> Result<UserInfo> {
        tracing::debug!("Creating account for {}", request.email);
        let response: AccountResponse = self.post("/user/create", request).await?;
        Ok(response.into_user())
    }

    /// Sign in with email and password. `POST /user/signin`.
    pub async fn sign_in(&self, request: &SignInRequest) -> Result<UserInfo> {
        tracing::debug!("Signing in {}", request.email);
        let response: AccountResponse = self.post("/user/signin", request).await?;
        Ok(response.into_user())
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        let response = self.http.post(&url).json(body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            tracing::warn!("{} returned {}", url, status);
            return Err(ApiError::rejected(status.as_u16(), &text));
        }

        Ok(serde_json::from_str(&text)?)
    }
}

/// Process-wide client built from [`ApiConfig::from_env`] on first use.
pub fn default_client() -> Result<&'static ApiClient> {
    if let Some(client) = CLIENT.get() {
        return Ok(client);
    }
    let client = ApiClient::new(ApiConfig::from_env())?;
    tracing::info!("PokeBattle backend at {}", client.config().base_url);
    Ok(CLIENT.get_or_init(|| client))
}
