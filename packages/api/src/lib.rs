//! # API crate: typed client for the PokeBattle backend
//!
//! Every network call the web frontend makes goes through this crate. The
//! backend itself lives elsewhere; this crate only knows its routes and JSON
//! shapes.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`] over `reqwest`, plus the lazily built process-wide client |
//! | [`config`] | [`ApiConfig`]: base URL and timeout, read from `POKEBATTLE_API_URL` |
//! | [`error`] | [`ApiError`]: backend rejections, transport and decode failures |
//! | [`models`] | [`UserInfo`], request bodies and [`AvatarConfig`] |
//!
//! ## Operations
//!
//! - [`create_user`]: `POST /user/create` with credentials and avatar
//! - [`sign_in`]: `POST /user/signin` with credentials
//!
//! Both resolve to the authenticated [`UserInfo`] or an [`ApiError`] whose
//! [`message`](ApiError::message) is ready to show on the page.

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::{default_client, ApiClient};
pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use models::{AvatarConfig, CreateUserRequest, SignInRequest, UserInfo};

/// Create a trainer account with the default client.
pub async fn create_user(request: CreateUserRequest) -> Result<UserInfo> {
    default_client()?.create_user(&request).await
}

/// Sign in with the default client.
pub async fn sign_in(request: SignInRequest) -> Result<UserInfo> {
    default_client()?.sign_in(&request).await
}
