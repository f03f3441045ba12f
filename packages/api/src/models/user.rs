//! # Trainer account models
//!
//! ## [`UserInfo`]
//!
//! The account returned by the backend after a successful sign-in or account
//! creation. It is `Serialize + Deserialize + PartialEq` so the UI can keep it
//! in a signal and persist it in browser storage between visits. The backend
//! sends camelCase JSON and may use Mongo-style `_id` keys, so `id` accepts
//! both spellings.
//!
//! ## Request bodies
//!
//! - [`SignInRequest`]: `POST /user/signin`, email + password only.
//! - [`CreateUserRequest`]: `POST /user/create`, the credentials plus the
//!   [`AvatarConfig`] built on the create tab.

use serde::{Deserialize, Serialize};

use super::AvatarConfig;

/// Trainer information safe to keep on the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(alias = "_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: Option<AvatarConfig>,
    /// Bearer token issued by the backend, when it issues one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

/// Body of the sign-in operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Body of the create-account operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub avatar: AvatarConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_info_accepts_mongo_id() {
        let json = r#"{"_id":"64f0","email":"ash@pallet.town","name":"Ash"}"#;
        let user: UserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "64f0");
        assert_eq!(user.display_name(), "Ash");
        assert!(user.avatar.is_none());
        assert!(user.token.is_none());
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = UserInfo {
            id: "1".to_string(),
            email: "misty@cerulean.gym".to_string(),
            name: None,
            avatar: None,
            token: None,
        };
        assert_eq!(user.display_name(), "misty@cerulean.gym");
    }

    #[test]
    fn test_create_request_body_shape() {
        let request = CreateUserRequest {
            name: "Ash".to_string(),
            email: "a@b.com".to_string(),
            password: "secret1".to_string(),
            avatar: AvatarConfig::default(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["name"], "Ash");
        assert_eq!(value["email"], "a@b.com");
        assert_eq!(value["password"], "secret1");
        assert!(value["avatar"]["hairProbability"].is_number());
        assert!(value["avatar"]["flip"].is_boolean());
    }
}
