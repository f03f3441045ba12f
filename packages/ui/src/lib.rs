//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod class_merge;
pub mod components;
pub mod login_form;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod auth;
pub use auth::{
    clear_session, store_session, use_session, AuthProvider, GuestOnly, LogoutButton,
    SessionState, SESSION_STORAGE_KEY,
};

mod avatar;
pub use avatar::{random_seed, AvatarBuilder, AvatarTrait};

pub use class_merge::merge_classes;
pub use login_form::{
    redirect_at_mount, CredentialInput, Field, FieldErrors, FormMode, LoginForm, LoginSchema,
    Operation, RemoteStatus, SubmitBlocked, SubmitIntent,
};
