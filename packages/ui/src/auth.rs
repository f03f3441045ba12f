//! Session context and hooks for the UI.

use api::UserInfo;
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::Button;
use crate::login_form::redirect_at_mount;

/// Browser storage key holding the serialized session.
pub const SESSION_STORAGE_KEY: &str = "pokebattle.session";

/// Who is signed in, if anyone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub user: Option<UserInfo>,
}

impl SessionState {
    pub fn signed_in(user: UserInfo) -> Self {
        Self { user: Some(user) }
    }

    /// Parse a stored session. Corrupt or outdated entries read as signed out.
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_else(|e| {
            tracing::warn!("Discarding stored session: {}", e);
            Self::default()
        })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Get the current session.
/// Returns a signal that updates when the user signs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that owns the session.
///
/// The session is restored synchronously from browser storage before the
/// first child renders, so pages can read it at mount without waiting.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(load_session()));

    rsx! {
        {children}
    }
}

/// Renders `children` only for visitors who were signed out at mount.
///
/// The session is read once, at first render. When a user is present,
/// `on_signed_in` fires once and nothing is rendered; later session changes
/// do not re-run the check.
#[component]
pub fn GuestOnly(on_signed_in: EventHandler<()>, children: Element) -> Element {
    let session = use_session();
    let signed_in = use_hook(|| {
        let signed_in = redirect_at_mount(session.peek().user.as_ref());
        if signed_in {
            on_signed_in.call(());
        }
        signed_in
    });

    if signed_in {
        return rsx! {};
    }
    rsx! {
        {children}
    }
}

/// Record a successful sign-in or account creation.
pub fn store_session(session: &mut Signal<SessionState>, user: UserInfo) {
    tracing::info!("Signed in as {}", user.display_name());
    let state = SessionState::signed_in(user);
    persist(&state);
    session.set(state);
}

/// Forget the signed-in user.
pub fn clear_session(session: &mut Signal<SessionState>) {
    let state = SessionState::default();
    persist(&state);
    session.set(state);
}

/// Button that signs the user out and then calls `on_logout`.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default)] class: String,
    on_logout: EventHandler<()>,
) -> Element {
    let mut session = use_session();

    rsx! {
        Button {
            class: "{class}",
            onclick: move |_| {
                clear_session(&mut session);
                on_logout.call(());
            },
            "{label}"
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(target_arch = "wasm32")]
fn load_session() -> SessionState {
    local_storage()
        .and_then(|storage| storage.get_item(SESSION_STORAGE_KEY).ok().flatten())
        .map(|raw| SessionState::from_json(&raw))
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn load_session() -> SessionState {
    SessionState::default()
}

#[cfg(target_arch = "wasm32")]
fn persist(state: &SessionState) {
    let Some(storage) = local_storage() else {
        return;
    };
    let result = match state.user {
        Some(_) => match state.to_json() {
            Ok(raw) => storage.set_item(SESSION_STORAGE_KEY, &raw),
            Err(e) => {
                tracing::error!("Failed to serialize session: {}", e);
                return;
            }
        },
        None => storage.remove_item(SESSION_STORAGE_KEY),
    };
    if result.is_err() {
        tracing::error!("Failed to write session to local storage");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn persist(_state: &SessionState) {}
