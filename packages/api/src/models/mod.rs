//! Data models exchanged with the PokeBattle backend.

mod avatar;
mod user;

pub use avatar::{AvatarConfig, BACKGROUND_COLORS, SKIN_COLORS};
pub use user::{CreateUserRequest, SignInRequest, UserInfo};
