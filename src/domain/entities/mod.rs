//! Domain entity definitions.

mod api_error;
mod auth;
mod post;
mod token;
mod user;

pub use api_error::ApiError;
pub use auth::{
    AvatarFile, AvatarUploadResponse, LoginRequest, RegisterRequest, SessionState, TokenResponse,
    TwoFactorCode, TwoFactorSetup,
};
pub use post::{Comment, CreatePost, LikePost, LikePostResponse, Post, RawPost};
pub use token::AuthToken;
pub use user::User;
