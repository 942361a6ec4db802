//! Presentation layer with headless screen models.

/// Login form.
pub mod login_view_model;

pub use login_view_model::{LoginState, LoginViewModel, SocialProvider};
