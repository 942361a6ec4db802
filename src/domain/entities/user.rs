//! `CodeValley` user record.

use serde::{Deserialize, Serialize};

/// User as returned by `/auth/me`, `/auth/profile/{id}` and `/auth/search/{username}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Numeric user id.
    pub id: u64,
    /// Public handle.
    pub username: String,
    /// Account email.
    pub email: String,
    /// Avatar URL.
    #[serde(default)]
    pub avatar: Option<String>,
}

impl User {
    /// Creates user without avatar.
    #[must_use]
    pub fn new(id: u64, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
            avatar: None,
        }
    }

    /// Sets avatar URL.
    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}
