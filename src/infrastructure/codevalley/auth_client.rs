//! REST adapter for the `/auth` service.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Method;
use reqwest::multipart::{Form, Part};
use tracing::debug;

use crate::domain::entities::{
    AvatarFile, AvatarUploadResponse, LoginRequest, RegisterRequest, TokenResponse, TwoFactorCode,
    User,
};
use crate::domain::errors::ClientError;
use crate::domain::ports::AuthApi;
use crate::domain::session::Session;
use crate::infrastructure::http::{ClientFactory, ServiceClient};

/// `/auth` client over HTTP.
pub struct RestAuthApi {
    public: ServiceClient,
    authorized: ServiceClient,
}

impl RestAuthApi {
    /// Creates adapter; authorized calls use the token held by `session` at call time.
    #[must_use]
    pub fn new(factory: &ClientFactory, session: &Session) -> Self {
        Self {
            public: factory.anonymous(),
            authorized: factory.authorized(session),
        }
    }
}

#[async_trait]
impl AuthApi for RestAuthApi {
    async fn me(&self) -> Result<User, ClientError> {
        debug!("Fetching current user");
        let request = self.authorized.request(Method::GET, ["auth", "me"]);
        self.authorized.send_json(request).await
    }

    async fn profile(&self, id: u64) -> Result<User, ClientError> {
        debug!(user_id = id, "Fetching profile");
        let request = self
            .authorized
            .request(Method::GET, ["auth", "profile", id.to_string().as_str()]);
        self.authorized.send_json(request).await
    }

    async fn upload_avatar(
        &self,
        user_id: u64,
        file: AvatarFile,
    ) -> Result<AvatarUploadResponse, ClientError> {
        debug!(
            user_id,
            size = file.bytes.len(),
            mime_type = file.mime_type.as_deref().unwrap_or("none"),
            "Uploading avatar"
        );

        let part = Part::bytes(file.bytes).file_name(file.file_name);
        let part = match file.mime_type {
            Some(mime) => part
                .mime_str(&mime)
                .map_err(|e| ClientError::validation("file", format!("bad content type: {e}")))?,
            None => part,
        };
        let form = Form::new()
            .text("userId", user_id.to_string())
            .part("file", part);

        let request = self
            .authorized
            .request(Method::POST, ["auth", "avatar"])
            .multipart(form);
        self.authorized.send_json(request).await
    }

    async fn turn_on_two_factor(&self) -> Result<(), ClientError> {
        let request = self
            .authorized
            .request(Method::POST, ["auth", "2fa", "turn-on"]);
        self.authorized.send_empty(request).await
    }

    async fn turn_off_two_factor(&self) -> Result<(), ClientError> {
        let request = self
            .authorized
            .request(Method::POST, ["auth", "2fa", "turn-off"]);
        self.authorized.send_empty(request).await
    }

    async fn authenticate_two_factor(
        &self,
        body: TwoFactorCode,
    ) -> Result<TokenResponse, ClientError> {
        let request = self
            .authorized
            .request(Method::POST, ["auth", "2fa", "authenticate"])
            .json(&body);
        self.authorized.send_json(request).await
    }

    async fn generate_two_factor(&self) -> Result<HashMap<String, String>, ClientError> {
        let request = self
            .authorized
            .request(Method::POST, ["auth", "2fa", "generate"]);
        self.authorized.send_json(request).await
    }

    async fn login(&self, body: LoginRequest) -> Result<TokenResponse, ClientError> {
        let request = self
            .public
            .request(Method::POST, ["auth", "login"])
            .json(&body);
        self.public.send_json(request).await
    }

    async fn register(&self, body: RegisterRequest) -> Result<TokenResponse, ClientError> {
        let request = self
            .public
            .request(Method::POST, ["auth", "register"])
            .json(&body);
        self.public.send_json(request).await
    }

    async fn search_users(&self, username: String) -> Result<Vec<User>, ClientError> {
        let request = self
            .authorized
            .request(Method::GET, ["auth", "search", username.as_str()]);
        self.authorized.send_json(request).await
    }

    async fn logout(&self) -> Result<(), ClientError> {
        let request = self.authorized.request(Method::POST, ["auth", "logout"]);
        self.authorized.send_empty(request).await
    }
}
