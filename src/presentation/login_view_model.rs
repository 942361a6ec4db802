//! Login form state.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::SessionState;
use crate::domain::ports::Authenticator;
use crate::domain::result::AuthResult;
use crate::domain::session::Session;

const EMPTY_EMAIL: &str = "Please enter an email";
const EMPTY_PASSWORD: &str = "Please enter your password";
const BAD_CREDENTIALS: &str = "Email or password incorrect";

/// Form progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum LoginState {
    Input,
    Error,
    Success,
    TwoFactorRequired,
}

/// Third-party sign-in buttons shown under the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum SocialProvider {
    Google,
    Microsoft,
    Apple,
}

impl SocialProvider {
    const fn name(self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Microsoft => "Microsoft",
            Self::Apple => "Apple",
        }
    }
}

/// Headless login screen model.
pub struct LoginViewModel {
    authenticator: Arc<dyn Authenticator>,
    session: Session,
    /// Email field.
    pub email: String,
    /// Password field.
    pub password: String,
    error_message: String,
    state: LoginState,
}

impl LoginViewModel {
    /// Creates empty form.
    #[must_use]
    pub fn new(authenticator: Arc<dyn Authenticator>, session: Session) -> Self {
        Self {
            authenticator,
            session,
            email: String::new(),
            password: String::new(),
            error_message: String::new(),
            state: LoginState::Input,
        }
    }

    /// Returns the message shown under the form; empty when there is none.
    #[must_use]
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Returns current state.
    #[must_use]
    pub const fn state(&self) -> LoginState {
        self.state
    }

    /// Validates the form and logs in.
    ///
    /// Returns `true` once a token has been committed to the session. Empty
    /// fields are reported without contacting the backend.
    pub async fn attempt_login(&mut self) -> bool {
        if self.email.is_empty() {
            self.set_error(EMPTY_EMAIL);
            return false;
        }
        if self.password.is_empty() {
            self.set_error(EMPTY_PASSWORD);
            return false;
        }

        debug!("Submitting login form");
        let result = self
            .authenticator
            .login(self.email.clone(), self.password.clone())
            .await;

        let response = match result {
            AuthResult::Success(response) => response,
            AuthResult::Error(err) => {
                debug!(code = err.code, "Login rejected");
                self.fail();
                return false;
            }
        };

        let Some(token) = response.token() else {
            self.fail();
            return false;
        };

        self.session.set_token(Some(token));
        self.error_message.clear();
        self.state = match response.session_state() {
            SessionState::PendingTwoFactor => LoginState::TwoFactorRequired,
            _ => LoginState::Success,
        };
        info!(state = ?self.state, "Login form completed");
        true
    }

    /// Handles a third-party sign-in button; none are supported by the backend.
    pub fn sign_in_with(&mut self, provider: SocialProvider) {
        self.set_error(format!("{} authentication is not available", provider.name()));
    }

    fn fail(&mut self) {
        self.session.clear();
        self.set_error(BAD_CREDENTIALS);
    }

    fn set_error(&mut self, message: impl Into<String>) {
        self.state = LoginState::Error;
        self.error_message = message.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ApiError, AuthToken, TokenResponse};
    use crate::domain::ports::mocks::MockAuthenticator;
    use test_case::test_case;

    fn view_model(authenticator: MockAuthenticator, session: &Session) -> LoginViewModel {
        LoginViewModel::new(Arc::new(authenticator), session.clone())
    }

    #[test_case("", "pw", "Please enter an email" ; "empty email")]
    #[test_case("a@b.com", "", "Please enter your password" ; "empty password")]
    #[test_case("", "", "Please enter an email" ; "both empty")]
    #[tokio::test]
    async fn test_empty_fields_skip_backend(email: &str, password: &str, message: &str) {
        let mut authenticator = MockAuthenticator::new();
        authenticator.expect_login().times(0);
        let session = Session::new();

        let mut vm = view_model(authenticator, &session);
        vm.email = email.to_string();
        vm.password = password.to_string();

        assert!(!vm.attempt_login().await);
        assert_eq!(vm.error_message(), message);
        assert_eq!(vm.state(), LoginState::Error);
    }

    #[tokio::test]
    async fn test_success_commits_token() {
        let mut authenticator = MockAuthenticator::new();
        authenticator
            .expect_login()
            .withf(|email, password| email == "a@b.com" && password == "pw")
            .times(1)
            .returning(|_, _| AuthResult::Success(TokenResponse::new("T")));
        let session = Session::new();

        let mut vm = view_model(authenticator, &session);
        vm.email = "a@b.com".to_string();
        vm.password = "pw".to_string();

        assert!(vm.attempt_login().await);
        assert_eq!(session.token().unwrap().as_str(), "T");
        assert_eq!(vm.error_message(), "");
        assert_eq!(vm.state(), LoginState::Success);
    }

    #[tokio::test]
    async fn test_two_factor_pending_state() {
        let mut authenticator = MockAuthenticator::new();
        authenticator.expect_login().returning(|_, _| {
            AuthResult::Success(TokenResponse {
                access_token: "T".to_string(),
                is_two_factor_authentication_enabled: true,
            })
        });
        let session = Session::new();

        let mut vm = view_model(authenticator, &session);
        vm.email = "a@b.com".to_string();
        vm.password = "pw".to_string();

        assert!(vm.attempt_login().await);
        assert_eq!(vm.state(), LoginState::TwoFactorRequired);
    }

    #[tokio::test]
    async fn test_failure_clears_session_and_hides_detail() {
        let mut authenticator = MockAuthenticator::new();
        authenticator.expect_login().returning(|_, _| {
            AuthResult::Error(ApiError::new("User not found", "NotFound", 404))
        });
        let session = Session::with_token(AuthToken::new("old").unwrap());

        let mut vm = view_model(authenticator, &session);
        vm.email = "a@b.com".to_string();
        vm.password = "pw".to_string();

        assert!(!vm.attempt_login().await);
        assert_eq!(vm.error_message(), "Email or password incorrect");
        assert!(!session.is_authenticated());
    }

    #[test_case(SocialProvider::Google, "Google authentication is not available")]
    #[test_case(SocialProvider::Microsoft, "Microsoft authentication is not available")]
    #[test_case(SocialProvider::Apple, "Apple authentication is not available")]
    fn test_social_sign_in_unavailable(provider: SocialProvider, message: &str) {
        let mut vm = view_model(MockAuthenticator::new(), &Session::new());
        vm.sign_in_with(provider);
        assert_eq!(vm.error_message(), message);
    }
}
