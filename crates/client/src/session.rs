//! Explicit session context.
//!
//! The session is cookie-borne; this object only tracks what the process
//! knows about it. It starts in `Checking` and resolves to `Authenticated`
//! or `Anonymous` via the probe; a 401 there is a resolution, not an error.
//! Logout always ends the local session, even when the server call fails.

use serde::Deserialize;

use washboard_core::UserId;

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::resources::auth::AuthApi;

/// The signed-in user as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CurrentUser {
    pub id: UserId,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
}

impl CurrentUser {
    /// Name to greet the user with, falling back to the email.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

/// Loading state machine of the session context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Probe not yet resolved.
    Checking,
    Authenticated(CurrentUser),
    Anonymous,
}

/// Session context, constructed once at application start.
#[derive(Debug)]
pub struct Session {
    auth: AuthApi,
    state: SessionState,
}

impl Session {
    pub fn new(client: ApiClient) -> Self {
        Self {
            auth: AuthApi::new(client),
            state: SessionState::Checking,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn current_user(&self) -> Option<&CurrentUser> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }

    /// Resolve the session against the server. 401 resolves to
    /// `Anonymous`; transport failures leave the state untouched so the
    /// caller can retry the probe.
    pub async fn probe(&mut self) -> Result<&SessionState, ApiError> {
        match self.auth.me().await {
            Ok(user) => self.state = SessionState::Authenticated(user),
            Err(ApiError::Unauthenticated) => self.state = SessionState::Anonymous,
            Err(e) => return Err(e),
        }
        Ok(&self.state)
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<CurrentUser, ApiError> {
        let user = self.auth.login(email, password).await?;
        self.state = SessionState::Authenticated(user.clone());
        tracing::info!(user = user.display_name(), "signed in");
        Ok(user)
    }

    /// Sign out. The local session ends regardless of whether the server
    /// call succeeded; the result reports the server's answer.
    pub async fn logout(&mut self) -> Result<(), ApiError> {
        let result = self.auth.logout().await;
        self.state = SessionState::Anonymous;
        result
    }
}
