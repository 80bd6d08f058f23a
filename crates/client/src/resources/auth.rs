//! `/auth` endpoints.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::session::CurrentUser;

#[derive(Debug, Deserialize)]
struct UserEnvelope {
    user: CurrentUser,
}

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Session probe; 401 surfaces as [`ApiError::Unauthenticated`].
    pub async fn me(&self) -> Result<CurrentUser, ApiError> {
        let env: UserEnvelope = self.client.get_json("/auth/me", &[]).await?;
        Ok(env.user)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<CurrentUser, ApiError> {
        let env: UserEnvelope = self
            .client
            .post_json("/auth/login", &Credentials { email, password })
            .await?;
        Ok(env.user)
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.client.post_no_content("/auth/logout").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_body_carries_credentials_only() {
        let body = serde_json::to_value(Credentials {
            email: "rina@laundry.id",
            password: "secret",
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"email": "rina@laundry.id", "password": "secret"})
        );
    }

    #[test]
    fn user_envelope_unwraps() {
        let env: UserEnvelope = serde_json::from_str(
            r#"{"user": {"id": 7, "name": "Rina", "email": "rina@laundry.id"}}"#,
        )
        .unwrap();
        assert_eq!(env.user.display_name(), "Rina");
    }
}
