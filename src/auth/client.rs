//! Identity service client
//!
//! Thin REST client for the external identity service (GoTrue-style API).
//! Token persistence and refresh scheduling belong to the service and are
//! not reimplemented here; the client holds no state beyond the HTTP
//! connection pool.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{ServiceConfig, Timeouts};

use super::session::Session;

/// Errors surfaced from sign-in/sign-up/sign-out calls.
///
/// Service errors carry the human-readable message from the service
/// verbatim; the screens show it as-is.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("{message}")]
    Service { status: u16, message: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("the request timed out")]
    Timeout,

    #[error("unexpected response from the identity service")]
    InvalidResponse,
}

impl AuthError {
    /// HTTP status when the service itself rejected the call
    pub fn status(&self) -> Option<u16> {
        match self {
            AuthError::Service { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// REST client for the identity service
pub struct AuthClient {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
}

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignUpRequest<'a> {
    email: &'a str,
    password: &'a str,
    data: SignUpMetadata<'a>,
}

#[derive(Serialize)]
struct SignUpMetadata<'a> {
    full_name: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    user: UserResponse,
}

#[derive(Deserialize)]
struct UserResponse {
    id: String,
    email: Option<String>,
    #[serde(default)]
    user_metadata: UserMetadata,
}

#[derive(Deserialize, Default)]
struct UserMetadata {
    full_name: Option<String>,
}

impl AuthClient {
    pub fn new(service: &ServiceConfig, timeouts: &Timeouts) -> Result<Self, AuthError> {
        let client = reqwest::Client::builder()
            .timeout(timeouts.auth_request)
            .build()?;

        Ok(Self {
            client,
            base_url: service.auth_url.trim_end_matches('/').to_string(),
            anon_key: service.anon_key.clone(),
        })
    }

    /// Exchange email+password for a session
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let url = format!("{}/auth/v1/token?grant_type=password", self.base_url);
        tracing::debug!(%email, "Signing in");

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.anon_key)
            .json(&PasswordGrant { email, password })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(service_error(status.as_u16(), &body));
        }

        let token: TokenResponse =
            serde_json::from_str(&body).map_err(|_| AuthError::InvalidResponse)?;
        Ok(session_from_response(token))
    }

    /// Create an account. The service sends its own confirmation email;
    /// the caller signs in separately afterwards.
    pub async fn sign_up(
        &self,
        full_name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        let url = format!("{}/auth/v1/signup", self.base_url);
        tracing::debug!(%email, "Creating account");

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.anon_key)
            .json(&SignUpRequest {
                email,
                password,
                data: SignUpMetadata { full_name },
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(service_error(status.as_u16(), &body));
        }

        Ok(())
    }

    /// Revoke the session's token on the service side
    pub async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let url = format!("{}/auth/v1/logout", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(service_error(status.as_u16(), &body));
        }

        Ok(())
    }
}

fn session_from_response(token: TokenResponse) -> Session {
    Session {
        user_id: token.user.id,
        email: token.user.email.unwrap_or_default(),
        display_name: token.user.user_metadata.full_name,
        access_token: token.access_token,
    }
}

/// Pull the human-readable message out of a service error body.
///
/// The service is inconsistent about the field name across endpoints, so
/// each known spelling is tried before falling back to the status code.
fn service_error(status: u16, body: &str) -> AuthError {
    #[derive(Deserialize, Default)]
    struct ErrorBody {
        error_description: Option<String>,
        msg: Option<String>,
        message: Option<String>,
        error: Option<String>,
    }

    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed
        .error_description
        .or(parsed.msg)
        .or(parsed.message)
        .or(parsed.error)
        .unwrap_or_else(|| format!("authentication failed (HTTP {status})"));

    AuthError::Service { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_from_response_maps_fields() {
        let token: TokenResponse = serde_json::from_str(
            r#"{
                "access_token": "jwt",
                "token_type": "bearer",
                "user": {
                    "id": "uuid-1",
                    "email": "driver@example.com",
                    "user_metadata": {"full_name": "Driver One"}
                }
            }"#,
        )
        .unwrap();

        let session = session_from_response(token);
        assert_eq!(session.user_id, "uuid-1");
        assert_eq!(session.email, "driver@example.com");
        assert_eq!(session.display_name.as_deref(), Some("Driver One"));
        assert_eq!(session.access_token, "jwt");
    }

    #[test]
    fn test_session_from_response_without_metadata() {
        let token: TokenResponse = serde_json::from_str(
            r#"{"access_token": "jwt", "user": {"id": "uuid-2"}}"#,
        )
        .unwrap();

        let session = session_from_response(token);
        assert_eq!(session.email, "");
        assert!(session.display_name.is_none());
    }

    #[test]
    fn test_service_error_message_spellings() {
        let err = service_error(400, r#"{"error_description": "Invalid login credentials"}"#);
        assert_eq!(err.to_string(), "Invalid login credentials");

        let err = service_error(422, r#"{"msg": "Password should be at least 6 characters"}"#);
        assert_eq!(err.to_string(), "Password should be at least 6 characters");

        let err = service_error(500, "not json");
        assert_eq!(err.to_string(), "authentication failed (HTTP 500)");
    }
}
