//! Session/auth client — stateless pass-through to the backend's
//! cookie-based auth endpoints. Session continuity lives entirely in the
//! backend's HTTP-only cookie; nothing is persisted locally.

use reqwest::{Client, Response};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::errors::ClientError;
use crate::models::User;
use crate::remote::RemoteClient;

const LOGIN_PATH: &str = "/api/login";
const REGISTER_PATH: &str = "/api/register";
const LOGOUT_PATH: &str = "/api/logout";
const PROFILE_PATH: &str = "/api/profile";
const CHANGE_PASSWORD_PATH: &str = "/api/change-password";

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    user: User,
}

/// Auth calls against the same cookie jar as the producer calls, so a
/// login on this client authenticates subsequent requests made by the
/// `RemoteClient` it was created from.
#[derive(Clone)]
pub struct AuthClient {
    http: Client,
    base_url: String,
}

impl AuthClient {
    pub fn new(remote: &RemoteClient) -> Self {
        Self {
            http: remote.http(),
            base_url: remote.base_url().to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// POST /api/login. Non-2xx surfaces the backend's `{message}`
    /// verbatim, or "Login failed" when the body carries none.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ClientError> {
        let response = self
            .http
            .post(self.endpoint(LOGIN_PATH))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| ClientError::Auth(e.to_string()))?;

        if !response.status().is_success() {
            return Err(auth_failed(response, "Login failed").await);
        }

        let body: LoginResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Auth(e.to_string()))?;

        Ok(body.user)
    }

    /// POST /api/register. Same message contract as `login`.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ClientError> {
        let response = self
            .http
            .post(self.endpoint(REGISTER_PATH))
            .json(&serde_json::json!({
                "username": username,
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .map_err(|e| ClientError::Auth(e.to_string()))?;

        if !response.status().is_success() {
            return Err(auth_failed(response, "Registration failed").await);
        }

        Ok(())
    }

    /// POST /api/change-password for the logged-in user.
    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), ClientError> {
        let response = self
            .http
            .post(self.endpoint(CHANGE_PASSWORD_PATH))
            .json(&serde_json::json!({
                "current_password": current_password,
                "new_password": new_password,
            }))
            .send()
            .await
            .map_err(|e| ClientError::Auth(e.to_string()))?;

        if !response.status().is_success() {
            return Err(auth_failed(response, "Password change failed").await);
        }

        Ok(())
    }

    /// GET /api/profile — the silent session-restore probe run once at
    /// startup. Any failure, transport or status, degrades to `None`.
    pub async fn get_profile(&self) -> Result<Option<User>, ClientError> {
        let response = match self.http.get(self.endpoint(PROFILE_PATH)).send().await {
            Ok(r) => r,
            Err(e) => {
                debug!("Profile probe failed: {e}");
                return Ok(None);
            }
        };

        if !response.status().is_success() {
            return Ok(None);
        }

        match response.json::<User>().await {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                debug!("Profile body did not parse: {e}");
                Ok(None)
            }
        }
    }

    /// POST /api/logout. Best-effort: failures are logged and swallowed,
    /// and the local session is considered cleared regardless.
    pub async fn logout(&self) {
        match self.http.post(self.endpoint(LOGOUT_PATH)).send().await {
            Ok(response) if !response.status().is_success() => {
                warn!("Logout returned {}; clearing local session anyway", response.status());
            }
            Ok(_) => debug!("Logout acknowledged by backend"),
            Err(e) => warn!("Logout request failed: {e}; clearing local session anyway"),
        }
    }
}

/// Extracts the backend's `{message}` from an error body, falling back to
/// the flow's generic message.
async fn auth_failed(response: Response, fallback: &str) -> ClientError {
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|e| e.message)
        .unwrap_or_else(|_| fallback.to_string());
    ClientError::Auth(message)
}
