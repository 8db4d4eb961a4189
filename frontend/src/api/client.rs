use reqwest::{Client, Response, StatusCode};
use web_sys::Storage;

use crate::{api::types::*, config};

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const CURRENT_USER_KEY: &str = "current_user";

#[derive(Clone, Default)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(super) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(super) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.trim_end_matches('/').to_string()
        } else {
            config::await_api_base_url().await
        }
    }
}

pub(super) async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    error_from_body(status, &body)
}

/// Backend errors arrive as `{"error": "...", "code": "..."}`; anything else
/// collapses into a generic failure carrying the HTTP status.
pub fn error_from_body(status: StatusCode, body: &str) -> ApiError {
    serde_json::from_str::<ApiError>(body)
        .ok()
        .filter(|err| !err.error.trim().is_empty())
        .unwrap_or_else(|| {
            ApiError::request_failed(format!(
                "Authentication failed (HTTP {})",
                status.as_u16()
            ))
        })
}

pub(super) fn persist_session(storage: &Storage, response: &AuthResponse) -> Result<(), String> {
    if let Some(token) = &response.access_token {
        storage
            .set_item(ACCESS_TOKEN_KEY, token)
            .map_err(|_| "Failed to store access token")?;
    }
    let user = serde_json::to_string(&response.user)
        .map_err(|e| format!("Failed to encode user: {}", e))?;
    storage
        .set_item(CURRENT_USER_KEY, &user)
        .map_err(|_| "Failed to store current user")?;
    Ok(())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[test]
    fn error_body_with_message_is_surfaced_verbatim() {
        let err = error_from_body(
            StatusCode::UNAUTHORIZED,
            r#"{"error":"Invalid credentials","code":"UNAUTHORIZED"}"#,
        );
        assert_eq!(err.error, "Invalid credentials");
        assert_eq!(err.code, "UNAUTHORIZED");
    }

    #[test]
    fn unparseable_error_body_falls_back_to_status() {
        let err = error_from_body(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>");
        assert_eq!(err.code, "REQUEST_FAILED");
        assert_eq!(err.error, "Authentication failed (HTTP 502)");
    }

    #[test]
    fn blank_error_message_falls_back_to_status() {
        let err = error_from_body(StatusCode::CONFLICT, r#"{"error":"  ","code":"CONFLICT"}"#);
        assert_eq!(err.error, "Authentication failed (HTTP 409)");
    }
}
