use reqwest::Response;

use super::{
    client::{error_from_response, persist_session, ApiClient},
    types::{ApiError, AuthResponse, LoginRequest, SignupRequest},
};
use crate::utils::storage as storage_utils;

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/auth/login", base_url))
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        complete_auth(response).await
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/auth/signup", base_url))
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        complete_auth(response).await
    }
}

async fn complete_auth(response: Response) -> Result<AuthResponse, ApiError> {
    if !response.status().is_success() {
        return Err(error_from_response(response).await);
    }

    let auth: AuthResponse = response
        .json()
        .await
        .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))?;

    remember_session(&auth);
    Ok(auth)
}

/// Storage failures are logged, never returned.
fn remember_session(auth: &AuthResponse) -> bool {
    let stored = storage_utils::local_storage()
        .and_then(|storage| persist_session(&storage, auth));
    if let Err(err) = &stored {
        log::warn!("signed in as {} but session not stored: {}", auth.user.email, err);
    }
    stored.is_ok()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::api::types::{Role, UserResponse};
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn storage_failure_does_not_fail_sign_in() {
        let auth = AuthResponse {
            user: UserResponse {
                id: "u1".into(),
                email: "hod@nbkr.ac.in".into(),
                name: "HOD".into(),
                role: Role::Faculty,
                roll_no: None,
            },
            access_token: Some("token".into()),
        };
        // no window under the node test runner, so nothing can be stored
        assert!(!remember_session(&auth));
    }
}
