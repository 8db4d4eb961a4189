use crate::api::{ApiClient, ApiError, AuthResponse, LoginRequest, SignupRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct AuthRepository {
    client: Rc<ApiClient>,
}

impl AuthRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, ApiError> {
        self.client.login(&request).await
    }

    pub async fn signup(&self, request: SignupRequest) -> Result<AuthResponse, ApiError> {
        self.client.signup(&request).await
    }
}
