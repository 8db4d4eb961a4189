use crate::{
    api::{ApiClient, ApiError, AuthResponse, LoginRequest, SignupRequest, UserResponse},
    config,
    pages::login::repository::AuthRepository,
    utils::storage as storage_utils,
};
use futures::future::LocalBoxFuture;
use leptos::*;
use std::rc::Rc;

/// The authentication capability handed to the sign-in form.
///
/// Futures are `'static` and not `Send`: the browser runs everything on one
/// thread, and callers hold on to the future across reactive updates.
pub trait Authenticator {
    fn login(&self, request: LoginRequest) -> LocalBoxFuture<'static, Result<(), ApiError>>;
    fn signup(&self, request: SignupRequest) -> LocalBoxFuture<'static, Result<(), ApiError>>;
}

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<UserResponse>,
    pub is_authenticated: bool,
}

impl AuthState {
    pub fn signed_in(user: UserResponse) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
        }
    }
}

fn create_auth_context() -> AuthContext {
    let restored = match storage_utils::stored_user() {
        Ok(Some(user)) => AuthState::signed_in(user),
        Ok(None) => AuthState::default(),
        Err(err) => {
            log::warn!("could not restore session: {}", err);
            AuthState::default()
        }
    };
    create_signal(restored)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub fn apply_auth_response(set_auth_state: WriteSignal<AuthState>, response: AuthResponse) {
    log::info!(
        "signed in as {} ({})",
        response.user.email,
        response.user.role.as_str()
    );
    set_auth_state.set(AuthState::signed_in(response.user));
}

fn navigate_after_auth() -> Result<(), String> {
    let path = config::post_login_path();
    storage_utils::window()?
        .location()
        .set_href(&path)
        .map_err(|_| format!("Failed to navigate to {}", path))
}

fn leave_sign_in() {
    if let Err(err) = navigate_after_auth() {
        log::warn!("signed in but could not redirect: {}", err);
    }
}

/// Backend-backed authenticator: stores the session and leaves the page on
/// success. The form never navigates by itself.
#[derive(Clone)]
pub struct SessionAuthenticator {
    repo: AuthRepository,
    set_auth_state: WriteSignal<AuthState>,
}

impl SessionAuthenticator {
    pub fn new(repo: AuthRepository, set_auth_state: WriteSignal<AuthState>) -> Self {
        Self {
            repo,
            set_auth_state,
        }
    }

    pub fn from_context() -> Self {
        let (_auth, set_auth) = use_auth();
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        Self::new(AuthRepository::new_with_client(Rc::new(api)), set_auth)
    }
}

impl Authenticator for SessionAuthenticator {
    fn login(&self, request: LoginRequest) -> LocalBoxFuture<'static, Result<(), ApiError>> {
        let repo = self.repo.clone();
        let set_auth = self.set_auth_state;
        Box::pin(async move {
            let response = repo.login(request).await?;
            apply_auth_response(set_auth, response);
            leave_sign_in();
            Ok::<(), ApiError>(())
        })
    }

    fn signup(&self, request: SignupRequest) -> LocalBoxFuture<'static, Result<(), ApiError>> {
        let repo = self.repo.clone();
        let set_auth = self.set_auth_state;
        Box::pin(async move {
            let response = repo.signup(request).await?;
            apply_auth_response(set_auth, response);
            leave_sign_in();
            Ok::<(), ApiError>(())
        })
    }
}
