#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod fakes {
    use crate::api::{ApiError, LoginRequest, SignupRequest};
    use crate::state::auth::Authenticator;
    use futures::channel::oneshot;
    use futures::future::LocalBoxFuture;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum AuthCall {
        Login(LoginRequest),
        Signup(SignupRequest),
    }

    /// Records every collaborator call and answers with a canned outcome.
    #[derive(Default)]
    pub struct RecordingAuthenticator {
        calls: RefCell<Vec<AuthCall>>,
        failure: Option<String>,
        held: RefCell<Option<oneshot::Receiver<Result<(), ApiError>>>>,
    }

    impl RecordingAuthenticator {
        pub fn succeeding() -> Rc<Self> {
            Rc::new(Self::default())
        }

        pub fn failing(message: &str) -> Rc<Self> {
            Rc::new(Self {
                failure: Some(message.to_string()),
                ..Self::default()
            })
        }

        /// The first call stays pending until the returned sender fires.
        pub fn held() -> (Rc<Self>, oneshot::Sender<Result<(), ApiError>>) {
            let (tx, rx) = oneshot::channel();
            let fake = Self {
                held: RefCell::new(Some(rx)),
                ..Self::default()
            };
            (Rc::new(fake), tx)
        }

        pub fn calls(&self) -> Vec<AuthCall> {
            self.calls.borrow().clone()
        }

        fn respond(&self, call: AuthCall) -> LocalBoxFuture<'static, Result<(), ApiError>> {
            self.calls.borrow_mut().push(call);
            if let Some(rx) = self.held.borrow_mut().take() {
                return Box::pin(async move {
                    rx.await
                        .unwrap_or_else(|_| Err(ApiError::unknown("collaborator dropped")))
                });
            }
            let result = match &self.failure {
                Some(message) => Err(ApiError::unknown(message.clone())),
                None => Ok(()),
            };
            Box::pin(futures::future::ready(result))
        }
    }

    impl Authenticator for RecordingAuthenticator {
        fn login(&self, request: LoginRequest) -> LocalBoxFuture<'static, Result<(), ApiError>> {
            self.respond(AuthCall::Login(request))
        }

        fn signup(&self, request: SignupRequest) -> LocalBoxFuture<'static, Result<(), ApiError>> {
            self.respond(AuthCall::Signup(request))
        }
    }
}
