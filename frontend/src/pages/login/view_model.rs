use super::model::{AuthFormModel, FormField, Mode, PasswordField, Submission};
use crate::api::Role;
use crate::state::auth::Authenticator;
use leptos::*;
use std::rc::Rc;

#[derive(Clone)]
pub struct AuthFormViewModel {
    pub model: RwSignal<AuthFormModel>,
    authenticator: Rc<dyn Authenticator>,
}

impl AuthFormViewModel {
    pub fn new(authenticator: Rc<dyn Authenticator>) -> Self {
        Self {
            model: create_rw_signal(AuthFormModel::default()),
            authenticator,
        }
    }

    pub fn set_field(&self, field: FormField, value: String) {
        self.model.update(|m| m.set_field(field, value));
    }

    pub fn set_role(&self, role: Role) {
        self.model.update(|m| m.set_role(role));
    }

    pub fn toggle_mode(&self) {
        self.model.update(|m| m.toggle_mode());
    }

    pub fn toggle_password_visibility(&self, field: PasswordField) {
        self.model.update(|m| m.toggle_password_visibility(field));
    }

    pub fn field(&self, field: FormField) -> Signal<String> {
        let model = self.model;
        Signal::derive(move || model.with(|m| m.form.get(field).to_string()))
    }

    pub fn mode(&self) -> Signal<Mode> {
        let model = self.model;
        Signal::derive(move || model.with(|m| m.mode))
    }

    pub fn role(&self) -> Signal<Role> {
        let model = self.model;
        Signal::derive(move || model.with(|m| m.role))
    }

    pub fn is_visible(&self, field: PasswordField) -> Signal<bool> {
        let model = self.model;
        Signal::derive(move || model.with(|m| m.visibility.is_visible(field)))
    }

    pub fn pending(&self) -> Signal<bool> {
        let model = self.model;
        Signal::derive(move || model.with(|m| m.status.is_pending()))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let model = self.model;
        Signal::derive(move || model.with(|m| m.status.error_message().map(str::to_string)))
    }

    /// Runs one submission to completion. Calls made while another is in
    /// flight return immediately without reaching the collaborator.
    pub async fn submit(&self) {
        if self.model.with_untracked(|m| m.status.is_pending()) {
            log::debug!("submit ignored: already pending");
            return;
        }
        let Some(submission) = self.model.try_update(|m| m.begin_submit()).flatten() else {
            return;
        };

        let result = match submission {
            Submission::Login(request) => {
                log::info!("login attempt for {}", request.email);
                self.authenticator.login(request).await
            }
            Submission::Signup(request) => {
                log::info!("signup attempt for {}", request.email);
                self.authenticator.signup(request).await
            }
        };
        if let Err(err) = &result {
            log::warn!("authentication failed: {}", err);
        }
        self.model.update(|m| m.finish_submit(result));
    }
}
