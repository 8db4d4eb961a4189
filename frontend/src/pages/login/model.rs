//! Framework-free state of the sign-in form.
//!
//! Every user interaction maps to one method here; the reactive view model
//! only wraps this struct in a signal and drives the async collaborator call.

use super::utils;
use crate::api::{ApiError, LoginRequest, Role, SignupRequest};

/// Role sent with every signup. Signup is only offered to faculty.
pub const SIGNUP_ROLE: Role = Role::Faculty;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Login,
    Signup,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Login => Mode::Signup,
            Mode::Signup => Mode::Login,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Email,
    Password,
    ConfirmPassword,
    Name,
    RollNo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordField {
    Password,
    ConfirmPassword,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub name: String,
    pub roll_no: String,
}

impl FormState {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Email => &self.email,
            FormField::Password => &self.password,
            FormField::ConfirmPassword => &self.confirm_password,
            FormField::Name => &self.name,
            FormField::RollNo => &self.roll_no,
        }
    }

    fn get_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Email => &mut self.email,
            FormField::Password => &mut self.password,
            FormField::ConfirmPassword => &mut self.confirm_password,
            FormField::Name => &mut self.name,
            FormField::RollNo => &mut self.roll_no,
        }
    }
}

/// Display-only: whether each password input renders as plain text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Visibility {
    pub password: bool,
    pub confirm_password: bool,
}

impl Visibility {
    pub fn is_visible(&self, field: PasswordField) -> bool {
        match field {
            PasswordField::Password => self.password,
            PasswordField::ConfirmPassword => self.confirm_password,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Error(String),
}

impl SubmissionStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionStatus::Pending)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Collaborator call produced by a successful `begin_submit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Login(LoginRequest),
    Signup(SignupRequest),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthFormModel {
    pub form: FormState,
    pub mode: Mode,
    pub role: Role,
    pub visibility: Visibility,
    pub status: SubmissionStatus,
}

impl AuthFormModel {
    /// Plain edits never clear an error on display.
    pub fn set_field(&mut self, field: FormField, value: String) {
        *self.form.get_mut(field) = value;
    }

    pub fn set_role(&mut self, role: Role) {
        self.role = role;
        self.reset_form();
    }

    pub fn can_toggle_mode(&self) -> bool {
        self.role == Role::Faculty
    }

    pub fn shows_role_switch(&self) -> bool {
        self.mode == Mode::Login
    }

    /// Flips Login/Signup and resets the form. Students cannot sign up.
    pub fn toggle_mode(&mut self) {
        if !self.can_toggle_mode() {
            log::debug!("mode toggle ignored for role {}", self.role.as_str());
            return;
        }
        self.mode = self.mode.toggled();
        self.reset_form();
    }

    pub fn toggle_password_visibility(&mut self, field: PasswordField) {
        match field {
            PasswordField::Password => self.visibility.password = !self.visibility.password,
            PasswordField::ConfirmPassword => {
                self.visibility.confirm_password = !self.visibility.confirm_password
            }
        }
    }

    fn reset_form(&mut self) {
        self.form = FormState::default();
        if self.status.error_message().is_some() {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Enters Pending and returns the collaborator call to make, or records a
    /// validation error and returns `None` when nothing should be sent.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        self.status = SubmissionStatus::Pending;
        let form = &self.form;
        let submission = match self.mode {
            Mode::Login => Submission::Login(LoginRequest {
                email: form.email.clone(),
                password: form.password.clone(),
            }),
            Mode::Signup => {
                if let Err(err) = utils::validate_signup(form) {
                    log::warn!("signup rejected locally: {}", err);
                    self.finish_submit(Err(err));
                    return None;
                }
                Submission::Signup(SignupRequest {
                    email: form.email.clone(),
                    password: form.password.clone(),
                    name: form.name.clone(),
                    role: SIGNUP_ROLE,
                })
            }
        };
        Some(submission)
    }

    /// Leaves Pending on every exit path.
    pub fn finish_submit(&mut self, result: Result<(), ApiError>) {
        self.status = match result {
            Ok(()) => SubmissionStatus::Idle,
            Err(err) => SubmissionStatus::Error(err.error),
        };
    }
}
