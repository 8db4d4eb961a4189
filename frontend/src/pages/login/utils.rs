use super::model::{FormState, Mode};
use crate::{
    api::{ApiError, Role},
    theme::AuthTheme,
};

pub const PASSWORD_MISMATCH: &str = "Passwords do not match";

pub fn validate_signup(form: &FormState) -> Result<(), ApiError> {
    if form.password != form.confirm_password {
        return Err(ApiError::validation(PASSWORD_MISMATCH));
    }
    Ok(())
}

pub fn email_placeholder(role: Role) -> &'static str {
    match role {
        Role::Student => "Enter your college email",
        Role::Faculty => "Enter your email",
    }
}

/// Students signing in get hints about faculty-issued credentials.
pub fn shows_student_help(role: Role, mode: Mode) -> bool {
    role == Role::Student && mode == Mode::Login
}

/// Circuit keeps the wording of its own revision; the other themes share
/// the plain labels.
pub fn submit_label(theme: AuthTheme, mode: Mode, pending: bool) -> &'static str {
    match (theme, pending, mode) {
        (AuthTheme::Circuit, true, _) => "Authenticating...",
        (AuthTheme::Circuit, false, Mode::Login) => "Sign In",
        (AuthTheme::Circuit, false, Mode::Signup) => "Create Account",
        (_, true, _) => "Please wait...",
        (_, false, Mode::Login) => "Login",
        (_, false, Mode::Signup) => "Sign Up",
    }
}

pub fn mode_toggle_label(theme: AuthTheme, mode: Mode) -> &'static str {
    match (theme, mode) {
        (AuthTheme::Circuit, Mode::Login) => "Don't have an account? Create One",
        (AuthTheme::Circuit, Mode::Signup) => "Already have an account? Sign In",
        (_, Mode::Login) => "Don't have an account? Sign Up",
        (_, Mode::Signup) => "Already have an account? Login",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_validation_only_checks_confirmation() {
        let mut form = FormState {
            email: "a@b.com".into(),
            password: "x".into(),
            confirm_password: "y".into(),
            ..FormState::default()
        };
        let err = validate_signup(&form).unwrap_err();
        assert_eq!(err.error, PASSWORD_MISMATCH);
        assert_eq!(err.code, "VALIDATION_ERROR");

        form.confirm_password = "x".into();
        assert!(validate_signup(&form).is_ok());
    }

    #[test]
    fn labels_follow_mode_and_pending() {
        assert_eq!(submit_label(AuthTheme::Aurora, Mode::Login, false), "Login");
        assert_eq!(submit_label(AuthTheme::Minimal, Mode::Signup, false), "Sign Up");
        assert_eq!(submit_label(AuthTheme::Aurora, Mode::Signup, true), "Please wait...");
        assert_eq!(
            mode_toggle_label(AuthTheme::Aurora, Mode::Signup),
            "Already have an account? Login"
        );
    }

    #[test]
    fn circuit_theme_uses_its_own_wording() {
        assert_eq!(submit_label(AuthTheme::Circuit, Mode::Login, false), "Sign In");
        assert_eq!(submit_label(AuthTheme::Circuit, Mode::Signup, false), "Create Account");
        assert_eq!(submit_label(AuthTheme::Circuit, Mode::Login, true), "Authenticating...");
        assert_eq!(
            mode_toggle_label(AuthTheme::Circuit, Mode::Login),
            "Don't have an account? Create One"
        );
        assert_eq!(
            mode_toggle_label(AuthTheme::Circuit, Mode::Signup),
            "Already have an account? Sign In"
        );
    }

    #[test]
    fn student_help_only_on_student_login() {
        assert!(shows_student_help(Role::Student, Mode::Login));
        assert!(!shows_student_help(Role::Student, Mode::Signup));
        assert!(!shows_student_help(Role::Faculty, Mode::Login));
        assert_eq!(email_placeholder(Role::Student), "Enter your college email");
    }
}
