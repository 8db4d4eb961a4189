use super::{components::form::AuthFormCard, view_model::AuthFormViewModel};
use crate::{
    components::{backdrop::AnimatedBackdrop, header::AuthHeader},
    config,
    state::auth::Authenticator,
    theme::AuthTheme,
};
use leptos::*;
use std::rc::Rc;

pub const FOOTER_TAGLINE: &str = "Secure • Modern • Efficient";

/// Login/signup form. The authentication capability is passed in; the theme
/// defaults to the configured one.
#[component]
pub fn AuthForm(
    authenticator: Rc<dyn Authenticator>,
    #[prop(optional)] theme: Option<AuthTheme>,
) -> impl IntoView {
    let theme = theme.unwrap_or_else(config::auth_theme);
    let palette = theme.palette();
    let vm = AuthFormViewModel::new(authenticator);

    view! {
        <div class={palette.page} data-theme={theme.as_str()}>
            <AnimatedBackdrop theme=theme/>
            <div class="relative z-10 max-w-md w-full">
                <AuthHeader theme=theme/>
                <AuthFormCard vm=vm theme=theme/>
                <div class="text-center mt-8">
                    <p class={palette.footer}>{FOOTER_TAGLINE}</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::fakes::RecordingAuthenticator;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn explicit_theme_wins_over_config() {
        let html = render_to_string(|| {
            view! { <AuthForm authenticator={RecordingAuthenticator::succeeding()} theme=AuthTheme::Circuit/> }
        });
        assert!(html.contains("data-theme=\"circuit\""));
        assert!(html.contains("System Online"));
        assert!(html.contains(FOOTER_TAGLINE));
    }

    #[test]
    fn missing_theme_uses_configured_default() {
        let html = render_to_string(|| {
            view! { <AuthForm authenticator={RecordingAuthenticator::succeeding()}/> }
        });
        assert!(html.contains("data-theme=\"aurora\""));
        assert!(html.contains("Email Address"));
    }

    #[test]
    fn rendering_never_calls_the_collaborator() {
        let fake = RecordingAuthenticator::succeeding();
        let handle = fake.clone();
        let _ = render_to_string(move || {
            view! { <AuthForm authenticator=handle theme=AuthTheme::Minimal/> }
        });
        assert!(fake.calls().is_empty());
    }
}
