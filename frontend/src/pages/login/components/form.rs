use super::{messages::InlineErrorMessage, password_input::PasswordInput, role_switch::RoleSwitch};
use crate::{
    api::Role,
    components::icons::{Icon, IconKind},
    pages::login::{
        model::{FormField, Mode, PasswordField},
        utils,
        view_model::AuthFormViewModel,
    },
    theme::AuthTheme,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn AuthFormCard(vm: AuthFormViewModel, theme: AuthTheme) -> impl IntoView {
    let palette = theme.palette();
    let mode = vm.mode();
    let role = vm.role();
    let pending = vm.pending();
    let error = vm.error();
    let name = vm.field(FormField::Name);
    let email = vm.field(FormField::Email);
    let password = vm.field(FormField::Password);
    let confirm_password = vm.field(FormField::ConfirmPassword);
    let show_password = vm.is_visible(PasswordField::Password);
    let show_confirm = vm.is_visible(PasswordField::ConfirmPassword);

    let is_signup = move || mode.get() == Mode::Signup;
    let student_help = move || utils::shows_student_help(role.get(), mode.get());

    let input_for = {
        let vm = vm.clone();
        move |field: FormField| {
            let vm = vm.clone();
            Callback::new(move |value: String| vm.set_field(field, value))
        }
    };
    let on_name = input_for(FormField::Name);
    let on_email = input_for(FormField::Email);
    let on_password = input_for(FormField::Password);
    let on_confirm = input_for(FormField::ConfirmPassword);

    let visibility_for = {
        let vm = vm.clone();
        move |field: PasswordField| {
            let vm = vm.clone();
            Callback::new(move |_: ()| vm.toggle_password_visibility(field))
        }
    };
    let toggle_password = visibility_for(PasswordField::Password);
    let toggle_confirm = visibility_for(PasswordField::ConfirmPassword);

    let on_role = {
        let vm = vm.clone();
        Callback::new(move |value: Role| vm.set_role(value))
    };
    let on_toggle_mode = {
        let vm = vm.clone();
        Callback::new(move |_: ()| vm.toggle_mode())
    };

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let vm = vm.clone();
        spawn_local(async move { vm.submit().await });
    };

    view! {
        <div class={palette.card}>
            <div class="relative z-10">
                <Show when=move || mode.get() == Mode::Login fallback=|| ()>
                    <RoleSwitch role=role on_select=on_role theme=theme/>
                </Show>

                <form class="space-y-6" on:submit=handle_submit>
                    <Show when=is_signup fallback=|| ()>
                        <div class="group">
                            <label for="name" class={palette.label}>"Full Name"</label>
                            <input
                                id="name"
                                name="name"
                                type="text"
                                required
                                class={palette.input}
                                placeholder="Enter your full name"
                                prop:value=move || name.get()
                                on:input=move |ev| on_name.call(event_target_value(&ev))
                            />
                        </div>
                    </Show>

                    <div class="group">
                        <label for="email" class={palette.label}>"Email Address"</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            autocomplete="email"
                            required
                            class={palette.input}
                            placeholder=move || utils::email_placeholder(role.get())
                            prop:value=move || email.get()
                            on:input=move |ev| on_email.call(event_target_value(&ev))
                        />
                        <Show when=student_help fallback=|| ()>
                            <p class={palette.help}>
                                <Icon kind=IconKind::Sparkles class="h-3 w-3"/>
                                <span>"Use your college email address provided by the faculty"</span>
                            </p>
                        </Show>
                    </div>

                    <PasswordInput
                        id="password"
                        label="Password"
                        placeholder="Enter your password"
                        value=password
                        visible=show_password
                        on_input=on_password
                        on_toggle=toggle_password
                        theme=theme
                    >
                        <Show when=student_help fallback=|| ()>
                            <p class={palette.help}>
                                <Icon kind=IconKind::Zap class="h-3 w-3"/>
                                <span>"Use the password provided by your faculty or your updated password"</span>
                            </p>
                        </Show>
                    </PasswordInput>

                    <Show when=is_signup fallback=|| ()>
                        <PasswordInput
                            id="confirm-password"
                            label="Confirm Password"
                            placeholder="Confirm your password"
                            value=confirm_password
                            visible=show_confirm
                            on_input=on_confirm
                            on_toggle=toggle_confirm
                            theme=theme
                        />
                    </Show>

                    <InlineErrorMessage error=error/>

                    <button type="submit" disabled=move || pending.get() class={palette.submit}>
                        <span class="relative flex items-center justify-center space-x-2">
                            <Show when=move || pending.get() fallback=|| ()>
                                <span class="animate-spin rounded-full h-5 w-5 border-b-2 border-white"></span>
                            </Show>
                            <span>{move || utils::submit_label(theme, mode.get(), pending.get())}</span>
                        </span>
                    </button>
                </form>

                <Show when=move || role.get() == Role::Faculty fallback=|| ()>
                    <div class="mt-6 text-center">
                        <button
                            type="button"
                            class={palette.link}
                            on:click=move |_| on_toggle_mode.call(())
                        >
                            {move || utils::mode_toggle_label(theme, mode.get())}
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::login::model::SubmissionStatus;
    use crate::test_support::fakes::RecordingAuthenticator;
    use crate::test_support::ssr::render_to_string;

    fn render_with(prepare: impl FnOnce(&AuthFormViewModel) + 'static) -> String {
        render_to_string(move || {
            let vm = AuthFormViewModel::new(RecordingAuthenticator::succeeding());
            prepare(&vm);
            view! { <AuthFormCard vm=vm theme=AuthTheme::Aurora/> }
        })
    }

    #[test]
    fn faculty_login_shows_role_switch_and_signup_toggle() {
        let html = render_with(|_| {});
        assert!(html.contains("aria-pressed"));
        assert!(html.contains("Email Address"));
        assert!(html.contains("Sign Up"));
        assert!(!html.contains("Full Name"));
        assert!(!html.contains("Confirm Password"));
        assert!(!html.contains("provided by the faculty"));
    }

    #[test]
    fn signup_shows_extra_fields_and_hides_role_switch() {
        let html = render_with(|vm| vm.toggle_mode());
        assert!(html.contains("Full Name"));
        assert!(html.contains("Confirm Password"));
        assert!(html.contains("Already have an account? Login"));
        assert!(!html.contains("aria-pressed"));
    }

    #[test]
    fn student_login_shows_help_and_no_mode_toggle() {
        let html = render_with(|vm| vm.set_role(Role::Student));
        assert!(html.contains("Enter your college email"));
        assert!(html.contains("Use your college email address provided by the faculty"));
        assert!(html.contains("Use the password provided by your faculty"));
        assert!(!html.contains("Sign Up"));
    }

    #[test]
    fn pending_disables_submit() {
        let idle = render_with(|_| {});
        let html = render_with(|vm| vm.model.update(|m| m.status = SubmissionStatus::Pending));
        assert!(html.contains("Please wait..."));
        assert!(html.contains("animate-spin"));
        // the submit classes mention `disabled:` too, so compare against idle
        assert!(html.matches("disabled").count() > idle.matches("disabled").count());
        assert!(!idle.contains("Please wait..."));
    }

    #[test]
    fn error_is_rendered_verbatim() {
        let html = render_with(|vm| {
            vm.model
                .update(|m| m.status = SubmissionStatus::Error("Invalid credentials".into()))
        });
        assert!(html.contains("Invalid credentials"));
        assert!(!html.contains("Please wait..."));
    }

    #[test]
    fn revealed_password_renders_as_text() {
        let masked = render_with(|_| {});
        assert!(masked.contains("type=\"password\""));

        let revealed = render_with(|vm| vm.toggle_password_visibility(PasswordField::Password));
        assert!(!revealed.contains("type=\"password\""));
        assert!(revealed.contains("Hide password"));
    }

    #[test]
    fn circuit_card_uses_circuit_wording() {
        let html = render_to_string(|| {
            let vm = AuthFormViewModel::new(RecordingAuthenticator::succeeding());
            view! { <AuthFormCard vm=vm theme=AuthTheme::Circuit/> }
        });
        assert!(html.contains("Sign In"));
        assert!(html.contains("Create One"));
        assert!(!html.contains("Please wait..."));
    }
}
