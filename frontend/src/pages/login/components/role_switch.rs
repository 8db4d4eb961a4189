use crate::{
    api::Role,
    components::icons::{Icon, IconKind},
    theme::AuthTheme,
};
use leptos::*;

#[component]
pub fn RoleSwitch(role: Signal<Role>, on_select: Callback<Role>, theme: AuthTheme) -> impl IntoView {
    let palette = theme.palette();
    let option = move |value: Role, icon: IconKind| {
        let class = move || {
            format!(
                "flex-1 flex items-center justify-center space-x-2 py-3 px-4 rounded-lg font-medium transition-all duration-300 {}",
                if role.get() == value {
                    palette.role_active
                } else {
                    palette.role_idle
                }
            )
        };
        view! {
            <button
                type="button"
                class=class
                aria-pressed=move || (role.get() == value).to_string()
                on:click=move |_| on_select.call(value)
            >
                <Icon kind=icon class="h-5 w-5"/>
                <span>{value.label()}</span>
            </button>
        }
    };

    view! {
        <div class="flex mb-6 bg-white/5 rounded-xl p-1 backdrop-blur-sm" role="group">
            {option(Role::Faculty, IconKind::UserCheck)}
            {option(Role::Student, IconKind::User)}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn marks_selected_role_pressed() {
        let html = render_to_string(|| {
            let role = create_rw_signal(Role::Student);
            view! {
                <RoleSwitch
                    role={role.into()}
                    on_select={Callback::new(|_: Role| {})}
                    theme=AuthTheme::Aurora
                />
            }
        });
        assert!(html.contains("Faculty"));
        assert!(html.contains("Student"));
        assert_eq!(html.matches("aria-pressed=\"true\"").count(), 1);
        assert_eq!(html.matches("aria-pressed=\"false\"").count(), 1);
    }
}
