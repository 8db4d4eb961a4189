use crate::{
    components::icons::{Icon, IconKind},
    theme::AuthTheme,
};
use leptos::*;

/// Password box with a show/hide toggle. The toggle only changes how the
/// value is rendered.
#[component]
pub fn PasswordInput(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    value: Signal<String>,
    visible: Signal<bool>,
    on_input: Callback<String>,
    on_toggle: Callback<()>,
    theme: AuthTheme,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let palette = theme.palette();

    view! {
        <div class="group">
            <label for=id class={palette.label}>{label}</label>
            <div class="relative">
                <input
                    id=id
                    name=id
                    type=move || if visible.get() { "text" } else { "password" }
                    required
                    class={format!("{} pr-12", palette.input)}
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.call(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="absolute right-3 top-1/2 transform -translate-y-1/2 opacity-60 hover:opacity-100 transition-opacity"
                    aria-label=move || if visible.get() { "Hide password" } else { "Show password" }
                    on:click=move |_| on_toggle.call(())
                >
                    {move || {
                        if visible.get() {
                            view! { <Icon kind=IconKind::EyeOff class="h-5 w-5"/> }.into_view()
                        } else {
                            view! { <Icon kind=IconKind::Eye class="h-5 w-5"/> }.into_view()
                        }
                    }}
                </button>
            </div>
            {children.map(|children| children())}
        </div>
    }
}
