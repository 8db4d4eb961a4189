use leptos::*;

#[component]
pub fn InlineErrorMessage(error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div
                role="alert"
                class="bg-red-500/20 border border-red-400/30 text-red-200 px-4 py-3 rounded-xl backdrop-blur-sm animate-shake"
            >
                {move || error.get().unwrap_or_default()}
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_message_when_present() {
        let html = render_to_string(|| {
            let error = create_rw_signal(Some("Invalid credentials".to_string()));
            view! { <InlineErrorMessage error={error.into()}/> }
        });
        assert!(html.contains("Invalid credentials"));
        assert!(html.contains("role=\"alert\""));
    }

    #[test]
    fn renders_nothing_without_error() {
        let html = render_to_string(|| {
            let error = create_rw_signal(None::<String>);
            view! { <InlineErrorMessage error={error.into()}/> }
        });
        assert!(!html.contains("role=\"alert\""));
    }
}
