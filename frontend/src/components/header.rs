use super::icons::{Icon, IconKind};
use crate::theme::AuthTheme;
use leptos::*;

pub const INSTITUTE_NAME: &str = "NBKR Institute of Science and Technology";
pub const SYSTEM_NAME: &str = "Computer Networks Lab Evaluation System";

#[component]
pub fn AuthHeader(theme: AuthTheme) -> impl IntoView {
    let palette = theme.palette();
    let animated = theme.is_animated();

    view! {
        <div class="text-center mb-8">
            <div class="flex justify-center mb-6">
                <div class="relative">
                    <Show when=move || animated fallback=|| ()>
                        <div class="absolute inset-0 bg-gradient-to-r from-blue-500 to-purple-600 rounded-full blur-lg opacity-75 animate-pulse"></div>
                    </Show>
                    <div class="relative bg-gradient-to-r from-blue-500 to-purple-600 p-4 rounded-full shadow-2xl">
                        <Icon kind=IconKind::Book class="h-12 w-12 text-white"/>
                    </div>
                </div>
            </div>
            <h1 class={palette.title}>{INSTITUTE_NAME}</h1>
            <p class={palette.subtitle}>{SYSTEM_NAME}</p>
            <Show when=move || theme == AuthTheme::Circuit fallback=|| ()>
                <div class="flex justify-center items-center space-x-4 mb-4">
                    <div class="flex items-center space-x-2 text-green-400/80">
                        <div class="w-2 h-2 bg-green-400 rounded-full animate-pulse"></div>
                        <span class="text-xs font-medium">"System Online"</span>
                    </div>
                    <div class="flex items-center space-x-2 text-blue-400/80">
                        <div class="w-2 h-2 bg-blue-400 rounded-full animate-ping"></div>
                        <span class="text-xs font-medium">"Secure Connection"</span>
                    </div>
                </div>
            </Show>
            <Show when=move || animated fallback=|| ()>
                <div class="mt-4 flex justify-center space-x-2">
                    <div class="w-2 h-2 bg-blue-400 rounded-full animate-pulse"></div>
                    <div class="w-2 h-2 bg-purple-400 rounded-full animate-pulse delay-300"></div>
                    <div class="w-2 h-2 bg-pink-400 rounded-full animate-pulse delay-600"></div>
                </div>
            </Show>
        </div>
    }
}
