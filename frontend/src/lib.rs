use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;
use wasm_bindgen_futures::spawn_local;

mod api;
mod components;
pub mod config;
mod pages;
mod state;
pub mod theme;
pub mod utils;

#[cfg(test)]
mod test_support;

use pages::login::LoginPage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <crate::state::auth::AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=LoginPage/>
                    <Route path="/login" view=LoginPage/>
                </Routes>
            </Router>
        </crate::state::auth::AuthProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    log::info!("Starting Lab Evaluation frontend (wasm)");

    // The sign-in theme and API base come from runtime config, so mount
    // only after it has been resolved.
    spawn_local(async move {
        config::init().await;
        mount_to_body(App);
    });
}
