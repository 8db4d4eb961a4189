use crate::{
    config,
    state::auth::{use_auth, Authenticator, SessionAuthenticator},
};
use leptos::*;
use leptos_meta::Title;
use std::rc::Rc;

pub mod components;
pub mod model;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::AuthForm;

pub const PAGE_TITLE: &str = "Sign in | CN Lab Evaluation";

#[component]
pub fn LoginPage() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let authenticator: Rc<dyn Authenticator> = Rc::new(SessionAuthenticator::from_context());
    let signed_in_as = move || auth.with(|state| state.user.as_ref().map(|u| u.email.clone()));

    view! {
        <Title text=PAGE_TITLE/>
        <Show when=move || signed_in_as().is_some() fallback=|| ()>
            <div class="fixed top-0 inset-x-0 z-20 text-center text-sm py-2 bg-black/40 text-white">
                {"Signed in as "}{move || signed_in_as().unwrap_or_default()}{" · "}
                <a class="underline" href={config::post_login_path()}>"Continue"</a>
            </div>
        </Show>
        <AuthForm authenticator=authenticator/>
    }
}
