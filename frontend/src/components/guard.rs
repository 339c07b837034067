use crate::state::auth::{use_api, use_auth};
use leptos::*;

/// Renders its children only while a session exists; otherwise asks the
/// navigator for the login page.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let api = use_api();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated());
    create_effect(move |_| {
        if !is_authenticated.get() {
            api.navigator().redirect_to_login();
        }
    });
    view! {
        <Show when=move || is_authenticated.get() fallback=|| ()>
            {children()}
        </Show>
    }
}
