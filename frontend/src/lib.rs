use leptos::*;
use leptos_meta::*;
use leptos_router::*;

mod api;
mod components;
pub mod config;
mod pages;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

use components::guard::RequireAuth;
use pages::{DashboardPage, HomePage, LoginPage, RegisterPage};
use state::auth::AuthProvider;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Starting Carbon Tracker frontend");

    // window.__CARBON_ENV (env.js) takes precedence over ./config.json.
    leptos::spawn_local(async move {
        config::init().await;
    });

    mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    provide_meta_context();
    view! {
        <Title text="Carbon Tracker"/>
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/register" view=RegisterPage/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}
