use crate::state::auth::{self, use_api, use_auth};
use leptos::{ev::MouseEvent, *};

#[component]
pub fn Header() -> impl IntoView {
    let (auth, set_auth) = use_auth();
    let api = use_api();
    let role_label = move || {
        auth.get()
            .session
            .map(|session| session.role.to_string())
            .unwrap_or_default()
    };
    let is_authenticated = move || auth.get().is_authenticated();
    let on_logout = move |_: MouseEvent| auth::logout(&api, set_auth);

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center">
                        <h1 class="text-xl font-semibold text-fg">
                            "Carbon Tracker"
                        </h1>
                    </div>
                    <Show when=is_authenticated>
                        <nav class="flex items-center space-x-4">
                            <a href="/dashboard" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                "Dashboard"
                            </a>
                            <span class="px-2 py-0.5 rounded-full text-xs font-semibold bg-surface-muted text-fg-muted">
                                {role_label}
                            </span>
                            <button
                                on:click=on_logout.clone()
                                class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                            >
                                "Logout"
                            </button>
                        </nav>
                    </Show>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}
