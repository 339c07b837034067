use crate::state::auth::use_auth;
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let (auth, _) = use_auth();
    let signed_in = move || auth.get().is_authenticated();

    view! {
        <div class="min-h-screen bg-surface">
            <div class="max-w-7xl mx-auto py-12 px-4 sm:px-6 lg:px-8 text-center">
                <h1 class="text-4xl font-extrabold text-fg sm:text-5xl">
                    "Carbon Tracker"
                </h1>
                <p class="mt-3 max-w-md mx-auto text-base text-fg-muted sm:text-lg">
                    "Record consumption and see the footprint it adds up to"
                </p>
                <div class="mt-8 flex justify-center gap-4">
                    <Show
                        when=signed_in
                        fallback=|| view! {
                            <a href="/login" class="px-8 py-3 rounded-md text-action-primary-text bg-action-primary-bg">"Login"</a>
                            <a href="/register" class="px-8 py-3 rounded-md border border-border text-fg">"Register"</a>
                        }
                    >
                        <a href="/dashboard" class="px-8 py-3 rounded-md text-action-primary-text bg-action-primary-bg">"Go to dashboard"</a>
                    </Show>
                </div>
            </div>
        </div>
    }
}
