use crate::{
    api::ApiError,
    components::{error::InlineErrorMessage, layout::SuccessMessage},
};
use leptos::{ev::SubmitEvent, *};

const INPUT_CLASS: &str = "appearance-none relative block w-full px-3 py-2 border border-border placeholder-fg-muted text-fg rounded-md focus:outline-none sm:text-sm";

#[component]
pub fn LoginForm(
    email: RwSignal<String>,
    password: RwSignal<String>,
    error: Signal<Option<ApiError>>,
    message: Signal<Option<String>>,
    pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                    {"Sign in to Carbon Tracker"}
                </h2>
                <form class="mt-8 space-y-4" on:submit=move |ev| on_submit.call(ev)>
                    <div>
                        <label for="email" class="sr-only">{"Email"}</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            required
                            class=INPUT_CLASS
                            placeholder="Email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label for="password" class="sr-only">{"Password"}</label>
                        <input
                            id="password"
                            name="password"
                            type="password"
                            required
                            class=INPUT_CLASS
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>

                    <InlineErrorMessage error=error />
                    {move || message.get().map(|message| view! { <SuccessMessage message=message /> })}

                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full flex justify-center py-2 px-4 text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg disabled:opacity-50"
                    >
                        {move || if pending.get() { "Signing in..." } else { "Login" }}
                    </button>
                    <p class="text-center text-sm text-fg-muted">
                        {"No account? "}
                        <a href="/register" class="font-medium text-action-primary-bg">{"Register"}</a>
                    </p>
                </form>
            </div>
        </div>
    }
}
