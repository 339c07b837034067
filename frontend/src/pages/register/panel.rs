use crate::{
    components::{error::InlineErrorMessage, layout::SuccessMessage},
    pages::register::{utils::ROLE_CHOICES, view_model::use_register_view_model},
    state::session::Role,
};
use leptos::{ev::SubmitEvent, *};

const INPUT_CLASS: &str = "appearance-none relative block w-full px-3 py-2 border border-border placeholder-fg-muted text-fg rounded-md focus:outline-none sm:text-sm";

#[component]
pub fn RegisterPanel() -> impl IntoView {
    let vm = use_register_view_model();
    let form = vm.form;
    let pending = vm.register_action.pending();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                    {"Create an account"}
                </h2>
                <form class="mt-8 space-y-4" on:submit=on_submit>
                    <input
                        name="name"
                        type="text"
                        required
                        class=INPUT_CLASS
                        placeholder="Name"
                        prop:value=move || form.name.get()
                        on:input=move |ev| form.name.set(event_target_value(&ev))
                    />
                    <input
                        name="email"
                        type="email"
                        required
                        class=INPUT_CLASS
                        placeholder="Email"
                        prop:value=move || form.email.get()
                        on:input=move |ev| form.email.set(event_target_value(&ev))
                    />
                    <input
                        name="password"
                        type="password"
                        required
                        class=INPUT_CLASS
                        placeholder="Password"
                        prop:value=move || form.password.get()
                        on:input=move |ev| form.password.set(event_target_value(&ev))
                    />
                    <select
                        name="role"
                        class=INPUT_CLASS
                        prop:value=move || form.role.get().to_string()
                        on:change=move |ev| form.role.set(Role::from(event_target_value(&ev)))
                    >
                        {ROLE_CHOICES
                            .iter()
                            .map(|role| {
                                let value = role.to_string();
                                view! { <option value=value.clone()>{value}</option> }
                            })
                            .collect_view()}
                    </select>

                    <InlineErrorMessage error=vm.error.into() />
                    {move || vm.message.get().map(|message| view! { <SuccessMessage message=message /> })}

                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full flex justify-center py-2 px-4 text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg disabled:opacity-50"
                    >
                        {move || if pending.get() { "Registering..." } else { "Register" }}
                    </button>
                    <p class="text-center text-sm text-fg-muted">
                        {"Already registered? "}
                        <a href="/login" class="font-medium text-action-primary-bg">{"Login"}</a>
                    </p>
                </form>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn offers_user_and_admin_roles() {
        let html = render_to_string(|| view! { <RegisterPanel /> });
        assert!(html.contains("name=\"name\""));
        assert!(html.contains("value=\"user\""));
        assert!(html.contains("value=\"admin\""));
    }
}
