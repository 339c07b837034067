use crate::pages::login::{components::form::LoginForm, view_model::use_login_view_model};
use leptos::{ev::SubmitEvent, Callback, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });

    view! {
        <LoginForm
            email=vm.form.email
            password=vm.form.password
            error=vm.error.into()
            message=vm.message.into()
            pending=vm.login_action.pending().into()
            on_submit=handle_submit
        />
    }
}
