use crate::{
    components::layout::ErrorMessage,
    pages::dashboard::{
        repository::Section, schema::USERS, table::ResourceTable,
        view_model::use_dashboard_view_model,
    },
};
use leptos::*;

/// Read-only directory of accounts, shown to admins.
#[component]
pub fn UsersSection() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let table = vm.table(Section::Users);
    let load_error = vm.load_error(Section::Users);

    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4" id=USERS.segment>
            <h3 class="text-base font-semibold text-fg">{USERS.title}</h3>
            {move || load_error.get().map(|message| view! { <ErrorMessage message=message /> })}
            <ResourceTable view=table />
        </section>
    }
}
