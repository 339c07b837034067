use crate::api::ResourceKind;
use crate::pages::dashboard::{
    components::{ResourceSection, SummarySection, UsersSection},
    layout::DashboardFrame,
    repository::Section,
    view_model::use_dashboard_view_model,
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let is_admin = vm.is_admin;

    {
        let vm = vm.clone();
        create_effect(move |prev: Option<()>| {
            if prev.is_none() {
                vm.load();
            }
        });
    }

    view! {
        <DashboardFrame>
            <SummarySection summary=vm.summary() error=vm.load_error(Section::Summary) />
            <div class="grid grid-cols-1 gap-6 xl:grid-cols-2">
                {ResourceKind::ALL
                    .into_iter()
                    .map(|kind| view! { <ResourceSection kind=kind /> })
                    .collect_view()}
            </div>
            <Show when=move || is_admin.get()>
                <UsersSection />
            </Show>
        </DashboardFrame>
    }
}
