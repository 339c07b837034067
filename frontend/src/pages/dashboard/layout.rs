use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn DashboardFrame(children: Children) -> impl IntoView {
    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-fg">{"Dashboard"}</h1>
                    <p class="mt-1 text-sm text-fg-muted">{"Record consumption data and track the resulting footprint"}</p>
                </div>
                {children()}
            </div>
        </Layout>
    }
}
