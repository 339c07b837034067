use crate::{
    api::Summary,
    components::layout::{ErrorMessage, LoadingSpinner},
    pages::dashboard::utils::{breakdown_rows, format_co2e, format_population},
};
use leptos::*;

#[component]
pub fn SummarySection(
    #[prop(into)] summary: Signal<Option<Summary>>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div>
                <h3 class="text-base font-semibold text-fg">{"Carbon Footprint Summary"}</h3>
                <p class="text-sm text-fg-muted">{"Computed by the server from every recorded entry"}</p>
            </div>
            {move || error.get().map(|message| view! { <ErrorMessage message=message /> })}
            <div>
                {move || match summary.get() {
                    None => view! {
                        <div class="flex items-center gap-2 text-sm text-fg-muted">
                            <LoadingSpinner />
                            <span>{"Loading summary..."}</span>
                        </div>
                    }.into_view(),
                    Some(data) => {
                        let breakdown = breakdown_rows(&data);
                        view! {
                            <div class="grid grid-cols-1 gap-4 lg:grid-cols-3">
                                <Metric label="Total Footprint" value={format_co2e(data.total_footprint)} />
                                <Metric label="Total Population" value={format_population(data.total_population)} />
                                <Metric label="Per Capita" value={format_co2e(data.per_capita_footprint)} />
                            </div>
                            <ul class="mt-4 divide-y divide-border text-sm">
                                {breakdown
                                    .into_iter()
                                    .map(|(category, value)| view! {
                                        <li class="flex justify-between py-1">
                                            <span class="text-fg-muted">{category}</span>
                                            <span class="font-medium text-fg">{value}</span>
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        }.into_view()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn Metric(#[prop(into)] label: String, value: String) -> impl IntoView {
    view! {
        <div class="p-6 rounded-2xl bg-surface border border-border shadow">
            <p class="text-xs font-bold text-fg-muted uppercase tracking-widest">{label}</p>
            <p class="mt-3 text-2xl font-extrabold text-fg">{value}</p>
        </div>
    }
}
