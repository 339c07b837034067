use crate::{
    api::{RecordId, ResourceKind},
    components::{
        error::InlineErrorMessage,
        layout::{ErrorMessage, SuccessMessage},
    },
    pages::dashboard::{
        repository::Section,
        schema::{schema_for, FieldKind, FieldSpec, DEFAULT_LOCATION},
        table::ResourceTable,
        view_model::{use_dashboard_view_model, ResourceSectionModel},
    },
};
use leptos::{ev::SubmitEvent, *};

const INPUT_CLASS: &str = "mt-1 block w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg";

#[component]
pub fn ResourceSection(kind: ResourceKind) -> impl IntoView {
    let vm = use_dashboard_view_model();
    let schema = schema_for(kind);
    let section = Section::Collection(kind);
    let model = vm.resource_section(kind);
    let table = vm.table(section);
    let load_error = vm.load_error(section);
    let busy = model.busy();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        model.submit();
    };
    let on_delete = Callback::new(move |id: RecordId| model.delete(id));

    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4" id=schema.segment>
            <h3 class="text-base font-semibold text-fg">{schema.title}</h3>
            {move || load_error.get().map(|message| view! { <ErrorMessage message=message /> })}
            <form class="grid grid-cols-1 gap-3 md:grid-cols-3" on:submit=on_submit>
                {schema
                    .fields
                    .iter()
                    .map(|field| view! { <FieldInput field=*field model=model /> })
                    .collect_view()}
                <div class="md:col-span-3 flex justify-end">
                    <button
                        type="submit"
                        class="px-4 py-2 rounded-md bg-action-primary-bg text-action-primary-text text-sm font-medium disabled:opacity-50"
                        disabled=move || busy.get()
                    >
                        {move || if model.submit_action.pending().get() { "Saving..." } else { "Add" }}
                    </button>
                </div>
            </form>
            {move || model.message.get().map(|message| view! { <SuccessMessage message=message /> })}
            <InlineErrorMessage error=model.error.into() />
            <ResourceTable view=table on_delete=on_delete busy=busy />
        </section>
    }
}

#[component]
fn FieldInput(field: FieldSpec, model: ResourceSectionModel) -> impl IntoView {
    let value = model.field_value(field.key);
    let on_input = move |ev: web_sys::Event| model.set_field(field.key, event_target_value(&ev));
    let required = field.is_required();

    let control = match field.kind {
        FieldKind::Choice(options) => view! {
            <select class=INPUT_CLASS name=field.key required=required on:change=on_input prop:value=move || value.get()>
                <option value="">{"Select..."}</option>
                {options
                    .iter()
                    .map(|option| view! { <option value=*option>{*option}</option> })
                    .collect_view()}
            </select>
        }
        .into_view(),
        kind => {
            let (input_type, step) = match kind {
                FieldKind::Float => ("number", Some("any")),
                FieldKind::Integer => ("number", Some("1")),
                FieldKind::Date => ("date", None),
                _ => ("text", None),
            };
            let placeholder = (kind == FieldKind::Location).then_some(DEFAULT_LOCATION);
            view! {
                <input
                    class=INPUT_CLASS
                    type=input_type
                    step=step
                    name=field.key
                    placeholder=placeholder
                    required=required
                    prop:value=move || value.get()
                    on:input=on_input
                />
            }
            .into_view()
        }
    };

    view! {
        <label class="block text-sm font-medium text-fg-muted">
            {field.label}
            {control}
        </label>
    }
}
