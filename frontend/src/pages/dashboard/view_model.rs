use std::collections::BTreeMap;

use crate::api::{ApiClient, ApiError, RecordId, ResourceKind, ResourceRecord, Summary};
use crate::pages::dashboard::{
    forms::{empty_input, FormInput},
    repository::{self, Section, SectionUpdate},
    schema::schema_for,
    table::TableView,
};
use crate::state::auth::{use_api, use_auth};
use leptos::*;
use log::warn;

/// Everything the dashboard currently shows. Failed loads record an error for
/// their section and keep whatever was there before.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub summary: Option<Summary>,
    pub tables: BTreeMap<Section, TableView>,
    pub errors: BTreeMap<Section, ApiError>,
}

impl DashboardState {
    pub fn apply(&mut self, update: SectionUpdate) {
        match update {
            SectionUpdate::Summary(summary) => {
                self.summary = Some(summary);
                self.errors.remove(&Section::Summary);
            }
            SectionUpdate::Table(section, view) => {
                self.tables.insert(section, view);
                self.errors.remove(&section);
            }
            SectionUpdate::Failed(section, err) => {
                self.errors.insert(section, err);
            }
        }
    }

    pub fn error_message(&self, section: Section) -> Option<String> {
        self.errors
            .get(&section)
            .map(|err| format!("Failed to load {}: {}", section.title(), err))
    }
}

#[derive(Clone)]
pub struct DashboardViewModel {
    pub api: ApiClient,
    pub state: RwSignal<DashboardState>,
    pub is_admin: Signal<bool>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_api();
        let (auth, _) = use_auth();
        Self {
            api,
            state: create_rw_signal(DashboardState::default()),
            is_admin: Signal::derive(move || auth.get().is_admin()),
        }
    }

    pub fn sink(&self) -> impl FnMut(SectionUpdate) + 'static {
        let state = self.state;
        move |update: SectionUpdate| state.update(|s| s.apply(update))
    }

    pub fn load(&self) {
        let api = self.api.clone();
        let mut sink = self.sink();
        spawn_local(async move {
            if let Err(err) = repository::load_dashboard(&api, &mut sink).await {
                warn!("Dashboard load stopped: {}", err);
            }
        });
    }

    pub fn table(&self, section: Section) -> Signal<Option<TableView>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.tables.get(&section).cloned()))
    }

    pub fn summary(&self) -> Signal<Option<Summary>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.summary.clone()))
    }

    pub fn load_error(&self, section: Section) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error_message(section)))
    }

    pub fn resource_section(&self, kind: ResourceKind) -> ResourceSectionModel {
        ResourceSectionModel::new(self, kind)
    }
}

impl Default for DashboardViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    match use_context::<DashboardViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DashboardViewModel::new();
            provide_context(vm.clone());
            vm
        }
    }
}

/// Form and row actions of one collection.
#[derive(Clone, Copy)]
pub struct ResourceSectionModel {
    pub kind: ResourceKind,
    pub form: RwSignal<FormInput>,
    pub message: RwSignal<Option<String>>,
    pub error: RwSignal<Option<ApiError>>,
    pub submit_action: Action<FormInput, Result<ResourceRecord, ApiError>>,
    pub delete_action: Action<RecordId, Result<(), ApiError>>,
}

impl ResourceSectionModel {
    fn new(vm: &DashboardViewModel, kind: ResourceKind) -> Self {
        let schema = schema_for(kind);
        let form = create_rw_signal(empty_input(schema));
        let message = create_rw_signal(None::<String>);
        let error = create_rw_signal(None::<ApiError>);

        let (api, state) = (vm.api.clone(), vm.state);
        let submit_action = create_action(move |input: &FormInput| {
            let api = api.clone();
            let input = input.clone();
            async move {
                let mut sink = move |update: SectionUpdate| state.update(|s| s.apply(update));
                repository::create_and_refresh(&api, kind, &input, &mut sink).await
            }
        });

        let (api, state) = (vm.api.clone(), vm.state);
        let delete_action = create_action(move |id: &RecordId| {
            let api = api.clone();
            let id = id.clone();
            async move {
                let mut sink = move |update: SectionUpdate| state.update(|s| s.apply(update));
                repository::delete_and_refresh(&api, kind, &id, &mut sink)
                    .await
                    .map(|_| ())
            }
        });

        create_effect(move |_| {
            if let Some(result) = submit_action.value().get() {
                match result {
                    Ok(_) => {
                        form.set(empty_input(schema));
                        error.set(None);
                        message.set(schema.created_message.map(str::to_string));
                    }
                    Err(err) => {
                        message.set(None);
                        error.set(Some(err));
                    }
                }
            }
        });

        create_effect(move |_| {
            if let Some(Err(err)) = delete_action.value().get() {
                message.set(None);
                error.set(Some(err));
            }
        });

        Self {
            kind,
            form,
            message,
            error,
            submit_action,
            delete_action,
        }
    }

    pub fn set_field(&self, key: &str, value: String) {
        self.form.update(|form| {
            form.insert(key.to_string(), value);
        });
    }

    pub fn field_value(&self, key: &'static str) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.get(key).cloned().unwrap_or_default()))
    }

    pub fn submit(&self) {
        if self.submit_action.pending().get_untracked() {
            return;
        }
        self.message.set(None);
        self.error.set(None);
        self.submit_action.dispatch(self.form.get_untracked());
    }

    pub fn delete(&self, id: RecordId) {
        if self.delete_action.pending().get_untracked() {
            return;
        }
        self.message.set(None);
        self.error.set(None);
        self.delete_action.dispatch(id);
    }

    pub fn busy(&self) -> Signal<bool> {
        let (create_pending, delete_pending) =
            (self.submit_action.pending(), self.delete_action.pending());
        Signal::derive(move || create_pending.get() || delete_pending.get())
    }
}
