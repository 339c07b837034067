use log::{error, info};

use super::{
    forms::{submit_create, submit_update, FormInput},
    schema::{schema_for, ResourceSchema, USERS},
    table::{render, TableView},
};
use crate::api::{
    Acknowledgement, ApiClient, ApiError, RecordId, ResourceGateway, ResourceKind,
    ResourceRecord, Summary,
};

/// One independently loaded area of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Summary,
    Collection(ResourceKind),
    Users,
}

impl Section {
    pub fn title(self) -> &'static str {
        match self {
            Section::Summary => "Summary",
            Section::Collection(kind) => schema_for(kind).title,
            Section::Users => USERS.title,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SectionUpdate {
    Summary(Summary),
    Table(Section, TableView),
    Failed(Section, ApiError),
}

pub type Sink<'a> = &'a mut dyn FnMut(SectionUpdate);

pub async fn load_summary(api: &ApiClient) -> Result<Summary, ApiError> {
    api.get_dashboard_summary().await
}

pub async fn load_collection(
    gateway: &ResourceGateway,
    schema: &ResourceSchema,
) -> Result<TableView, ApiError> {
    let records = gateway.list().await?;
    Ok(render(&records, schema.columns, schema.empty_message))
}

/// Loads one section and reports the outcome to `sink`.
///
/// Ordinary failures are reported and swallowed. Only a terminated session
/// comes back as `Err`, so callers stop issuing requests.
pub async fn refresh_section(
    api: &ApiClient,
    section: Section,
    sink: Sink<'_>,
) -> Result<(), ApiError> {
    let result = match section {
        Section::Summary => load_summary(api).await.map(SectionUpdate::Summary),
        Section::Collection(kind) => load_collection(&api.resource(kind), schema_for(kind))
            .await
            .map(|view| SectionUpdate::Table(section, view)),
        Section::Users => load_collection(&api.users(), &USERS)
            .await
            .map(|view| SectionUpdate::Table(section, view)),
    };

    match result {
        Ok(update) => {
            sink(update);
            Ok(())
        }
        Err(err) => {
            error!("Failed to load {}: {}", section.title(), err);
            sink(SectionUpdate::Failed(section, err.clone()));
            if err.is_session_terminated() {
                Err(err)
            } else {
                Ok(())
            }
        }
    }
}

/// Initial page load: summary, then each collection in order, then the user
/// directory for admins. One request at a time.
pub async fn load_dashboard(api: &ApiClient, sink: Sink<'_>) -> Result<(), ApiError> {
    let Some(session) = api.current_session() else {
        api.navigator().redirect_to_login();
        return Err(ApiError::missing_session());
    };

    refresh_section(api, Section::Summary, sink).await?;
    for kind in ResourceKind::ALL {
        refresh_section(api, Section::Collection(kind), sink).await?;
    }
    if session.role.is_admin() {
        refresh_section(api, Section::Users, sink).await?;
    }
    Ok(())
}

async fn refresh_after_mutation(
    api: &ApiClient,
    kind: ResourceKind,
    sink: Sink<'_>,
) -> Result<(), ApiError> {
    refresh_section(api, Section::Collection(kind), sink).await?;
    refresh_section(api, Section::Summary, sink).await
}

/// create, then list and summary. Resolves once both reloads finished.
pub async fn create_and_refresh(
    api: &ApiClient,
    kind: ResourceKind,
    input: &FormInput,
    sink: Sink<'_>,
) -> Result<ResourceRecord, ApiError> {
    let record = submit_create(&api.resource(kind), schema_for(kind), input).await?;
    info!("Created {} record", kind);
    refresh_after_mutation(api, kind, sink).await?;
    Ok(record)
}

pub async fn update_and_refresh(
    api: &ApiClient,
    kind: ResourceKind,
    id: &RecordId,
    input: &FormInput,
    sink: Sink<'_>,
) -> Result<ResourceRecord, ApiError> {
    let record = submit_update(&api.resource(kind), schema_for(kind), id, input).await?;
    info!("Updated {} record {}", kind, id);
    refresh_after_mutation(api, kind, sink).await?;
    Ok(record)
}

pub async fn delete_and_refresh(
    api: &ApiClient,
    kind: ResourceKind,
    id: &RecordId,
    sink: Sink<'_>,
) -> Result<Acknowledgement, ApiError> {
    let ack = api.resource(kind).delete(id).await?;
    info!("Deleted {} record {}", kind, id);
    refresh_after_mutation(api, kind, sink).await?;
    Ok(ack)
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::{electric_json, summary_json, Harness};
    use crate::state::session::{Role, SessionStore};
    use crate::utils::navigation::Redirect;
    use httpmock::prelude::*;
    use serde_json::json;

    fn label(update: &SectionUpdate) -> String {
        match update {
            SectionUpdate::Summary(_) => "summary".into(),
            SectionUpdate::Table(Section::Collection(kind), _) => kind.segment().into(),
            SectionUpdate::Table(section, _) => section.title().to_lowercase(),
            SectionUpdate::Failed(section, err) => format!("failed:{}:{}", section.title(), err.error),
        }
    }

    fn input(pairs: &[(&str, &str)]) -> FormInput {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    async fn mock_all_collections(h: &Harness) {
        for kind in ResourceKind::ALL {
            h.server
                .mock_async(|when, then| {
                    when.method(GET).path(format!("/{}", kind.segment()));
                    then.status(200).json_body(json!([]));
                })
                .await;
        }
    }

    #[tokio::test]
    async fn page_load_without_session_redirects_and_sends_nothing() {
        let h = Harness::anonymous().await;
        let summary = h
            .server
            .mock_async(|when, then| {
                when.method(GET).path("/dashboard");
                then.status(200).json_body(summary_json());
            })
            .await;

        let mut updates = Vec::new();
        let err = load_dashboard(&h.api, &mut |u| updates.push(u))
            .await
            .unwrap_err();

        assert_eq!(err.code, "SESSION_MISSING");
        assert!(updates.is_empty());
        assert_eq!(summary.hits_async().await, 0);
        assert_eq!(h.navigator.redirects(), vec![Redirect::Login]);
    }

    #[tokio::test]
    async fn page_load_fetches_summary_then_each_collection_in_order() {
        let h = Harness::signed_in(Role::User).await;
        h.server
            .mock_async(|when, then| {
                when.method(GET).path("/dashboard");
                then.status(200).json_body(summary_json());
            })
            .await;
        mock_all_collections(&h).await;
        let users = h
            .server
            .mock_async(|when, then| {
                when.method(GET).path("/users");
                then.status(200).json_body(json!([]));
            })
            .await;

        let mut updates = Vec::new();
        load_dashboard(&h.api, &mut |u| updates.push(u)).await.unwrap();

        let labels: Vec<String> = updates.iter().map(label).collect();
        assert_eq!(
            labels,
            vec![
                "summary",
                "electric",
                "population",
                "transport",
                "water",
                "waste",
                "accommodation",
                "goods"
            ]
        );
        assert_eq!(users.hits_async().await, 0);
        assert!(matches!(
            &updates[1],
            SectionUpdate::Table(_, TableView::Empty { message })
                if message == "No electric consumption data found."
        ));
    }

    #[tokio::test]
    async fn admins_also_load_the_user_directory_last() {
        let h = Harness::signed_in(Role::Admin).await;
        h.server
            .mock_async(|when, then| {
                when.method(GET).path("/dashboard");
                then.status(200).json_body(summary_json());
            })
            .await;
        mock_all_collections(&h).await;
        h.server
            .mock_async(|when, then| {
                when.method(GET).path("/users");
                then.status(200).json_body(json!([
                    { "id": 1, "name": "Ana", "email": "ana@example.com", "role": "admin" }
                ]));
            })
            .await;

        let mut updates = Vec::new();
        load_dashboard(&h.api, &mut |u| updates.push(u)).await.unwrap();

        assert_eq!(updates.len(), 9);
        let Some(SectionUpdate::Table(Section::Users, TableView::Table { rows, .. })) =
            updates.last()
        else {
            panic!("expected users table last");
        };
        assert_eq!(rows[0].cells, vec!["1", "Ana", "ana@example.com", "admin"]);
    }

    #[tokio::test]
    async fn one_failing_collection_does_not_block_the_rest() {
        let h = Harness::signed_in(Role::User).await;
        h.server
            .mock_async(|when, then| {
                when.method(GET).path("/dashboard");
                then.status(200).json_body(summary_json());
            })
            .await;
        for kind in ResourceKind::ALL {
            h.server
                .mock_async(|when, then| {
                    when.method(GET).path(format!("/{}", kind.segment()));
                    if kind == ResourceKind::Transport {
                        then.status(500)
                            .json_body(json!({ "error": "Failed to fetch transport data" }));
                    } else {
                        then.status(200).json_body(json!(null));
                    }
                })
                .await;
        }

        let mut updates = Vec::new();
        load_dashboard(&h.api, &mut |u| updates.push(u)).await.unwrap();

        let labels: Vec<String> = updates.iter().map(label).collect();
        assert_eq!(labels.len(), 8);
        assert_eq!(labels[3], "failed:Transport:Failed to fetch transport data");
        assert_eq!(labels[7], "goods");
        assert!(h.store.get().is_some());
    }

    #[tokio::test]
    async fn forbidden_response_stops_the_remaining_loads() {
        let h = Harness::signed_in(Role::User).await;
        h.server
            .mock_async(|when, then| {
                when.method(GET).path("/dashboard");
                then.status(200).json_body(summary_json());
            })
            .await;
        h.server
            .mock_async(|when, then| {
                when.method(GET).path("/electric");
                then.status(403).json_body(json!({ "error": "Forbidden" }));
            })
            .await;
        let population = h
            .server
            .mock_async(|when, then| {
                when.method(GET).path("/population");
                then.status(200).json_body(json!([]));
            })
            .await;

        let mut updates = Vec::new();
        let err = load_dashboard(&h.api, &mut |u| updates.push(u))
            .await
            .unwrap_err();

        assert_eq!(err.code, "AUTH_REJECTED");
        assert_eq!(updates.len(), 2);
        assert_eq!(population.hits_async().await, 0);
        assert!(h.store.get().is_none());
        assert_eq!(h.navigator.login_redirects(), 1);
    }

    #[tokio::test]
    async fn create_refreshes_list_then_summary() {
        let h = Harness::signed_in(Role::User).await;
        let create = h
            .server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/electric")
                    .header("Authorization", h.bearer())
                    .json_body(json!({
                        "source": "Main Board",
                        "kwh": 42.0,
                        "fuel_liters": 0.0,
                        "hours": 4.5,
                        "date": "2024-03-01T00:00:00Z",
                        "location": "Overall"
                    }));
                then.status(201)
                    .json_body(json!({ "message": "Electric consumption added!", "id": 5 }));
            })
            .await;
        let list = h
            .server
            .mock_async(|when, then| {
                when.method(GET).path("/electric");
                then.status(200).json_body(json!([electric_json(5, 42.0)]));
            })
            .await;
        let summary = h
            .server
            .mock_async(|when, then| {
                when.method(GET).path("/dashboard");
                then.status(200).json_body(summary_json());
            })
            .await;

        let mut updates = Vec::new();
        let record = create_and_refresh(
            &h.api,
            ResourceKind::Electric,
            &input(&[
                ("source", "Main Board"),
                ("kwh", "42"),
                ("fuel_liters", "x"),
                ("hours", "4.5"),
                ("date", "2024-03-01"),
            ]),
            &mut |u| updates.push(u),
        )
        .await
        .unwrap();

        assert_eq!(record.id, Some(RecordId::from(5)));
        create.assert_async().await;
        list.assert_async().await;
        summary.assert_async().await;
        let labels: Vec<String> = updates.iter().map(label).collect();
        assert_eq!(labels, vec!["electric", "summary"]);
        let SectionUpdate::Table(_, TableView::Table { rows, .. }) = &updates[0] else {
            panic!("expected electric table");
        };
        assert_eq!(rows[0].cells[2], "42");
    }

    #[tokio::test]
    async fn failed_create_skips_the_refresh() {
        let h = Harness::signed_in(Role::User).await;
        h.server
            .mock_async(|when, then| {
                when.method(POST).path("/water");
                then.status(400).json_body(json!({ "error": "Invalid input" }));
            })
            .await;
        let list = h
            .server
            .mock_async(|when, then| {
                when.method(GET).path("/water");
                then.status(200).json_body(json!([]));
            })
            .await;

        let mut updates = Vec::new();
        let err = create_and_refresh(
            &h.api,
            ResourceKind::Water,
            &input(&[("meter_reading", "12"), ("date", "2024-01-01")]),
            &mut |u| updates.push(u),
        )
        .await
        .unwrap_err();

        assert_eq!(err.error, "Invalid input");
        assert_eq!(err.status, Some(400));
        assert!(updates.is_empty());
        assert_eq!(list.hits_async().await, 0);
        assert!(h.store.get().is_some());
    }

    #[tokio::test]
    async fn locally_invalid_form_never_reaches_the_server() {
        let h = Harness::signed_in(Role::User).await;
        let create = h
            .server
            .mock_async(|when, then| {
                when.method(POST).path("/goods");
                then.status(201).json_body(json!({ "id": 1 }));
            })
            .await;

        let mut updates = Vec::new();
        let err = create_and_refresh(
            &h.api,
            ResourceKind::Goods,
            &input(&[("quantity", "3")]),
            &mut |u| updates.push(u),
        )
        .await
        .unwrap_err();

        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(create.hits_async().await, 0);
    }

    #[tokio::test]
    async fn delete_refreshes_list_then_summary() {
        let h = Harness::signed_in(Role::User).await;
        let delete = h
            .server
            .mock_async(|when, then| {
                when.method(DELETE).path("/waste/9");
                then.status(200).json_body(json!({ "message": "Waste entry deleted" }));
            })
            .await;
        h.server
            .mock_async(|when, then| {
                when.method(GET).path("/waste");
                then.status(200).json_body(json!([]));
            })
            .await;
        h.server
            .mock_async(|when, then| {
                when.method(GET).path("/dashboard");
                then.status(200).json_body(summary_json());
            })
            .await;

        let mut updates = Vec::new();
        let ack = delete_and_refresh(
            &h.api,
            ResourceKind::Waste,
            &RecordId::from(9),
            &mut |u| updates.push(u),
        )
        .await
        .unwrap();

        delete.assert_async().await;
        assert_eq!(ack.message.as_deref(), Some("Waste entry deleted"));
        let labels: Vec<String> = updates.iter().map(label).collect();
        assert_eq!(labels, vec!["waste", "summary"]);
    }

    #[tokio::test]
    async fn unauthorized_list_after_update_skips_summary() {
        let h = Harness::signed_in(Role::User).await;
        h.server
            .mock_async(|when, then| {
                when.method(PUT).path("/population/3");
                then.status(200).json_body(json!({ "message": "updated" }));
            })
            .await;
        h.server
            .mock_async(|when, then| {
                when.method(GET).path("/population");
                then.status(401).json_body(json!({ "error": "Token expired" }));
            })
            .await;
        let summary = h
            .server
            .mock_async(|when, then| {
                when.method(GET).path("/dashboard");
                then.status(200).json_body(summary_json());
            })
            .await;

        let mut updates = Vec::new();
        let err = update_and_refresh(
            &h.api,
            ResourceKind::Population,
            &RecordId::from(3),
            &input(&[("registered_count", "10"), ("date", "2024-02-02")]),
            &mut |u| updates.push(u),
        )
        .await
        .unwrap_err();

        assert!(err.is_session_terminated());
        assert_eq!(summary.hits_async().await, 0);
        assert!(h.store.get().is_none());
        assert_eq!(updates.len(), 1);
    }
}
