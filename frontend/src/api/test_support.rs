//! Host-side fixtures: an `ApiClient` wired to an `httpmock` server, an
//! in-memory session store and a recording navigator.

use httpmock::MockServer;
use serde_json::{json, Value};

use crate::{
    api::ApiClient,
    state::session::{MemorySessionStore, Role, Session},
    utils::navigation::RecordingNavigator,
};

pub const TEST_TOKEN: &str = "tok-123";

pub struct Harness {
    pub server: MockServer,
    pub store: MemorySessionStore,
    pub navigator: RecordingNavigator,
    pub api: ApiClient,
}

impl Harness {
    pub async fn anonymous() -> Self {
        Self::build(MemorySessionStore::new()).await
    }

    pub async fn signed_in(role: Role) -> Self {
        Self::build(MemorySessionStore::with_session(Session::new(TEST_TOKEN, role))).await
    }

    async fn build(store: MemorySessionStore) -> Self {
        let server = MockServer::start_async().await;
        let navigator = RecordingNavigator::new();
        let api = ApiClient::new_with_base_url(server.base_url())
            .with_session_store(store.clone())
            .with_navigator(navigator.clone());
        Self {
            server,
            store,
            navigator,
            api,
        }
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", TEST_TOKEN)
    }
}

pub fn electric_json(id: i64, kwh: f64) -> Value {
    json!({
        "id": id,
        "source": "Main Board",
        "kwh": kwh,
        "fuel_liters": 0,
        "hours": 4.5,
        "date": "2024-03-01T00:00:00Z",
        "location": "Overall"
    })
}

pub fn summary_json() -> Value {
    json!({
        "total_carbon_footprint_co2e": 1520.456,
        "total_population": 120,
        "per_capita_footprint_co2e": 12.67,
        "component_breakdown": {
            "electric": 1200.0,
            "transport": 320.456
        }
    })
}
