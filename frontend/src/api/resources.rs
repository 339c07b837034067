use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::Method;
use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use super::{client::ApiClient, types::ApiError};
use crate::pages::dashboard::schema::schema_for;

const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub const USERS_SEGMENT: &str = "users";

/// The seven collections shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    Electric,
    Population,
    Transport,
    Water,
    Waste,
    Accommodation,
    Goods,
}

impl ResourceKind {
    /// Load order on the dashboard.
    pub const ALL: [ResourceKind; 7] = [
        ResourceKind::Electric,
        ResourceKind::Population,
        ResourceKind::Transport,
        ResourceKind::Water,
        ResourceKind::Waste,
        ResourceKind::Accommodation,
        ResourceKind::Goods,
    ];

    /// Path segment, taken from the collection's schema.
    pub fn segment(self) -> &'static str {
        schema_for(self).segment
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.segment())
    }
}

/// Server-assigned identifier. Numeric ids are kept in their decimal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(Self(s)),
            Value::Number(n) => Ok(Self(n.to_string())),
            other => Err(D::Error::custom(format!("invalid record id: {}", other))),
        }
    }
}

/// One row of any collection. Field shapes live in the dashboard schemas,
/// not here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ResourceRecord {
    /// Field lookup by wire key; `id` resolves to the identifier.
    pub fn field(&self, key: &str) -> Option<Value> {
        if key == "id" {
            return self.id.as_ref().map(|id| Value::String(id.to_string()));
        }
        self.fields.get(key).cloned()
    }

    fn from_value(value: Value) -> Result<Self, ApiError> {
        match value {
            Value::Object(_) => serde_json::from_value(value).map_err(|e| {
                ApiError::request_failed(format!("Failed to parse response: {}", e))
            }),
            _ => Ok(Self::default()),
        }
    }
}

/// Answer to a delete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Acknowledgement {
    pub message: Option<String>,
}

impl From<Value> for Acknowledgement {
    fn from(value: Value) -> Self {
        Self {
            message: value
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}

/// list/create/update/delete for one collection, bound to its path segment.
///
/// Every call needs a session and goes straight through [`ApiClient::send`].
#[derive(Clone)]
pub struct ResourceGateway {
    api: ApiClient,
    segment: &'static str,
}

impl ResourceGateway {
    pub fn new(api: ApiClient, segment: &'static str) -> Self {
        Self { api, segment }
    }

    pub fn for_kind(api: ApiClient, kind: ResourceKind) -> Self {
        Self::new(api, kind.segment())
    }

    pub fn segment(&self) -> &'static str {
        self.segment
    }

    fn collection_path(&self) -> String {
        format!("/{}", self.segment)
    }

    fn item_path(&self, id: &RecordId) -> String {
        format!(
            "/{}/{}",
            self.segment,
            utf8_percent_encode(id.as_str(), PATH_SEGMENT)
        )
    }

    /// Full collection in server order. A `null` body reads as empty.
    pub async fn list(&self) -> Result<Vec<ResourceRecord>, ApiError> {
        let value = self
            .api
            .send(Method::GET, &self.collection_path(), None, true)
            .await?;
        if value.is_null() {
            return Ok(Vec::new());
        }
        serde_json::from_value(value)
            .map_err(|e| ApiError::request_failed(format!("Failed to parse response: {}", e)))
    }

    pub async fn create(&self, fields: &Map<String, Value>) -> Result<ResourceRecord, ApiError> {
        let body = Value::Object(fields.clone());
        let value = self
            .api
            .send(Method::POST, &self.collection_path(), Some(&body), true)
            .await?;
        ResourceRecord::from_value(value)
    }

    pub async fn update(
        &self,
        id: &RecordId,
        fields: &Map<String, Value>,
    ) -> Result<ResourceRecord, ApiError> {
        let body = Value::Object(fields.clone());
        let value = self
            .api
            .send(Method::PUT, &self.item_path(id), Some(&body), true)
            .await?;
        let mut record = ResourceRecord::from_value(value)?;
        record.id.get_or_insert_with(|| id.clone());
        Ok(record)
    }

    pub async fn delete(&self, id: &RecordId) -> Result<Acknowledgement, ApiError> {
        self.api
            .send(Method::DELETE, &self.item_path(id), None, true)
            .await
            .map(Acknowledgement::from)
    }
}

impl ApiClient {
    pub fn resource(&self, kind: ResourceKind) -> ResourceGateway {
        ResourceGateway::for_kind(self.clone(), kind)
    }

    /// Admin-only user directory; same contract as the dashboard collections.
    pub fn users(&self) -> ResourceGateway {
        ResourceGateway::new(self.clone(), USERS_SEGMENT)
    }
}
