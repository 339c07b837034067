use chrono::NaiveDate;
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

use super::schema::{FieldKind, ResourceSchema, DEFAULT_LOCATION};
use crate::api::{ApiError, RecordId, ResourceGateway, ResourceRecord};

/// Raw text of a form, keyed by field key.
pub type FormInput = BTreeMap<String, String>;

pub fn empty_input(schema: &ResourceSchema) -> FormInput {
    schema
        .fields
        .iter()
        .map(|field| (field.key.to_string(), String::new()))
        .collect()
}

// Unparsable numbers become 0 instead of blocking submission.
pub fn coerce_float(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

pub fn coerce_integer(raw: &str) -> i64 {
    let raw = raw.trim();
    raw.parse::<i64>()
        .ok()
        .or_else(|| {
            raw.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && v.abs() < i64::MAX as f64)
                .map(|v| v.trunc() as i64)
        })
        .unwrap_or(0)
}

pub fn date_to_wire(raw: &str) -> Option<String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .ok()
        .map(|date| format!("{}T00:00:00Z", date.format("%Y-%m-%d")))
}

/// Turns form text into the JSON body for create/update.
///
/// Only presence is checked for text and date fields; numbers are never
/// rejected.
pub fn build_payload(
    schema: &ResourceSchema,
    input: &FormInput,
) -> Result<Map<String, Value>, ApiError> {
    let mut payload = Map::new();
    for field in schema.fields {
        let raw = input.get(field.key).map(|v| v.trim()).unwrap_or_default();
        if field.is_required() && raw.is_empty() {
            return Err(ApiError::validation(format!("{} is required", field.label)));
        }
        let value = match field.kind {
            FieldKind::Text | FieldKind::Choice(_) => json!(raw),
            FieldKind::Float => json!(coerce_float(raw)),
            FieldKind::Integer => json!(coerce_integer(raw)),
            FieldKind::Date => json!(date_to_wire(raw).ok_or_else(|| {
                ApiError::validation(format!("{} must be a date (YYYY-MM-DD)", field.label))
            })?),
            FieldKind::Location if raw.is_empty() => json!(DEFAULT_LOCATION),
            FieldKind::Location => json!(raw),
        };
        payload.insert(field.key.to_string(), value);
    }
    Ok(payload)
}

pub async fn submit_create(
    gateway: &ResourceGateway,
    schema: &ResourceSchema,
    input: &FormInput,
) -> Result<ResourceRecord, ApiError> {
    let payload = build_payload(schema, input)?;
    gateway.create(&payload).await
}

pub async fn submit_update(
    gateway: &ResourceGateway,
    schema: &ResourceSchema,
    id: &RecordId,
    input: &FormInput,
) -> Result<ResourceRecord, ApiError> {
    let payload = build_payload(schema, input)?;
    gateway.update(id, &payload).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiErrorKind;
    use crate::pages::dashboard::schema::{ELECTRIC, GOODS, POPULATION};

    fn input(pairs: &[(&str, &str)]) -> FormInput {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn float_coercion_never_yields_nan() {
        assert_eq!(coerce_float("12.5"), 12.5);
        assert_eq!(coerce_float(" 3 "), 3.0);
        assert_eq!(coerce_float(""), 0.0);
        assert_eq!(coerce_float("abc"), 0.0);
        assert_eq!(coerce_float("NaN"), 0.0);
        assert_eq!(coerce_float("inf"), 0.0);
    }

    #[test]
    fn integer_coercion_truncates_and_defaults_to_zero() {
        assert_eq!(coerce_integer("42"), 42);
        assert_eq!(coerce_integer("12.9"), 12);
        assert_eq!(coerce_integer("-3"), -3);
        assert_eq!(coerce_integer("many"), 0);
        assert_eq!(coerce_integer(""), 0);
        assert_eq!(coerce_integer("1e400"), 0);
    }

    #[test]
    fn electric_payload_matches_wire_shape() {
        let payload = build_payload(
            &ELECTRIC,
            &input(&[
                ("source", "Solar Generation"),
                ("kwh", "120.5"),
                ("fuel_liters", "oops"),
                ("hours", ""),
                ("date", "2024-03-02"),
                ("location", ""),
            ]),
        )
        .unwrap();

        assert_eq!(
            Value::Object(payload),
            json!({
                "source": "Solar Generation",
                "kwh": 120.5,
                "fuel_liters": 0.0,
                "hours": 0.0,
                "date": "2024-03-02T00:00:00Z",
                "location": "Overall"
            })
        );
    }

    #[test]
    fn integer_fields_are_sent_as_integers() {
        let payload = build_payload(
            &POPULATION,
            &input(&[
                ("registered_count", "100"),
                ("floating_count", "n/a"),
                ("date", "2024-01-31"),
                ("location", "Campus A"),
            ]),
        )
        .unwrap();
        assert_eq!(payload["registered_count"], json!(100));
        assert_eq!(payload["floating_count"], json!(0));
        assert!(payload["floating_count"].is_i64());
        assert_eq!(payload["location"], json!("Campus A"));
    }

    #[test]
    fn missing_required_fields_are_rejected_locally() {
        let err = build_payload(
            &GOODS,
            &input(&[("quantity", "2"), ("cost", "5"), ("date", "2024-01-01")]),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ApiErrorKind::Validation);
        assert_eq!(err.error, "Item Name is required");

        let err = build_payload(&GOODS, &input(&[("item_name", "Paper")])).unwrap_err();
        assert_eq!(err.error, "Date is required");
    }

    #[test]
    fn malformed_date_is_rejected() {
        let err = build_payload(
            &GOODS,
            &input(&[("item_name", "Paper"), ("date", "03/02/2024")]),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ApiErrorKind::Validation);
    }

    #[test]
    fn empty_input_has_a_slot_per_field() {
        let form = empty_input(&ELECTRIC);
        assert_eq!(form.len(), ELECTRIC.fields.len());
        assert!(form.values().all(String::is_empty));
    }
}
