use chrono::{DateTime, NaiveDate};
use leptos::*;
use serde_json::Value;

use crate::{
    api::{RecordId, ResourceRecord},
    components::empty_state::EmptyState,
};

pub const PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub id: Option<RecordId>,
    pub cells: Vec<String>,
}

/// What one collection section shows. Each render replaces the previous one
/// wholesale.
#[derive(Debug, Clone, PartialEq)]
pub enum TableView {
    Empty { message: String },
    Table { headers: Vec<String>, rows: Vec<TableRow> },
}

/// "Fuel Liters" -> "fuel_liters".
pub fn column_key(label: &str) -> String {
    label.to_lowercase().replace(' ', "_")
}

fn format_date(raw: &str) -> Option<String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive().format("%Y-%m-%d").to_string());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|d| d.format("%Y-%m-%d").to_string())
}

fn format_number(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 => format!("{}", f as i64),
        Some(f) => two_decimals(f),
        None => n.to_string(),
    }
}

/// Exact halfway values round away from zero. Only odd multiples of 1/8
/// can sit exactly on a hundredths tie; every other value already formats
/// from its exact binary expansion.
pub fn two_decimals(f: f64) -> String {
    let on_tie = (f * 8.0).fract() == 0.0 && (f * 4.0).fract() != 0.0;
    if on_tie {
        format!("{:.2}", (f * 100.0).round() / 100.0)
    } else {
        format!("{:.2}", f)
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64().map(|f| f == 0.0).unwrap_or(false),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Dates lose their time of day, fractional numbers get two decimals, and
/// anything missing or falsy becomes a dash.
pub fn format_cell(value: Option<&Value>) -> String {
    let Some(value) = value.filter(|v| !is_falsy(v)) else {
        return PLACEHOLDER.to_string();
    };
    match value {
        Value::String(s) => format_date(s).unwrap_or_else(|| s.clone()),
        Value::Number(n) => format_number(n),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

pub fn render(records: &[ResourceRecord], columns: &[&str], empty_message: &str) -> TableView {
    if records.is_empty() {
        return TableView::Empty {
            message: empty_message.to_string(),
        };
    }
    let keys: Vec<String> = columns.iter().map(|c| column_key(c)).collect();
    let rows = records
        .iter()
        .map(|record| TableRow {
            id: record.id.clone(),
            cells: keys
                .iter()
                .map(|key| format_cell(record.field(key).as_ref()))
                .collect(),
        })
        .collect();
    TableView::Table {
        headers: columns.iter().map(|c| c.to_string()).collect(),
        rows,
    }
}

#[component]
pub fn ResourceTable(
    #[prop(into)] view: Signal<Option<TableView>>,
    #[prop(optional)] on_delete: Option<Callback<RecordId>>,
    #[prop(optional, into)] busy: Option<Signal<bool>>,
) -> impl IntoView {
    let busy = busy.unwrap_or_else(|| Signal::derive(|| false));
    move || match view.get() {
        None => view! {
            <p class="text-sm text-fg-muted">{"Loading..."}</p>
        }
        .into_view(),
        Some(TableView::Empty { message }) => view! { <EmptyState title=message /> }.into_view(),
        Some(TableView::Table { headers, rows }) => {
            let with_actions = on_delete.is_some();
            view! {
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-border text-sm">
                        <thead class="bg-surface-muted">
                            <tr>
                                {headers
                                    .into_iter()
                                    .map(|h| view! { <th class="px-3 py-2 text-left font-semibold text-fg">{h}</th> })
                                    .collect_view()}
                                {with_actions.then(|| view! { <th class="px-3 py-2"></th> })}
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            {rows
                                .into_iter()
                                .map(|row| {
                                    let delete_button = match (on_delete, row.id.clone()) {
                                        (Some(on_delete), Some(id)) => Some(view! {
                                            <td class="px-3 py-2 text-right">
                                                <button
                                                    class="text-status-error-text hover:underline disabled:opacity-50"
                                                    disabled=move || busy.get()
                                                    on:click=move |_| on_delete.call(id.clone())
                                                >
                                                    {"Delete"}
                                                </button>
                                            </td>
                                        }),
                                        _ => None,
                                    };
                                    view! {
                                        <tr>
                                            {row
                                                .cells
                                                .into_iter()
                                                .map(|cell| view! { <td class="px-3 py-2 text-fg">{cell}</td> })
                                                .collect_view()}
                                            {delete_button}
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                </div>
            }
            .into_view()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> ResourceRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn column_key_lowercases_and_joins_words() {
        assert_eq!(column_key("ID"), "id");
        assert_eq!(column_key("Fuel Liters"), "fuel_liters");
        assert_eq!(column_key("Distance KM"), "distance_km");
    }

    #[test]
    fn dates_drop_time_of_day() {
        assert_eq!(format_cell(Some(&json!("2024-03-01T00:00:00Z"))), "2024-03-01");
        assert_eq!(
            format_cell(Some(&json!("2024-03-01T23:30:00+05:30"))),
            "2024-03-01"
        );
        assert_eq!(format_cell(Some(&json!("2024-03-01"))), "2024-03-01");
    }

    #[test]
    fn fractional_numbers_get_two_decimals() {
        assert_eq!(format_cell(Some(&json!(12.3456))), "12.35");
        assert_eq!(format_cell(Some(&json!(4.5))), "4.50");
        assert_eq!(format_cell(Some(&json!(7))), "7");
        assert_eq!(format_cell(Some(&json!(8.0))), "8");
    }

    #[test]
    fn halfway_values_round_away_from_zero() {
        assert_eq!(format_cell(Some(&json!(10.125))), "10.13");
        assert_eq!(format_cell(Some(&json!(0.125))), "0.13");
        assert_eq!(format_cell(Some(&json!(-0.375))), "-0.38");
        assert_eq!(format_cell(Some(&json!(2.5))), "2.50");
        // Stored just below the tie in binary.
        assert_eq!(format_cell(Some(&json!(2.675))), "2.67");
    }

    #[test]
    fn missing_and_falsy_values_render_as_dash() {
        assert_eq!(format_cell(None), PLACEHOLDER);
        assert_eq!(format_cell(Some(&Value::Null)), PLACEHOLDER);
        assert_eq!(format_cell(Some(&json!(""))), PLACEHOLDER);
        assert_eq!(format_cell(Some(&json!(0))), PLACEHOLDER);
        assert_eq!(format_cell(Some(&json!(0.0))), PLACEHOLDER);
        assert_eq!(format_cell(Some(&json!(false))), PLACEHOLDER);
        assert_eq!(format_cell(Some(&json!("Solar"))), "Solar");
    }

    #[test]
    fn empty_collection_renders_placeholder_not_table() {
        let view = render(&[], &["ID", "Source"], "No electric consumption data found.");
        assert_eq!(
            view,
            TableView::Empty {
                message: "No electric consumption data found.".into()
            }
        );
    }

    #[test]
    fn rows_follow_column_order() {
        let records = vec![
            record(json!({ "id": 2, "source": "Main Board", "kwh": 10.125, "date": "2024-02-01T00:00:00Z" })),
            record(json!({ "id": 3, "source": "Solar Generation", "kwh": 0 })),
        ];
        let view = render(&records, &["ID", "Source", "KWH", "Date", "Location"], "none");
        let TableView::Table { headers, rows } = view else {
            panic!("expected table");
        };
        assert_eq!(headers, vec!["ID", "Source", "KWH", "Date", "Location"]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, Some(RecordId::from(2)));
        assert_eq!(rows[0].cells, vec!["2", "Main Board", "10.13", "2024-02-01", "-"]);
        assert_eq!(rows[1].cells, vec!["3", "Solar Generation", "-", "-", "-"]);
    }
}
