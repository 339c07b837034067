//! Per-collection field and column definitions. Adding a collection means
//! adding a schema here; the gateway and the refresh flow stay untouched.

use crate::api::{ResourceKind, USERS_SEGMENT};

pub const DEFAULT_LOCATION: &str = "Overall";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Choice(&'static [&'static str]),
    Float,
    Integer,
    /// Calendar date, sent as midnight UTC.
    Date,
    /// Free text falling back to [`DEFAULT_LOCATION`].
    Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    const fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { key, label, kind }
    }

    pub fn is_required(&self) -> bool {
        matches!(
            self.kind,
            FieldKind::Text | FieldKind::Choice(_) | FieldKind::Date
        )
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ResourceSchema {
    pub segment: &'static str,
    pub title: &'static str,
    pub empty_message: &'static str,
    /// Shown after a successful create; `None` for read-only listings.
    pub created_message: Option<&'static str>,
    pub fields: &'static [FieldSpec],
    /// Display labels; the record key is derived from each label.
    pub columns: &'static [&'static str],
}

const DATE: FieldSpec = FieldSpec::new("date", "Date", FieldKind::Date);
const LOCATION: FieldSpec = FieldSpec::new("location", "Location", FieldKind::Location);

pub const ELECTRIC_SOURCES: &[&str] = &[
    "Main Board",
    "Diesel Generator",
    "Biofuel Generator",
    "Solar Generation",
];

pub static ELECTRIC: ResourceSchema = ResourceSchema {
    segment: "electric",
    title: "Electric Consumption",
    empty_message: "No electric consumption data found.",
    created_message: Some("Electric consumption added!"),
    fields: &[
        FieldSpec::new("source", "Source", FieldKind::Choice(ELECTRIC_SOURCES)),
        FieldSpec::new("kwh", "KWH", FieldKind::Float),
        FieldSpec::new("fuel_liters", "Fuel Liters", FieldKind::Float),
        FieldSpec::new("hours", "Hours", FieldKind::Float),
        DATE,
        LOCATION,
    ],
    columns: &["ID", "Source", "KWH", "Fuel Liters", "Hours", "Date", "Location"],
};

pub static POPULATION: ResourceSchema = ResourceSchema {
    segment: "population",
    title: "Population",
    empty_message: "No population data found.",
    created_message: Some("Population stats added!"),
    fields: &[
        FieldSpec::new("registered_count", "Registered Count", FieldKind::Integer),
        FieldSpec::new("floating_count", "Floating Count", FieldKind::Integer),
        DATE,
        LOCATION,
    ],
    columns: &["ID", "Registered Count", "Floating Count", "Date", "Location"],
};

pub static TRANSPORT: ResourceSchema = ResourceSchema {
    segment: "transport",
    title: "Transport",
    empty_message: "No transport data found.",
    created_message: Some("Transport data added!"),
    fields: &[
        FieldSpec::new("vehicle_type", "Vehicle Type", FieldKind::Text),
        FieldSpec::new("fuel_type", "Fuel Type", FieldKind::Text),
        FieldSpec::new("distance_km", "Distance KM", FieldKind::Float),
        FieldSpec::new("fuel_liters", "Fuel Liters", FieldKind::Float),
        DATE,
        LOCATION,
    ],
    columns: &[
        "ID",
        "Vehicle Type",
        "Fuel Type",
        "Distance KM",
        "Fuel Liters",
        "Date",
        "Location",
    ],
};

pub static WATER: ResourceSchema = ResourceSchema {
    segment: "water",
    title: "Water Consumption",
    empty_message: "No water consumption data found.",
    created_message: Some("Water reading added!"),
    fields: &[
        FieldSpec::new("meter_reading", "Meter Reading", FieldKind::Float),
        DATE,
        LOCATION,
    ],
    columns: &["ID", "Meter Reading", "Date", "Location"],
};

pub static WASTE: ResourceSchema = ResourceSchema {
    segment: "waste",
    title: "Waste",
    empty_message: "No waste data found.",
    created_message: Some("Waste entry added!"),
    fields: &[
        FieldSpec::new("spot_name", "Spot Name", FieldKind::Text),
        FieldSpec::new("waste_type", "Waste Type", FieldKind::Text),
        FieldSpec::new("weight_kg", "Weight KG", FieldKind::Float),
        DATE,
        LOCATION,
    ],
    columns: &["ID", "Spot Name", "Waste Type", "Weight KG", "Date", "Location"],
};

pub static ACCOMMODATION: ResourceSchema = ResourceSchema {
    segment: "accommodation",
    title: "Accommodation",
    empty_message: "No accommodation data found.",
    created_message: Some("Accommodation data added!"),
    fields: &[
        FieldSpec::new("people_count", "People Count", FieldKind::Integer),
        FieldSpec::new("nights", "Nights", FieldKind::Integer),
        DATE,
        LOCATION,
    ],
    columns: &["ID", "People Count", "Nights", "Date", "Location"],
};

pub static GOODS: ResourceSchema = ResourceSchema {
    segment: "goods",
    title: "Goods Purchased",
    empty_message: "No goods purchased data found.",
    created_message: Some("Goods purchased added!"),
    fields: &[
        FieldSpec::new("item_name", "Item Name", FieldKind::Text),
        FieldSpec::new("quantity", "Quantity", FieldKind::Integer),
        FieldSpec::new("cost", "Cost", FieldKind::Float),
        DATE,
        LOCATION,
    ],
    columns: &["ID", "Item Name", "Quantity", "Cost", "Date", "Location"],
};

/// Read-only on the dashboard; listed for admins only.
pub static USERS: ResourceSchema = ResourceSchema {
    segment: USERS_SEGMENT,
    title: "Users",
    empty_message: "No users found.",
    created_message: None,
    fields: &[],
    columns: &["ID", "Name", "Email", "Role"],
};

pub fn schema_for(kind: ResourceKind) -> &'static ResourceSchema {
    match kind {
        ResourceKind::Electric => &ELECTRIC,
        ResourceKind::Population => &POPULATION,
        ResourceKind::Transport => &TRANSPORT,
        ResourceKind::Water => &WATER,
        ResourceKind::Waste => &WASTE,
        ResourceKind::Accommodation => &ACCOMMODATION,
        ResourceKind::Goods => &GOODS,
    }
}
