use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A geographic point. Coordinates are taken as submitted; no range check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

/// One population displacement within an event: `individuals` moved from an
/// origin to a destination. The shape is closed so a mistyped field in a
/// submission is rejected instead of silently dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Movement {
    pub id: String,
    pub from: Location,
    pub to: Location,
    pub individuals: i64,
}

/// The root record: one humanitarian incident. `id` is server-assigned at
/// submission and never changes. Wire field names are camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyEvent {
    pub id: String,
    pub country: String,
    pub email: String,
    pub event_start: NaiveDate,
    pub event_end: NaiveDate,
    pub event_type: String,
    pub trigger: String,
    pub priority_need1: Option<String>,
    pub priority_need2: Option<String>,
    pub priority_need3: Option<String>,
    pub narrative_summary: Option<String>,
    pub movements: Vec<Movement>,
}
