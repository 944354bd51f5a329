use chrono::NaiveDate;

use crate::modules::emergency_events::core::model::Movement;

/// Submission payload: every EmergencyEvent field except the id, which the
/// handler assigns at insertion time.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitEvent {
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
