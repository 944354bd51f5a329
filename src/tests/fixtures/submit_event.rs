// Shared test fixtures for submissions and stored events.

use chrono::NaiveDate;

use crate::modules::emergency_events::core::model::{EmergencyEvent, Location, Movement};
use crate::modules::emergency_events::use_cases::submit_event::command::SubmitEvent;

pub fn make_movement(id: &str) -> Movement {
    Movement {
        id: id.to_string(),
        from: Location {
            lat: -1.2921,
            lon: 36.8219,
        },
        to: Location {
            lat: 0.0512,
            lon: 37.6456,
        },
        individuals: 1200,
    }
}

/// A fully-populated stored event with the given id.
pub fn make_event(id: &str) -> EmergencyEvent {
    let command = SubmitEventBuilder::new().build();
    EmergencyEvent {
        id: id.to_string(),
        country: command.country,
        email: command.email,
        event_start: command.event_start,
        event_end: command.event_end,
        event_type: command.event_type,
        trigger: command.trigger,
        priority_need1: command.priority_need1,
        priority_need2: command.priority_need2,
        priority_need3: command.priority_need3,
        narrative_summary: command.narrative_summary,
        movements: command.movements,
    }
}

pub struct SubmitEventBuilder {
    inner: SubmitEvent,
}

impl Default for SubmitEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl SubmitEventBuilder {
    pub fn new() -> Self {
        Self {
            inner: SubmitEvent {
                country: "Kenya".to_string(),
                email: "field.office@example.org".to_string(),
                event_start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                event_end: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                event_type: "Flood".to_string(),
                trigger: "Heavy seasonal rainfall".to_string(),
                priority_need1: Some("Shelter".to_string()),
                priority_need2: Some("Water".to_string()),
                priority_need3: None,
                narrative_summary: Some(
                    "Riverine flooding displaced households along the Tana river.".to_string(),
                ),
                movements: vec![make_movement("mv-1")],
            },
        }
    }

    pub fn country(mut self, v: impl Into<String>) -> Self {
        self.inner.country = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn event_start(mut self, v: NaiveDate) -> Self {
        self.inner.event_start = v;
        self
    }

    pub fn event_end(mut self, v: NaiveDate) -> Self {
        self.inner.event_end = v;
        self
    }

    pub fn event_type(mut self, v: impl Into<String>) -> Self {
        self.inner.event_type = v.into();
        self
    }

    pub fn trigger(mut self, v: impl Into<String>) -> Self {
        self.inner.trigger = v.into();
        self
    }

    pub fn narrative_summary(mut self, v: Option<String>) -> Self {
        self.inner.narrative_summary = v;
        self
    }

    pub fn movements(mut self, v: Vec<Movement>) -> Self {
        self.inner.movements = v;
        self
    }

    pub fn build(self) -> SubmitEvent {
        self.inner
    }
}
