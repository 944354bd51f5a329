use std::sync::Arc;

use chrono::NaiveDate;

use crate::modules::emergency_events::core::model::EmergencyEvent;
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};

/// Optional list filters, applied conjunctively. An unset filter is a no-op.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventFilter {
    /// Exact country match, case-insensitive.
    pub country: Option<String>,
    /// Inclusive lower bound on the event's start date.
    pub event_start: Option<NaiveDate>,
    /// Inclusive upper bound on the event's end date.
    pub event_end: Option<NaiveDate>,
}

impl EventFilter {
    pub fn matches(&self, event: &EmergencyEvent) -> bool {
        let country_ok = self
            .country
            .as_ref()
            .is_none_or(|country| event.country.to_lowercase() == country.to_lowercase());
        let start_ok = self.event_start.is_none_or(|date| event.event_start >= date);
        let end_ok = self.event_end.is_none_or(|date| event.event_end <= date);
        country_ok && start_ok && end_ok
    }
}

pub struct ListEventsHandler<TStore>
where
    TStore: EventStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ListEventsHandler<TStore>
where
    TStore: EventStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Linear scan over the current snapshot. No pagination; ordering is
    /// whatever the store's map yields.
    pub async fn handle(
        &self,
        filter: EventFilter,
    ) -> Result<Vec<EmergencyEvent>, EventStoreError> {
        let mut events = self.store.snapshot().await?;
        events.retain(|event| filter.matches(event));
        Ok(events)
    }
}
