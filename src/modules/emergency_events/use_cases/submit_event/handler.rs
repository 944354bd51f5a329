use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;

use crate::modules::emergency_events::core::model::EmergencyEvent;
use crate::modules::emergency_events::use_cases::submit_event::command::SubmitEvent;
use crate::modules::emergency_events::use_cases::submit_event::validate::{
    ValidationError, validate,
};
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] EventStoreError),
}

pub struct SubmitEventHandler<TStore>
where
    TStore: EventStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> SubmitEventHandler<TStore>
where
    TStore: EventStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Validates the payload, assigns a fresh random id and inserts the
    /// event. Random v4 ids make a collision negligible; the existing key
    /// set is not consulted.
    pub async fn handle(&self, command: SubmitEvent) -> Result<EmergencyEvent, ApplicationError> {
        validate(&command)?;

        let event = EmergencyEvent {
            id: Uuid::new_v4().to_string(),
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
        };

        self.store.insert(event.clone()).await?;
        Ok(event)
    }
}
