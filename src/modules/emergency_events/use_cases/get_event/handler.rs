use std::sync::Arc;

use thiserror::Error;

use crate::modules::emergency_events::core::model::EmergencyEvent;
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};

#[derive(Debug, Error)]
pub enum GetEventError {
    #[error("Event not found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] EventStoreError),
}

pub struct GetEventHandler<TStore>
where
    TStore: EventStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> GetEventHandler<TStore>
where
    TStore: EventStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, event_id: &str) -> Result<EmergencyEvent, GetEventError> {
        self.store
            .get(event_id)
            .await?
            .ok_or(GetEventError::NotFound)
    }
}
