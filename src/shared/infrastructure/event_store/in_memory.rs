// In memory implementation of the EventStore port.
//
// Purpose
// - Back the running service and tests without a database; contents are
//   discarded when the store is dropped.
//
// Responsibilities
// - Hold events in a map keyed by id, serialized through an async RwLock so
//   concurrent submits never lose an insert.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{EventStore, EventStoreError};
use crate::modules::emergency_events::core::model::EmergencyEvent;

pub struct InMemoryEventStore {
    inner: RwLock<HashMap<String, EmergencyEvent>>,
    offline: bool,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
            offline: false,
        }
    }

    /// Makes every operation fail, so tests can exercise the generic
    /// server-error path.
    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    fn check_online(&self) -> Result<(), EventStoreError> {
        if self.offline {
            return Err(EventStoreError::Backend("Event store offline".into()));
        }
        Ok(())
    }
}

impl Default for InMemoryEventStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn insert(&self, event: EmergencyEvent) -> Result<(), EventStoreError> {
        self.check_online()?;
        let mut guard = self.inner.write().await;
        guard.insert(event.id.clone(), event);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<EmergencyEvent>, EventStoreError> {
        self.check_online()?;
        let guard = self.inner.read().await;
        Ok(guard.get(id).cloned())
    }

    async fn snapshot(&self) -> Result<Vec<EmergencyEvent>, EventStoreError> {
        self.check_online()?;
        let guard = self.inner.read().await;
        Ok(guard.values().cloned().collect())
    }
}
