use async_trait::async_trait;
use thiserror::Error;

use crate::modules::emergency_events::core::model::EmergencyEvent;

pub mod in_memory;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventStoreError {
    #[error("event store backend error: {0}")]
    Backend(String),
}

/// Storage port for the event collection, keyed by event id. Inserts are
/// final: there is no update or delete, and a stored event lives until the
/// store itself is dropped.
#[async_trait]
pub trait EventStore: Send + Sync {
    async fn insert(&self, event: EmergencyEvent) -> Result<(), EventStoreError>;

    async fn get(&self, id: &str) -> Result<Option<EmergencyEvent>, EventStoreError>;

    /// Current contents of the collection. Ordering follows the underlying
    /// map and is not meaningful to callers.
    async fn snapshot(&self) -> Result<Vec<EmergencyEvent>, EventStoreError>;
}
