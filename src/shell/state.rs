use std::sync::Arc;

use crate::modules::emergency_events::use_cases::get_event::handler::GetEventHandler;
use crate::modules::emergency_events::use_cases::list_events::handler::ListEventsHandler;
use crate::modules::emergency_events::use_cases::submit_event::handler::SubmitEventHandler;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<InMemoryEventStore>,
    pub submit_handler: Arc<SubmitEventHandler<InMemoryEventStore>>,
    pub list_handler: Arc<ListEventsHandler<InMemoryEventStore>>,
    pub get_handler: Arc<GetEventHandler<InMemoryEventStore>>,
}

impl AppState {
    /// Wires every use case handler to one shared store. The store's
    /// lifetime is the state's lifetime; nothing survives a restart.
    pub fn new(store: Arc<InMemoryEventStore>) -> Self {
        Self {
            submit_handler: Arc::new(SubmitEventHandler::new(store.clone())),
            list_handler: Arc::new(ListEventsHandler::new(store.clone())),
            get_handler: Arc::new(GetEventHandler::new(store.clone())),
            store,
        }
    }
}
