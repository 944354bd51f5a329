// Composition root for the emergency_events bounded context.
//
// Responsibilities:
// - Instantiate the in-memory store and wire it into the use case handlers.
// - Expose the HTTP router, including the CORS allow-list.

pub mod http;
pub mod state;
