use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::modules::emergency_events::use_cases::get_event::inbound::http as get_event_http;
use crate::modules::emergency_events::use_cases::list_events::inbound::http as list_events_http;
use crate::modules::emergency_events::use_cases::submit_event::inbound::http as submit_event_http;
use crate::shell::state::AppState;

/// Origins allowed to call the API with credentials. Credentialed CORS
/// forbids wildcards, so the list is explicit and methods/headers are
/// mirrored from the request instead.
const ALLOWED_ORIGINS: [&str; 2] = ["https://eet-add.dtm.report", "http://localhost:5173"];

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/submit-event", post(submit_event_http::handle))
        .route("/events", get(list_events_http::handle))
        .route("/events/{event_id}", get(get_event_http::handle))
        .layer(cors_layer())
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    let origins: [HeaderValue; 2] =
        ALLOWED_ORIGINS.map(|origin| origin.parse().expect("static origin must parse"));
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
