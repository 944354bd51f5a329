use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::emergency_events::use_cases::list_events::handler::EventFilter;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListEventsParams {
    pub country: Option<String>,
    #[serde(rename = "eventStart")]
    pub event_start: Option<NaiveDate>,
    #[serde(rename = "eventEnd")]
    pub event_end: Option<NaiveDate>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListEventsParams>,
) -> impl IntoResponse {
    let filter = EventFilter {
        // `?country=` means no filter, same as omitting the parameter
        country: params.country.filter(|country| !country.is_empty()),
        event_start: params.event_start,
        event_end: params.event_end,
    };

    match state.list_handler.handle(filter).await {
        Ok(events) => Json(events).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
