use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::emergency_events::use_cases::get_event::handler::GetEventError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> impl IntoResponse {
    match state.get_handler.handle(&event_id).await {
        Ok(event) => Json(event).into_response(),
        Err(GetEventError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "detail": "Event not found" })),
        )
            .into_response(),
        Err(GetEventError::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
