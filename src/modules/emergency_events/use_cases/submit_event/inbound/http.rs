use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse, response::Response,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::emergency_events::core::model::Movement;
use crate::modules::emergency_events::use_cases::submit_event::command::SubmitEvent;
use crate::modules::emergency_events::use_cases::submit_event::handler::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitEventBody {
    pub country: String,
    pub email: String,
    pub event_start: NaiveDate,
    pub event_end: NaiveDate,
    pub event_type: String,
    pub trigger: String,
    pub priority_need1: Option<String>,
    pub priority_need2: Option<String>,
    pub priority_need3: Option<String>,
    pub narrative_summary: Option<String>,
    pub movements: Vec<Movement>,
}

#[derive(Serialize)]
struct FieldError {
    loc: Vec<String>,
    msg: String,
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Serialize)]
struct ValidationErrorBody {
    detail: Vec<FieldError>,
}

fn unprocessable(loc: Vec<String>, msg: String) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ValidationErrorBody {
            detail: vec![FieldError {
                loc,
                msg,
                kind: "value_error".to_string(),
            }],
        }),
    )
        .into_response()
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SubmitEventBody>, JsonRejection>,
) -> impl IntoResponse {
    // Missing required fields, unparseable dates and unknown movement
    // fields all surface here as deserialization rejections.
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return unprocessable(vec!["body".into()], rejection.body_text()),
    };

    let command = SubmitEvent {
        country: body.country,
        email: body.email,
        event_start: body.event_start,
        event_end: body.event_end,
        event_type: body.event_type,
        trigger: body.trigger,
        priority_need1: body.priority_need1,
        priority_need2: body.priority_need2,
        priority_need3: body.priority_need3,
        narrative_summary: body.narrative_summary,
        movements: body.movements,
    };

    match state.submit_handler.handle(command).await {
        Ok(event) => Json(event).into_response(),
        Err(ApplicationError::Validation(e)) => {
            unprocessable(vec!["body".into(), e.field().into()], e.to_string())
        }
        Err(ApplicationError::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
