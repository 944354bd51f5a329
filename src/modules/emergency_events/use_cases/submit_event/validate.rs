use thiserror::Error;
use validator::ValidateEmail;

use crate::modules::emergency_events::use_cases::submit_event::command::SubmitEvent;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("value is not a valid email address")]
    InvalidEmail,
}

impl ValidationError {
    /// Name of the offending payload field, for the error body's `loc` path.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidEmail => "email",
        }
    }
}

/// Semantic checks deserialization cannot express. Runs before the entity is
/// constructed; on failure nothing reaches the store.
///
/// Deliberately unchecked, matching the reference behavior: eventEnd may
/// precede eventStart, individuals counts may be negative, and movement ids
/// need not be unique within an event.
pub fn validate(command: &SubmitEvent) -> Result<(), ValidationError> {
    if !command.email.validate_email() {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}
