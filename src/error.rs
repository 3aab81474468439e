//! Activity service error types

use axum::http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActivityError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student is already signed up")]
    AlreadySignedUp,

    #[error("Activity is already full")]
    ActivityFull,

    #[error("Participant not found")]
    ParticipantNotFound,

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ActivityError {
    /// HTTP status this error maps to when surfaced as a `{detail}` body.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ActivityError::ActivityNotFound | ActivityError::ParticipantNotFound => {
                StatusCode::NOT_FOUND
            }
            ActivityError::AlreadySignedUp | ActivityError::ActivityFull => StatusCode::BAD_REQUEST,
            ActivityError::ServerStartup(_) | ActivityError::IoError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

pub type ActivityResult<T> = Result<T, ActivityError>;
