use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl ScheduleError {
    /// Shorthand for the error returned whenever an event id does not resolve.
    pub fn event_not_found(id: impl std::fmt::Display) -> Self {
        ScheduleError::NotFound(format!("Event with ID {} not found", id))
    }
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
