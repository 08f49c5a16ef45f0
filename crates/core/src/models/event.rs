use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ScheduleError, ScheduleResult};

/// Longest title the `events.title` column holds, in characters.
pub const MAX_TITLE_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateEventRequest {
    /// Trims both fields, rejects a blank or overlong title and drops a blank
    /// description.
    pub fn normalized(&self) -> ScheduleResult<NewEvent> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ScheduleError::Validation(
                "Event title must not be empty".to_string(),
            ));
        }
        if title.chars().count() > MAX_TITLE_LENGTH {
            return Err(ScheduleError::Validation(format!(
                "Event title must be at most {} characters",
                MAX_TITLE_LENGTH
            )));
        }

        let description = self
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        Ok(NewEvent {
            title: title.to_string(),
            description,
        })
    }
}

/// A validated event ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub share_url: String,
    pub dashboard_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetEventResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Event> for GetEventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            title: event.title,
            description: event.description,
            created_at: event.created_at,
        }
    }
}
