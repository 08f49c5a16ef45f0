use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::errors::{ScheduleError, ScheduleResult};

/// Longest name the `participants.name` column holds, in characters.
pub const MAX_NAME_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: Uuid,
    pub event_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAvailabilityRequest {
    pub name: String,
    #[serde(default)]
    pub dates: Vec<NaiveDate>,
}

impl SubmitAvailabilityRequest {
    /// Validates the submission and collapses the dates into an ascending,
    /// duplicate-free list.
    pub fn normalized(&self) -> ScheduleResult<NewParticipant> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ScheduleError::Validation("Name must not be empty".to_string()));
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(ScheduleError::Validation(format!(
                "Name must be at most {} characters",
                MAX_NAME_LENGTH
            )));
        }

        let dates: BTreeSet<NaiveDate> = self.dates.iter().copied().collect();
        if dates.is_empty() {
            return Err(ScheduleError::Validation(
                "Select at least one available date".to_string(),
            ));
        }

        Ok(NewParticipant {
            name: name.to_string(),
            dates: dates.into_iter().collect(),
        })
    }
}

/// A validated submission: a non-blank name and at least one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewParticipant {
    pub name: String,
    pub dates: Vec<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAvailabilityResponse {
    pub participant_id: Uuid,
    pub event_id: Uuid,
    pub name: String,
    pub dates: Vec<NaiveDate>,
}
