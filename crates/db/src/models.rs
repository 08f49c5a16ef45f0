use chrono::{DateTime, NaiveDate, Utc};
use schedulesync_core::models::{
    availability::Availability, event::Event, participant::Participant,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbEvent {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbParticipant {
    pub id: Uuid,
    pub event_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAvailability {
    pub participant_id: Uuid,
    pub date: NaiveDate,
}

/// One row of the participants LEFT JOIN availability query.
#[derive(Debug, Clone, FromRow)]
pub struct DbParticipantDate {
    pub participant_id: Uuid,
    pub name: String,
    pub date: Option<NaiveDate>,
}

impl From<DbEvent> for Event {
    fn from(row: DbEvent) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            created_at: row.created_at,
        }
    }
}

impl From<DbParticipant> for Participant {
    fn from(row: DbParticipant) -> Self {
        Self {
            id: row.id,
            event_id: row.event_id,
            name: row.name,
            created_at: row.created_at,
        }
    }
}

impl From<DbAvailability> for Availability {
    fn from(row: DbAvailability) -> Self {
        Self {
            participant_id: row.participant_id,
            date: row.date,
        }
    }
}
