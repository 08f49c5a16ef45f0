use async_trait::async_trait;
use chrono::NaiveDate;
use eyre::Result;
use schedulesync_core::models::{
    availability::Availability,
    dashboard::{group_availability, ParticipantAvailability},
    event::Event,
    participant::Participant,
};
use uuid::Uuid;

use crate::{repositories, store::SchedulingStore, DbPool};

/// [`SchedulingStore`] backed by the PostgreSQL repositories.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SchedulingStore for PgStore {
    async fn create_event(&self, title: String, description: Option<String>) -> Result<Event> {
        let row =
            repositories::event::create_event(&self.pool, &title, description.as_deref()).await?;
        Ok(row.into())
    }

    async fn get_event_by_id(&self, id: Uuid) -> Result<Option<Event>> {
        let row = repositories::event::get_event_by_id(&self.pool, id).await?;
        Ok(row.map(Event::from))
    }

    async fn create_participant(&self, event_id: Uuid, name: String) -> Result<Participant> {
        let row = repositories::participant::create_participant(&self.pool, event_id, &name).await?;
        Ok(row.into())
    }

    async fn create_availability(
        &self,
        participant_id: Uuid,
        dates: Vec<NaiveDate>,
    ) -> Result<Vec<Availability>> {
        let rows =
            repositories::availability::create_availability(&self.pool, participant_id, &dates)
                .await?;
        Ok(rows.into_iter().map(Availability::from).collect())
    }

    async fn get_participants_with_availability(
        &self,
        event_id: Uuid,
    ) -> Result<Vec<ParticipantAvailability>> {
        let rows =
            repositories::participant::get_participant_dates_by_event_id(&self.pool, event_id)
                .await?;
        Ok(group_availability(
            rows.into_iter()
                .map(|row| (row.participant_id, row.name, row.date)),
        ))
    }
}
