//! In-process [`SchedulingStore`] for local runs (`DATABASE_URL=memory`) and
//! tests. Foreign keys are checked the same way the PostgreSQL schema checks
//! them; nothing survives a restart.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use eyre::{eyre, Result};
use schedulesync_core::models::{
    availability::Availability,
    dashboard::{group_availability, ParticipantAvailability},
    event::Event,
    participant::Participant,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::store::SchedulingStore;

#[derive(Debug, Default)]
struct Tables {
    events: Vec<Event>,
    participants: Vec<Participant>,
    availability: Vec<Availability>,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn participant_count(&self, event_id: Uuid) -> usize {
        let tables = self.tables.read().await;
        tables
            .participants
            .iter()
            .filter(|p| p.event_id == event_id)
            .count()
    }

    pub async fn availability_count(&self, participant_id: Uuid) -> usize {
        let tables = self.tables.read().await;
        tables
            .availability
            .iter()
            .filter(|a| a.participant_id == participant_id)
            .count()
    }
}

#[async_trait]
impl SchedulingStore for InMemoryStore {
    async fn create_event(&self, title: String, description: Option<String>) -> Result<Event> {
        let event = Event {
            id: Uuid::new_v4(),
            title,
            description,
            created_at: Utc::now(),
        };

        self.tables.write().await.events.push(event.clone());
        tracing::debug!("Created event {} in memory", event.id);
        Ok(event)
    }

    async fn get_event_by_id(&self, id: Uuid) -> Result<Option<Event>> {
        let tables = self.tables.read().await;
        Ok(tables.events.iter().find(|e| e.id == id).cloned())
    }

    async fn create_participant(&self, event_id: Uuid, name: String) -> Result<Participant> {
        let mut tables = self.tables.write().await;
        if !tables.events.iter().any(|e| e.id == event_id) {
            return Err(eyre!(
                "participants.event_id references missing event {}",
                event_id
            ));
        }

        let participant = Participant {
            id: Uuid::new_v4(),
            event_id,
            name,
            created_at: Utc::now(),
        };
        tables.participants.push(participant.clone());
        Ok(participant)
    }

    async fn create_availability(
        &self,
        participant_id: Uuid,
        dates: Vec<NaiveDate>,
    ) -> Result<Vec<Availability>> {
        let mut tables = self.tables.write().await;
        if !tables.participants.iter().any(|p| p.id == participant_id) {
            return Err(eyre!(
                "availability.participant_id references missing participant {}",
                participant_id
            ));
        }

        let rows: Vec<Availability> = dates
            .into_iter()
            .map(|date| Availability {
                participant_id,
                date,
            })
            .collect();
        tables.availability.extend(rows.iter().cloned());
        Ok(rows)
    }

    async fn get_participants_with_availability(
        &self,
        event_id: Uuid,
    ) -> Result<Vec<ParticipantAvailability>> {
        let tables = self.tables.read().await;
        let mut rows = Vec::new();

        for participant in tables.participants.iter().filter(|p| p.event_id == event_id) {
            let mut dates = tables
                .availability
                .iter()
                .filter(|a| a.participant_id == participant.id)
                .map(|a| a.date)
                .peekable();

            if dates.peek().is_none() {
                rows.push((participant.id, participant.name.clone(), None));
            }
            for date in dates {
                rows.push((participant.id, participant.name.clone(), Some(date)));
            }
        }

        Ok(group_availability(rows))
    }
}
