//! # Scheduling Store
//!
//! The data operations the server needs, behind one trait so handlers do not
//! care whether rows live in PostgreSQL ([`crate::postgres::PgStore`]) or in
//! memory ([`crate::memory::InMemoryStore`]). Tests inject failures through the
//! generated `MockSchedulingStore`.
//!
//! Only create and read exist. Nothing here updates or deletes a row.

use async_trait::async_trait;
use chrono::NaiveDate;
use eyre::Result;
use mockall::automock;
use schedulesync_core::models::{
    availability::Availability, dashboard::ParticipantAvailability, event::Event,
    participant::Participant,
};
use uuid::Uuid;

#[automock]
#[async_trait]
pub trait SchedulingStore: Send + Sync {
    /// Inserts an event and returns it with its generated id.
    async fn create_event(&self, title: String, description: Option<String>) -> Result<Event>;

    async fn get_event_by_id(&self, id: Uuid) -> Result<Option<Event>>;

    /// Inserts a participant and returns it with its generated id.
    async fn create_participant(&self, event_id: Uuid, name: String) -> Result<Participant>;

    /// Inserts one availability row per date for `participant_id`.
    async fn create_availability(
        &self,
        participant_id: Uuid,
        dates: Vec<NaiveDate>,
    ) -> Result<Vec<Availability>>;

    /// Participants of an event, oldest first, each with its dates ascending.
    async fn get_participants_with_availability(
        &self,
        event_id: Uuid,
    ) -> Result<Vec<ParticipantAvailability>>;
}
