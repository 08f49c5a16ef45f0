use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use super::event::GetEventResponse;

/// A participant flattened together with the dates they selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantAvailability {
    pub id: Uuid,
    pub name: String,
    pub dates: Vec<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub event: GetEventResponse,
    pub participant_count: usize,
    pub share_url: String,
    pub participants: Vec<ParticipantAvailability>,
}

/// Groups joined `(participant id, name, date)` rows by participant.
///
/// Participants keep the order in which they first appear in `rows`. A row
/// with no date (an outer join miss) still yields the participant, with an
/// empty date list. Each participant's dates come out ascending and without
/// duplicates.
pub fn group_availability<I>(rows: I) -> Vec<ParticipantAvailability>
where
    I: IntoIterator<Item = (Uuid, String, Option<NaiveDate>)>,
{
    let mut grouped: Vec<ParticipantAvailability> = Vec::new();
    let mut positions: HashMap<Uuid, usize> = HashMap::new();

    for (id, name, date) in rows {
        let index = *positions.entry(id).or_insert_with(|| {
            grouped.push(ParticipantAvailability {
                id,
                name,
                dates: Vec::new(),
            });
            grouped.len() - 1
        });

        if let Some(date) = date {
            grouped[index].dates.push(date);
        }
    }

    for participant in &mut grouped {
        participant.dates.sort_unstable();
        participant.dates.dedup();
    }

    grouped
}
