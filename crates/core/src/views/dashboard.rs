use uuid::Uuid;

use crate::dates::DateLocale;
use crate::models::dashboard::DashboardResponse;

pub const NOT_FOUND_TITLE: &str = "Event not found";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load event data. Please try again.";
pub const EMPTY_STATE_MESSAGE: &str = "No participants yet. Share the link to invite people!";
pub const NO_DATES_PLACEHOLDER: &str = "No dates selected";

/// What the dashboard page shows once its fetch has resolved.
#[derive(Debug, Clone)]
pub enum DashboardView {
    NotFound,
    LoadFailed,
    Loaded(DashboardSummary),
}

#[derive(Debug, Clone)]
pub struct DashboardSummary {
    pub event_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub share_url: String,
    pub rows: Vec<DashboardRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardRow {
    pub participant_id: Uuid,
    pub name: String,
    /// Dates already formatted for display, ascending.
    pub dates: Vec<String>,
}

impl DashboardRow {
    pub fn has_dates(&self) -> bool {
        !self.dates.is_empty()
    }
}

impl DashboardSummary {
    pub fn from_response(response: &DashboardResponse, locale: DateLocale) -> Self {
        let rows = response
            .participants
            .iter()
            .map(|participant| DashboardRow {
                participant_id: participant.id,
                name: participant.name.clone(),
                dates: participant
                    .dates
                    .iter()
                    .map(|date| locale.format(*date))
                    .collect(),
            })
            .collect();

        Self {
            event_id: response.event.id,
            title: response.event.title.clone(),
            description: response.event.description.clone(),
            share_url: response.share_url.clone(),
            rows,
        }
    }

    pub fn participant_count(&self) -> usize {
        self.rows.len()
    }

    pub fn header(&self) -> String {
        format!("Participants ({})", self.participant_count())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
