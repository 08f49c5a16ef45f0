//! State of the participation form for one participant.
//!
//! The form moves `Editing -> Submitting -> Submitted`. A failed submission
//! drops back to `Editing` so the participant can retry; `Submitted` is
//! terminal and there is no way to edit availability afterwards.

use chrono::NaiveDate;
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::errors::{ScheduleError, ScheduleResult};
use crate::models::participant::SubmitAvailabilityRequest;

pub const SUBMIT_LABEL: &str = "Submit Availability";
pub const SUBMITTING_LABEL: &str = "Submitting...";
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit availability. Please try again.";
pub const CONFIRMATION_TITLE: &str = "Thank you for participating!";
pub const CONFIRMATION_MESSAGE: &str = "Your availability has been recorded.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting,
    Submitted,
}

#[derive(Debug, Clone)]
pub struct ParticipationForm {
    event_id: Uuid,
    name: String,
    selected: BTreeSet<NaiveDate>,
    phase: FormPhase,
    error: Option<String>,
}

impl ParticipationForm {
    pub fn new(event_id: Uuid) -> Self {
        Self {
            event_id,
            name: String::new(),
            selected: BTreeSet::new(),
            phase: FormPhase::Editing,
            error: None,
        }
    }

    /// Rebuilds a form from values already entered (e.g. carried across a
    /// month change or posted back on submit).
    pub fn with_fields<I>(event_id: Uuid, name: impl Into<String>, dates: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        Self {
            name: name.into(),
            selected: dates.into_iter().collect(),
            ..Self::new(event_id)
        }
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_selected(&self, date: NaiveDate) -> bool {
        self.selected.contains(&date)
    }

    /// Selected dates in ascending order.
    pub fn selected_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.selected.iter().copied()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the submit button should be enabled.
    pub fn can_submit(&self) -> bool {
        self.phase == FormPhase::Editing
            && !self.name.trim().is_empty()
            && !self.selected.is_empty()
    }

    pub fn submit_label(&self) -> &'static str {
        match self.phase {
            FormPhase::Submitting => SUBMITTING_LABEL,
            _ => SUBMIT_LABEL,
        }
    }

    /// Moves into `Submitting` and hands back the request to send.
    pub fn begin_submit(&mut self) -> ScheduleResult<SubmitAvailabilityRequest> {
        match self.phase {
            FormPhase::Submitting => {
                return Err(ScheduleError::Validation(
                    "A submission is already in progress".to_string(),
                ));
            }
            FormPhase::Submitted => {
                return Err(ScheduleError::Validation(
                    "Availability has already been submitted".to_string(),
                ));
            }
            FormPhase::Editing => {}
        }

        let request = SubmitAvailabilityRequest {
            name: self.name.clone(),
            dates: self.selected_dates().collect(),
        };
        // Surface the same message the server would return.
        request.normalized()?;

        self.phase = FormPhase::Submitting;
        self.error = None;
        Ok(request)
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = FormPhase::Editing;
        self.error = Some(message.into());
    }

    pub fn complete(&mut self) {
        self.phase = FormPhase::Submitted;
        self.error = None;
    }
}
