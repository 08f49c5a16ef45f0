use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One day a participant marked as available.
///
/// `date` is a plain calendar date and serializes as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub participant_id: Uuid,
    pub date: NaiveDate,
}
