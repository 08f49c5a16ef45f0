use uuid::Uuid;

/// How long the dashboard's share button reads "Copied!" after a copy.
pub const COPY_FEEDBACK_MILLIS: i64 = 2_000;

pub const SHARE_LABEL: &str = "Share Link";
pub const COPIED_LABEL: &str = "Copied!";

/// Link handed to participants: `<origin>/event/<id>`.
pub fn share_url(origin: &str, event_id: Uuid) -> String {
    format!("{}/event/{}", origin.trim_end_matches('/'), event_id)
}

/// Results page for the organizer: `<origin>/dashboard/<id>`.
pub fn dashboard_url(origin: &str, event_id: Uuid) -> String {
    format!("{}/dashboard/{}", origin.trim_end_matches('/'), event_id)
}
