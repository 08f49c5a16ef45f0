//! # Event Handlers
//!
//! The create/read flows behind every page, plus the JSON endpoints that
//! expose them directly.
//!
//! ## Submitting availability
//!
//! A submission is two sequential writes with no transaction around them:
//!
//! 1. insert the participant and read back its generated id
//! 2. insert one availability row per selected date
//!
//! If the second write fails the participant row stays behind without any
//! dates. That row is logged and left as is.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use schedulesync_core::{
    errors::{ScheduleError, ScheduleResult},
    models::{
        dashboard::DashboardResponse,
        event::{CreateEventRequest, CreateEventResponse, Event, GetEventResponse},
        participant::{SubmitAvailabilityRequest, SubmitAvailabilityResponse},
    },
    views::share::{dashboard_url, share_url},
};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// Parses an event id from a path. Anything that is not a UUID cannot name an
/// event, so it is reported as not found.
pub fn parse_event_id(raw: &str) -> ScheduleResult<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| ScheduleError::event_not_found(raw))
}

/// Validates and inserts a new event.
pub async fn create_event_record(
    state: &ApiState,
    request: &CreateEventRequest,
) -> ScheduleResult<Event> {
    let new_event = request.normalized()?;

    let event = state
        .store
        .create_event(new_event.title, new_event.description)
        .await
        .map_err(|e| {
            error!("Error creating event: {:?}", e);
            ScheduleError::Database(e)
        })?;

    info!("Created event {}", event.id);
    Ok(event)
}

/// Looks up an event, turning a missing row into [`ScheduleError::NotFound`].
pub async fn find_event(state: &ApiState, event_id: Uuid) -> ScheduleResult<Event> {
    state
        .store
        .get_event_by_id(event_id)
        .await
        .map_err(|e| {
            error!("Error fetching event {}: {:?}", event_id, e);
            ScheduleError::Database(e)
        })?
        .ok_or_else(|| ScheduleError::event_not_found(event_id))
}

/// Records one participant and their dates for `event_id`.
pub async fn submit_availability(
    state: &ApiState,
    event_id: Uuid,
    request: &SubmitAvailabilityRequest,
) -> ScheduleResult<SubmitAvailabilityResponse> {
    let submission = request.normalized()?;

    let participant = state
        .store
        .create_participant(event_id, submission.name.clone())
        .await
        .map_err(|e| {
            error!("Error submitting availability: {:?}", e);
            ScheduleError::Database(e)
        })?;

    state
        .store
        .create_availability(participant.id, submission.dates.clone())
        .await
        .map_err(|e| {
            error!("Error submitting availability: {:?}", e);
            warn!(
                "Participant {} for event {} was saved without availability",
                participant.id, event_id
            );
            ScheduleError::Database(e)
        })?;

    info!(
        "Recorded {} date(s) for participant {} on event {}",
        submission.dates.len(),
        participant.id,
        event_id
    );

    Ok(SubmitAvailabilityResponse {
        participant_id: participant.id,
        event_id,
        name: participant.name,
        dates: submission.dates,
    })
}

/// Loads an event with every participant and their dates.
pub async fn load_dashboard(state: &ApiState, event_id: Uuid) -> ScheduleResult<DashboardResponse> {
    let event = find_event(state, event_id).await?;

    let participants = state
        .store
        .get_participants_with_availability(event_id)
        .await
        .map_err(|e| {
            error!("Error fetching participants for event {}: {:?}", event_id, e);
            ScheduleError::Database(e)
        })?;

    Ok(DashboardResponse {
        share_url: share_url(&state.public_origin, event.id),
        participant_count: participants.len(),
        event: event.into(),
        participants,
    })
}

#[axum::debug_handler]
pub async fn create_event(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<CreateEventResponse>), AppError> {
    let event = create_event_record(&state, &payload).await?;

    let response = CreateEventResponse {
        share_url: share_url(&state.public_origin, event.id),
        dashboard_url: dashboard_url(&state.public_origin, event.id),
        id: event.id,
        title: event.title,
        description: event.description,
        created_at: event.created_at,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

#[axum::debug_handler]
pub async fn get_event(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<Json<GetEventResponse>, AppError> {
    let event_id = parse_event_id(&id)?;
    let event = find_event(&state, event_id).await?;

    Ok(Json(event.into()))
}

#[axum::debug_handler]
pub async fn submit_participation(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
    Json(payload): Json<SubmitAvailabilityRequest>,
) -> Result<(StatusCode, Json<SubmitAvailabilityResponse>), AppError> {
    let event_id = parse_event_id(&id)?;
    // Validation runs before any store access.
    payload.normalized()?;
    find_event(&state, event_id).await?;

    let response = submit_availability(&state, event_id, &payload).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

#[axum::debug_handler]
pub async fn get_dashboard(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<Json<DashboardResponse>, AppError> {
    let event_id = parse_event_id(&id)?;
    let response = load_dashboard(&state, event_id).await?;

    Ok(Json(response))
}
