//! # Page Handlers
//!
//! The HTML side of the app. Each handler resolves its data, builds the view
//! state from `schedulesync_core::views` and renders it. Failures never
//! escape as JSON here: a missing event renders "Event not found", a failed
//! read renders the load failure view, and a failed write re-renders the form
//! with an alert so the user can retry.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use chrono::{NaiveDate, Utc};
use schedulesync_core::{
    dates::{parse_iso_date, parse_month},
    errors::{ScheduleError, ScheduleResult},
    models::event::{CreateEventRequest, Event},
    views::{
        dashboard::{DashboardSummary, DashboardView},
        participation::{ParticipationForm, SUBMIT_FAILED_MESSAGE},
    },
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    handlers::events::{
        create_event_record, find_event, load_dashboard, parse_event_id, submit_availability,
    },
    html::{
        dashboard::dashboard_page,
        event::{event_creator_page, CREATE_FAILED_MESSAGE},
        load_failed_page, not_found_page,
        participation::{confirmation_page, participation_page},
    },
    middleware::error_handling::status_for,
    ApiState,
};

#[derive(Debug, Default, Deserialize)]
pub struct EventCreatorForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Name, shown month and selected days as posted by the participation form.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParticipationFields {
    pub name: String,
    pub month: Option<NaiveDate>,
    pub dates: Vec<NaiveDate>,
}

impl ParticipationFields {
    /// Reads the form's key/value pairs. Repeated `dates` keys are collected;
    /// unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> ScheduleResult<Self> {
        let mut fields = Self::default();

        for (key, value) in pairs {
            match key.as_str() {
                "name" => fields.name = value,
                "month" if !value.trim().is_empty() => fields.month = Some(parse_month(&value)?),
                "dates" => fields.dates.push(parse_iso_date(&value)?),
                _ => {}
            }
        }

        Ok(fields)
    }

    /// The month to show: the one asked for, else the earliest selected day's,
    /// else `today`'s.
    pub fn display_month(&self, today: NaiveDate) -> NaiveDate {
        self.month
            .or_else(|| self.dates.iter().min().copied())
            .unwrap_or(today)
    }
}

/// Message shown to the user for a failed action. Validation messages are
/// specific; anything else collapses to `fallback`.
fn user_message(err: &ScheduleError, fallback: &str) -> String {
    match err {
        ScheduleError::Validation(message) => message.clone(),
        _ => fallback.to_string(),
    }
}

fn lookup_failure(err: &ScheduleError) -> Response {
    match err {
        ScheduleError::NotFound(_) => (StatusCode::NOT_FOUND, Html(not_found_page())).into_response(),
        _ => (status_for(err), Html(load_failed_page())).into_response(),
    }
}

async fn resolve_event(state: &ApiState, raw_id: &str) -> ScheduleResult<Event> {
    let event_id = parse_event_id(raw_id)?;
    find_event(state, event_id).await
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub async fn event_creator() -> Html<String> {
    Html(event_creator_page("", "", None))
}

pub async fn create_event(
    State(state): State<Arc<ApiState>>,
    Form(form): Form<EventCreatorForm>,
) -> Response {
    let request = CreateEventRequest {
        title: form.title.clone(),
        description: Some(form.description.clone()),
    };

    match create_event_record(&state, &request).await {
        Ok(event) => Redirect::to(&format!("/dashboard/{}", event.id)).into_response(),
        Err(err) => {
            let message = user_message(&err, CREATE_FAILED_MESSAGE);
            (
                status_for(&err),
                Html(event_creator_page(&form.title, &form.description, Some(&message))),
            )
                .into_response()
        }
    }
}

pub async fn participation_form(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let event = match resolve_event(&state, &id).await {
        Ok(event) => event,
        Err(err) => return lookup_failure(&err),
    };

    match ParticipationFields::from_pairs(pairs) {
        Ok(fields) => {
            let month = fields.display_month(today());
            let form = ParticipationForm::with_fields(event.id, fields.name, fields.dates);
            Html(participation_page(&event.title, &form, month)).into_response()
        }
        Err(err) => {
            let mut form = ParticipationForm::new(event.id);
            form.fail(user_message(&err, SUBMIT_FAILED_MESSAGE));
            (
                status_for(&err),
                Html(participation_page(&event.title, &form, today())),
            )
                .into_response()
        }
    }
}

pub async fn submit_participation(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let event = match resolve_event(&state, &id).await {
        Ok(event) => event,
        Err(err) => return lookup_failure(&err),
    };

    let fields = match ParticipationFields::from_pairs(pairs) {
        Ok(fields) => fields,
        Err(err) => {
            let mut form = ParticipationForm::new(event.id);
            form.fail(user_message(&err, SUBMIT_FAILED_MESSAGE));
            return (
                status_for(&err),
                Html(participation_page(&event.title, &form, today())),
            )
                .into_response();
        }
    };

    let month = fields.display_month(today());
    let mut form = ParticipationForm::with_fields(event.id, fields.name, fields.dates);

    let request = match form.begin_submit() {
        Ok(request) => request,
        Err(err) => {
            form.fail(user_message(&err, SUBMIT_FAILED_MESSAGE));
            return (
                status_for(&err),
                Html(participation_page(&event.title, &form, month)),
            )
                .into_response();
        }
    };

    match submit_availability(&state, event.id, &request).await {
        Ok(_) => {
            form.complete();
            Html(confirmation_page()).into_response()
        }
        Err(err) => {
            form.fail(user_message(&err, SUBMIT_FAILED_MESSAGE));
            (
                status_for(&err),
                Html(participation_page(&event.title, &form, month)),
            )
                .into_response()
        }
    }
}

pub async fn dashboard(State(state): State<Arc<ApiState>>, Path(id): Path<String>) -> Response {
    let loaded = match parse_event_id(&id) {
        Ok(event_id) => load_dashboard(&state, event_id).await,
        Err(err) => Err(err),
    };

    let view = match loaded {
        Ok(response) => {
            DashboardView::Loaded(DashboardSummary::from_response(&response, state.date_locale))
        }
        Err(ScheduleError::NotFound(_)) => DashboardView::NotFound,
        Err(_) => DashboardView::LoadFailed,
    };

    match view {
        DashboardView::Loaded(summary) => Html(dashboard_page(&summary)).into_response(),
        DashboardView::NotFound => (StatusCode::NOT_FOUND, Html(not_found_page())).into_response(),
        DashboardView::LoadFailed => {
            (StatusCode::INTERNAL_SERVER_ERROR, Html(load_failed_page())).into_response()
        }
    }
}
