use axum::http::StatusCode;
use mockall::predicate;
use pretty_assertions::assert_eq;
use schedulesync_core::models::{
    dashboard::DashboardResponse,
    event::{CreateEventResponse, GetEventResponse},
    participant::{Participant, SubmitAvailabilityResponse},
};
use schedulesync_db::store::MockSchedulingStore;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::test_utils::{date, mock_server, sample_event, TestContext, ORIGIN};

#[tokio::test]
async fn test_create_event_returns_links() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/events")
        .json(&json!({ "title": "Team offsite", "description": "Pick a day" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: CreateEventResponse = response.json();
    assert_eq!(body.title, "Team offsite");
    assert_eq!(body.description.as_deref(), Some("Pick a day"));
    assert_eq!(body.share_url, format!("{}/event/{}", ORIGIN, body.id));
    assert_eq!(body.dashboard_url, format!("{}/dashboard/{}", ORIGIN, body.id));
}

#[tokio::test]
async fn test_create_event_rejects_blank_title() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/events")
        .json(&json!({ "title": "   " }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("title"));
}

#[tokio::test]
async fn test_get_event() {
    let ctx = TestContext::new();
    let event = ctx.create_event("Picnic").await;

    let response = ctx.server.get(&format!("/api/events/{}", event.id)).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: GetEventResponse = response.json();
    assert_eq!(body.id, event.id);
    assert_eq!(body.title, "Picnic");
}

#[tokio::test]
async fn test_get_event_not_found() {
    let ctx = TestContext::new();

    let missing = ctx.server.get(&format!("/api/events/{}", Uuid::new_v4())).await;
    let malformed = ctx.server.get("/api/events/not-a-uuid").await;

    assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(malformed.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_submission_shows_up_on_dashboard() {
    let ctx = TestContext::new();
    let event = ctx.create_event("Picnic").await;

    let response = ctx
        .server
        .post(&format!("/api/events/{}/participants", event.id))
        .json(&json!({ "name": "Alice", "dates": ["2024-06-03", "2024-06-01"] }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let submitted: SubmitAvailabilityResponse = response.json();
    assert_eq!(submitted.dates, vec![date(2024, 6, 1), date(2024, 6, 3)]);

    let dashboard: DashboardResponse = ctx
        .server
        .get(&format!("/api/events/{}/dashboard", event.id))
        .await
        .json();

    assert_eq!(dashboard.participant_count, 1);
    assert_eq!(dashboard.participants[0].id, submitted.participant_id);
    assert_eq!(dashboard.participants[0].name, "Alice");
    assert_eq!(
        dashboard.participants[0].dates,
        vec![date(2024, 6, 1), date(2024, 6, 3)]
    );
    assert_eq!(dashboard.share_url, format!("{}/event/{}", ORIGIN, event.id));
}

#[tokio::test]
async fn test_dashboard_for_event_without_participants() {
    let ctx = TestContext::new();
    let event = ctx.create_event("Picnic").await;

    let dashboard: DashboardResponse = ctx
        .server
        .get(&format!("/api/events/{}/dashboard", event.id))
        .await
        .json();

    assert_eq!(dashboard.participant_count, 0);
    assert!(dashboard.participants.is_empty());
}

#[tokio::test]
async fn test_submission_without_dates_is_rejected() {
    let ctx = TestContext::new();
    let event = ctx.create_event("Picnic").await;

    let response = ctx
        .server
        .post(&format!("/api/events/{}/participants", event.id))
        .json(&json!({ "name": "Alice", "dates": [] }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(ctx.store.participant_count(event.id).await, 0);
}

#[tokio::test]
async fn test_same_name_twice_creates_two_participants() {
    let ctx = TestContext::new();
    let event = ctx.create_event("Picnic").await;
    let path = format!("/api/events/{}/participants", event.id);

    let first: SubmitAvailabilityResponse = ctx
        .server
        .post(&path)
        .json(&json!({ "name": "Alice", "dates": ["2024-06-01"] }))
        .await
        .json();
    let second: SubmitAvailabilityResponse = ctx
        .server
        .post(&path)
        .json(&json!({ "name": "Alice", "dates": ["2024-06-02"] }))
        .await
        .json();

    assert_ne!(first.participant_id, second.participant_id);
    assert_eq!(ctx.store.participant_count(event.id).await, 2);
}

#[tokio::test]
async fn test_submission_for_unknown_event() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post(&format!("/api/events/{}/participants", Uuid::new_v4()))
        .json(&json!({ "name": "Alice", "dates": ["2024-06-01"] }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_availability_failure_keeps_participant() {
    let event_id = Uuid::new_v4();
    let participant_id = Uuid::new_v4();
    let mut mock = MockSchedulingStore::new();

    mock.expect_get_event_by_id()
        .with(predicate::eq(event_id))
        .returning(move |id| Ok(Some(sample_event(id))));
    mock.expect_create_participant()
        .with(predicate::eq(event_id), predicate::eq("Alice".to_string()))
        .times(1)
        .returning(move |event_id, name| {
            Ok(Participant {
                id: participant_id,
                event_id,
                name,
                created_at: chrono::Utc::now(),
            })
        });
    mock.expect_create_availability()
        .with(
            predicate::eq(participant_id),
            predicate::eq(vec![date(2024, 6, 1)]),
        )
        .times(1)
        .returning(|_, _| Err(eyre::eyre!("insert into availability failed")));

    let server = mock_server(mock);
    let response = server
        .post(&format!("/api/events/{}/participants", event_id))
        .json(&json!({ "name": "Alice", "dates": ["2024-06-01"] }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().starts_with("Database error"));
}

#[tokio::test]
async fn test_participant_failure_skips_availability() {
    let event_id = Uuid::new_v4();
    let mut mock = MockSchedulingStore::new();

    mock.expect_get_event_by_id()
        .returning(move |id| Ok(Some(sample_event(id))));
    mock.expect_create_participant()
        .times(1)
        .returning(|_, _| Err(eyre::eyre!("connection refused")));
    mock.expect_create_availability().times(0);

    let server = mock_server(mock);
    let response = server
        .post(&format!("/api/events/{}/participants", event_id))
        .json(&json!({ "name": "Alice", "dates": ["2024-06-01"] }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_dashboard_read_failure() {
    let mut mock = MockSchedulingStore::new();
    mock.expect_get_event_by_id()
        .returning(move |id| Ok(Some(sample_event(id))));
    mock.expect_get_participants_with_availability()
        .returning(|_| Err(eyre::eyre!("relation \"participants\" does not exist")));

    let server = mock_server(mock);
    let response = server
        .get(&format!("/api/events/{}/dashboard", Uuid::new_v4()))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}
