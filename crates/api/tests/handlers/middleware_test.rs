use axum::http::StatusCode;
use rstest::rstest;
use schedulesync_api::middleware::error_handling::{map_error, status_for, AppError};
use schedulesync_core::errors::ScheduleError;

#[rstest]
#[case(ScheduleError::NotFound("Event not found".to_string()), StatusCode::NOT_FOUND)]
#[case(ScheduleError::Validation("Invalid input".to_string()), StatusCode::BAD_REQUEST)]
#[case(ScheduleError::Database(eyre::eyre!("Database error")), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(
    ScheduleError::Internal(Box::new(std::io::Error::new(std::io::ErrorKind::Other, "Internal error"))),
    StatusCode::INTERNAL_SERVER_ERROR
)]
fn test_error_status_mapping(#[case] error: ScheduleError, #[case] expected: StatusCode) {
    assert_eq!(status_for(&error), expected);
    assert_eq!(map_error(error).status(), expected);
}

#[tokio::test]
async fn test_error_body_is_json() {
    let response = map_error(ScheduleError::Validation("Name must not be empty".to_string()));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["error"], "Validation error: Name must not be empty");
}

#[test]
fn test_eyre_report_becomes_database_error() {
    let error: AppError = eyre::eyre!("connection refused").into();

    assert!(matches!(error.0, ScheduleError::Database(_)));
}
