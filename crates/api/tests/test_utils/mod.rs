#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use chrono::{NaiveDate, Utc};
use schedulesync_api::{build_router, ApiState};
use schedulesync_core::models::event::Event;
use schedulesync_db::{
    memory::InMemoryStore,
    store::{MockSchedulingStore, SchedulingStore},
};
use uuid::Uuid;

pub const ORIGIN: &str = "http://sync.test";

pub struct TestContext {
    pub store: Arc<InMemoryStore>,
    pub server: TestServer,
}

impl TestContext {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryStore::new());
        let server = test_server(store.clone());
        Self { store, server }
    }

    pub async fn create_event(&self, title: &str) -> Event {
        self.store
            .create_event(title.to_string(), None)
            .await
            .expect("Failed to create event")
    }
}

/// Server over any store, typically a `MockSchedulingStore` with failures wired in.
pub fn test_server(store: Arc<dyn SchedulingStore>) -> TestServer {
    let state = Arc::new(ApiState::new(store, ORIGIN));
    TestServer::new(build_router(state)).expect("Failed to build test server")
}

pub fn mock_server(mock: MockSchedulingStore) -> TestServer {
    test_server(Arc::new(mock))
}

pub fn sample_event(id: Uuid) -> Event {
    Event {
        id,
        title: "Team offsite".to_string(),
        description: None,
        created_at: Utc::now(),
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
