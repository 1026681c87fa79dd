//! Shared test helpers for in-memory integration tests.

use bitacora::advisor::{adapters::stub::StubGenerativeBackend, services::TaskAdvisor};
use bitacora::config::Vocabulary;
use bitacora::facade::MaintenanceActions;
use bitacora::record::{
    adapters::memory::InMemoryRecordRepository,
    services::{CreateRecordRequest, RecordQueryService},
};
use chrono::{DateTime, TimeZone, Utc};
use mockable::DefaultClock;
use rstest::fixture;
use serde_json::Value;
use std::sync::Arc;

/// Facade wired over the in-memory repository and the stub backend.
pub type TestActions =
    MaintenanceActions<InMemoryRecordRepository, DefaultClock, StubGenerativeBackend>;

/// Record service wired over the in-memory repository.
pub type TestService = RecordQueryService<InMemoryRecordRepository, DefaultClock>;

/// Provides a fresh in-memory repository for each test.
#[fixture]
pub fn repository() -> InMemoryRecordRepository {
    InMemoryRecordRepository::new()
}

/// Provides a record service over a fresh in-memory repository.
#[fixture]
pub fn service() -> TestService {
    RecordQueryService::new(
        Arc::new(InMemoryRecordRepository::new()),
        Arc::new(DefaultClock),
    )
}

/// Provides a facade whose generative backend always fails.
#[fixture]
pub fn actions() -> TestActions {
    actions_with_backend(StubGenerativeBackend::failing())
}

/// Builds a facade around the given stub backend.
pub fn actions_with_backend(backend: StubGenerativeBackend) -> TestActions {
    MaintenanceActions::new(
        RecordQueryService::new(
            Arc::new(InMemoryRecordRepository::new()),
            Arc::new(DefaultClock),
        ),
        TaskAdvisor::new(Arc::new(backend)),
        Vocabulary::default(),
    )
}

/// Builds a facade whose backend serves the given replies in order.
pub fn actions_with_replies(replies: impl IntoIterator<Item = Value>) -> TestActions {
    actions_with_backend(StubGenerativeBackend::with_replies(replies))
}

/// Returns a fixed event date within January 2024.
pub fn event_date(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0)
        .single()
        .expect("valid event date")
}

/// Creation request for the canonical laptop scenario record.
pub fn laptop_request() -> CreateRecordRequest {
    CreateRecordRequest::new("Laptop", "Alice", "Frank", event_date(10))
}
