//! End-to-end envelope tests for the maintenance actions facade.

use super::helpers::{TestActions, actions, event_date, laptop_request};
use bitacora::facade::ActionOutcome;
use bitacora::record::{
    domain::{RecordId, RecordStatus},
    services::{CreateRecordRequest, UpdateRecordRequest},
};
use rstest::rstest;
use serde_json::json;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn record_lifecycle_round_trips_through_the_facade(actions: TestActions) {
    // Create with defaults: pending, no tasks.
    let created = actions
        .create_record(laptop_request())
        .await
        .into_success()
        .expect("creation should succeed");
    assert_eq!(created.status(), RecordStatus::Pending);
    assert!(created.tasks().is_empty());
    assert_eq!(created.created_at(), created.updated_at());

    // Complete it.
    let updated = actions
        .update_record(
            created.id(),
            UpdateRecordRequest::new().with_status(RecordStatus::Completed),
        )
        .await
        .into_success()
        .expect("update should succeed")
        .expect("record should exist");
    assert_eq!(updated.status(), RecordStatus::Completed);
    assert!(updated.updated_at() > created.updated_at());

    let fetched = actions
        .get_record_by_id(created.id())
        .await
        .into_success()
        .expect("lookup should succeed")
        .expect("record should exist");
    assert_eq!(fetched.status(), RecordStatus::Completed);

    // Delete it; a second lookup reports absence as a successful None.
    let deleted = actions.delete_record(created.id()).await;
    assert_eq!(deleted, ActionOutcome::Success(true));

    let gone = actions.get_record_by_id(created.id()).await;
    assert_eq!(gone, ActionOutcome::Success(None));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn validation_failures_surface_the_spanish_field_message(actions: TestActions) {
    let outcome = actions
        .create_record(CreateRecordRequest::new("", "Alice", "Frank", event_date(10)))
        .await;

    assert_eq!(
        outcome.failure_message(),
        Some("Debe seleccionar un equipo.")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_envelope_serialises_records_in_camel_case(actions: TestActions) {
    actions
        .create_record(laptop_request().with_tasks(vec!["Replace battery".to_owned()]))
        .await
        .into_success()
        .expect("creation should succeed");

    let outcome = actions.get_all_records().await;
    let serialised = serde_json::to_value(&outcome).expect("envelope should serialise");

    assert_eq!(serialised["success"], json!(true));
    let records = serialised["data"].as_array().expect("data should be a list");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["equipment"], json!("Laptop"));
    assert_eq!(records[0]["status"], json!("Pendiente"));
    assert_eq!(records[0]["tasks"], json!(["Replace battery"]));
    assert!(records[0]["createdAt"].is_string());
    assert!(records[0]["updatedAt"].is_string());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_of_an_unknown_id_is_a_successful_false(actions: TestActions) {
    let outcome = actions.delete_record(RecordId::new(404)).await;
    assert_eq!(outcome, ActionOutcome::Success(false));

    let serialised = serde_json::to_value(&outcome).expect("envelope should serialise");
    assert_eq!(serialised, json!({"success": true, "data": false}));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn suggestions_folded_into_a_draft_persist_with_the_record(actions: TestActions) {
    // The advisor's values are ephemeral until the caller folds them into
    // the record's task sequence.
    let suggested = vec![
        "Clean the print heads".to_owned(),
        "Replace toner cartridge".to_owned(),
    ];

    let created = actions
        .create_record(
            CreateRecordRequest::new("Printer", "Bob", "Grace", event_date(11))
                .with_tasks(suggested.clone()),
        )
        .await
        .into_success()
        .expect("creation should succeed");

    assert_eq!(created.tasks(), suggested.as_slice());
}
