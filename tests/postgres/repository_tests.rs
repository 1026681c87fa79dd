//! Record repository contract tests against real `PostgreSQL` storage.

use super::harness::ScratchDatabase;
use bitacora::record::{
    domain::{RecordChanges, RecordDraft, RecordId, RecordStatus},
    ports::RecordRepository,
};
use chrono::{DateTime, Duration, DurationRound, TimeZone, Utc};
use rstest::rstest;

/// Current time truncated to the microsecond precision `TIMESTAMPTZ`
/// preserves, so stored timestamps compare equal to the originals.
fn now() -> DateTime<Utc> {
    Utc::now()
        .duration_trunc(Duration::microseconds(1))
        .expect("truncate to microseconds")
}

fn event_date(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0)
        .single()
        .expect("valid event date")
}

fn draft(equipment: &str, day: u32) -> RecordDraft {
    RecordDraft::new(equipment, "Alice", "Frank", event_date(day)).expect("valid draft")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn insert_round_trips_every_column() {
    let Some(database) = ScratchDatabase::provision() else {
        return;
    };
    let repository = database.repository();
    let timestamp = now();

    let record = repository
        .insert(
            &draft("Laptop", 10)
                .with_tasks(vec![
                    "Replace battery".to_owned(),
                    "Update BIOS".to_owned(),
                ])
                .with_status(RecordStatus::InProgress)
                .with_notes("Battery drains overnight"),
            timestamp,
        )
        .await
        .expect("insert should succeed");

    let fetched = repository
        .find_by_id(record.id())
        .await
        .expect("lookup should succeed")
        .expect("record should exist");

    assert_eq!(fetched, record);
    assert_eq!(fetched.equipment(), "Laptop");
    assert_eq!(fetched.user(), "Alice");
    assert_eq!(fetched.technician(), "Frank");
    assert_eq!(
        fetched.tasks(),
        ["Replace battery".to_owned(), "Update BIOS".to_owned()]
    );
    assert_eq!(fetched.status(), RecordStatus::InProgress);
    assert_eq!(fetched.notes(), Some("Battery drains overnight"));
    assert_eq!(fetched.created_at(), fetched.updated_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn the_sequence_assigns_increasing_identifiers() {
    let Some(database) = ScratchDatabase::provision() else {
        return;
    };
    let repository = database.repository();

    let first = repository
        .insert(&draft("Laptop", 10), now())
        .await
        .expect("insert should succeed");
    repository
        .delete(first.id())
        .await
        .expect("delete should succeed");
    let second = repository
        .insert(&draft("Desktop", 11), now())
        .await
        .expect("insert should succeed");

    assert!(second.id() > first.id());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn partial_update_rewrites_only_supplied_columns() {
    let Some(database) = ScratchDatabase::provision() else {
        return;
    };
    let repository = database.repository();
    let created_at = now();

    let record = repository
        .insert(&draft("Server", 12).with_notes("Runs hot"), created_at)
        .await
        .expect("insert should succeed");

    let later = created_at + Duration::seconds(3);
    let updated = repository
        .update(
            record.id(),
            &RecordChanges::new().with_status(RecordStatus::Completed),
            later,
        )
        .await
        .expect("update should succeed")
        .expect("record should exist");

    assert_eq!(updated.status(), RecordStatus::Completed);
    assert_eq!(updated.notes(), Some("Runs hot"));
    assert_eq!(updated.created_at(), record.created_at());
    assert_eq!(updated.updated_at(), later);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_identifiers_are_values_not_errors() {
    let Some(database) = ScratchDatabase::provision() else {
        return;
    };
    let repository = database.repository();

    let found = repository
        .find_by_id(RecordId::new(404))
        .await
        .expect("lookup should succeed");
    assert!(found.is_none());

    let updated = repository
        .update(RecordId::new(404), &RecordChanges::new(), now())
        .await
        .expect("update should succeed");
    assert!(updated.is_none());

    let removed = repository
        .delete(RecordId::new(404))
        .await
        .expect("delete should succeed");
    assert!(!removed);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listings_apply_the_documented_orderings() {
    let Some(database) = ScratchDatabase::provision() else {
        return;
    };
    let repository = database.repository();

    let base = now();
    for (offset, (equipment, day)) in
        [("Laptop", 9), ("Printer", 14), ("Laptop", 12)].into_iter().enumerate()
    {
        let created_at = base + Duration::seconds(i64::try_from(offset).expect("small offset"));
        repository
            .insert(&draft(equipment, day), created_at)
            .await
            .expect("insert should succeed");
    }

    let all = repository.list_all().await.expect("listing should succeed");
    let creation_order: Vec<&str> = all.iter().map(|record| record.equipment()).collect();
    assert_eq!(creation_order, vec!["Laptop", "Printer", "Laptop"]);

    let laptops = repository
        .list_by_equipment("Laptop")
        .await
        .expect("listing should succeed");
    let dates: Vec<DateTime<Utc>> = laptops.iter().map(|record| record.date()).collect();
    assert_eq!(dates, vec![event_date(12), event_date(9)]);

    let pending = repository
        .list_by_status(RecordStatus::Pending)
        .await
        .expect("listing should succeed");
    assert_eq!(pending.len(), 3);

    let by_frank = repository
        .list_by_technician("Frank")
        .await
        .expect("listing should succeed");
    assert_eq!(by_frank.len(), 3);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_task_lists_round_trip_through_jsonb() {
    let Some(database) = ScratchDatabase::provision() else {
        return;
    };
    let repository = database.repository();

    let record = repository
        .insert(&draft("Printer", 11), now())
        .await
        .expect("insert should succeed");

    let fetched = repository
        .find_by_id(record.id())
        .await
        .expect("lookup should succeed")
        .expect("record should exist");

    assert!(fetched.tasks().is_empty());
}
