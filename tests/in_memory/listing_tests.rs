//! Ordering and scoped-listing tests over the record service.

use super::helpers::{TestService, event_date, service};
use bitacora::record::{
    domain::RecordStatus,
    services::CreateRecordRequest,
};
use rstest::rstest;

async fn seed(service: &TestService) {
    let seeds = [
        ("Laptop", "Alice", "Frank", 9, RecordStatus::Completed),
        ("Printer", "Bob", "Grace", 14, RecordStatus::Pending),
        ("Laptop", "Charlie", "Frank", 12, RecordStatus::InProgress),
        ("Server", "Diana", "Ivan", 11, RecordStatus::Pending),
    ];
    for (equipment, user, technician, day, status) in seeds {
        service
            .create(
                CreateRecordRequest::new(equipment, user, technician, event_date(day))
                    .with_status(status),
            )
            .await
            .expect("seed record should persist");
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_orders_by_creation_newest_first(service: TestService) {
    seed(&service).await;

    let listed = service.list().await.expect("listing should succeed");

    let equipment: Vec<&str> = listed.iter().map(|record| record.equipment()).collect();
    assert_eq!(equipment, vec!["Server", "Laptop", "Printer", "Laptop"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn equipment_listing_filters_and_orders_by_event_date(service: TestService) {
    seed(&service).await;

    let laptops = service
        .list_by_equipment("Laptop")
        .await
        .expect("listing should succeed");

    assert_eq!(laptops.len(), 2);
    assert_eq!(laptops[0].date(), event_date(12));
    assert_eq!(laptops[1].date(), event_date(9));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn technician_listing_scopes_by_exact_name(service: TestService) {
    seed(&service).await;

    let by_frank = service
        .list_by_technician("Frank")
        .await
        .expect("listing should succeed");
    assert_eq!(by_frank.len(), 2);
    assert!(by_frank.iter().all(|record| record.technician() == "Frank"));

    let by_heidi = service
        .list_by_technician("Heidi")
        .await
        .expect("listing should succeed");
    assert!(by_heidi.is_empty());
}

#[rstest]
#[case(RecordStatus::Pending, 2)]
#[case(RecordStatus::InProgress, 1)]
#[case(RecordStatus::Completed, 1)]
#[tokio::test(flavor = "multi_thread")]
async fn status_listing_counts_each_lifecycle_bucket(
    service: TestService,
    #[case] status: RecordStatus,
    #[case] expected: usize,
) {
    seed(&service).await;

    let listed = service
        .list_by_status(status)
        .await
        .expect("listing should succeed");

    assert_eq!(listed.len(), expected);
    assert!(listed.iter().all(|record| record.status() == status));
}
