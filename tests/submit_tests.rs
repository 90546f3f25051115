//! Submission and health flows over the in-memory store.

use crossing_core::CrossingPurpose;
use crossing_generator::RecordGenerator;
use crossing_sim::{health, submit_record, FileExporter};
use document_gateway::{DocumentGateway, MemoryConnector};

async fn connected_gateway() -> (DocumentGateway, MemoryConnector) {
    let connector = MemoryConnector::new();
    let gateway = DocumentGateway::new(connector.clone());
    assert!(gateway.connect().await);
    (gateway, connector)
}

#[tokio::test]
async fn test_submit_saves_to_both_destinations() {
    let (gateway, _connector) = connected_gateway().await;
    let dir = tempfile::tempdir().unwrap();
    let exporter = FileExporter::new(dir.path());
    let record =
        RecordGenerator::new(11).generate_crossing_record_with_purpose(CrossingPurpose::Business);

    let response = submit_record(&gateway, &exporter, &record).await;

    assert!(response.success);
    assert!(response.mongodb_saved);
    assert_eq!(response.files_created.len(), 2);
    assert!(response.message.starts_with("Saved to filesystem: vehicle_"));
    assert!(response.message.ends_with(" | Saved to MongoDB"));
    assert!(!response.message.contains("Warnings"));

    for name in &response.files_created {
        assert!(dir.path().join(name).exists(), "missing {name}");
    }
    assert_eq!(gateway.count_documents("vehicle").await.unwrap(), 1);
    assert_eq!(gateway.count_documents("crossing").await.unwrap(), 1);
    assert_eq!(gateway.count_documents("cargo_manifest").await.unwrap(), 0);
}

#[tokio::test]
async fn test_submit_shipping_record_stores_cargo() {
    let (gateway, _connector) = connected_gateway().await;
    let dir = tempfile::tempdir().unwrap();
    let exporter = FileExporter::new(dir.path());
    let record =
        RecordGenerator::new(5).generate_crossing_record_with_purpose(CrossingPurpose::Shipping);
    let manifest_id = record.cargo.as_ref().unwrap().manifest_id.clone();

    let response = submit_record(&gateway, &exporter, &record).await;

    assert!(response.success);
    assert_eq!(response.files_created.len(), 3);
    assert!(response.files_created[2].starts_with("cargo_manifest_"));

    let page = gateway.list_page("cargo_manifest", 0, 20).await.unwrap();
    assert_eq!(page.total_count, 1);
    assert_eq!(page.documents[0].document.fields["manifest_id"], manifest_id);
    assert!(page.documents[0].display_label.starts_with(&manifest_id));
}

#[tokio::test]
async fn test_submit_without_store_keeps_files() {
    let gateway = DocumentGateway::new(MemoryConnector::new());
    let dir = tempfile::tempdir().unwrap();
    let exporter = FileExporter::new(dir.path());
    let record = RecordGenerator::new(3).generate_crossing_record();

    let response = submit_record(&gateway, &exporter, &record).await;

    assert!(response.success);
    assert!(!response.mongodb_saved);
    assert!(!response.files_created.is_empty());
    assert!(response
        .message
        .ends_with(" | Warnings: MongoDB not connected"));
}

#[tokio::test]
async fn test_submit_fails_when_both_destinations_fail() {
    let (gateway, connector) = connected_gateway().await;
    connector.store().set_available(false);

    let dir = tempfile::tempdir().unwrap();
    let blocked = dir.path().join("data");
    std::fs::write(&blocked, "not a directory").unwrap();
    let exporter = FileExporter::new(&blocked);
    let record = RecordGenerator::new(9).generate_crossing_record();

    let response = submit_record(&gateway, &exporter, &record).await;

    assert!(!response.success);
    assert!(!response.mongodb_saved);
    assert!(response.files_created.is_empty());
    assert!(response.message.starts_with("Failed to save: Filesystem save error: "));
    assert!(response.message.ends_with("; MongoDB not connected"));
}

#[tokio::test]
async fn test_health_reports_connection() {
    let (gateway, connector) = connected_gateway().await;

    let status = health(&gateway).await;
    assert!(status.mongodb_connected);
    assert_eq!(status.message, "Connected");

    connector.store().set_available(false);
    let status = health(&gateway).await;
    assert!(!status.mongodb_connected);
    assert_eq!(status.message, "Not connected");
}
