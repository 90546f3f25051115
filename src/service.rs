//! Request-layer flows composing the generator, the exporter and the gateway.

use crate::export::FileExporter;
use clap::ValueEnum;
use crossing_core::{Collection, CoreError, CrossingRecord, Entity};
use document_gateway::{DocumentGateway, GatewayError};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};

pub const DEFAULT_PAGE_LIMIT: u64 = 20;
pub const MAX_PAGE_LIMIT: u64 = 100;

/// Failures a request can end in, by kind.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error(transparent)]
    InvalidRequest(#[from] CoreError),

    #[error("limit must be between 1 and 100, got {0}")]
    InvalidLimit(u64),

    #[error("Document with ID {id} not found in collection {collection}")]
    NotFound { collection: String, id: String },

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl RequestError {
    pub fn not_found(collection: Collection, id: &str) -> Self {
        RequestError::NotFound {
            collection: collection.to_string(),
            id: id.to_string(),
        }
    }
}

/// Check a caller-supplied collection name against the known collections.
pub fn validate_collection(name: &str) -> Result<Collection, RequestError> {
    Ok(name.parse::<Collection>()?)
}

pub fn validate_limit(limit: u64) -> Result<u64, RequestError> {
    if (1..=MAX_PAGE_LIMIT).contains(&limit) {
        Ok(limit)
    } else {
        Err(RequestError::InvalidLimit(limit))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub mongodb_connected: bool,
    pub message: String,
}

pub async fn health(gateway: &DocumentGateway) -> HealthResponse {
    let connected = gateway.is_connected().await;
    HealthResponse {
        mongodb_connected: connected,
        message: if connected { "Connected" } else { "Not connected" }.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
    pub files_created: Vec<String>,
    pub mongodb_saved: bool,
}

/// Save a record to the data directory and to the store.
///
/// The two destinations are attempted independently. The submission
/// succeeds if either one took the record; the other's failure is reported
/// as a warning in the message.
pub async fn submit_record(
    gateway: &DocumentGateway,
    exporter: &FileExporter,
    record: &CrossingRecord,
) -> SubmitResponse {
    let mut files_created = Vec::new();
    let mut errors = Vec::new();

    if let Err(e) = exporter.export(record, &mut files_created) {
        let msg = format!("Filesystem save error: {e:#}");
        error!("{msg}");
        errors.push(msg);
    }

    let mongodb_saved = match persist_record(gateway, record).await {
        Ok(()) => true,
        Err(GatewayError::NotConnected) => {
            let msg = "MongoDB not connected".to_string();
            warn!("{msg}");
            errors.push(msg);
            false
        }
        Err(e) => {
            let msg = format!("MongoDB save error: {e}");
            error!("{msg}");
            errors.push(msg);
            false
        }
    };

    let success = !files_created.is_empty() || mongodb_saved;
    let message = if success {
        let mut parts = Vec::new();
        if !files_created.is_empty() {
            parts.push(format!("Saved to filesystem: {}", files_created.join(", ")));
        }
        if mongodb_saved {
            parts.push("Saved to MongoDB".to_string());
        }
        if !errors.is_empty() {
            parts.push(format!("Warnings: {}", errors.join("; ")));
        }
        parts.join(" | ")
    } else {
        format!("Failed to save: {}", errors.join("; "))
    };

    SubmitResponse {
        success,
        message,
        files_created,
        mongodb_saved,
    }
}

async fn persist_record(
    gateway: &DocumentGateway,
    record: &CrossingRecord,
) -> Result<(), GatewayError> {
    for entity in Entity::from_record(record) {
        let id = gateway.insert_entity(&entity).await?;
        info!("Inserted {} with ID: {id}", entity.collection());
    }
    Ok(())
}

/// Reference tables offered for form population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReferenceKind {
    Checkpoints,
    CargoTypes,
    VehicleTypes,
    States,
}

pub fn reference_list(kind: ReferenceKind) -> Vec<String> {
    match kind {
        ReferenceKind::Checkpoints => crossing_generator::checkpoints(),
        ReferenceKind::CargoTypes => crossing_generator::cargo_types(),
        ReferenceKind::VehicleTypes => crossing_generator::vehicle_types(),
        ReferenceKind::States => crossing_generator::state_codes(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_collection() {
        assert_eq!(
            validate_collection("cargo_manifest").unwrap(),
            Collection::CargoManifest
        );
        let err = validate_collection("users").unwrap_err();
        assert!(err.to_string().contains("vehicle, crossing, cargo_manifest"));
    }

    #[test]
    fn test_validate_limit() {
        assert_eq!(validate_limit(1).unwrap(), 1);
        assert_eq!(validate_limit(MAX_PAGE_LIMIT).unwrap(), MAX_PAGE_LIMIT);
        assert!(matches!(validate_limit(0), Err(RequestError::InvalidLimit(0))));
        assert!(validate_limit(MAX_PAGE_LIMIT + 1).is_err());
    }

    #[test]
    fn test_reference_lists() {
        assert_eq!(reference_list(ReferenceKind::Checkpoints).len(), 18);
        assert_eq!(reference_list(ReferenceKind::States).len(), 50);
        assert_eq!(reference_list(ReferenceKind::VehicleTypes).len(), 5);
        assert_eq!(reference_list(ReferenceKind::CargoTypes).len(), 23);
    }
}
