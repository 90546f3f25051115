//! Documents as callers see them.
//!
//! Store-native identifiers never leave this crate: every document handed
//! out carries its identifier as an external string, and every external
//! string coming in is parsed here.

use crate::error::GatewayError;
use bson::oid::ObjectId;
use bson::{Bson, Document};
use crossing_core::ID_FIELD;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Placeholder for fields a display label needs but the document lacks.
pub const UNKNOWN_FIELD: &str = "Unknown";

/// A stored document with its external identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredDocument {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl StoredDocument {
    /// Convert a document read from the store.
    pub(crate) fn from_store(mut document: Document) -> Self {
        let id = document
            .remove(ID_FIELD)
            .map(|id| external_id(&id))
            .unwrap_or_else(|| UNKNOWN_FIELD.to_string());
        let fields = match Bson::Document(document).into_relaxed_extjson() {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self { id, fields }
    }

    /// The document as one JSON object, identifier included.
    pub fn into_value(self) -> Value {
        let mut map = Map::with_capacity(self.fields.len() + 1);
        map.insert(ID_FIELD.to_string(), Value::String(self.id));
        map.extend(self.fields);
        Value::Object(map)
    }
}

/// A listed document annotated with its display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListedDocument {
    #[serde(flatten)]
    pub document: StoredDocument,
    pub display_label: String,
}

impl ListedDocument {
    pub(crate) fn new(collection: &str, document: StoredDocument) -> Self {
        let display_label = display_label(collection, &document.fields, &document.id);
        Self {
            document,
            display_label,
        }
    }
}

/// One page of a collection listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentPage {
    pub collection: String,
    pub total_count: u64,
    pub skip: u64,
    pub limit: u64,
    pub count: usize,
    pub documents: Vec<ListedDocument>,
}

/// Human-readable summary of a document, computed at read time.
///
/// - vehicle: `"{license_plate_number} - {owner_name}"`
/// - crossing: `"{timestamp} - {interior_checkpoints}"`
/// - cargo_manifest: `"{manifest_id} - {cargo_type}"`
/// - any other collection: the external identifier
pub fn display_label(collection: &str, fields: &Map<String, Value>, id: &str) -> String {
    let pair = |first: &str, second: &str| {
        format!(
            "{} - {}",
            field_text(fields, first),
            field_text(fields, second)
        )
    };

    match collection {
        "vehicle" => pair("license_plate_number", "owner_name"),
        "crossing" => pair("timestamp", "interior_checkpoints"),
        "cargo_manifest" => pair("manifest_id", "cargo_type"),
        _ => id.to_string(),
    }
}

fn field_text(fields: &Map<String, Value>, key: &str) -> String {
    match fields.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => UNKNOWN_FIELD.to_string(),
        Some(other) => other.to_string(),
    }
}

/// External string form of a store identifier.
pub(crate) fn external_id(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Parse an external identifier into the store-native form.
pub(crate) fn parse_external_id(id: &str) -> Result<ObjectId, GatewayError> {
    ObjectId::parse_str(id).map_err(|e| GatewayError::InvalidIdentifier {
        id: id.to_string(),
        reason: e.to_string(),
    })
}

/// Encode caller-supplied fields for the store.
pub(crate) fn to_store_document(fields: &Map<String, Value>) -> Result<Document, GatewayError> {
    Ok(bson::to_document(fields)?)
}
