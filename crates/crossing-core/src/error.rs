//! Error types for record validation.

use thiserror::Error;

/// Errors raised at the validation boundary of the request layer.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Collection name is not one of the known collections.
    #[error("Invalid collection name '{0}'. Must be one of: vehicle, crossing, cargo_manifest")]
    UnknownCollection(String),

    /// Enumerated field carried a value outside its closed set.
    #[error("Invalid {field} '{value}'")]
    InvalidValue { field: &'static str, value: String },

    /// Payload did not match the expected entity shape.
    #[error("Invalid {collection} document: {source}")]
    InvalidEntity {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
