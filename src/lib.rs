//! Crossing simulator library.
//!
//! Generates synthetic vehicle border-crossing records and keeps them in a
//! document store and in flat JSON files. This crate is the request layer
//! that composes the two cooperating components:
//!
//! - `crossing_generator` - produces records from reference tables
//! - `document_gateway` - persists, lists, updates and deletes stored documents
//!
//! # CLI Usage
//!
//! ```bash
//! # Generate a record (shipping crossings include a cargo manifest)
//! crossing-sim generate --purpose shipping
//!
//! # Generate and submit to both the data directory and MongoDB
//! crossing-sim --mongodb-uri mongodb://localhost:27017 submit
//!
//! # Browse a collection, newest first
//! crossing-sim list vehicle --skip 0 --limit 20
//! ```

pub mod config;
pub mod export;
pub mod service;

pub use config::{DatabaseOpts, Settings};
pub use export::FileExporter;
pub use service::{
    health, reference_list, submit_record, validate_collection, validate_limit, HealthResponse,
    ReferenceKind, RequestError, SubmitResponse, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT,
};
