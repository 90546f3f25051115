//! Core record types for the crossing simulator.
//!
//! This crate provides the foundational types shared by the record generator,
//! the document gateway and the request layer:
//!
//! - [`VehicleDetails`], [`CrossingEvent`], [`CargoManifest`] - the three entity kinds
//! - [`CrossingRecord`] - one vehicle crossing with its optional cargo
//! - [`Collection`] - the closed set of collections records are persisted into
//! - [`Entity`] - tagged union over the entity kinds, each bound to its collection
//! - [`DocumentPatch`] - untyped partial update applied to a stored document
//!
//! # Architecture
//!
//! ```text
//! crossing-core (this crate)
//!    │
//!    ├─── crossing-generator  (produces CrossingRecord values)
//!    │
//!    ├─── document-gateway    (persists Entity values, applies DocumentPatch)
//!    │
//!    └─── crossing-sim        (request layer composing both)
//! ```
//!
//! # Example
//!
//! ```rust
//! use crossing_core::{Collection, CrossingPurpose};
//!
//! let collection: Collection = "cargo_manifest".parse().unwrap();
//! assert_eq!(collection, Collection::CargoManifest);
//! assert_eq!(CrossingPurpose::Shipping.as_str(), "shipping");
//! ```

pub mod collection;
pub mod error;
pub mod records;

// Re-exports for convenience
pub use collection::{Collection, DocumentPatch, Entity, ID_FIELD};
pub use error::CoreError;
pub use records::{
    check_lane, CargoManifest, CrossingEvent, CrossingPurpose, CrossingRecord, Direction,
    RegistrationDetails, VehicleDetails, VehicleType, HAZMAT_CARGO_TYPE, MAX_LANE, MIN_LANE,
};
