//! Document store gateway for the crossing simulator.
//!
//! The gateway is a thin adapter over a document store, parameterized by
//! collection name. It owns the mapping between store-native identifiers
//! (`ObjectId`) and the external string form callers hold, derives display
//! labels for listings, and tracks the connection lifecycle.
//!
//! # Architecture
//!
//! ```text
//! request layer
//!      │  collection name + external id (String)
//!      ▼
//! ┌──────────────────────┐      ┌──────────────────┐
//! │   DocumentGateway    │─────▶│  StoreConnector  │ (MongoConnector, MemoryConnector)
//! │                      │      └────────┬─────────┘
//! │  - ConnectionState   │               │ connect()
//! │  - id mapping        │               ▼
//! │  - display labels    │      ┌──────────────────┐
//! └──────────┬───────────┘      │  DocumentStore   │ (MongoStore, MemoryStore)
//!            └─────────────────▶└──────────────────┘
//! ```
//!
//! Every data operation probes the store first and fails with
//! [`GatewayError::NotConnected`] when the probe fails. Missing documents are
//! ordinary results (`Ok(None)` / `Ok(false)`), never errors.

pub mod document;
pub mod error;
pub mod gateway;
pub mod memory;
pub mod mongo;
pub mod store;

pub use document::{display_label, DocumentPage, ListedDocument, StoredDocument, UNKNOWN_FIELD};
pub use error::GatewayError;
pub use gateway::{ConnectionStatus, DocumentGateway, ResetSummary};
pub use memory::{MemoryConnector, MemoryStore};
pub use mongo::{MongoConnector, MongoOpts, MongoStore};
pub use store::{DocumentStore, StoreConnector};
