//! Synthetic crossing record generator.
//!
//! This crate provides the [`RecordGenerator`] which produces structurally
//! realistic crossing records from fixed reference tables. The generator owns
//! a seedable RNG so a run can be reproduced from its seed.
//!
//! # Architecture
//!
//! ```text
//! reference tables        generators::{identifier, numeric, timestamp}
//!        │                              │
//!        └──────────────┬───────────────┘
//!                       ▼
//!             ┌───────────────────┐
//!             │  RecordGenerator  │
//!             │                   │
//!             │  - rng (StdRng)   │
//!             │  - fixed_now      │
//!             └─────────┬─────────┘
//!                       ▼
//!   CrossingRecord { vehicle, crossing, cargo (shipping only) }
//! ```
//!
//! # Example
//!
//! ```rust
//! use crossing_generator::RecordGenerator;
//!
//! let mut generator = RecordGenerator::new(42);
//! let record = generator.generate_crossing_record();
//! assert!(record.cargo_matches_purpose());
//! ```

pub mod generator;
pub mod generators;
pub mod reference;

// Re-exports for convenience
pub use generator::{
    RecordGenerator, RecordIterator, HAZMAT_PROBABILITY, SECONDARY_INSPECTION_PROBABILITY,
};
pub use reference::{cargo_types, checkpoints, state_codes, vehicle_types};
