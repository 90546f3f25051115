//! Record generator composing the field generators.

use crate::generators::identifier::{
    generate_container_id, generate_license_plate, generate_manifest_id,
};
use crate::generators::numeric::{generate_lane, generate_passenger_count};
use crate::generators::timestamp::{generate_expiration_date, generate_recent_timestamp};
use crate::generators::{pick, pick_variant};
use crate::reference::{CARGO_TYPES, CHECKPOINTS, FIRST_NAMES, LAST_NAMES, STATE_CODES};
use chrono::{DateTime, Datelike, Utc};
use crossing_core::{
    CargoManifest, CrossingEvent, CrossingPurpose, CrossingRecord, Direction,
    RegistrationDetails, VehicleDetails, VehicleType, HAZMAT_CARGO_TYPE,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chance that a crossing is flagged for secondary inspection.
pub const SECONDARY_INSPECTION_PROBABILITY: f64 = 0.20;

/// Chance that a non-hazmat cargo type is still flagged hazardous.
pub const HAZMAT_PROBABILITY: f64 = 0.10;

/// Generator of synthetic crossing records.
///
/// Generation is total: every call returns a well-formed entity. The only
/// side effect is RNG consumption.
pub struct RecordGenerator {
    rng: StdRng,
    /// Clock override; `None` reads the system clock on every call
    fixed_now: Option<DateTime<Utc>>,
}

impl RecordGenerator {
    /// Create a generator seeded for reproducible output.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            fixed_now: None,
        }
    }

    /// Create a generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            fixed_now: None,
        }
    }

    /// Pin the clock used for timestamps, expiration dates and manifest years.
    pub fn with_fixed_now(mut self, now: DateTime<Utc>) -> Self {
        self.fixed_now = Some(now);
        self
    }

    fn now(&self) -> DateTime<Utc> {
        self.fixed_now.unwrap_or_else(Utc::now)
    }

    pub fn generate_vehicle_details(&mut self) -> VehicleDetails {
        let now = self.now();
        let rng = &mut self.rng;

        let vehicle_type = pick_variant(rng, VehicleType::ALL);
        let license_plate_number = generate_license_plate(rng);
        let owner_name = format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES));
        let registration_details = RegistrationDetails {
            state: pick(rng, STATE_CODES).to_string(),
            expiration_date: generate_expiration_date(rng, now),
        };
        let passenger_count = generate_passenger_count(rng, vehicle_type);

        VehicleDetails {
            license_plate_number,
            vehicle_type,
            owner_name,
            registration_details,
            passenger_count,
        }
    }

    pub fn generate_crossing_event(&mut self) -> CrossingEvent {
        let purpose = pick_variant(&mut self.rng, CrossingPurpose::ALL);
        self.generate_crossing_event_with_purpose(purpose)
    }

    /// Generate a crossing event with the purpose fixed by the caller.
    pub fn generate_crossing_event_with_purpose(
        &mut self,
        crossing_purpose: CrossingPurpose,
    ) -> CrossingEvent {
        let now = self.now();
        let rng = &mut self.rng;

        CrossingEvent {
            timestamp: generate_recent_timestamp(rng, now),
            interior_checkpoints: pick(rng, CHECKPOINTS).to_string(),
            direction: pick_variant(rng, Direction::ALL),
            lane_assignment: generate_lane(rng),
            crossing_purpose,
            secondary_inspection_flag: rng.gen_bool(SECONDARY_INSPECTION_PROBABILITY),
        }
    }

    pub fn generate_cargo_manifest(&mut self) -> CargoManifest {
        let year = self.now().year();
        let rng = &mut self.rng;

        let cargo_type = pick(rng, CARGO_TYPES);
        let random_hazmat = rng.gen_bool(HAZMAT_PROBABILITY);

        CargoManifest {
            manifest_id: generate_manifest_id(rng, year),
            cargo_type: cargo_type.to_string(),
            hazardous_material: cargo_type == HAZMAT_CARGO_TYPE || random_hazmat,
            container_id: generate_container_id(rng),
        }
    }

    /// Generate a complete record. Cargo is present only for shipping crossings.
    pub fn generate_crossing_record(&mut self) -> CrossingRecord {
        let vehicle = self.generate_vehicle_details();
        let crossing = self.generate_crossing_event();
        self.complete_record(vehicle, crossing)
    }

    /// Generate a complete record with the crossing purpose fixed by the caller.
    pub fn generate_crossing_record_with_purpose(
        &mut self,
        purpose: CrossingPurpose,
    ) -> CrossingRecord {
        let vehicle = self.generate_vehicle_details();
        let crossing = self.generate_crossing_event_with_purpose(purpose);
        self.complete_record(vehicle, crossing)
    }

    fn complete_record(
        &mut self,
        vehicle: VehicleDetails,
        crossing: CrossingEvent,
    ) -> CrossingRecord {
        let cargo = match crossing.crossing_purpose {
            CrossingPurpose::Shipping => Some(self.generate_cargo_manifest()),
            CrossingPurpose::Personal | CrossingPurpose::Business => None,
        };

        CrossingRecord {
            vehicle,
            crossing,
            cargo,
        }
    }

    /// Lazily generate `count` records.
    pub fn records(&mut self, count: u64) -> RecordIterator<'_> {
        RecordIterator {
            generator: self,
            remaining: count,
        }
    }
}

/// Iterator that lazily generates crossing records.
pub struct RecordIterator<'a> {
    generator: &'a mut RecordGenerator,
    remaining: u64,
}

impl Iterator for RecordIterator<'_> {
    type Item = CrossingRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.generate_crossing_record())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RecordIterator<'_> {}
