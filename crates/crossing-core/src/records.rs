//! Crossing record entities.
//!
//! Field names match the persisted JSON documents exactly, so these types
//! serialize straight into the document store and the exported files.

use crate::error::CoreError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cargo type literal that always carries the hazardous-material flag.
pub const HAZMAT_CARGO_TYPE: &str = "Hazardous Materials (Hazmat)";

pub const MIN_LANE: u8 = 1;
pub const MAX_LANE: u8 = 10;

/// Declares a closed string enumeration with its wire literals.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($(#[$vmeta:meta])* $variant:ident => $literal:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $literal)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in reference-list order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The wire literal for this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $literal,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($literal => Ok($name::$variant),)+
                    other => Err(CoreError::InvalidValue {
                        field: $field,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

string_enum! {
    /// Kind of vehicle crossing the checkpoint.
    VehicleType, "vehicle type" {
        Sedan => "sedan",
        Truck => "truck",
        Motorcycle => "motorcycle",
        TractorTrailer => "tractor trailer",
        Van => "van",
    }
}

string_enum! {
    /// Direction of travel through the checkpoint.
    Direction, "direction" {
        Inbound => "Inbound",
        Outbound => "Outbound",
    }
}

string_enum! {
    /// Declared reason for the crossing.
    CrossingPurpose, "crossing purpose" {
        Personal => "personal",
        Business => "business",
        /// Only shipping crossings carry a cargo manifest.
        Shipping => "shipping",
    }
}

impl VehicleType {
    /// Inclusive passenger-count bounds for this vehicle type.
    pub fn passenger_bounds(&self) -> (u32, u32) {
        match self {
            VehicleType::Motorcycle => (0, 2),
            VehicleType::TractorTrailer => (1, 2),
            _ => (0, 8),
        }
    }
}

/// Vehicle registration details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationDetails {
    /// Two-letter state abbreviation
    pub state: String,
    /// Expiration date, `YYYY-MM-DD`
    pub expiration_date: String,
}

/// Vehicle information for a crossing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleDetails {
    /// Plate in `SS-LLL-DDD` form
    pub license_plate_number: String,
    pub vehicle_type: VehicleType,
    pub owner_name: String,
    pub registration_details: RegistrationDetails,
    pub passenger_count: u32,
}

/// A single checkpoint crossing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossingEvent {
    /// ISO 8601 UTC timestamp with a `Z` suffix
    pub timestamp: String,
    /// Checkpoint name from the fixed reference list
    pub interior_checkpoints: String,
    pub direction: Direction,
    /// Lane number, 1 through 10
    #[serde(deserialize_with = "deserialize_lane")]
    pub lane_assignment: u8,
    pub crossing_purpose: CrossingPurpose,
    pub secondary_inspection_flag: bool,
}

/// Check a lane number against the checkpoint's lane range.
pub fn check_lane(lane: u8) -> Result<u8, CoreError> {
    if (MIN_LANE..=MAX_LANE).contains(&lane) {
        Ok(lane)
    } else {
        Err(CoreError::InvalidValue {
            field: "lane assignment",
            value: lane.to_string(),
        })
    }
}

fn deserialize_lane<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    check_lane(u8::deserialize(deserializer)?).map_err(serde::de::Error::custom)
}

/// Cargo manifest carried by shipping crossings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CargoManifest {
    /// SCAC code + two-digit year + 6 to 10 digit sequence
    pub manifest_id: String,
    pub cargo_type: String,
    pub hazardous_material: bool,
    /// 10 alphanumeric characters
    pub container_id: String,
}

impl CargoManifest {
    /// Whether the cargo type literal itself declares hazardous material.
    pub fn is_hazmat_cargo_type(&self) -> bool {
        self.cargo_type == HAZMAT_CARGO_TYPE
    }
}

/// A complete crossing: vehicle, event and optional cargo.
///
/// Generated records carry cargo if and only if the crossing purpose is
/// shipping. Submitted records are not held to that rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossingRecord {
    pub vehicle: VehicleDetails,
    pub crossing: CrossingEvent,
    #[serde(default)]
    pub cargo: Option<CargoManifest>,
}

impl CrossingRecord {
    /// Whether cargo presence agrees with the crossing purpose.
    pub fn cargo_matches_purpose(&self) -> bool {
        (self.crossing.crossing_purpose == CrossingPurpose::Shipping) == self.cargo.is_some()
    }
}
