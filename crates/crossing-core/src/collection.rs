//! Collections and the payloads written into them.

use crate::error::CoreError;
use crate::records::{CargoManifest, CrossingEvent, CrossingRecord, VehicleDetails};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Field holding a stored document's identifier.
pub const ID_FIELD: &str = "_id";

/// The collections crossing records are persisted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Vehicle,
    Crossing,
    CargoManifest,
}

impl Collection {
    pub const ALL: [Collection; 3] = [
        Collection::Vehicle,
        Collection::Crossing,
        Collection::CargoManifest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Vehicle => "vehicle",
            Collection::Crossing => "crossing",
            Collection::CargoManifest => "cargo_manifest",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Collection::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::UnknownCollection(s.to_string()))
    }
}

/// One typed entity, bound to the collection it belongs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entity {
    Vehicle(VehicleDetails),
    Crossing(CrossingEvent),
    CargoManifest(CargoManifest),
}

impl Entity {
    /// Collection this entity is stored in.
    pub fn collection(&self) -> Collection {
        match self {
            Entity::Vehicle(_) => Collection::Vehicle,
            Entity::Crossing(_) => Collection::Crossing,
            Entity::CargoManifest(_) => Collection::CargoManifest,
        }
    }

    /// Serialize the entity into a JSON object.
    pub fn to_fields(&self) -> Map<String, Value> {
        let value = match self {
            Entity::Vehicle(v) => serde_json::to_value(v),
            Entity::Crossing(c) => serde_json::to_value(c),
            Entity::CargoManifest(m) => serde_json::to_value(m),
        };
        // Plain structs of strings, integers and booleans always serialize to objects.
        match value {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }

    /// Parse a JSON object as the entity kind stored in `collection`.
    ///
    /// An `_id` field, if present, is ignored.
    pub fn from_value(collection: Collection, mut value: Value) -> Result<Self, CoreError> {
        if let Value::Object(map) = &mut value {
            map.remove(ID_FIELD);
        }
        let invalid = |source| CoreError::InvalidEntity {
            collection: collection.as_str(),
            source,
        };
        Ok(match collection {
            Collection::Vehicle => Entity::Vehicle(serde_json::from_value(value).map_err(invalid)?),
            Collection::Crossing => {
                Entity::Crossing(serde_json::from_value(value).map_err(invalid)?)
            }
            Collection::CargoManifest => {
                Entity::CargoManifest(serde_json::from_value(value).map_err(invalid)?)
            }
        })
    }

    /// Split a crossing record into its entities, cargo last when present.
    pub fn from_record(record: &CrossingRecord) -> Vec<Entity> {
        let mut entities = vec![
            Entity::Vehicle(record.vehicle.clone()),
            Entity::Crossing(record.crossing.clone()),
        ];
        if let Some(cargo) = &record.cargo {
            entities.push(Entity::CargoManifest(cargo.clone()));
        }
        entities
    }
}

/// Untyped partial update for a stored document.
///
/// Each top-level field replaces the stored field of the same name; fields
/// not mentioned are left untouched. The identifier field is never applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentPatch(Map<String, Value>);

impl DocumentPatch {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Build a patch from a JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self, CoreError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(CoreError::InvalidEntity {
                collection: "patch",
                source: serde::de::Error::custom(format!(
                    "expected a JSON object, got {other}"
                )),
            }),
        }
    }

    /// Fields to apply, with any identifier field removed.
    pub fn into_update_fields(mut self) -> Map<String, Value> {
        self.0.remove(ID_FIELD);
        self.0
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for DocumentPatch {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{Direction, CrossingPurpose};
    use serde_json::json;

    #[test]
    fn test_collection_names() {
        for collection in Collection::ALL {
            assert_eq!(collection.as_str().parse::<Collection>().unwrap(), collection);
        }
        assert!(matches!(
            "users".parse::<Collection>(),
            Err(CoreError::UnknownCollection(name)) if name == "users"
        ));
    }

    #[test]
    fn test_entity_collection_and_fields() {
        let crossing = CrossingEvent {
            timestamp: "2025-10-30T13:10:00Z".to_string(),
            interior_checkpoints: "Sarita".to_string(),
            direction: Direction::Outbound,
            lane_assignment: 7,
            crossing_purpose: CrossingPurpose::Business,
            secondary_inspection_flag: false,
        };
        let entity = Entity::Crossing(crossing);

        assert_eq!(entity.collection(), Collection::Crossing);
        let fields = entity.to_fields();
        assert_eq!(fields["direction"], "Outbound");
        assert_eq!(fields["lane_assignment"], 7);
    }

    #[test]
    fn test_entity_from_value_ignores_id() {
        let value = json!({
            "_id": "65f0c0ffee0000000000abcd",
            "manifest_id": "MAEU25123456",
            "cargo_type": "Furniture",
            "hazardous_material": false,
            "container_id": "ABCDE12345"
        });
        let entity = Entity::from_value(Collection::CargoManifest, value).unwrap();
        assert_eq!(entity.collection(), Collection::CargoManifest);
    }

    #[test]
    fn test_entity_from_value_rejects_wrong_shape() {
        let value = json!({ "manifest_id": "MAEU25123456" });
        assert!(matches!(
            Entity::from_value(Collection::Vehicle, value),
            Err(CoreError::InvalidEntity { collection: "vehicle", .. })
        ));
    }

    #[test]
    fn test_patch_strips_identifier() {
        let patch = DocumentPatch::from_value(json!({
            "_id": "abc",
            "owner_name": "Jane Roe"
        }))
        .unwrap();

        let fields = patch.into_update_fields();
        assert!(!fields.contains_key(ID_FIELD));
        assert_eq!(fields["owner_name"], "Jane Roe");
    }

    #[test]
    fn test_patch_requires_object() {
        assert!(DocumentPatch::from_value(json!([1, 2, 3])).is_err());
    }
}
