//! Fixed reference tables the generator draws from.
//!
//! The public accessors hand out owned copies for form population; the
//! canonical tables themselves are immutable statics.

use crossing_core::VehicleType;

/// Interior checkpoints a crossing can be recorded at.
pub const CHECKPOINTS: &[&str] = &[
    "East El Paso",
    "Sierra Blanca",
    "Marfa",
    "Alpine",
    "Marathon",
    "Eagle Pass",
    "Del Rio",
    "Brackettville",
    "East Eagle Pass",
    "Laredo-83",
    "Laredo-35",
    "Freer",
    "Oilton",
    "Hebbronville",
    "Hebbronville_2",
    "Falfurrias",
    "Sarita",
    "Brownsville",
];

/// Two-letter codes of the 50 US states.
pub const STATE_CODES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA", "KS",
    "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ", "NM", "NY",
    "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA", "WV",
    "WI", "WY",
];

pub const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "John", "Patricia", "Robert", "Jennifer", "Michael", "Linda", "William",
    "Barbara", "David", "Elizabeth", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Christopher", "Nancy", "Daniel", "Lisa", "Matthew", "Betty", "Anthony",
    "Margaret", "Mark", "Sandra", "Donald", "Ashley", "Steven", "Kimberly", "Paul", "Emily",
    "Andrew", "Donna", "Joshua", "Michelle",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores",
];

/// Cargo categories a manifest may declare.
pub const CARGO_TYPES: &[&str] = &[
    "General Merchandise",
    "Machinery and Equipment",
    "Electronics",
    "Automotive Parts",
    "Textiles and Apparel",
    "Food and Beverages",
    "Agricultural Products",
    "Chemicals (non-hazardous)",
    crossing_core::HAZMAT_CARGO_TYPE,
    "Pharmaceuticals",
    "Medical Supplies",
    "Livestock and Animals",
    "Furniture",
    "Metal and Steel Products",
    "Wood and Lumber",
    "Plastics and Rubber Goods",
    "Household Goods/Personal Effects",
    "Paper Products",
    "Building Materials",
    "Containers",
    "Petroleum Products",
    "Minerals and Ores",
    "Toys and Games",
];

/// Standard Carrier Alpha Codes used as manifest ID prefixes. All are 4 letters.
pub const SCAC_CODES: &[&str] = &[
    "ABCD", "EFGH", "IJKL", "MNOP", "QRST", "UVWX", "YZAB", "CDEF", "GHIJ", "KLMN", "OPQR", "STUV",
    "WXYZ", "MAEU", "CMDU", "COSU",
];

const _: () = assert!(!CHECKPOINTS.is_empty());
const _: () = assert!(STATE_CODES.len() == 50);
const _: () = assert!(!FIRST_NAMES.is_empty() && !LAST_NAMES.is_empty());
const _: () = assert!(!CARGO_TYPES.is_empty());
const _: () = assert!(!SCAC_CODES.is_empty());

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn checkpoints() -> Vec<String> {
    owned(CHECKPOINTS)
}

pub fn cargo_types() -> Vec<String> {
    owned(CARGO_TYPES)
}

pub fn vehicle_types() -> Vec<String> {
    VehicleType::ALL.iter().map(|t| t.as_str().to_string()).collect()
}

pub fn state_codes() -> Vec<String> {
    owned(STATE_CODES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(CHECKPOINTS.len(), 18);
        assert_eq!(STATE_CODES.len(), 50);
        assert_eq!(vehicle_types().len(), 5);
        assert!(SCAC_CODES.iter().all(|code| code.len() == 4
            && code.chars().all(|c| c.is_ascii_uppercase())));
    }

    #[test]
    fn test_accessors_return_independent_copies() {
        let mut copy = checkpoints();
        copy.clear();
        copy.push("Nowhere".to_string());

        assert_eq!(checkpoints().len(), CHECKPOINTS.len());
        assert_eq!(checkpoints()[0], "East El Paso");
    }

    #[test]
    fn test_vehicle_types_use_wire_literals() {
        assert!(vehicle_types().contains(&"tractor trailer".to_string()));
    }

    #[test]
    fn test_hazmat_type_is_listed() {
        assert!(cargo_types().contains(&crossing_core::HAZMAT_CARGO_TYPE.to_string()));
    }
}
