//! Identifier-shaped string generators.
//!
//! - license plate: `SS-LLL-DDD`
//! - manifest ID: `SCAC` + `YY` + 6 to 10 digits
//! - container ID: 10 characters over `A-Z0-9`

use super::pick;
use crate::reference::{SCAC_CODES, STATE_CODES};
use rand::Rng;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Shortest manifest sequence, in digits.
pub const MIN_SEQUENCE_DIGITS: usize = 6;
/// Longest manifest sequence, in digits.
pub const MAX_SEQUENCE_DIGITS: usize = 10;
pub const CONTAINER_ID_LENGTH: usize = 10;

/// Draw `len` characters uniformly from `alphabet`.
fn random_chars<R: Rng>(rng: &mut R, alphabet: &[u8], len: usize) -> String {
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect()
}

/// Random digit string of exactly `len` digits. Leading zeros are allowed.
pub fn generate_digits<R: Rng>(rng: &mut R, len: usize) -> String {
    random_chars(rng, DIGITS, len)
}

pub fn generate_license_plate<R: Rng>(rng: &mut R) -> String {
    let state = pick(rng, STATE_CODES);
    let letters = random_chars(rng, UPPERCASE, 3);
    let numbers = random_chars(rng, DIGITS, 3);
    format!("{state}-{letters}-{numbers}")
}

/// Manifest ID for the given two-digit year (`year % 100`).
pub fn generate_manifest_id<R: Rng>(rng: &mut R, year: i32) -> String {
    let scac = pick(rng, SCAC_CODES);
    let sequence_len = rng.gen_range(MIN_SEQUENCE_DIGITS..=MAX_SEQUENCE_DIGITS);
    let sequence = generate_digits(rng, sequence_len);
    format!("{scac}{:02}{sequence}", year.rem_euclid(100))
}

pub fn generate_container_id<R: Rng>(rng: &mut R) -> String {
    random_chars(rng, ALPHANUMERIC, CONTAINER_ID_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_license_plate_format() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let plate = generate_license_plate(&mut rng);
            let parts: Vec<&str> = plate.split('-').collect();

            assert_eq!(parts.len(), 3, "plate {plate}");
            assert!(STATE_CODES.contains(&parts[0]));
            assert!(parts[1].len() == 3 && parts[1].chars().all(|c| c.is_ascii_uppercase()));
            assert!(parts[2].len() == 3 && parts[2].chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_manifest_id_format() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut lengths = std::collections::HashSet::new();

        for _ in 0..500 {
            let id = generate_manifest_id(&mut rng, 2025);
            assert!((12..=16).contains(&id.len()), "manifest id {id}");
            assert!(SCAC_CODES.contains(&&id[..4]));
            assert_eq!(&id[4..6], "25");
            assert!(id[6..].chars().all(|c| c.is_ascii_digit()));
            lengths.insert(id.len());
        }

        // Every sequence length from 6 to 10 digits shows up.
        assert_eq!(lengths.len(), 5);
    }

    #[test]
    fn test_manifest_year_is_zero_padded() {
        let mut rng = StdRng::seed_from_u64(1);
        let id = generate_manifest_id(&mut rng, 2007);
        assert_eq!(&id[4..6], "07");
    }

    #[test]
    fn test_container_id_format() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let id = generate_container_id(&mut rng);
            assert_eq!(id.len(), CONTAINER_ID_LENGTH);
            assert!(id
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_deterministic_generation() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(
            generate_license_plate(&mut rng1),
            generate_license_plate(&mut rng2)
        );
    }
}
