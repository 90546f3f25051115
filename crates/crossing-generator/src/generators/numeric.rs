//! Numeric field generators.

use crossing_core::{VehicleType, MAX_LANE, MIN_LANE};
use rand::Rng;

/// Passenger count within the bounds of the vehicle type (inclusive).
pub fn generate_passenger_count<R: Rng>(rng: &mut R, vehicle_type: VehicleType) -> u32 {
    let (min, max) = vehicle_type.passenger_bounds();
    rng.gen_range(min..=max)
}

pub fn generate_lane<R: Rng>(rng: &mut R) -> u8 {
    rng.gen_range(MIN_LANE..=MAX_LANE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_passenger_count_bounds() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            assert!(generate_passenger_count(&mut rng, VehicleType::Motorcycle) <= 2);
            let trailer = generate_passenger_count(&mut rng, VehicleType::TractorTrailer);
            assert!((1..=2).contains(&trailer));
            assert!(generate_passenger_count(&mut rng, VehicleType::Van) <= 8);
        }
    }

    #[test]
    fn test_lane_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 10];

        for _ in 0..500 {
            let lane = generate_lane(&mut rng);
            assert!((MIN_LANE..=MAX_LANE).contains(&lane));
            seen[(lane - 1) as usize] = true;
        }

        assert!(seen.iter().all(|s| *s));
    }
}
