//! Individual field generators.
//!
//! Each function draws one field value from the given RNG. The record
//! generator composes them and supplies the clock.

pub mod identifier;
pub mod numeric;
pub mod timestamp;

use rand::Rng;

/// Pick one entry uniformly from a non-empty table.
pub fn pick<'a, R: Rng>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}

/// Pick one variant uniformly from a non-empty variant list.
pub fn pick_variant<R: Rng, T: Copy>(rng: &mut R, variants: &[T]) -> T {
    variants[rng.gen_range(0..variants.len())]
}
