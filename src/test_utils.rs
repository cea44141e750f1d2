//! Seeded random data generators shared by this crate's unit tests.

use crate::entry::Entry;
use rand::distr::Uniform;
use rand::{Rng, SeedableRng};
use rand_hc::Hc128Rng;

pub type Seed = [u8; 32];

pub const SEED_1: &Seed = b"wPYxAkIiHcEmSBAxQFoXFrpYToCe1B71";
pub const SEED_2: &Seed = b"4KbTVjPT4DXSwWAsQM5dkWWywPKZRfCX";

/// Generates `n` small, non-degenerate rectangles scattered over
/// `-1000.0..1000.0`, each carrying its own index as payload.
pub fn random_entries(n: usize, seed: &Seed) -> Vec<Entry<i32>> {
    let mut rng = Hc128Rng::from_seed(*seed);
    let coord = Uniform::new(-1000.0f32, 1000.0f32).unwrap();
    let size = Uniform::new(0.01f32, 5.0f32).unwrap();

    (0..n)
        .map(|i| {
            let x1 = rng.sample(coord);
            let y1 = rng.sample(coord);
            let x2 = x1 + rng.sample(size);
            let y2 = y1 + rng.sample(size);
            Entry::new(x1, y1, x2, y2, i as i32)
        })
        .collect()
}

/// Generates `n` random query points in the same range as
/// [`random_entries`].
pub fn random_points(n: usize, seed: &Seed) -> Vec<(f32, f32)> {
    let mut rng = Hc128Rng::from_seed(*seed);
    let coord = Uniform::new(-1000.0f32, 1000.0f32).unwrap();
    (0..n)
        .map(|_| (rng.sample(coord), rng.sample(coord)))
        .collect()
}
