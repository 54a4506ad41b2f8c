//! Pond population and random-sample helpers.
//!
//! Handles the startup fish spawn, bait placement, and the per-reel
//! struggle roll.

#![allow(dead_code)]

use super::types::{Fish, Species, Struggle};
use crate::constants::{POND_SIZE, POPULATION_SIZE};
use rand::Rng;

/// Spawns the fixed pond population.
///
/// Species are chosen uniformly at random from the fixed table; size is
/// rolled from the species range; positions are uniform over the pond
/// square. Speed starts at the species base and is later rescaled by
/// environment updates.
pub fn spawn_population(rng: &mut impl Rng) -> Vec<Fish> {
    (0..POPULATION_SIZE).map(|_| spawn_fish(rng)).collect()
}

/// Spawns a single fish with randomized species, size, position and
/// heading.
pub fn spawn_fish(rng: &mut impl Rng) -> Fish {
    let species = Species::ALL[rng.gen_range(0..Species::ALL.len())];
    let (min_size, max_size) = species.size_range();

    Fish {
        species,
        size: rng.gen_range(min_size..max_size),
        speed: species.base_speed(),
        bite_difficulty: species.bite_difficulty(),
        position: random_pond_position(rng),
        heading: random_heading(rng),
    }
}

/// Samples a uniform random point inside the pond square. Used both for
/// fish spawns and for where a cast lands.
pub fn random_pond_position(rng: &mut impl Rng) -> (f32, f32) {
    (rng.gen_range(0.0..POND_SIZE), rng.gen_range(0.0..POND_SIZE))
}

/// Rolls a hooked fish's struggle for one reel call, 50/50 between
/// tugging and relaxing.
pub fn roll_struggle(rng: &mut impl Rng) -> Struggle {
    if rng.gen_bool(0.5) {
        Struggle::Tug
    } else {
        Struggle::Relax
    }
}

/// Returns a random unit heading vector.
fn random_heading(rng: &mut impl Rng) -> (f32, f32) {
    let angle: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
    (angle.cos(), angle.sin())
}
