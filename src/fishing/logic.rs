//! The angling resolution loop: cast, reel, and tension adjustment.
//!
//! All three player actions run synchronously over `GameState` and
//! return display messages. Precondition misses are silent no-ops that
//! only produce a message; player input can never error or panic.

#![allow(dead_code)]

use super::generation::{random_pond_position, roll_struggle};
use super::types::{Fish, FishId, Struggle};
use crate::constants::{
    BITE_PROXIMITY, CAST_DELAY_TICKS, CATCH_CREDITS, ESCAPE_TENSION, GEAR_STAT_DIVISOR,
    RELAX_BASE_GAIN, SUCCESS_TENSION, TUG_BASE_LOSS,
};
use crate::environment::EnvironmentState;
use crate::game_state::{GameState, PendingLineReset};
use rand::Rng;

/// Casts the line at a random spot in the pond.
///
/// Scans the population in storage order and hooks the first fish that
/// is both within [`BITE_PROXIMITY`] of the bait and passes its bite
/// roll (first match, not nearest). With no bite the line stays in the
/// water until the scheduled reset fires.
///
/// Silent no-op if the line is already cast.
pub fn cast(state: &mut GameState, rng: &mut impl Rng) -> Vec<String> {
    if state.session.is_line_cast {
        return vec!["The line is already in the water.".to_string()];
    }

    let bait_position = random_pond_position(rng);
    let attraction = state.loadout.bait_attraction();
    let hooked = find_biting_fish(
        &state.population,
        bait_position,
        attraction,
        &state.environment,
        rng,
    );

    // Every cast starts a new generation; any reset scheduled for an
    // earlier cast becomes stale and will be dropped by the tick.
    state.cast_generation += 1;
    state.session.is_line_cast = true;

    match hooked {
        Some(id) => {
            let fish = &state.population[id];
            state.session.active_catch = Some(id);
            state.pending_line_reset = None;
            vec![format!(
                "A {} takes the bait! Reel it in with 'r'.",
                fish.species.name()
            )]
        }
        None => {
            state.pending_line_reset = Some(PendingLineReset {
                ticks_remaining: CAST_DELAY_TICKS,
                generation: state.cast_generation,
            });
            vec!["The bobber drifts... nothing is biting.".to_string()]
        }
    }
}

/// Reels against the hooked fish.
///
/// Silent no-op if nothing is on the line.
pub fn reel_in(state: &mut GameState, rng: &mut impl Rng) -> Vec<String> {
    if state.session.active_catch.is_none() {
        return vec!["Nothing is on the line.".to_string()];
    }
    let struggle = roll_struggle(rng);
    resolve_reel(state, struggle)
}

/// Applies one struggle outcome to the tension and runs the resolution
/// checks. Split from [`reel_in`] so tests can fix the struggle.
///
/// Escape (`tension > 100`) is checked before success (`tension < 20`);
/// that ordering is part of the game's rules, not incidental.
pub fn resolve_reel(state: &mut GameState, struggle: Struggle) -> Vec<String> {
    let id = match state.session.active_catch {
        Some(id) => id,
        None => return vec!["Nothing is on the line.".to_string()],
    };

    match struggle {
        Struggle::Tug => {
            // A strong enough rod (> 50) inverts this into a gain;
            // preserved on purpose.
            let loss = TUG_BASE_LOSS - state.loadout.rod_strength() / GEAR_STAT_DIVISOR;
            state.session.tension_level -= loss;
        }
        Struggle::Relax => {
            let gain = RELAX_BASE_GAIN + state.loadout.reel_durability() / GEAR_STAT_DIVISOR;
            state.session.tension_level += gain;
        }
    }

    let tension = state.session.tension_level;
    let fish = &state.population[id];
    let species = fish.species.name();
    let size = fish.size;

    if tension > ESCAPE_TENSION {
        state.session.active_catch = None;
        state.session.is_line_cast = false;
        state.cast_generation += 1;
        return vec![format!(
            "The {} thrashes free! The line goes slack (tension {}).",
            species, tension
        )];
    }

    if tension < SUCCESS_TENSION {
        state.session.fish_caught += 1;
        state.session.credits += CATCH_CREDITS;
        state.session.active_catch = None;
        state.session.is_line_cast = false;
        state.cast_generation += 1;
        // The caught fish stays in the pond; the population is never
        // thinned.
        return vec![format!(
            "Caught a {} ({:.1} lb)! +{} credits.",
            species, size, CATCH_CREDITS
        )];
    }

    match struggle {
        Struggle::Tug => vec![format!("It tugs hard! Tension drops to {}.", tension)],
        Struggle::Relax => vec![format!("It eases off. Tension climbs to {}.", tension)],
    }
}

/// Overwrites the tension with a uniform random integer in [0, 100).
///
/// Deliberately available in every state, hooked fish or not; it is the
/// player's wildcard for recovering from runaway tension.
pub fn adjust_tension(state: &mut GameState, rng: &mut impl Rng) -> Vec<String> {
    let tension = rng.gen_range(0..100);
    state.session.tension_level = tension;
    vec![format!("Tension adjusted to {}.", tension)]
}

/// Chance (percentage points, floored at 0) that a proximate fish
/// engages the line: bait attraction against the fish's wariness, plus
/// the environment's rain/night adjustments.
pub fn bite_chance(attraction: f64, fish: &Fish, environment: &EnvironmentState) -> f64 {
    (attraction - fish.bite_difficulty + environment.bite_modifier()).max(0.0)
}

/// First-match scan for a biting fish near the bait. Each proximate
/// fish gets its own roll; the first success wins regardless of
/// distance ordering.
fn find_biting_fish(
    population: &[Fish],
    bait_position: (f32, f32),
    attraction: f64,
    environment: &EnvironmentState,
    rng: &mut impl Rng,
) -> Option<FishId> {
    for (id, fish) in population.iter().enumerate() {
        if distance(fish.position, bait_position) >= BITE_PROXIMITY {
            continue;
        }
        let chance = bite_chance(attraction, fish, environment);
        if rng.gen_range(0.0..100.0) < chance {
            return Some(id);
        }
    }
    None
}

fn distance(a: (f32, f32), b: (f32, f32)) -> f32 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    (dx * dx + dy * dy).sqrt()
}
