//! Per-tick world updates: line resets, fish movement, and the
//! environment timers.
//!
//! The main loop calls [`game_tick`] once per 100ms tick with a running
//! tick counter; everything time-based keys off that counter rather
//! than wall-clock reads.

#![allow(dead_code)]

use crate::constants::{
    DAY_NIGHT_CHANGE_SECONDS, POND_SIZE, TICKS_PER_SECOND, WEATHER_CHANGE_SECONDS,
};
use crate::game_state::GameState;
use rand::Rng;

/// Advances the world by one tick. Returns messages for the log.
pub fn game_tick(state: &mut GameState, rng: &mut impl Rng, tick_counter: u64) -> Vec<String> {
    let mut messages = Vec::new();

    if let Some(message) = tick_line_reset(state) {
        messages.push(message);
    }

    swim_tick(state);

    if tick_counter > 0 && tick_counter % (WEATHER_CHANGE_SECONDS * TICKS_PER_SECOND) == 0 {
        let weather = state.environment.advance_weather(rng);
        rescale_population_speed(state);
        messages.push(format!("The weather turns {}.", weather.name()));
    }

    if tick_counter > 0 && tick_counter % (DAY_NIGHT_CHANGE_SECONDS * TICKS_PER_SECOND) == 0 {
        let time_of_day = state.environment.advance_time_of_day();
        rescale_population_speed(state);
        messages.push(format!("{} falls over the pond.", time_of_day.name()));
    }

    messages
}

/// Counts down a scheduled empty-line reset. Resets fire only if their
/// generation still matches the current cast; a stale reset (the player
/// hooked a fish, resolved it, and cast again) is silently dropped.
fn tick_line_reset(state: &mut GameState) -> Option<String> {
    let reset = state.pending_line_reset.as_mut()?;

    if reset.generation != state.cast_generation {
        state.pending_line_reset = None;
        return None;
    }

    reset.ticks_remaining = reset.ticks_remaining.saturating_sub(1);
    if reset.ticks_remaining > 0 {
        return None;
    }

    state.pending_line_reset = None;
    state.session.is_line_cast = false;
    Some("You pull the empty line back in.".to_string())
}

/// Moves every fish along its heading, bouncing off the pond walls.
fn swim_tick(state: &mut GameState) {
    let dt = 1.0 / TICKS_PER_SECOND as f32;
    for fish in &mut state.population {
        fish.position.0 += fish.heading.0 * fish.speed * dt;
        fish.position.1 += fish.heading.1 * fish.speed * dt;

        if fish.position.0 < 0.0 || fish.position.0 > POND_SIZE {
            fish.heading.0 = -fish.heading.0;
            fish.position.0 = fish.position.0.clamp(0.0, POND_SIZE);
        }
        if fish.position.1 < 0.0 || fish.position.1 > POND_SIZE {
            fish.heading.1 = -fish.heading.1;
            fish.position.1 = fish.position.1.clamp(0.0, POND_SIZE);
        }
    }
}

/// Recomputes every fish's speed from its species base and the current
/// environment. Applied in place so a weather change takes effect on
/// the very next swim tick.
fn rescale_population_speed(state: &mut GameState) {
    let factor = state.environment.speed_factor();
    for fish in &mut state.population {
        fish.speed = fish.species.base_speed() * factor;
    }
}
