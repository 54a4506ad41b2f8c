//! Integration tests for the full cast/reel/resolve loop.

use pondside::constants::{
    CAST_DELAY_TICKS, CATCH_CREDITS, ESCAPE_TENSION, POPULATION_SIZE, SUCCESS_TENSION,
};
use pondside::fishing::logic::{adjust_tension, cast, reel_in, resolve_reel};
use pondside::fishing::types::{AnglerPhase, Struggle};
use pondside::game_logic::game_tick;
use pondside::game_state::GameState;
use pondside::gear::GearSlot;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn create_test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(12345)
}

fn create_test_state() -> GameState {
    let mut rng = create_test_rng();
    GameState::new(&mut rng)
}

/// Forces a hookup so resolution tests don't depend on cast luck.
fn hook_fish(state: &mut GameState, id: usize) {
    state.session.is_line_cast = true;
    state.session.active_catch = Some(id);
}

#[test]
fn test_cast_reaches_a_valid_state_across_seeds() {
    for seed in 0..500 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut state = GameState::new(&mut rng);

        cast(&mut state, &mut rng);

        match state.session.phase() {
            AnglerPhase::Engaged => assert!(state.session.active_catch.is_some()),
            AnglerPhase::Cast => assert!(state.pending_line_reset.is_some()),
            AnglerPhase::Idle => panic!("seed {}: cast left the line dry", seed),
        }
    }
}

#[test]
fn test_missed_cast_recovers_to_idle_through_ticks() {
    let mut rng = create_test_rng();
    let mut state = create_test_state();

    // Make every fish impossible to hook so the cast always misses
    for fish in &mut state.population {
        fish.bite_difficulty = 1000.0;
    }

    cast(&mut state, &mut rng);
    assert_eq!(state.session.phase(), AnglerPhase::Cast);

    for _ in 0..CAST_DELAY_TICKS {
        game_tick(&mut state, &mut rng, 1);
    }

    assert_eq!(state.session.phase(), AnglerPhase::Idle);
    assert!(state.pending_line_reset.is_none());
}

#[test]
fn test_recast_after_hookup_is_not_clobbered_by_old_reset() {
    let mut rng = create_test_rng();
    let mut state = create_test_state();

    // Miss a cast to schedule a reset
    for fish in &mut state.population {
        fish.bite_difficulty = 1000.0;
    }
    cast(&mut state, &mut rng);
    assert!(state.pending_line_reset.is_some());

    // Let a few ticks pass, then hook and resolve out of band
    for _ in 0..5 {
        game_tick(&mut state, &mut rng, 1);
    }
    state.session.active_catch = Some(0);
    state.session.tension_level = 10;
    resolve_reel(&mut state, Struggle::Tug);
    assert_eq!(state.session.phase(), AnglerPhase::Idle);

    // Cast again; the stale reset from the first cast must not pull
    // this new line back in early
    for fish in &mut state.population {
        fish.bite_difficulty = 1000.0;
    }
    cast(&mut state, &mut rng);
    for _ in 0..(CAST_DELAY_TICKS - 1) {
        game_tick(&mut state, &mut rng, 1);
        assert!(
            state.session.is_line_cast,
            "new cast reset early by a stale timer"
        );
    }
}

#[test]
fn test_escape_is_checked_before_success() {
    let mut state = create_test_state();
    state.loadout.equip(GearSlot::Reel, 2);
    hook_fish(&mut state, 0);
    state.session.tension_level = 95;

    // 95 + 5 + 40/5 = 108
    resolve_reel(&mut state, Struggle::Relax);

    assert!(state.session.tension_level > ESCAPE_TENSION);
    assert_eq!(state.session.fish_caught, 0);
    assert_eq!(state.session.phase(), AnglerPhase::Idle);
}

#[test]
fn test_successful_catch_pays_and_keeps_population() {
    let mut state = create_test_state();
    hook_fish(&mut state, 3);
    state.session.tension_level = 25;
    let credits_before = state.session.credits;

    // 25 - (10 - 2) = 17 < 20
    resolve_reel(&mut state, Struggle::Tug);

    assert!(state.session.tension_level < SUCCESS_TENSION);
    assert_eq!(state.session.fish_caught, 1);
    assert_eq!(state.session.credits, credits_before + CATCH_CREDITS);
    assert_eq!(state.population.len(), POPULATION_SIZE);
}

#[test]
fn test_reel_without_catch_is_idempotent() {
    let mut rng = create_test_rng();
    let mut state = create_test_state();
    let session_before = state.session.clone();

    for _ in 0..10 {
        reel_in(&mut state, &mut rng);
    }

    assert_eq!(state.session, session_before);
}

#[test]
fn test_tension_survives_resolution_until_adjusted() {
    let mut rng = create_test_rng();
    let mut state = create_test_state();
    hook_fish(&mut state, 0);
    state.session.tension_level = 10;
    resolve_reel(&mut state, Struggle::Tug);

    // Caught at 2; the value carries into the next engagement
    assert_eq!(state.session.tension_level, 2);

    adjust_tension(&mut state, &mut rng);
    assert!((0..100).contains(&state.session.tension_level));
}

#[test]
fn test_full_sessions_under_many_seeds_never_corrupt_state() {
    // Drive a few hundred mixed actions per seed and assert the core
    // invariants hold no matter the ordering.
    for seed in 0..50 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut state = GameState::new(&mut rng);
        let mut tick_counter = 0u64;

        for step in 0..300 {
            match step % 4 {
                0 => {
                    cast(&mut state, &mut rng);
                }
                1 | 2 => {
                    reel_in(&mut state, &mut rng);
                }
                _ => {
                    adjust_tension(&mut state, &mut rng);
                }
            }
            tick_counter += 1;
            game_tick(&mut state, &mut rng, tick_counter);

            assert_eq!(state.population.len(), POPULATION_SIZE);
            if state.session.active_catch.is_some() {
                assert!(state.session.is_line_cast, "catch without a line out");
            }
            if let Some(id) = state.session.active_catch {
                assert!(id < POPULATION_SIZE);
            }
            assert_eq!(state.session.level, 1, "level is display-only");
        }
    }
}
