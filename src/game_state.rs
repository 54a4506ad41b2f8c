//! Owning state for a whole play session.
//!
//! Everything mutable lives here and is passed `&mut` into the action
//! handlers; there is no free-floating global state.

#![allow(dead_code)]

use crate::constants::{LOG_CAP, STARTING_CREDITS, STARTING_TENSION};
use crate::environment::EnvironmentState;
use crate::fishing::generation::spawn_population;
use crate::fishing::types::{AnglerPhase, Fish, FishId};
use crate::gear::Loadout;
use rand::Rng;

/// Player-facing angling session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Line strain during a catch attempt. Conceptually 0..=100 but not
    /// hard-clamped; it may transiently leave the band (and go negative)
    /// before a resolution check fires.
    pub tension_level: i32,
    pub is_line_cast: bool,
    pub active_catch: Option<FishId>,
    pub fish_caught: u32,
    pub credits: u32,
    /// Displayed but never incremented by the core loop.
    pub level: u32,
}

impl Session {
    pub fn new() -> Self {
        Self {
            tension_level: STARTING_TENSION,
            is_line_cast: false,
            active_catch: None,
            fish_caught: 0,
            credits: STARTING_CREDITS,
            level: 1,
        }
    }

    /// Derives the angling phase from the line/catch flags.
    pub fn phase(&self) -> AnglerPhase {
        match (self.is_line_cast, self.active_catch) {
            (false, _) => AnglerPhase::Idle,
            (true, None) => AnglerPhase::Cast,
            (true, Some(_)) => AnglerPhase::Engaged,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// A scheduled "pull the empty line back in" event. Carries the cast
/// generation it belongs to; if a newer cast or a resolution has since
/// happened, the reset is dropped instead of clobbering state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingLineReset {
    pub ticks_remaining: u32,
    pub generation: u64,
}

/// One line of the rolling message log.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub text: String,
    pub is_important: bool,
}

/// Full mutable game state.
#[derive(Debug, Clone)]
pub struct GameState {
    pub session: Session,
    /// The pond population. Fixed size; caught fish stay in it.
    pub population: Vec<Fish>,
    pub loadout: Loadout,
    pub environment: EnvironmentState,
    /// Monotonic counter bumped by every cast and resolution; guards
    /// `pending_line_reset` against firing for a stale cast.
    pub cast_generation: u64,
    pub pending_line_reset: Option<PendingLineReset>,
    pub log: Vec<LogEntry>,
}

impl GameState {
    /// Creates a fresh state with a newly spawned pond population.
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            session: Session::new(),
            population: spawn_population(rng),
            loadout: Loadout::default(),
            environment: EnvironmentState::default(),
            cast_generation: 0,
            pending_line_reset: None,
            log: vec![LogEntry {
                text: "Welcome to the pond. Press 'c' to cast.".to_string(),
                is_important: true,
            }],
        }
    }

    /// Appends to the rolling log, dropping the oldest entry past the cap.
    pub fn add_log(&mut self, text: impl Into<String>, is_important: bool) {
        self.log.push(LogEntry {
            text: text.into(),
            is_important,
        });
        if self.log.len() > LOG_CAP {
            self.log.remove(0);
        }
    }
}
