//! Fishing system data structures.
//!
//! Defines the fish species table, the swimming `Fish` entities, and the
//! small enums the angling loop resolves over.

#![allow(dead_code)]

/// Index of a fish within the pond population. Fish are never removed,
/// so indices stay valid for the whole run.
pub type FishId = usize;

/// Fish species available in the pond, each with fixed base stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Species {
    Bass,
    Trout,
    Catfish,
}

impl Species {
    /// All species in spawn-table order.
    pub const ALL: [Species; 3] = [Species::Bass, Species::Trout, Species::Catfish];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Species::Bass => "Bass",
            Species::Trout => "Trout",
            Species::Catfish => "Catfish",
        }
    }

    /// Base swim speed in pond units per second, before environment
    /// rescaling.
    pub fn base_speed(&self) -> f32 {
        match self {
            Species::Bass => 0.6,
            Species::Trout => 0.9,
            Species::Catfish => 0.4,
        }
    }

    /// Attraction threshold the equipped bait must overcome. Higher
    /// means a warier fish.
    pub fn bite_difficulty(&self) -> f64 {
        match self {
            Species::Bass => 20.0,
            Species::Trout => 30.0,
            Species::Catfish => 25.0,
        }
    }

    /// Size range in pounds (min, max) used at spawn time.
    pub fn size_range(&self) -> (f32, f32) {
        match self {
            Species::Bass => (1.0, 4.0),
            Species::Trout => (0.5, 2.5),
            Species::Catfish => (2.0, 6.0),
        }
    }
}

/// A single fish swimming in the pond.
///
/// Caught fish are deliberately *not* removed from the population; they
/// remain swimmable and re-catchable for the whole run.
#[derive(Debug, Clone)]
pub struct Fish {
    pub species: Species,
    /// Weight in pounds, rolled at spawn from the species range.
    pub size: f32,
    /// Current speed in pond units per second. Rescaled in place when
    /// the weather or time of day changes.
    pub speed: f32,
    /// Copied from the species at spawn so environment code can adjust
    /// per-fish values without touching the species table.
    pub bite_difficulty: f64,
    /// Position in the pond square.
    pub position: (f32, f32),
    /// Unit heading vector; flipped on the axis a fish bounces off.
    pub heading: (f32, f32),
}

/// A hooked fish's per-reel behavior: tugging drops the line tension,
/// relaxing lets it climb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Struggle {
    Tug,
    Relax,
}

/// Derived state of the angling loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnglerPhase {
    /// Line out of the water, nothing hooked.
    Idle,
    /// Line in the water, nothing biting yet; a scheduled reset will
    /// return the session to `Idle`.
    Cast,
    /// A fish is hooked and the reel/tension loop is live.
    Engaged,
}
