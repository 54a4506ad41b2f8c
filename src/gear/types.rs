//! Gear data structures: slots, catalog items, and the equipped loadout.
//!
//! Items are tagged per slot kind so stat lookups match exhaustively
//! instead of stringly falling through.

#![allow(dead_code)]

use super::shop;

/// The three independently equip-able gear slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GearSlot {
    Rod,
    Reel,
    Bait,
}

impl GearSlot {
    /// All slots in shop-tab order.
    pub const ALL: [GearSlot; 3] = [GearSlot::Rod, GearSlot::Reel, GearSlot::Bait];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            GearSlot::Rod => "Rod",
            GearSlot::Reel => "Reel",
            GearSlot::Bait => "Bait",
        }
    }
}

/// Slot-specific stat payload.
///
/// - Rod strength softens the tension lost to a tug.
/// - Reel durability boosts the tension gained while the fish relaxes.
/// - Bait attraction feeds the bite-probability check on cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GearKind {
    Rod { strength: i32 },
    Reel { durability: i32 },
    Bait { attraction: f64 },
}

/// An immutable catalog entry. The catalog itself never changes; only
/// which entry is equipped per slot does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearItem {
    pub name: &'static str,
    pub kind: GearKind,
    pub cost: u32,
}

impl GearItem {
    /// The slot this item occupies when equipped.
    pub fn slot(&self) -> GearSlot {
        match self.kind {
            GearKind::Rod { .. } => GearSlot::Rod,
            GearKind::Reel { .. } => GearSlot::Reel,
            GearKind::Bait { .. } => GearSlot::Bait,
        }
    }

    /// Human-readable stat description for shop listings.
    pub fn stat_label(&self) -> String {
        match self.kind {
            GearKind::Rod { strength } => format!("strength {}", strength),
            GearKind::Reel { durability } => format!("durability {}", durability),
            GearKind::Bait { attraction } => format!("attraction {}", attraction),
        }
    }
}

/// The currently equipped catalog index per slot. Starts on the cheapest
/// entry of each table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Loadout {
    pub rod: usize,
    pub reel: usize,
    pub bait: usize,
}

impl Loadout {
    /// The equipped catalog index for a slot.
    pub fn equipped_index(&self, slot: GearSlot) -> usize {
        match slot {
            GearSlot::Rod => self.rod,
            GearSlot::Reel => self.reel,
            GearSlot::Bait => self.bait,
        }
    }

    /// Replaces the equipped index for a slot.
    pub fn equip(&mut self, slot: GearSlot, index: usize) {
        match slot {
            GearSlot::Rod => self.rod = index,
            GearSlot::Reel => self.reel = index,
            GearSlot::Bait => self.bait = index,
        }
    }

    /// The equipped item for a slot.
    pub fn equipped(&self, slot: GearSlot) -> &'static GearItem {
        &shop::catalog(slot)[self.equipped_index(slot)]
    }

    /// Strength of the equipped rod.
    pub fn rod_strength(&self) -> i32 {
        match self.equipped(GearSlot::Rod).kind {
            GearKind::Rod { strength } => strength,
            // the rod table only holds rods
            _ => 0,
        }
    }

    /// Durability of the equipped reel.
    pub fn reel_durability(&self) -> i32 {
        match self.equipped(GearSlot::Reel).kind {
            GearKind::Reel { durability } => durability,
            _ => 0,
        }
    }

    /// Attraction of the equipped bait.
    pub fn bait_attraction(&self) -> f64 {
        match self.equipped(GearSlot::Bait).kind {
            GearKind::Bait { attraction } => attraction,
            _ => 0.0,
        }
    }
}
