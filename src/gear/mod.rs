//! Gear system: slots, catalog, loadout, and purchases.

#![allow(unused_imports)]

pub mod shop;
pub mod types;

pub use shop::*;
pub use types::*;
