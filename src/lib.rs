//! Pondside, a terminal fishing game.
//!
//! The core loop is cast, wait for a bite, reel against the fish's
//! struggles while the line tension drifts, and spend the credits on
//! better gear. Weather and a day/night cycle shift the odds under you.

#![allow(dead_code)]

pub mod build_info;
pub mod constants;
pub mod environment;
pub mod fishing;
pub mod game_logic;
pub mod game_state;
pub mod gear;

// UI module is not exposed as it's tightly coupled to the terminal
mod ui;
