// Game timing constants
pub const TICK_INTERVAL_MS: u64 = 100;
pub const INPUT_POLL_MS: u64 = 50;
pub const TICKS_PER_SECOND: u64 = 1000 / TICK_INTERVAL_MS;

// Cast delay: with no bite, the line sits in the water this long before
// the scheduled reset pulls it back in (3 seconds at 100ms ticks)
pub const CAST_DELAY_TICKS: u32 = 30;

// Environment timers
pub const WEATHER_CHANGE_SECONDS: u64 = 30;
pub const DAY_NIGHT_CHANGE_SECONDS: u64 = 60;

// Pond geometry: a square region, 0..POND_SIZE on both axes
pub const POND_SIZE: f32 = 10.0;
pub const BITE_PROXIMITY: f32 = 1.0;

// Session defaults
pub const STARTING_TENSION: i32 = 50;
pub const STARTING_CREDITS: u32 = 100;
pub const POPULATION_SIZE: usize = 10;

// Tension resolution bounds. Escape is checked before success; a reel
// call landing in both bands resolves as an escape.
pub const ESCAPE_TENSION: i32 = 100;
pub const SUCCESS_TENSION: i32 = 20;

// Reel arithmetic: tug loses (base - stat/divisor), relax gains
// (base + stat/divisor). Integer math throughout; a rod stronger than
// 50 inverts the tug penalty into a gain, which is kept as-is.
pub const TUG_BASE_LOSS: i32 = 10;
pub const RELAX_BASE_GAIN: i32 = 5;
pub const GEAR_STAT_DIVISOR: i32 = 5;

// Rewards
pub const CATCH_CREDITS: u32 = 20;

// Environment bite modifiers (percentage points on the bite roll)
pub const RAIN_BITE_BONUS: f64 = 5.0;
pub const NIGHT_BITE_PENALTY: f64 = 5.0;

// Message log cap
pub const LOG_CAP: usize = 50;
