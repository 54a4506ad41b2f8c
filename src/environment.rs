//! Weather and day/night cycle.
//!
//! Two orthogonal axes advanced on independent timers. Both bias the
//! bite-probability roll and rescale fish swim speed; they are otherwise
//! unrelated even though both have a "Night" variant.

#![allow(dead_code)]

use crate::constants::{NIGHT_BITE_PENALTY, RAIN_BITE_BONUS};
use rand::Rng;

/// Current weather over the pond.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weather {
    Sunny,
    Rainy,
    Cloudy,
    Night,
}

impl Weather {
    /// All weather states the changer can pick from.
    pub const ALL: [Weather; 4] = [
        Weather::Sunny,
        Weather::Rainy,
        Weather::Cloudy,
        Weather::Night,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Weather::Sunny => "Sunny",
            Weather::Rainy => "Rainy",
            Weather::Cloudy => "Cloudy",
            Weather::Night => "Night",
        }
    }

    /// Percentage-point adjustment to the bite roll. Rain stirs the
    /// water and makes fish bolder.
    pub fn bite_modifier(&self) -> f64 {
        match self {
            Weather::Rainy => RAIN_BITE_BONUS,
            Weather::Sunny | Weather::Cloudy | Weather::Night => 0.0,
        }
    }

    /// Multiplier applied to species base swim speed.
    pub fn speed_factor(&self) -> f32 {
        match self {
            Weather::Sunny => 1.0,
            Weather::Rainy => 1.3,
            Weather::Cloudy => 1.1,
            Weather::Night => 0.9,
        }
    }
}

/// Day/night cycle, toggled on its own timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Day,
    Night,
}

impl TimeOfDay {
    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            TimeOfDay::Day => "Day",
            TimeOfDay::Night => "Night",
        }
    }

    /// Percentage-point adjustment to the bite roll. Fish are harder to
    /// tempt in the dark.
    pub fn bite_modifier(&self) -> f64 {
        match self {
            TimeOfDay::Day => 0.0,
            TimeOfDay::Night => -NIGHT_BITE_PENALTY,
        }
    }

    /// Multiplier applied to species base swim speed.
    pub fn speed_factor(&self) -> f32 {
        match self {
            TimeOfDay::Day => 1.0,
            TimeOfDay::Night => 0.8,
        }
    }

    /// The other half of the cycle.
    pub fn toggled(&self) -> TimeOfDay {
        match self {
            TimeOfDay::Day => TimeOfDay::Night,
            TimeOfDay::Night => TimeOfDay::Day,
        }
    }
}

/// Combined environment state read by the angling loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvironmentState {
    pub weather: Weather,
    pub time_of_day: TimeOfDay,
}

impl Default for EnvironmentState {
    fn default() -> Self {
        Self {
            weather: Weather::Sunny,
            time_of_day: TimeOfDay::Day,
        }
    }
}

impl EnvironmentState {
    /// Net percentage-point adjustment both axes contribute to the bite
    /// roll.
    pub fn bite_modifier(&self) -> f64 {
        self.weather.bite_modifier() + self.time_of_day.bite_modifier()
    }

    /// Net swim-speed multiplier both axes contribute.
    pub fn speed_factor(&self) -> f32 {
        self.weather.speed_factor() * self.time_of_day.speed_factor()
    }

    /// Picks the next weather uniformly at random (staying on the
    /// current weather is allowed). Returns the new value.
    pub fn advance_weather(&mut self, rng: &mut impl Rng) -> Weather {
        self.weather = Weather::ALL[rng.gen_range(0..Weather::ALL.len())];
        self.weather
    }

    /// Flips day to night and back. Returns the new value.
    pub fn advance_time_of_day(&mut self) -> TimeOfDay {
        self.time_of_day = self.time_of_day.toggled();
        self.time_of_day
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_default_environment_is_neutral() {
        let env = EnvironmentState::default();
        assert_eq!(env.bite_modifier(), 0.0);
        assert_eq!(env.speed_factor(), 1.0);
    }

    #[test]
    fn test_rain_boosts_and_night_penalizes_bites() {
        let env = EnvironmentState {
            weather: Weather::Rainy,
            time_of_day: TimeOfDay::Night,
        };
        // +5 from rain, -5 from night: the axes cancel
        assert_eq!(env.bite_modifier(), 0.0);

        let rain_only = EnvironmentState {
            weather: Weather::Rainy,
            time_of_day: TimeOfDay::Day,
        };
        assert_eq!(rain_only.bite_modifier(), 5.0);

        let night_only = EnvironmentState {
            weather: Weather::Cloudy,
            time_of_day: TimeOfDay::Night,
        };
        assert_eq!(night_only.bite_modifier(), -5.0);
    }

    #[test]
    fn test_time_of_day_toggles_round_trip() {
        let mut env = EnvironmentState::default();
        assert_eq!(env.advance_time_of_day(), TimeOfDay::Night);
        assert_eq!(env.advance_time_of_day(), TimeOfDay::Day);
    }

    #[test]
    fn test_weather_changer_reaches_every_state() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let mut env = EnvironmentState::default();
        let mut seen = [false; 4];
        for _ in 0..200 {
            let weather = env.advance_weather(&mut rng);
            let idx = Weather::ALL.iter().position(|w| *w == weather).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s), "uniform pick should hit all four");
    }

    #[test]
    fn test_weather_night_is_not_time_of_day_night() {
        // Orthogonal axes: weather Night leaves the day/night cycle alone
        let env = EnvironmentState {
            weather: Weather::Night,
            time_of_day: TimeOfDay::Day,
        };
        assert_eq!(env.bite_modifier(), 0.0, "weather Night has no bite penalty");
    }
}
