//! Weather model: a seasonal probability ladder over a uniform roll.
//!
//! `condition_for` is a pure function of (roll, month) so tests can
//! re-derive any reseed byte for byte; the RNG stays outside.

use chrono::{Datelike, NaiveDate};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyfront_core::enums::WeatherCondition;

/// Map a uniform roll in [0, 100) and a calendar month (1–12) to the
/// day's weather. Winter (Dec–Feb) skews foul, summer (Jun–Aug) skews
/// fair, the shoulder seasons sit between.
pub fn condition_for(roll: u32, month: u32) -> WeatherCondition {
    let is_winter = month == 12 || month <= 2;
    let is_summer = (6..=8).contains(&month);

    if is_winter {
        match roll {
            0..=29 => WeatherCondition::Clear,
            30..=49 => WeatherCondition::Cloudy,
            50..=74 => WeatherCondition::Rainy,
            75..=89 => WeatherCondition::Stormy,
            _ => WeatherCondition::Foggy,
        }
    } else if is_summer {
        // No summer fog on this ladder.
        match roll {
            0..=59 => WeatherCondition::Clear,
            60..=84 => WeatherCondition::Cloudy,
            85..=94 => WeatherCondition::Rainy,
            _ => WeatherCondition::Stormy,
        }
    } else {
        match roll {
            0..=44 => WeatherCondition::Clear,
            45..=69 => WeatherCondition::Cloudy,
            70..=84 => WeatherCondition::Rainy,
            85..=94 => WeatherCondition::Stormy,
            _ => WeatherCondition::Foggy,
        }
    }
}

/// Roll the weather for a new turn from the engine's seeded stream.
pub fn reseed(rng: &mut ChaCha8Rng, date: NaiveDate) -> WeatherCondition {
    let roll = rng.gen_range(0..100u32);
    condition_for(roll, date.month())
}
