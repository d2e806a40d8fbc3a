use chrono::{DateTime, Local, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::condition::Category;
use crate::units;

/// One place to ask the weather for: a position fix or a free-text city
/// name. Built per user action and consumed immediately, never cached.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    ByCoordinates(Coordinates),
    ByName(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Normalized snapshot of current weather for one location at fetch time.
///
/// Temperatures stay in Kelvin exactly as the provider returned them. Every
/// value the presentation layer shows in other units is derived on demand by
/// the methods below and never written back; the report is immutable once
/// built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Non-empty; entry 0 is authoritative for category selection.
    pub conditions: Vec<ConditionEntry>,
    pub temperature: Temperature,
    pub pressure_hpa: u32,
    pub humidity_pct: u8,
    pub wind: Wind,
    pub sun: Sun,
    /// Resolved display name of the queried place.
    pub location_name: String,
    /// Provider-assigned city identifier, informational only.
    pub city_id: i64,
}

/// One reported phenomenon. `category` is the provider's coarse label
/// (e.g. "Rain"); the classified [`Category`] is derived from `code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionEntry {
    pub code: i32,
    pub category: String,
    pub description: String,
    pub icon_id: String,
}

/// All fields in Kelvin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    pub current: f64,
    pub feels_like: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub speed_mps: f64,
    /// Meteorological degrees, normalized to [0, 360).
    pub direction_deg: u16,
}

/// Unix epoch seconds, UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sun {
    pub sunrise_epoch: i64,
    pub sunset_epoch: i64,
}

impl WeatherReport {
    /// The authoritative condition entry. The client guarantees at least one
    /// entry, so this never fails on a report it built.
    pub fn primary_condition(&self) -> &ConditionEntry {
        &self.conditions[0]
    }

    /// Category of the primary condition, classified from its code.
    pub fn category(&self) -> Category {
        Category::classify(self.primary_condition().code)
    }

    pub fn current_celsius(&self) -> f64 {
        units::kelvin_to_celsius(self.temperature.current)
    }

    pub fn feels_like_celsius(&self) -> f64 {
        units::kelvin_to_celsius(self.temperature.feels_like)
    }

    pub fn min_celsius(&self) -> f64 {
        units::kelvin_to_celsius(self.temperature.min)
    }

    pub fn max_celsius(&self) -> f64 {
        units::kelvin_to_celsius(self.temperature.max)
    }

    /// Fahrenheit is derived from the already-rounded Celsius value, not
    /// from raw Kelvin; the two-step conversion is part of display parity.
    pub fn current_fahrenheit(&self) -> i32 {
        units::celsius_to_fahrenheit(self.current_celsius())
    }

    /// Sunset as local wall-clock time. Sunrise is deliberately surfaced
    /// raw via [`Sun::sunrise_epoch`]; the two fields render differently.
    pub fn sunset_local_time(&self) -> Option<NaiveTime> {
        DateTime::from_timestamp(self.sun.sunset_epoch, 0)
            .map(|utc| utc.with_timezone(&Local).time())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_with(code: i32, temp: f64) -> WeatherReport {
        WeatherReport {
            conditions: vec![
                ConditionEntry {
                    code,
                    category: "Rain".to_string(),
                    description: "light rain".to_string(),
                    icon_id: "10d".to_string(),
                },
                ConditionEntry {
                    code: 701,
                    category: "Mist".to_string(),
                    description: "mist".to_string(),
                    icon_id: "50d".to_string(),
                },
            ],
            temperature: Temperature { current: temp, feels_like: temp, min: temp, max: temp },
            pressure_hpa: 1012,
            humidity_pct: 74,
            wind: Wind { speed_mps: 3.6, direction_deg: 220 },
            sun: Sun { sunrise_epoch: 1_661_834_187, sunset_epoch: 1_661_879_925 },
            location_name: "Bengaluru".to_string(),
            city_id: 1_277_333,
        }
    }

    #[test]
    fn first_condition_entry_drives_the_category() {
        let report = report_with(500, 300.0);
        assert_eq!(report.category(), Category::Rain);
        assert_eq!(report.primary_condition().description, "light rain");
    }

    #[test]
    fn celsius_is_derived_not_stored() {
        let report = report_with(800, 300.05);
        assert_eq!(report.temperature.current, 300.05);
        assert_eq!(report.current_celsius(), 27.1);
    }

    #[test]
    fn fahrenheit_goes_through_rounded_celsius() {
        let report = report_with(800, 300.05);
        // 27.1 °C, not 27.05 °C, is what gets converted.
        assert_eq!(report.current_fahrenheit(), 81);
    }

    #[test]
    fn sunset_local_time_is_derivable() {
        let report = report_with(800, 300.0);
        assert!(report.sunset_local_time().is_some());
    }
}
