//! Condition-code classification.
//!
//! OpenWeatherMap identifies a weather phenomenon with a numeric condition
//! code. Display only distinguishes seven coarse categories; each category
//! carries the theme identifiers the presentation layer styles itself with.

use std::fmt;

/// Coarse weather class derived from a provider condition code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Atmosphere,
    Clear,
    Clouds,
}

/// Opaque styling identifiers handed to the presentation layer. The core
/// never interprets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub color: &'static str,
    pub background: &'static str,
    pub icon: &'static str,
}

impl Category {
    /// Map a provider condition code onto a category.
    ///
    /// Bands are inclusive on both ends. Any code outside them falls back to
    /// `Clouds`; that includes the 801..=804 cloud subtypes, which is why
    /// there is no explicit band for them.
    pub fn classify(code: i32) -> Self {
        match code {
            200..=232 => Category::Thunderstorm,
            300..=321 => Category::Drizzle,
            500..=531 => Category::Rain,
            600..=620 => Category::Snow,
            701..=781 => Category::Atmosphere,
            800 => Category::Clear,
            _ => Category::Clouds,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Thunderstorm => "Thunderstorm",
            Category::Drizzle => "Drizzle",
            Category::Rain => "Rain",
            Category::Snow => "Snow",
            Category::Atmosphere => "Atmosphere",
            Category::Clear => "Clear",
            Category::Clouds => "Clouds",
        }
    }

    /// Theme identifiers for this category.
    pub const fn theme(&self) -> Theme {
        match self {
            Category::Thunderstorm => Theme {
                color: "thunderstorm",
                background: "thunderstorm_bg",
                icon: "thunderstorm",
            },
            Category::Drizzle => Theme {
                color: "drizzle",
                background: "drizzle_bg",
                icon: "drizzle",
            },
            Category::Rain => Theme {
                color: "rain",
                background: "rainy_bg",
                icon: "rain",
            },
            Category::Snow => Theme {
                color: "snow",
                background: "snow_bg",
                icon: "snow",
            },
            Category::Atmosphere => Theme {
                color: "atmosphere",
                background: "mist_bg",
                icon: "mist",
            },
            Category::Clear => Theme {
                color: "clear",
                background: "clear_bg",
                icon: "clear",
            },
            Category::Clouds => Theme {
                color: "clouds",
                background: "cloud_bg",
                icon: "clouds",
            },
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
