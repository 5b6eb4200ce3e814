//! Mock JSON data source backing the table and weather sections.
//!
//! Produces the exact wire shapes a real backend would serve; the frontend
//! fetch shim adds the simulated latency and the HTTP 500 error body. The
//! caller supplies randomness and the clock so the jitter and the
//! sunrise/sunset window stay reproducible in tests.

use crate::constants::SUN_OFFSET_SECS;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MockError {
    #[error("Failed to fetch weather data")]
    WeatherUnavailable,
}

/// JSON body served alongside an HTTP 500.
pub fn error_body(err: &MockError) -> serde_json::Value {
    serde_json::json!({ "error": err.to_string() })
}

// ---------------- /api/tabledata ----------------

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub online: bool,
}

fn row(id: u32, name: &str, email: &str, role: &str, online: bool) -> TableRow {
    TableRow {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        online,
    }
}

/// Static user table.
pub fn table_rows() -> Vec<TableRow> {
    vec![
        row(1, "John Smith", "john@example.com", "Administrator", true),
        row(2, "Peter Johnson", "peter@example.com", "User", false),
        row(3, "Anna Brown", "anna@example.com", "Moderator", true),
        row(4, "Elena Williams", "elena@example.com", "User", false),
    ]
}

// ---------------- /api/weather ----------------

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherMain {
    pub temp: f64,
    pub humidity: u32,
    pub feels_like: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherCondition {
    pub id: u32,
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub speed: f64,
    pub deg: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sys {
    pub country: String,
    pub sunrise: i64,
    pub sunset: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherEntry {
    pub main: WeatherMain,
    pub weather: Vec<WeatherCondition>,
    pub wind: Wind,
    pub name: String,
    pub sys: Sys,
}

/// Per-city base values the jitter is applied to.
pub struct CityBase {
    pub name: &'static str,
    pub country: &'static str,
    pub temp: f64,
    pub humidity: u32,
    pub feels_like: f64,
    pub wind: f64,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const CITIES: [CityBase; 5] = [
    CityBase {
        name: "Prague",
        country: "CZ",
        temp: 15.5,
        humidity: 65,
        feels_like: 14.8,
        wind: 3.5,
        description: "clear",
        icon: "01d",
    },
    CityBase {
        name: "Berlin",
        country: "DE",
        temp: 13.2,
        humidity: 70,
        feels_like: 12.5,
        wind: 4.1,
        description: "cloudy",
        icon: "02d",
    },
    CityBase {
        name: "London",
        country: "GB",
        temp: 11.8,
        humidity: 80,
        feels_like: 10.9,
        wind: 5.0,
        description: "rain",
        icon: "09d",
    },
    CityBase {
        name: "Paris",
        country: "FR",
        temp: 16.1,
        humidity: 60,
        feels_like: 15.0,
        wind: 3.2,
        description: "partly cloudy",
        icon: "03d",
    },
    CityBase {
        name: "Madrid",
        country: "ES",
        temp: 20.3,
        humidity: 50,
        feels_like: 19.7,
        wind: 2.8,
        description: "sunny",
        icon: "01d",
    },
];

/// Build one weather report: per-city base values with `temp` and
/// `feels_like` jittered by a uniform offset in `[-1, 1]`, and a
/// sunrise/sunset window of six hours either side of `now_unix`.
pub fn weather_report(rng: &mut impl Rng, now_unix: i64) -> Vec<WeatherEntry> {
    CITIES
        .iter()
        .map(|city| WeatherEntry {
            main: WeatherMain {
                temp: city.temp + (rng.gen::<f64>() * 2.0 - 1.0),
                humidity: city.humidity,
                feels_like: city.feels_like + (rng.gen::<f64>() * 2.0 - 1.0),
            },
            weather: vec![WeatherCondition {
                id: 800,
                main: city.description.to_string(),
                description: city.description.to_string(),
                icon: city.icon.to_string(),
            }],
            wind: Wind {
                speed: city.wind,
                deg: 280,
            },
            name: city.name.to_string(),
            sys: Sys {
                country: city.country.to_string(),
                sunrise: now_unix - SUN_OFFSET_SECS,
                sunset: now_unix + SUN_OFFSET_SECS,
            },
        })
        .collect()
}
