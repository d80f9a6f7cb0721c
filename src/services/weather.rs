//! OpenWeatherMap One Call client.
//!
//! Fetches current conditions and the daily forecast for a coordinate pair,
//! going through the in-memory cache first.
//! See: https://openweathermap.org/api/one-call-3

use serde::Deserialize;

use crate::errors::AppError;
use crate::services::cache::{cache_key, WeatherCache};

/// Response sections we never display, excluded to shrink the payload.
const ONECALL_EXCLUDE: &str = "minutely,hourly";

/// Temperature unit system, chosen once per lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Celsius,
    Fahrenheit,
}

impl Unit {
    /// Value of the One Call `units` query parameter.
    pub fn api_param(self) -> &'static str {
        match self {
            Unit::Celsius => "metric",
            Unit::Fahrenheit => "imperial",
        }
    }

    /// Display suffix for temperatures.
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
        }
    }

    /// Parse a user's unit choice ("C" or "F", case-insensitive).
    pub fn from_input(input: &str) -> Option<Unit> {
        match input.trim().to_uppercase().as_str() {
            "C" => Some(Unit::Celsius),
            "F" => Some(Unit::Fahrenheit),
            _ => None,
        }
    }
}

// --- One Call JSON response types ---

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherReport {
    pub current: CurrentConditions,
    pub daily: Vec<DailyForecast>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentConditions {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u8,
    pub wind_speed: f64,
    pub weather: Vec<Condition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    /// Condition group, e.g. "Clear", "Rain". Drives icon selection.
    pub main: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyForecast {
    /// Forecast day as epoch seconds (UTC).
    pub dt: i64,
    pub temp: DailyTemperature,
    pub weather: Vec<Condition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyTemperature {
    pub day: f64,
    pub min: f64,
    pub max: f64,
}

/// Client for the OpenWeatherMap One Call API.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Fetch the weather report for a coordinate pair and unit system.
    ///
    /// Consults the cache first; a fresh entry short-circuits the network
    /// call. On a miss the response is parsed, stored, and returned. The
    /// returned flag is `true` when the report came from the cache.
    pub async fn fetch(
        &self,
        lat: f64,
        lon: f64,
        unit: Unit,
        cache: &mut WeatherCache,
    ) -> Result<(WeatherReport, bool), AppError> {
        let key = cache_key(lat, lon, unit);

        if let Some(report) = cache.lookup(&key) {
            tracing::debug!("Cache hit for {}", key);
            return Ok((report.clone(), true));
        }

        let url = format!(
            "{}/onecall?lat={}&lon={}&exclude={}&appid={}&units={}",
            self.base_url,
            lat,
            lon,
            ONECALL_EXCLUDE,
            self.api_key,
            unit.api_param()
        );
        tracing::debug!("One Call request for ({}, {}) units={}", lat, lon, unit.api_param());

        let response = self.client.get(&url).send().await.map_err(|e| {
            AppError::ExternalServiceError(format!("weather request failed: {}", e))
        })?;

        if !response.status().is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "weather endpoint returned HTTP {}",
                response.status()
            )));
        }

        let report: WeatherReport = response.json().await.map_err(|e| {
            AppError::ExternalServiceError(format!("weather JSON parse error: {}", e))
        })?;

        cache.store(key, report.clone());
        Ok((report, false))
    }
}
