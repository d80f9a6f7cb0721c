//! OpenWeatherMap direct geocoding client.
//!
//! Resolves a free-text city name (plus optional ISO country code) into
//! candidate locations. See: https://openweathermap.org/api/geocoding-api

use serde::Deserialize;
use std::collections::HashSet;

use crate::errors::AppError;

/// Maximum number of candidates requested from the geocoding endpoint.
const GEOCODE_RESULT_LIMIT: u8 = 3;

/// A candidate location returned by the geocoding endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    pub name: String,
    /// State or region; absent for most non-US locations.
    pub state: Option<String>,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    /// Identity used for deduplication: (name, state-or-empty, country).
    fn dedup_key(&self) -> (String, String, String) {
        (
            self.name.clone(),
            self.state.clone().unwrap_or_default(),
            self.country.clone(),
        )
    }

    /// One-line label shown in the disambiguation list,
    /// e.g. "London, Ontario (CA)" or "London (GB)".
    pub fn label(&self) -> String {
        match self.state.as_deref() {
            Some(state) if !state.is_empty() => {
                format!("{}, {} ({})", self.name, state, self.country)
            }
            _ => format!("{} ({})", self.name, self.country),
        }
    }
}

/// Client for the OpenWeatherMap direct geocoding API.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeocodeClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Fetch candidate locations for a city name, deduplicated by
    /// (name, state, country) in first-seen order.
    ///
    /// The country code filter is included in the query only when provided.
    /// An empty result set is `AppError::NoResults`.
    pub async fn fetch_candidates(
        &self,
        city: &str,
        country_code: Option<&str>,
    ) -> Result<Vec<Location>, AppError> {
        let query = match country_code {
            Some(cc) if !cc.is_empty() => format!("{},{}", city, cc),
            _ => city.to_string(),
        };

        let url = format!(
            "{}/direct?q={}&limit={}&appid={}",
            self.base_url, query, GEOCODE_RESULT_LIMIT, self.api_key
        );
        tracing::debug!("Geocoding request: {}/direct?q={}", self.base_url, query);

        let response = self.client.get(&url).send().await.map_err(|e| {
            AppError::ExternalServiceError(format!("geocoding request failed: {}", e))
        })?;

        if !response.status().is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "geocoding returned HTTP {}",
                response.status()
            )));
        }

        let candidates: Vec<Location> = response.json().await.map_err(|e| {
            AppError::ExternalServiceError(format!("geocoding JSON parse error: {}", e))
        })?;

        if candidates.is_empty() {
            return Err(AppError::NoResults(city.to_string()));
        }

        Ok(remove_duplicates(candidates))
    }
}

/// Drop repeated candidates, keeping the first occurrence of each
/// (name, state-or-empty, country) tuple and preserving input order.
///
/// The geocoding endpoint regularly returns the same place twice with
/// slightly different coordinates; the first hit wins.
pub fn remove_duplicates(candidates: Vec<Location>) -> Vec<Location> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|loc| seen.insert(loc.dedup_key()))
        .collect()
}
