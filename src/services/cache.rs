//! In-memory weather response cache.
//!
//! Read-through cache keyed by (latitude, longitude, unit) with a fixed
//! 600-second TTL. Entries are only ever replaced by a fresh fetch; there is
//! no eviction. An interactive session keeps the working set small, so the
//! missing capacity bound is acceptable.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::services::weather::{Unit, WeatherReport};

/// How long a cached response stays fresh.
pub const CACHE_TTL: Duration = Duration::from_secs(600);

/// Cache key for a coordinate pair and unit system.
///
/// Coordinates are rounded to 4 decimal places so that float noise from the
/// geocoder doesn't produce distinct keys for the same place.
pub fn cache_key(lat: f64, lon: f64, unit: Unit) -> String {
    format!("{:.4},{:.4},{}", lat, lon, unit.api_param())
}

#[derive(Debug, Default)]
pub struct WeatherCache {
    entries: HashMap<String, (WeatherReport, Instant)>,
}

impl WeatherCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached report for `key` if one exists and is younger than
    /// the TTL. A stale entry is a miss; it stays in place until the next
    /// `store` overwrites it.
    pub fn lookup(&self, key: &str) -> Option<&WeatherReport> {
        self.lookup_at(key, Instant::now())
    }

    /// TTL check against an explicit clock, so tests can simulate elapsed time.
    pub fn lookup_at(&self, key: &str, now: Instant) -> Option<&WeatherReport> {
        self.entries
            .get(key)
            .filter(|(_, fetched_at)| now.duration_since(*fetched_at) < CACHE_TTL)
            .map(|(report, _)| report)
    }

    /// Store a report under `key`, unconditionally replacing any prior entry.
    pub fn store(&mut self, key: String, report: WeatherReport) {
        self.store_at(key, report, Instant::now());
    }

    pub fn store_at(&mut self, key: String, report: WeatherReport, now: Instant) {
        self.entries.insert(key, (report, now));
    }
}
