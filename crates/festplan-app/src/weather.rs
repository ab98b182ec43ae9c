//! Weather cache: a time-boxed snapshot in its own slot on the shared
//! medium. NOT encrypted: no user data, 30-minute expiry.

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use festplan_store::slots::WEATHER_SLOT;
use festplan_store::StorageMedium;
use serde::{Deserialize, Serialize};
use tracing::warn;

const CACHE_TTL_MILLIS: i64 = 30 * 60 * 1000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    pub temperature: f64,
    pub condition: String,
    pub humidity: f64,
    pub wind_speed: f64,
    /// Unix epoch millis at fetch time.
    pub timestamp: i64,
}

pub struct WeatherCache {
    medium: Arc<dyn StorageMedium>,
}

impl WeatherCache {
    pub fn new(medium: Arc<dyn StorageMedium>) -> Self {
        Self { medium }
    }

    /// The cached snapshot, if still fresh. A malformed or stale cache is
    /// treated as absent.
    pub fn get(&self) -> Option<WeatherSnapshot> {
        let text = match self.medium.get(WEATHER_SLOT) {
            Ok(text) => text?,
            Err(e) => {
                warn!("weather cache unreadable: {e}");
                return None;
            }
        };
        let snapshot: WeatherSnapshot = match serde_json::from_str(&text) {
            Ok(s) => s,
            Err(e) => {
                warn!("invalid weather cache: {e}");
                return None;
            }
        };
        let age = Utc::now().timestamp_millis() - snapshot.timestamp;
        (age < CACHE_TTL_MILLIS).then_some(snapshot)
    }

    pub fn put(&self, snapshot: &WeatherSnapshot) -> Result<()> {
        self.medium
            .set(WEATHER_SLOT, &serde_json::to_string(snapshot)?)?;
        Ok(())
    }
}

/// WMO weather code to display label.
pub fn weather_label(code: u8) -> &'static str {
    match code {
        0 => "Clear Sky",
        1..=3 => "Partly Cloudy",
        45..=48 => "Foggy",
        51..=55 => "Drizzle",
        61..=67 => "Rain",
        71..=77 => "Snow",
        95.. => "Thunderstorm",
        _ => "Unknown",
    }
}

/// Snapshot served when no live data is reachable.
pub fn offline_fallback() -> WeatherSnapshot {
    WeatherSnapshot {
        temperature: 28.0,
        condition: "Sunny (Offline)".to_string(),
        humidity: 60.0,
        wind_speed: 12.0,
        timestamp: Utc::now().timestamp_millis(),
    }
}
