//! ForecastClient port - Interface to the third-party wave-forecast feed.
//!
//! Consumed by the dashboard surface only. The chat core's weather reply is
//! deliberately static and never calls this port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One forecast period from the feed (day offsets from the issue date).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPeriod {
    /// Wave-height description, e.g. "Sedang (1.25 - 2.5 m)".
    pub wave_desc: String,
    /// Wind direction range start.
    pub wind_from: String,
    /// Wind direction range end.
    pub wind_to: String,
    /// Minimum wind speed in knots.
    pub wind_speed_min: f64,
    /// Maximum wind speed in knots.
    pub wind_speed_max: f64,
}

/// The reshaped feed payload for one sea area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastOverview {
    /// Sea-area name as published by the feed.
    pub name: String,
    /// Issue timestamp as published by the feed.
    pub issued: String,
    /// Ordered forecast periods, today first.
    pub periods: Vec<ForecastPeriod>,
}

/// Errors surfaced by a forecast client.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Forecast request failed: {0}")]
    RequestFailed(String),

    #[error("Forecast feed returned an invalid payload: {0}")]
    InvalidPayload(String),
}

/// Port for fetching the published wave forecast.
#[async_trait]
pub trait ForecastClient: Send + Sync {
    /// Fetches and reshapes the current forecast overview.
    async fn fetch_overview(&self) -> Result<ForecastOverview, ForecastError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn ForecastClient) {}

    #[test]
    fn overview_round_trips_through_json() {
        let overview = ForecastOverview {
            name: "Samudera Hindia selatan Jawa Tengah".to_string(),
            issued: "2024-01-15 07:00".to_string(),
            periods: vec![ForecastPeriod {
                wave_desc: "Tinggi (2.5 - 4.0 m)".to_string(),
                wind_from: "Barat Daya".to_string(),
                wind_to: "Selatan".to_string(),
                wind_speed_min: 20.0,
                wind_speed_max: 25.0,
            }],
        };

        let json = serde_json::to_string(&overview).unwrap();
        let back: ForecastOverview = serde_json::from_str(&json).unwrap();
        assert_eq!(back, overview);
    }
}
