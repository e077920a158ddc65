//! BMKG Forecast Client - reshapes the public maritime feed.
//!
//! Fetches the per-sea-area JSON published by BMKG's peta-maritim service
//! and maps it onto the [`ForecastOverview`] shape the dashboard consumes.
//! Missing fields degrade to the published fallbacks rather than failing
//! the whole overview.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::ports::{ForecastClient, ForecastError, ForecastOverview, ForecastPeriod};

const FALLBACK_WAVE_DESC: &str = "Tidak tersedia";
const FALLBACK_WIND_DIR: &str = "N/A";

/// Configuration for the BMKG client.
#[derive(Debug, Clone)]
pub struct BmkgConfig {
    /// Full feed URL for one sea area.
    pub feed_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl BmkgConfig {
    pub fn new(feed_url: impl Into<String>) -> Self {
        Self {
            feed_url: feed_url.into(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// Raw feed shapes; every field may be absent in practice.

#[derive(Debug, Deserialize)]
struct FeedPayload {
    name: Option<String>,
    issued: Option<String>,
    data: Option<Vec<FeedPeriod>>,
}

#[derive(Debug, Deserialize)]
struct FeedPeriod {
    wave_desc: Option<String>,
    wind_from: Option<String>,
    wind_to: Option<String>,
    wind_speed_min: Option<f64>,
    wind_speed_max: Option<f64>,
}

impl From<FeedPeriod> for ForecastPeriod {
    fn from(raw: FeedPeriod) -> Self {
        Self {
            wave_desc: raw.wave_desc.unwrap_or_else(|| FALLBACK_WAVE_DESC.to_string()),
            wind_from: raw.wind_from.unwrap_or_else(|| FALLBACK_WIND_DIR.to_string()),
            wind_to: raw.wind_to.unwrap_or_else(|| FALLBACK_WIND_DIR.to_string()),
            wind_speed_min: raw.wind_speed_min.unwrap_or(0.0),
            wind_speed_max: raw.wind_speed_max.unwrap_or(0.0),
        }
    }
}

/// HTTP client for the BMKG maritime feed.
pub struct BmkgForecastClient {
    config: BmkgConfig,
    client: Client,
}

impl BmkgForecastClient {
    pub fn new(config: BmkgConfig) -> Result<Self, ForecastError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ForecastError::RequestFailed(e.to_string()))?;
        Ok(Self { config, client })
    }

    fn reshape(payload: FeedPayload) -> Result<ForecastOverview, ForecastError> {
        // A payload without the data array is the feed's failure mode.
        let data = payload
            .data
            .ok_or_else(|| ForecastError::InvalidPayload("missing data array".to_string()))?;

        Ok(ForecastOverview {
            name: payload.name.unwrap_or_default(),
            issued: payload.issued.unwrap_or_default(),
            periods: data.into_iter().map(ForecastPeriod::from).collect(),
        })
    }
}

#[async_trait]
impl ForecastClient for BmkgForecastClient {
    async fn fetch_overview(&self) -> Result<ForecastOverview, ForecastError> {
        let response = self
            .client
            .get(&self.config.feed_url)
            .send()
            .await
            .map_err(|e| ForecastError::RequestFailed(e.to_string()))?
            .error_for_status()
            .map_err(|e| ForecastError::RequestFailed(e.to_string()))?;

        let payload: FeedPayload = response
            .json()
            .await
            .map_err(|e| ForecastError::InvalidPayload(e.to_string()))?;

        Self::reshape(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reshape_maps_all_fields() {
        let payload: FeedPayload = serde_json::from_str(
            r#"{
                "name": "Samudera Hindia selatan Jawa Tengah",
                "issued": "2024-01-15 07:00",
                "data": [
                    {
                        "wave_desc": "Tinggi (2.5 - 4.0 m)",
                        "wind_from": "Barat Daya",
                        "wind_to": "Selatan",
                        "wind_speed_min": 20,
                        "wind_speed_max": 25
                    }
                ]
            }"#,
        )
        .unwrap();

        let overview = BmkgForecastClient::reshape(payload).unwrap();
        assert_eq!(overview.name, "Samudera Hindia selatan Jawa Tengah");
        assert_eq!(overview.periods.len(), 1);
        assert_eq!(overview.periods[0].wave_desc, "Tinggi (2.5 - 4.0 m)");
        assert_eq!(overview.periods[0].wind_speed_max, 25.0);
    }

    #[test]
    fn reshape_applies_fallbacks_for_missing_fields() {
        let payload: FeedPayload =
            serde_json::from_str(r#"{"data": [{}]}"#).unwrap();

        let overview = BmkgForecastClient::reshape(payload).unwrap();
        let period = &overview.periods[0];
        assert_eq!(period.wave_desc, "Tidak tersedia");
        assert_eq!(period.wind_from, "N/A");
        assert_eq!(period.wind_to, "N/A");
        assert_eq!(period.wind_speed_min, 0.0);
        assert_eq!(period.wind_speed_max, 0.0);
    }

    #[test]
    fn reshape_rejects_payload_without_data() {
        let payload: FeedPayload = serde_json::from_str(r#"{"name": "X"}"#).unwrap();
        let result = BmkgForecastClient::reshape(payload);
        assert!(matches!(result, Err(ForecastError::InvalidPayload(_))));
    }

    #[test]
    fn reshape_preserves_period_order() {
        let payload: FeedPayload = serde_json::from_str(
            r#"{"data": [
                {"wave_desc": "hari ini"},
                {"wave_desc": "besok"},
                {"wave_desc": "lusa"}
            ]}"#,
        )
        .unwrap();

        let overview = BmkgForecastClient::reshape(payload).unwrap();
        let descs: Vec<&str> = overview
            .periods
            .iter()
            .map(|p| p.wave_desc.as_str())
            .collect();
        assert_eq!(descs, ["hari ini", "besok", "lusa"]);
    }
}
