//! Forecast service client and wire contract
//!
//! This module is the external-collaborator boundary: it fetches one
//! forecast payload per call from the upstream service and converts it into
//! the validated in-memory values the core works with. No retries and no
//! caching happen here; a failed fetch is surfaced to the caller as-is.

use std::time::Duration;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::Result;
use crate::config::WillItRainConfig;
use crate::error::WillItRainError;
use crate::models::{ExplanationMap, ForecastRecord};

pub use wire::{ForecastPayload, ForecastResponse};

/// Location/date parameters for one forecast request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastQuery {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Calendar date of the forecast
    pub date: NaiveDate,
}

impl ForecastQuery {
    /// Query-string pairs in the form the service expects.
    #[must_use]
    pub fn query_params(&self) -> [(&'static str, String); 3] {
        [
            ("latitude", self.latitude.to_string()),
            ("longitude", self.longitude.to_string()),
            ("data", self.date.format("%Y-%m-%d").to_string()),
        ]
    }
}

/// HTTP client for the forecast service.
pub struct ForecastApiClient {
    client: reqwest::Client,
    config: WillItRainConfig,
}

impl ForecastApiClient {
    /// Create a new forecast API client.
    pub fn new(config: WillItRainConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.api.timeout_seconds.into());

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent("WillItRain/0.1.0")
            .build()
            .map_err(|e| WillItRainError::api(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Fetch the forecast for a location and date, returning the validated
    /// record together with its explanation map.
    pub async fn fetch_forecast(
        &self,
        query: &ForecastQuery,
    ) -> Result<(ForecastRecord, ExplanationMap)> {
        let url = format!("{}/get", self.config.api.base_url);
        info!(
            "Fetching forecast for {:.4}, {:.4} on {}",
            query.latitude, query.longitude, query.date
        );
        debug!("Forecast request URL: {}", url);

        let response = self
            .client
            .get(&url)
            .query(&query.query_params())
            .send()
            .await
            .map_err(|e| WillItRainError::api(format!("Forecast request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WillItRainError::api(format!(
                "Forecast service returned status {status}"
            )));
        }

        let payload: wire::ForecastResponse = response
            .json()
            .await
            .map_err(|e| WillItRainError::payload(format!("Failed to parse forecast response: {e}")))?;

        payload.into_domain()
    }
}

/// Forecast service response structures and conversion into domain values
mod wire {
    use std::collections::HashMap;

    use serde::Deserialize;
    use serde_json::Value;

    use crate::Result;
    use crate::models::{ExplanationMap, ForecastRecord, MetricKey};

    /// Top-level response from the forecast service `/get` endpoint
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        /// Predicted metric values
        pub dados: ForecastPayload,
        /// Per-metric explanation texts and general tips
        #[serde(default)]
        pub explicacao: Option<HashMap<String, Value>>,
    }

    /// Predicted forecast values as named on the wire.
    ///
    /// The service also echoes `data`, `latitude` and `longitude` back in
    /// this object; those are ignored here.
    #[derive(Debug, Deserialize)]
    pub struct ForecastPayload {
        #[serde(rename = "temperatura_previsto")]
        pub temperature_mean: f64,
        #[serde(rename = "temperatura_max_previsto")]
        pub temperature_max: f64,
        #[serde(rename = "temperatura_min_previsto")]
        pub temperature_min: f64,
        #[serde(rename = "precipitacao_previsto")]
        pub precipitation_mm: f64,
        #[serde(rename = "precipitacao_neve_previsto")]
        pub snow_precipitation_mm: f64,
        #[serde(rename = "umidade_previsto")]
        pub humidity_pct: f64,
        #[serde(rename = "uv_previsto")]
        pub uv_index: f64,
        #[serde(rename = "vento_previsto")]
        pub wind_speed_kmh: f64,
    }

    impl ForecastResponse {
        /// Convert the wire payload into validated domain values.
        pub fn into_domain(self) -> Result<(ForecastRecord, ExplanationMap)> {
            let record = self.dados.into_record()?;
            let explanations = self
                .explicacao
                .as_ref()
                .map(explanation_from_wire)
                .unwrap_or_default();
            Ok((record, explanations))
        }
    }

    impl ForecastPayload {
        /// Build the validated forecast record.
        pub fn into_record(self) -> Result<ForecastRecord> {
            ForecastRecord::new(
                self.temperature_mean,
                self.temperature_max,
                self.temperature_min,
                self.precipitation_mm,
                self.snow_precipitation_mm,
                self.humidity_pct,
                self.uv_index,
                self.wind_speed_kmh,
            )
        }
    }

    /// Merge the explanation object into the fixed-key map.
    ///
    /// The service historically used two spellings per metric: the short
    /// metric name (`umidade`) and the record-field alias
    /// (`umidade_previsto`). Both land in the same slot; the short name is
    /// checked first and the first non-blank text wins.
    fn explanation_from_wire(raw: &HashMap<String, Value>) -> ExplanationMap {
        let mut map = ExplanationMap::new();

        for key in MetricKey::ALL {
            let short = key.wire_name();
            let alias = format!("{short}_previsto");
            for name in [short, alias.as_str()] {
                if let Some(Value::String(text)) = raw.get(name) {
                    map.set(key, text.clone());
                }
            }
        }

        if let Some(Value::Array(tips)) = raw.get("dicas_gerais") {
            for tip in tips {
                if let Some(Value::String(text)) = tip.get("dica") {
                    map.push_general_tip(text.clone());
                }
            }
        }

        map
    }
}
