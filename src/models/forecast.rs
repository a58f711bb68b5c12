//! Forecast record model and display methods

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::error::WillItRainError;

/// One location/date forecast as predicted by the upstream service.
///
/// Constructed once per query result and never mutated afterwards. Every
/// field must be a finite number; construction rejects NaN and infinities
/// instead of letting them reach the classifiers.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ForecastRecord {
    /// Mean temperature in Celsius
    pub temperature_mean: f64,
    /// Maximum temperature in Celsius
    pub temperature_max: f64,
    /// Minimum temperature in Celsius
    pub temperature_min: f64,
    /// Precipitation amount in mm
    pub precipitation_mm: f64,
    /// Snow precipitation amount in mm
    pub snow_precipitation_mm: f64,
    /// Relative humidity percentage (0-100)
    pub humidity_pct: f64,
    /// UV index
    pub uv_index: f64,
    /// Wind speed in km/h
    pub wind_speed_kmh: f64,
}

impl ForecastRecord {
    /// Validate and build a record from raw forecast values.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        temperature_mean: f64,
        temperature_max: f64,
        temperature_min: f64,
        precipitation_mm: f64,
        snow_precipitation_mm: f64,
        humidity_pct: f64,
        uv_index: f64,
        wind_speed_kmh: f64,
    ) -> Result<Self> {
        let record = Self {
            temperature_mean,
            temperature_max,
            temperature_min,
            precipitation_mm,
            snow_precipitation_mm,
            humidity_pct,
            uv_index,
            wind_speed_kmh,
        };
        record.validate()?;
        Ok(record)
    }

    /// Check that every field holds a finite number.
    pub fn validate(&self) -> Result<()> {
        for (metric, value) in self.fields() {
            if !value.is_finite() {
                return Err(WillItRainError::invalid_metric(metric, value));
            }
        }
        Ok(())
    }

    fn fields(&self) -> [(&'static str, f64); 8] {
        [
            ("temperature_mean", self.temperature_mean),
            ("temperature_max", self.temperature_max),
            ("temperature_min", self.temperature_min),
            ("precipitation_mm", self.precipitation_mm),
            ("snow_precipitation_mm", self.snow_precipitation_mm),
            ("humidity_pct", self.humidity_pct),
            ("uv_index", self.uv_index),
            ("wind_speed_kmh", self.wind_speed_kmh),
        ]
    }

    /// Format mean temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{:.1}°C", self.temperature_mean)
    }

    /// Format the max/min temperature span
    #[must_use]
    pub fn format_temperature_range(&self) -> String {
        format!(
            "{:.1}°C / {:.1}°C",
            self.temperature_max, self.temperature_min
        )
    }

    /// Format relative humidity with unit
    #[must_use]
    pub fn format_humidity(&self) -> String {
        format!("{:.0}%", self.humidity_pct)
    }

    /// Format precipitation with unit
    #[must_use]
    pub fn format_precipitation(&self) -> String {
        format!("{:.1} mm", self.precipitation_mm)
    }

    /// Format snow precipitation with unit
    #[must_use]
    pub fn format_snow_precipitation(&self) -> String {
        format!("{:.1} mm", self.snow_precipitation_mm)
    }

    /// Format wind speed with unit
    #[must_use]
    pub fn format_wind(&self) -> String {
        format!("{:.1} km/h", self.wind_speed_kmh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ForecastRecord {
        ForecastRecord::new(32.0, 35.0, 28.0, 0.0, 0.0, 25.0, 9.0, 10.0).unwrap()
    }

    #[test]
    fn test_valid_record_construction() {
        let record = sample_record();
        assert_eq!(record.temperature_mean, 32.0);
        assert_eq!(record.humidity_pct, 25.0);
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_nan_field_rejected() {
        let result = ForecastRecord::new(32.0, 35.0, 28.0, f64::NAN, 0.0, 25.0, 9.0, 10.0);
        match result {
            Err(WillItRainError::InvalidMetric { metric, .. }) => {
                assert_eq!(metric, "precipitation_mm");
            }
            other => panic!("expected InvalidMetric, got {other:?}"),
        }
    }

    #[test]
    fn test_infinite_field_rejected() {
        let result =
            ForecastRecord::new(32.0, 35.0, 28.0, 0.0, 0.0, f64::NEG_INFINITY, 9.0, 10.0);
        assert!(matches!(
            result,
            Err(WillItRainError::InvalidMetric {
                metric: "humidity_pct",
                ..
            })
        ));
    }

    #[test]
    fn test_format_helpers() {
        let record = sample_record();
        assert_eq!(record.format_temperature(), "32.0°C");
        assert_eq!(record.format_humidity(), "25%");
        assert_eq!(record.format_precipitation(), "0.0 mm");
        assert_eq!(record.format_wind(), "10.0 km/h");
    }
}
