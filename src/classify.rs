//! Metric classification engine
//!
//! Maps continuous forecast values onto discrete severity tiers. Every
//! function here is pure and total over the finite reals: any finite input
//! lands in exactly one tier, while NaN and infinities are rejected up front
//! instead of being coerced into a default band.
//!
//! The guard chains are ordered and the first match wins. The boundaries are
//! deliberate and must not be refactored into independent range checks: the
//! humidity scale maps two disjoint physical ranges onto the same tier, and
//! the exact cutoff values (10, 20, 30 for temperature; 30, 40, 60 for
//! humidity; 5, 20 for snow) each belong to a specific side.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::error::WillItRainError;
use crate::models::ForecastRecord;

/// Temperature severity tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureTier {
    /// Above 30°C
    VeryHot,
    /// 20°C to 30°C inclusive
    Hot,
    /// 10°C inclusive to 20°C exclusive
    Mild,
    /// Below 10°C
    Cold,
}

/// Relative humidity comfort tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HumidityTier {
    /// Below 30%
    Low,
    /// 30-40% or above 60% — two disjoint ranges share this tier
    Transition,
    /// 40% to 60% inclusive
    Comfortable,
}

/// Snow depth tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnowTier {
    /// No snow cover (zero or negative reading)
    None,
    /// Up to 5 inclusive
    Shallow,
    /// Above 5 up to 20 inclusive
    Moderate,
    /// Above 20
    Deep,
}

impl SnowTier {
    /// Human-facing depth label, as shown on the results page.
    #[must_use]
    pub fn depth_label(self) -> &'static str {
        match self {
            SnowTier::Deep => "Profunda (> 20 cm)",
            SnowTier::Moderate => "Moderada (5-20 cm)",
            SnowTier::Shallow => "Rasa (< 5 cm)",
            SnowTier::None => "Nenhuma",
        }
    }
}

/// Classify a temperature reading in Celsius.
///
/// Exactly 30 is `Hot`, exactly 20 is `Hot`, exactly 10 is `Mild`.
pub fn classify_temperature(t: f64) -> Result<TemperatureTier> {
    let t = require_finite("temperature", t)?;
    let tier = match t {
        t if t > 30.0 => TemperatureTier::VeryHot,
        t if t >= 20.0 => TemperatureTier::Hot,
        t if t >= 10.0 => TemperatureTier::Mild,
        _ => TemperatureTier::Cold,
    };
    Ok(tier)
}

/// Classify a relative humidity reading in percent.
///
/// Exactly 40 and exactly 60 are `Comfortable`, not `Transition`. The final
/// arm covers both the 60-70 band and everything above 70, which share the
/// `Transition` tier.
pub fn classify_humidity(h: f64) -> Result<HumidityTier> {
    let h = require_finite("humidity", h)?;
    let tier = match h {
        h if h < 30.0 => HumidityTier::Low,
        h if h < 40.0 => HumidityTier::Transition,
        h if h <= 60.0 => HumidityTier::Comfortable,
        _ => HumidityTier::Transition,
    };
    Ok(tier)
}

/// Classify a snow precipitation reading.
///
/// Exactly 20 is `Moderate`, exactly 5 is `Shallow`; zero and negative
/// readings are `None`.
pub fn classify_snow_depth(s: f64) -> Result<SnowTier> {
    let s = require_finite("snow_precipitation", s)?;
    let tier = match s {
        s if s > 20.0 => SnowTier::Deep,
        s if s > 5.0 => SnowTier::Moderate,
        s if s > 0.0 => SnowTier::Shallow,
        _ => SnowTier::None,
    };
    Ok(tier)
}

fn require_finite(metric: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(WillItRainError::invalid_metric(metric, value))
    }
}

/// Per-metric classification of a whole forecast record.
///
/// Derived on demand, never stored; recomputing from the same record always
/// yields the same tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordCategories {
    /// Tier for the mean temperature
    pub temperature: TemperatureTier,
    /// Tier for the maximum temperature
    pub temperature_max: TemperatureTier,
    /// Tier for the minimum temperature
    pub temperature_min: TemperatureTier,
    /// Tier for the relative humidity
    pub humidity: HumidityTier,
    /// Tier for the snow precipitation
    pub snow_depth: SnowTier,
}

impl RecordCategories {
    /// Classify every tiered metric of a record.
    pub fn classify(record: &ForecastRecord) -> Result<Self> {
        Ok(Self {
            temperature: classify_temperature(record.temperature_mean)?,
            temperature_max: classify_temperature(record.temperature_max)?,
            temperature_min: classify_temperature(record.temperature_min)?,
            humidity: classify_humidity(record.humidity_pct)?,
            snow_depth: classify_snow_depth(record.snow_precipitation_mm)?,
        })
    }
}

impl fmt::Display for TemperatureTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemperatureTier::VeryHot => write!(f, "Very hot"),
            TemperatureTier::Hot => write!(f, "Hot"),
            TemperatureTier::Mild => write!(f, "Mild"),
            TemperatureTier::Cold => write!(f, "Cold"),
        }
    }
}

impl fmt::Display for HumidityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HumidityTier::Low => write!(f, "Low"),
            HumidityTier::Transition => write!(f, "Transition"),
            HumidityTier::Comfortable => write!(f, "Comfortable"),
        }
    }
}

impl fmt::Display for SnowTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.depth_label())
    }
}
