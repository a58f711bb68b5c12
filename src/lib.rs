//! `WillItRain` - Weather advisory derivation engine
//!
//! This library provides the core functionality for classifying forecast
//! metrics into discrete severity tiers and assembling the ordered list of
//! user-facing advisory messages from the upstream explanation payload.

pub mod advisory;
pub mod api;
pub mod classify;
pub mod config;
pub mod error;
pub mod models;
pub mod render;

// Re-export core types for public API
pub use advisory::{AdvisoryList, FAVORABLE_FALLBACK, build_advisories};
pub use api::{ForecastApiClient, ForecastQuery, ForecastResponse};
pub use classify::{
    HumidityTier, RecordCategories, SnowTier, TemperatureTier, classify_humidity,
    classify_snow_depth, classify_temperature,
};
pub use config::WillItRainConfig;
pub use error::WillItRainError;
pub use models::{ExplanationMap, ForecastRecord, MetricKey};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WillItRainError>;
