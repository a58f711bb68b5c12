//! Data models for the advisory engine

pub mod explanation;
pub mod forecast;

pub use explanation::{ExplanationMap, MetricKey};
pub use forecast::ForecastRecord;
