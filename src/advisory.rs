//! Advisory assembly
//!
//! Turns the per-metric explanation map into the ordered list of advisory
//! lines shown to the user. The precedence below is fixed: humidity first,
//! wind last, independent of how the upstream response happened to order its
//! keys. When no metric carries an explanation the list still holds exactly
//! one line, the favorable-conditions fallback.

use tracing::debug;

use crate::Result;
use crate::error::WillItRainError;
use crate::models::{ExplanationMap, ForecastRecord, MetricKey};

/// Fallback line emitted when no metric-specific explanation is available.
pub const FAVORABLE_FALLBACK: &str =
    "✨ Condições climáticas favoráveis com bastante umidade! Aproveite seu dia!";

/// Advisory precedence with the label prefix for each metric.
const ADVISORY_ORDER: [(MetricKey, &str); 5] = [
    (MetricKey::Humidity, "💧 Umidade do ar"),
    (MetricKey::Precipitation, "☂️ Precipitação"),
    (MetricKey::Temperature, "🌡️ Temperatura"),
    (MetricKey::SnowPrecipitation, "❄️ Neve"),
    (MetricKey::Wind, "💨 Vento"),
];

/// Ordered advisory lines, non-empty by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisoryList {
    lines: Vec<String>,
}

impl AdvisoryList {
    /// The advisory lines in precedence order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// True when the list holds only the favorable-conditions fallback.
    #[must_use]
    pub fn is_fallback_only(&self) -> bool {
        self.lines.len() == 1 && self.lines[0] == FAVORABLE_FALLBACK
    }

    /// Consume the list, yielding the underlying lines.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.lines
    }
}

impl<'a> IntoIterator for &'a AdvisoryList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// Build the advisory list for a forecast.
///
/// The record itself is a precondition: callers must have a materialized
/// forecast before asking for advisories, and `None` is surfaced as
/// [`WillItRainError::MissingRecord`] instead of a partial result. The lines
/// are derived from the explanation map alone.
pub fn build_advisories(
    record: Option<&ForecastRecord>,
    explanations: &ExplanationMap,
) -> Result<AdvisoryList> {
    let record = record.ok_or(WillItRainError::MissingRecord)?;

    let mut lines = Vec::new();
    for (key, prefix) in ADVISORY_ORDER {
        if let Some(text) = explanations.snippet(key) {
            lines.push(format!("{prefix}: {text}"));
        }
    }

    if lines.is_empty() {
        lines.push(FAVORABLE_FALLBACK.to_string());
    }

    debug!(
        advisory_count = lines.len(),
        temperature = record.temperature_mean,
        humidity = record.humidity_pct,
        "Built advisory list"
    );

    Ok(AdvisoryList { lines })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ForecastRecord {
        ForecastRecord::new(32.0, 35.0, 28.0, 0.0, 0.0, 25.0, 9.0, 10.0).unwrap()
    }

    #[test]
    fn test_missing_record_is_an_error() {
        let explanations = ExplanationMap::new();
        let result = build_advisories(None, &explanations);
        assert!(matches!(result, Err(WillItRainError::MissingRecord)));
    }

    #[test]
    fn test_empty_map_yields_exactly_one_fallback_line() {
        let record = sample_record();
        let advisories = build_advisories(Some(&record), &ExplanationMap::new()).unwrap();

        assert_eq!(advisories.lines().len(), 1);
        assert_eq!(advisories.lines()[0], FAVORABLE_FALLBACK);
        assert!(advisories.is_fallback_only());
    }

    #[test]
    fn test_single_humidity_explanation() {
        let record = sample_record();
        let mut explanations = ExplanationMap::new();
        explanations.set(MetricKey::Humidity, "muito seco");

        let advisories = build_advisories(Some(&record), &explanations).unwrap();

        assert_eq!(
            advisories.lines(),
            &["💧 Umidade do ar: muito seco".to_string()]
        );
        assert!(!advisories.is_fallback_only());
    }

    #[test]
    fn test_precedence_humidity_before_wind() {
        let record = sample_record();
        let mut explanations = ExplanationMap::new();
        // Insert wind first; precedence must still put humidity on top.
        explanations.set(MetricKey::Wind, "rajadas fortes");
        explanations.set(MetricKey::Humidity, "ar seco");

        let advisories = build_advisories(Some(&record), &explanations).unwrap();

        assert_eq!(
            advisories.lines(),
            &[
                "💧 Umidade do ar: ar seco".to_string(),
                "💨 Vento: rajadas fortes".to_string(),
            ]
        );
    }

    #[test]
    fn test_full_precedence_order() {
        let record = sample_record();
        let mut explanations = ExplanationMap::new();
        explanations.set(MetricKey::Temperature, "calor intenso");
        explanations.set(MetricKey::Wind, "vento moderado");
        explanations.set(MetricKey::SnowPrecipitation, "sem neve");
        explanations.set(MetricKey::Precipitation, "chuva fraca");
        explanations.set(MetricKey::Humidity, "abafado");

        let advisories = build_advisories(Some(&record), &explanations).unwrap();

        assert_eq!(
            advisories.lines(),
            &[
                "💧 Umidade do ar: abafado".to_string(),
                "☂️ Precipitação: chuva fraca".to_string(),
                "🌡️ Temperatura: calor intenso".to_string(),
                "❄️ Neve: sem neve".to_string(),
                "💨 Vento: vento moderado".to_string(),
            ]
        );
    }

    #[test]
    fn test_blank_explanations_produce_no_lines() {
        let record = sample_record();
        let mut explanations = ExplanationMap::new();
        explanations.set(MetricKey::Precipitation, "   ");

        let advisories = build_advisories(Some(&record), &explanations).unwrap();
        assert!(advisories.is_fallback_only());
    }

    #[test]
    fn test_inline_only_keys_produce_no_advisory_lines() {
        // Max/min temperature and UV snippets render beside their metric,
        // they never become advisory lines.
        let record = sample_record();
        let mut explanations = ExplanationMap::new();
        explanations.set(MetricKey::TemperatureMax, "pico à tarde");
        explanations.set(MetricKey::TemperatureMin, "madrugada fria");
        explanations.set(MetricKey::Uv, "índice muito alto");

        let advisories = build_advisories(Some(&record), &explanations).unwrap();
        assert!(advisories.is_fallback_only());
    }

    #[test]
    fn test_build_is_idempotent() {
        let record = sample_record();
        let mut explanations = ExplanationMap::new();
        explanations.set(MetricKey::Humidity, "muito seco");
        explanations.set(MetricKey::Wind, "rajadas");

        let first = build_advisories(Some(&record), &explanations).unwrap();
        let second = build_advisories(Some(&record), &explanations).unwrap();
        assert_eq!(first, second);
    }
}
