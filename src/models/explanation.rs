//! Explanation map keyed by forecast metric
//!
//! The upstream service may attach a short human-readable explanation to any
//! forecast metric, plus a free-form list of general tips. A missing key is a
//! normal state, not an error, so every lookup is explicitly optional.

use serde::{Deserialize, Serialize};

/// The closed set of metrics an explanation can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricKey {
    Temperature,
    TemperatureMax,
    TemperatureMin,
    Precipitation,
    SnowPrecipitation,
    Humidity,
    Uv,
    Wind,
}

impl MetricKey {
    /// Every key, in record-field order.
    pub const ALL: [MetricKey; 8] = [
        MetricKey::Temperature,
        MetricKey::TemperatureMax,
        MetricKey::TemperatureMin,
        MetricKey::Precipitation,
        MetricKey::SnowPrecipitation,
        MetricKey::Humidity,
        MetricKey::Uv,
        MetricKey::Wind,
    ];

    /// The metric name used by the upstream explanation object.
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            MetricKey::Temperature => "temperatura",
            MetricKey::TemperatureMax => "temperatura_max",
            MetricKey::TemperatureMin => "temperatura_min",
            MetricKey::Precipitation => "precipitacao",
            MetricKey::SnowPrecipitation => "precipitacao_neve",
            MetricKey::Humidity => "umidade",
            MetricKey::Uv => "uv",
            MetricKey::Wind => "vento",
        }
    }
}

/// Per-metric explanation text plus general tips for one forecast response.
///
/// Read-only after construction; shares the lifetime of the record it was
/// delivered with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplanationMap {
    temperature: Option<String>,
    temperature_max: Option<String>,
    temperature_min: Option<String>,
    precipitation: Option<String>,
    snow_precipitation: Option<String>,
    humidity: Option<String>,
    uv: Option<String>,
    wind: Option<String>,
    general_tips: Vec<String>,
}

impl ExplanationMap {
    /// Create an empty map (no explanations, no tips).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the explanation text for a metric. Blank text is dropped and
    /// later writes to an occupied key are ignored, so the first non-blank
    /// wire spelling wins during parsing.
    pub fn set(&mut self, key: MetricKey, text: impl Into<String>) {
        let text = text.into();
        if text.trim().is_empty() {
            return;
        }
        let slot = self.slot_mut(key);
        if slot.is_none() {
            *slot = Some(text);
        }
    }

    /// Explanation snippet for a metric, trimmed. Blank or missing text
    /// yields `None`.
    #[must_use]
    pub fn snippet(&self, key: MetricKey) -> Option<&str> {
        self.slot(key)
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    /// Append a general tip. Blank tips are dropped.
    pub fn push_general_tip(&mut self, tip: impl Into<String>) {
        let tip = tip.into();
        if !tip.trim().is_empty() {
            self.general_tips.push(tip);
        }
    }

    /// The free-form general tips, in delivery order.
    #[must_use]
    pub fn general_tips(&self) -> &[String] {
        &self.general_tips
    }

    /// True when no metric has an explanation and there are no tips.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.general_tips.is_empty()
            && MetricKey::ALL.iter().all(|key| self.snippet(*key).is_none())
    }

    fn slot(&self, key: MetricKey) -> &Option<String> {
        match key {
            MetricKey::Temperature => &self.temperature,
            MetricKey::TemperatureMax => &self.temperature_max,
            MetricKey::TemperatureMin => &self.temperature_min,
            MetricKey::Precipitation => &self.precipitation,
            MetricKey::SnowPrecipitation => &self.snow_precipitation,
            MetricKey::Humidity => &self.humidity,
            MetricKey::Uv => &self.uv,
            MetricKey::Wind => &self.wind,
        }
    }

    fn slot_mut(&mut self, key: MetricKey) -> &mut Option<String> {
        match key {
            MetricKey::Temperature => &mut self.temperature,
            MetricKey::TemperatureMax => &mut self.temperature_max,
            MetricKey::TemperatureMin => &mut self.temperature_min,
            MetricKey::Precipitation => &mut self.precipitation,
            MetricKey::SnowPrecipitation => &mut self.snow_precipitation,
            MetricKey::Humidity => &mut self.humidity,
            MetricKey::Uv => &mut self.uv,
            MetricKey::Wind => &mut self.wind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_map_has_no_snippets() {
        let map = ExplanationMap::new();
        assert!(map.is_empty());
        for key in MetricKey::ALL {
            assert_eq!(map.snippet(key), None);
        }
        assert!(map.general_tips().is_empty());
    }

    #[test]
    fn test_set_and_lookup() {
        let mut map = ExplanationMap::new();
        map.set(MetricKey::Humidity, "muito seco");
        assert_eq!(map.snippet(MetricKey::Humidity), Some("muito seco"));
        assert_eq!(map.snippet(MetricKey::Wind), None);
        assert!(!map.is_empty());
    }

    #[test]
    fn test_first_write_wins() {
        let mut map = ExplanationMap::new();
        map.set(MetricKey::Temperature, "calor intenso");
        map.set(MetricKey::Temperature, "outro texto");
        assert_eq!(map.snippet(MetricKey::Temperature), Some("calor intenso"));
    }

    #[test]
    fn test_blank_text_is_absent() {
        let mut map = ExplanationMap::new();
        map.set(MetricKey::Wind, "   ");
        assert_eq!(map.snippet(MetricKey::Wind), None);
        assert!(map.is_empty());
    }

    #[test]
    fn test_snippet_is_trimmed() {
        let mut map = ExplanationMap::new();
        map.set(MetricKey::Precipitation, "  chuva fraca  ");
        assert_eq!(map.snippet(MetricKey::Precipitation), Some("chuva fraca"));
    }

    #[test]
    fn test_general_tips_skip_blank_entries() {
        let mut map = ExplanationMap::new();
        map.push_general_tip("Leve guarda-chuva");
        map.push_general_tip("");
        map.push_general_tip("Use protetor solar");
        assert_eq!(
            map.general_tips(),
            &[
                "Leve guarda-chuva".to_string(),
                "Use protetor solar".to_string()
            ]
        );
    }

    #[test]
    fn test_wire_names_are_stable() {
        assert_eq!(MetricKey::Humidity.wire_name(), "umidade");
        assert_eq!(MetricKey::SnowPrecipitation.wire_name(), "precipitacao_neve");
        assert_eq!(MetricKey::TemperatureMax.wire_name(), "temperatura_max");
    }
}
