//! Presentation adapter boundary
//!
//! Maps classification tiers to stable rendering tokens. The frontend picks
//! the concrete color/icon per token; nothing here carries further logic, so
//! each mapping is a plain total lookup.

use crate::classify::{HumidityTier, SnowTier, TemperatureTier};

/// Rendering token for a temperature tier.
#[must_use]
pub fn temperature_token(tier: TemperatureTier) -> &'static str {
    match tier {
        TemperatureTier::VeryHot => "alert",
        TemperatureTier::Hot => "warm",
        TemperatureTier::Mild => "fresh",
        TemperatureTier::Cold => "cool",
    }
}

/// Rendering token for a humidity tier.
#[must_use]
pub fn humidity_token(tier: HumidityTier) -> &'static str {
    match tier {
        HumidityTier::Low => "alert",
        HumidityTier::Transition => "caution",
        HumidityTier::Comfortable => "ok",
    }
}

/// Rendering token for a snow tier.
#[must_use]
pub fn snow_token(tier: SnowTier) -> &'static str {
    match tier {
        SnowTier::Deep => "deep",
        SnowTier::Moderate => "moderate",
        SnowTier::Shallow => "shallow",
        SnowTier::None => "none",
    }
}
