//! Error types and handling for the `WillItRain` engine

use thiserror::Error;

/// Main error type for the `WillItRain` engine
#[derive(Error, Debug)]
pub enum WillItRainError {
    /// A classifier input was not a finite real number
    #[error("Invalid metric '{metric}': {value} is not a finite number")]
    InvalidMetric { metric: &'static str, value: f64 },

    /// The advisory builder was invoked without a forecast record
    #[error("No forecast record available for advisory building")]
    MissingRecord,

    /// Upstream forecast service communication errors
    #[error("API error: {message}")]
    Api { message: String },

    /// Upstream response did not match the expected payload shape
    #[error("Payload error: {message}")]
    Payload { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl WillItRainError {
    /// Create a new invalid-metric error
    pub fn invalid_metric(metric: &'static str, value: f64) -> Self {
        Self::InvalidMetric { metric, value }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new payload error
    pub fn payload<S: Into<String>>(message: S) -> Self {
        Self::Payload {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            WillItRainError::InvalidMetric { metric, .. } => {
                format!("The forecast value for '{metric}' is unusable. Please retry the query.")
            }
            WillItRainError::MissingRecord => {
                "No forecast is loaded yet. Please select a date and location first.".to_string()
            }
            WillItRainError::Api { .. } => {
                "Unable to reach the forecast service. Please check your internet connection."
                    .to_string()
            }
            WillItRainError::Payload { .. } => {
                "The forecast service returned an unexpected response.".to_string()
            }
            WillItRainError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            WillItRainError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}
