//! Error types for the bonus calculator workspace
//!
//! The calculation itself cannot fail. These errors cover the surrounding
//! layers: loading configuration and rendering results.

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum BonusError {
    /// Configuration file present but unreadable or malformed
    #[error("Configuration error: {message}")]
    Configuration { message: String, setting: Option<String> },

    /// Rendering a result or configuration failed
    #[error("Serialization error: {message}")]
    Serialization { message: String, format: Option<String> },
}

impl BonusError {
    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            BonusError::Configuration { .. } => "configuration",
            BonusError::Serialization { .. } => "serialization",
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into(), setting: None }
    }

    pub fn invalid_setting(setting: &str, message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into(), setting: Some(setting.to_string()) }
    }

    pub fn serialization(format: &str, message: impl Into<String>) -> Self {
        Self::Serialization { message: message.into(), format: Some(format.to_string()) }
    }
}

impl From<serde_json::Error> for BonusError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization("json", err.to_string())
    }
}

/// Result type alias for the fallible outer layers
pub type BonusResult<T> = Result<T, BonusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_and_messages() {
        let err = BonusError::invalid_setting("display.format", "expected text or json");
        assert_eq!(err.category(), "configuration");
        assert_eq!(err.to_string(), "Configuration error: expected text or json");

        let err = BonusError::serialization("toml", "unsupported value");
        assert_eq!(err.category(), "serialization");
        assert_eq!(err.to_string(), "Serialization error: unsupported value");
    }

    #[test]
    fn json_errors_convert() {
        let err: BonusError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, BonusError::Serialization { format: Some(ref f), .. } if f == "json"));
    }
}
