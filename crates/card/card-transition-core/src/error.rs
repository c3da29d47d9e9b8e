//! Error types for the card transition core.
//!
//! Gesture handling never fails (out-of-order input degrades to a no-op), so
//! the only fallible surface is building a [`CardConfig`](crate::CardConfig).

use serde::{Deserialize, Serialize};

/// Rejected configuration values.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ConfigError {
    /// A length, duration or ratio is NaN or infinite
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: String, value: f32 },

    /// A length, duration or ratio that must be strictly positive is not
    #[error("{field} must be greater than zero, got {value}")]
    NonPositive { field: String, value: f32 },

    /// A length that may be zero is below zero
    #[error("{field} must not be negative, got {value}")]
    Negative { field: String, value: f32 },

    /// Handle area does not fit inside the card
    #[error("handle_area_height {handle} exceeds card_height {card}")]
    HandleTallerThanCard { handle: f32, card: f32 },

    /// Card does not fit inside the container view
    #[error("card_height {card} exceeds view_height {view}")]
    CardTallerThanView { card: f32, view: f32 },

    /// Configuration JSON could not be parsed
    #[error("config parse error: {reason}")]
    Parse { reason: String },
}

impl ConfigError {
    /// Error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::NotFinite { .. } | Self::NonPositive { .. } => "value",
            Self::Negative { .. }
            | Self::HandleTallerThanCard { .. }
            | Self::CardTallerThanView { .. } => "geometry",
            Self::Parse { .. } => "parse",
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            reason: err.to_string(),
        }
    }
}

/// Rejected scripted sessions.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SessionError {
    /// Session JSON could not be parsed
    #[error("session parse error: {reason}")]
    Parse { reason: String },

    /// The session embeds a config that does not validate
    #[error("session config: {0}")]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories() {
        let err = ConfigError::NonPositive {
            field: "duration".into(),
            value: 0.0,
        };
        assert_eq!(err.category(), "value");

        let err = ConfigError::HandleTallerThanCard {
            handle: 700.0,
            card: 600.0,
        };
        assert_eq!(err.category(), "geometry");
    }

    #[test]
    fn json_errors_become_parse_errors() {
        let err: ConfigError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(err.category(), "parse");
    }

    #[test]
    fn session_errors_wrap_config_errors() {
        let err: SessionError = ConfigError::Parse {
            reason: "eof".into(),
        }
        .into();
        assert_eq!(err.to_string(), "session config: config parse error: eof");
    }

    #[test]
    fn message_names_the_field() {
        let err = ConfigError::NotFinite {
            field: "card_height".into(),
            value: f32::NAN,
        };
        assert!(err.to_string().starts_with("card_height must be finite"));
    }
}
