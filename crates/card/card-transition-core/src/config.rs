//! Construction-time configuration for the card transition core.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::state::CardState;

/// How the background blur is written out while a transition runs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlurMode {
    /// The effect switches to the target's effect as soon as the transition
    /// has visibly started and back to the source effect at zero progress.
    #[default]
    Discrete,
    /// The effect carries a ramped intensity in `[0, 1]`.
    Continuous,
}

/// Geometry and timing of the card panel. Fixed once a controller is built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Height of the container view the card slides in.
    pub view_height: f32,
    /// Full height of the card.
    pub card_height: f32,
    /// Height of the grab handle that stays on screen while collapsed.
    pub handle_area_height: f32,
    /// Duration of a full transition, in seconds.
    pub duration: f32,
    /// Corner radius of the expanded card. The collapsed card is square.
    pub corner_radius: f32,
    /// Damping ratio of the height curve (1.0 = critically damped).
    pub height_damping_ratio: f32,
    /// Damping ratio of the blur curve.
    pub blur_damping_ratio: f32,
    pub blur_mode: BlurMode,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            view_height: 800.0,
            card_height: 600.0,
            handle_area_height: 65.0,
            duration: 0.9,
            corner_radius: 12.0,
            height_damping_ratio: 1.0,
            blur_damping_ratio: 1.0,
            blur_mode: BlurMode::Discrete,
        }
    }
}

fn check_finite(field: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite {
            field: field.to_string(),
            value,
        })
    }
}

fn check_positive(field: &str, value: f32) -> Result<(), ConfigError> {
    check_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive {
            field: field.to_string(),
            value,
        })
    }
}

fn check_non_negative(field: &str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative {
            field: field.to_string(),
            value,
        })
    }
}

impl CardConfig {
    /// Parse a (possibly partial) JSON config; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("view_height", self.view_height)?;
        check_positive("card_height", self.card_height)?;
        check_finite("handle_area_height", self.handle_area_height)?;
        check_positive("duration", self.duration)?;
        check_finite("corner_radius", self.corner_radius)?;
        check_positive("height_damping_ratio", self.height_damping_ratio)?;
        check_positive("blur_damping_ratio", self.blur_damping_ratio)?;

        check_non_negative("handle_area_height", self.handle_area_height)?;
        check_non_negative("corner_radius", self.corner_radius)?;
        if self.handle_area_height > self.card_height {
            return Err(ConfigError::HandleTallerThanCard {
                handle: self.handle_area_height,
                card: self.card_height,
            });
        }
        if self.card_height > self.view_height {
            return Err(ConfigError::CardTallerThanView {
                card: self.card_height,
                view: self.view_height,
            });
        }
        Ok(())
    }

    /// Vertical origin (top edge) of the card resting in `state`.
    #[inline]
    pub fn origin_y(&self, state: CardState) -> f32 {
        match state {
            CardState::Expanded => self.view_height - self.card_height,
            CardState::Collapsed => self.view_height - self.handle_area_height,
        }
    }

    #[inline]
    pub fn corner_radius_for(&self, state: CardState) -> f32 {
        match state {
            CardState::Expanded => self.corner_radius,
            CardState::Collapsed => 0.0,
        }
    }

    /// Blur intensity of the background behind a card resting in `state`.
    #[inline]
    pub fn blur_intensity_for(&self, state: CardState) -> f32 {
        match state {
            CardState::Expanded => 1.0,
            CardState::Collapsed => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        CardConfig::default().validate().expect("default config");
    }

    #[test]
    fn resting_geometry() {
        let cfg = CardConfig::default();
        assert_eq!(cfg.origin_y(CardState::Expanded), 200.0);
        assert_eq!(cfg.origin_y(CardState::Collapsed), 735.0);
        assert_eq!(cfg.corner_radius_for(CardState::Expanded), 12.0);
        assert_eq!(cfg.corner_radius_for(CardState::Collapsed), 0.0);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg = CardConfig::from_json(r#"{ "view_height": 900.0, "blur_mode": "continuous" }"#)
            .expect("partial config");
        assert_eq!(cfg.view_height, 900.0);
        assert_eq!(cfg.card_height, 600.0);
        assert_eq!(cfg.blur_mode, BlurMode::Continuous);
    }

    #[test]
    fn rejects_zero_duration() {
        let cfg = CardConfig {
            duration: 0.0,
            ..CardConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NonPositive { ref field, .. }) if field == "duration"
        ));
    }

    #[test]
    fn rejects_handle_taller_than_card() {
        let cfg = CardConfig {
            handle_area_height: 650.0,
            ..CardConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::HandleTallerThanCard { .. })
        ));
    }

    #[test]
    fn rejects_card_taller_than_view() {
        let err = CardConfig::from_json(r#"{ "view_height": 500.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::CardTallerThanView { .. }));
    }

    #[test]
    fn rejects_nan_and_negative_radius() {
        let cfg = CardConfig {
            card_height: f32::NAN,
            ..CardConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::NotFinite { .. })));

        let cfg = CardConfig {
            corner_radius: -1.0,
            ..CardConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::Negative { ref field, .. }) if field == "corner_radius"
        ));
    }
}
