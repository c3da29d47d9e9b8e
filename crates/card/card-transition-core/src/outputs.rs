//! Output contracts from the transition controller.
//!
//! Outputs carry the property values written during one `handle`/`update`
//! call and a separate list of semantic events. A render collaborator either
//! reads `changes` directly or implements [`RenderTarget`] and calls
//! [`Outputs::apply_to`].

use serde::{Deserialize, Serialize};

use crate::state::CardState;

/// The three coupled properties driven by a transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardProperty {
    /// Vertical origin (top edge) of the card panel.
    CardOriginY,
    CornerRadius,
    /// Background blur behind the card.
    Blur,
}

impl CardProperty {
    pub const ALL: [CardProperty; 3] = [Self::CardOriginY, Self::CornerRadius, Self::Blur];

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::CardOriginY => "card_origin_y",
            Self::CornerRadius => "corner_radius",
            Self::Blur => "blur",
        }
    }
}

/// Background effect behind the card.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum BlurEffect {
    None,
    /// Dark blur; `intensity` is 1.0 unless continuous blur is configured.
    Dark { intensity: f32 },
}

impl BlurEffect {
    /// Effect for a blur intensity; zero (or below) means no effect.
    #[inline]
    pub fn from_intensity(intensity: f32) -> Self {
        if intensity > 0.0 {
            Self::Dark {
                intensity: intensity.min(1.0),
            }
        } else {
            Self::None
        }
    }

    #[inline]
    pub fn intensity(&self) -> f32 {
        match self {
            Self::None => 0.0,
            Self::Dark { intensity } => *intensity,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyValue {
    Scalar(f32),
    Blur(BlurEffect),
}

impl PropertyValue {
    /// Scalar payload, or the blur intensity for blur values.
    #[inline]
    pub fn as_f32(&self) -> f32 {
        match self {
            Self::Scalar(v) => *v,
            Self::Blur(effect) => effect.intensity(),
        }
    }
}

/// One property value written this call.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Change {
    pub property: CardProperty,
    pub value: PropertyValue,
}

/// Discrete semantic signals emitted while handling gestures and ticks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum TransitionEvent {
    /// A fresh animation set was created towards `target`.
    TransitionStarted { target: CardState },
    /// The in-flight transition was frozen for scrubbing at `fraction`.
    Interrupted { fraction: f32 },
    /// The transition was scrubbed to `fraction` (unclamped, as requested).
    Scrubbed { fraction: f32 },
    /// The transition was released to finish on its own.
    Resumed,
    /// The target was reached; the card now rests in `state`.
    TransitionCompleted { state: CardState },
}

/// Property setters owned by the render collaborator.
pub trait RenderTarget {
    fn set_card_origin_y(&mut self, y: f32);
    fn set_corner_radius(&mut self, radius: f32);
    fn set_blur(&mut self, effect: BlurEffect);
}

/// Outputs returned by `CardTransitionController::handle` and `update`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub changes: Vec<Change>,
    #[serde(default)]
    pub events: Vec<TransitionEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.changes.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_change(&mut self, change: Change) {
        self.changes.push(change);
    }

    #[inline]
    pub fn push_event(&mut self, event: TransitionEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.events.is_empty()
    }

    /// Last value written for `property`, if any.
    pub fn latest(&self, property: CardProperty) -> Option<PropertyValue> {
        self.changes
            .iter()
            .rev()
            .find(|c| c.property == property)
            .map(|c| c.value)
    }

    /// Replay every change, in order, onto a render target.
    pub fn apply_to(&self, target: &mut dyn RenderTarget) {
        for change in &self.changes {
            match (change.property, change.value) {
                (CardProperty::CardOriginY, PropertyValue::Scalar(y)) => {
                    target.set_card_origin_y(y)
                }
                (CardProperty::CornerRadius, PropertyValue::Scalar(r)) => {
                    target.set_corner_radius(r)
                }
                (CardProperty::Blur, PropertyValue::Blur(effect)) => target.set_blur(effect),
                (CardProperty::Blur, PropertyValue::Scalar(intensity)) => {
                    target.set_blur(BlurEffect::from_intensity(intensity))
                }
                (property, value) => {
                    log::warn!("apply_to: {} cannot take {:?}; skipping", property.name(), value);
                }
            }
        }
    }
}
