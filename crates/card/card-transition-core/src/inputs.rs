//! Input contracts for the transition controller.
//!
//! A gesture collaborator (platform recognizer, test script, demo) reports
//! phase transitions of the pan gesture on the card's handle area plus
//! discrete taps. Events are plain data so sessions can be scripted in JSON.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum GestureEvent {
    /// Discrete tap on the handle area.
    Tap,
    /// Finger placed and recognized as a drag.
    PanBegan,
    /// Finger moved; `translation_y` is measured from the drag origin, in the
    /// same units as the card height (positive is downward).
    PanChanged { translation_y: f32 },
    /// Finger lifted.
    PanEnded,
    /// Recognizer gave up on the drag (e.g. an incoming call).
    PanCancelled,
}

impl GestureEvent {
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Tap => "tap",
            Self::PanBegan => "pan_began",
            Self::PanChanged { .. } => "pan_changed",
            Self::PanEnded => "pan_ended",
            Self::PanCancelled => "pan_cancelled",
        }
    }
}
