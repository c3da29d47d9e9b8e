//! Card Transition Core (engine-agnostic)
//!
//! Interruptible, gesture-driven transitions of a bottom card panel between a
//! collapsed (handle only) and an expanded position. Three coupled animations
//! (card origin, corner radius, background blur) are started, paused,
//! scrubbed by a drag and released together. The crate draws nothing: hosts
//! feed gesture events and frame ticks and apply the returned property values.

pub mod animation_set;
pub mod animator;
pub mod config;
pub mod controller;
pub mod error;
pub mod inputs;
pub mod machine;
pub mod outputs;
pub mod session;
pub mod state;
pub mod timing;
pub mod tracker;

// Re-exports for consumers (hosts)
pub use animation_set::AnimationSet;
pub use animator::{AnimatorState, PropertyAnimator};
pub use config::{BlurMode, CardConfig};
pub use controller::CardTransitionController;
pub use error::{ConfigError, SessionError};
pub use inputs::GestureEvent;
pub use machine::{Command, Message, Mode, TransitionMachine};
pub use outputs::{
    BlurEffect, CardProperty, Change, Outputs, PropertyValue, RenderTarget, TransitionEvent,
};
pub use session::{Session, SessionExpectation, SessionReport, SessionStep};
pub use state::CardState;
pub use timing::TimingCurve;
pub use tracker::{combined_fraction, fraction_from_translation};
