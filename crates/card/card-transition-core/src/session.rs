//! Scripted gesture sessions.
//!
//! A session is a JSON-friendly list of gesture events and clock ticks played
//! against a fresh controller. Used by fixture-driven tests, the demo and the
//! benches to replay realistic drags without a platform recognizer.

use serde::{Deserialize, Serialize};

use crate::config::CardConfig;
use crate::controller::CardTransitionController;
use crate::error::{ConfigError, SessionError};
use crate::inputs::GestureEvent;
use crate::machine::Mode;
use crate::outputs::{Change, TransitionEvent};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStep {
    Gesture(GestureEvent),
    /// One frame tick of `dt` seconds.
    Tick { dt: f32 },
    /// Tick by `dt` until the controller is idle, at most `max_ticks` times.
    Settle { dt: f32, max_ticks: u32 },
}

/// Expected controller state after a session has been played.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionExpectation {
    pub is_card_visible: bool,
    pub running_animations: usize,
    #[serde(default)]
    pub progress_when_interrupted: Option<f32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub name: String,
    #[serde(default)]
    pub config: Option<CardConfig>,
    pub steps: Vec<SessionStep>,
    #[serde(default)]
    pub expect: Option<SessionExpectation>,
}

/// What happened while a session was played.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SessionReport {
    pub ticks: u32,
    pub events: Vec<TransitionEvent>,
    /// Most recent property values, one per property that was written.
    pub last_changes: Vec<Change>,
    pub is_card_visible: bool,
    pub running_animations: usize,
    pub progress_when_interrupted: f32,
    pub max_running_animations: usize,
}

impl Session {
    /// Parse a session; an embedded config is validated here as well.
    pub fn from_json(json: &str) -> Result<Self, SessionError> {
        let session: Self = serde_json::from_str(json).map_err(|err| SessionError::Parse {
            reason: err.to_string(),
        })?;
        if let Some(cfg) = &session.config {
            cfg.validate()?;
        }
        Ok(session)
    }

    /// Build a controller from the session's config (or the default one).
    pub fn controller(&self) -> Result<CardTransitionController, ConfigError> {
        CardTransitionController::new(self.config.clone().unwrap_or_default())
    }

    /// Play the session on a fresh controller.
    pub fn run(&self) -> Result<SessionReport, ConfigError> {
        let mut ctl = self.controller()?;
        Ok(self.play(&mut ctl))
    }

    /// Play the session on an existing controller.
    pub fn play(&self, ctl: &mut CardTransitionController) -> SessionReport {
        let mut report = SessionReport::default();
        for step in &self.steps {
            match *step {
                SessionStep::Gesture(event) => {
                    let out = ctl.handle(event);
                    report.record(out.events.iter().cloned(), &out.changes);
                }
                SessionStep::Tick { dt } => {
                    let out = ctl.update(dt);
                    report.ticks += 1;
                    report.record(out.events.iter().cloned(), &out.changes);
                }
                SessionStep::Settle { dt, max_ticks } => {
                    let mut n = 0;
                    while ctl.mode() != Mode::Idle && n < max_ticks {
                        let out = ctl.update(dt);
                        report.ticks += 1;
                        n += 1;
                        report.record(out.events.iter().cloned(), &out.changes);
                    }
                    if ctl.mode() != Mode::Idle {
                        log::warn!(
                            "session '{}': not settled after {} ticks ({:?})",
                            self.name,
                            max_ticks,
                            ctl.mode()
                        );
                    }
                }
            }
            report.max_running_animations = report
                .max_running_animations
                .max(ctl.running_animations());
        }
        report.is_card_visible = ctl.is_card_visible();
        report.running_animations = ctl.running_animations();
        report.progress_when_interrupted = ctl.progress_when_interrupted();
        report
    }
}

impl SessionReport {
    fn record<I>(&mut self, events: I, changes: &[Change])
    where
        I: IntoIterator<Item = TransitionEvent>,
    {
        self.events.extend(events);
        for change in changes {
            match self
                .last_changes
                .iter_mut()
                .find(|c| c.property == change.property)
            {
                Some(slot) => *slot = *change,
                None => self.last_changes.push(*change),
            }
        }
    }

    /// Mismatches against `expect`, one message per differing field.
    pub fn mismatches(&self, expect: &SessionExpectation) -> Vec<String> {
        let mut out = Vec::new();
        if self.is_card_visible != expect.is_card_visible {
            out.push(format!(
                "is_card_visible: expected {}, got {}",
                expect.is_card_visible, self.is_card_visible
            ));
        }
        if self.running_animations != expect.running_animations {
            out.push(format!(
                "running_animations: expected {}, got {}",
                expect.running_animations, self.running_animations
            ));
        }
        if let Some(baseline) = expect.progress_when_interrupted {
            if (self.progress_when_interrupted - baseline).abs() > 1e-3 {
                out.push(format!(
                    "progress_when_interrupted: expected {baseline}, got {}",
                    self.progress_when_interrupted
                ));
            }
        }
        out
    }

    /// Number of completed transitions seen during the session.
    pub fn completions(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, TransitionEvent::TransitionCompleted { .. }))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_session_is_a_session_parse_error() {
        let err = Session::from_json(r#"{ "name": "broken", "steps": [ { "tick": {} } ] }"#)
            .unwrap_err();
        assert!(matches!(err, SessionError::Parse { .. }));
        assert!(err.to_string().starts_with("session parse error"), "{err}");
    }

    #[test]
    fn embedded_config_is_validated() {
        let err = Session::from_json(
            r#"{ "name": "tiny", "config": { "card_height": 900.0 }, "steps": [] }"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SessionError::Config(ConfigError::CardTallerThanView { .. })
        ));
    }

    #[test]
    fn minimal_session_plays() {
        let session = Session::from_json(
            r#"{
                "name": "grab",
                "steps": [
                    { "gesture": { "phase": "pan_began" } },
                    { "gesture": { "phase": "pan_ended" } },
                    { "settle": { "dt": 0.05, "max_ticks": 100 } }
                ]
            }"#,
        )
        .expect("session");
        let report = session.run().expect("default config");
        assert!(report.is_card_visible);
        assert_eq!(report.completions(), 1);
        assert_eq!(report.max_running_animations, 3);
    }
}
