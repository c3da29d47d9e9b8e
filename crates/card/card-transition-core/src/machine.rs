//! Transition state machine.
//!
//! [`TransitionMachine`] is a plain value; [`TransitionMachine::step`] maps it
//! and one [`Message`] to the next value plus the [`Command`]s the owner must
//! run against the animation set. Results the machine needs back (the pause
//! fraction, the end of the height animation) come in as further messages, so
//! the whole machine is testable without any clock.

use serde::{Deserialize, Serialize};

use crate::config::CardConfig;
use crate::inputs::GestureEvent;
use crate::state::CardState;
use crate::tracker::{combined_fraction, fraction_from_translation};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// No animation set exists.
    Idle,
    /// Animations run on their own (finger not in contact).
    Animating,
    /// Animations are paused and follow the finger.
    Scrubbing,
}

impl Mode {
    #[inline]
    pub fn is_in_flight(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Message {
    Gesture { event: GestureEvent },
    /// The animation set was paused at `fraction`.
    Interrupted { fraction: f32 },
    /// The height animation towards `target` finished.
    AnimationCompleted { target: CardState },
}

impl From<GestureEvent> for Message {
    fn from(event: GestureEvent) -> Self {
        Message::Gesture { event }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    StartAnimations { target: CardState, duration: f32 },
    /// Pause everything; the owner answers with [`Message::Interrupted`].
    PauseAll,
    ScrubAll { fraction: f32 },
    ResumeToCompletion,
    ClearAnimations,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionMachine {
    is_card_visible: bool,
    mode: Mode,
    target: Option<CardState>,
    /// Fraction the transition was interrupted at.
    baseline: f32,
    /// Visibility captured when the current drag began.
    pan_visible: bool,
    card_height: f32,
    duration: f32,
}

impl TransitionMachine {
    /// Idle machine with the card collapsed.
    pub fn new(cfg: &CardConfig) -> Self {
        Self {
            is_card_visible: false,
            mode: Mode::Idle,
            target: None,
            baseline: 0.0,
            pan_visible: false,
            card_height: cfg.card_height,
            duration: cfg.duration,
        }
    }

    /// True once the card is (or an in-flight transition will leave it) expanded.
    #[inline]
    pub fn is_card_visible(&self) -> bool {
        self.is_card_visible
    }

    /// Where the next transition goes; derived from visibility on every call.
    #[inline]
    pub fn next_state(&self) -> CardState {
        if self.is_card_visible {
            CardState::Collapsed
        } else {
            CardState::Expanded
        }
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn target(&self) -> Option<CardState> {
        self.target
    }

    #[inline]
    pub fn progress_when_interrupted(&self) -> f32 {
        self.baseline
    }

    /// State the card rests in right now (ignoring any in-flight transition).
    #[inline]
    pub fn resting_state(&self) -> CardState {
        CardState::from_visible(self.is_card_visible)
    }

    pub fn step(self, msg: Message) -> (Self, Vec<Command>) {
        let mut next = self;
        let mut commands = Vec::new();
        match msg {
            Message::Gesture { event } => match event {
                GestureEvent::Tap => {}
                GestureEvent::PanBegan => {
                    if self.mode == Mode::Idle {
                        let target = self.next_state();
                        next.target = Some(target);
                        commands.push(Command::StartAnimations {
                            target,
                            duration: self.duration,
                        });
                    }
                    next.mode = Mode::Scrubbing;
                    next.pan_visible = self.is_card_visible;
                    commands.push(Command::PauseAll);
                }
                GestureEvent::PanChanged { translation_y } => {
                    if self.mode == Mode::Scrubbing {
                        let live = fraction_from_translation(
                            translation_y,
                            self.card_height,
                            self.pan_visible,
                        );
                        commands.push(Command::ScrubAll {
                            fraction: combined_fraction(live, self.baseline),
                        });
                    }
                }
                GestureEvent::PanEnded | GestureEvent::PanCancelled => {
                    if self.mode == Mode::Scrubbing {
                        next.mode = Mode::Animating;
                        commands.push(Command::ResumeToCompletion);
                    }
                }
            },
            Message::Interrupted { fraction } => {
                if self.mode == Mode::Scrubbing {
                    next.baseline = fraction;
                }
            }
            Message::AnimationCompleted { target } => {
                if self.mode.is_in_flight() && self.target == Some(target) {
                    next.is_card_visible = !self.is_card_visible;
                    next.mode = Mode::Idle;
                    next.target = None;
                    commands.push(Command::ClearAnimations);
                }
            }
        }
        (next, commands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine() -> TransitionMachine {
        TransitionMachine::new(&CardConfig::default())
    }

    #[test]
    fn next_state_is_opposite_of_visibility() {
        let m = machine();
        assert!(!m.is_card_visible());
        assert_eq!(m.next_state(), CardState::Expanded);
        let m = TransitionMachine {
            is_card_visible: true,
            ..m
        };
        assert_eq!(m.next_state(), CardState::Collapsed);
    }

    #[test]
    fn pan_began_when_idle_starts_then_pauses() {
        let (m, cmds) = machine().step(GestureEvent::PanBegan.into());
        assert_eq!(m.mode(), Mode::Scrubbing);
        assert_eq!(
            cmds,
            vec![
                Command::StartAnimations {
                    target: CardState::Expanded,
                    duration: 0.9
                },
                Command::PauseAll
            ]
        );
    }

    #[test]
    fn pan_began_in_flight_only_pauses() {
        let (m, _) = machine().step(GestureEvent::PanBegan.into());
        let (m, _) = m.step(GestureEvent::PanEnded.into());
        assert_eq!(m.mode(), Mode::Animating);
        let (m, cmds) = m.step(GestureEvent::PanBegan.into());
        assert_eq!(cmds, vec![Command::PauseAll]);
        assert_eq!(m.target(), Some(CardState::Expanded));
    }

    #[test]
    fn out_of_order_events_are_ignored() {
        let m = machine();
        for ev in [
            GestureEvent::PanChanged { translation_y: 40.0 },
            GestureEvent::PanEnded,
            GestureEvent::PanCancelled,
            GestureEvent::Tap,
        ] {
            let (next, cmds) = m.step(ev.into());
            assert_eq!(next, m);
            assert!(cmds.is_empty(), "{} produced {cmds:?}", ev.name());
        }
        let (next, cmds) = m.step(Message::AnimationCompleted {
            target: CardState::Expanded,
        });
        assert_eq!(next, m);
        assert!(cmds.is_empty());
    }

    #[test]
    fn changed_is_rebased_on_interruption() {
        let (m, _) = machine().step(GestureEvent::PanBegan.into());
        let (m, _) = m.step(Message::Interrupted { fraction: 0.25 });
        assert_eq!(m.progress_when_interrupted(), 0.25);
        let (_, cmds) = m.step(GestureEvent::PanChanged { translation_y: -150.0 }.into());
        assert_eq!(cmds, vec![Command::ScrubAll { fraction: 0.5 }]);
    }

    #[test]
    fn completion_flips_visibility_once() {
        let (m, _) = machine().step(GestureEvent::PanBegan.into());
        let (m, _) = m.step(GestureEvent::PanEnded.into());
        let done = Message::AnimationCompleted {
            target: CardState::Expanded,
        };
        let (m, cmds) = m.step(done.clone());
        assert!(m.is_card_visible());
        assert_eq!(m.mode(), Mode::Idle);
        assert_eq!(cmds, vec![Command::ClearAnimations]);
        let (again, cmds) = m.step(done);
        assert_eq!(again, m);
        assert!(cmds.is_empty());
    }
}
