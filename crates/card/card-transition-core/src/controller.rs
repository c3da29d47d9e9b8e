//! CardTransitionController: owns the machine value, the animation set and
//! the per-call outputs.
//!
//! Methods:
//! - new, handle (gesture event), update (frame tick), resting_outputs
//!
//! Every call runs to completion: the machine's commands are executed against
//! the animation set in order, and any message they produce (pause fraction,
//! end of the height animation) is fed back before the call returns.

use std::collections::VecDeque;

use crate::animation_set::AnimationSet;
use crate::config::CardConfig;
use crate::error::ConfigError;
use crate::inputs::GestureEvent;
use crate::machine::{Command, Message, Mode, TransitionMachine};
use crate::outputs::{BlurEffect, CardProperty, Change, Outputs, PropertyValue, TransitionEvent};
use crate::state::CardState;

#[derive(Debug)]
pub struct CardTransitionController {
    cfg: CardConfig,
    machine: TransitionMachine,
    animations: AnimationSet,
    outputs: Outputs,
}

impl CardTransitionController {
    /// Create an idle controller with the card collapsed.
    pub fn new(cfg: CardConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self {
            machine: TransitionMachine::new(&cfg),
            cfg,
            animations: AnimationSet::new(),
            outputs: Outputs::default(),
        })
    }

    #[inline]
    pub fn config(&self) -> &CardConfig {
        &self.cfg
    }

    #[inline]
    pub fn machine(&self) -> &TransitionMachine {
        &self.machine
    }

    #[inline]
    pub fn is_card_visible(&self) -> bool {
        self.machine.is_card_visible()
    }

    #[inline]
    pub fn next_state(&self) -> CardState {
        self.machine.next_state()
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.machine.mode()
    }

    #[inline]
    pub fn progress_when_interrupted(&self) -> f32 {
        self.machine.progress_when_interrupted()
    }

    /// Number of running animations: 0 when idle, 3 while a transition is in flight.
    #[inline]
    pub fn running_animations(&self) -> usize {
        self.animations.len()
    }

    #[inline]
    pub fn animations(&self) -> &AnimationSet {
        &self.animations
    }

    /// Property values of the card at rest in its current state, for the
    /// initial layout of the render collaborator.
    pub fn resting_outputs(&self) -> Outputs {
        let mut out = Outputs::default();
        for change in resting_changes(&self.cfg, self.machine.resting_state()) {
            out.push_change(change);
        }
        out
    }

    /// Feed one gesture event.
    pub fn handle(&mut self, event: GestureEvent) -> &Outputs {
        self.outputs.clear();
        log::trace!("handle: {} in {:?}", event.name(), self.machine.mode());
        self.dispatch(Message::from(event));
        &self.outputs
    }

    /// Feed a batch of gesture events; outputs accumulate across the batch.
    pub fn handle_all<I>(&mut self, events: I) -> &Outputs
    where
        I: IntoIterator<Item = GestureEvent>,
    {
        self.outputs.clear();
        for event in events {
            self.dispatch(Message::from(event));
        }
        &self.outputs
    }

    /// Advance running animations by `dt` seconds and write their values.
    /// The end of the height animation is processed within this call.
    pub fn update(&mut self, dt: f32) -> &Outputs {
        self.outputs.clear();
        if self.animations.is_empty() {
            return &self.outputs;
        }
        let completed = self.animations.tick(dt);
        self.push_samples();
        if let Some(target) = completed {
            self.dispatch(Message::AnimationCompleted { target });
        }
        &self.outputs
    }

    fn dispatch(&mut self, msg: Message) {
        let mut queue = VecDeque::from([msg]);
        while let Some(msg) = queue.pop_front() {
            let before = self.machine.mode();
            let (next, commands) = self.machine.step(msg.clone());
            if commands.is_empty() {
                if let Message::Gesture { event } = msg {
                    log::debug!("{} ignored in {:?}", event.name(), before);
                }
            }
            self.machine = next;
            if before != next.mode() {
                log::debug!(
                    "transition mode {:?} -> {:?} (visible={}, target={:?})",
                    before,
                    next.mode(),
                    next.is_card_visible(),
                    next.target()
                );
            }
            for command in commands {
                if let Some(feedback) = self.execute(command) {
                    queue.push_back(feedback);
                }
            }
        }
    }

    fn execute(&mut self, command: Command) -> Option<Message> {
        match command {
            Command::StartAnimations { target, duration } => {
                if self.animations.start(target, duration, &self.cfg) {
                    log::debug!("started transition towards {}", target.name());
                    self.outputs
                        .push_event(TransitionEvent::TransitionStarted { target });
                }
                None
            }
            Command::PauseAll => {
                let fraction = self.animations.pause_all();
                self.outputs
                    .push_event(TransitionEvent::Interrupted { fraction });
                self.push_samples();
                Some(Message::Interrupted { fraction })
            }
            Command::ScrubAll { fraction } => {
                log::trace!("scrub to {fraction}");
                self.animations.scrub_all(fraction);
                self.outputs.push_event(TransitionEvent::Scrubbed { fraction });
                self.push_samples();
                None
            }
            Command::ResumeToCompletion => {
                self.animations.resume_to_completion();
                self.outputs.push_event(TransitionEvent::Resumed);
                None
            }
            Command::ClearAnimations => {
                self.animations.clear();
                let state = self.machine.resting_state();
                log::debug!("transition completed; card {}", state.name());
                self.outputs
                    .push_event(TransitionEvent::TransitionCompleted { state });
                None
            }
        }
    }

    fn push_samples(&mut self) {
        for change in self.animations.sample() {
            self.outputs.push_change(change);
        }
    }
}

fn resting_changes(cfg: &CardConfig, state: CardState) -> [Change; 3] {
    [
        Change {
            property: CardProperty::CardOriginY,
            value: PropertyValue::Scalar(cfg.origin_y(state)),
        },
        Change {
            property: CardProperty::CornerRadius,
            value: PropertyValue::Scalar(cfg.corner_radius_for(state)),
        },
        Change {
            property: CardProperty::Blur,
            value: PropertyValue::Blur(BlurEffect::from_intensity(cfg.blur_intensity_for(state))),
        },
    ]
}
