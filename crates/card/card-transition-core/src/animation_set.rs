//! The three coupled animations of a card transition.
//!
//! Slots are kept in a fixed order (height, corner radius, blur) and every
//! lifecycle call is applied to all of them before returning, so a partial
//! pause/scrub/resume is never observable.

use crate::animator::PropertyAnimator;
use crate::config::{BlurMode, CardConfig};
use crate::outputs::{BlurEffect, CardProperty, Change, PropertyValue};
use crate::state::CardState;
use crate::timing::TimingCurve;

/// Duration factor telling animators to finish in their intrinsic remaining time.
pub const REMAINING_TIME: f32 = 0.0;

#[derive(Clone, Debug)]
struct Slot {
    property: CardProperty,
    animator: PropertyAnimator,
    /// Only the height animation reports the end of the transition.
    completes_transition: bool,
}

#[derive(Clone, Debug, Default)]
pub struct AnimationSet {
    target: Option<CardState>,
    blur_mode: BlurMode,
    slots: Vec<Slot>,
}

impl AnimationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build and start the height, corner radius and blur animations from the
    /// resting values opposite `target` towards `target`.
    ///
    /// Returns false (and changes nothing) if a transition is already in flight.
    pub fn start(&mut self, target: CardState, duration: f32, cfg: &CardConfig) -> bool {
        if !self.slots.is_empty() {
            log::warn!(
                "animation set already running towards {:?}; ignoring start towards {}",
                self.target,
                target.name()
            );
            return false;
        }
        let source = target.opposite();
        self.target = Some(target);
        self.blur_mode = cfg.blur_mode;
        self.slots = vec![
            Slot {
                property: CardProperty::CardOriginY,
                animator: PropertyAnimator::new(
                    cfg.origin_y(source),
                    cfg.origin_y(target),
                    duration,
                    TimingCurve::Damped {
                        damping_ratio: cfg.height_damping_ratio,
                    },
                ),
                completes_transition: true,
            },
            Slot {
                property: CardProperty::CornerRadius,
                animator: PropertyAnimator::new(
                    cfg.corner_radius_for(source),
                    cfg.corner_radius_for(target),
                    duration,
                    TimingCurve::Linear,
                ),
                completes_transition: false,
            },
            Slot {
                property: CardProperty::Blur,
                animator: PropertyAnimator::new(
                    cfg.blur_intensity_for(source),
                    cfg.blur_intensity_for(target),
                    duration,
                    TimingCurve::Damped {
                        damping_ratio: cfg.blur_damping_ratio,
                    },
                ),
                completes_transition: false,
            },
        ];
        for slot in &mut self.slots {
            slot.animator.start();
        }
        true
    }

    /// Freeze every animation and return the shared completion fraction
    /// (0.0 when nothing is running).
    pub fn pause_all(&mut self) -> f32 {
        let mut fraction = 0.0;
        for (i, slot) in self.slots.iter_mut().enumerate() {
            let f = slot.animator.pause();
            if i == 0 {
                fraction = f;
            } else {
                debug_assert!(
                    (f - fraction).abs() < 1e-4,
                    "{} paused at {f}, height at {fraction}",
                    slot.property.name()
                );
            }
        }
        fraction
    }

    /// Set the completion fraction of every animation without changing
    /// whether they are running or paused.
    pub fn scrub_all(&mut self, fraction: f32) {
        for slot in &mut self.slots {
            slot.animator.set_fraction_complete(fraction);
        }
    }

    /// Release every animation to finish on its own from where it is.
    pub fn resume_to_completion(&mut self) {
        for slot in &mut self.slots {
            slot.animator.continue_animation(REMAINING_TIME);
        }
    }

    /// Advance every animation by `dt`. Returns the target on the tick the
    /// height animation finishes; the other animations never report.
    pub fn tick(&mut self, dt: f32) -> Option<CardState> {
        let mut completed = false;
        for slot in &mut self.slots {
            if slot.animator.tick(dt) && slot.completes_transition {
                completed = true;
            }
        }
        if completed {
            self.target
        } else {
            None
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.target = None;
    }

    #[inline]
    pub fn target(&self) -> Option<CardState> {
        self.target
    }

    /// Shared completion fraction (height animation), if in flight.
    pub fn fraction_complete(&self) -> Option<f32> {
        self.slots.first().map(|s| s.animator.fraction_complete())
    }

    pub fn animator(&self, property: CardProperty) -> Option<&PropertyAnimator> {
        self.slots
            .iter()
            .find(|s| s.property == property)
            .map(|s| &s.animator)
    }

    /// Current value of every animated property, in slot order.
    pub fn sample(&self) -> Vec<Change> {
        self.slots
            .iter()
            .map(|slot| Change {
                property: slot.property,
                value: self.slot_value(slot),
            })
            .collect()
    }

    fn slot_value(&self, slot: &Slot) -> PropertyValue {
        let animator = &slot.animator;
        match slot.property {
            CardProperty::Blur => {
                let intensity = match self.blur_mode {
                    BlurMode::Continuous => animator.value(),
                    // The effect is swapped, not ramped: any visible progress
                    // shows the target's effect.
                    BlurMode::Discrete if animator.progress() > 0.0 => animator.to_value(),
                    BlurMode::Discrete => animator.from_value(),
                };
                PropertyValue::Blur(BlurEffect::from_intensity(intensity))
            }
            CardProperty::CardOriginY | CardProperty::CornerRadius => {
                PropertyValue::Scalar(animator.value())
            }
        }
    }
}
