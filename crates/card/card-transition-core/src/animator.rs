//! A single interruptible property animation.
//!
//! `fraction_complete` is the time-based completion of the animation and is
//! what gets paused, scrubbed and shared between animators started together.
//! The visual `progress` is derived from it:
//! - while running, the timing curve maps the current segment (from the last
//!   start/continue point to the end) onto the remaining distance;
//! - while paused, scrubbing is piecewise linear through `(0, 0)`, the point
//!   where the animator was paused and `(1, 1)`, so grabbing a moving
//!   animation never makes it jump and both ends stay exact.

use serde::{Deserialize, Serialize};

use crate::timing::{lerp_f32, TimingCurve};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimatorState {
    /// Built but never started.
    Inactive,
    Running,
    Paused,
    /// Reached its end value; terminal.
    Finished,
}

/// Running segment: where it started and how fast the fraction advances.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Segment {
    start_fraction: f32,
    start_progress: f32,
    /// Fraction per second.
    rate: f32,
}

#[derive(Clone, Debug)]
pub struct PropertyAnimator {
    from: f32,
    to: f32,
    duration: f32,
    curve: TimingCurve,
    state: AnimatorState,
    fraction: f32,
    progress: f32,
    segment: Segment,
    /// (fraction, progress) captured when the animator was last paused.
    anchor: (f32, f32),
}

impl PropertyAnimator {
    /// Build an inactive animator from `from` to `to` over `duration` seconds.
    pub fn new(from: f32, to: f32, duration: f32, curve: TimingCurve) -> Self {
        let duration = duration.max(f32::EPSILON);
        Self {
            from,
            to,
            duration,
            curve,
            state: AnimatorState::Inactive,
            fraction: 0.0,
            progress: 0.0,
            segment: Segment {
                start_fraction: 0.0,
                start_progress: 0.0,
                rate: duration.recip(),
            },
            anchor: (0.0, 0.0),
        }
    }

    #[inline]
    pub fn state(&self) -> AnimatorState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == AnimatorState::Running
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.state == AnimatorState::Finished
    }

    #[inline]
    pub fn fraction_complete(&self) -> f32 {
        self.fraction
    }

    /// Visual progress from `from` (0.0) to `to` (1.0).
    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[inline]
    pub fn value(&self) -> f32 {
        lerp_f32(self.from, self.to, self.progress)
    }

    #[inline]
    pub fn from_value(&self) -> f32 {
        self.from
    }

    #[inline]
    pub fn to_value(&self) -> f32 {
        self.to
    }

    #[inline]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    #[inline]
    pub fn curve(&self) -> TimingCurve {
        self.curve
    }

    /// Start (or restart) from the current fraction at the intrinsic speed.
    pub fn start(&mut self) {
        if self.state == AnimatorState::Finished {
            return;
        }
        self.begin_segment(self.duration.recip());
    }

    /// Freeze in place and return the fraction. Pausing a paused animator is a no-op.
    pub fn pause(&mut self) -> f32 {
        match self.state {
            AnimatorState::Running | AnimatorState::Inactive => {
                self.state = AnimatorState::Paused;
                self.anchor = (self.fraction, self.progress);
            }
            AnimatorState::Paused | AnimatorState::Finished => {}
        }
        self.fraction
    }

    /// Set the completion fraction directly. Values are clamped to `[0, 1]`;
    /// the running/paused status is left untouched.
    pub fn set_fraction_complete(&mut self, fraction: f32) {
        if self.state == AnimatorState::Finished {
            return;
        }
        let fraction = if fraction.is_nan() {
            self.fraction
        } else {
            fraction.clamp(0.0, 1.0)
        };
        if self.state != AnimatorState::Paused {
            self.anchor = (self.fraction, self.progress);
        }
        self.fraction = fraction;
        self.progress = scrub_progress(self.anchor, fraction);
        if self.state == AnimatorState::Running {
            self.begin_segment(self.segment.rate);
        }
    }

    /// Resume towards the end value.
    ///
    /// A `duration_factor` of 0.0 keeps the intrinsic pace and finishes in
    /// the time left for the current fraction; any positive factor finishes
    /// the rest of the motion in `duration_factor * duration` seconds.
    pub fn continue_animation(&mut self, duration_factor: f32) {
        if self.state == AnimatorState::Finished {
            return;
        }
        let remaining = 1.0 - self.fraction;
        let rate = if duration_factor > 0.0 && duration_factor.is_finite() {
            let seconds = duration_factor * self.duration;
            if remaining <= 0.0 {
                self.duration.recip()
            } else {
                remaining / seconds
            }
        } else {
            self.duration.recip()
        };
        self.begin_segment(rate);
    }

    /// Advance by `dt` seconds. Returns true on the tick the animator finishes.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.state != AnimatorState::Running {
            return false;
        }
        if dt > 0.0 && dt.is_finite() {
            self.fraction = (self.fraction + self.segment.rate * dt).min(1.0);
        }
        if self.fraction >= 1.0 {
            self.fraction = 1.0;
            self.progress = 1.0;
            self.state = AnimatorState::Finished;
            return true;
        }
        let span = 1.0 - self.segment.start_fraction;
        let local = if span > f32::EPSILON {
            (self.fraction - self.segment.start_fraction) / span
        } else {
            1.0
        };
        let start = self.segment.start_progress;
        self.progress = start + (1.0 - start) * self.curve.evaluate(local);
        false
    }

    fn begin_segment(&mut self, rate: f32) {
        self.segment = Segment {
            start_fraction: self.fraction,
            start_progress: self.progress,
            rate,
        };
        self.state = AnimatorState::Running;
    }
}

/// Visual progress for `fraction` on the line segments `(0, 0)` -> `anchor` -> `(1, 1)`.
fn scrub_progress((anchor_fraction, anchor_progress): (f32, f32), fraction: f32) -> f32 {
    let progress = if fraction <= anchor_fraction {
        if anchor_fraction > f32::EPSILON {
            anchor_progress * fraction / anchor_fraction
        } else {
            0.0
        }
    } else {
        let span = 1.0 - anchor_fraction;
        if span > f32::EPSILON {
            anchor_progress + (1.0 - anchor_progress) * (fraction - anchor_fraction) / span
        } else {
            1.0
        }
    };
    progress.clamp(0.0, 1.0)
}
