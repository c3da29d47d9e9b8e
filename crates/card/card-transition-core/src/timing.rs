//! Timing curves mapping a segment's normalized time to visual progress.
//!
//! - [`TimingCurve::Linear`] - constant speed
//! - [`TimingCurve::Damped`] - step response of a damped spring, rescaled so
//!   the curve lands exactly on 1.0 at the end of the segment

use serde::{Deserialize, Serialize};

/// Natural angular frequency of the damped curve, in radians per segment.
/// High enough that a critically damped spring is visually settled at t = 1.
const SPRING_OMEGA: f32 = 10.0;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TimingCurve {
    Linear,
    /// `damping_ratio` of 1.0 is critically damped (no overshoot), below 1.0
    /// oscillates around the target, above 1.0 approaches it more slowly.
    Damped { damping_ratio: f32 },
}

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

impl TimingCurve {
    /// Critically damped spring.
    pub const CRITICALLY_DAMPED: Self = Self::Damped { damping_ratio: 1.0 };

    /// Evaluate the curve at `t` (clamped to `[0, 1]`).
    /// Returns 0.0 at t = 0 and exactly 1.0 at t = 1.
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match *self {
            TimingCurve::Linear => t,
            TimingCurve::Damped { damping_ratio } => {
                let zeta = damping_ratio.max(f32::EPSILON);
                // Spread what the spring has left to travel at t = 1 over the
                // segment so the endpoint is exact and t = 0 stays at 0.
                let residual = 1.0 - spring_step(1.0, zeta);
                spring_step(t, zeta) + residual * t
            }
        }
    }
}

/// Unit step response x(t) of a spring with natural frequency SPRING_OMEGA.
fn spring_step(t: f32, zeta: f32) -> f32 {
    let w = SPRING_OMEGA;
    if (zeta - 1.0).abs() < 1e-4 {
        1.0 - (1.0 + w * t) * (-w * t).exp()
    } else if zeta < 1.0 {
        let root = (1.0 - zeta * zeta).sqrt();
        let wd = w * root;
        1.0 - (-zeta * w * t).exp() * ((wd * t).cos() + (zeta / root) * (wd * t).sin())
    } else {
        // Two real roots; written with exponentials only so large ratios stay finite.
        let root = (zeta * zeta - 1.0).sqrt();
        let r1 = -w * (zeta - root);
        let r2 = -w * (zeta + root);
        1.0 + (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r1 - r2)
    }
}
