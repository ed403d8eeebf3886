// extensions/easing.rs
//
// Easing curves that re-parameterise linear flight progress.
// Pure math, no dependencies on flights or surfaces.

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Easing function applied to normalized progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant velocity.
    Linear,
    /// Slow start.
    QuadIn,
    /// Slow end.
    QuadOut,
    /// Accelerate, then decelerate. Used for wizard flights.
    #[default]
    QuadInOut,
    /// Stronger accelerate/decelerate.
    CubicInOut,
    SineInOut,
}

impl Easing {
    /// Apply the easing to `t`, clamped to [0, 1] first.
    /// Every variant maps 0 → 0 and 1 → 1 and is non-decreasing.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadIn => t * t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::QuadInOut => ease_in_out(t),
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
        }
    }
}

/// Quadratic ease-in-out: `2t²` below the midpoint, `1 - (-2t+2)²/2` above.
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}
