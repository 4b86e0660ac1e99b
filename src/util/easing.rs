//! Easing functions for camera tweens.
//!
//! Every curve is a pure `t ∈ [0, 1] → t' ∈ [0, 1]` mapping with
//! `f(0) = 0` and `f(1) = 1`, so tweens always start and land exactly on
//! their keyframes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for animation curves.
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Cubic ease-out.
    CubicOut,
    /// Cubic ease-in-out ("power3 in-out"): zero velocity at both ends.
    CubicInOut,
    /// Hermite smoothstep `3t² - 2t³`.
    SmoothStep,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First inner control value.
        c1: f32,
        /// Second inner control value.
        c2: f32,
    },
}

impl EasingFunction {
    /// Default easing for camera focus moves.
    pub const DEFAULT: EasingFunction = EasingFunction::CubicInOut;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0]; NaN is treated as 0.0. The output
    /// is clamped to the same range, and a non-finite result (bad
    /// `CubicHermite` controls) falls back to `t`.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        let eased = match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::CubicOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt * omt
            }
            EasingFunction::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
            EasingFunction::SmoothStep => t * t * (3.0 - 2.0 * t),
            EasingFunction::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        };

        if eased.is_finite() {
            eased.clamp(0.0, 1.0)
        } else {
            t
        }
    }

    /// Whether every control value is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        match self {
            EasingFunction::CubicHermite { c1, c2 } => {
                c1.is_finite() && c2.is_finite()
            }
            _ => true,
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}
