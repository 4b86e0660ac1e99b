use crate::camera::core::CameraPose;
use crate::util::easing::EasingFunction;

/// Time-driven interpolation between two camera poses.
///
/// Progress comes from accumulated wall time, so the same tween takes the
/// same time at any frame rate. Once complete it reports `end` exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTween {
    start: CameraPose,
    end: CameraPose,
    duration: f32,
    elapsed: f32,
    easing: EasingFunction,
}

/// Clamp a frame delta to a usable non-negative value.
#[must_use]
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 {
        dt
    } else {
        0.0
    }
}

impl CameraTween {
    /// Tween from `start` to `end` over `duration` seconds. Negative or
    /// non-finite durations become zero.
    #[must_use]
    pub fn new(
        start: CameraPose,
        end: CameraPose,
        duration: f32,
        easing: EasingFunction,
    ) -> Self {
        Self {
            start,
            end,
            duration: sanitize_dt(duration),
            elapsed: 0.0,
            easing,
        }
    }

    /// Pose the tween started from.
    #[must_use]
    pub fn start(&self) -> CameraPose {
        self.start
    }

    /// Pose the tween lands on.
    #[must_use]
    pub fn end(&self) -> CameraPose {
        self.end
    }

    /// Configured duration in seconds.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Linear progress in `[0, 1]`. Zero-length tweens are complete as soon
    /// as they are advanced once.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return if self.elapsed > 0.0 { 1.0 } else { 0.0 };
        }
        (self.elapsed / self.duration).min(1.0)
    }

    /// Pose at the current progress.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        if self.is_complete() {
            return self.end;
        }
        self.start
            .lerp(&self.end, self.easing.evaluate(self.progress()))
    }

    /// Whether the tween has reached its end pose.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Step forward by `dt` seconds and return `(pose, completed)`.
    pub fn advance(&mut self, dt: f32) -> (CameraPose, bool) {
        if self.duration <= 0.0 {
            // Any advance, including dt = 0, finishes a zero-length tween.
            self.elapsed = f32::MIN_POSITIVE;
        } else {
            self.elapsed = (self.elapsed + sanitize_dt(dt)).min(self.duration);
        }
        (self.pose(), self.is_complete())
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn poses() -> (CameraPose, CameraPose) {
        (
            CameraPose::new(Vec3::new(0.0, 0.0, 500.0), Vec3::ZERO),
            CameraPose::new(Vec3::new(-60.0, 30.0, 100.0), Vec3::new(10.0, 0.0, 0.0)),
        )
    }

    #[test]
    fn lands_exactly_on_end_after_duration() {
        let (a, b) = poses();
        let mut tween = CameraTween::new(a, b, 1.2, EasingFunction::CubicInOut);
        let mut done = false;
        for _ in 0..10 {
            let (_, d) = tween.advance(0.1);
            assert!(!d);
        }
        for _ in 0..3 {
            let (pose, d) = tween.advance(0.1);
            done = d;
            if done {
                assert_eq!(pose, b);
                break;
            }
        }
        assert!(done);
    }

    #[test]
    fn bad_dt_never_moves_backwards_or_produces_nan() {
        let (a, b) = poses();
        let mut tween = CameraTween::new(a, b, 1.0, EasingFunction::Linear);
        let (p1, _) = tween.advance(0.25);
        for dt in [0.0, -1.0, f32::NAN, f32::NEG_INFINITY, f32::INFINITY] {
            let (p, done) = tween.advance(dt);
            assert!(!done);
            assert_eq!(p, p1);
            assert!(p.position.is_finite() && p.look_at.is_finite());
        }
    }

    #[test]
    fn zero_duration_completes_on_next_advance() {
        let (a, b) = poses();
        let mut tween = CameraTween::new(a, b, 0.0, EasingFunction::DEFAULT);
        assert!(!tween.is_complete());
        assert_eq!(tween.pose(), a);
        assert_eq!(tween.advance(0.0), (b, true));

        let negative = CameraTween::new(a, b, -3.0, EasingFunction::DEFAULT);
        assert_eq!(negative.duration(), 0.0);
    }

    #[test]
    fn eased_midpoint_is_between_endpoints() {
        let (a, b) = poses();
        let mut tween = CameraTween::new(a, b, 2.0, EasingFunction::CubicInOut);
        let (mid, _) = tween.advance(1.0);
        // Symmetric easing puts t = 0.5 at the geometric midpoint.
        assert!(mid.approx_eq(&a.lerp(&b, 0.5), 1e-3));
    }
}
