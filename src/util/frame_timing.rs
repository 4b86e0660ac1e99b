use web_time::{Duration, Instant};

/// Source of time for a frame.
#[derive(Debug, Clone, Copy)]
enum ClockSource {
    /// Measure wall-clock time between frames.
    Wall { last_frame: Instant },
    /// Advance by a fixed step every frame (deterministic replays).
    Fixed { step: Duration },
}

/// Frame clock producing per-frame deltas, with FPS smoothing and optional
/// frame limiting.
///
/// Tweens are driven by elapsed time, never by frame count, so the engine
/// only ever sees the `dt` this clock reports.
#[derive(Debug, Clone)]
pub struct FrameClock {
    source: ClockSource,
    /// Minimum frame duration based on target FPS (zero = unlimited).
    min_frame_duration: Duration,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// Wall-clock timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        Self {
            source: ClockSource::Wall {
                last_frame: Instant::now(),
            },
            min_frame_duration: frame_duration(target_fps),
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Deterministic clock that advances by exactly one frame at
    /// `target_fps` on every tick. A zero target falls back to 60 FPS.
    #[must_use]
    pub fn fixed(target_fps: u32) -> Self {
        let fps = if target_fps == 0 { 60 } else { target_fps };
        Self {
            source: ClockSource::Fixed {
                step: frame_duration(fps),
            },
            min_frame_duration: Duration::ZERO,
            smoothed_fps: fps as f32,
            smoothing: 0.05,
        }
    }

    /// Time left before the next frame may be presented.
    #[must_use]
    pub fn time_until_next_frame(&self) -> Duration {
        match self.source {
            ClockSource::Wall { last_frame } => self
                .min_frame_duration
                .saturating_sub(last_frame.elapsed()),
            ClockSource::Fixed { .. } => Duration::ZERO,
        }
    }

    /// Advance to the next frame and return its delta in seconds.
    pub fn tick(&mut self) -> f32 {
        let elapsed = match &mut self.source {
            ClockSource::Wall { last_frame } => {
                let now = Instant::now();
                let elapsed = now.duration_since(*last_frame);
                *last_frame = now;
                elapsed
            }
            ClockSource::Fixed { step } => *step,
        };

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        frame_time
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

fn frame_duration(target_fps: u32) -> Duration {
    if target_fps > 0 {
        Duration::from_secs_f64(1.0 / f64::from(target_fps))
    } else {
        Duration::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reports_constant_steps() {
        let mut clock = FrameClock::fixed(50);
        for _ in 0..5 {
            assert!((clock.tick() - 0.02).abs() < 1e-6);
        }
        assert!((clock.fps() - 50.0).abs() < 1e-3);
        assert_eq!(clock.time_until_next_frame(), Duration::ZERO);
    }

    #[test]
    fn fixed_clock_with_zero_target_uses_sixty() {
        let mut clock = FrameClock::fixed(0);
        assert!((clock.tick() - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn wall_clock_deltas_are_non_negative() {
        let mut clock = FrameClock::new(0);
        assert!(clock.tick() >= 0.0);
        assert_eq!(clock.time_until_next_frame(), Duration::ZERO);
    }
}
