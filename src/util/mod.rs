//! Shared utilities: easing curves and frame timing.

pub mod easing;
/// Frame clock with wall-clock and fixed-step sources.
pub mod frame_timing;
