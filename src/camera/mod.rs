//! Camera system for 3D scene viewing.
//!
//! Provides an orbital camera with rotation, zoom and turntable motion,
//! plus the tween and single-slot motion driver used for focus transitions.

/// Orbital camera controller with gesture enablement and auto-rotation.
pub mod controller;
/// Core camera struct and camera pose type.
pub mod core;
/// Single-slot transition driver with completion callbacks.
pub mod motion;
/// Eased pose-to-pose interpolation.
pub mod tween;

pub use self::controller::{CameraController, ControlFlags};
pub use self::core::{Camera, CameraPose};
pub use self::motion::{
    CompletionCallback, MotionController, MotionStep, TransitionKind,
};
pub use self::tween::CameraTween;
