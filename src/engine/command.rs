//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, a mouse
//! gesture, an overlay click or a programmatic call, is represented as a
//! `ViewerCommand`. Consumers construct commands and pass them to
//! [`ViewerEngine::execute`](super::ViewerEngine::execute).

use glam::Vec2;

/// A single viewer operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerCommand {
    // ── Picking ─────────────────────────────────────────────────────
    /// Resolve the pointer position and run the focus transition table.
    Pick {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },

    /// Update the hover highlight for the pointer position.
    Hover {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },

    // ── Focus ───────────────────────────────────────────────────────
    /// Leave focus and return to the default pose. A no-op in the
    /// overview.
    ResetView,

    // ── Camera ──────────────────────────────────────────────────────
    /// Animate back to the default pose, leaving focus if necessary.
    RecenterCamera,

    /// Toggle turntable auto-rotation around world Y.
    ToggleAutoRotate,

    /// Rotate the camera by `delta` pixels of mouse movement.
    RotateCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Zoom the camera (positive = zoom in, negative = zoom out).
    Zoom {
        /// Scroll amount.
        delta: f32,
    },
}
