/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`ViewerCommand`](crate::ViewerCommand) values.
/// Coordinates are pixels relative to the same origin as the viewport
/// rectangle given to the engine.
///
/// # Example
///
/// ```ignore
/// engine.handle_input(InputEvent::CursorMoved { x: 100.0, y: 200.0 });
/// engine.handle_input(InputEvent::MouseButton {
///     button: MouseButton::Left,
///     pressed: false,
/// });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// A touch began. Touches pick immediately, without waiting for
    /// release.
    TouchStart {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount (positive = zoom in, negative = zoom out).
        delta: f32,
    },
    /// A key was pressed. Uses physical key-code names such as `"Escape"`.
    KeyPressed {
        /// Key-code name.
        key: String,
    },
    /// The host's dismiss overlay (the area around the info panel) was
    /// clicked.
    OverlayClicked,
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}
