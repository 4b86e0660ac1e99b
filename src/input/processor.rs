//! Converts raw platform events into engine commands.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! drag detection, button state) and the key-binding map. It is the only
//! thing that sits between raw window events and the engine's
//! [`execute`](crate::ViewerEngine::execute) method.

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use super::keyboard::KeyAction;
use super::mouse::{ClickResult, InputState};
use crate::engine::command::ViewerCommand;
use crate::options::KeybindingOptions;

impl KeyAction {
    /// The parameterless command this action triggers.
    #[must_use]
    pub fn to_command(self) -> ViewerCommand {
        match self {
            Self::ResetView => ViewerCommand::ResetView,
            Self::RecenterCamera => ViewerCommand::RecenterCamera,
            Self::ToggleAutoRotate => ViewerCommand::ToggleAutoRotate,
        }
    }
}

/// Converts raw window events into [`ViewerCommand`]s.
///
/// Cursor moves with no button held become hover commands.
/// Mouse picks fire on release of the primary button, and only if the
/// press did not turn into a camera drag; otherwise orbiting the model
/// and letting go over empty space would read as a reset click. Touches
/// pick on touch start.
///
/// # Usage
///
/// ```ignore
/// if let Some(cmd) = input_processor.handle_event(event) {
///     engine.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Cursor tracking and drag detection.
    state: InputState,
    /// Whether the primary mouse button is currently held.
    mouse_pressed: bool,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            key_bindings,
            ..Self::new()
        }
    }

    /// Last known cursor position in pixels.
    #[must_use]
    pub fn mouse_pos(&self) -> Option<(f32, f32)> {
        self.state.mouse_pos
    }

    /// Whether the primary mouse button is pressed.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.mouse_pressed
    }

    /// Whether the current press has become a drag.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Replace the key bindings.
    pub fn set_key_bindings(&mut self, key_bindings: KeybindingOptions) {
        self.key_bindings = key_bindings;
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<ViewerCommand> {
        self.key_bindings.lookup(key).map(KeyAction::to_command)
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<ViewerCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed)
            }
            InputEvent::TouchStart { x, y } => {
                let _ = self.state.handle_mouse_position(x, y);
                Some(ViewerCommand::Pick { x, y })
            }
            InputEvent::Scroll { delta } => Some(ViewerCommand::Zoom { delta }),
            InputEvent::KeyPressed { key } => self.handle_key_press(&key),
            InputEvent::OverlayClicked => Some(ViewerCommand::ResetView),
        }
    }

    /// Cursor moved: orbit while the primary button is held, hover
    /// otherwise.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<ViewerCommand> {
        let (delta_x, delta_y) = self.state.handle_mouse_position(x, y);

        if !self.mouse_pressed {
            return Some(ViewerCommand::Hover { x, y });
        }
        let delta = Vec2::new(delta_x, delta_y);
        (delta != Vec2::ZERO).then_some(ViewerCommand::RotateCamera { delta })
    }

    /// Mouse button press/release: pick on a clean primary release.
    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
    ) -> Option<ViewerCommand> {
        if button != MouseButton::Left {
            return None;
        }

        if pressed {
            self.state.handle_mouse_down();
            self.mouse_pressed = true;
            return None;
        }

        self.mouse_pressed = false;
        match self.state.process_mouse_up() {
            ClickResult::Click { x, y } => Some(ViewerCommand::Pick { x, y }),
            ClickResult::NoAction => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(p: &mut InputProcessor, pressed: bool) -> Option<ViewerCommand> {
        p.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed,
        })
    }

    #[test]
    fn click_becomes_pick_at_release_position() {
        let mut p = InputProcessor::new();
        assert_eq!(
            p.handle_event(InputEvent::CursorMoved { x: 40.0, y: 30.0 }),
            Some(ViewerCommand::Hover { x: 40.0, y: 30.0 })
        );
        assert_eq!(press(&mut p, true), None);
        assert!(p.mouse_pressed());
        assert_eq!(
            press(&mut p, false),
            Some(ViewerCommand::Pick { x: 40.0, y: 30.0 })
        );
    }

    #[test]
    fn drag_rotates_and_does_not_pick() {
        let mut p = InputProcessor::new();
        let _ = p.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        let _ = press(&mut p, true);
        assert_eq!(
            p.handle_event(InputEvent::CursorMoved { x: 30.0, y: -5.0 }),
            Some(ViewerCommand::RotateCamera {
                delta: Vec2::new(30.0, -5.0)
            })
        );
        assert!(p.is_dragging());
        assert_eq!(press(&mut p, false), None);
    }

    #[test]
    fn moves_without_press_hover() {
        let mut p = InputProcessor::new();
        let _ = p.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        assert_eq!(
            p.handle_event(InputEvent::CursorMoved { x: 50.0, y: 50.0 }),
            Some(ViewerCommand::Hover { x: 50.0, y: 50.0 })
        );
    }

    #[test]
    fn pressed_move_without_travel_emits_nothing() {
        let mut p = InputProcessor::new();
        let _ = p.handle_event(InputEvent::CursorMoved { x: 8.0, y: 8.0 });
        let _ = press(&mut p, true);
        assert_eq!(p.handle_event(InputEvent::CursorMoved { x: 8.0, y: 8.0 }), None);
    }

    #[test]
    fn touch_picks_immediately() {
        let mut p = InputProcessor::new();
        assert_eq!(
            p.handle_event(InputEvent::TouchStart { x: 5.0, y: 6.0 }),
            Some(ViewerCommand::Pick { x: 5.0, y: 6.0 })
        );
    }

    #[test]
    fn right_button_is_ignored() {
        let mut p = InputProcessor::new();
        let _ = p.handle_event(InputEvent::CursorMoved { x: 1.0, y: 1.0 });
        for pressed in [true, false] {
            assert_eq!(
                p.handle_event(InputEvent::MouseButton {
                    button: MouseButton::Right,
                    pressed,
                }),
                None
            );
        }
    }

    #[test]
    fn keys_overlay_and_scroll() {
        let mut p = InputProcessor::new();
        assert_eq!(
            p.handle_event(InputEvent::KeyPressed {
                key: "Escape".to_owned()
            }),
            Some(ViewerCommand::ResetView)
        );
        assert_eq!(p.handle_key_press("KeyR"), Some(ViewerCommand::ToggleAutoRotate));
        assert_eq!(p.handle_key_press("KeyZ"), None);
        assert_eq!(
            p.handle_event(InputEvent::OverlayClicked),
            Some(ViewerCommand::ResetView)
        );
        assert_eq!(
            p.handle_event(InputEvent::Scroll { delta: 1.0 }),
            Some(ViewerCommand::Zoom { delta: 1.0 })
        );
    }
}
