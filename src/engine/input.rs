//! Input and command dispatch for [`ViewerEngine`].

use super::{ViewerCommand, ViewerEngine};
use crate::input::InputEvent;
use crate::panel::PanelSurface;

impl<P: PanelSurface> ViewerEngine<P> {
    /// Process a platform-agnostic input event.
    ///
    /// This is the primary input entry point. The event goes through the
    /// engine's [`InputProcessor`](crate::input::InputProcessor) and any
    /// resulting command is executed immediately. Returns that command.
    ///
    /// # Example
    ///
    /// ```ignore
    /// engine.handle_input(InputEvent::CursorMoved { x, y });
    /// engine.handle_input(InputEvent::TouchStart { x, y });
    /// ```
    pub fn handle_input(&mut self, event: InputEvent) -> Option<ViewerCommand> {
        let command = self.input.handle_event(event)?;
        self.execute(command);
        Some(command)
    }

    /// Execute a single command.
    ///
    /// Free-camera gestures are dropped while a transition is in flight
    /// or while focused.
    pub fn execute(&mut self, command: ViewerCommand) {
        match command {
            ViewerCommand::Pick { x, y } => {
                let _ = self.pick_at(x, y);
            }
            ViewerCommand::Hover { x, y } => {
                let _ = self.hover_at(x, y);
            }
            ViewerCommand::ResetView => {
                let _ = self.reset_view();
            }
            ViewerCommand::RecenterCamera => self.recenter_camera(),
            ViewerCommand::ToggleAutoRotate => {
                let on = self.context.camera.toggle_auto_rotate();
                log::info!("auto-rotate {}", if on { "on" } else { "off" });
            }
            ViewerCommand::RotateCamera { delta } => {
                if !self.motion.is_active() {
                    let _ = self.context.camera.rotate(delta);
                }
            }
            ViewerCommand::Zoom { delta } => {
                if !self.motion.is_active() {
                    let _ = self.context.camera.zoom(delta);
                }
            }
        }
    }
}
