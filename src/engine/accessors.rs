//! Read-only queries and setters for [`ViewerEngine`].

use super::{HoverTarget, ViewerEngine, ViewportContext};
use crate::camera::{Camera, CameraController, CameraPose};
use crate::focus::FocusState;
use crate::input::InputProcessor;
use crate::options::Options;
use crate::panel::{PanelBinding, PanelSurface};
use crate::picking::ViewportRect;
use crate::registry::FocusRegistry;
use crate::scene::{NodeId, SceneGraph};

// ── Camera ──

impl<P: PanelSurface> ViewerEngine<P> {
    /// Camera to render this frame. Read after [`tick`](Self::tick).
    #[must_use]
    pub fn camera(&self) -> &Camera {
        self.context.camera.camera()
    }

    /// Orbit controller state (controls, auto-rotation, distance).
    #[must_use]
    pub fn camera_controller(&self) -> &CameraController {
        &self.context.camera
    }

    /// Camera and viewport together.
    #[must_use]
    pub fn context(&self) -> &ViewportContext {
        &self.context
    }

    /// Pose captured at load completion, the only reset destination.
    #[must_use]
    pub fn default_pose(&self) -> Option<CameraPose> {
        self.model.as_ref().map(|m| m.default_pose)
    }

    /// Whether a camera transition is running.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.motion.is_active()
    }

    /// End pose of the running transition.
    #[must_use]
    pub fn transition_target(&self) -> Option<CameraPose> {
        self.motion.target_pose()
    }
}

// ── Viewport ──

impl<P: PanelSurface> ViewerEngine<P> {
    /// Rectangle pointer coordinates are relative to.
    #[must_use]
    pub fn viewport(&self) -> ViewportRect {
        self.context.viewport
    }

    /// Set the input element rectangle and update the camera aspect.
    pub fn set_viewport(&mut self, viewport: ViewportRect) {
        if !viewport.is_valid() {
            log::debug!("degenerate viewport {viewport:?}; picks disabled until resized");
        }
        self.context.set_viewport(viewport);
    }
}

// ── Focus & panel ──

impl<P: PanelSurface> ViewerEngine<P> {
    /// Current focus state.
    #[must_use]
    pub fn focus_state(&self) -> &FocusState {
        self.focus.state()
    }

    /// Whether the info panel is showing.
    #[must_use]
    pub fn panel_visible(&self) -> bool {
        self.panel.is_visible()
    }

    /// Panel binding (visibility and shown id).
    #[must_use]
    pub fn panel(&self) -> &PanelBinding<P> {
        &self.panel
    }

    /// Clickable target under the pointer, as of the last cursor move.
    #[must_use]
    pub fn hovered(&self) -> Option<&HoverTarget> {
        self.hovered.as_ref()
    }

    /// Focus registry.
    #[must_use]
    pub fn registry(&self) -> &FocusRegistry {
        &self.registry
    }
}

// ── Scene ──

impl<P: PanelSurface> ViewerEngine<P> {
    /// Whether load completion has been received.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.model.is_some()
    }

    /// Loaded scene.
    #[must_use]
    pub fn scene(&self) -> Option<&SceneGraph> {
        self.model.as_ref().map(|m| &m.scene)
    }

    /// Mutable scene access, e.g. for animating node transforms. Target
    /// bounds are always computed from current transforms.
    pub fn scene_mut(&mut self) -> Option<&mut SceneGraph> {
        self.model.as_mut().map(|m| &mut m.scene)
    }

    /// Root node passed at load completion.
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        self.model.as_ref().map(|m| m.root)
    }

    /// Options the engine was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Input processor (cursor and drag state).
    #[must_use]
    pub fn input_processor(&self) -> &InputProcessor {
        &self.input
    }
}
