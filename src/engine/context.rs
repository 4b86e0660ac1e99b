use crate::camera::CameraController;
use crate::options::CameraOptions;
use crate::picking::{Ray, ViewportRect};

/// The camera and the viewport it renders into.
///
/// Everything that turns pointer pixels into world rays reads from here,
/// so several viewers can coexist without sharing camera state.
#[derive(Debug, Clone)]
pub struct ViewportContext {
    /// Orbit camera.
    pub camera: CameraController,
    /// Element rectangle pointer coordinates are relative to.
    pub viewport: ViewportRect,
}

impl ViewportContext {
    /// Context for a viewport of `width` x `height` pixels at the origin.
    #[must_use]
    pub fn new(options: &CameraOptions, width: f32, height: f32) -> Self {
        let viewport = ViewportRect::from_size(width, height);
        let aspect = viewport.aspect().unwrap_or(1.0);
        Self {
            camera: CameraController::new(options, aspect),
            viewport,
        }
    }

    /// Replace the viewport rectangle and keep the camera aspect in step.
    pub fn set_viewport(&mut self, viewport: ViewportRect) {
        self.viewport = viewport;
        self.camera.resize(viewport.width, viewport.height);
    }

    /// Fresh world ray under the pointer, or `None` if the viewport is
    /// degenerate.
    #[must_use]
    pub fn ray_at(&self, x: f32, y: f32) -> Option<Ray> {
        Ray::from_pointer(x, y, &self.viewport, self.camera.camera())
    }
}
