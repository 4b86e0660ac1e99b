use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and orbit-control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Orbit rotation in radians per pixel of drag.
    #[schemars(title = "Rotate Speed", range(min = 0.001, max = 0.05), extend("step" = 0.001))]
    pub rotate_speed: f32,
    /// Zoom sensitivity multiplier.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub zoom_speed: f32,
    /// Closest orbit distance reachable by zooming.
    #[schemars(title = "Min Distance", range(min = 0.0))]
    pub min_distance: f32,
    /// Farthest orbit distance reachable by zooming.
    #[schemars(title = "Max Distance", range(min = 1.0))]
    pub max_distance: f32,
    /// Turntable rotation while idle in the overview.
    #[schemars(title = "Auto Rotate")]
    pub auto_rotate: bool,
    /// Turntable speed in degrees per second.
    #[schemars(title = "Auto Rotate Speed", range(min = 0.0, max = 90.0), extend("step" = 0.5))]
    pub auto_rotate_speed: f32,
    /// Initial framing distance as a multiple of the model's bounding
    /// diagonal.
    #[schemars(skip)]
    pub initial_distance_factor: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.1,
            zfar: 5000.0,
            rotate_speed: 0.005,
            zoom_speed: 0.1,
            min_distance: 50.0,
            max_distance: 2000.0,
            auto_rotate: true,
            auto_rotate_speed: 4.8,
            initial_distance_factor: 1.5,
        }
    }
}
