use glam::{Mat3, Quat, Vec2, Vec3};

use crate::camera::core::{Camera, CameraPose};
use crate::options::CameraOptions;
use crate::scene::Aabb;

/// Distance used before any model has been framed.
const INITIAL_DISTANCE: f32 = 500.0;

/// Orbit distances below this are treated as "eye on target".
const MIN_ORBIT_DISTANCE: f32 = 1e-4;

/// Which free-camera gestures are currently honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlFlags {
    /// Drag-to-orbit.
    pub rotate: bool,
    /// Scroll-to-zoom.
    pub zoom: bool,
}

/// Orbital camera: orientation, distance and focus point, plus the
/// user-control switches that focus mode turns off.
#[derive(Debug, Clone)]
pub struct CameraController {
    orientation: Quat,
    distance: f32,
    focus_point: Vec3,

    camera: Camera,
    controls: ControlFlags,

    rotate_speed: f32,
    zoom_speed: f32,
    min_distance: f32,
    max_distance: f32,
    auto_rotate: bool,
    auto_rotate_speed: f32,
}

impl CameraController {
    /// Controller looking down -Z at the origin from [`INITIAL_DISTANCE`].
    #[must_use]
    pub fn new(options: &CameraOptions, aspect: f32) -> Self {
        let focus_point = Vec3::ZERO;
        let camera = Camera {
            eye: focus_point + Vec3::Z * INITIAL_DISTANCE,
            target: focus_point,
            up: Vec3::Y,
            aspect: if aspect.is_finite() && aspect > 0.0 {
                aspect
            } else {
                1.0
            },
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };

        Self {
            orientation: Quat::IDENTITY,
            distance: INITIAL_DISTANCE,
            focus_point,
            camera,
            controls: ControlFlags {
                rotate: true,
                zoom: true,
            },
            rotate_speed: options.rotate_speed,
            zoom_speed: options.zoom_speed,
            min_distance: options.min_distance,
            max_distance: options.max_distance.max(options.min_distance),
            auto_rotate: options.auto_rotate,
            auto_rotate_speed: options.auto_rotate_speed,
        }
    }

    fn update_camera_pos(&mut self) {
        let dir = self.orientation * Vec3::Z;

        self.camera.eye = self.focus_point + (dir * self.distance);
        self.camera.target = self.focus_point;
        self.camera.up = self.orientation * Vec3::Y;
    }

    /// The camera as it should be rendered this frame.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Current eye position and look-at target.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        self.camera.pose()
    }

    /// Orbit center.
    #[must_use]
    pub fn focus_point(&self) -> Vec3 {
        self.focus_point
    }

    /// Distance from the eye to the orbit center.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Place the camera exactly at `pose`.
    ///
    /// The orbit state is rebuilt so later drags continue from the new
    /// pose with world +Y kept as up. Distance limits are not applied.
    pub fn set_pose(&mut self, pose: CameraPose) {
        let offset = pose.position - pose.look_at;
        let distance = offset.length();
        if distance > MIN_ORBIT_DISTANCE {
            self.orientation = self.orientation_facing(offset / distance);
        }
        self.distance = distance;
        self.focus_point = pose.look_at;

        self.camera.eye = pose.position;
        self.camera.target = pose.look_at;
        self.camera.up = self.orientation * Vec3::Y;
    }

    /// Rotation whose local +Z is `dir`, keeping local +Y as close to world
    /// +Y as possible.
    fn orientation_facing(&self, dir: Vec3) -> Quat {
        let right = Vec3::Y.cross(dir);
        let right = if right.length_squared() > 1e-8 {
            right.normalize()
        } else {
            // Looking straight up or down: keep the current heading.
            (self.orientation * Vec3::X).normalize_or(Vec3::X)
        };
        let up = dir.cross(right).normalize();
        Quat::from_mat3(&Mat3::from_cols(right, up, dir)).normalize()
    }

    /// Update the viewport aspect ratio. Zero-height viewports are ignored.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.camera.aspect = width / height;
        }
    }

    /// Orbit by a mouse drag of `delta` pixels.
    ///
    /// Returns `false` when rotation is disabled.
    pub fn rotate(&mut self, delta: Vec2) -> bool {
        if !self.controls.rotate || !delta.is_finite() {
            return false;
        }

        // Horizontal rotation around camera's up vector
        let up = self.orientation * Vec3::Y;
        let horizontal_rotation =
            Quat::from_axis_angle(up, -delta.x * self.rotate_speed);
        self.orientation = horizontal_rotation * self.orientation;

        // Vertical rotation around the (updated) right vector
        let right = self.orientation * Vec3::X;
        let vertical_rotation =
            Quat::from_axis_angle(right, -delta.y * self.rotate_speed);
        self.orientation = (vertical_rotation * self.orientation).normalize();

        self.update_camera_pos();
        true
    }

    /// Dolly toward (positive) or away from (negative) the focus point,
    /// clamped to the configured distance range.
    ///
    /// Returns `false` when zoom is disabled.
    pub fn zoom(&mut self, delta: f32) -> bool {
        if !self.controls.zoom || !delta.is_finite() {
            return false;
        }
        self.distance *= 1.0 - delta * self.zoom_speed;
        self.distance = self.distance.clamp(self.min_distance, self.max_distance);
        self.update_camera_pos();
        true
    }

    /// Enable or disable both free-camera gestures at once.
    pub fn set_controls_enabled(&mut self, enabled: bool) {
        self.controls = ControlFlags {
            rotate: enabled,
            zoom: enabled,
        };
    }

    /// Current gesture switches.
    #[must_use]
    pub fn controls(&self) -> ControlFlags {
        self.controls
    }

    /// Whether idle turntable rotation is switched on.
    #[must_use]
    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    /// Switch idle turntable rotation on or off.
    pub fn set_auto_rotate(&mut self, enabled: bool) {
        self.auto_rotate = enabled;
    }

    /// Flip idle turntable rotation, returning the new state.
    pub fn toggle_auto_rotate(&mut self) -> bool {
        self.auto_rotate = !self.auto_rotate;
        self.auto_rotate
    }

    /// Spin the camera about the world Y axis through the focus point by
    /// `auto_rotate_speed * dt` degrees.
    ///
    /// Returns `true` if the camera moved.
    pub fn turntable(&mut self, dt: f32) -> bool {
        if !self.auto_rotate || !dt.is_finite() || dt <= 0.0 {
            return false;
        }
        let angle = (self.auto_rotate_speed * dt).to_radians();
        if angle == 0.0 {
            return false;
        }
        self.orientation =
            (Quat::from_rotation_y(angle) * self.orientation).normalize();
        self.update_camera_pos();
        true
    }

    /// Center on `bounds` and back off along +Z to `diagonal * factor`.
    pub fn fit_to_bounds(&mut self, bounds: &Aabb, factor: f32) {
        let distance = (bounds.diagonal() * factor).max(MIN_ORBIT_DISTANCE);
        self.orientation = Quat::IDENTITY;
        self.focus_point = bounds.center();
        self.distance = distance;
        self.update_camera_pos();
    }
}
