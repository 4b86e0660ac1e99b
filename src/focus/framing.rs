use glam::Vec3;

use crate::camera::CameraPose;
use crate::options::FocusOptions;
use crate::scene::Aabb;

/// Computes the camera pose that frames a focus target.
///
/// The camera sits at `center + offset * size` looking at `center`, where
/// `size` is the bounding-box diagonal. Scaling by the diagonal keeps the
/// target fully in view whatever its size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusFraming {
    /// Offset in multiples of the target size.
    pub offset: Vec3,
    /// Lower bound for the target size.
    pub min_size: f32,
}

impl Default for FocusFraming {
    fn default() -> Self {
        Self::from_options(&FocusOptions::default())
    }
}

impl FocusFraming {
    /// Framing taken from focus options.
    #[must_use]
    pub fn from_options(options: &FocusOptions) -> Self {
        Self {
            offset: Vec3::from_array(options.framing_offset),
            min_size: options.min_focus_size,
        }
    }

    /// Pose looking at the center of `bounds`.
    #[must_use]
    pub fn focus_pose(&self, bounds: &Aabb) -> CameraPose {
        let center = bounds.center();
        let diagonal = bounds.diagonal();
        let size = if diagonal.is_finite() {
            diagonal.max(self.min_size)
        } else {
            self.min_size
        };
        CameraPose::new(center + self.offset * size, center)
    }
}
