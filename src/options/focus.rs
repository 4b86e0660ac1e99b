use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

/// What a pick on a different target does while one is already focused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum RepickPolicy {
    /// Picks on targets are ignored until the view is reset.
    #[default]
    Ignore,
    /// The camera flies straight to the newly picked target.
    Retarget,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Focus", inline)]
#[serde(default)]
/// Focus framing and transition timing.
pub struct FocusOptions {
    /// Behaviour of target picks while already focused.
    #[schemars(title = "Repick Policy")]
    pub repick: RepickPolicy,
    /// Node names are truncated at the first occurrence of this marker to
    /// derive the target id. Empty keeps the whole name.
    #[schemars(skip)]
    pub material_separator: String,
    /// Camera offset from the target center, in multiples of the target's
    /// bounding-box diagonal.
    #[schemars(skip)]
    pub framing_offset: [f32; 3],
    /// Lower bound for the target size used in framing, so degenerate
    /// bounds still get a usable standoff.
    #[schemars(title = "Min Focus Size", range(min = 0.0))]
    pub min_focus_size: f32,
    /// Duration of the fly-in to a target, in seconds.
    #[schemars(title = "Focus Duration", range(min = 0.0, max = 5.0), extend("step" = 0.1))]
    pub focus_duration_secs: f32,
    /// Duration of the return to the default pose, in seconds.
    #[schemars(title = "Reset Duration", range(min = 0.0, max = 5.0), extend("step" = 0.1))]
    pub reset_duration_secs: f32,
    /// Easing curve for the fly-in.
    #[schemars(skip)]
    pub focus_easing: EasingFunction,
    /// Easing curve for the return.
    #[schemars(skip)]
    pub reset_easing: EasingFunction,
    /// Mark every mesh under the loaded root clickable.
    #[schemars(skip)]
    pub mark_meshes_clickable: bool,
}

impl Default for FocusOptions {
    fn default() -> Self {
        Self {
            repick: RepickPolicy::Ignore,
            material_separator: "_Material".to_owned(),
            framing_offset: [-0.6, 0.3, 1.0],
            min_focus_size: 1e-3,
            focus_duration_secs: 1.2,
            reset_duration_secs: 1.0,
            focus_easing: EasingFunction::DEFAULT,
            reset_easing: EasingFunction::DEFAULT,
            mark_meshes_clickable: true,
        }
    }
}
