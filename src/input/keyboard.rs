use serde::{Deserialize, Serialize};

/// Viewer actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings]
/// reset_view = "Escape"
/// toggle_auto_rotate = "KeyR"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Leave focus and return to the overview (explicit reset trigger).
    ResetView,
    /// Animate back to the default pose, leaving focus if necessary.
    RecenterCamera,
    /// Toggle idle turntable rotation.
    ToggleAutoRotate,
}
