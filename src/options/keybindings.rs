use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
/// Configurable keyboard bindings mapping actions to key codes.
///
/// Key strings use physical key-code names as reported by browsers and
/// windowing toolkits: `"KeyQ"`, `"Escape"`, etc.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `ResetView` → `"Escape"`).
    pub bindings: HashMap<KeyAction, String>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::ResetView, "Escape".into()),
            (KeyAction::RecenterCamera, "KeyQ".into()),
            (KeyAction::ToggleAutoRotate, "KeyR".into()),
        ]);
        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.bindings
            .iter()
            .find_map(|(action, bound)| (bound == key).then_some(*action))
    }
}
