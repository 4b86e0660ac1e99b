//! Viewer options with TOML preset support.
//!
//! Camera controls, focus framing/timing and keybindings are consolidated
//! here. Options serialize to/from TOML so a deployment can ship presets
//! next to the model instead of recompiling.

mod camera;
mod focus;
mod keybindings;

use std::path::Path;

pub use camera::CameraOptions;
pub use focus::{FocusOptions, RepickPolicy};
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::VantageError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[focus]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and orbit-control parameters.
    pub camera: CameraOptions,
    /// Focus framing and transition timing.
    pub focus: FocusOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// Non-finite numbers (TOML accepts `nan` and `inf`) are rejected, see
    /// [`validate`](Self::validate).
    pub fn from_toml_str(content: &str) -> Result<Self, VantageError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Check that every numeric option is finite and that sizes and
    /// durations are not negative.
    pub fn validate(&self) -> Result<(), VantageError> {
        let invalid =
            |field: &str| Err(VantageError::OptionsParse(format!("invalid {field}")));

        let camera = &self.camera;
        let camera_values = [
            ("camera.fovy", camera.fovy),
            ("camera.znear", camera.znear),
            ("camera.zfar", camera.zfar),
            ("camera.rotate_speed", camera.rotate_speed),
            ("camera.zoom_speed", camera.zoom_speed),
            ("camera.min_distance", camera.min_distance),
            ("camera.max_distance", camera.max_distance),
            ("camera.auto_rotate_speed", camera.auto_rotate_speed),
            ("camera.initial_distance_factor", camera.initial_distance_factor),
        ];
        for (field, value) in camera_values {
            if !value.is_finite() {
                return invalid(field);
            }
        }

        let focus = &self.focus;
        if !focus.framing_offset.iter().all(|v| v.is_finite()) {
            return invalid("focus.framing_offset");
        }
        let focus_values = [
            ("focus.min_focus_size", focus.min_focus_size),
            ("focus.focus_duration_secs", focus.focus_duration_secs),
            ("focus.reset_duration_secs", focus.reset_duration_secs),
        ];
        for (field, value) in focus_values {
            if !value.is_finite() || value < 0.0 {
                return invalid(field);
            }
        }
        if !focus.focus_easing.is_finite() {
            return invalid("focus.focus_easing");
        }
        if !focus.reset_easing.is_finite() {
            return invalid("focus.reset_easing");
        }
        Ok(())
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, VantageError> {
        let content =
            std::fs::read_to_string(path).map_err(VantageError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), VantageError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VantageError::Io)?;
        }
        std::fs::write(path, content).map_err(VantageError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::easing::EasingFunction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[focus]
repick = "retarget"
focus_duration_secs = 0.5
focus_easing = "linear"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.focus.repick, RepickPolicy::Retarget);
        assert_eq!(opts.focus.focus_duration_secs, 0.5);
        assert_eq!(opts.focus.focus_easing, EasingFunction::Linear);
        // Everything else should be default
        assert_eq!(opts.focus.reset_duration_secs, 1.0);
        assert_eq!(opts.focus.material_separator, "_Material");
        assert_eq!(opts.camera, CameraOptions::default());
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml_str("[camera]\nfovy = \"wide\"")
            .unwrap_err();
        assert!(matches!(err, VantageError::OptionsParse(_)));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        for toml_str in [
            "[focus]\nfocus_easing = { cubic_hermite = { c1 = nan, c2 = 1.0 } }",
            "[focus]\nreset_easing = { cubic_hermite = { c1 = 0.3, c2 = inf } }",
            "[focus]\nframing_offset = [-0.6, nan, 1.0]",
            "[focus]\nmin_focus_size = inf",
            "[focus]\nmin_focus_size = -1.0",
            "[focus]\nfocus_duration_secs = nan",
            "[camera]\nrotate_speed = nan",
        ] {
            let err = Options::from_toml_str(toml_str).unwrap_err();
            assert!(
                matches!(err, VantageError::OptionsParse(_)),
                "{toml_str} gave {err}"
            );
        }
    }

    #[test]
    fn overshooting_easing_is_accepted() {
        let opts = Options::from_toml_str(
            "[focus]\nfocus_easing = { cubic_hermite = { c1 = 2.0, c2 = 1.0 } }",
        )
        .unwrap();
        assert_eq!(
            opts.focus.focus_easing,
            EasingFunction::CubicHermite { c1: 2.0, c2: 1.0 }
        );
    }

    #[test]
    fn keybinding_lookup() {
        use crate::input::KeyAction;
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyQ"),
            Some(KeyAction::RecenterCamera)
        );
        assert_eq!(
            opts.keybindings.lookup("Escape"),
            Some(KeyAction::ResetView)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn keybindings_override_from_toml() {
        use crate::input::KeyAction;
        let opts = Options::from_toml_str(
            "[keybindings]\nreset_view = \"Backspace\"\n",
        )
        .unwrap();
        assert_eq!(
            opts.keybindings.lookup("Backspace"),
            Some(KeyAction::ResetView)
        );
        assert_eq!(opts.keybindings.lookup("Escape"), None);
    }

    #[test]
    fn save_then_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("vantage-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.camera.auto_rotate = false;
        opts.save(&dir.join("still.toml")).unwrap();

        let loaded = Options::load(&dir.join("still.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["still".to_owned()]);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("focus"));
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("auto_rotate").is_some());
        assert!(camera.get("znear").is_none());

        let focus = &props["focus"]["properties"];
        assert!(focus.get("focus_duration_secs").is_some());
        assert!(focus.get("material_separator").is_none());
    }
}
