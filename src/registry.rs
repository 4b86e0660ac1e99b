//! Focus target registry: which target ids are interactive and what their
//! info panel shows.
//!
//! The registry is built once at startup and exposes no mutating API
//! afterwards. Ids missing from it are "not interactive" for panel
//! purposes even when their geometry is clickable.
//!
//! TOML layout:
//!
//! ```toml
//! [targets.Sphere002]
//! title = "Contact"
//! content = "<h3>Contact</h3>"
//! ```
//!
//! JSON uses the same shape: `{"targets": {"Sphere002": {...}}}`.

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::VantageError;

/// What the info panel shows for one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    /// Panel heading.
    pub title: String,
    /// Opaque formatted body passed through to the panel surface.
    pub content: String,
}

impl Payload {
    /// Payload from a title and body.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

#[derive(Deserialize)]
struct RegistryFile {
    #[serde(default)]
    targets: FxHashMap<String, Payload>,
}

/// Immutable map from target id to [`Payload`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusRegistry {
    entries: FxHashMap<String, Payload>,
}

impl FocusRegistry {
    /// Build from `(id, payload)` pairs. Later duplicates replace earlier
    /// ones; empty ids are dropped since no pick can resolve to them.
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Payload)>,
        K: Into<String>,
    {
        let mut map = FxHashMap::default();
        for (id, payload) in entries {
            let id = id.into();
            if id.is_empty() {
                log::warn!("registry entry with empty id ignored");
                continue;
            }
            if let Some(old) = map.insert(id, payload) {
                log::debug!("registry entry '{}' replaced", old.title);
            }
        }
        Self { entries: map }
    }

    /// Parse the `[targets.<id>]` TOML layout.
    pub fn from_toml_str(s: &str) -> Result<Self, VantageError> {
        let file: RegistryFile = toml::from_str(s)
            .map_err(|e| VantageError::RegistryParse(e.to_string()))?;
        Ok(Self::from_entries(file.targets))
    }

    /// Parse the `{"targets": {...}}` JSON layout.
    pub fn from_json_str(s: &str) -> Result<Self, VantageError> {
        let file: RegistryFile = serde_json::from_str(s)
            .map_err(|e| VantageError::RegistryParse(e.to_string()))?;
        Ok(Self::from_entries(file.targets))
    }

    /// Load from a file, choosing JSON for `.json` and TOML otherwise.
    pub fn load(path: &Path) -> Result<Self, VantageError> {
        let content = std::fs::read_to_string(path)?;
        let registry = if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };
        log::info!(
            "loaded {} focus targets from {}",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }

    /// Payload for `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Payload> {
        self.entries.get(id)
    }

    /// Whether `id` is a registered focus target.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of registered targets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no targets are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered ids, sorted.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> =
            self.entries.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}
