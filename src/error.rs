//! Crate-level error types.

use std::fmt;

/// Errors produced by the vantage crate.
///
/// Only the file-facing edges (options, registry, scene descriptions) can
/// fail. The interaction core itself never returns an error.
#[derive(Debug)]
pub enum VantageError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Focus registry could not be parsed.
    RegistryParse(String),
    /// Scene description could not be parsed or is inconsistent.
    SceneDescription(String),
}

impl fmt::Display for VantageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::RegistryParse(msg) => {
                write!(f, "registry parse error: {msg}")
            }
            Self::SceneDescription(msg) => {
                write!(f, "scene description error: {msg}")
            }
        }
    }
}

impl std::error::Error for VantageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VantageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
