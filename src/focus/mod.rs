//! Overview/focused state and the framing of focus targets.

/// Focus pose computation from target bounds.
pub mod framing;
/// Transition table between overview and focused states.
pub mod machine;

pub use framing::FocusFraming;
pub use machine::{FocusAction, FocusMachine};

/// Where the viewer's attention currently is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FocusState {
    /// Default overview of the whole model.
    #[default]
    Overview,
    /// Camera and panel centered on one target id.
    Focused(String),
}

impl FocusState {
    /// Whether a target is focused.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        matches!(self, Self::Focused(_))
    }

    /// The focused target id.
    #[must_use]
    pub fn focused_id(&self) -> Option<&str> {
        match self {
            Self::Focused(id) => Some(id),
            Self::Overview => None,
        }
    }
}
