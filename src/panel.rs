//! Info panel binding.
//!
//! The engine never talks to a presentation layer directly. It drives a
//! [`PanelBinding`], which forwards only real changes to the host's
//! [`PanelSurface`].

use crate::registry::Payload;

/// Host-side panel display.
pub trait PanelSurface {
    /// Show the panel (or replace its content in place if already shown).
    fn show_panel(&mut self, title: &str, content: &str);
    /// Hide the panel.
    fn hide_panel(&mut self);
    /// Highlight the hovered target, or clear the highlight with `None`.
    /// Surfaces without hover feedback can ignore this.
    fn highlight(&mut self, _target: Option<&str>) {}
}

impl<S: PanelSurface + ?Sized> PanelSurface for Box<S> {
    fn show_panel(&mut self, title: &str, content: &str) {
        (**self).show_panel(title, content);
    }

    fn hide_panel(&mut self) {
        (**self).hide_panel();
    }

    fn highlight(&mut self, target: Option<&str>) {
        (**self).highlight(target);
    }
}

/// Surface that only logs. Useful for headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogPanel;

impl PanelSurface for LogPanel {
    fn show_panel(&mut self, title: &str, content: &str) {
        log::info!("panel shown: {title} ({} bytes)", content.len());
    }

    fn hide_panel(&mut self) {
        log::info!("panel hidden");
    }

    fn highlight(&mut self, target: Option<&str>) {
        log::debug!("highlight {target:?}");
    }
}

/// Tracks what the surface is showing and suppresses redundant calls.
#[derive(Debug)]
pub struct PanelBinding<S: PanelSurface> {
    surface: S,
    shown: Option<(String, Payload)>,
}

impl<S: PanelSurface> PanelBinding<S> {
    /// Binding over a hidden surface.
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            shown: None,
        }
    }

    /// Show `payload` for `id`.
    ///
    /// Returns `false` (and leaves the surface alone) if exactly this is
    /// already on screen. A different payload replaces the content without
    /// hiding first.
    pub fn show(&mut self, id: &str, payload: &Payload) -> bool {
        if let Some((shown_id, shown_payload)) = &self.shown {
            if shown_id == id && shown_payload == payload {
                return false;
            }
        }
        self.surface.show_panel(&payload.title, &payload.content);
        self.shown = Some((id.to_owned(), payload.clone()));
        true
    }

    /// Hide the panel. Returns `false` if it was already hidden.
    pub fn hide(&mut self) -> bool {
        if self.shown.take().is_none() {
            return false;
        }
        self.surface.hide_panel();
        true
    }

    /// Whether the panel is visible.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.shown.is_some()
    }

    /// Id whose payload is on screen.
    #[must_use]
    pub fn shown_id(&self) -> Option<&str> {
        self.shown.as_ref().map(|(id, _)| id.as_str())
    }

    /// Payload on screen.
    #[must_use]
    pub fn shown_payload(&self) -> Option<&Payload> {
        self.shown.as_ref().map(|(_, payload)| payload)
    }

    /// The wrapped surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the wrapped surface.
    ///
    /// Calling `show_panel`/`hide_panel` through this bypasses the
    /// binding's bookkeeping.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Forward a hover highlight change to the surface. Highlighting is
    /// independent of panel visibility.
    pub fn highlight(&mut self, target: Option<&str>) {
        self.surface.highlight(target);
    }

    /// Unwrap the surface.
    pub fn into_surface(self) -> S {
        self.surface
    }
}

/// Surface that records every call, for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingPanel {
    pub(crate) calls: Vec<PanelCall>,
    pub(crate) highlights: Vec<Option<String>>,
}

/// One recorded surface call.
#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PanelCall {
    Show { title: String, content: String },
    Hide,
}

#[cfg(test)]
impl PanelSurface for RecordingPanel {
    fn show_panel(&mut self, title: &str, content: &str) {
        self.calls.push(PanelCall::Show {
            title: title.to_owned(),
            content: content.to_owned(),
        });
    }

    fn hide_panel(&mut self) {
        self.calls.push(PanelCall::Hide);
    }

    fn highlight(&mut self, target: Option<&str>) {
        self.highlights.push(target.map(str::to_owned));
    }
}
