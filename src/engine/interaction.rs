//! Pick resolution and focus transitions for [`ViewerEngine`].

use super::{HoverTarget, ViewerEngine};
use crate::camera::TransitionKind;
use crate::focus::FocusAction;
use crate::panel::PanelSurface;
use crate::picking::PickOutcome;
use crate::scene::Aabb;

// ── Picking ──

impl<P: PanelSurface> ViewerEngine<P> {
    /// Pick at pointer position `(x, y)` and apply the focus transition
    /// table.
    ///
    /// Returns the resolved outcome, or `None` when no pick was attempted
    /// (model not loaded yet, or degenerate viewport).
    pub fn pick_at(&mut self, x: f32, y: f32) -> Option<PickOutcome> {
        let Some(model) = &self.model else {
            log::trace!("pick at ({x}, {y}) before model load ignored");
            return None;
        };
        let Some(ray) = self.context.ray_at(x, y) else {
            log::debug!("pick at ({x}, {y}) has no usable viewport");
            return None;
        };

        let outcome = self.resolver.resolve(&model.scene, &ray);
        log::debug!("pick at ({x}, {y}) -> {outcome:?}");

        let action = self.focus.handle_pick(&outcome, &self.registry);
        self.apply_focus_action(action);
        Some(outcome)
    }
}

// ── Hover ──

impl<P: PanelSurface> ViewerEngine<P> {
    /// Re-resolve the target under the pointer at `(x, y)`.
    ///
    /// Any clickable target counts, registered or not. Background and
    /// non-interactive hits clear the hover. The surface's
    /// [`highlight`](PanelSurface::highlight) hook is called only when the
    /// hovered node changes. Returns `true` on a change; before load this
    /// is always `false`.
    pub fn hover_at(&mut self, x: f32, y: f32) -> bool {
        let Some(model) = &self.model else {
            return false;
        };
        let Some(ray) = self.context.ray_at(x, y) else {
            return false;
        };

        let next = match self.resolver.resolve(&model.scene, &ray) {
            PickOutcome::Target(target) => Some(HoverTarget {
                node: target.node,
                id: target.id,
            }),
            PickOutcome::Background | PickOutcome::NonInteractive { .. } => None,
        };
        if next.as_ref().map(|h| h.node) == self.hovered.as_ref().map(|h| h.node) {
            return false;
        }

        log::trace!(
            "hover {:?} -> {:?}",
            self.hovered.as_ref().map(|h| h.id.as_str()),
            next.as_ref().map(|h| h.id.as_str())
        );
        self.panel.highlight(next.as_ref().map(|h| h.id.as_str()));
        self.hovered = next;
        true
    }
}

// ── Focus transitions ──

impl<P: PanelSurface> ViewerEngine<P> {
    /// Explicit reset trigger: leave focus and fly back to the default
    /// pose. Returns `false` (with no side effects) in the overview.
    pub fn reset_view(&mut self) -> bool {
        let action = self.focus.handle_reset();
        let changed = action != FocusAction::None;
        self.apply_focus_action(action);
        changed
    }

    /// Fly back to the default pose. While focused this is a full reset;
    /// in the overview it only moves the camera.
    pub fn recenter_camera(&mut self) {
        if self.focus.state().is_focused() {
            let _ = self.reset_view();
            return;
        }
        let Some(default_pose) = self.default_pose() else {
            return;
        };
        let focus = &self.options.focus;
        self.motion.begin_transition(
            TransitionKind::Recenter,
            self.context.camera.pose(),
            default_pose,
            focus.reset_duration_secs,
            focus.reset_easing,
            None,
        );
    }

    /// Carry out a state-machine decision. State, panel and controls are
    /// all updated before this returns.
    fn apply_focus_action(&mut self, action: FocusAction) {
        match action {
            FocusAction::None => {}
            FocusAction::FocusIn { id, bounds } => self.enter_focus(&id, &bounds),
            FocusAction::FocusOut => self.leave_focus(),
        }
    }

    fn enter_focus(&mut self, id: &str, bounds: &Aabb) {
        let to = self.framing.focus_pose(bounds);
        let focus = &self.options.focus;
        let label = id.to_owned();
        self.motion.begin_transition(
            TransitionKind::FocusIn,
            self.context.camera.pose(),
            to,
            focus.focus_duration_secs,
            focus.focus_easing,
            Some(Box::new(move || log::debug!("camera settled on '{label}'"))),
        );

        match self.registry.get(id) {
            Some(payload) => {
                let _ = self.panel.show(id, payload);
            }
            None => log::warn!("focused '{id}' has no registry payload"),
        }
        self.context.camera.set_controls_enabled(false);
    }

    fn leave_focus(&mut self) {
        if let Some(default_pose) = self.default_pose() {
            let focus = &self.options.focus;
            self.motion.begin_transition(
                TransitionKind::FocusOut,
                self.context.camera.pose(),
                default_pose,
                focus.reset_duration_secs,
                focus.reset_easing,
                None,
            );
        }
        let _ = self.panel.hide();
        self.context.camera.set_controls_enabled(true);
    }
}
