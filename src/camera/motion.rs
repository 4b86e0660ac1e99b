//! Single-slot camera motion driver.
//!
//! At most one transition is in flight. Starting a new one replaces the
//! old one outright: the old tween stops where it is and its completion
//! callback is dropped without running.

use crate::camera::core::CameraPose;
use crate::camera::tween::CameraTween;
use crate::util::easing::EasingFunction;

/// Callback run once when a transition lands.
pub type CompletionCallback = Box<dyn FnOnce()>;

/// Why a transition was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Flying in to frame a focus target.
    FocusIn,
    /// Returning to the default pose after leaving focus.
    FocusOut,
    /// Returning to the default pose without a focus change.
    Recenter,
}

impl TransitionKind {
    /// Whether this transition heads back to the default pose.
    #[must_use]
    pub fn is_return(self) -> bool {
        matches!(self, Self::FocusOut | Self::Recenter)
    }
}

/// Result of one [`MotionController::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionStep {
    /// Pose to apply to the camera this frame.
    pub pose: CameraPose,
    /// Kind of the transition that produced the pose.
    pub kind: TransitionKind,
    /// `true` on the step that reached the end pose.
    pub completed: bool,
}

struct ActiveTransition {
    kind: TransitionKind,
    tween: CameraTween,
    on_complete: Option<CompletionCallback>,
}

/// Drives the one camera transition that may be running.
#[derive(Default)]
pub struct MotionController {
    active: Option<ActiveTransition>,
}

impl std::fmt::Debug for MotionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MotionController")
            .field("kind", &self.active_kind())
            .field("tween", &self.active.as_ref().map(|a| a.tween))
            .finish()
    }
}

impl MotionController {
    /// Controller with nothing in flight.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start moving from `from` to `to`, replacing anything in flight.
    pub fn begin_transition(
        &mut self,
        kind: TransitionKind,
        from: CameraPose,
        to: CameraPose,
        duration: f32,
        easing: EasingFunction,
        on_complete: Option<CompletionCallback>,
    ) {
        if let Some(previous) = self.active.take() {
            log::debug!(
                "{:?} transition superseded by {kind:?} at {:.0}%",
                previous.kind,
                previous.tween.progress() * 100.0
            );
        }
        self.active = Some(ActiveTransition {
            kind,
            tween: CameraTween::new(from, to, duration, easing),
            on_complete,
        });
    }

    /// Step the active transition by `dt` seconds.
    ///
    /// Returns `None` when idle. On the completing step the callback runs
    /// and the slot is cleared before returning.
    pub fn advance(&mut self, dt: f32) -> Option<MotionStep> {
        let active = self.active.as_mut()?;
        let (pose, completed) = active.tween.advance(dt);
        let kind = active.kind;

        if completed {
            if let Some(done) = self.active.take() {
                log::trace!("{kind:?} transition complete");
                if let Some(callback) = done.on_complete {
                    callback();
                }
            }
        }

        Some(MotionStep {
            pose,
            kind,
            completed,
        })
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Kind of the in-flight transition.
    #[must_use]
    pub fn active_kind(&self) -> Option<TransitionKind> {
        self.active.as_ref().map(|a| a.kind)
    }

    /// End pose of the in-flight transition.
    #[must_use]
    pub fn target_pose(&self) -> Option<CameraPose> {
        self.active.as_ref().map(|a| a.tween.end())
    }
}
