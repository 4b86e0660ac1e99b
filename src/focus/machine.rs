use super::FocusState;
use crate::options::RepickPolicy;
use crate::picking::PickOutcome;
use crate::registry::FocusRegistry;
use crate::scene::Aabb;

/// Side effect the owner must carry out after a state change.
///
/// The machine only decides; the engine applies the action in the same
/// call so state, panel and controls never disagree.
#[derive(Debug, Clone, PartialEq)]
pub enum FocusAction {
    /// Nothing to do.
    None,
    /// Fly to `bounds`, show the panel for `id`, lock free-camera controls.
    FocusIn {
        /// Newly focused target id.
        id: String,
        /// World bounds of the target at pick time.
        bounds: Aabb,
    },
    /// Return to the default pose, hide the panel, unlock controls.
    FocusOut,
}

/// Overview/focused transition table.
#[derive(Debug, Clone, Default)]
pub struct FocusMachine {
    state: FocusState,
    policy: RepickPolicy,
}

impl FocusMachine {
    /// Machine in [`FocusState::Overview`].
    #[must_use]
    pub fn new(policy: RepickPolicy) -> Self {
        Self {
            state: FocusState::Overview,
            policy,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &FocusState {
        &self.state
    }

    /// Policy for picks on targets while focused.
    #[must_use]
    pub fn policy(&self) -> RepickPolicy {
        self.policy
    }

    /// Apply a resolved pick.
    pub fn handle_pick(
        &mut self,
        outcome: &PickOutcome,
        registry: &FocusRegistry,
    ) -> FocusAction {
        match (&self.state, outcome) {
            (FocusState::Overview, PickOutcome::Target(target)) => {
                if registry.contains(&target.id) {
                    self.focus_in(&target.id, target.bounds)
                } else {
                    log::debug!("'{}' is not a registered target", target.id);
                    FocusAction::None
                }
            }
            (FocusState::Overview, _) => FocusAction::None,
            (FocusState::Focused(_), PickOutcome::Background) => {
                self.focus_out()
            }
            (FocusState::Focused(current), PickOutcome::Target(target)) => {
                match self.policy {
                    RepickPolicy::Ignore => {
                        log::trace!(
                            "pick on '{}' ignored while focused on '{current}'",
                            target.id
                        );
                        FocusAction::None
                    }
                    RepickPolicy::Retarget
                        if *current != target.id
                            && registry.contains(&target.id) =>
                    {
                        self.focus_in(&target.id, target.bounds)
                    }
                    RepickPolicy::Retarget => FocusAction::None,
                }
            }
            (FocusState::Focused(_), PickOutcome::NonInteractive { .. }) => {
                FocusAction::None
            }
        }
    }

    /// Explicit return to the overview. A no-op in the overview.
    pub fn handle_reset(&mut self) -> FocusAction {
        if self.state.is_focused() {
            self.focus_out()
        } else {
            FocusAction::None
        }
    }

    fn focus_in(&mut self, id: &str, bounds: Aabb) -> FocusAction {
        log::info!("focus -> {id}");
        self.state = FocusState::Focused(id.to_owned());
        FocusAction::FocusIn {
            id: id.to_owned(),
            bounds,
        }
    }

    fn focus_out(&mut self) -> FocusAction {
        if let FocusState::Focused(id) = &self.state {
            log::info!("focus <- {id}");
        }
        self.state = FocusState::Overview;
        FocusAction::FocusOut
    }
}
