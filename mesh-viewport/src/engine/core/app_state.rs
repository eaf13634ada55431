#[cfg(test)]
#[path = "app_state_test.rs"]
mod app_state_test;

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum ViewportState {
    #[default]
    Uninitialized,
    SceneBuilt,
    Animating,
    Destroyed,
}

impl ViewportState {
    /// Whether the lifecycle allows moving from `self` to `next`.
    ///
    /// Nothing skips `SceneBuilt`, and `Destroyed` is terminal.
    pub fn can_transition_to(self, next: ViewportState) -> bool {
        use ViewportState::*;
        matches!(
            (self, next),
            (Uninitialized, SceneBuilt)
                | (SceneBuilt, Animating)
                | (SceneBuilt, Destroyed)
                | (Animating, Destroyed)
        )
    }

    /// Scene exists and input handlers are installed.
    pub fn is_live(self) -> bool {
        matches!(self, ViewportState::SceneBuilt | ViewportState::Animating)
    }
}

/// Run condition for systems that act as installed listeners. Once the
/// viewport leaves the live states they stop running.
pub fn viewport_is_live(state: Res<State<ViewportState>>) -> bool {
    state.get().is_live()
}

/// Request a lifecycle transition, refusing edges the state machine forbids.
pub fn request_transition(
    current: &State<ViewportState>,
    next_state: &mut NextState<ViewportState>,
    target: ViewportState,
) -> bool {
    let from = *current.get();
    if !from.can_transition_to(target) {
        warn!("Ignoring viewport transition {from:?} → {target:?}");
        return false;
    }
    info!("→ Viewport transitioning {from:?} → {target:?}");
    next_state.set(target);
    true
}
