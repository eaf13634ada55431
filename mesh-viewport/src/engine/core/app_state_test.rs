use super::*;
use bevy::state::app::StatesPlugin;

use ViewportState::*;

const ALL: [ViewportState; 4] = [Uninitialized, SceneBuilt, Animating, Destroyed];

#[test]
fn forward_path_is_allowed() {
    assert!(Uninitialized.can_transition_to(SceneBuilt));
    assert!(SceneBuilt.can_transition_to(Animating));
    assert!(Animating.can_transition_to(Destroyed));
}

#[test]
fn teardown_allowed_from_scene_built() {
    assert!(SceneBuilt.can_transition_to(Destroyed));
}

#[test]
fn nothing_skips_scene_built() {
    assert!(!Uninitialized.can_transition_to(Animating));
    assert!(!Uninitialized.can_transition_to(Destroyed));
}

#[test]
fn destroyed_is_terminal() {
    for next in ALL {
        assert!(!Destroyed.can_transition_to(next));
    }
}

#[test]
fn no_backwards_edges() {
    assert!(!Animating.can_transition_to(SceneBuilt));
    assert!(!SceneBuilt.can_transition_to(Uninitialized));
}

#[test]
fn live_states() {
    assert!(!Uninitialized.is_live());
    assert!(SceneBuilt.is_live());
    assert!(Animating.is_live());
    assert!(!Destroyed.is_live());
}

#[test]
fn request_transition_rejects_forbidden_edge() {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .init_state::<ViewportState>();
    app.update();

    let world = app.world_mut();
    let accepted = world.resource_scope(|world, mut next: Mut<NextState<ViewportState>>| {
        let current = world.resource::<State<ViewportState>>();
        request_transition(current, &mut next, Animating)
    });
    assert!(!accepted);

    app.update();
    assert_eq!(*app.world().resource::<State<ViewportState>>().get(), Uninitialized);
}

#[test]
fn request_transition_applies_allowed_edge() {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .init_state::<ViewportState>();
    app.update();

    let accepted = app
        .world_mut()
        .resource_scope(|world, mut next: Mut<NextState<ViewportState>>| {
            let current = world.resource::<State<ViewportState>>();
            request_transition(current, &mut next, SceneBuilt)
        });
    assert!(accepted);

    app.update();
    assert_eq!(*app.world().resource::<State<ViewportState>>().get(), SceneBuilt);
}
