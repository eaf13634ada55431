#[cfg(test)]
#[path = "frame_loop_test.rs"]
mod frame_loop_test;

use bevy::prelude::*;
use bevy::window::WindowCloseRequested;

use crate::engine::core::app_state::{ViewportState, request_transition};
use crate::engine::core::window_config::document_ready;
use crate::engine::scene::setup::{ViewportCamera, ViewportRoot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

/// Explicit request to tear the viewport down.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct TeardownRequest;

/// Scheduling bookkeeping for the draw loop. A frame only draws if it holds
/// the pending handle, so cancelling the handle stops the loop.
#[derive(Resource, Default, Debug)]
pub struct FrameLoop {
    pending: Option<FrameHandle>,
    next_id: u64,
    frames_drawn: u64,
    cancellations: u32,
}

impl FrameLoop {
    pub fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending = Some(handle);
        handle
    }

    pub fn take_pending(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }

    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }

    /// Cancel the pending frame, if any. Returns the cancelled handle.
    pub fn cancel(&mut self) -> Option<FrameHandle> {
        let handle = self.pending.take();
        if handle.is_some() {
            self.cancellations += 1;
        }
        handle
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    pub fn cancellations(&self) -> u32 {
        self.cancellations
    }

    fn mark_drawn(&mut self) {
        self.frames_drawn += 1;
    }
}

// Waits for the host document before scheduling the first frame.
pub fn begin_animation(
    mut frame_loop: ResMut<FrameLoop>,
    state: Res<State<ViewportState>>,
    mut next_state: ResMut<NextState<ViewportState>>,
    mut deferred: Local<bool>,
) {
    if !document_ready() {
        if !*deferred {
            debug!("Document still loading; deferring first frame");
            *deferred = true;
        }
        return;
    }

    if request_transition(&state, &mut next_state, ViewportState::Animating) {
        frame_loop.request_frame();
    }
}

pub fn render_frame(
    mut frame_loop: ResMut<FrameLoop>,
    mut cameras: Query<&mut Transform, (With<ViewportCamera>, Without<ViewportRoot>)>,
    roots: Query<&Transform, (With<ViewportRoot>, Without<ViewportCamera>)>,
) {
    let Some(_handle) = frame_loop.take_pending() else {
        return;
    };

    let target = roots
        .single()
        .map(|root| root.translation)
        .unwrap_or(Vec3::ZERO);
    for mut camera in &mut cameras {
        camera.look_at(target, Vec3::Y);
    }

    frame_loop.mark_drawn();
    frame_loop.request_frame();
}

/// Tear the viewport down on request, window close or app exit. Runs only
/// while live, so it happens once.
pub fn handle_teardown(
    mut requests: EventReader<TeardownRequest>,
    mut close_requests: EventReader<WindowCloseRequested>,
    mut exits: EventReader<AppExit>,
    mut frame_loop: ResMut<FrameLoop>,
    mut commands: Commands,
    viewport_entities: Query<Entity, Or<(With<ViewportCamera>, With<ViewportRoot>)>>,
    state: Res<State<ViewportState>>,
    mut next_state: ResMut<NextState<ViewportState>>,
) {
    let requested = requests.read().count() > 0;
    let closing = close_requests.read().count() > 0;
    let exiting = exits.read().count() > 0;
    if !(requested || closing || exiting) {
        return;
    }

    if let Some(handle) = frame_loop.cancel() {
        debug!("Cancelled pending frame {handle:?}");
    }
    for entity in &viewport_entities {
        commands.entity(entity).despawn();
    }

    request_transition(&state, &mut next_state, ViewportState::Destroyed);
    info!(
        "Viewport torn down after {} frame(s)",
        frame_loop.frames_drawn()
    );
}
