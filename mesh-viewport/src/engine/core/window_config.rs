use bevy::prelude::*;
use bevy::window::PresentMode;

#[cfg(target_arch = "wasm32")]
pub fn create_window_config() -> Window {
    use constants::render_settings::CANVAS_SELECTOR;

    Window {
        canvas: Some(CANVAS_SELECTOR.into()),
        fit_canvas_to_parent: true,
        prevent_default_event_handling: false,
        present_mode: PresentMode::AutoVsync,
        transparent: true,
        ..default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn create_window_config() -> Window {
    use constants::render_settings::WINDOW_TITLE;

    Window {
        title: WINDOW_TITLE.into(),
        present_mode: PresentMode::AutoVsync,
        transparent: true,
        ..default()
    }
}

/// Whether the host document has finished parsing. The first frame waits on
/// this so the canvas has its final layout.
#[cfg(target_arch = "wasm32")]
pub fn document_ready() -> bool {
    web_sys::window()
        .and_then(|window| window.document())
        .map(|document| document.ready_state() != "loading")
        .unwrap_or(true)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn document_ready() -> bool {
    true
}
