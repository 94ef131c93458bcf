use bevy::prelude::*;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::camera::viewport_camera::ResetCameraEvent;
#[cfg(not(target_arch = "wasm32"))]
use crate::engine::scene::generation::RelayoutRequest;

/// Keyboard shortcuts for the scene (native builds only).
#[cfg(not(target_arch = "wasm32"))]
pub fn handle_scene_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut reset_events: EventWriter<ResetCameraEvent>,
    mut relayout_events: EventWriter<RelayoutRequest>,
) {
    if keyboard.just_pressed(KeyCode::KeyR) {
        reset_events.write(ResetCameraEvent);
    }

    if keyboard.just_pressed(KeyCode::KeyL) {
        info!("Relayout requested from keyboard");
        relayout_events.write(RelayoutRequest);
    }
}

/// Placeholder system for WASM builds where the host drives these over RPC.
#[cfg(target_arch = "wasm32")]
pub fn handle_scene_shortcuts() {}
