use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::engine::systems::frame_fault::FrameFault;

/// Logical size of the primary window.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

/// Follow window resizes. The layout is deliberately left as it was.
pub fn track_viewport_size(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut viewport: ResMut<ViewportSize>,
) -> Result<(), FrameFault> {
    let window = windows.single().map_err(|_| FrameFault::MissingWindow)?;
    let size = ViewportSize {
        width: window.width(),
        height: window.height(),
    };

    if *viewport != size {
        debug!("Viewport resized to {}x{}", size.width, size.height);
        *viewport = size;
    }
    Ok(())
}
