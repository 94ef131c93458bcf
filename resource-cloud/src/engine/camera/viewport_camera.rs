use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::math::EulerRot;
use bevy::prelude::*;

use constants::camera::{
    MAX_CAMERA_DISTANCE, MIN_CAMERA_DISTANCE, ORBIT_PITCH_SENSITIVITY, ORBIT_YAW_SENSITIVITY,
    PAN_SENSITIVITY, PITCH_LIMIT, RESET_CAMERA_DISTANCE, ZOOM_STEP,
};

use crate::engine::systems::frame_fault::FrameFault;
use crate::interaction::hot_zone::LinkHotZone;

/// Marks the single 3D camera that views the world root.
#[derive(Component)]
pub struct SceneCamera;

/// Return the camera to the reset pose.
#[derive(Event, Debug, Default, Clone, Copy)]
pub struct ResetCameraEvent;

/// Target pose of the orbit camera. The camera transform eases towards it each frame.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ViewportCamera {
    pub focus_point: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for ViewportCamera {
    fn default() -> Self {
        Self {
            focus_point: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            distance: RESET_CAMERA_DISTANCE,
            min_distance: MIN_CAMERA_DISTANCE,
            max_distance: MAX_CAMERA_DISTANCE,
        }
    }
}

impl ViewportCamera {
    /// Eye on +Z at the reset distance, looking at the origin, Y up.
    pub fn reset(&mut self) {
        self.focus_point = Vec3::ZERO;
        self.yaw = 0.0;
        self.pitch = 0.0;
        self.distance = RESET_CAMERA_DISTANCE.clamp(self.min_distance, self.max_distance);
    }

    pub fn set_distance_bounds(&mut self, min_distance: f32, max_distance: f32) {
        self.min_distance = min_distance;
        self.max_distance = max_distance;
        self.distance = self.distance.clamp(min_distance, max_distance);
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    pub fn eye(&self) -> Vec3 {
        self.focus_point + self.rotation() * Vec3::new(0.0, 0.0, self.distance)
    }

    pub fn target_transform(&self) -> Transform {
        Transform::from_translation(self.eye()).with_rotation(self.rotation())
    }

    pub fn orbit(&mut self, delta: Vec2) {
        self.yaw -= delta.x * ORBIT_YAW_SENSITIVITY;
        self.pitch = (self.pitch - delta.y * ORBIT_PITCH_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Slide the focus in the view plane, scaled by distance so drags feel the same when zoomed.
    pub fn pan(&mut self, delta: Vec2) {
        let rotation = self.rotation();
        let right = rotation * Vec3::X;
        let up = rotation * Vec3::Y;
        let scale = self.distance * PAN_SENSITIVITY;
        self.focus_point += (-right * delta.x + up * delta.y) * scale;
    }

    /// Positive `lines` moves closer. Distance stays within the bounds.
    pub fn zoom(&mut self, lines: f32) {
        let distance = self.distance * (1.0 - lines * ZOOM_STEP);
        self.distance = distance.clamp(self.min_distance, self.max_distance);
    }
}

/// Left drag orbits, right drag pans, the wheel zooms. Left drags over an armed
/// info card or on a pressed UI control (Reset View, error notice) do not orbit.
pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<SceneCamera>>,
    mut viewport_camera: ResMut<ViewportCamera>,
    mut reset_events: EventReader<ResetCameraEvent>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    hot_zone: Res<LinkHotZone>,
    ui_interactions: Query<&Interaction>,
    time: Res<Time>,
) -> Result<(), FrameFault> {
    let mut camera_transform = camera_query
        .single_mut()
        .map_err(|_| FrameFault::MissingCamera)?;

    if reset_events.read().count() > 0 {
        info!("Camera reset");
        viewport_camera.reset();
    }

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();
    if mouse_delta != Vec2::ZERO {
        let ui_pressed = ui_interactions
            .iter()
            .any(|interaction| *interaction == Interaction::Pressed);
        if mouse_button.pressed(MouseButton::Left) && !hot_zone.armed && !ui_pressed {
            viewport_camera.orbit(mouse_delta);
        } else if mouse_button.pressed(MouseButton::Right) {
            viewport_camera.pan(mouse_delta);
        }
    }

    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }
    if scroll_accum.abs() > f32::EPSILON {
        viewport_camera.zoom(scroll_accum);
    }

    let target = viewport_camera.target_transform();
    let lerp_speed = (12.0 * time.delta_secs()).min(1.0);
    camera_transform.translation = camera_transform.translation.lerp(target.translation, lerp_speed);
    camera_transform.rotation = camera_transform.rotation.slerp(target.rotation, lerp_speed);

    Ok(())
}
