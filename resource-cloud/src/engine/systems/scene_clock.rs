use std::f64::consts::TAU;

use bevy::prelude::*;

use crate::engine::assets::scene_settings::SceneSettings;

/// Fixed ticks since startup and the orbit angle derived from them.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct SceneClock {
    pub frame: u64,
    pub orbit_angle: f32,
}

impl SceneClock {
    pub fn advance(&mut self, orbit_step: f32) {
        self.frame += 1;
        self.orbit_angle = (self.frame as f64 * orbit_step as f64).rem_euclid(TAU) as f32;
    }
}

pub fn advance_scene_clock(mut clock: ResMut<SceneClock>, settings: Res<SceneSettings>) {
    clock.advance(settings.orbit_step);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_grows_by_one_step_per_tick() {
        let mut clock = SceneClock::default();
        clock.advance(0.01);
        clock.advance(0.01);
        assert_eq!(clock.frame, 2);
        assert!((clock.orbit_angle - 0.02).abs() < 1e-6);
    }

    #[test]
    fn angle_wraps_after_a_full_turn() {
        let mut clock = SceneClock {
            frame: 628,
            orbit_angle: 0.0,
        };
        clock.advance(0.01);
        assert!(clock.orbit_angle < 0.01);
        assert!(clock.orbit_angle >= 0.0);
    }
}
