use std::collections::HashMap;

use bevy::prelude::*;

use constants::render_settings::{
    FEATURED_SPHERE_RADIUS, FRAME_LINE_GRAY, GRID_LINE_GRAY, MARKER_CUBE_SIZE,
};

use crate::engine::scene::grid::line_material;
use crate::engine::systems::feature_selector::FeatureState;
use crate::engine::systems::scene_clock::SceneClock;

/// Parent of every scene entity; rotated by the orbit angle and despawned on each rebuild.
#[derive(Component)]
pub struct WorldRoot;

#[derive(Component, Debug, Clone, Copy)]
pub struct PointMarker {
    pub index: usize,
}

/// Shared meshes and materials for markers and frame lines.
#[derive(Resource)]
pub struct MarkerAssets {
    pub cube: Handle<Mesh>,
    pub sphere: Handle<Mesh>,
    pub frame_material: Handle<StandardMaterial>,
    pub grid_material: Handle<StandardMaterial>,
    palette: HashMap<[u8; 3], Handle<StandardMaterial>>,
}

impl FromWorld for MarkerAssets {
    fn from_world(world: &mut World) -> Self {
        let (cube, sphere) = {
            let mut meshes = world.resource_mut::<Assets<Mesh>>();
            (
                meshes.add(Cuboid::from_length(MARKER_CUBE_SIZE)),
                meshes.add(Sphere::new(FEATURED_SPHERE_RADIUS)),
            )
        };
        let mut materials = world.resource_mut::<Assets<StandardMaterial>>();

        Self {
            cube,
            sphere,
            frame_material: materials.add(line_material(FRAME_LINE_GRAY)),
            grid_material: materials.add(line_material(GRID_LINE_GRAY)),
            palette: HashMap::new(),
        }
    }
}

impl MarkerAssets {
    /// Unlit material for a category colour, created on first use.
    pub fn material_for(
        &mut self,
        colour: [u8; 3],
        materials: &mut Assets<StandardMaterial>,
    ) -> Handle<StandardMaterial> {
        self.palette
            .entry(colour)
            .or_insert_with(|| {
                materials.add(StandardMaterial {
                    base_color: Color::srgb_u8(colour[0], colour[1], colour[2]),
                    unlit: true,
                    ..default()
                })
            })
            .clone()
    }

    pub fn mesh_for(&self, featured: bool) -> Handle<Mesh> {
        if featured {
            self.sphere.clone()
        } else {
            self.cube.clone()
        }
    }
}

pub fn rotate_world_root(
    clock: Res<SceneClock>,
    mut roots: Query<&mut Transform, With<WorldRoot>>,
) {
    for mut transform in &mut roots {
        transform.rotation = Quat::from_rotation_y(clock.orbit_angle);
    }
}

/// Swap the featured marker to a sphere and every other marker back to a cube.
pub fn sync_point_markers(
    feature: Res<FeatureState>,
    marker_assets: Res<MarkerAssets>,
    mut markers: Query<(&PointMarker, &mut Mesh3d)>,
) {
    if !feature.is_changed() {
        return;
    }

    let featured = feature.featured();
    for (marker, mut mesh) in &mut markers {
        let wanted = marker_assets.mesh_for(featured == Some(marker.index));
        if mesh.0 != wanted {
            mesh.0 = wanted;
        }
    }
}
