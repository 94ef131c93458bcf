use bevy::prelude::*;
use bevy::render::view::NoFrustumCulling;

use crate::engine::assets::resource_set::ResourceSet;
use crate::engine::scene::grid::{
    BoundingFrame, FloorGrid, bounding_box_segments, floor_grid_segments, line_list_mesh,
};
use crate::engine::scene::layout::{CloudLayout, box_size_for_viewport, layout_points};
use crate::engine::scene::markers::{MarkerAssets, PointMarker, WorldRoot};
use crate::engine::systems::feature_selector::{FeatureState, SceneRng};
use crate::engine::systems::viewport::ViewportSize;

/// Recompute the layout for the current records and viewport as a new layout generation.
#[derive(Event, Debug, Default, Clone, Copy)]
pub struct RelayoutRequest;

/// Rebuild everything derived from the record set when its generation changes or a
/// relayout is requested. Runs before any drawing system so a swap is never seen half done.
pub fn apply_resource_generation(
    mut commands: Commands,
    mut relayout_events: EventReader<RelayoutRequest>,
    resource_set: Res<ResourceSet>,
    viewport: Res<ViewportSize>,
    mut layout: ResMut<CloudLayout>,
    mut feature: ResMut<FeatureState>,
    mut rng: ResMut<SceneRng>,
    mut marker_assets: ResMut<MarkerAssets>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    roots: Query<Entity, With<WorldRoot>>,
) {
    let relayout_requested = relayout_events.read().count() > 0;
    let generation = resource_set.generation();
    let generation_changed = layout.generation != Some(generation);
    if !generation_changed && !relayout_requested {
        return;
    }

    for root in &roots {
        commands.entity(root).despawn();
    }

    let box_size = box_size_for_viewport(viewport.height);
    let records = resource_set.records();
    *layout = CloudLayout {
        positions: layout_points(records, box_size, &mut rng.0),
        box_size,
        generation: Some(generation),
    };

    if generation_changed {
        feature.reset(records.len(), &mut rng.0);
    }

    info!(
        "Laid out {} records in a {:.0} unit cube (generation {}, relayout: {})",
        records.len(),
        box_size * 2.0,
        generation,
        relayout_requested
    );

    let visibility = if records.is_empty() {
        Visibility::Hidden
    } else {
        Visibility::Inherited
    };

    let frame_mesh = meshes.add(line_list_mesh(&bounding_box_segments(box_size)));
    let grid_mesh = meshes.add(line_list_mesh(&floor_grid_segments(box_size)));
    let featured = feature.featured();
    let marker_bundles: Vec<_> = records
        .iter()
        .zip(&layout.positions)
        .enumerate()
        .map(|(index, (record, position))| {
            (
                Mesh3d(marker_assets.mesh_for(featured == Some(index))),
                MeshMaterial3d(marker_assets.material_for(record.category_colour(), &mut materials)),
                Transform::from_translation(*position),
                PointMarker { index },
            )
        })
        .collect();

    commands
        .spawn((WorldRoot, Transform::default(), visibility))
        .with_children(|root| {
            root.spawn((
                Mesh3d(frame_mesh),
                MeshMaterial3d(marker_assets.frame_material.clone()),
                NoFrustumCulling,
                BoundingFrame,
            ));
            root.spawn((
                Mesh3d(grid_mesh),
                MeshMaterial3d(marker_assets.grid_material.clone()),
                NoFrustumCulling,
                FloorGrid,
            ));
            for bundle in marker_bundles {
                root.spawn(bundle);
            }
        });
}
