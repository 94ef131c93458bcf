use bevy::prelude::*;

use constants::render_settings::FIXED_TICK_HZ;

use crate::engine::assets::resource_set::ResourceSet;
use crate::engine::assets::scene_settings::SceneSettings;
use crate::engine::camera::viewport_camera::{ResetCameraEvent, ViewportCamera, camera_controller};
use crate::engine::loading::status::{DataSourceStatus, broadcast_data_source_status};
use crate::engine::scene::generation::{RelayoutRequest, apply_resource_generation};
use crate::engine::scene::layout::CloudLayout;
use crate::engine::scene::markers::{MarkerAssets, rotate_world_root, sync_point_markers};
use crate::engine::systems::feature_selector::{
    FeatureState, SceneRng, advance_feature_selection, broadcast_featured_changes,
};
use crate::engine::systems::frame_fault::contain_frame_fault;
use crate::engine::systems::scene_clock::{SceneClock, advance_scene_clock};
use crate::engine::systems::viewport::{ViewportSize, track_viewport_size};
use crate::engine::ui::card::{
    CardRect, NameMeasure, measure_card_name, spawn_info_card, update_info_card,
};
use crate::engine::ui::status::{dismiss_error_notice, spawn_status_overlay, update_status_overlay};
use crate::interaction::hot_zone::{LinkHotZone, update_link_hot_zone};
use crate::interaction::navigation::{OpenLinkEvent, dispatch_link_click, open_links};
use crate::rpc::web_rpc::WebRpcPlugin;

/// Per-frame order. Data changes land first so a new generation is rebuilt
/// before the camera, world, card and hit test see it.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneSet {
    Data,
    Generation,
    Camera,
    World,
    Overlay,
    Interaction,
}

/// The resource cloud scene: layout, markers, camera, card, hot zone and RPC.
///
/// Expects `Assets<Mesh>`, `Assets<StandardMaterial>`, input resources and a
/// primary window to exist. Existing resources (e.g. a seeded `SceneRng`) are kept.
pub struct ResourceCloudPlugin;

impl Plugin for ResourceCloudPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(WebRpcPlugin)
            .init_resource::<ResourceSet>()
            .init_resource::<SceneSettings>()
            .init_resource::<SceneClock>()
            .init_resource::<SceneRng>()
            .init_resource::<CloudLayout>()
            .init_resource::<FeatureState>()
            .init_resource::<ViewportSize>()
            .init_resource::<ViewportCamera>()
            .init_resource::<LinkHotZone>()
            .init_resource::<CardRect>()
            .init_resource::<NameMeasure>()
            .init_resource::<DataSourceStatus>()
            .init_resource::<MarkerAssets>()
            .add_event::<RelayoutRequest>()
            .add_event::<ResetCameraEvent>()
            .add_event::<OpenLinkEvent>()
            .insert_resource(Time::<Fixed>::from_hz(FIXED_TICK_HZ));

        app.configure_sets(
            Update,
            (
                SceneSet::Data,
                SceneSet::Generation,
                SceneSet::Camera,
                SceneSet::World,
                SceneSet::Overlay,
                SceneSet::Interaction,
            )
                .chain(),
        );

        app.add_systems(Startup, (spawn_info_card, spawn_status_overlay))
            .add_systems(
                FixedUpdate,
                (advance_scene_clock, advance_feature_selection).chain(),
            )
            .add_systems(
                Update,
                (
                    track_viewport_size.pipe(contain_frame_fault),
                    apply_resource_generation,
                )
                    .chain()
                    .in_set(SceneSet::Generation),
            )
            .add_systems(
                Update,
                camera_controller
                    .pipe(contain_frame_fault)
                    .in_set(SceneSet::Camera),
            )
            .add_systems(
                Update,
                (rotate_world_root, sync_point_markers).in_set(SceneSet::World),
            )
            .add_systems(
                Update,
                (
                    (measure_card_name, update_info_card.pipe(contain_frame_fault)).chain(),
                    update_status_overlay,
                    dismiss_error_notice,
                    broadcast_data_source_status,
                )
                    .in_set(SceneSet::Overlay),
            )
            .add_systems(
                Update,
                (
                    update_link_hot_zone.pipe(contain_frame_fault),
                    dispatch_link_click,
                    open_links,
                    broadcast_featured_changes,
                )
                    .chain()
                    .in_set(SceneSet::Interaction),
            );
    }
}
