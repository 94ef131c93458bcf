// Standard library and external crates
use bevy::asset::AssetMetaCheck;
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use constants::camera::{CAMERA_FAR, CAMERA_FOV, CAMERA_NEAR};
use constants::render_settings::BACKGROUND_GRAY;

// Crate engine modules
use crate::engine::assets::resource_table::{ResourceTable, ResourceTableLoader};
use crate::engine::assets::scene_settings::SceneSettings;
use crate::engine::camera::viewport_camera::{SceneCamera, ViewportCamera};
use crate::engine::core::app_state::{AppState, transition_to_running};
use crate::engine::core::scene_plugin::{ResourceCloudPlugin, SceneSet};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::dataset_loader::{DatasetLoader, publish_dataset, request_dataset};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::loading::settings_loader::{SettingsLoader, resolve_settings, start_loading};
use crate::engine::ui::card::{CardFonts, resolve_card_fonts};
// Host controls
use crate::interaction::shortcuts::handle_scene_shortcuts;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::loading::file_drop::handle_dropped_csv;
#[cfg(not(target_arch = "wasm32"))]
use crate::engine::ui::status::{reset_view_button_interaction, spawn_reset_view_button};

const LOG_FILTER: &str = "info,wgpu=error,naga=warn,resource_cloud=debug";

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        // Registers SceneSettings as a loadable asset type from `*.scene.json` files.
        .add_plugins(JsonAssetPlugin::<SceneSettings>::new(&["scene.json"]))
        .init_asset::<ResourceTable>()
        .register_asset_loader(ResourceTableLoader)
        .add_plugins(ResourceCloudPlugin)
        .insert_resource(ClearColor(Color::srgb_u8(
            BACKGROUND_GRAY,
            BACKGROUND_GRAY,
            BACKGROUND_GRAY,
        )));

    // Initialise loading resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<SettingsLoader>()
        .init_resource::<DatasetLoader>();

    // State-based system scheduling
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (
                // Loading phase systems
                resolve_settings,
                request_dataset,
                publish_dataset,
                transition_to_running,
            )
                .chain()
                .in_set(SceneSet::Data)
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(
            Update,
            resolve_card_fonts
                .run_if(resource_exists::<CardFonts>)
                .in_set(SceneSet::Overlay),
        )
        // Native shortcuts or no-op for WASM
        .add_systems(Update, handle_scene_shortcuts.in_set(SceneSet::Data));

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Startup, spawn_reset_view_button).add_systems(
            Update,
            (handle_dropped_csv, reset_view_button_interaction).in_set(SceneSet::Data),
        );
    }

    app
}

fn spawn_scene_camera(commands: &mut Commands) {
    commands.spawn((
        SceneCamera,
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        ViewportCamera::default().target_transform(),
    ));
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands, asset_server: Res<AssetServer>) {
    info!("=== RESOURCE CLOUD ===");
    spawn_scene_camera(&mut commands);
    commands.insert_resource(CardFonts::load(&asset_server));
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    let log_config = LogPlugin {
        level: Level::INFO,
        filter: LOG_FILTER.to_string(),
        ..default()
    };

    DefaultPlugins
        .set(window_config)
        .set(asset_config)
        .set(log_config)
}
