use bevy::asset::LoadState;
use bevy::prelude::*;

use constants::path::SETTINGS_PATH;

use crate::engine::assets::scene_settings::{SceneSettings, SettingsError};
use crate::engine::camera::viewport_camera::ViewportCamera;
use crate::engine::loading::progress::LoadingProgress;

#[derive(Resource, Default)]
pub struct SettingsLoader {
    handle: Option<Handle<SceneSettings>>,
}

pub fn start_loading(mut settings_loader: ResMut<SettingsLoader>, asset_server: Res<AssetServer>) {
    info!("Loading scene settings from {}", SETTINGS_PATH);
    settings_loader.handle = Some(asset_server.load(SETTINGS_PATH));
}

/// Adopt the settings file once it settles. Any failure keeps the defaults.
pub fn resolve_settings(
    mut commands: Commands,
    mut loading_progress: ResMut<LoadingProgress>,
    mut viewport_camera: ResMut<ViewportCamera>,
    settings_loader: Res<SettingsLoader>,
    asset_server: Res<AssetServer>,
    settings_assets: Res<Assets<SceneSettings>>,
) {
    if loading_progress.settings_resolved {
        return;
    }

    let resolved = match settings_loader.handle.as_ref() {
        None => Err(SettingsError::Load("settings were never requested".to_string())),
        Some(handle) => match asset_server.get_load_state(handle) {
            Some(LoadState::Loaded) => match settings_assets.get(handle) {
                Some(settings) => settings.validate().map(|()| settings.clone()),
                None => return,
            },
            Some(LoadState::Failed(err)) => Err(SettingsError::Load(err.to_string())),
            _ => return,
        },
    };

    let settings = resolved.unwrap_or_else(|err| {
        warn!("Using default scene settings: {err}");
        SceneSettings::default()
    });

    viewport_camera.set_distance_bounds(settings.min_distance, settings.max_distance);
    debug!("Scene settings resolved: {:?}", settings);
    commands.insert_resource(settings);
    loading_progress.settings_resolved = true;
}
