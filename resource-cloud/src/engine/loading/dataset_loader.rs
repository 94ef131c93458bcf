use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::engine::assets::resource_set::{DataOrigin, ResourceSet};
use crate::engine::assets::resource_table::ResourceTable;
use crate::engine::assets::scene_settings::SceneSettings;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::loading::status::DataSourceStatus;

#[derive(Resource, Default)]
pub struct DatasetLoader {
    handle: Option<Handle<ResourceTable>>,
    path: String,
}

/// Start the CSV load once the dataset path is known.
pub fn request_dataset(
    mut loading_progress: ResMut<LoadingProgress>,
    mut dataset_loader: ResMut<DatasetLoader>,
    mut status: ResMut<DataSourceStatus>,
    settings: Res<SceneSettings>,
    asset_server: Res<AssetServer>,
) {
    if !loading_progress.settings_resolved || loading_progress.dataset_requested {
        return;
    }

    info!("Loading dataset from {}", settings.dataset_path);
    dataset_loader.path = settings.dataset_path.clone();
    dataset_loader.handle = Some(asset_server.load(&settings.dataset_path));
    *status = DataSourceStatus::Loading;
    loading_progress.dataset_requested = true;
}

/// Publish the loaded table, or report the failure while the fallback stays up.
pub fn publish_dataset(
    mut loading_progress: ResMut<LoadingProgress>,
    mut dataset_loader: ResMut<DatasetLoader>,
    mut resource_set: ResMut<ResourceSet>,
    mut status: ResMut<DataSourceStatus>,
    mut tables: ResMut<Assets<ResourceTable>>,
    asset_server: Res<AssetServer>,
) {
    if loading_progress.dataset_settled {
        return;
    }
    let Some(handle) = dataset_loader.handle.clone() else {
        return;
    };

    match asset_server.get_load_state(&handle) {
        Some(LoadState::Loaded) => {
            let Some(table) = tables.remove(&handle) else {
                return;
            };
            let origin = DataOrigin::Csv(dataset_loader.path.clone());
            *status = apply_loaded_table(&mut resource_set, table, origin);
        }
        Some(LoadState::Failed(err)) => {
            error!("Dataset {} failed to load: {}", dataset_loader.path, err);
            *status = DataSourceStatus::failed(err.to_string());
        }
        _ => return,
    }

    dataset_loader.handle = None;
    loading_progress.dataset_settled = true;
}

/// Publish a validated table as the next generation. A table with no rows keeps
/// whatever is currently shown, which at startup is the fallback.
pub fn apply_loaded_table(
    resource_set: &mut ResourceSet,
    table: ResourceTable,
    origin: DataOrigin,
) -> DataSourceStatus {
    let dropped = table.dropped;
    if dropped > 0 {
        warn!("{} dropped {} incomplete rows", origin, dropped);
    }

    if table.records.is_empty() {
        warn!("{} contained no valid rows, keeping current dataset", origin);
        return DataSourceStatus::Ready { rows: 0, dropped };
    }

    let rows = table.records.len();
    resource_set.publish(table.records, origin);
    DataSourceStatus::Ready { rows, dropped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::resource_record::ResourceRecord;

    #[test]
    fn non_empty_table_becomes_next_generation() {
        let mut set = ResourceSet::default();
        let table = ResourceTable {
            records: vec![ResourceRecord::new("a", "Tool", "d", "High", "")],
            dropped: 2,
        };

        let status = apply_loaded_table(&mut set, table, DataOrigin::Csv("x.csv".into()));
        assert_eq!(status, DataSourceStatus::Ready { rows: 1, dropped: 2 });
        assert_eq!(set.generation(), 2);
        assert_eq!(set.origin(), &DataOrigin::Csv("x.csv".into()));
    }

    #[test]
    fn empty_table_keeps_fallback_without_error() {
        let mut set = ResourceSet::default();
        let status = apply_loaded_table(
            &mut set,
            ResourceTable::default(),
            DataOrigin::Csv("empty.csv".into()),
        );
        assert_eq!(status, DataSourceStatus::Ready { rows: 0, dropped: 0 });
        assert_eq!(set.generation(), 1);
        assert_eq!(set.origin(), &DataOrigin::Fallback);
    }
}
