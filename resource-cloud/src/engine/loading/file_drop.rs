use std::path::Path;

use bevy::prelude::*;
use bevy::window::FileDragAndDrop;

use crate::engine::assets::resource_set::{DataOrigin, ResourceSet};
use crate::engine::assets::resource_table::{DatasetError, ResourceTable, parse_resource_csv};
use crate::engine::loading::status::DataSourceStatus;

/// Replace the dataset with a CSV file dropped onto the window.
pub fn handle_dropped_csv(
    mut drop_events: EventReader<FileDragAndDrop>,
    mut resource_set: ResMut<ResourceSet>,
    mut status: ResMut<DataSourceStatus>,
) {
    for event in drop_events.read() {
        let FileDragAndDrop::DroppedFile { path_buf, .. } = event else {
            continue;
        };

        if !path_buf.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("csv")) {
            warn!("Ignoring dropped file {}: not a CSV", path_buf.display());
            continue;
        }

        match read_dropped_csv(path_buf) {
            Ok(table) => {
                let dropped = table.dropped;
                let origin = DataOrigin::Upload(path_buf.display().to_string());
                let records = table.records;
                let rows = records.len();
                resource_set.publish(records, origin);
                *status = DataSourceStatus::Ready { rows, dropped };
            }
            Err(err) => {
                error!("Dropped CSV {} rejected: {}", path_buf.display(), err);
                *status = DataSourceStatus::failed(err.to_string());
            }
        }
    }
}

/// An upload with no valid rows is an error, unlike the startup dataset.
fn read_dropped_csv(path: &Path) -> Result<ResourceTable, DatasetError> {
    let bytes = std::fs::read(path)?;
    let table = parse_resource_csv(&bytes)?;
    let dropped = table.dropped;
    let records = table.into_non_empty()?;
    Ok(ResourceTable { records, dropped })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_io_error() {
        let result = read_dropped_csv(Path::new("does/not/exist.csv"));
        assert!(matches!(result, Err(DatasetError::Io(_))));
    }
}
