use bevy::prelude::*;

#[derive(Resource, Default, Debug)]
pub struct LoadingProgress {
    pub settings_resolved: bool,
    pub dataset_requested: bool,
    pub dataset_settled: bool,
}

impl LoadingProgress {
    pub fn is_complete(&self) -> bool {
        self.settings_resolved && self.dataset_settled
    }
}
