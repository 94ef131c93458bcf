use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

use crate::engine::assets::resource_set::ResourceSet;
use crate::engine::assets::scene_settings::SceneSettings;
use crate::engine::systems::scene_clock::SceneClock;
use crate::rpc::web_rpc::WebRpcInterface;

/// Random source for depth draws and featured picks.
#[derive(Resource)]
pub struct SceneRng(pub StdRng);

impl Default for SceneRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl SceneRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

/// Which record is featured. `featured` is always `None` or an index below `count`.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct FeatureState {
    featured: Option<usize>,
    count: usize,
}

impl FeatureState {
    pub fn featured(&self) -> Option<usize> {
        self.featured
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Start over for a new record count and pick immediately.
    pub fn reset<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) {
        self.count = count;
        self.featured = None;
        self.pick(rng);
    }

    /// Adopt a new count, keeping the current pick when it is still valid.
    pub fn reclamp<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) {
        self.count = count;
        match self.featured {
            Some(index) if index < count => {}
            _ => self.pick(rng),
        }
    }

    /// Move to a uniformly random index, or `None` with no records.
    pub fn pick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.featured = (self.count > 0).then(|| rng.gen_range(0..self.count));
    }
}

/// Runs on the fixed schedule after the clock has advanced.
pub fn advance_feature_selection(
    clock: Res<SceneClock>,
    settings: Res<SceneSettings>,
    resource_set: Res<ResourceSet>,
    mut feature: ResMut<FeatureState>,
    mut rng: ResMut<SceneRng>,
) {
    let count = resource_set.len();
    if feature.count() != count {
        feature.reclamp(count, &mut rng.0);
    }

    if count > 0 && clock.frame % u64::from(settings.feature_period_ticks()) == 0 {
        feature.pick(&mut rng.0);
    }
}

pub fn broadcast_featured_changes(
    feature: Res<FeatureState>,
    resource_set: Res<ResourceSet>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if !feature.is_changed() {
        return;
    }

    let index = feature.featured();
    let name = index
        .and_then(|i| resource_set.get(i))
        .map(|record| record.name.as_str());
    rpc_interface.send_notification("featured_changed", json!({ "index": index, "name": name }));
}
