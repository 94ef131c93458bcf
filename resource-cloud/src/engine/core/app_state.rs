use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

/// The scene renders the fallback dataset in both states; `Loading` only
/// gates the settings and dataset loading systems.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

// Final transition to running state
pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.is_complete() {
        info!("→ Settings and dataset settled, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}
