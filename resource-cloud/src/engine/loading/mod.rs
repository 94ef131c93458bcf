//! Dataset and settings loading for the resource scene.
//!
//! Resolves the optional settings file, loads the CSV dataset through the
//! asset server, and publishes validated records as a new generation while
//! the fallback dataset keeps the scene populated.

/// Literal records shown whenever no other source has produced data.
pub mod fallback;

/// Loading progress flags driving the state transition to running.
pub mod progress;

/// Settings file polling with defaults on failure.
pub mod settings_loader;

/// CSV dataset request, load-state polling and publication.
///
/// Keeps the fallback dataset when the file is empty or fails to load.
pub mod dataset_loader;

/// Data source status shared by the overlay and the host page.
pub mod status;

/// Native CSV drag-and-drop onto the window.
#[cfg(not(target_arch = "wasm32"))]
pub mod file_drop;
