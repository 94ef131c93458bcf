//! Asset types for the resource dataset and scene settings.
//!
//! Handles CSV parsing into validated records, the published record set,
//! and the optional JSON settings file.

/// A single validated resource row and its derived attributes.
pub mod resource_record;

/// Generation-scoped record sequence shared with the scene.
pub mod resource_set;

/// CSV asset loader producing validated record tables.
pub mod resource_table;

/// Runtime scene tuning loaded from `config/scene.json`.
pub mod scene_settings;
