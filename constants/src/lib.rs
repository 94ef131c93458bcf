//! Literal tables and tuning values shared by the resource cloud scene.

/// Category colour palette used to fill point markers.
pub mod category;

/// Info card geometry, typography and link sentinel.
pub mod card;

/// Orbit camera distances, field of view and reset pose.
pub mod camera;

/// Asset paths for settings, dataset and fonts.
pub mod path;

/// Relevance keyword tiers mapped to ordinal scores.
pub mod relevance;

/// Scene geometry, marker sizes, colours and frame cadence.
pub mod render_settings;
