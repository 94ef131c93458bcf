//! Orbit camera for the resource cloud.
//!
//! Provides orbit, pan and zoom around a focus point with distance bounds,
//! smooth interpolation towards the target pose and a fixed reset pose.

/// Viewport camera resource and controller system for scene navigation.
pub mod viewport_camera;
