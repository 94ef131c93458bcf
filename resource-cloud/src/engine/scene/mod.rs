//! Scene geometry for the resource cloud.
//!
//! Computes record positions inside the bounding cube, builds the wireframe
//! frame and floor grid, and keeps point markers in sync with the featured record.

/// Deterministic x/y placement with one random depth draw per record.
pub mod layout;

/// Line meshes for the bounding cube and its floor grid.
pub mod grid;

/// Point markers, the rotating world root and the shared marker palette.
pub mod markers;

/// Atomic rebuild of layout, markers and selection when the dataset changes.
pub mod generation;
