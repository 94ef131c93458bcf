//! Screen-space UI drawn over the 3D scene.
//!
//! The info card for the featured record and the data source status overlay.

/// Info card layout, its shared screen rectangle and per-frame content updates.
pub mod card;

/// Loading and error notices plus the reset view button.
pub mod status;
