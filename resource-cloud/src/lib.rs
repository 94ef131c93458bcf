//! Interactive 3D point cloud of categorised resources.
//!
//! Each resource record becomes a marker inside a bounding cube: list order
//! spreads along X, relevance lifts along Y and Z is a per-generation random
//! draw. One record at a time is featured with an on-screen info card whose
//! link can be opened by clicking the card.

pub mod engine;
pub mod interaction;
pub mod rpc;

pub use engine::core::app_setup::create_app;
