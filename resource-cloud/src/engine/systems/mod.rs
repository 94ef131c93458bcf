//! Core runtime systems for the scene clock, feature selection and fault handling.
//!
//! Provides the fixed-rate orbit clock, the featured record state machine,
//! viewport tracking and per-frame fault containment.

/// Fixed-tick frame counter and orbit angle.
pub mod scene_clock;

/// Featured record selection on a fixed cadence.
///
/// Broadcasts every change to the host page via RPC.
pub mod feature_selector;

/// Per-frame fault type and the rate-limited handler systems pipe into.
pub mod frame_fault;

/// Logical viewport size of the primary window.
pub mod viewport;
