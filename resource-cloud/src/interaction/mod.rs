//! Pointer and keyboard interaction with the resource cloud.
//!
//! The featured record's info card doubles as a link. Each frame the pointer is
//! hit-tested against the card's rendered rectangle (`CardRect`), and a click
//! while armed opens the record's link in a new browsing context.
//!
//! ## Link Flow
//!
//! ```text
//! update_info_card()        writes CardRect
//!   └─> update_link_hot_zone()   pointer in CardRect? arm + remember link
//!       └─> dispatch_link_click()   left click / touch start while armed
//!           └─> OpenLinkEvent
//!               └─> open_links()   window.open (WASM) or log (native), notify host
//! ```
//!
//! Placeholder (`[link]`) and empty links arm the hot zone but never navigate.
//!
//! ## Shortcuts (native only)
//! - `R`: reset the camera
//! - `L`: recompute the layout for the current viewport

/// Hot zone state and the per-frame hit test against the card rectangle.
pub mod hot_zone;

/// Click dispatch and the navigation side effect.
pub mod navigation;

/// Keyboard shortcuts for camera reset and relayout.
pub mod shortcuts;
