//! JSON-RPC 2.0 communication layer for host page integration.
//!
//! Implements bidirectional messaging between the Bevy scene and the page
//! embedding it via iframe postMessage, supporting both request-response and
//! notification patterns.
//!
//! ## Message Flow
//!
//! ```text
//! Host page (parent window)  <──postMessage──>  Bevy (iframe)
//!        │                                        │
//!        ├─ Request (with ID) ──────────────────> │
//!        │                                        ├─ Parse into RpcCommand
//!        │                                        ├─ Execute against scene resources
//!        │ <───────────────── Response (with ID) ─┤
//!        │                                        │
//!        ├─ Notification (no ID) ───────────────> ├─ Execute, no reply
//!        │                                        │
//!        │ <────────── Notification (no ID) ─────┤
//! ```
//!
//! ## Requests
//!
//! - `reset_camera`: return the camera to the reset pose
//! - `relayout`: recompute positions for the current viewport
//! - `set_resources`: replace the dataset with `{ "resources": [...] }`, using the
//!   CSV column names as keys. Incomplete records are dropped; an empty list
//!   restores the fallback dataset
//! - `get_resources`: current records, generation and origin, for the table view
//! - `get_featured`: featured index and record
//!
//! ## Notifications Sent
//!
//! - `featured_changed`: `{ index, name }` on every selection change
//! - `data_source_status`: `{ state, ... }` when loading starts, settles or fails
//! - `link_opened`: `{ url }` after a card click opens a link
//! - `debug_message`: `{ message }` for each processed or unparsable message
//!
//! ## Error Handling
//!
//! Standard JSON-RPC 2.0 error codes:
//! - `-32601`: Method not found
//! - `-32602`: Invalid params
//!
//! Sending from a system:
//!
//! ```rust,ignore
//! fn your_system(mut rpc: ResMut<WebRpcInterface>) {
//!     rpc.send_notification("event_name", json!({ "data": "value" }));
//! }
//! ```

/// JSON-RPC 2.0 bidirectional communication system for the host page.
///
/// Handles request-response patterns, notifications, and the WASM message listener.
pub mod web_rpc;
