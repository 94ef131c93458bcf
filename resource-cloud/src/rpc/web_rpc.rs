use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::engine::assets::resource_record::ResourceRecord;
use crate::engine::assets::resource_set::{DataOrigin, ResourceSet};
use crate::engine::assets::resource_table::ResourceTable;
use crate::engine::camera::viewport_camera::ResetCameraEvent;
use crate::engine::core::scene_plugin::SceneSet;
use crate::engine::loading::status::DataSourceStatus;
use crate::engine::scene::generation::RelayoutRequest;
use crate::engine::systems::feature_selector::FeatureState;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// JSON-RPC 2.0 request structure. Requests without an ID are notifications.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

/// JSON-RPC 2.0 error object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Standard RPC error codes and constructors.
impl RpcError {
    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: -32601,
            message: "Method not found".to_string(),
            data: Some(json!({ "method": method })),
        }
    }

    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }
}

/// Notification methods this app emits. One arriving at the listener is our own
/// message coming back, not a host request.
const OUTGOING_METHODS: [&str; 4] = [
    "featured_changed",
    "data_source_status",
    "link_opened",
    "debug_message",
];

/// True for this app's own notifications and responses echoed back to it.
fn is_own_message(content: &str) -> bool {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(content) else {
        return false;
    };
    match value.get("method").and_then(|method| method.as_str()) {
        Some(method) => OUTGOING_METHODS.contains(&method),
        None => value.get("result").is_some() || value.get("error").is_some(),
    }
}

/// Scene operations the host page can request.
#[derive(Debug, Clone, PartialEq)]
pub enum RpcCommand {
    ResetCamera,
    Relayout,
    SetResources(Vec<ResourceRecord>),
    GetResources,
    GetFeatured,
}

impl RpcCommand {
    pub fn parse(request: &RpcRequest) -> Result<Self, RpcError> {
        match request.method.as_str() {
            "reset_camera" => Ok(Self::ResetCamera),
            "relayout" => Ok(Self::Relayout),
            "set_resources" => {
                #[derive(Deserialize)]
                struct SetResourcesParams {
                    #[serde(default)]
                    resources: Vec<ResourceRecord>,
                }

                let params = if request.params.is_null() {
                    json!({})
                } else {
                    request.params.clone()
                };
                let parsed = serde_json::from_value::<SetResourcesParams>(params).map_err(|e| {
                    RpcError::invalid_params(&format!("Expected 'resources' array: {e}"))
                })?;
                Ok(Self::SetResources(parsed.resources))
            }
            "get_resources" => Ok(Self::GetResources),
            "get_featured" => Ok(Self::GetFeatured),
            other => Err(RpcError::method_not_found(other)),
        }
    }
}

/// Resource managing bidirectional RPC communication between the host page and Bevy.
/// Handles both request-response patterns and notification broadcasting.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the host page without expecting response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    /// Queue response for transmission to the host page.
    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }
}

/// Plugin establishing WebRPC communication layer for iframe-based deployment.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (process_incoming_messages, handle_rpc_messages)
                    .chain()
                    .in_set(SceneSet::Data),
            )
            // After every scene system has queued its notifications.
            .add_systems(PostUpdate, send_outgoing_messages);

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener)
            .add_systems(Last, remove_message_listener);
    }
}

/// Message listener kept alive for the app's lifetime and detached on exit.
#[cfg(target_arch = "wasm32")]
struct MessageListener {
    closure: Option<Closure<dyn FnMut(MessageEvent)>>,
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(world: &mut World) {
    use std::sync::Arc;
    use std::sync::Mutex;

    // Shared between the JS callback and the Bevy schedule.
    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        // Filter messages to ensure they contain string data.
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();

            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    match window() {
        Some(window) => {
            if let Err(e) =
                window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
            {
                error!("Failed to register message listener: {:?}", e);
            }
        }
        None => error!("Window object not available"),
    }

    world.insert_non_send_resource(MessageListener {
        closure: Some(closure),
    });
    world.insert_resource(MessageQueue(message_queue));
}

#[cfg(target_arch = "wasm32")]
fn remove_message_listener(
    mut exit_events: EventReader<AppExit>,
    listener: Option<NonSendMut<MessageListener>>,
) {
    if exit_events.read().next().is_none() {
        return;
    }
    let Some(mut listener) = listener else {
        return;
    };
    let Some(closure) = listener.closure.take() else {
        return;
    };

    if let Some(window) = window() {
        if let Err(e) =
            window.remove_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
        {
            error!("Failed to remove message listener: {:?}", e);
        }
    }
    info!("Message listener removed");
}

/// Resource wrapping thread-safe message queue for WASM event handling.
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

/// Event representing incoming RPC message from the host page.
#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

/// Scene state the RPC methods read and drive.
#[derive(SystemParam)]
struct RpcScene<'w> {
    resource_set: ResMut<'w, ResourceSet>,
    feature: Res<'w, FeatureState>,
    status: ResMut<'w, DataSourceStatus>,
    reset_events: EventWriter<'w, ResetCameraEvent>,
    relayout_events: EventWriter<'w, RelayoutRequest>,
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut scene: RpcScene,
) {
    for event in events.read() {
        if is_own_message(&event.content) {
            continue;
        }

        match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => {
                rpc_interface.send_notification(
                    "debug_message",
                    json!({
                        "message": format!("Processing method: {}", request.method)
                    }),
                );

                if let Some(response) = handle_rpc_request(&request, &mut scene) {
                    rpc_interface.queue_response(response);
                }
            }
            Err(parse_error) => {
                rpc_interface.send_notification(
                    "debug_message",
                    json!({
                        "message": format!("Parse error: {}", parse_error)
                    }),
                );
            }
        }
    }
}

/// Run a request against the scene. Notifications (no ID) run without a reply.
fn handle_rpc_request(request: &RpcRequest, scene: &mut RpcScene) -> Option<RpcResponse> {
    let result = RpcCommand::parse(request).map(|command| execute_command(command, scene));
    if let Err(error) = &result {
        warn!("Rejected RPC {}: {}", request.method, error.message);
    }

    let id = request.id.clone()?;
    Some(match result {
        Ok(result_value) => RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(result_value),
            error: None,
            id: Some(id),
        },
        Err(error) => RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id: Some(id),
        },
    })
}

fn execute_command(command: RpcCommand, scene: &mut RpcScene) -> serde_json::Value {
    match command {
        RpcCommand::ResetCamera => {
            scene.reset_events.write(ResetCameraEvent);
            json!({ "success": true })
        }
        RpcCommand::Relayout => {
            scene.relayout_events.write(RelayoutRequest);
            json!({ "success": true })
        }
        RpcCommand::SetResources(records) => {
            let table = ResourceTable::from_records(records);
            let (rows, dropped) = (table.records.len(), table.dropped);
            scene.resource_set.publish(table.records, DataOrigin::Host);
            *scene.status = DataSourceStatus::Ready { rows, dropped };
            json!({
                "success": true,
                "rows": rows,
                "dropped": dropped,
                "generation": scene.resource_set.generation(),
                "origin": scene.resource_set.origin().to_string(),
            })
        }
        RpcCommand::GetResources => json!({
            "resources": scene.resource_set.records(),
            "generation": scene.resource_set.generation(),
            "origin": scene.resource_set.origin().to_string(),
        }),
        RpcCommand::GetFeatured => {
            let index = scene.feature.featured();
            json!({
                "index": index,
                "resource": index.and_then(|i| scene.resource_set.get(i)),
            })
        }
    }
}

/// Send queued notifications and responses to the host page.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    // Send notifications first.
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }

    // Send responses second to maintain order.
    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

/// Send serialized message to parent window (host page).
fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    if let Some(parent) = window.parent().ok().flatten() {
                        // Top-level page: the parent is this window and our own listener would receive it.
                        if parent == window {
                            return;
                        }
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {:?}", e);
                        }
                    } else {
                        warn!("No parent window available for message transmission");
                    }
                } else {
                    error!("Window object not available");
                }
            }
            Err(e) => {
                error!("Failed to serialize message: {}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        // No-op for non-WASM targets.
        let _ = message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(method: &str, params: serde_json::Value, id: Option<u64>) -> RpcRequest {
        RpcRequest {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
            id: id.map(|id| json!(id)),
        }
    }

    fn rpc_app() -> App {
        let mut app = App::new();
        app.init_resource::<WebRpcInterface>()
            .init_resource::<ResourceSet>()
            .init_resource::<FeatureState>()
            .init_resource::<DataSourceStatus>()
            .add_event::<IncomingRpcMessage>()
            .add_event::<ResetCameraEvent>()
            .add_event::<RelayoutRequest>()
            .add_systems(Update, handle_rpc_messages);
        app
    }

    fn send(app: &mut App, message: serde_json::Value) {
        app.world_mut().send_event(IncomingRpcMessage {
            content: message.to_string(),
        });
        app.update();
    }

    fn responses(app: &App) -> &[RpcResponse] {
        &app.world().resource::<WebRpcInterface>().outgoing_responses
    }

    #[test]
    fn unknown_methods_are_rejected_with_method_not_found() {
        let error = RpcCommand::parse(&request("spin_forever", json!({}), Some(1))).unwrap_err();
        assert_eq!(error.code, -32601);
        assert_eq!(error.data, Some(json!({ "method": "spin_forever" })));
    }

    #[test]
    fn malformed_resources_are_invalid_params() {
        let error = RpcCommand::parse(&request(
            "set_resources",
            json!({ "resources": "not a list" }),
            Some(1),
        ))
        .unwrap_err();
        assert_eq!(error.code, -32602);
    }

    #[test]
    fn set_resources_without_params_means_empty() {
        let command = RpcCommand::parse(&request("set_resources", serde_json::Value::Null, None));
        assert_eq!(command, Ok(RpcCommand::SetResources(Vec::new())));
    }

    #[test]
    fn set_resources_publishes_validated_host_records() {
        let mut app = rpc_app();
        send(
            &mut app,
            json!({
                "jsonrpc": "2.0",
                "method": "set_resources",
                "params": { "resources": [
                    { "Resource_Name": "p5.js", "Category": "Tool", "Description": "Library", "Relevance": "High" },
                    { "Resource_Name": "", "Category": "Tool", "Description": "Nameless" }
                ]},
                "id": 7
            }),
        );

        let set = app.world().resource::<ResourceSet>();
        assert_eq!(set.len(), 1);
        assert_eq!(set.origin(), &DataOrigin::Host);
        assert_eq!(set.generation(), 2);

        let response = &responses(&app)[0];
        assert_eq!(response.id, Some(json!(7)));
        let result = response.result.as_ref().unwrap();
        assert_eq!(result["rows"], 1);
        assert_eq!(result["dropped"], 1);
    }

    #[test]
    fn notifications_run_without_a_response() {
        let mut app = rpc_app();
        send(&mut app, json!({ "jsonrpc": "2.0", "method": "reset_camera" }));

        assert!(responses(&app).is_empty());
        let events = app.world().resource::<Events<ResetCameraEvent>>();
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn unknown_method_request_gets_error_response() {
        let mut app = rpc_app();
        send(&mut app, json!({ "jsonrpc": "2.0", "method": "explode", "id": "a" }));

        let response = &responses(&app)[0];
        assert!(response.result.is_none());
        assert_eq!(response.error.as_ref().map(|e| e.code), Some(-32601));
    }

    #[test]
    fn own_notifications_and_responses_are_not_answered() {
        let mut app = rpc_app();
        send(
            &mut app,
            json!({ "jsonrpc": "2.0", "method": "featured_changed", "params": { "index": 2, "name": "p5.js" } }),
        );
        send(
            &mut app,
            json!({ "jsonrpc": "2.0", "method": "debug_message", "params": { "message": "Processing method: relayout" } }),
        );
        send(
            &mut app,
            json!({ "jsonrpc": "2.0", "result": { "success": true }, "error": null, "id": 3 }),
        );

        let interface = app.world().resource::<WebRpcInterface>();
        assert!(interface.outgoing_notifications.is_empty());
        assert!(interface.outgoing_responses.is_empty());
    }

    #[test]
    fn host_requests_still_get_a_debug_echo() {
        let mut app = rpc_app();
        send(&mut app, json!({ "jsonrpc": "2.0", "method": "relayout" }));

        let interface = app.world().resource::<WebRpcInterface>();
        assert_eq!(interface.outgoing_notifications.len(), 1);
        assert_eq!(interface.outgoing_notifications[0].method, "debug_message");
        assert_eq!(app.world().resource::<Events<RelayoutRequest>>().len(), 1);
    }

    #[test]
    fn get_resources_returns_current_generation() {
        let mut app = rpc_app();
        send(&mut app, json!({ "jsonrpc": "2.0", "method": "get_resources", "id": 1 }));

        let result = responses(&app)[0].result.clone().unwrap();
        assert_eq!(result["generation"], 1);
        assert_eq!(result["origin"], "fallback");
        assert_eq!(result["resources"].as_array().map(Vec::len), Some(6));
        assert_eq!(result["resources"][0]["Resource_Name"], "Processing");
    }
}
