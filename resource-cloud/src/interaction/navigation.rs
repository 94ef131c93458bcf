use bevy::prelude::*;
use serde_json::json;

use crate::interaction::hot_zone::LinkHotZone;
use crate::rpc::web_rpc::WebRpcInterface;

/// Open `url` in a new browsing context.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct OpenLinkEvent {
    pub url: String,
}

/// A left click or touch start while the hot zone holds a real link.
pub fn dispatch_link_click(
    mouse_button: Option<Res<ButtonInput<MouseButton>>>,
    touches: Option<Res<Touches>>,
    hot_zone: Res<LinkHotZone>,
    mut open_events: EventWriter<OpenLinkEvent>,
) {
    let clicked = mouse_button.is_some_and(|buttons| buttons.just_pressed(MouseButton::Left))
        || touches.is_some_and(|touches| touches.any_just_pressed());
    if !clicked {
        return;
    }

    if let Some(url) = hot_zone.navigation_target() {
        open_events.write(OpenLinkEvent {
            url: url.to_string(),
        });
    }
}

pub fn open_links(
    mut open_events: EventReader<OpenLinkEvent>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for event in open_events.read() {
        open_in_new_context(&event.url);
        rpc_interface.send_notification("link_opened", json!({ "url": event.url }));
    }
}

fn open_in_new_context(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.open_with_url_and_target(url, "_blank") {
                    error!("Failed to open {}: {:?}", url, e);
                }
            }
            None => error!("Window object not available"),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        info!("Navigation target: {}", url);
    }
}
