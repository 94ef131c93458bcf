use bevy::prelude::*;
use serde_json::json;

use crate::rpc::web_rpc::WebRpcInterface;

/// Outcome of the most recent data source, independent of what is rendered.
#[derive(Resource, Debug, Clone, PartialEq, Default)]
pub enum DataSourceStatus {
    /// No load has been requested yet.
    #[default]
    Idle,
    Loading,
    Ready {
        rows: usize,
        dropped: usize,
    },
    Failed {
        message: String,
        dismissed: bool,
    },
}

impl DataSourceStatus {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
            dismissed: false,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The error message while an undismissed failure is pending.
    pub fn visible_error(&self) -> Option<&str> {
        match self {
            Self::Failed {
                message,
                dismissed: false,
            } => Some(message),
            _ => None,
        }
    }

    pub fn dismiss(&mut self) {
        if let Self::Failed { dismissed, .. } = self {
            *dismissed = true;
        }
    }

    fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Idle => json!({ "state": "idle" }),
            Self::Loading => json!({ "state": "loading" }),
            Self::Ready { rows, dropped } => {
                json!({ "state": "ready", "rows": rows, "dropped": dropped })
            }
            Self::Failed { message, dismissed } => {
                json!({ "state": "failed", "message": message, "dismissed": dismissed })
            }
        }
    }
}

pub fn broadcast_data_source_status(
    status: Res<DataSourceStatus>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if !status.is_changed() {
        return;
    }
    rpc_interface.send_notification("data_source_status", status.to_json());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismissing_hides_error_but_keeps_failure() {
        let mut status = DataSourceStatus::failed("No valid data found in CSV");
        assert_eq!(status.visible_error(), Some("No valid data found in CSV"));

        status.dismiss();
        assert_eq!(status.visible_error(), None);
        assert!(matches!(status, DataSourceStatus::Failed { dismissed: true, .. }));
    }

    #[test]
    fn dismiss_is_ignored_when_not_failed() {
        let mut status = DataSourceStatus::Loading;
        status.dismiss();
        assert!(status.is_loading());
    }

    #[test]
    fn status_json_names_the_state() {
        let json = DataSourceStatus::Ready { rows: 4, dropped: 1 }.to_json();
        assert_eq!(json["state"], "ready");
        assert_eq!(json["rows"], 4);
    }
}
