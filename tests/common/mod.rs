//! Shared helpers for integration tests.

#![allow(dead_code)]

use refiner_widget::host::{HostContext, RecordingBridge, Theme};
use refiner_widget::ui::app::{UserCommand, Widget};
use serde_json::Value;

/// A widget wired to an in-memory bridge, plus a handle on that bridge.
pub fn recording_widget() -> (Widget<RecordingBridge>, RecordingBridge) {
    let recorder = RecordingBridge::new();
    (Widget::new(recorder.clone(), Theme::Light, 80), recorder)
}

/// Build a context from a `json!` props value.
pub fn context(props: Value) -> HostContext {
    HostContext::from_json(&props.to_string()).expect("props should decode")
}

pub fn type_text(widget: &mut Widget<RecordingBridge>, text: &str) {
    widget.on_command(UserCommand::Type {
        text: text.to_string(),
    });
}

/// Every action the widget sent, as JSON values.
pub fn sent_actions(recorder: &RecordingBridge) -> Vec<Value> {
    recorder
        .actions()
        .iter()
        .map(|action| serde_json::to_value(action).expect("action should encode"))
        .collect()
}
