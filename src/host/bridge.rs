//! Outbound calls from the widget to the host.

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::action::Action;

/// The two calls the widget makes on its host.
///
/// Both are fire-and-forget. Transport failures are the implementation's
/// concern and never reach the widget.
pub trait HostBridge {
    /// Hand the host a single user action.
    fn set_component_value(&mut self, action: &Action);

    /// Report the rendered height in rows. Safe to call redundantly.
    fn set_frame_height(&mut self, height: u16);
}

/// One outbound line on the JSON-lines transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutboundMessage {
    ComponentValue { value: Action },
    FrameHeight { height: u16 },
}

/// Writes each outbound message as one JSON line.
pub struct JsonLineBridge<W: Write> {
    writer: W,
}

impl<W: Write> JsonLineBridge<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn send(&mut self, message: &OutboundMessage) {
        let line = match serde_json::to_string(message) {
            Ok(line) => line,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to encode outbound message");
                return;
            }
        };
        let written = writeln!(self.writer, "{line}").and_then(|()| self.writer.flush());
        if let Err(err) = written {
            // Loss is for the host to detect; nothing is retried.
            tracing::warn!(error = %err, "Failed to write to host");
        }
    }
}

impl<W: Write> HostBridge for JsonLineBridge<W> {
    fn set_component_value(&mut self, action: &Action) {
        tracing::debug!(action = ?action.kind(), "Sending action to host");
        self.send(&OutboundMessage::ComponentValue {
            value: action.clone(),
        });
    }

    fn set_frame_height(&mut self, height: u16) {
        self.send(&OutboundMessage::FrameHeight { height });
    }
}

/// In-memory bridge that records every outbound message.
///
/// Clones share the same log, so a test can keep one handle while the
/// widget owns another.
#[derive(Debug, Clone, Default)]
pub struct RecordingBridge {
    messages: Arc<Mutex<Vec<OutboundMessage>>>,
}

impl RecordingBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<OutboundMessage> {
        self.messages.lock().clone()
    }

    /// Actions only, in emission order.
    pub fn actions(&self) -> Vec<Action> {
        self.messages
            .lock()
            .iter()
            .filter_map(|message| match message {
                OutboundMessage::ComponentValue { value } => Some(value.clone()),
                OutboundMessage::FrameHeight { .. } => None,
            })
            .collect()
    }

    pub fn last_frame_height(&self) -> Option<u16> {
        self.messages
            .lock()
            .iter()
            .rev()
            .find_map(|message| match message {
                OutboundMessage::FrameHeight { height } => Some(*height),
                OutboundMessage::ComponentValue { .. } => None,
            })
    }
}

impl HostBridge for RecordingBridge {
    fn set_component_value(&mut self, action: &Action) {
        self.messages.lock().push(OutboundMessage::ComponentValue {
            value: action.clone(),
        });
    }

    fn set_frame_height(&mut self, height: u16) {
        self.messages
            .lock()
            .push(OutboundMessage::FrameHeight { height });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn lines(bytes: &[u8]) -> Vec<Value> {
        String::from_utf8_lossy(bytes)
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn json_bridge_wraps_actions_in_envelope() {
        let mut buffer = Vec::new();
        let mut bridge = JsonLineBridge::new(&mut buffer);
        bridge.set_component_value(&Action::Analyze {
            prompt: "summarize this doc".into(),
        });
        bridge.set_frame_height(12);

        let out = lines(&buffer);
        assert_eq!(
            out,
            vec![
                json!({"type": "component_value", "value": {"action": "analyze", "prompt": "summarize this doc"}}),
                json!({"type": "frame_height", "height": 12}),
            ]
        );
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_is_swallowed() {
        let mut bridge = JsonLineBridge::new(BrokenPipe);
        bridge.set_component_value(&Action::Reset);
        bridge.set_frame_height(3);
    }

    #[test]
    fn recording_bridge_shares_log_between_clones() {
        let recorder = RecordingBridge::new();
        let mut handle = recorder.clone();
        handle.set_frame_height(7);
        handle.set_component_value(&Action::BackToInput);
        handle.set_frame_height(9);

        assert_eq!(recorder.messages().len(), 3);
        assert_eq!(recorder.actions(), vec![Action::BackToInput]);
        assert_eq!(recorder.last_frame_height(), Some(9));
    }
}
