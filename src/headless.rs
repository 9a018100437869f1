//! Terminal-less driver: props and user commands in on stdin, host
//! messages out on stdout.
//!
//! Each input line is one JSON object:
//!
//! ```text
//! {"type": "render", "args": {"step": "input", "raw_prompt": ""}}
//! {"type": "user", "command": "type", "text": "summarize this"}
//! {"type": "user", "command": "submit"}
//! ```
//!
//! Output lines use the same envelope as the host-process transport.

use std::io::{BufRead, Write};

use serde::Deserialize;
use serde_json::Value;

use crate::clipboard::ClipboardWriter;
use crate::host::{HostContext, HostError, JsonLineBridge, Theme};
use crate::ui::app::{UserCommand, Widget};

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptLine {
    /// The host re-rendered the widget with new args. Args that are not
    /// a props object render an empty body.
    Render { args: Value },
    /// Something the user did.
    User(UserCommand),
}

/// Replay `input` until EOF or a `quit` command.
pub fn run<R, W>(
    input: R,
    output: W,
    theme: Theme,
    width: u16,
    clipboard: Option<Box<dyn ClipboardWriter>>,
) -> Result<(), HostError>
where
    R: BufRead,
    W: Write,
{
    let mut widget = Widget::new(JsonLineBridge::new(output), theme, width);
    if let Some(clipboard) = clipboard {
        widget = widget.with_clipboard(clipboard);
    }

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let parsed: ScriptLine = match serde_json::from_str(&line) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::warn!(line = index + 1, error = %err, "Skipping malformed script line");
                continue;
            }
        };

        match parsed {
            ScriptLine::Render { args } => widget.on_host_context(HostContext::from_value(args)),
            ScriptLine::User(command) => widget.on_command(command),
        }
        if widget.should_quit() {
            break;
        }
    }

    tracing::info!("Headless session finished");
    Ok(())
}
