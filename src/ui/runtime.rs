use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use signal_hook::consts::{SIGINT, SIGTERM};

use crate::clipboard::{ClipboardHandler, ClipboardWriter};
use crate::config::Config;
use crate::host::HostProcess;
use crate::ui::app::{UserCommand, Widget};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::command_for_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the interactive widget against the configured host process.
pub fn run(config: &Config) -> anyhow::Result<()> {
    config.validate_host()?;

    let shutdown = Arc::new(AtomicBool::new(false));
    for signal in [SIGTERM, SIGINT] {
        signal_hook::flag::register(signal, Arc::clone(&shutdown))
            .with_context(|| format!("failed to register handler for signal {signal}"))?;
    }

    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate, Arc::clone(&shutdown));

    let (mut host, bridge) =
        HostProcess::spawn(&config.host.command, &config.host.args, events.sender())?;

    let width = crossterm::terminal::size().map(|(cols, _)| cols).unwrap_or(80);
    let mut widget = Widget::new(bridge, config.ui.theme, width);
    match ClipboardHandler::new() {
        Ok(handler) => {
            let clipboard: Box<dyn ClipboardWriter> = Box::new(handler);
            widget = widget.with_clipboard(clipboard);
        }
        Err(err) => tracing::warn!(error = %err, "Clipboard unavailable, copy disabled"),
    }

    loop {
        terminal.draw(|frame| draw(frame, widget.state()))?;
        if widget.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                if let Some(command) = command_for_key(key, widget.state().phase()) {
                    widget.on_command(command);
                }
            }
            Ok(AppEvent::Paste(text)) => widget.on_command(UserCommand::Type { text }),
            Ok(AppEvent::Resize(cols, _rows)) => widget.on_resize(cols),
            Ok(AppEvent::Tick) => {
                if shutdown.load(Ordering::Relaxed) {
                    widget.request_quit();
                }
            }
            Ok(AppEvent::Host(context)) => widget.on_host_context(context),
            Ok(AppEvent::HostClosed) => {
                tracing::info!("Host closed its output, exiting");
                widget.request_quit();
            }
            Ok(AppEvent::Shutdown) => {
                tracing::info!("Shutdown signal received");
                widget.request_quit();
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    host.shutdown();
    drop(guard);
    Ok(())
}
