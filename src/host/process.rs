use std::io::{BufRead, BufReader, Read};
use std::process::{Child, ChildStdin, Command, Stdio};
use std::sync::mpsc::Sender;
use std::thread;

use crate::host::bridge::JsonLineBridge;
use crate::host::{HostContext, HostError};
use crate::ui::events::AppEvent;

/// Host program running as a child process.
///
/// The child writes one props object per line on stdout and reads
/// outbound envelopes on stdin. Its stderr is forwarded to the log.
///
/// The stdout reader thread is detached. It ends at EOF, which a
/// grandchild still holding the pipe can delay past shutdown.
pub struct HostProcess {
    child: Child,
}

impl HostProcess {
    pub fn spawn(
        command: &str,
        args: &[String],
        notifier: Sender<AppEvent>,
    ) -> Result<(Self, JsonLineBridge<ChildStdin>), HostError> {
        let mut child = Command::new(command)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| HostError::Spawn {
                command: command.to_string(),
                source,
            })?;

        let stdin = child
            .stdin
            .take()
            .ok_or(HostError::MissingPipe { stream: "stdin" })?;
        let stdout = child
            .stdout
            .take()
            .ok_or(HostError::MissingPipe { stream: "stdout" })?;
        if let Some(stderr) = child.stderr.take() {
            forward_stderr(stderr);
        }

        tracing::info!(command, pid = child.id(), "Host process started");

        spawn_reader(stdout, move |event| {
            let _ = notifier.send(event);
        });

        Ok((Self { child }, JsonLineBridge::new(stdin)))
    }

    /// Kill and reap the child. Safe to call more than once.
    pub fn shutdown(&mut self) {
        let _ = self.child.kill();
        match self.child.wait() {
            Ok(status) => tracing::debug!(%status, "Host process exited"),
            Err(err) => tracing::warn!(error = %err, "Failed to reap host process"),
        }
    }
}

impl Drop for HostProcess {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Read props lines from `reader` until EOF, in delivery order.
///
/// Lines that are not valid props JSON are logged and skipped. EOF or a
/// read error is reported once as [`AppEvent::HostClosed`].
pub fn spawn_reader<R, F>(reader: R, mut on_event: F) -> thread::JoinHandle<()>
where
    R: Read + Send + 'static,
    F: FnMut(AppEvent) + Send + 'static,
{
    thread::spawn(move || {
        for line in BufReader::new(reader).lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    tracing::warn!(error = %err, "Host stdout read failed");
                    break;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            match HostContext::from_json(&line) {
                Ok(context) => on_event(AppEvent::Host(context)),
                Err(err) => tracing::warn!(error = %err, "Skipping host line"),
            }
        }
        on_event(AppEvent::HostClosed);
    })
}

fn forward_stderr<R: Read + Send + 'static>(stderr: R) {
    thread::spawn(move || {
        for line in BufReader::new(stderr).lines().map_while(Result::ok) {
            tracing::info!(target: "host", "{line}");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::Phase;
    use std::sync::mpsc;

    #[test]
    fn reader_forwards_contexts_in_order_and_skips_garbage() {
        let input = concat!(
            "{\"step\": \"input\", \"raw_prompt\": \"a\"}\n",
            "\n",
            "not json\n",
            "{\"step\": \"questions\", \"raw_prompt\": \"a\", \"questions\": [\"Q?\"]}\n",
        );
        let (tx, rx) = mpsc::channel();
        spawn_reader(input.as_bytes(), move |event| {
            let _ = tx.send(event);
        })
        .join()
        .unwrap();

        let events: Vec<AppEvent> = rx.iter().collect();
        assert_eq!(events.len(), 3);
        assert!(matches!(&events[0], AppEvent::Host(c) if c.phase() == Some(Phase::Input)));
        assert!(matches!(&events[1], AppEvent::Host(c) if c.phase() == Some(Phase::Questions)));
        assert!(matches!(events[2], AppEvent::HostClosed));
    }
}
