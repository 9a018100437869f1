//! Host process transport against a real child process.

#![cfg(unix)]

use std::sync::mpsc;
use std::time::{Duration, Instant};

use refiner_widget::host::{HostBridge, HostProcess};
use refiner_widget::ui::events::AppEvent;
use refiner_widget::workflow::Phase;

#[test]
fn host_lines_become_events_until_eof() {
    let (tx, rx) = mpsc::channel();
    let script = r#"printf '%s\n' '{"step":"input","raw_prompt":"hi"}' 'not json' '{"step":"questions","questions":["A?"]}'"#;
    let (mut host, _bridge) =
        HostProcess::spawn("sh", &["-c".to_string(), script.to_string()], tx).unwrap();

    let mut phases = Vec::new();
    loop {
        match rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            AppEvent::Host(context) => phases.push(context.phase()),
            AppEvent::HostClosed => break,
            _ => {}
        }
    }
    host.shutdown();

    assert_eq!(phases, vec![Some(Phase::Input), Some(Phase::Questions)]);
}

#[test]
fn bridge_writes_reach_host_stdin() {
    let (tx, rx) = mpsc::channel();
    // Echo the first line we receive back as a props object.
    let script = r#"read line; case "$line" in *frame_height*) printf '%s\n' '{"step":"result","refined_prompt":"ok"}';; esac"#;
    let (mut host, mut bridge) =
        HostProcess::spawn("sh", &["-c".to_string(), script.to_string()], tx).unwrap();

    bridge.set_frame_height(12);

    let mut saw_result = false;
    loop {
        match rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            AppEvent::Host(context) => saw_result = context.phase() == Some(Phase::Result),
            AppEvent::HostClosed => break,
            _ => {}
        }
    }
    host.shutdown();
    assert!(saw_result);
}

#[test]
fn shutdown_does_not_wait_for_inherited_stdout() {
    let (tx, _rx) = mpsc::channel();
    // The background sleep keeps the stdout pipe open after sh is killed.
    let script = "sleep 10 & wait";
    let (mut host, _bridge) =
        HostProcess::spawn("sh", &["-c".to_string(), script.to_string()], tx).unwrap();

    let started = Instant::now();
    host.shutdown();
    assert!(started.elapsed() < Duration::from_secs(5));
}
