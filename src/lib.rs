//! Prompt refiner widget: a host-driven Input → Questions → Result
//! workflow rendered in the terminal.
//!
//! The host owns the workflow; the widget renders the phase it is told,
//! keeps the user's unsubmitted drafts across host refreshes, and sends
//! one action per user intent back to the host.

pub mod action;
pub mod clipboard;
pub mod config;
pub mod headless;
pub mod host;
pub mod logging;
pub mod sync;
pub mod ui;
pub mod workflow;
