//! Prompt refinement widget feature module.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Host snapshot, local drafts, theme and focus
//! - `intent.rs` - Host refreshes and local edits
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `view.rs` - Phase body rendering

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::{TextEdit, WidgetIntent};
pub use reducer::WidgetReducer;
pub use state::WidgetState;
pub use view::{body_height, body_lines, render_body};
