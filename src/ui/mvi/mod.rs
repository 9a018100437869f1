//! Model-View-Intent (MVI) primitives for the widget.
//!
//! ```text
//! host context ─┐
//!               ├─→ Intent ──→ Reducer ──→ State ──→ View
//! user edits ───┘                                     │
//!      ↑                                              │
//!      └──────────────────────────────────────────────┘
//! ```
//!
//! - **State**: everything the view needs for one frame
//! - **Intent**: a host refresh or a local edit
//! - **Reducer**: pure `(State, Intent) -> State`; outbound actions and
//!   clipboard writes happen around it, never inside

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
