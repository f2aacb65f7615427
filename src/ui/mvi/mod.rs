//! Model-View-Intent building blocks for the account screen.
//!
//! ```text
//! key / worker event ──→ Intent ──→ Reducer ──→ State ──→ render
//!          ↑                                                 │
//!          └─────────────────────────────────────────────────┘
//! ```
//!
//! Each feature (registration form, screen state) owns its state type,
//! its intents and one reducer. Side effects such as network calls stay in
//! the [`App`](crate::ui::app::App) and the worker; reducers only compute.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
