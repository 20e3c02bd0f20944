//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and provides
//! the name-entry field used on the start screen. Mouse clicks are resolved to
//! cards by the view, which knows where each card was drawn.

pub mod map;
pub mod name;

pub use tui_pairs_types as types;

pub use map::{handle_key_event, is_ctrl_c, should_quit};
pub use name::{normalize_name, NameEntry, NameEvent};
