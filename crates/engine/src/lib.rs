//! Game engine module - the application layer between input and the core.
//!
//! Owns the current session and the UI-only state around it (screen, cursor,
//! mismatch reveal, frozen clock). The core stays free of timers; this crate
//! is where the periodic tick lands.

pub mod app;
pub mod cursor;

pub use tui_pairs_core as core;
pub use tui_pairs_types as types;

pub use app::{App, AppConfig, AppView, ClickOutcome, Reveal, Screen};
pub use cursor::Cursor;
