//! Memory Pairs (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof as
//! `tui_pairs::{core,engine,input,term,types}` and hosts the binary's
//! command-line and logging setup.

pub mod cli;
pub mod logging;

pub use tui_pairs_core as core;
pub use tui_pairs_engine as engine;
pub use tui_pairs_input as input;
pub use tui_pairs_term as term;
pub use tui_pairs_types as types;
