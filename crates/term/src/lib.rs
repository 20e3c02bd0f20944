//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids
//! widget/layout libraries and renders into a plain framebuffer that is
//! diffed and flushed to the terminal through crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep drawing pure: [`GameView`] only writes into a [`FrameBuffer`]
//! - Let the view own card placement so mouse clicks map back to cards

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_pairs_core as core;
pub use tui_pairs_engine as engine;
pub use tui_pairs_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{
    card_face, format_clock, star_glyphs, symbol_glyph, AnchorY, CardFace, GameView, Viewport,
};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
