//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! Everything here is plain data: the core game model, the application
//! controller and the terminal view all speak in these types.
//!
//! # Layout
//!
//! The table is a fixed 4x4 grid of cards, indexed row-major:
//!
//! ```text
//!  0  1  2  3
//!  4  5  6  7
//!  8  9 10 11
//! 12 13 14 15
//! ```
//!
//! Each of the 8 [`Symbol`]s appears on exactly two cards.
//!
//! # Star Rating
//!
//! | Moves | Stars |
//! |-------|-------|
//! | 0-12 | 6 |
//! | 13-18 | 5 |
//! | 19-24 | 4 |
//! | 25-30 | 3 |
//! | 31-36 | 2 |
//! | 37-42 | 1 |
//! | 43+ | 0 |
//!
//! # Examples
//!
//! ```
//! use tui_pairs_types::{GameAction, Symbol, CARD_COUNT, PAIR_COUNT};
//!
//! assert_eq!(CARD_COUNT, PAIR_COUNT * 2);
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(Symbol::from_str("Moon"), Some(Symbol::Moon));
//! assert_eq!(Symbol::Moon.as_str(), "moon");
//!
//! assert_eq!(GameAction::from_str("flip"), Some(GameAction::Flip));
//! ```

use std::fmt;

use derive_more::{Display, Error};

/// Number of distinct symbols (one per pair)
pub const PAIR_COUNT: usize = 8;

/// Number of cards on the table
pub const CARD_COUNT: usize = PAIR_COUNT * 2;

/// Grid columns
pub const GRID_COLS: usize = 4;

/// Grid rows
pub const GRID_ROWS: usize = CARD_COUNT / GRID_COLS;

/// Upper move bound for each star level, best first.
///
/// `moves <= STAR_THRESHOLDS[i]` earns `MAX_STARS - i` stars.
pub const STAR_THRESHOLDS: [u32; 6] = [12, 18, 24, 30, 36, 42];

/// Rating for a perfect game
pub const MAX_STARS: u8 = 6;

/// Main loop tick in milliseconds
pub const TICK_MS: u32 = 50;

/// How long a mismatched pair stays visible before flipping back (display only)
pub const DEFAULT_REVEAL_MS: u32 = 500;

/// Longest accepted player name, in characters
pub const MAX_NAME_LEN: usize = 24;

/// Name used when the player submits an empty name
pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// Position of a card on the table (`0..CARD_COUNT`)
pub type CardIndex = usize;

/// Card face symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    Heart,
    Bolt,
    Snowflake,
    Leaf,
    Moon,
    Sun,
    Umbrella,
    Anchor,
}

impl Symbol {
    /// All symbols in canonical order
    pub const ALL: [Symbol; PAIR_COUNT] = [
        Symbol::Heart,
        Symbol::Bolt,
        Symbol::Snowflake,
        Symbol::Leaf,
        Symbol::Moon,
        Symbol::Sun,
        Symbol::Umbrella,
        Symbol::Anchor,
    ];

    /// Parse symbol from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "heart" => Some(Symbol::Heart),
            "bolt" => Some(Symbol::Bolt),
            "snowflake" => Some(Symbol::Snowflake),
            "leaf" => Some(Symbol::Leaf),
            "moon" => Some(Symbol::Moon),
            "sun" => Some(Symbol::Sun),
            "umbrella" => Some(Symbol::Umbrella),
            "anchor" => Some(Symbol::Anchor),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::Heart => "heart",
            Symbol::Bolt => "bolt",
            Symbol::Snowflake => "snowflake",
            Symbol::Leaf => "leaf",
            Symbol::Moon => "moon",
            Symbol::Sun => "sun",
            Symbol::Umbrella => "umbrella",
            Symbol::Anchor => "anchor",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point-in-time copy of one card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardSnapshot {
    pub index: CardIndex,
    pub symbol: Symbol,
    pub is_active: bool,
}

/// Successful first pick of a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub card_index: CardIndex,
    pub symbol: Symbol,
}

/// Outcome of comparing the two picks of a turn.
///
/// Snapshots are taken before a mismatch flips the cards back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub is_match: bool,
    pub first: CardSnapshot,
    pub second: CardSnapshot,
}

/// Everything the view needs after a completed turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnResult {
    pub is_match: bool,
    pub first: CardSnapshot,
    pub second: CardSnapshot,
    pub moves: u32,
    pub score: u32,
    pub stars: u8,
    pub is_game_over: bool,
}

/// Rejected card selection. The game state is unchanged when one of these
/// is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SelectError {
    #[display("card {index} is already face up")]
    AlreadyActive { index: CardIndex },
    #[display("card {index} was never turned face up")]
    NotActive { index: CardIndex },
    #[display("card {index} is off the table")]
    OutOfRange { index: CardIndex },
    #[display("selection does not fit the current turn phase")]
    OutOfTurn,
}

/// Explicit layout where a symbol does not appear exactly twice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("symbol {symbol} appears {count} times, expected 2")]
pub struct LayoutError {
    pub symbol: Symbol,
    pub count: usize,
}

/// Player intents produced by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Flip,
    Reset,
    Restart,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveup" => Some(GameAction::MoveUp),
            "movedown" => Some(GameAction::MoveDown),
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "flip" => Some(GameAction::Flip),
            "reset" => Some(GameAction::Reset),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveUp => "moveUp",
            GameAction::MoveDown => "moveDown",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Flip => "flip",
            GameAction::Reset => "reset",
            GameAction::Restart => "restart",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_strings_roundtrip() {
        for symbol in Symbol::ALL {
            assert_eq!(Symbol::from_str(symbol.as_str()), Some(symbol));
        }
        assert_eq!(Symbol::from_str("ANCHOR"), Some(Symbol::Anchor));
        assert_eq!(Symbol::from_str("star"), None);
    }

    #[test]
    fn grid_dimensions_cover_every_card() {
        assert_eq!(GRID_COLS * GRID_ROWS, CARD_COUNT);
    }

    #[test]
    fn star_thresholds_step_by_six() {
        for (i, t) in STAR_THRESHOLDS.iter().enumerate() {
            assert_eq!(*t, 12 + 6 * i as u32);
        }
        assert_eq!(STAR_THRESHOLDS.len(), MAX_STARS as usize);
    }

    #[test]
    fn errors_render_readable_messages() {
        assert_eq!(
            SelectError::AlreadyActive { index: 3 }.to_string(),
            "card 3 is already face up"
        );
        let err = LayoutError {
            symbol: Symbol::Sun,
            count: 3,
        };
        assert_eq!(err.to_string(), "symbol sun appears 3 times, expected 2");
    }

    #[test]
    fn action_strings() {
        assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
        assert_eq!(GameAction::Reset.as_str(), "reset");
        assert_eq!(GameAction::from_str("hold"), None);
    }
}
