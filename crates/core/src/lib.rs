//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the pairs game: dealing the table,
//! validating card selections, resolving turns and scoring. It has no
//! dependencies on terminals, timers or input devices, making it:
//!
//! - **Deterministic**: Same seed deals an identical table
//! - **Testable**: Every rule is covered by unit tests
//! - **Portable**: The same model drives the terminal UI and headless tests
//!
//! # Module Structure
//!
//! - [`board`]: the 16-card table with selection and comparison rules
//! - [`player`]: move/score counters and the star rating
//! - [`turn`]: the two-pick selection cycle
//! - [`session`]: one game from deal to win, owning board, player and turns
//! - [`rng`]: seeded LCG and Fisher-Yates shuffle
//! - [`snapshot`]: read-only copy of a session for renderers
//!
//! # Game Rules
//!
//! - Each turn the player flips two cards. A match keeps both face up and
//!   scores a point; a mismatch flips both back.
//! - Every completed turn counts as a move. The star rating starts at 6 and
//!   drops by one every 6 moves past 12.
//! - The game is won when every card is face up.
//! - Picking a card that is already face up is rejected and changes nothing.
//!
//! # Example
//!
//! ```
//! use tui_pairs_core::GameSession;
//!
//! let mut session = GameSession::with_seed("ada", 12345);
//!
//! let first = session.current_turn().select_first(0).unwrap();
//! let partner = session.board().partner_of(0).unwrap();
//! let result = session.current_turn().select_second(partner).unwrap();
//!
//! assert!(result.is_match);
//! assert_eq!(result.second.symbol, first.symbol);
//! assert_eq!(result.moves, 1);
//! assert_eq!(result.score, 1);
//! ```

pub mod board;
pub mod player;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod turn;

pub use tui_pairs_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Card};
pub use player::{star_rating, Player};
pub use rng::{clock_seed, SimpleRng};
pub use session::GameSession;
pub use snapshot::GameSnapshot;
pub use turn::{ActiveTurn, Turn, TurnPhase};
