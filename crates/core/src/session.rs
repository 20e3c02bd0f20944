//! Session module - one game from deal to win
//!
//! A [`GameSession`] owns the player, the board and the turn sequence. A reset
//! simply drops the session and builds a new one; nothing carries over.

use std::time::{Duration, Instant};

use tracing::info;

use crate::board::Board;
use crate::player::Player;
use crate::rng::clock_seed;
use crate::snapshot::GameSnapshot;
use crate::turn::{ActiveTurn, Turn};
use crate::types::CardIndex;

#[derive(Debug, Clone)]
pub struct GameSession {
    player: Player,
    board: Board,
    turn: Option<Turn>,
    /// Retired turns. Write-only; kept for bookkeeping, never replayed.
    history: Vec<Turn>,
    started_at: Instant,
}

impl GameSession {
    /// Start a session on a board dealt from the clock
    pub fn new(player_name: impl Into<String>) -> Self {
        Self::with_seed(player_name, clock_seed())
    }

    /// Start a session on a reproducible board
    pub fn with_seed(player_name: impl Into<String>, seed: u32) -> Self {
        let session = Self::with_board(player_name, Board::new(seed));
        info!(player = session.player.name(), seed, "session started");
        session
    }

    /// Start a session on a prepared board
    pub fn with_board(player_name: impl Into<String>, board: Board) -> Self {
        Self {
            player: Player::new(player_name),
            board,
            turn: None,
            history: Vec::new(),
            started_at: Instant::now(),
        }
    }

    /// The turn to route the next selection to.
    ///
    /// A finished turn is retired into history and replaced by a fresh one.
    pub fn current_turn(&mut self) -> ActiveTurn<'_> {
        if self.turn.is_some_and(|t| t.is_done()) {
            self.history.extend(self.turn.take());
        }
        let turn = self.turn.get_or_insert_with(Turn::new);
        turn.bind(&mut self.board, &mut self.player)
    }

    /// First pick of the turn in progress, if any
    pub fn first_selection(&self) -> Option<CardIndex> {
        self.turn.and_then(|t| t.first_selection())
    }

    /// Wall-clock time since the session started
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    pub fn is_won(&self) -> bool {
        self.board.is_won()
    }

    /// Read-only view of the session for rendering
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            cards: self.board.snapshots(),
            player_name: self.player.name().to_string(),
            moves: self.player.moves(),
            score: self.player.score(),
            stars: self.player.star_rating(),
            is_won: self.board.is_won(),
            first_selection: self.first_selection(),
            elapsed: self.elapsed(),
        }
    }
}
