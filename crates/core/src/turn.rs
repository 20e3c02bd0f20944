//! Turn module - one two-card selection cycle
//!
//! A turn moves through `AwaitingFirst -> AwaitingSecond -> Done`. The turn
//! state itself is a small value kept by the session; it is driven through
//! [`ActiveTurn`], a short-lived handle that borrows the session's board and
//! player for the duration of one input event.

use tracing::debug;

use crate::board::Board;
use crate::player::Player;
use crate::types::{CardIndex, SelectError, Selection, TurnResult};

/// Where a turn is in its cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingFirst,
    AwaitingSecond { first: CardIndex },
    Done,
}

/// Selection cycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    phase: TurnPhase,
}

impl Turn {
    pub fn new() -> Self {
        Self {
            phase: TurnPhase::AwaitingFirst,
        }
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn has_first_selection(&self) -> bool {
        matches!(self.phase, TurnPhase::AwaitingSecond { .. })
    }

    /// Card picked first, while waiting for the second pick
    pub fn first_selection(&self) -> Option<CardIndex> {
        match self.phase {
            TurnPhase::AwaitingSecond { first } => Some(first),
            _ => None,
        }
    }

    pub fn is_done(&self) -> bool {
        self.phase == TurnPhase::Done
    }

    /// Bind this turn to a board and player for one selection
    pub fn bind<'a>(&'a mut self, board: &'a mut Board, player: &'a mut Player) -> ActiveTurn<'a> {
        ActiveTurn {
            turn: self,
            board,
            player,
        }
    }
}

impl Default for Turn {
    fn default() -> Self {
        Self::new()
    }
}

/// A turn bound to the board and player it acts on
#[derive(Debug)]
pub struct ActiveTurn<'a> {
    turn: &'a mut Turn,
    board: &'a mut Board,
    player: &'a mut Player,
}

impl ActiveTurn<'_> {
    pub fn phase(&self) -> TurnPhase {
        self.turn.phase
    }

    pub fn has_first_selection(&self) -> bool {
        self.turn.has_first_selection()
    }

    pub fn is_done(&self) -> bool {
        self.turn.is_done()
    }

    /// Flip the first card of the turn
    pub fn select_first(&mut self, card: CardIndex) -> Result<Selection, SelectError> {
        if self.turn.phase != TurnPhase::AwaitingFirst {
            return Err(SelectError::OutOfTurn);
        }
        let symbol = self.board.select_first(card).inspect_err(|err| {
            debug!(card, %err, "first selection rejected");
        })?;
        self.turn.phase = TurnPhase::AwaitingSecond { first: card };
        Ok(Selection {
            card_index: card,
            symbol,
        })
    }

    /// Flip the second card and resolve the turn
    pub fn select_second(&mut self, card: CardIndex) -> Result<TurnResult, SelectError> {
        let TurnPhase::AwaitingSecond { first } = self.turn.phase else {
            return Err(SelectError::OutOfTurn);
        };
        let comparison = self.board.compare(first, card).inspect_err(|err| {
            debug!(first, card, %err, "second selection rejected");
        })?;

        self.player.increment_moves();
        if comparison.is_match {
            self.player.increment_score();
        }
        self.turn.phase = TurnPhase::Done;

        Ok(TurnResult {
            is_match: comparison.is_match,
            first: comparison.first,
            second: comparison.second,
            moves: self.player.moves(),
            score: self.player.score(),
            stars: self.player.star_rating(),
            is_game_over: self.board.is_won(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Symbol::*;

    fn fixture() -> (Board, Player) {
        let board = Board::from_layout([
            Heart, Bolt, Heart, Bolt, Snowflake, Snowflake, Leaf, Leaf, Moon, Moon, Sun, Sun,
            Umbrella, Umbrella, Anchor, Anchor,
        ])
        .unwrap();
        (board, Player::new("tester"))
    }

    #[test]
    fn test_phases_advance_on_success() {
        let (mut board, mut player) = fixture();
        let mut turn = Turn::new();

        let mut active = turn.bind(&mut board, &mut player);
        assert_eq!(active.phase(), TurnPhase::AwaitingFirst);

        let sel = active.select_first(0).unwrap();
        assert_eq!(sel.symbol, Heart);
        assert_eq!(active.phase(), TurnPhase::AwaitingSecond { first: 0 });

        let result = active.select_second(2).unwrap();
        assert!(result.is_match);
        assert!(active.is_done());
        assert_eq!(turn.first_selection(), None);
    }

    #[test]
    fn test_failed_first_selection_keeps_phase() {
        let (mut board, mut player) = fixture();
        board.select_first(3).unwrap();
        let mut turn = Turn::new();

        let err = turn.bind(&mut board, &mut player).select_first(3);
        assert_eq!(err, Err(SelectError::AlreadyActive { index: 3 }));
        assert_eq!(turn.phase(), TurnPhase::AwaitingFirst);
    }

    #[test]
    fn test_failed_second_selection_keeps_phase_and_counters() {
        let (mut board, mut player) = fixture();
        let mut turn = Turn::new();
        {
            let mut active = turn.bind(&mut board, &mut player);
            active.select_first(1).unwrap();
            assert_eq!(
                active.select_second(1),
                Err(SelectError::AlreadyActive { index: 1 })
            );
            assert!(active.has_first_selection());
        }
        assert_eq!(turn.first_selection(), Some(1));
        assert_eq!(player.moves(), 0);
    }

    #[test]
    fn test_mismatch_counts_move_not_score() {
        let (mut board, mut player) = fixture();
        let mut turn = Turn::new();
        let mut active = turn.bind(&mut board, &mut player);
        active.select_first(0).unwrap();
        let result = active.select_second(1).unwrap();

        assert!(!result.is_match);
        assert_eq!(result.moves, 1);
        assert_eq!(result.score, 0);
        assert_eq!(result.stars, 6);
        assert!(!result.is_game_over);
        assert!(!board.get(0).unwrap().is_active);
        assert!(!board.get(1).unwrap().is_active);
    }

    #[test]
    fn test_out_of_order_calls_are_rejected() {
        let (mut board, mut player) = fixture();
        let mut turn = Turn::new();
        let mut active = turn.bind(&mut board, &mut player);

        assert_eq!(active.select_second(0), Err(SelectError::OutOfTurn));
        active.select_first(0).unwrap();
        assert_eq!(active.select_first(4), Err(SelectError::OutOfTurn));
        active.select_second(2).unwrap();
        assert_eq!(active.select_first(4), Err(SelectError::OutOfTurn));
        assert!(!board.get(4).unwrap().is_active);
    }
}
