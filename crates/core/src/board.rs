//! Board module - the 4x4 table of cards
//!
//! The board owns a fixed array of 16 cards dealt once at construction.
//! Each card is either face down or active (face up, awaiting its pair or
//! permanently matched). The board enforces card-state legality for
//! selections; turn sequencing lives in [`crate::turn`].

use tracing::debug;

use crate::rng::SimpleRng;
use crate::types::{
    CardIndex, CardSnapshot, Comparison, LayoutError, SelectError, Symbol, CARD_COUNT, PAIR_COUNT,
};

/// One card on the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub symbol: Symbol,
    pub is_active: bool,
}

impl Card {
    fn face_down(symbol: Symbol) -> Self {
        Self {
            symbol,
            is_active: false,
        }
    }
}

/// The game board - 16 cards in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cards: [Card; CARD_COUNT],
}

impl Board {
    /// Deal a new shuffled board from the given seed
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        Self::shuffled(&mut rng)
    }

    /// Deal a new board using an existing generator
    pub fn shuffled(rng: &mut SimpleRng) -> Self {
        let mut symbols = [Symbol::Heart; CARD_COUNT];
        for (i, slot) in symbols.iter_mut().enumerate() {
            *slot = Symbol::ALL[i % PAIR_COUNT];
        }
        rng.shuffle(&mut symbols);
        Self {
            cards: symbols.map(Card::face_down),
        }
    }

    /// Build a face-down board from an explicit layout.
    ///
    /// Every symbol must appear exactly twice.
    pub fn from_layout(layout: [Symbol; CARD_COUNT]) -> Result<Self, LayoutError> {
        for symbol in Symbol::ALL {
            let count = layout.iter().filter(|s| **s == symbol).count();
            if count != 2 {
                return Err(LayoutError { symbol, count });
            }
        }
        Ok(Self {
            cards: layout.map(Card::face_down),
        })
    }

    fn card_at(&self, index: CardIndex) -> Result<&Card, SelectError> {
        self.cards
            .get(index)
            .ok_or(SelectError::OutOfRange { index })
    }

    /// Turn a face-down card up as the first pick of a turn
    pub fn select_first(&mut self, index: CardIndex) -> Result<Symbol, SelectError> {
        let card = self.card_at(index)?;
        if card.is_active {
            return Err(SelectError::AlreadyActive { index });
        }
        let symbol = card.symbol;
        self.cards[index].is_active = true;
        Ok(symbol)
    }

    /// Resolve the second pick against the first.
    ///
    /// On a match the second card stays up. On a mismatch both cards go face
    /// down again. Nothing changes when an error is returned.
    pub fn compare(
        &mut self,
        first_index: CardIndex,
        second_index: CardIndex,
    ) -> Result<Comparison, SelectError> {
        let first = *self.card_at(first_index)?;
        let second = *self.card_at(second_index)?;

        if !first.is_active {
            return Err(SelectError::NotActive { index: first_index });
        }
        if second.is_active {
            return Err(SelectError::AlreadyActive {
                index: second_index,
            });
        }

        let is_match = first.symbol == second.symbol;
        let comparison = Comparison {
            is_match,
            first: snapshot(first_index, first),
            second: snapshot(second_index, second),
        };

        if is_match {
            self.cards[second_index].is_active = true;
        } else {
            self.cards[first_index].is_active = false;
            self.cards[second_index].is_active = false;
        }
        debug!(first_index, second_index, is_match, "compared cards");

        Ok(comparison)
    }

    /// True when every card is face up
    pub fn is_won(&self) -> bool {
        self.cards.iter().all(|c| c.is_active)
    }

    /// Get the card at `index`, if on the table
    pub fn get(&self, index: CardIndex) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// All cards in table order
    pub fn cards(&self) -> &[Card; CARD_COUNT] {
        &self.cards
    }

    /// Number of cards currently face up
    pub fn active_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_active).count()
    }

    /// Snapshot of every card, for rendering
    pub fn snapshots(&self) -> [CardSnapshot; CARD_COUNT] {
        let mut out = [snapshot(0, self.cards[0]); CARD_COUNT];
        for (i, card) in self.cards.iter().enumerate() {
            out[i] = snapshot(i, *card);
        }
        out
    }

    /// Index of the other card carrying `index`'s symbol
    pub fn partner_of(&self, index: CardIndex) -> Option<CardIndex> {
        let symbol = self.cards.get(index)?.symbol;
        self.cards
            .iter()
            .enumerate()
            .position(|(i, c)| i != index && c.symbol == symbol)
    }
}

fn snapshot(index: CardIndex, card: Card) -> CardSnapshot {
    CardSnapshot {
        index,
        symbol: card.symbol,
        is_active: card.is_active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Symbol::*;

    fn sorted_board() -> Board {
        Board::from_layout([
            Heart, Heart, Bolt, Bolt, Snowflake, Snowflake, Leaf, Leaf, Moon, Moon, Sun, Sun,
            Umbrella, Umbrella, Anchor, Anchor,
        ])
        .unwrap()
    }

    #[test]
    fn test_new_board_has_each_symbol_twice() {
        for seed in 0..200 {
            let board = Board::new(seed);
            for symbol in Symbol::ALL {
                let count = board.cards().iter().filter(|c| c.symbol == symbol).count();
                assert_eq!(count, 2, "seed {seed}: {symbol} appears {count} times");
            }
            assert_eq!(board.active_count(), 0);
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        assert_eq!(Board::new(12345), Board::new(12345));
    }

    #[test]
    fn test_seeds_produce_different_layouts() {
        let first = Board::new(1);
        assert!((2..20).any(|seed| Board::new(seed) != first));
    }

    #[test]
    fn test_from_layout_rejects_unbalanced() {
        let err = Board::from_layout([
            Heart, Heart, Heart, Bolt, Snowflake, Snowflake, Leaf, Leaf, Moon, Moon, Sun, Sun,
            Umbrella, Umbrella, Anchor, Anchor,
        ])
        .unwrap_err();
        assert_eq!(
            err,
            LayoutError {
                symbol: Heart,
                count: 3
            }
        );
    }

    #[test]
    fn test_select_first_activates() {
        let mut board = sorted_board();
        assert_eq!(board.select_first(4), Ok(Snowflake));
        assert!(board.get(4).unwrap().is_active);
    }

    #[test]
    fn test_select_first_on_active_card_fails_without_change() {
        let mut board = sorted_board();
        board.select_first(0).unwrap();
        let before = board.clone();

        assert_eq!(
            board.select_first(0),
            Err(SelectError::AlreadyActive { index: 0 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_out_of_range_index() {
        let mut board = sorted_board();
        assert_eq!(
            board.select_first(16),
            Err(SelectError::OutOfRange { index: 16 })
        );
        board.select_first(0).unwrap();
        assert_eq!(
            board.compare(0, 99),
            Err(SelectError::OutOfRange { index: 99 })
        );
        assert!(board.get(0).unwrap().is_active);
    }

    #[test]
    fn test_compare_requires_active_first() {
        let mut board = sorted_board();
        assert_eq!(board.compare(0, 1), Err(SelectError::NotActive { index: 0 }));
        assert_eq!(board.active_count(), 0);
    }

    #[test]
    fn test_compare_rejects_active_second() {
        let mut board = sorted_board();
        board.select_first(0).unwrap();
        board.compare(0, 1).unwrap();
        board.select_first(2).unwrap();

        assert_eq!(
            board.compare(2, 1),
            Err(SelectError::AlreadyActive { index: 1 })
        );
        assert!(board.get(2).unwrap().is_active);
    }

    #[test]
    fn test_same_index_as_second_pick_is_already_active() {
        let mut board = sorted_board();
        board.select_first(5).unwrap();
        assert_eq!(
            board.compare(5, 5),
            Err(SelectError::AlreadyActive { index: 5 })
        );
    }

    #[test]
    fn test_matching_compare_keeps_both_up() {
        let mut board = sorted_board();
        board.select_first(6).unwrap();
        let cmp = board.compare(6, 7).unwrap();

        assert!(cmp.is_match);
        assert_eq!(cmp.first.symbol, Leaf);
        assert_eq!(cmp.second.symbol, Leaf);
        assert!(board.get(6).unwrap().is_active);
        assert!(board.get(7).unwrap().is_active);
    }

    #[test]
    fn test_mismatch_flips_both_down() {
        let mut board = sorted_board();
        board.select_first(0).unwrap();
        let cmp = board.compare(0, 2).unwrap();

        assert!(!cmp.is_match);
        // Snapshots reflect the table before the reset.
        assert!(cmp.first.is_active);
        assert!(!cmp.second.is_active);
        assert_eq!(cmp.second.symbol, Bolt);

        assert!(!board.get(0).unwrap().is_active);
        assert!(!board.get(2).unwrap().is_active);

        // Comparing again needs a fresh first pick.
        assert_eq!(board.compare(0, 1), Err(SelectError::NotActive { index: 0 }));
    }

    #[test]
    fn test_is_won_only_when_all_active() {
        let mut board = sorted_board();
        assert!(!board.is_won());
        for pair in 0..PAIR_COUNT {
            let a = pair * 2;
            board.select_first(a).unwrap();
            board.compare(a, a + 1).unwrap();
            assert_eq!(board.is_won(), pair == PAIR_COUNT - 1);
        }
    }

    #[test]
    fn test_partner_of() {
        let board = sorted_board();
        assert_eq!(board.partner_of(0), Some(1));
        assert_eq!(board.partner_of(15), Some(14));
        assert_eq!(board.partner_of(16), None);
    }

    #[test]
    fn test_snapshots_follow_table_order() {
        let board = sorted_board();
        let snaps = board.snapshots();
        for (i, snap) in snaps.iter().enumerate() {
            assert_eq!(snap.index, i);
            assert_eq!(snap.symbol, board.get(i).unwrap().symbol);
        }
    }
}
