use std::time::Duration;

use crate::types::{CardIndex, CardSnapshot, CARD_COUNT};

/// Everything a renderer needs from a session, copied out so the view never
/// borrows game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub cards: [CardSnapshot; CARD_COUNT],
    pub player_name: String,
    pub moves: u32,
    pub score: u32,
    pub stars: u8,
    pub is_won: bool,
    pub first_selection: Option<CardIndex>,
    pub elapsed: Duration,
}

impl GameSnapshot {
    /// Cards already paired up (excludes a pending first pick)
    pub fn matched(&self, index: CardIndex) -> bool {
        self.cards
            .get(index)
            .is_some_and(|c| c.is_active && self.first_selection != Some(index))
    }
}
