//! Keyboard cursor over the card grid.

use crate::types::{CardIndex, GameAction, GRID_COLS, GRID_ROWS};

/// Grid position in row-major card order. Movement clamps at the edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    index: CardIndex,
}

impl Cursor {
    pub fn new(index: CardIndex) -> Self {
        Self {
            index: index.min(GRID_COLS * GRID_ROWS - 1),
        }
    }

    pub fn index(&self) -> CardIndex {
        self.index
    }

    pub fn col(&self) -> usize {
        self.index % GRID_COLS
    }

    pub fn row(&self) -> usize {
        self.index / GRID_COLS
    }

    /// Apply a movement action; returns false for non-movement actions or
    /// when already at the edge.
    pub fn apply(&mut self, action: GameAction) -> bool {
        let (col, row) = (self.col(), self.row());
        let (col, row) = match action {
            GameAction::MoveLeft if col > 0 => (col - 1, row),
            GameAction::MoveRight if col + 1 < GRID_COLS => (col + 1, row),
            GameAction::MoveUp if row > 0 => (col, row - 1),
            GameAction::MoveDown if row + 1 < GRID_ROWS => (col, row + 1),
            _ => return false,
        };
        self.index = row * GRID_COLS + col;
        true
    }

    pub fn set(&mut self, index: CardIndex) {
        *self = Self::new(index);
    }
}
