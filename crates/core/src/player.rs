//! Player module - per-session counters and star rating

use crate::types::{MAX_STARS, STAR_THRESHOLDS};

/// One player's progress through a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    moves: u32,
    score: u32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            moves: 0,
            score: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Completed turns, matched or not
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Matched pairs
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn increment_moves(&mut self) {
        self.moves += 1;
    }

    pub fn increment_score(&mut self) {
        self.score += 1;
    }

    pub fn star_rating(&self) -> u8 {
        star_rating(self.moves)
    }
}

/// Star rating for a move count: 6 stars up to 12 moves, one fewer for every
/// 6 moves after that, bottoming out at 0 past 42.
pub fn star_rating(moves: u32) -> u8 {
    STAR_THRESHOLDS
        .iter()
        .position(|&limit| moves <= limit)
        .map(|i| MAX_STARS - i as u8)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_starts_at_zero() {
        let player = Player::new("ada");
        assert_eq!(player.name(), "ada");
        assert_eq!(player.moves(), 0);
        assert_eq!(player.score(), 0);
        assert_eq!(player.star_rating(), 6);
    }

    #[test]
    fn test_counters_are_independent() {
        let mut player = Player::new("ada");
        player.increment_moves();
        player.increment_moves();
        player.increment_score();
        assert_eq!(player.moves(), 2);
        assert_eq!(player.score(), 1);
    }

    #[test]
    fn test_star_boundaries() {
        assert_eq!(star_rating(0), 6);
        assert_eq!(star_rating(12), 6);
        assert_eq!(star_rating(13), 5);
        assert_eq!(star_rating(18), 5);
        assert_eq!(star_rating(19), 4);
        assert_eq!(star_rating(24), 4);
        assert_eq!(star_rating(30), 3);
        assert_eq!(star_rating(36), 2);
        assert_eq!(star_rating(42), 1);
        assert_eq!(star_rating(43), 0);
        assert_eq!(star_rating(u32::MAX), 0);
    }

    #[test]
    fn test_stars_never_increase_with_moves() {
        let mut last = star_rating(0);
        for moves in 1..100 {
            let stars = star_rating(moves);
            assert!(stars <= last);
            last = stars;
        }
    }
}
