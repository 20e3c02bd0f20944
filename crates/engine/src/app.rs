//! Application controller.
//!
//! [`App`] is the explicit application state owned by the entry point. It
//! turns UI events (start, card click, reset) into calls on the current
//! [`GameSession`], routes each click to the first or second pick depending on
//! the turn phase, and keeps the display-only state the core knows nothing
//! about: which screen is showing, the keyboard cursor, the mismatch reveal
//! timer and the clock frozen at a win.

use std::time::Duration;

use tracing::{debug, info};

use crate::core::{clock_seed, Board, GameSession, GameSnapshot};
use crate::cursor::Cursor;
use crate::types::{
    CardIndex, GameAction, SelectError, Selection, TurnResult, DEFAULT_REVEAL_MS,
};

/// Which screen the UI is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Asking for the player's name
    Start,
    Playing,
    /// All pairs found; waiting for a restart
    Won,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    /// Seed for the first deal; later deals continue the sequence.
    /// `None` seeds every deal from the clock.
    pub seed: Option<u32>,
    /// How long a mismatched pair stays visible
    pub reveal_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            reveal_ms: DEFAULT_REVEAL_MS,
        }
    }
}

/// Mismatched pair still on display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub cards: [CardIndex; 2],
    pub remaining_ms: u32,
}

/// What a card click did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// No game in progress
    Ignored,
    /// The click was illegal; nothing changed
    Rejected(SelectError),
    /// First card of a turn turned up
    Selected(Selection),
    /// Second card turned up and the turn resolved
    Resolved(TurnResult),
}

/// Everything the view needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct AppView {
    pub screen: Screen,
    pub game: Option<GameSnapshot>,
    pub reveal: Option<[CardIndex; 2]>,
    pub cursor: CardIndex,
}

#[derive(Debug)]
pub struct App {
    config: AppConfig,
    screen: Screen,
    session: Option<GameSession>,
    cursor: Cursor,
    reveal: Option<Reveal>,
    /// Clock value captured when the game was won
    final_elapsed: Option<Duration>,
    deals: u32,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            screen: Screen::Start,
            session: None,
            cursor: Cursor::default(),
            reveal: None,
            final_elapsed: None,
            deals: 0,
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn cursor(&self) -> CardIndex {
        self.cursor.index()
    }

    pub fn reveal(&self) -> Option<Reveal> {
        self.reveal
    }

    fn next_seed(&mut self) -> u32 {
        let seed = match self.config.seed {
            Some(seed) => seed.wrapping_add(self.deals),
            None => clock_seed(),
        };
        self.deals = self.deals.wrapping_add(1);
        seed
    }

    /// Start a game for `player_name` on a freshly dealt board
    pub fn start_game(&mut self, player_name: impl Into<String>) {
        let seed = self.next_seed();
        self.begin(GameSession::with_seed(player_name, seed));
    }

    /// Start a game on a prepared board
    pub fn start_game_with_board(&mut self, player_name: impl Into<String>, board: Board) {
        self.begin(GameSession::with_board(player_name, board));
    }

    fn begin(&mut self, session: GameSession) {
        self.session = Some(session);
        self.screen = Screen::Playing;
        self.cursor = Cursor::default();
        self.reveal = None;
        self.final_elapsed = None;
    }

    /// Throw the current game away and deal again for the same player
    pub fn reset_game(&mut self) {
        let Some(name) = self.session.as_ref().map(|s| s.player().name().to_string()) else {
            return;
        };
        info!(player = %name, "game reset");
        self.start_game(name);
    }

    /// Leave the win screen with a new game
    pub fn restart_game(&mut self) {
        if self.screen == Screen::Won {
            self.reset_game();
        }
    }

    /// Handle a click on card `index`
    pub fn card_clicked(&mut self, index: CardIndex) -> ClickOutcome {
        if self.screen != Screen::Playing {
            return ClickOutcome::Ignored;
        }
        let Some(session) = self.session.as_mut() else {
            return ClickOutcome::Ignored;
        };
        // Any click on the table ends a pending mismatch display, accepted or not.
        self.reveal = None;

        let outcome = {
            let mut turn = session.current_turn();
            if turn.has_first_selection() {
                turn.select_second(index).map(ClickOutcome::Resolved)
            } else {
                turn.select_first(index).map(ClickOutcome::Selected)
            }
        };

        let outcome = match outcome {
            Ok(outcome) => outcome,
            Err(err) => {
                debug!(index, %err, "click ignored");
                return ClickOutcome::Rejected(err);
            }
        };

        self.cursor.set(index);
        match outcome {
            ClickOutcome::Resolved(result) => {
                if !result.is_match {
                    self.reveal = Some(Reveal {
                        cards: [result.first.index, result.second.index],
                        remaining_ms: self.config.reveal_ms,
                    });
                }
                if result.is_game_over {
                    let elapsed = session.elapsed();
                    info!(
                        player = session.player().name(),
                        moves = result.moves,
                        stars = result.stars,
                        elapsed_ms = elapsed.as_millis() as u64,
                        "game won"
                    );
                    self.final_elapsed = Some(elapsed);
                    self.screen = Screen::Won;
                }
            }
            ClickOutcome::Selected(_) | ClickOutcome::Ignored | ClickOutcome::Rejected(_) => {}
        }
        outcome
    }

    /// Apply a mapped key action
    pub fn apply_action(&mut self, action: GameAction) -> Option<ClickOutcome> {
        match action {
            GameAction::MoveUp
            | GameAction::MoveDown
            | GameAction::MoveLeft
            | GameAction::MoveRight => {
                if self.screen == Screen::Playing {
                    self.cursor.apply(action);
                }
                None
            }
            GameAction::Flip => Some(self.card_clicked(self.cursor.index())),
            GameAction::Reset => {
                if self.screen == Screen::Playing {
                    self.reset_game();
                }
                None
            }
            GameAction::Restart => {
                self.restart_game();
                None
            }
        }
    }

    /// Advance display timers by `dt_ms`. Never touches the game itself.
    pub fn tick(&mut self, dt_ms: u32) {
        if let Some(reveal) = self.reveal.as_mut() {
            reveal.remaining_ms = reveal.remaining_ms.saturating_sub(dt_ms);
            if reveal.remaining_ms == 0 {
                self.reveal = None;
            }
        }
    }

    /// Clock shown to the player; stops when the game is won
    pub fn elapsed(&self) -> Duration {
        match (self.final_elapsed, &self.session) {
            (Some(done), _) => done,
            (None, Some(session)) => session.elapsed(),
            (None, None) => Duration::ZERO,
        }
    }

    pub fn view(&self) -> AppView {
        let game = self.session.as_ref().map(|s| {
            let mut snap = s.snapshot();
            snap.elapsed = self.elapsed();
            snap
        });
        AppView {
            screen: self.screen,
            game,
            reveal: self.reveal.map(|r| r.cards),
            cursor: self.cursor.index(),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
