//! Player name entry for the start screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{DEFAULT_PLAYER_NAME, MAX_NAME_LEN};

/// Result of feeding one key to a [`NameEntry`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameEvent {
    Edited,
    Submitted(String),
    Ignored,
}

/// Single-line text field holding the player's name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameEntry {
    text: String,
}

impl NameEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> NameEvent {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return NameEvent::Ignored;
        }
        match key.code {
            KeyCode::Enter => NameEvent::Submitted(self.submit()),
            KeyCode::Backspace => {
                if self.text.pop().is_some() {
                    NameEvent::Edited
                } else {
                    NameEvent::Ignored
                }
            }
            KeyCode::Char(ch) if !ch.is_control() => {
                if self.text.chars().count() >= MAX_NAME_LEN {
                    return NameEvent::Ignored;
                }
                self.text.push(ch);
                NameEvent::Edited
            }
            _ => NameEvent::Ignored,
        }
    }

    /// Trimmed name, falling back to the default when blank
    pub fn submit(&self) -> String {
        normalize_name(&self.text)
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

/// Trim and bound a player name; blank names become the default.
pub fn normalize_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DEFAULT_PLAYER_NAME.to_string();
    }
    trimmed.chars().take(MAX_NAME_LEN).collect()
}
