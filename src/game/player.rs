use serde::Serialize;

use crate::error::PlayerError;

/// A player's identity within a session. Cells record the seat that
/// occupies them, never the player itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    /// Get the other seat
    pub fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Index into a `[Player; 2]`
    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    /// Single-character marker for text rendering
    pub fn symbol(self) -> char {
        match self {
            Seat::First => 'X',
            Seat::Second => 'O',
        }
    }
}

/// A participant, identified only by the display color the front end
/// chose. The engine never interprets the color; the seat a player holds
/// is decided by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    color: String,
}

impl Player {
    /// Create a player, rejecting a blank color.
    pub fn new(color: impl Into<String>) -> Result<Self, PlayerError> {
        let color = color.into();
        if color.trim().is_empty() {
            return Err(PlayerError::MissingColor);
        }
        Ok(Player { color })
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}
