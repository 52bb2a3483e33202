use serde::{Deserialize, Serialize};

/// A registered player and their counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub correct_guesses: u32,   // Reset every game
    pub incorrect_guesses: u32, // Reset every game
    pub wins: u32,
    pub losses: u32,
}

impl Player {
    /// Creates a player with zeroed counters
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            correct_guesses: 0,
            incorrect_guesses: 0,
            wins: 0,
            losses: 0,
        }
    }

    /// Clear the counters that only live for one game
    pub fn reset_round_counters(&mut self) {
        self.correct_guesses = 0;
        self.incorrect_guesses = 0;
    }
}
