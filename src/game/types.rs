use serde::{Deserialize, Serialize};

use super::turn::TurnOutcome;
use crate::player::Player;

/// Response body for a guess
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessResponse {
    pub player: Player,
    pub msg: String,
    pub is_correct: bool,
    pub is_winner: bool,
    pub correct_guesses: u32,
    pub incorrect_guesses: u32,
    pub guessed_letters: Vec<char>,
}

impl From<TurnOutcome> for GuessResponse {
    fn from(outcome: TurnOutcome) -> Self {
        Self {
            msg: outcome.message().to_string(),
            is_correct: outcome.is_correct(),
            is_winner: outcome.is_winner(),
            correct_guesses: outcome.player.correct_guesses,
            incorrect_guesses: outcome.player.incorrect_guesses,
            guessed_letters: outcome.guessed_letters,
            player: outcome.player,
        }
    }
}
