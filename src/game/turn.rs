use tracing::{debug, info};

use super::state::GameState;
use crate::player::Player;

/// How a single guess was judged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnResult {
    /// Token was not exactly one character
    Invalid,
    Incorrect,
    Correct,
    /// Correct guess that completed the word
    Won,
}

impl TurnResult {
    pub fn message(self) -> &'static str {
        match self {
            TurnResult::Invalid => "Invalid guess",
            TurnResult::Incorrect => "Incorrect guess!",
            TurnResult::Correct => "Correct guess!",
            TurnResult::Won => "You won!",
        }
    }
}

/// Outcome of one turn, captured before any reset the turn triggers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub player: Player,
    pub result: TurnResult,
    pub guessed_letters: Vec<char>,
}

impl TurnOutcome {
    pub fn message(&self) -> &'static str {
        self.result.message()
    }

    pub fn is_correct(&self) -> bool {
        matches!(self.result, TurnResult::Correct | TurnResult::Won)
    }

    pub fn is_winner(&self) -> bool {
        self.result == TurnResult::Won
    }
}

/// Applies one guess by `player` to the current game.
///
/// A correct letter scores once per occurrence in the secret word, and only
/// the first time it is guessed this game. Reaching the word length wins;
/// the caller is responsible for resetting the game on [`TurnResult::Won`]
/// since that touches every player, not just this one.
pub fn evaluate_turn(player: &mut Player, guess: &str, state: &mut GameState) -> TurnOutcome {
    let mut chars = guess.chars();
    let letter = match (chars.next(), chars.next()) {
        (Some(letter), None) => letter,
        _ => {
            debug!(
                player_id = player.id,
                guess_len = guess.chars().count(),
                "Rejected guess token"
            );
            return reject_turn(player, state);
        }
    };

    let occurrences = state.current_word().matches(letter).count() as u32;

    let result = if occurrences > 0 {
        if !state.ledger().has(letter) {
            player.correct_guesses += occurrences;
        }

        if player.correct_guesses as usize >= state.current_word().chars().count() {
            player.wins += 1;
            info!(player_id = player.id, "Player completed the word");
            TurnResult::Won
        } else {
            TurnResult::Correct
        }
    } else {
        player.incorrect_guesses += 1;
        TurnResult::Incorrect
    };

    let guessed_letters = state.ledger_mut().record(letter).to_vec();

    debug!(
        player_id = player.id,
        %letter,
        ?result,
        correct_guesses = player.correct_guesses,
        incorrect_guesses = player.incorrect_guesses,
        "Turn evaluated"
    );

    TurnOutcome {
        player: player.clone(),
        result,
        guessed_letters,
    }
}

/// Counts a turn whose token is not a single letter as an incorrect guess.
/// Nothing is recorded in the ledger.
pub fn reject_turn(player: &mut Player, state: &GameState) -> TurnOutcome {
    player.incorrect_guesses += 1;

    TurnOutcome {
        player: player.clone(),
        result: TurnResult::Invalid,
        guessed_letters: state.ledger().letters().to_vec(),
    }
}
