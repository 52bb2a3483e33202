use rand::{rngs::StdRng, SeedableRng};
use tracing::debug;

use super::{errors::GameError, ledger::GuessLedger, words::WordBank};

/// The single live game: secret word, guess history and the random source
/// used to draw the next word.
#[derive(Debug)]
pub struct GameState {
    word_bank: WordBank,
    secret_word: String,
    ledger: GuessLedger,
    rng: StdRng,
}

impl GameState {
    /// Starts a game with a word drawn from `word_bank`
    pub fn new(word_bank: WordBank, mut rng: StdRng) -> Self {
        let secret_word = word_bank.select_word("", &mut rng).to_string();
        debug!(word_count = word_bank.len(), "Game state initialised");

        Self {
            word_bank,
            secret_word,
            ledger: GuessLedger::new(),
            rng,
        }
    }

    /// Starts a game with a known secret word, which must be in the bank
    pub fn with_word(word_bank: WordBank, word: &str, rng: StdRng) -> Result<Self, GameError> {
        if !word_bank.contains(word) {
            return Err(GameError::WordNotInBank(word.to_string()));
        }

        Ok(Self {
            word_bank,
            secret_word: word.to_string(),
            ledger: GuessLedger::new(),
            rng,
        })
    }

    /// Random source seeded from the wall clock, so runs differ
    pub fn time_seeded_rng() -> StdRng {
        let now = chrono::Utc::now();
        let seed = now
            .timestamp_nanos_opt()
            .unwrap_or_else(|| now.timestamp_micros()) as u64;
        StdRng::seed_from_u64(seed)
    }

    /// Draws a new secret word different from the current one and forgets all guesses
    pub fn reset(&mut self) -> &str {
        let next = self
            .word_bank
            .select_word(&self.secret_word, &mut self.rng)
            .to_string();
        self.secret_word = next;
        self.ledger.clear();

        debug!(word_length = self.secret_word.len(), "Secret word replaced");
        &self.secret_word
    }

    pub fn current_word(&self) -> &str {
        &self.secret_word
    }

    #[cfg(test)]
    pub fn word_bank(&self) -> &WordBank {
        &self.word_bank
    }

    pub fn ledger(&self) -> &GuessLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut GuessLedger {
        &mut self.ledger
    }
}
