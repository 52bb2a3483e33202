use serde::Serialize;

/// Letters guessed so far in the current game, in the order they were first guessed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GuessLedger {
    letters: Vec<char>,
}

impl GuessLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Records `letter` unless already present and returns the full ledger
    pub fn record(&mut self, letter: char) -> &[char] {
        if !self.has(letter) {
            self.letters.push(letter);
        }
        &self.letters
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }
}
