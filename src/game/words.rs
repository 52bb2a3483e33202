use rand::Rng;

use super::errors::GameError;

/// Candidate secret words compiled into the server
const DEFAULT_WORDS: [&str; 5] = ["toad", "balls", "unicorn", "penguin", "squirrel"];

/// Fixed, non-empty set of candidate secret words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    words: Vec<String>,
}

impl Default for WordBank {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl WordBank {
    /// Builds a bank from the given words, dropping duplicates
    pub fn new<I, S>(words: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for word in words {
            let word = word.into();
            if word.is_empty() || !word.chars().all(|c| c.is_ascii_lowercase()) {
                return Err(GameError::InvalidWord(word));
            }
            if !unique.contains(&word) {
                unique.push(word);
            }
        }

        if unique.is_empty() {
            return Err(GameError::EmptyWordBank);
        }

        Ok(Self { words: unique })
    }

    #[cfg(test)]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub(crate) fn len(&self) -> usize {
        self.words.len()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Draws a word uniformly from every candidate except `previous`.
    ///
    /// A single-word bank cannot honour the no-repeat rule, so its only
    /// entry is returned as-is.
    pub fn select_word<R: Rng>(&self, previous: &str, rng: &mut R) -> &str {
        let candidates: Vec<&String> = self.words.iter().filter(|w| *w != previous).collect();

        if candidates.is_empty() {
            return &self.words[0];
        }

        candidates[rng.random_range(0..candidates.len())]
    }
}
