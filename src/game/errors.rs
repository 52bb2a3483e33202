use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Word bank must contain at least one word")]
    EmptyWordBank,

    #[error("Invalid word {0:?}: words must be non-empty lowercase ASCII letters")]
    InvalidWord(String),

    #[error("Word {0:?} is not in the word bank")]
    WordNotInBank(String),

    #[error("Player not found: {0}")]
    PlayerNotFound(u32),
}
