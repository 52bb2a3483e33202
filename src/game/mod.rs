// Public API
pub use errors::GameError;
pub use handlers::{get_current_word, guess_letter, new_game};
pub use ledger::GuessLedger;
pub use service::{GameService, GameServiceBuilder};
pub use state::GameState;
pub use turn::{evaluate_turn, reject_turn, TurnOutcome, TurnResult};
pub use types::GuessResponse;
pub use words::WordBank;

// Internal modules
mod errors;
mod handlers;
mod ledger;
mod service;
mod state;
mod turn;
mod types;
mod words;
