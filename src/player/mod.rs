// Public API - what other modules can use
pub use handlers::{create_player, list_players};
pub use models::Player;
pub use store::{PlayerStore, SEEDED_PLAYER_NAME};
pub use types::CreatePlayerRequest;

// Internal modules
mod handlers;
pub mod models;
mod store;
mod types;
