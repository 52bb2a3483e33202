// Library crate for the hangman game server
// This file exposes the public API for integration tests

pub mod config;
pub mod game;
pub mod player;
pub mod shared;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

// Re-export commonly used types for easier access in tests
pub use config::ServerConfig;
pub use game::{GameService, GuessResponse, WordBank};
pub use player::{CreatePlayerRequest, Player};
pub use shared::{AppError, AppState};

/// Builds the HTTP application with all routes and middleware
pub fn app(state: AppState) -> Router {
    with_middleware(routes()).with_state(state)
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/players", get(player::list_players))
        .route("/player", post(player::create_player))
        .route("/word", get(game::get_current_word))
        .route("/newGame", get(game::new_game))
        .route("/guess/:id/:guess", get(game::guess_letter))
}

/// Request logging and panic recovery around every route
fn with_middleware(router: Router<AppState>) -> Router<AppState> {
    router
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
}
