use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::{StatusCode, Uri},
    Json,
};
use tracing::{info, instrument, warn};

use super::{turn::TurnResult, types::GuessResponse};
use crate::shared::{AppError, AppState};

/// HTTP handler exposing the current secret word
///
/// GET /word
#[instrument(name = "get_current_word", skip(state))]
pub async fn get_current_word(State(state): State<AppState>) -> Json<String> {
    Json(state.game_service.current_word().await)
}

/// HTTP handler starting a new game
///
/// GET /newGame
#[instrument(name = "new_game", skip(state))]
pub async fn new_game(State(state): State<AppState>) -> Json<&'static str> {
    state.game_service.new_game().await;
    Json("New game started!")
}

/// HTTP handler for one guess
///
/// GET /guess/:id/:guess
/// Invalid tokens still count against the player and answer 400. A token
/// that does not decode to UTF-8 is treated the same way.
#[instrument(name = "guess_letter", skip(state, uri, path))]
pub async fn guess_letter(
    State(state): State<AppState>,
    uri: Uri,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<(StatusCode, Json<GuessResponse>), AppError> {
    let (id, guess) = match path {
        Ok(Path((id, guess))) => (id, Some(guess)),
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Undecodable guess path");
            (raw_player_segment(&uri).unwrap_or_default(), None)
        }
    };

    let player_id: u32 = id.parse().map_err(|_| {
        warn!(player_id = %id, "Unparseable player id");
        AppError::NotFound("Player not found".to_string())
    })?;

    let outcome = match guess {
        Some(guess) => state.game_service.guess(player_id, &guess).await?,
        None => state.game_service.reject_guess(player_id).await?,
    };

    let status = match outcome.result {
        TurnResult::Invalid => StatusCode::BAD_REQUEST,
        _ => StatusCode::OK,
    };

    info!(
        player_id,
        is_correct = outcome.is_correct(),
        is_winner = outcome.is_winner(),
        "Guess processed"
    );

    Ok((status, Json(GuessResponse::from(outcome))))
}

/// Player id segment of `/guess/:id/:guess`, taken from the raw path
fn raw_player_segment(uri: &Uri) -> Option<String> {
    let mut segments = uri.path().trim_start_matches('/').split('/');
    match (segments.next(), segments.next()) {
        (Some("guess"), Some(id)) => Some(id.to_string()),
        _ => None,
    }
}
