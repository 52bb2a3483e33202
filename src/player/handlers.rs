use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument, warn};

use super::{models::Player, types::CreatePlayerRequest};
use crate::shared::{AppError, AppState};

/// HTTP handler for listing all players
///
/// GET /players
/// Returns players ordered by ID
#[instrument(name = "list_players", skip(state))]
pub async fn list_players(State(state): State<AppState>) -> Json<Vec<Player>> {
    let players = state.game_service.list_players().await;
    info!(player_count = players.len(), "Players listed");
    Json(players)
}

/// HTTP handler for creating a player
///
/// POST /player
/// A body that does not parse creates nothing and answers 400
#[instrument(name = "create_player", skip(state, payload))]
pub async fn create_player(
    State(state): State<AppState>,
    payload: Result<Json<CreatePlayerRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Player>), AppError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Rejected player payload");
        AppError::BadRequest(rejection.body_text())
    })?;

    let player = state.game_service.create_player(request).await;
    Ok((StatusCode::CREATED, Json(player)))
}
