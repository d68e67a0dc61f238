//! Catalog handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;

use topup_core::Game;

use crate::error::ApiError;
use crate::state::AppState;

/// List all games with their items and input descriptors.
pub async fn list_games(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Game>>, ApiError> {
    let games = state.store.list_games().await?;
    Ok(Json(games))
}

/// Get a single game by slug.
pub async fn get_game(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Game>, ApiError> {
    let game = state
        .store
        .get_game(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Game not found".into()))?;

    Ok(Json(game))
}
