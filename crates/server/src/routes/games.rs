use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::IntoResponse,
    Extension, Json,
};
use catalog_core::{GameDetail, GameSummary};

use crate::clients::geekdo::GeekdoClient;
use crate::error::AppError;

/// GET /games
pub async fn list_games(
    Extension(client): Extension<GeekdoClient>,
) -> Result<Json<Vec<GameSummary>>, AppError> {
    let games = client
        .fetch_collection()
        .await
        .map_err(AppError::GamesUnavailable)?;

    tracing::debug!(count = games.len(), "Fetched collection");
    Ok(Json(games))
}

/// GET /games/{game_id}
///
/// Ids that are not unsigned integers are answered like an unknown game.
pub async fn get_game(
    Extension(client): Extension<GeekdoClient>,
    Path(game_id): Path<String>,
) -> Result<Json<GameDetail>, AppError> {
    let game_id: u64 = game_id.parse().map_err(|_| AppError::GameNotFound)?;

    let game = client
        .fetch_game(game_id)
        .await
        .map_err(AppError::GameUnavailable)?
        .ok_or(AppError::GameNotFound)?;

    Ok(Json(game))
}

/// GET /: 302 to the listing.
pub async fn index() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/games")])
}
