use axum::{middleware, routing::get, Extension, Router};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};

use crate::clients::geekdo::GeekdoClient;
use crate::config::Config;
use crate::routes;

/// Build the service router around an upstream client.
pub fn router(config: &Config, client: GeekdoClient) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut games = Router::new()
        .route("/games", get(routes::games::list_games))
        .route("/games/{game_id}", get(routes::games::get_game));

    // route_layer: only matched game routes, unknown paths keep their 404
    if config.legacy_errors {
        games = games.route_layer(middleware::from_fn(crate::middleware::legacy_error_status));
    }

    Router::new()
        .route("/", get(routes::games::index))
        .route("/health", get(routes::health::health_check))
        .merge(games)
        .layer(Extension(client))
        .layer(CompressionLayer::new())
        .layer(cors)
}
