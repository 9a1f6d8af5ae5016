use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::clients::geekdo::GeekdoError;

/// Handler failures. Bodies stay the two fixed sentences; the status tells the kinds apart.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Unable to retrieve games.")]
    GamesUnavailable(#[source] GeekdoError),

    #[error("Game not found.")]
    GameNotFound,

    #[error("Game not found.")]
    GameUnavailable(#[source] GeekdoError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::GameNotFound => {
                tracing::info!("Game not found");
                StatusCode::NOT_FOUND
            }
            AppError::GamesUnavailable(e) | AppError::GameUnavailable(e) => upstream_status(e),
        };

        let mut resp = (status, self.to_string()).into_response();
        resp.extensions_mut().insert(HandlerFailure);
        resp
    }
}

/// Marks responses built from an `AppError`, as opposed to router rejections.
#[derive(Clone, Copy, Debug)]
pub struct HandlerFailure;

fn upstream_status(e: &GeekdoError) -> StatusCode {
    match e {
        GeekdoError::Timeout(_) => {
            tracing::warn!("Upstream timeout: {e}");
            StatusCode::GATEWAY_TIMEOUT
        }
        GeekdoError::Transport(_) | GeekdoError::UpstreamStatus(_) => {
            tracing::warn!("Upstream failure: {e}");
            StatusCode::BAD_GATEWAY
        }
        GeekdoError::Parse(_) => {
            tracing::error!("Upstream sent unreadable XML: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
