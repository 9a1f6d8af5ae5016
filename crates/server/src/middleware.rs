use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};

use crate::error::HandlerFailure;

/// Legacy mode: handler failures keep their plain-text body but go out as 200.
/// Router rejections (405 and friends) pass through untouched.
pub async fn legacy_error_status(req: Request, next: Next) -> Response {
    let mut resp = next.run(req).await;
    if resp.extensions().get::<HandlerFailure>().is_some() {
        tracing::debug!(status = %resp.status(), "Rewriting failure status for legacy clients");
        *resp.status_mut() = StatusCode::OK;
    }
    resp
}
