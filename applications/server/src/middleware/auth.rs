/// Authentication middleware
use crate::{error::ServerError, services::AuthService};
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Middleware that rejects requests without the shared bearer credential
///
/// Rejected requests never reach the handlers or the store.
pub async fn auth_middleware(
    State(auth_service): State<Arc<AuthService>>,
    request: Request,
    next: Next,
) -> Result<Response, ServerError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    auth_service.verify_header(header).map_err(|e| {
        tracing::warn!(
            method = %request.method(),
            uri = %request.uri(),
            "Token verification failed: {}",
            e
        );
        e
    })?;

    Ok(next.run(request).await)
}
