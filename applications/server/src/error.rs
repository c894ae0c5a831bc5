/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_core::RosterError;
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Problem response body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub title: String,
    pub detail: String,
    pub status_code: u16,
}

impl Problem {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            title: status
                .canonical_reason()
                .unwrap_or("Error")
                .to_string(),
            detail: detail.into(),
            status_code: status.as_u16(),
        }
    }
}

fn problem(status: StatusCode, detail: impl Into<String>) -> Response {
    (status, Json(Problem::new(status, detail))).into_response()
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            ServerError::Auth(msg) => problem(StatusCode::UNAUTHORIZED, msg),
            ServerError::BadRequest(msg) => problem(StatusCode::BAD_REQUEST, msg),
            ServerError::Roster(err) => match err {
                // Field failures go out as the bare field -> messages map
                RosterError::InvalidFields(errors) => {
                    (StatusCode::BAD_REQUEST, Json(errors)).into_response()
                }
                RosterError::InvalidArgument(msg) => problem(StatusCode::BAD_REQUEST, msg),
                RosterError::NotFound { .. } => problem(StatusCode::NOT_FOUND, err.to_string()),
                RosterError::Conflict { .. } => problem(StatusCode::CONFLICT, err.to_string()),
            },
            ServerError::Config(msg) => {
                tracing::error!("Config error: {}", msg);
                problem(StatusCode::INTERNAL_SERVER_ERROR, "Configuration error")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::FieldErrors;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_is_problem() {
        let response = ServerError::from(RosterError::not_found(999)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["title"], "Not Found");
        assert_eq!(body["detail"], "User not found: 999");
        assert_eq!(body["statusCode"], 404);
    }

    #[tokio::test]
    async fn test_conflict_is_409() {
        let response = ServerError::from(RosterError::conflict("a@b.com")).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(body_json(response).await["statusCode"], 409);
    }

    #[tokio::test]
    async fn test_invalid_fields_is_field_map() {
        let mut errors = FieldErrors::default();
        errors.add("email", "Email is not a valid email address.");

        let response = ServerError::from(RosterError::InvalidFields(errors)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "email": ["Email is not a valid email address."] })
        );
    }

    #[tokio::test]
    async fn test_config_hides_detail() {
        let response = ServerError::Config("missing secret".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["detail"], "Configuration error");
    }
}
