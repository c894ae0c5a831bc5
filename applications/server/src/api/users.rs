/// Users API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use roster_core::types::{CreateUser, Page, UpdateUser, User, UserId, DEFAULT_PAGE_SIZE};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUsersQuery {
    #[serde(default = "default_page")]
    pub page: i64,

    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

/// Location of a user resource
pub fn user_location(id: UserId) -> String {
    format!("/api/users/{}", id)
}

// Extractor rejections become problem responses instead of axum's plain text
fn user_id(path: std::result::Result<Path<UserId>, PathRejection>) -> Result<UserId> {
    path.map(|Path(id)| id)
        .map_err(|e| ServerError::BadRequest(e.body_text()))
}

fn json_body<T>(body: std::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    body.map(|Json(payload)| payload)
        .map_err(|e| ServerError::BadRequest(e.body_text()))
}

/// GET /api/users?page&pageSize
/// List users in insertion order
pub async fn list_users(
    State(app_state): State<AppState>,
    query: std::result::Result<Query<ListUsersQuery>, QueryRejection>,
) -> Result<Json<Page<User>>> {
    let Query(query) = query.map_err(|e| ServerError::BadRequest(e.body_text()))?;
    let page = app_state.store.list(query.page, query.page_size)?;
    Ok(Json(page))
}

/// GET /api/users/:id
/// Get a single user
pub async fn get_user(
    State(app_state): State<AppState>,
    path: std::result::Result<Path<UserId>, PathRejection>,
) -> Result<Json<User>> {
    let id = user_id(path)?;
    let user = app_state.store.get(id)?;
    Ok(Json(user))
}

/// POST /api/users
/// Create a user; responds 201 with a Location header
pub async fn create_user(
    State(app_state): State<AppState>,
    body: std::result::Result<Json<CreateUser>, JsonRejection>,
) -> Result<Response> {
    let payload = json_body(body)?;
    let user = app_state.store.create(payload)?;

    tracing::info!(user_id = user.id, "User created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, user_location(user.id))],
        Json(user),
    )
        .into_response())
}

/// PUT /api/users/:id
/// Partially update a user; absent or blank fields are left unchanged
pub async fn update_user(
    State(app_state): State<AppState>,
    path: std::result::Result<Path<UserId>, PathRejection>,
    body: std::result::Result<Json<UpdateUser>, JsonRejection>,
) -> Result<StatusCode> {
    let id = user_id(path)?;
    let payload = json_body(body)?;
    app_state.store.update(id, payload)?;

    tracing::info!(user_id = id, "User updated");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/users/:id
/// Delete a user
pub async fn delete_user(
    State(app_state): State<AppState>,
    path: std::result::Result<Path<UserId>, PathRejection>,
) -> Result<StatusCode> {
    let id = user_id(path)?;
    app_state.store.delete(id)?;

    tracing::info!(user_id = id, "User deleted");

    Ok(StatusCode::NO_CONTENT)
}
