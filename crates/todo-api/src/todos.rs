use axum::{
    Extension, Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{debug, info};
use uuid::Uuid;

use todo_types::api::TodoRequest;
use todo_types::models::Todo;
use todo_types::time::parse_deadline;

use crate::error::ApiError;
use crate::middleware::CurrentUser;
use crate::users::AppState;

/// Ids that are not UUIDs cannot name an existing todo.
fn parse_todo_id(raw: &str) -> Result<Uuid, ApiError> {
    raw.parse().map_err(|_| ApiError::TodoNotFound)
}

/// GET /todos — the caller's todos in creation order.
pub async fn list_todos(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ApiError> {
    let todos = state.store.list_todos(user.id)?;
    Ok(Json(todos))
}

/// POST /todos — neither `title` nor `deadline` is validated; an unreadable
/// deadline is stored as `null`.
pub async fn create_todo(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    payload: Result<Json<TodoRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload?;

    let todo = Todo::new(
        req.title.unwrap_or_default(),
        parse_deadline(req.deadline.as_ref()),
    );
    let todo = state.store.append_todo(user.id, todo)?;

    info!(todo_id = %todo.id, "{} created todo", user.username);

    Ok((StatusCode::CREATED, Json(todo)))
}

/// PUT /todos/{id} — replaces title and deadline. The deadline goes through
/// the same parsing as on creation.
pub async fn update_todo(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
    payload: Result<Json<TodoRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let todo_id = parse_todo_id(&id)?;
    let Json(req) = payload?;

    let todo = state.store.replace_todo(
        user.id,
        todo_id,
        req.title.unwrap_or_default(),
        parse_deadline(req.deadline.as_ref()),
    )?;

    debug!(todo_id = %todo.id, "{} updated todo", user.username);

    Ok((StatusCode::CREATED, Json(todo)))
}

/// PATCH /todos/{id}/done — answers 201 like the other writes.
pub async fn mark_done(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let todo_id = parse_todo_id(&id)?;
    let todo = state.store.mark_done(user.id, todo_id)?;

    debug!(todo_id = %todo.id, "{} completed todo", user.username);

    Ok((StatusCode::CREATED, Json(todo)))
}

/// DELETE /todos/{id} — 204 with an empty body.
pub async fn delete_todo(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let todo_id = parse_todo_id(&id)?;
    state.store.remove_todo(user.id, todo_id)?;

    info!(%todo_id, "{} deleted todo", user.username);

    Ok(StatusCode::NO_CONTENT)
}
