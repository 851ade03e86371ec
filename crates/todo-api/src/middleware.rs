use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};
use uuid::Uuid;

use todo_store::Store;

use crate::error::ApiError;
use crate::users::AppState;

/// Header carrying the caller's username. Plain text, unsigned: this
/// identifies a caller, it does not authenticate one.
pub const USERNAME_HEADER: &str = "username";

/// The user resolved by [`identify`], available to handlers as
/// `Extension<CurrentUser>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: Uuid,
    pub username: String,
}

/// Resolve the acting user from the `username` header.
///
/// A missing header, a non-UTF-8 value and an unknown name are all the same
/// failure: [`ApiError::UserNotFound`].
pub fn identify(store: &Store, headers: &HeaderMap) -> Result<CurrentUser, ApiError> {
    let username = headers
        .get(USERNAME_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(ApiError::UserNotFound)?;

    let user = store
        .find_user_by_username(username)?
        .ok_or(ApiError::UserNotFound)?;

    Ok(CurrentUser {
        id: user.id,
        username: user.username,
    })
}

/// Gate for the todo routes: short-circuits with 404 before the handler runs
/// when the caller cannot be identified.
pub async fn require_user(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = identify(&state.store, req.headers()).inspect_err(|e| {
        warn!("Rejected {} {}: {}", req.method(), req.uri().path(), e);
    })?;

    debug!(user_id = %user.id, "Identified {}", user.username);
    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}
