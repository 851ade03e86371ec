use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{info, warn};

use todo_store::Store;
use todo_types::api::CreateUserRequest;

use crate::error::ApiError;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub store: Store,
}

impl AppStateInner {
    pub fn new(store: Store) -> AppState {
        Arc::new(Self { store })
    }
}

/// POST /users — registers `{ name, username }` and returns the new user
/// with an empty `todos` list.
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload?;

    let Some((name, username)) = req.credentials() else {
        warn!("Registration without name and/or username");
        return Err(ApiError::MissingRegistrationFields);
    };

    let user = state.store.create_user(name, username).map_err(|e| {
        warn!("Registration for '{}' failed: {}", username, e);
        ApiError::from(e)
    })?;

    let total = state.store.user_count()?;
    info!(user_id = %user.id, "Registered user {} ({} users)", user.username, total);

    Ok((StatusCode::CREATED, Json(user)))
}
