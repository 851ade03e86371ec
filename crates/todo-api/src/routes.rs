use axum::{
    Router, middleware,
    routing::{get, patch, post, put},
};

use crate::middleware::require_user;
use crate::todos;
use crate::users::{self, AppState};

/// Every route the service exposes. Only the todo routes sit behind the
/// identification gate.
pub fn router(state: AppState) -> Router {
    let public_routes = Router::new().route("/users", post(users::register));

    let protected_routes = Router::new()
        .route("/todos", get(todos::list_todos).post(todos::create_todo))
        .route("/todos/{id}", put(todos::update_todo).delete(todos::delete_todo))
        .route("/todos/{id}/done", patch(todos::mark_done))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_user));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
}
