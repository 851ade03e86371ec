pub mod error;
pub mod middleware;
pub mod routes;
pub mod todos;
pub mod users;

#[cfg(test)]
mod test_support;

pub use error::ApiError;
pub use routes::router;
pub use users::{AppState, AppStateInner};
