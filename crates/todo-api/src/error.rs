use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use todo_store::StoreError;
use todo_types::api::ErrorResponse;

/// Every failure a handler can answer with. The display string is the
/// `error` field of the JSON body the client receives.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Client did not provide a name and/or username!")]
    MissingRegistrationFields,

    #[error("Client username already registered in database!")]
    UsernameTaken,

    #[error("User not found!")]
    UserNotFound,

    #[error("Todo not found!")]
    TodoNotFound,

    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),

    /// Detail is logged, never sent.
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingRegistrationFields => StatusCode::FORBIDDEN,
            Self::UsernameTaken => StatusCode::BAD_REQUEST,
            Self::UserNotFound | Self::TodoNotFound => StatusCode::NOT_FOUND,
            Self::InvalidBody(rejection) => rejection.status(),
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UsernameTaken => Self::UsernameTaken,
            StoreError::UserNotFound => Self::UserNotFound,
            StoreError::TodoNotFound => Self::TodoNotFound,
            StoreError::Poisoned => Self::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            Self::InvalidBody(rejection) => rejection.body_text(),
            Self::Internal(detail) => {
                error!("Internal error: {}", detail);
                self.to_string()
            }
            other => other.to_string(),
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_map_to_status() {
        let cases = [
            (StoreError::UsernameTaken, StatusCode::BAD_REQUEST),
            (StoreError::UserNotFound, StatusCode::NOT_FOUND),
            (StoreError::TodoNotFound, StatusCode::NOT_FOUND),
            (StoreError::Poisoned, StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status_code(), status);
        }
    }

    #[test]
    fn messages_are_client_facing() {
        assert_eq!(ApiError::UserNotFound.to_string(), "User not found!");
        assert_eq!(ApiError::TodoNotFound.to_string(), "Todo not found!");
        assert_eq!(
            ApiError::Internal("lock poisoned".into()).to_string(),
            "Internal server error"
        );
    }
}
