//! Server error types.

use auth::AuthError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use event_store::{EventStoreError, ValidationError};
use rpc_protocol::{ErrorCode, ErrorResponse};

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The request body could not be read as the expected JSON.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Authentication required.
    #[error("Authentication required")]
    AuthenticationRequired,

    /// Permission denied.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Event catalog error.
    #[error("Catalog error: {0}")]
    Catalog(#[from] EventStoreError),

    /// Authentication error.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),
}

impl From<ValidationError> for ServerError {
    fn from(error: ValidationError) -> Self {
        ServerError::Catalog(EventStoreError::Validation(error))
    }
}

impl ServerError {
    fn parts(&self) -> (StatusCode, ErrorCode, String) {
        let internal = || {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::InternalError,
                "Internal error".to_string(),
            )
        };

        match self {
            ServerError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::InvalidRequest, msg.clone())
            }
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorCode::NotFound, msg.clone()),
            ServerError::AuthenticationRequired => (
                StatusCode::UNAUTHORIZED,
                ErrorCode::Unauthorized,
                "Authentication required".to_string(),
            ),
            ServerError::PermissionDenied(msg) => {
                (StatusCode::FORBIDDEN, ErrorCode::Forbidden, msg.clone())
            }
            ServerError::Catalog(e) => match e {
                EventStoreError::Validation(v) => {
                    (StatusCode::BAD_REQUEST, ErrorCode::InvalidParams, v.to_string())
                }
                EventStoreError::EventFull { .. } => (
                    StatusCode::CONFLICT,
                    ErrorCode::Conflict,
                    "Event is full".to_string(),
                ),
                EventStoreError::Operation { action, .. } => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::InternalError,
                    action.failure_message().to_string(),
                ),
                _ => internal(),
            },
            ServerError::Auth(e) => match e {
                AuthError::InvalidCredentials => {
                    (StatusCode::UNAUTHORIZED, ErrorCode::Unauthorized, e.to_string())
                }
                AuthError::EmailInUse => (StatusCode::CONFLICT, ErrorCode::Conflict, e.to_string()),
                AuthError::MissingFields | AuthError::PasswordTooShort { .. } => {
                    (StatusCode::BAD_REQUEST, ErrorCode::InvalidParams, e.to_string())
                }
                _ => internal(),
            },
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        (status, Json(ErrorResponse::new(code, message))).into_response()
    }
}

/// Result type alias for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use event_store::StoreAction;

    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ServerError::from(ValidationError::NonPositiveCapacity), StatusCode::BAD_REQUEST),
            (ServerError::InvalidRequest("bad body".into()), StatusCode::BAD_REQUEST),
            (ServerError::from(AuthError::InvalidCredentials), StatusCode::UNAUTHORIZED),
            (ServerError::AuthenticationRequired, StatusCode::UNAUTHORIZED),
            (ServerError::PermissionDenied("admin".into()), StatusCode::FORBIDDEN),
            (ServerError::from(AuthError::EmailInUse), StatusCode::CONFLICT),
            (ServerError::from(EventStoreError::event_full("abc")), StatusCode::CONFLICT),
            (ServerError::NotFound("Event not found".into()), StatusCode::NOT_FOUND),
            (ServerError::from(AuthError::MissingFields), StatusCode::BAD_REQUEST),
        ];

        for (error, expected) in cases {
            assert_eq!(error.parts().0, expected, "{error}");
        }
    }

    #[test]
    fn test_operation_failure_uses_generic_message() {
        let error = ServerError::from(
            EventStoreError::Io(std::io::Error::other("disk on fire")).during(StoreAction::Delete),
        );
        let (status, code, message) = error.parts();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, ErrorCode::InternalError);
        assert_eq!(message, "Failed to delete event");
    }

    #[test]
    fn test_storage_failure_hides_details() {
        let error = ServerError::from(AuthError::Storage("disk full".into()));
        let (status, _, message) = error.parts();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "Internal error");
    }
}
