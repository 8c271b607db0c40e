//! Request extractors.

use axum::extract::{FromRequest, rejection::JsonRejection};

use crate::error::ServerError;

/// JSON body extractor whose rejection is a [`ServerError`], so unreadable
/// bodies get the same error envelope as every other failure.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ServerError))]
pub struct ApiJson<T>(pub T);

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::InvalidRequest(rejection.body_text())
    }
}
