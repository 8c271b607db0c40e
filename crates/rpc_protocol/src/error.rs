//! Error envelope returned by every failed call.

use serde::{Deserialize, Serialize};

/// Numeric error codes, in the JSON-RPC reserved and server ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// The request body could not be read
    InvalidRequest = -32600,
    /// Submitted fields failed validation
    InvalidParams = -32602,
    /// The server failed to carry out the call
    InternalError = -32603,
    /// Not signed in, or credentials rejected
    Unauthorized = -32001,
    /// Signed in without the needed privilege
    Forbidden = -32002,
    NotFound = -32003,
    /// The call conflicts with current state
    Conflict = -32004,
}

impl ErrorCode {
    const ALL: [ErrorCode; 7] = [
        ErrorCode::InvalidRequest,
        ErrorCode::InvalidParams,
        ErrorCode::InternalError,
        ErrorCode::Unauthorized,
        ErrorCode::Forbidden,
        ErrorCode::NotFound,
        ErrorCode::Conflict,
    ];

    /// Looks up the code carried on the wire.
    pub fn from_wire(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|known| *known as i32 == code)
    }
}

/// Code and message of a failed call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: i32,
    /// Human-readable, suitable for showing inline next to a form
    pub message: String,
}

/// `{"error": {"code", "message"}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                code: code as i32,
                message: message.into(),
            },
        }
    }

    /// The error code, if it is one this protocol defines.
    pub fn code(&self) -> Option<ErrorCode> {
        ErrorCode::from_wire(self.error.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        let response = ErrorResponse::new(ErrorCode::NotFound, "Event not found");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["error"]["code"], -32003);
        assert_eq!(json["error"]["message"], "Event not found");
    }

    #[test]
    fn test_code_from_wire() {
        let response: ErrorResponse =
            serde_json::from_str(r#"{"error":{"code":-32004,"message":"Email already in use"}}"#)
                .unwrap();

        assert_eq!(response.code(), Some(ErrorCode::Conflict));
        assert_eq!(ErrorCode::from_wire(12345), None);
    }
}
