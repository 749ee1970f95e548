//! API error mapping

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use linestore_storage::StoreError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Error returned by API handlers.
///
/// Every storage failure maps to a 500 with a JSON body carrying the error
/// message. The distinction between I/O trouble, an encode failure, and a
/// corrupt log stays in the server log, where an operator can act on it.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] StoreError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = match &self.0 {
            StoreError::Io(_) => "io",
            StoreError::Encode(_) => "encode",
            StoreError::Corruption(_) => "corruption",
        };
        error!(kind, error = %self.0, "Log operation failed");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linestore_storage::CorruptionError;

    #[test]
    fn test_storage_errors_map_to_server_error() {
        let io: StoreError = std::io::Error::other("disk gone").into();
        let corrupt: StoreError = CorruptionError::Header.into();

        for err in [io, corrupt] {
            let response = ApiError::from(err).into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
