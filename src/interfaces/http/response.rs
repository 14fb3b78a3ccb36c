use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

/// Body of every reply; `result` and `error` serialize as `null` when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub result: Option<Vec<String>>,
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn ok(result: Option<Vec<String>>) -> Self {
        Self {
            success: true,
            result,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(error.into()),
        }
    }
}

pub struct Reply(pub StatusCode, pub ApiResponse);

impl Reply {
    pub fn ok(result: Option<Vec<String>>) -> Self {
        Reply(StatusCode::OK, ApiResponse::ok(result))
    }

    pub fn bad_request(error: impl Into<String>) -> Self {
        Reply(StatusCode::BAD_REQUEST, ApiResponse::failure(error))
    }

    pub fn internal(error: impl Into<String>) -> Self {
        Reply(StatusCode::INTERNAL_SERVER_ERROR, ApiResponse::failure(error))
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        (self.0, Json(self.1)).into_response()
    }
}
