// Copyright 2024 MySafety Platform
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! HTTP rendering of [`MySafetyError`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use mysafety_core::{MySafetyError, PermissionDenied};
use serde_json::json;

/// Error returned from handlers.
#[derive(Debug)]
pub struct ApiError(pub MySafetyError);

impl From<MySafetyError> for ApiError {
    fn from(err: MySafetyError) -> Self {
        ApiError(err)
    }
}

impl From<PermissionDenied> for ApiError {
    fn from(err: PermissionDenied) -> Self {
        ApiError(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.0.to_string();
        let (status, body) = match &self.0 {
            MySafetyError::PermissionDenied(denied) => (
                StatusCode::FORBIDDEN,
                json!({
                    "error": "permission_denied",
                    "action": denied.action,
                    "resource": denied.resource,
                    "message": message,
                }),
            ),
            MySafetyError::ValidationError { context, .. } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "validation_error",
                    "context": context,
                    "message": message,
                }),
            ),
            _ => {
                tracing::error!(error = %message, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "internal_error", "message": "Internal server error" }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
