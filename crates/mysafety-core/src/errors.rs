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

//! Defines common error types for the MySafety core library.

use crate::types::{Action, Resource};
use serde::Serialize;
use thiserror::Error;

/// Raised by [`Authorizer::require`](crate::Authorizer::require) when the
/// policy denies the requested operation.
///
/// Always surfaced to the caller; the HTTP layer renders it as an
/// access-denied response.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[error("Permission denied: cannot {action} {resource}")]
pub struct PermissionDenied {
    /// The action that was denied.
    pub action: Action,
    /// The resource the action targeted.
    pub resource: Resource,
}

/// The primary error type for MySafety operations.
#[derive(Error, Debug)]
pub enum MySafetyError {
    /// Error related to configuration loading or validation.
    #[error("Configuration Error: {0}")]
    ConfigError(String),

    /// Error during file or network I/O operations.
    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error during serialization or deserialization (e.g., JSON parsing).
    #[error("Serialization/Deserialization Error: {0}")]
    SerdeError(#[from] serde_json::Error),

    /// Error indicating a failure during data validation.
    #[error("Validation Error ({context}): {message}")]
    ValidationError {
        /// Context or field where validation failed.
        context: String,
        /// Specific validation failure message.
        message: String,
    },

    /// The authorization policy denied the operation.
    #[error(transparent)]
    PermissionDenied(#[from] PermissionDenied),

    /// Represents an unexpected internal error.
    #[error("Internal Error: {0}")]
    InternalError(String),
}

impl MySafetyError {
    /// Shorthand for building a [`MySafetyError::ValidationError`].
    pub fn validation_error(context: &str, message: &str) -> Self {
        MySafetyError::ValidationError {
            context: context.to_string(),
            message: message.to_string(),
        }
    }
}
