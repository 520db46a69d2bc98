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

//! REST endpoints exposing MySafety authorization decisions.

mod config;
mod error;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use clap::Parser;
use config::ApiConfig;
use error::ApiError;
use mysafety_core::{AccessRequest, Authorizer, Evaluation, MySafetyError, Role};
use mysafety_security::{AuditedAuthorizer, AuthorizationPolicy, PermissionMatrix, RoleGrants};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::parse();
    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter()?)
        .init();

    let app = app(AppState::new());

    tracing::info!("listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .map_err(MySafetyError::from)?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Shared handler state.
#[derive(Clone)]
struct AppState {
    authorizer: Arc<dyn Authorizer>,
    matrix: Arc<PermissionMatrix>,
}

impl AppState {
    fn new() -> Self {
        let policy = AuthorizationPolicy::new();
        Self {
            matrix: Arc::new(PermissionMatrix::build(&policy)),
            authorizer: Arc::new(AuditedAuthorizer::new(policy)),
        }
    }
}

#[derive(Serialize)]
struct HealthStatus {
    status: String,
}

async fn health_check() -> impl IntoResponse {
    tracing::info!("Health check requested");
    let health = HealthStatus {
        status: "ok".to_string(),
    };
    (StatusCode::OK, Json(health))
}

async fn decide(State(state): State<AppState>, Json(request): Json<AccessRequest>) -> Json<Evaluation> {
    Json(state.authorizer.evaluate(&request))
}

async fn require(
    State(state): State<AppState>,
    Json(request): Json<AccessRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .authorizer
        .require(request.role, request.resource, request.action)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn role_permissions(
    State(state): State<AppState>,
    Path(role): Path<String>,
) -> Result<Json<RoleGrants>, ApiError> {
    let role: Role = role.parse()?;
    Ok(Json(state.matrix.grants_for(role)))
}

// Separate function to create the Axum app (makes testing easier)
fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/v1/authz/decide", post(decide))
        .route("/v1/authz/require", post(require))
        .route("/v1/roles/:role/permissions", get(role_permissions))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
