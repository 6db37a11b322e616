// ABOUTME: Login and session snapshot route handlers
// ABOUTME: Issues JWTs and reads fresh account state from the store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RosterHub Contributors

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use crate::errors::AppError;
use crate::session::SessionSnapshot;

use super::{authenticate, ServerResources};

/// Login request payload
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Account email
    pub email: String,
    /// Plain password
    pub password: String,
}

/// Authentication route handlers
pub struct AuthRoutes;

impl AuthRoutes {
    /// Router for authentication endpoints
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/auth/login", post(Self::handle_login))
            .route("/api/auth/session", get(Self::handle_session))
            .with_state(resources)
    }

    async fn handle_login(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<LoginRequest>,
    ) -> Result<Response, AppError> {
        let response = resources
            .auth
            .login(&request.email, &request.password)
            .await?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    async fn handle_session(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let claims = authenticate(&headers, &resources)?;
        let snapshot = SessionSnapshot::load(&resources.database, &claims).await?;
        Ok((StatusCode::OK, Json(snapshot)).into_response())
    }
}
