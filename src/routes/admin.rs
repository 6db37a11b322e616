// ABOUTME: Admin route handlers guarded by the configured admin token
// ABOUTME: Currently covers pending coach approval
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RosterHub Contributors

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use tracing::info;

use crate::errors::{AppError, AppResult};

use super::ServerResources;

/// Admin route handlers
pub struct AdminRoutes;

impl AdminRoutes {
    /// Router for admin endpoints
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/admin/coaches/:email/approve",
                post(Self::handle_approve_coach),
            )
            .with_state(resources)
    }

    /// Check the admin bearer token
    fn authorize(headers: &HeaderMap, resources: &Arc<ServerResources>) -> AppResult<()> {
        let header = headers
            .get("authorization")
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| AppError::auth_required("Missing authorization header"))?;
        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::auth_invalid("Authorization header must be a bearer token"))?;
        if token != resources.admin_token {
            return Err(AppError::forbidden("Admin token required"));
        }
        Ok(())
    }

    async fn handle_approve_coach(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(email): Path<String>,
    ) -> Result<Response, AppError> {
        Self::authorize(&headers, &resources)?;
        let coach = resources.database.approve_coach(&email).await?;
        info!(email = %coach.email, "coach approved");
        Ok((StatusCode::OK, Json(coach)).into_response())
    }
}
