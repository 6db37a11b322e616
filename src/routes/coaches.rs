// ABOUTME: Coach directory and profile detail route handlers
// ABOUTME: Same filter surface as the player directory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RosterHub Contributors

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

use crate::directory::DirectoryFilter;
use crate::errors::AppError;

use super::{authenticate, ServerResources};

/// Coach route handlers
pub struct CoachRoutes;

impl CoachRoutes {
    /// Router for coach directory endpoints
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/coaches", get(Self::handle_list))
            .route("/api/coaches/:email", get(Self::handle_get))
            .with_state(resources)
    }

    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(filter): Query<DirectoryFilter>,
    ) -> Result<Response, AppError> {
        authenticate(&headers, &resources)?;
        let coaches = resources.database.list_coaches().await?;
        let coaches = filter.apply(coaches);
        Ok((StatusCode::OK, Json(coaches)).into_response())
    }

    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(email): Path<String>,
    ) -> Result<Response, AppError> {
        authenticate(&headers, &resources)?;
        let coach = resources.database.get_coach_required(&email).await?;
        Ok((StatusCode::OK, Json(coach)).into_response())
    }
}
