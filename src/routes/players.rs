// ABOUTME: Player directory and profile detail route handlers
// ABOUTME: Directory filtering runs over summaries fetched from the store
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

/// Player route handlers
pub struct PlayerRoutes;

impl PlayerRoutes {
    /// Router for player directory endpoints
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/players", get(Self::handle_list))
            .route("/api/players/:email", get(Self::handle_get))
            .with_state(resources)
    }

    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(filter): Query<DirectoryFilter>,
    ) -> Result<Response, AppError> {
        authenticate(&headers, &resources)?;
        let players = resources.database.list_players().await?;
        let players = filter.apply(players);
        Ok((StatusCode::OK, Json(players)).into_response())
    }

    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(email): Path<String>,
    ) -> Result<Response, AppError> {
        authenticate(&headers, &resources)?;
        let player = resources.database.get_player_required(&email).await?;
        Ok((StatusCode::OK, Json(player)).into_response())
    }
}
