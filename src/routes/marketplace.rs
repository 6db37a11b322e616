// ABOUTME: Marketplace route handlers: listings and interest workflow
// ABOUTME: Role preconditions come from the authenticated claims
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RosterHub Contributors

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::Role;

use super::{authenticate, ServerResources};

/// Filter for browsing listings
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseQuery {
    /// When set, only listings with this seeking-a-coach flag
    pub looking_for_coach: Option<bool>,
}

/// Interest request payload
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestRequestBody {
    /// Player the coach is interested in
    pub player_email: String,
}

/// Interest acceptance payload
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptInterestBody {
    /// Coach whose interest the player accepts
    pub coach_email: String,
}

/// Marketplace route handlers
pub struct MarketplaceRoutes;

impl MarketplaceRoutes {
    /// Router for marketplace endpoints
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/marketplace/listings", get(Self::handle_browse))
            .route("/api/marketplace/listings", post(Self::handle_submit_listing))
            .route(
                "/api/marketplace/listings/:id/accept",
                post(Self::handle_accept_listing),
            )
            .route("/api/marketplace/interest", post(Self::handle_express_interest))
            .route(
                "/api/marketplace/interest/accept",
                post(Self::handle_accept_interest),
            )
            .with_state(resources)
    }

    async fn handle_browse(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<BrowseQuery>,
    ) -> Result<Response, AppError> {
        authenticate(&headers, &resources)?;
        let listings = resources.marketplace.browse(query.looking_for_coach).await?;
        Ok((StatusCode::OK, Json(listings)).into_response())
    }

    async fn handle_submit_listing(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let claims = authenticate(&headers, &resources)?;
        if claims.role != Role::Player {
            return Err(AppError::forbidden("Only players can publish listings"));
        }
        let listing = resources.marketplace.submit_listing(&claims.sub).await?;
        Ok((StatusCode::CREATED, Json(listing)).into_response())
    }

    async fn handle_accept_listing(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let claims = authenticate(&headers, &resources)?;
        if claims.role != Role::Coach {
            return Err(AppError::forbidden("Only coaches can accept listings"));
        }
        let listing = resources.marketplace.accept_listing(&claims.sub, id).await?;
        Ok((StatusCode::OK, Json(listing)).into_response())
    }

    async fn handle_express_interest(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(body): Json<InterestRequestBody>,
    ) -> Result<Response, AppError> {
        let claims = authenticate(&headers, &resources)?;
        if claims.role != Role::Coach {
            return Err(AppError::forbidden(
                "Only coaches can express interest in players",
            ));
        }
        resources
            .marketplace
            .express_interest(&claims.sub, &body.player_email)
            .await?;
        Ok((StatusCode::NO_CONTENT, ()).into_response())
    }

    async fn handle_accept_interest(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(body): Json<AcceptInterestBody>,
    ) -> Result<Response, AppError> {
        let claims = authenticate(&headers, &resources)?;
        if claims.role != Role::Player {
            return Err(AppError::forbidden("Only players can accept interest"));
        }
        resources
            .marketplace
            .accept_interest(&claims.sub, &body.coach_email)
            .await?;
        Ok((StatusCode::NO_CONTENT, ()).into_response())
    }
}
