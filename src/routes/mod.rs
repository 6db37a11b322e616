// ABOUTME: HTTP route organization and shared server resources
// ABOUTME: Assembles per-domain routers into the application router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RosterHub Contributors

/// Admin surface: coach approval
pub mod admin;
/// Login and session snapshot
pub mod auth;
/// Coach directory and profile detail
pub mod coaches;
/// Marketplace listings and interest
pub mod marketplace;
/// Player directory and profile detail
pub mod players;
/// Registration wizard sessions
pub mod registration;

use std::sync::Arc;

use axum::http::HeaderMap;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::{AuthService, Claims};
use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::marketplace::MarketplaceService;
use crate::wizard::WizardRegistry;

/// Shared state handed to every handler
pub struct ServerResources {
    /// Document store
    pub database: Database,
    /// Password and token management
    pub auth: AuthService,
    /// Listing and interest workflows
    pub marketplace: MarketplaceService,
    /// In-flight registration wizard sessions
    pub wizards: WizardRegistry,
    /// Bearer token required by admin routes
    pub admin_token: String,
}

impl ServerResources {
    /// Bundle the shared services
    #[must_use]
    pub fn new(database: Database, jwt_secret: &str, admin_token: &str) -> Self {
        Self {
            auth: AuthService::new(database.clone(), jwt_secret.to_owned()),
            marketplace: MarketplaceService::new(database.clone()),
            database,
            wizards: WizardRegistry::default(),
            admin_token: admin_token.to_owned(),
        }
    }
}

/// Extract and validate the bearer token from request headers
///
/// # Errors
///
/// Returns an auth-required error when the header is missing and an
/// auth-invalid error when the token does not validate.
pub fn authenticate(headers: &HeaderMap, resources: &Arc<ServerResources>) -> AppResult<Claims> {
    let header = headers
        .get("authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::auth_required("Missing authorization header"))?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::auth_invalid("Authorization header must be a bearer token"))?;

    resources.auth.validate_token(token)
}

/// Assemble the complete application router
#[must_use]
pub fn app_router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(auth::AuthRoutes::routes(resources.clone()))
        .merge(registration::RegistrationRoutes::routes(resources.clone()))
        .merge(players::PlayerRoutes::routes(resources.clone()))
        .merge(coaches::CoachRoutes::routes(resources.clone()))
        .merge(marketplace::MarketplaceRoutes::routes(resources.clone()))
        .merge(admin::AdminRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
