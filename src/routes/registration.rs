// ABOUTME: Registration wizard session route handlers
// ABOUTME: Start, advance, retreat, toggle, state, and final submit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RosterHub Contributors

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::info;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::{CoachProfile, PlayerProfile, Role};
use crate::wizard::{WizardSession, WizardState};

use super::ServerResources;

/// Toggle request payload
#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    /// Checkbox-group field name
    pub field: String,
    /// Choice to flip
    pub choice: String,
}

fn parse_role(role: &str) -> AppResult<Role> {
    Role::parse(role).ok_or_else(|| AppError::invalid_input(format!("Unknown role: {role}")))
}

/// Wizard route handlers
pub struct RegistrationRoutes;

impl RegistrationRoutes {
    /// Router for registration wizard endpoints
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/register/:role/start", post(Self::handle_start))
            .route("/api/register/:role/:id/state", get(Self::handle_state))
            .route("/api/register/:role/:id/advance", post(Self::handle_advance))
            .route("/api/register/:role/:id/retreat", post(Self::handle_retreat))
            .route("/api/register/:role/:id/toggle", post(Self::handle_toggle))
            .route("/api/register/:role/:id/submit", post(Self::handle_submit))
            .with_state(resources)
    }

    /// Look up a live session, checking it belongs to the role in the path
    fn session_state(
        resources: &Arc<ServerResources>,
        role: Role,
        id: Uuid,
        apply: impl FnOnce(&mut WizardSession) -> AppResult<WizardState>,
    ) -> AppResult<WizardState> {
        resources
            .wizards
            .with_session(id, |session| {
                if session.role() != role {
                    return Err(AppError::invalid_input(format!(
                        "Session {id} does not register a {}",
                        role.as_str()
                    )));
                }
                apply(session)
            })
            .ok_or_else(|| AppError::not_found(format!("Registration session {id}")))?
    }

    async fn handle_start(
        State(resources): State<Arc<ServerResources>>,
        Path(role): Path<String>,
    ) -> Result<Response, AppError> {
        let role = parse_role(&role)?;
        resources.wizards.sweep();
        let session = WizardSession::new(role);
        let state = session.state();
        resources.wizards.insert(session);
        info!(role = role.as_str(), session = %state.id, "registration started");
        Ok((StatusCode::CREATED, Json(state)).into_response())
    }

    async fn handle_state(
        State(resources): State<Arc<ServerResources>>,
        Path((role, id)): Path<(String, Uuid)>,
    ) -> Result<Response, AppError> {
        let role = parse_role(&role)?;
        let state = Self::session_state(&resources, role, id, |s| Ok(s.state()))?;
        Ok((StatusCode::OK, Json(state)).into_response())
    }

    async fn handle_advance(
        State(resources): State<Arc<ServerResources>>,
        Path((role, id)): Path<(String, Uuid)>,
        Json(input): Json<Map<String, Value>>,
    ) -> Result<Response, AppError> {
        let role = parse_role(&role)?;
        let state = Self::session_state(&resources, role, id, |s| {
            s.advance(&input)?;
            Ok(s.state())
        })?;
        Ok((StatusCode::OK, Json(state)).into_response())
    }

    async fn handle_retreat(
        State(resources): State<Arc<ServerResources>>,
        Path((role, id)): Path<(String, Uuid)>,
    ) -> Result<Response, AppError> {
        let role = parse_role(&role)?;
        let state = Self::session_state(&resources, role, id, |s| {
            s.retreat();
            Ok(s.state())
        })?;
        Ok((StatusCode::OK, Json(state)).into_response())
    }

    async fn handle_toggle(
        State(resources): State<Arc<ServerResources>>,
        Path((role, id)): Path<(String, Uuid)>,
        Json(request): Json<ToggleRequest>,
    ) -> Result<Response, AppError> {
        let role = parse_role(&role)?;
        let state = Self::session_state(&resources, role, id, |s| {
            s.toggle(&request.field, &request.choice)?;
            Ok(s.state())
        })?;
        Ok((StatusCode::OK, Json(state)).into_response())
    }

    async fn handle_submit(
        State(resources): State<Arc<ServerResources>>,
        Path((role, id)): Path<(String, Uuid)>,
    ) -> Result<Response, AppError> {
        let role = parse_role(&role)?;
        let registration = resources
            .wizards
            .with_session(id, |session| {
                if session.role() != role {
                    return Err(AppError::invalid_input(format!(
                        "Session {id} does not register a {}",
                        role.as_str()
                    )));
                }
                session.submit().map_err(AppError::from)
            })
            .ok_or_else(|| AppError::not_found(format!("Registration session {id}")))??;

        let password_hash = resources
            .auth
            .hash_password(registration.password.clone())
            .await?;

        let response = match role {
            Role::Player => {
                let profile = PlayerProfile::from_wizard_fields(registration.fields);
                resources.database.create_player(&profile, &password_hash).await?;
                info!(email = %profile.email, "player registered");
                serde_json::to_value(&profile)?
            }
            Role::Coach => {
                let profile = CoachProfile::from_wizard_fields(registration.fields);
                resources.database.create_coach(&profile, &password_hash).await?;
                info!(email = %profile.email, "coach registered");
                serde_json::to_value(&profile)?
            }
        };

        resources.wizards.remove(id);
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }
}
