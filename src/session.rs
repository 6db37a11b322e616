// ABOUTME: Authenticated session snapshots loaded fresh from the store
// ABOUTME: Replaces cached client-side user blobs with server truth
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RosterHub Contributors

use serde::Serialize;

use crate::auth::Claims;
use crate::database::Database;
use crate::errors::AppResult;
use crate::models::{ProfileStatus, Role};

/// What the client learns about its own account
///
/// Always read from the store at request time so workflow changes (a
/// verification, an approval) show up on the next call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    /// Account email
    pub email: String,
    /// Display name
    pub full_name: String,
    /// Account role
    pub role: Role,
    /// Approval status
    pub status: ProfileStatus,
    /// For players, whether a coach has verified them
    pub is_verified: bool,
}

impl SessionSnapshot {
    /// Load the snapshot for validated claims
    ///
    /// # Errors
    ///
    /// Returns a not-found error when the account no longer exists, or a
    /// database error.
    pub async fn load(database: &Database, claims: &Claims) -> AppResult<Self> {
        match claims.role {
            Role::Player => {
                let player = database.get_player_required(&claims.sub).await?;
                Ok(Self {
                    email: player.email,
                    full_name: player.full_name,
                    role: Role::Player,
                    status: player.status,
                    is_verified: player.is_verified,
                })
            }
            Role::Coach => {
                let coach = database.get_coach_required(&claims.sub).await?;
                Ok(Self {
                    email: coach.email,
                    full_name: coach.full_name,
                    role: Role::Coach,
                    status: coach.status,
                    is_verified: false,
                })
            }
        }
    }
}
