// ABOUTME: Player profile database operations
// ABOUTME: Handles registration inserts, lookups, and verification state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RosterHub Contributors

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{InterestRequest, PlayerProfile, PlayerSummary, ProfileStatus, SkillLevel, Sport};

pub(super) fn row_to_player(row: &SqliteRow) -> AppResult<PlayerProfile> {
    let details: serde_json::Value = serde_json::from_str(row.try_get("profile_data")?)?;
    let interest_requests: Vec<InterestRequest> =
        serde_json::from_str(row.try_get("interest_requests")?)?;
    Ok(PlayerProfile {
        email: row.try_get("email")?,
        full_name: row.try_get("full_name")?,
        primary_sport: Sport::parse(row.try_get("primary_sport")?),
        current_level: SkillLevel::parse(row.try_get("current_level")?),
        status: ProfileStatus::parse(row.try_get("status")?),
        is_verified: row.try_get("is_verified")?,
        looking_for_coach: row.try_get("looking_for_coach")?,
        verified_by: row.try_get("verified_by")?,
        verification_date: row.try_get::<Option<DateTime<Utc>>, _>("verification_date")?,
        interest_requests,
        details,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

impl Database {
    async fn create_player_impl(
        &self,
        profile: &PlayerProfile,
        password_hash: &str,
    ) -> AppResult<()> {
        let existing = self.get_player_impl(&profile.email).await?;
        if existing.is_some() {
            return Err(AppError::conflict(format!(
                "A player with email {} already exists",
                profile.email
            )));
        }

        sqlx::query(
            r"
            INSERT INTO players (
                email, full_name, primary_sport, current_level, status,
                is_verified, looking_for_coach, verified_by, verification_date,
                password_hash, profile_data, interest_requests, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            ",
        )
        .bind(&profile.email)
        .bind(&profile.full_name)
        .bind(profile.primary_sport.as_str())
        .bind(profile.current_level.as_str())
        .bind(profile.status.as_str())
        .bind(profile.is_verified)
        .bind(profile.looking_for_coach)
        .bind(&profile.verified_by)
        .bind(profile.verification_date)
        .bind(password_hash)
        .bind(serde_json::to_string(&profile.details)?)
        .bind(serde_json::to_string(&profile.interest_requests)?)
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create player: {e}")))?;

        Ok(())
    }

    /// Create a new player profile
    ///
    /// # Errors
    ///
    /// Returns a conflict error if the email is already registered, or a
    /// database error if the insert fails.
    pub async fn create_player(
        &self,
        profile: &PlayerProfile,
        password_hash: &str,
    ) -> AppResult<()> {
        self.create_player_impl(profile, password_hash).await
    }

    async fn get_player_impl(&self, email: &str) -> AppResult<Option<PlayerProfile>> {
        let row = sqlx::query("SELECT * FROM players WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get player: {e}")))?;

        row.as_ref().map(row_to_player).transpose()
    }

    /// Get a player profile by email
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get_player(&self, email: &str) -> AppResult<Option<PlayerProfile>> {
        self.get_player_impl(email).await
    }

    /// Get a player profile by email, failing when absent
    ///
    /// # Errors
    ///
    /// Returns a not-found error when no player has this email.
    pub async fn get_player_required(&self, email: &str) -> AppResult<PlayerProfile> {
        self.get_player_impl(email)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Player {email}")))
    }

    /// Stored password hash for a player, if the email is registered
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get_player_password_hash(&self, email: &str) -> AppResult<Option<String>> {
        let row = sqlx::query("SELECT password_hash FROM players WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get player credentials: {e}")))?;

        row.map(|r| {
            r.try_get::<String, _>("password_hash")
                .map_err(AppError::from)
        })
        .transpose()
    }

    /// List all player summaries for the directory
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_players(&self) -> AppResult<Vec<PlayerSummary>> {
        let rows = sqlx::query(
            r"
            SELECT email, full_name, primary_sport, current_level, is_verified, looking_for_coach
            FROM players ORDER BY full_name
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list players: {e}")))?;

        rows.iter()
            .map(|row| {
                Ok(PlayerSummary {
                    email: row.try_get("email")?,
                    full_name: row.try_get("full_name")?,
                    primary_sport: Sport::parse(row.try_get("primary_sport")?),
                    current_level: SkillLevel::parse(row.try_get("current_level")?),
                    is_verified: row.try_get("is_verified")?,
                    looking_for_coach: row.try_get("looking_for_coach")?,
                })
            })
            .collect()
    }
}
