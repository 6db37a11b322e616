// ABOUTME: Coach profile database operations
// ABOUTME: Handles registration inserts, lookups, and admin approval
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RosterHub Contributors

use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{CoachProfile, CoachSummary, InterestedPlayer, ProfileStatus, SkillLevel, Sport};

pub(super) fn row_to_coach(row: &SqliteRow) -> AppResult<CoachProfile> {
    let details: serde_json::Value = serde_json::from_str(row.try_get("profile_data")?)?;
    let interested_players: Vec<InterestedPlayer> =
        serde_json::from_str(row.try_get("interested_players")?)?;
    Ok(CoachProfile {
        email: row.try_get("email")?,
        full_name: row.try_get("full_name")?,
        primary_sport: Sport::parse(row.try_get("primary_sport")?),
        coaching_level: SkillLevel::parse(row.try_get("coaching_level")?),
        status: ProfileStatus::parse(row.try_get("status")?),
        interested_players,
        details,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

impl Database {
    async fn create_coach_impl(
        &self,
        profile: &CoachProfile,
        password_hash: &str,
    ) -> AppResult<()> {
        let existing = self.get_coach_impl(&profile.email).await?;
        if existing.is_some() {
            return Err(AppError::conflict(format!(
                "A coach with email {} already exists",
                profile.email
            )));
        }

        sqlx::query(
            r"
            INSERT INTO coaches (
                email, full_name, primary_sport, coaching_level, status,
                password_hash, profile_data, interested_players, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(&profile.email)
        .bind(&profile.full_name)
        .bind(profile.primary_sport.as_str())
        .bind(profile.coaching_level.as_str())
        .bind(profile.status.as_str())
        .bind(password_hash)
        .bind(serde_json::to_string(&profile.details)?)
        .bind(serde_json::to_string(&profile.interested_players)?)
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create coach: {e}")))?;

        Ok(())
    }

    /// Create a new coach profile
    ///
    /// # Errors
    ///
    /// Returns a conflict error if the email is already registered, or a
    /// database error if the insert fails.
    pub async fn create_coach(
        &self,
        profile: &CoachProfile,
        password_hash: &str,
    ) -> AppResult<()> {
        self.create_coach_impl(profile, password_hash).await
    }

    async fn get_coach_impl(&self, email: &str) -> AppResult<Option<CoachProfile>> {
        let row = sqlx::query("SELECT * FROM coaches WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get coach: {e}")))?;

        row.as_ref().map(row_to_coach).transpose()
    }

    /// Get a coach profile by email
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get_coach(&self, email: &str) -> AppResult<Option<CoachProfile>> {
        self.get_coach_impl(email).await
    }

    /// Get a coach profile by email, failing when absent
    ///
    /// # Errors
    ///
    /// Returns a not-found error when no coach has this email.
    pub async fn get_coach_required(&self, email: &str) -> AppResult<CoachProfile> {
        self.get_coach_impl(email)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Coach {email}")))
    }

    /// Stored password hash for a coach, if the email is registered
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get_coach_password_hash(&self, email: &str) -> AppResult<Option<String>> {
        let row = sqlx::query("SELECT password_hash FROM coaches WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get coach credentials: {e}")))?;

        row.map(|r| {
            r.try_get::<String, _>("password_hash")
                .map_err(AppError::from)
        })
        .transpose()
    }

    /// List all coach summaries for the directory
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_coaches(&self) -> AppResult<Vec<CoachSummary>> {
        let rows = sqlx::query(
            r"
            SELECT email, full_name, primary_sport, coaching_level, status
            FROM coaches ORDER BY full_name
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list coaches: {e}")))?;

        rows.iter()
            .map(|row| {
                Ok(CoachSummary {
                    email: row.try_get("email")?,
                    full_name: row.try_get("full_name")?,
                    primary_sport: Sport::parse(row.try_get("primary_sport")?),
                    coaching_level: SkillLevel::parse(row.try_get("coaching_level")?),
                    status: ProfileStatus::parse(row.try_get("status")?),
                })
            })
            .collect()
    }

    /// Flip a pending coach to approved
    ///
    /// # Errors
    ///
    /// Returns a not-found error when no coach has this email, or a
    /// database error if the update fails.
    pub async fn approve_coach(&self, email: &str) -> AppResult<CoachProfile> {
        let result = sqlx::query(
            "UPDATE coaches SET status = $1, updated_at = $2 WHERE email = $3",
        )
        .bind(ProfileStatus::Approved.as_str())
        .bind(chrono::Utc::now())
        .bind(email)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to approve coach: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Coach {email}")));
        }
        self.get_coach_required(email).await
    }
}
