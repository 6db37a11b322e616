// ABOUTME: Marketplace listing snapshot storage
// ABOUTME: Listings are immutable after publication; accepting one deletes it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RosterHub Contributors

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::MarketplaceListing;

fn row_to_listing(row: &SqliteRow) -> AppResult<MarketplaceListing> {
    let listing: MarketplaceListing = serde_json::from_str(row.try_get("listing_data")?)?;
    Ok(listing)
}

impl Database {
    /// Publish a listing snapshot
    ///
    /// # Errors
    ///
    /// Returns a conflict error when the player already has an open
    /// listing, or a database error if the insert fails.
    pub async fn create_listing(&self, listing: &MarketplaceListing) -> AppResult<()> {
        let open: Option<SqliteRow> = sqlx::query(
            "SELECT id FROM marketplace_listings WHERE player_id = $1 AND status = 'pending'",
        )
        .bind(&listing.player_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to check open listings: {e}")))?;
        if open.is_some() {
            return Err(AppError::conflict(format!(
                "Player {} already has an open listing",
                listing.player_id
            )));
        }

        sqlx::query(
            r"
            INSERT INTO marketplace_listings (
                id, player_id, player_name, primary_sport, looking_for_coach,
                status, listing_data, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(listing.id.to_string())
        .bind(&listing.player_id)
        .bind(&listing.player_name)
        .bind(listing.primary_sport.as_str())
        .bind(listing.looking_for_coach)
        .bind(listing.status.as_str())
        .bind(serde_json::to_string(listing)?)
        .bind(listing.created_at)
        .bind(listing.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create listing: {e}")))?;

        Ok(())
    }

    /// Get a listing by id
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get_listing(&self, id: Uuid) -> AppResult<Option<MarketplaceListing>> {
        let row = sqlx::query("SELECT listing_data FROM marketplace_listings WHERE id = $1")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get listing: {e}")))?;

        row.as_ref().map(row_to_listing).transpose()
    }

    /// List published listings, optionally only those seeking a coach
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_listings(
        &self,
        looking_for_coach: Option<bool>,
    ) -> AppResult<Vec<MarketplaceListing>> {
        let rows = match looking_for_coach {
            Some(flag) => {
                sqlx::query(
                    r"
                    SELECT listing_data FROM marketplace_listings
                    WHERE looking_for_coach = $1 ORDER BY created_at DESC
                    ",
                )
                .bind(flag)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query(
                    "SELECT listing_data FROM marketplace_listings ORDER BY created_at DESC",
                )
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| AppError::database(format!("Failed to list listings: {e}")))?;

        rows.iter().map(row_to_listing).collect()
    }

    /// Accept a listing: verify the player and delete the listing
    ///
    /// Runs in one transaction; once it commits the listing row is gone
    /// and the player carries the verifying coach and timestamp.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when the listing does not exist, or a
    /// database error if either write fails.
    pub async fn accept_listing(
        &self,
        id: Uuid,
        coach_email: &str,
        now: DateTime<Utc>,
    ) -> AppResult<MarketplaceListing> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        let row = sqlx::query("SELECT listing_data FROM marketplace_listings WHERE id = $1")
            .bind(id.to_string())
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to get listing: {e}")))?
            .ok_or_else(|| AppError::not_found(format!("Listing {id}")))?;
        let listing = row_to_listing(&row)?;

        sqlx::query(
            r"
            UPDATE players
            SET is_verified = 1, verified_by = $1, verification_date = $2, updated_at = $2
            WHERE email = $3
            ",
        )
        .bind(coach_email)
        .bind(now)
        .bind(&listing.player_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to verify player: {e}")))?;

        sqlx::query("DELETE FROM marketplace_listings WHERE id = $1")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete listing: {e}")))?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit listing accept: {e}")))?;

        Ok(listing)
    }
}
