// ABOUTME: Marketplace workflows over the document store
// ABOUTME: Listing publication/acceptance and mirrored interest handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RosterHub Contributors

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{InterestStatus, MarketplaceListing, PlayerProfile};

/// Orchestrates listing and interest workflows
#[derive(Clone)]
pub struct MarketplaceService {
    database: Database,
}

impl MarketplaceService {
    /// Create a service over the shared database
    #[must_use]
    pub const fn new(database: Database) -> Self {
        Self { database }
    }

    /// Build the denormalized snapshot for a player's listing
    fn snapshot(player: &PlayerProfile) -> MarketplaceListing {
        let details = &player.details;
        let text = |key: &str| {
            details
                .get(key)
                .and_then(serde_json::Value::as_str)
                .unwrap_or_default()
                .to_owned()
        };
        let achievements = text("achievements")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect();
        let now = Utc::now();

        MarketplaceListing {
            id: Uuid::new_v4(),
            player_id: player.email.clone(),
            player_name: player.full_name.clone(),
            primary_sport: player.primary_sport,
            experience: details
                .get("playingExperience")
                .and_then(serde_json::Value::as_f64)
                .unwrap_or_default(),
            current_level: player.current_level,
            achievements,
            looking_for_coach: player.looking_for_coach,
            looking_for_team: details
                .get("lookingForTeam")
                .and_then(serde_json::Value::as_bool)
                .unwrap_or_default(),
            location: text("location"),
            contact_info: text("phone"),
            player_details: text("previousTeams"),
            status: InterestStatus::Pending,
            interested_coaches: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Publish a listing for a player seeking a coach
    ///
    /// # Errors
    ///
    /// Returns a forbidden error when the player is not looking for a
    /// coach, a conflict when an open listing already exists, or a
    /// database error.
    pub async fn submit_listing(&self, player_email: &str) -> AppResult<MarketplaceListing> {
        let player = self.database.get_player_required(player_email).await?;
        if !player.looking_for_coach {
            return Err(AppError::forbidden(
                "Only players looking for a coach can publish a listing",
            ));
        }

        let listing = Self::snapshot(&player);
        self.database.create_listing(&listing).await?;
        info!(
            listing_id = %listing.id,
            player = %player.email,
            "marketplace listing published"
        );
        Ok(listing)
    }

    /// Record a coach's interest in a player on both documents
    ///
    /// # Errors
    ///
    /// Returns a forbidden error when the caller is not a registered
    /// coach, a conflict when the pair already exists, or a database
    /// error.
    pub async fn express_interest(
        &self,
        coach_email: &str,
        player_email: &str,
    ) -> AppResult<()> {
        // Role precondition: the caller must exist in the coach collection
        self.database.get_coach_required(coach_email).await.map_err(|_| {
            AppError::forbidden("Only registered coaches can express interest in players")
        })?;

        self.database
            .add_interest_pair(coach_email, player_email, Utc::now())
            .await?;
        info!(coach = %coach_email, player = %player_email, "interest expressed");
        Ok(())
    }

    /// Accept a pending interest; both mirrors flip together
    ///
    /// # Errors
    ///
    /// Returns a not-found error when the pair is missing, a conflict
    /// when it is not pending, or a database error.
    pub async fn accept_interest(
        &self,
        player_email: &str,
        coach_email: &str,
    ) -> AppResult<()> {
        self.database
            .accept_interest_pair(player_email, coach_email, Utc::now())
            .await?;
        info!(coach = %coach_email, player = %player_email, "interest accepted");
        Ok(())
    }

    /// Accept a listing: verify the player, delete the listing
    ///
    /// # Errors
    ///
    /// Returns a forbidden error when the caller is not a registered
    /// coach, a not-found error when the listing is gone, or a database
    /// error.
    pub async fn accept_listing(
        &self,
        coach_email: &str,
        listing_id: Uuid,
    ) -> AppResult<MarketplaceListing> {
        self.database.get_coach_required(coach_email).await.map_err(|_| {
            AppError::forbidden("Only registered coaches can accept listings")
        })?;

        let listing = self
            .database
            .accept_listing(listing_id, coach_email, Utc::now())
            .await?;
        info!(
            listing_id = %listing.id,
            coach = %coach_email,
            player = %listing.player_id,
            "listing accepted, player verified"
        );
        Ok(listing)
    }

    /// Browse listings, optionally only those seeking a coach
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn browse(
        &self,
        looking_for_coach: Option<bool>,
    ) -> AppResult<Vec<MarketplaceListing>> {
        self.database.list_listings(looking_for_coach).await
    }
}
