// ABOUTME: Mirrored interest pairs between coach and player documents
// ABOUTME: Append and accept run in one transaction so both sides agree
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RosterHub Contributors

use chrono::{DateTime, Utc};
use sqlx::{Row, Sqlite, Transaction};

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{InterestRequest, InterestStatus, InterestedPlayer};

async fn load_player_mirror(
    tx: &mut Transaction<'_, Sqlite>,
    email: &str,
) -> AppResult<(String, Vec<InterestRequest>)> {
    let row = sqlx::query("SELECT full_name, interest_requests FROM players WHERE email = $1")
        .bind(email)
        .fetch_optional(&mut **tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to load player mirror: {e}")))?
        .ok_or_else(|| AppError::not_found(format!("Player {email}")))?;

    let name: String = row.try_get("full_name")?;
    let requests: Vec<InterestRequest> = serde_json::from_str(row.try_get("interest_requests")?)?;
    Ok((name, requests))
}

async fn load_coach_mirror(
    tx: &mut Transaction<'_, Sqlite>,
    email: &str,
) -> AppResult<(String, Vec<InterestedPlayer>)> {
    let row = sqlx::query("SELECT full_name, interested_players FROM coaches WHERE email = $1")
        .bind(email)
        .fetch_optional(&mut **tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to load coach mirror: {e}")))?
        .ok_or_else(|| AppError::not_found(format!("Coach {email}")))?;

    let name: String = row.try_get("full_name")?;
    let players: Vec<InterestedPlayer> = serde_json::from_str(row.try_get("interested_players")?)?;
    Ok((name, players))
}

async fn store_player_mirror(
    tx: &mut Transaction<'_, Sqlite>,
    email: &str,
    requests: &[InterestRequest],
    now: DateTime<Utc>,
) -> AppResult<()> {
    sqlx::query("UPDATE players SET interest_requests = $1, updated_at = $2 WHERE email = $3")
        .bind(serde_json::to_string(requests)?)
        .bind(now)
        .bind(email)
        .execute(&mut **tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to store player mirror: {e}")))?;
    Ok(())
}

async fn store_coach_mirror(
    tx: &mut Transaction<'_, Sqlite>,
    email: &str,
    players: &[InterestedPlayer],
    now: DateTime<Utc>,
) -> AppResult<()> {
    sqlx::query("UPDATE coaches SET interested_players = $1, updated_at = $2 WHERE email = $3")
        .bind(serde_json::to_string(players)?)
        .bind(now)
        .bind(email)
        .execute(&mut **tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to store coach mirror: {e}")))?;
    Ok(())
}

impl Database {
    /// Record a coach's interest in a player on both documents
    ///
    /// Appends the player-side request and the coach-side entry in one
    /// transaction. A pair may exist at most once; a repeat attempt is a
    /// conflict regardless of which caller tries it.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when either profile is missing, a
    /// conflict when the pair already exists, or a database error.
    pub async fn add_interest_pair(
        &self,
        coach_email: &str,
        player_email: &str,
        now: DateTime<Utc>,
    ) -> AppResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        let (player_name, mut requests) = load_player_mirror(&mut tx, player_email).await?;
        let (coach_name, mut players) = load_coach_mirror(&mut tx, coach_email).await?;

        let already = requests.iter().any(|r| r.coach_id == coach_email)
            || players.iter().any(|p| p.player_id == player_email);
        if already {
            return Err(AppError::conflict(format!(
                "Coach {coach_email} has already expressed interest in {player_email}"
            )));
        }

        requests.push(InterestRequest {
            coach_id: coach_email.to_owned(),
            coach_name,
            status: InterestStatus::Pending,
            date: now,
        });
        players.push(InterestedPlayer {
            player_id: player_email.to_owned(),
            player_name,
            status: InterestStatus::Pending,
            date: now,
        });

        store_player_mirror(&mut tx, player_email, &requests, now).await?;
        store_coach_mirror(&mut tx, coach_email, &players, now).await?;

        // Any open listing by this player also records the coach, with the
        // embedded updatedAt kept in step with the query column
        sqlx::query(
            r"
            UPDATE marketplace_listings
            SET listing_data = json_set(
                    listing_data,
                    '$.interestedCoaches',
                    json_insert(json_extract(listing_data, '$.interestedCoaches'), '$[#]', $1),
                    '$.updatedAt',
                    $2
                ),
                updated_at = $3
            WHERE player_id = $4 AND status = 'pending'
            ",
        )
        .bind(coach_email)
        .bind(now.to_rfc3339_opts(chrono::SecondsFormat::Micros, true))
        .bind(now)
        .bind(player_email)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to flag listing interest: {e}")))?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit interest pair: {e}")))?;
        Ok(())
    }

    /// Accept a pending interest pair on both documents
    ///
    /// Both mirror entries flip to accepted in one transaction so they
    /// never disagree.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when either profile or the pair is
    /// missing, a conflict when the pair is not pending, or a database
    /// error.
    pub async fn accept_interest_pair(
        &self,
        player_email: &str,
        coach_email: &str,
        now: DateTime<Utc>,
    ) -> AppResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        let (_, mut requests) = load_player_mirror(&mut tx, player_email).await?;
        let (_, mut players) = load_coach_mirror(&mut tx, coach_email).await?;

        let request = requests
            .iter_mut()
            .find(|r| r.coach_id == coach_email)
            .ok_or_else(|| {
                AppError::not_found(format!("Interest from {coach_email} on {player_email}"))
            })?;
        if request.status != InterestStatus::Pending {
            return Err(AppError::conflict(
                "Only a pending interest can be accepted",
            ));
        }
        request.status = InterestStatus::Accepted;

        let entry = players
            .iter_mut()
            .find(|p| p.player_id == player_email)
            .ok_or_else(|| {
                AppError::not_found(format!("Interest from {coach_email} on {player_email}"))
            })?;
        entry.status = InterestStatus::Accepted;

        store_player_mirror(&mut tx, player_email, &requests, now).await?;
        store_coach_mirror(&mut tx, coach_email, &players, now).await?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit interest accept: {e}")))?;
        Ok(())
    }
}
