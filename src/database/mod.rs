// ABOUTME: Core database management with migration system for SQLite
// ABOUTME: Owns the connection pool shared by profile, interest, and listing ops
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RosterHub Contributors

/// Coach profile storage and approval
pub mod coaches;
/// Mirrored interest pairs across player and coach documents
pub mod interests;
/// Marketplace listing snapshots
pub mod listings;
/// Player profile storage and verification state
pub mod players;

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};

use crate::errors::{AppError, AppResult};

/// Database connection pool
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection (internal implementation)
    async fn new_impl(database_url: &str) -> AppResult<Self> {
        // Ensure SQLite creates the database file if it doesn't exist.
        // In-memory databases exist per connection, so they get a single one.
        let in_memory = database_url.contains(":memory:");
        let connection_options = if database_url.starts_with("sqlite:") && !in_memory {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_owned()
        };

        let max_connections = if in_memory { 1 } else { 5 };
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(&connection_options)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to database: {e}")))?;

        let db = Self { pool };

        db.migrate_impl()
            .await
            .map_err(|e| AppError::database(format!("Database migration failed: {e}")))?;

        Ok(db)
    }

    /// Create a new database connection (public API)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Database URL is invalid or malformed
    /// - Database connection fails
    /// - Migration process fails
    pub async fn new(database_url: &str) -> AppResult<Self> {
        Self::new_impl(database_url).await
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    async fn migrate_impl(&self) -> AppResult<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Migration failed: {e}")))?;
        Ok(())
    }

    /// Run all database migrations (public API)
    ///
    /// # Errors
    ///
    /// Returns an error if any migration fails.
    pub async fn migrate(&self) -> AppResult<()> {
        self.migrate_impl().await
    }
}
