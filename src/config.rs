// ABOUTME: Server configuration loaded from environment variables
// ABOUTME: Covers HTTP port, database URL, JWT secret, and the admin token
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RosterHub Contributors

use std::env;

use anyhow::{Context, Result};

/// Runtime configuration for the server binary
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port the HTTP server binds to
    pub http_port: u16,
    /// Database connection string, e.g. `sqlite:data/rosterhub.db`
    pub database_url: String,
    /// Secret used to sign session JWTs
    pub jwt_secret: String,
    /// Bearer token required for admin routes
    pub admin_token: String,
}

impl ServerConfig {
    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if `HTTP_PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self> {
        let http_port = match env::var("HTTP_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("Invalid HTTP_PORT value: {raw}"))?,
            Err(_) => 8080,
        };
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:data/rosterhub.db".into());
        let jwt_secret =
            env::var("JWT_SECRET").unwrap_or_else(|_| "rosterhub-development-secret".into());
        let admin_token =
            env::var("ADMIN_TOKEN").unwrap_or_else(|_| "rosterhub-admin-token".into());

        Ok(Self {
            http_port,
            database_url,
            jwt_secret,
            admin_token,
        })
    }
}
