// ABOUTME: Authentication: bcrypt password hashing and JWT session tokens
// ABOUTME: Login resolves the role from whichever collection holds the email
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RosterHub Contributors

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tokio::task;
use tracing::info;

use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::models::Role;

/// Session token lifetime in hours
const TOKEN_LIFETIME_HOURS: i64 = 24;

/// JWT claims carried by a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the account email
    pub sub: String,
    /// Account role
    pub role: Role,
    /// Issued-at, seconds since epoch
    pub iat: i64,
    /// Expiry, seconds since epoch
    pub exp: i64,
}

/// Successful login payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Signed session token
    pub token: String,
    /// Account email
    pub email: String,
    /// Account role
    pub role: Role,
}

/// Password hashing and session token management
#[derive(Clone)]
pub struct AuthService {
    database: Database,
    jwt_secret: String,
}

impl AuthService {
    /// Create the service over the shared database
    #[must_use]
    pub const fn new(database: Database, jwt_secret: String) -> Self {
        Self {
            database,
            jwt_secret,
        }
    }

    /// Hash a password with bcrypt off the async runtime
    ///
    /// # Errors
    ///
    /// Returns an error if hashing fails or the blocking task is
    /// cancelled.
    pub async fn hash_password(&self, password: String) -> AppResult<String> {
        task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
    }

    async fn verify_password(&self, password: String, hash: String) -> AppResult<bool> {
        task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| AppError::internal(format!("Password check task failed: {e}")))?
            .map_err(|e| AppError::internal(format!("Password check failed: {e}")))
    }

    /// Sign a session token for an account
    ///
    /// # Errors
    ///
    /// Returns an error if token encoding fails.
    pub fn generate_token(&self, email: &str, role: Role) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: email.to_owned(),
            role,
            iat: now.timestamp(),
            exp: (now + Duration::hours(TOKEN_LIFETIME_HOURS)).timestamp(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| AppError::internal(format!("Failed to sign session token: {e}")))
    }

    /// Validate a session token and return its claims
    ///
    /// # Errors
    ///
    /// Returns an auth-invalid error for expired or malformed tokens.
    pub fn validate_token(&self, token: &str) -> AppResult<Claims> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| AppError::auth_invalid(format!("Invalid session token: {e}")))
    }

    /// Verify credentials and issue a session token
    ///
    /// The role is resolved from whichever collection holds the email;
    /// players are checked first.
    ///
    /// # Errors
    ///
    /// Returns an auth-invalid error for unknown emails or wrong
    /// passwords, or a database error.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginResponse> {
        let email = email.trim().to_lowercase();

        let (role, hash) = if let Some(hash) = self.database.get_player_password_hash(&email).await?
        {
            (Role::Player, hash)
        } else if let Some(hash) = self.database.get_coach_password_hash(&email).await? {
            (Role::Coach, hash)
        } else {
            return Err(AppError::auth_invalid("Invalid email or password"));
        };

        if !self.verify_password(password.to_owned(), hash).await? {
            return Err(AppError::auth_invalid("Invalid email or password"));
        }

        let token = self.generate_token(&email, role)?;
        info!(email = %email, role = role.as_str(), "login succeeded");
        Ok(LoginResponse { token, email, role })
    }
}
