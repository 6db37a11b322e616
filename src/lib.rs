// ABOUTME: Main library entry point for the RosterHub matching platform
// ABOUTME: Provides registration wizards, profile storage, marketplace and directory APIs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RosterHub Contributors

#![deny(unsafe_code)]

//! # RosterHub
//!
//! An HTTP service for a sports talent platform connecting athletes and
//! coaches. Players and coaches register through multi-step wizards,
//! players publish marketplace listings when they are looking for a coach,
//! coaches express interest in players and accept listings, and both roles
//! appear in filterable directories.
//!
//! ## Architecture
//!
//! - **Wizard**: per-step field registry and draft engine for registration
//! - **Database**: `SQLite`-backed document store keyed by email
//! - **Marketplace**: mirrored interest workflow and listing snapshots
//! - **Directory**: pure filtering over profile summaries
//! - **Routes**: Axum REST surface with JWT sessions
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use rosterhub::config::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("RosterHub configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Authentication: password hashing and JWT session tokens
pub mod auth;

/// Configuration management from environment variables
pub mod config;

/// `SQLite`-backed profile, interest, and listing storage
pub mod database;

/// Pure filtering over directory summaries
pub mod directory;

/// Application error types and HTTP error responses
pub mod errors;

/// Marketplace workflows: listings and mirrored interest
pub mod marketplace;

/// Common data models: profiles, enums, interest mirrors, listings
pub mod models;

/// HTTP route handlers and server resources
pub mod routes;

/// Authenticated session snapshots
pub mod session;

/// Multi-step registration wizard engine
pub mod wizard;
