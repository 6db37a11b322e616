// ABOUTME: RosterHub server binary: config, logging, and HTTP serving
// ABOUTME: CLI flags override the environment-derived configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RosterHub Contributors

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rosterhub::config::ServerConfig;
use rosterhub::database::Database;
use rosterhub::routes::{app_router, ServerResources};

/// RosterHub matching platform server
#[derive(Debug, Parser)]
#[command(name = "rosterhub-server", about = "RosterHub matching platform server")]
struct Args {
    /// HTTP port to bind (overrides HTTP_PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Database URL (overrides DATABASE_URL)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .init();

    let args = Args::parse();
    let mut config = ServerConfig::from_env()?;
    if let Some(port) = args.port {
        config.http_port = port;
    }
    if let Some(url) = args.database_url {
        config.database_url = url;
    }

    let database = Database::new(&config.database_url)
        .await
        .map_err(|e| anyhow::anyhow!("database init failed: {e}"))?;
    info!(database_url = %config.database_url, "database ready");

    let resources = Arc::new(ServerResources::new(
        database,
        &config.jwt_secret,
        &config.admin_token,
    ));
    let router = app_router(resources);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "rosterhub server listening");
    axum::serve(listener, router).await?;

    Ok(())
}
