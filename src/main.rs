//! Credit Service - Main Application Entry Point
//!
//! This is a REST API server for managing credit records. It exposes CRUD
//! endpoints for credits plus domain operations: payments, consumption
//! charges, generic balance transactions, and overdue-debt lookup.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries)
//! - **Service Seam**: handlers call `CreditService` as a trait object
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool
//! 3. Run database migrations
//! 4. Wire the repository and service behind the trait
//! 5. Build HTTP router and start the server on the configured port

mod app;
mod config;
mod db;
mod error;
mod handlers;
mod models;
mod repo;
mod services;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::{
    app::AppState, repo::credit_repo::CreditRepo, services::credit_service::PgCreditService,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Create database pool
    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!("Database pool created");

    // Run migrations
    db::run_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    // Wire repository -> service -> handlers
    let repo = CreditRepo { pool };
    let state = AppState {
        service: Arc::new(PgCreditService::new(repo)),
    };
    let app = app::create_router(state);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Start serving HTTP requests
    // This blocks forever, handling requests concurrently with tokio
    axum::serve(listener, app).await?;

    Ok(())
}
