//! HTTP server for the public-record search API.
//!
//! ## Environment Variables
//!
//! - `PORT` (optional, default 3000): listen port
//! - One API key per provider (all optional; a missing key puts that
//!   provider into demo mode): `UNICOURT_API_KEY`, `PROPMIX_API_KEY`,
//!   `BUSINESS_API_KEY`, `DATA_GOV_API_KEY`, `CHECKR_API_KEY`,
//!   `VINDATA_API_KEY`

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use public_records::api::{create_router, AppState};
use public_records::client::PublicRecordClient;
use public_records::config::ClientConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter("public_records=info,tower_http=debug")
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    let client = Arc::new(PublicRecordClient::new(config)?);
    for (category, configured) in client.api_status() {
        if !configured {
            info!(%category, "no credentials configured, provider runs in demo mode");
        }
    }

    let app = create_router(AppState { client });

    // Determine port
    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()
        .unwrap_or(3000);

    let addr = format!("0.0.0.0:{}", port);
    info!("Starting server on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
