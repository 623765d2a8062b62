//! # Scribe
//!
//! Terminal client for the posts backend: login, list, create, edit and
//! delete short text posts.

use anyhow::Result;

mod app;
mod commands;
mod config;
mod state;
mod telemetry;
mod view;

use app::App;
use config::AppConfig;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&telemetry::TelemetryConfig::from_env());

    let config = AppConfig::from_env();
    tracing::info!(api = %config.api_url, "starting scribe");

    let state = AppState::new(&config).await;
    let mut app = App::new(state);
    app.run().await
}
