//! Application setup and initialization
//!
//! All application initialization logic lives here instead of main.rs so
//! integration tests can build the same state and router.

pub mod routes;
pub mod server;

use crate::data;
use crate::state::{AppState, QuestionCatalog};
use anyhow::{Context, Result};
use clima_core::Config;
use clima_services::{ForwardingClient, ProcessorClient};
use std::sync::Arc;
use std::time::Duration;

/// Build the shared application state from configuration.
pub fn build_state(config: Config) -> Result<Arc<AppState>> {
    let forwarding: Option<Arc<dyn ProcessorClient>> = match config.python_service_url() {
        Some(url) => {
            let user_agent = format!("{}/{}", config.app_name(), config.app_version());
            let client = ForwardingClient::new(
                url,
                Duration::from_millis(config.upload_timeout_ms()),
                &user_agent,
            )
            .context("Failed to build forwarding client")?;
            tracing::info!(python_service_url = url, "Processing service configured");
            Some(Arc::new(client))
        }
        None => {
            tracing::warn!("PYTHON_SERVICE_URL not set; uploads will be accepted in skip mode");
            None
        }
    };

    let questions = QuestionCatalog::new(data::seed_questions(), data::seed_answers());

    Ok(Arc::new(AppState {
        config,
        forwarding,
        questions,
    }))
}

/// Initialize the entire application
pub fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config.validate().context("Configuration validation failed")?;

    crate::telemetry::init_telemetry();
    tracing::info!("Configuration loaded and validated successfully");

    let state = build_state(config)?;
    let router = routes::setup_routes(&state.config, state.clone())?;

    Ok((state, router))
}
