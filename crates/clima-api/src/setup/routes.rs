//! Route configuration and setup.

use crate::constants;
use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use clima_core::Config;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router, anyhow::Error> {
    let cors = setup_cors(config)?;

    let body_limit = request_body_limit(config);

    let api = Router::new()
        .route("/upload", post(handlers::upload::upload_files))
        .route(
            "/upload/status/{file_id}",
            get(handlers::upload_status::get_upload_status),
        )
        .route(
            "/questions",
            get(handlers::questions::get_questions).post(handlers::questions::submit_question),
        )
        .route(
            "/questions/{id}",
            get(handlers::questions::get_question_by_id),
        )
        .route("/health", get(handlers::health::health_check));

    let app = Router::new()
        .nest(constants::API_PREFIX, api)
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .with_state(state);

    Ok(app)
}

/// Body budget: whole batch of files plus multipart framing overhead.
/// Kept above the per-file limit so oversized files reach the validator
/// and fail with a descriptive message instead of a bare 413.
fn request_body_limit(config: &Config) -> usize {
    config
        .max_file_size_bytes()
        .saturating_mul(config.max_files())
        .saturating_add(constants::MULTIPART_OVERHEAD_BYTES)
}

fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let cors = if config.cors_origins().contains(&"*".to_string()) {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    } else {
        let origins: Result<Vec<HeaderValue>, _> =
            config.cors_origins().iter().map(|o| o.parse()).collect();
        CorsLayer::new()
            .allow_origin(origins?)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    };

    Ok(cors)
}
