//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p clima-api`.

#![allow(dead_code)]

use axum::routing::post;
use axum::{Json, Router};
use axum_test::TestServer;
use clima_api::constants;
use clima_api::setup;
use clima_core::{
    BaseConfig, ClimateValidationConfig, Config, FileUploadConfig, GatewayConfig,
};
use serde_json::json;
use std::time::Duration;

/// API path prefix for tests (e.g. `/api`).
pub fn api_path(path: &str) -> String {
    format!("{}{}", constants::API_PREFIX, path)
}

/// Baseline configuration: 1 MB per file, 3 files, no processing service.
pub fn test_config() -> Config {
    Config(Box::new(GatewayConfig {
        base: BaseConfig {
            server_port: 0,
            environment: "test".to_string(),
            cors_origins: vec!["*".to_string()],
            app_name: "clima-risk-gateway".to_string(),
            app_version: "0.1.0".to_string(),
        },
        file_upload: FileUploadConfig {
            max_file_size_bytes: 1024 * 1024,
            max_files: 3,
            allowed_mime_types: vec![
                "application/pdf".to_string(),
                "text/csv".to_string(),
                "text/plain".to_string(),
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
                    .to_string(),
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet".to_string(),
            ],
            allowed_extensions: vec![
                "pdf".to_string(),
                "csv".to_string(),
                "txt".to_string(),
                "docx".to_string(),
                "xlsx".to_string(),
            ],
            upload_timeout_ms: 30_000,
            python_service_url: None,
        },
        climate: ClimateValidationConfig::default(),
    }))
}

/// Build a test server over the real state and router.
pub fn setup_test_server(config: Config) -> TestServer {
    let state = setup::build_state(config).expect("Failed to build state");
    let router =
        setup::routes::setup_routes(&state.config, state.clone()).expect("Failed to build router");
    TestServer::new(router).expect("Failed to start test server")
}

/// How the stub processing service answers `POST /process-file`.
#[derive(Clone, Copy)]
pub enum StubBehavior {
    /// 200 with `success: true`.
    Success,
    /// 500 with an empty body.
    InternalError,
    /// Sleeps before answering successfully.
    SlowMs(u64),
}

/// Spawn a stub external processing service on an ephemeral port and
/// return its base URL.
pub async fn spawn_stub_service(behavior: StubBehavior) -> String {
    let app = Router::new().route(
        "/process-file",
        post(move || async move {
            match behavior {
                StubBehavior::Success => (
                    axum::http::StatusCode::OK,
                    Json(json!({ "success": true, "message": "Document processed" })),
                ),
                StubBehavior::InternalError => (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "message": "processing crashed" })),
                ),
                StubBehavior::SlowMs(ms) => {
                    tokio::time::sleep(Duration::from_millis(ms)).await;
                    (
                        axum::http::StatusCode::OK,
                        Json(json!({ "success": true, "message": "Document processed" })),
                    )
                }
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub listener");
    let addr = listener.local_addr().expect("Failed to read stub address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    format!("http://{}", addr)
}

/// Minimal well-formed PDF content.
pub fn pdf_bytes(size: usize) -> Vec<u8> {
    let mut content = b"%PDF-1.4\n1 0 obj\n<< /Type /Catalog >>\nendobj\n".to_vec();
    content.resize(content.len().max(size), b' ');
    content
}
