//! Climate document upload endpoint.
//!
//! Pipeline: extract multipart files, run the generic upload validator,
//! then the climate-specific validator, then forward (or skip) file by
//! file. Validation failures short-circuit with 400 before anything is
//! forwarded; forwarding failures degrade to a 207 partial response.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use clima_core::models::UploadedFile;
use clima_validation::{validate_climate_files, validate_files};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

use crate::error::HttpAppError;
use crate::extract::{self, ExtractError};
use crate::services;
use crate::state::AppState;

fn file_summaries(files: &[UploadedFile]) -> Vec<serde_json::Value> {
    files
        .iter()
        .map(|f| json!({ "name": f.original_name, "size": f.size(), "type": f.mime_type }))
        .collect()
}

fn transport_error_response(err: ExtractError) -> Response {
    warn!(message = err.message(), detail = %err.detail(), "Multipart transport error");
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "success": false,
            "message": err.message(),
            "errors": [err.detail()],
        })),
    )
        .into_response()
}

pub async fn upload_files(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Response, HttpAppError> {
    let upload_config = state.config.file_upload();

    let files = match extract::collect_files(&mut multipart, upload_config.max_files).await {
        Ok(files) => files,
        Err(err) => return Ok(transport_error_response(err)),
    };

    if files.is_none() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "message": "No file provided",
                "errors": ["File is required"],
            })),
        )
            .into_response());
    }

    let files = files.into_vec();

    let generic = validate_files(&files, upload_config);
    if !generic.is_valid {
        warn!(
            errors = ?generic.errors,
            warnings = ?generic.warnings,
            files = ?file_summaries(&files),
            "File validation failed"
        );
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "message": "File validation failed",
                "errors": generic.errors,
                "warnings": generic.warnings,
            })),
        )
            .into_response());
    }
    if !generic.warnings.is_empty() {
        info!(warnings = ?generic.warnings, files = ?file_summaries(&files), "File validation warnings");
    }

    let climate_results = validate_climate_files(&files, state.config.climate());
    if climate_results.iter().any(|r| !r.is_valid) {
        let errors: Vec<String> = climate_results
            .iter()
            .flat_map(|r| r.errors.iter().map(|e| e.message.clone()))
            .collect();
        let warnings: Vec<String> = climate_results
            .iter()
            .flat_map(|r| r.warnings.iter().map(|w| w.message.clone()))
            .collect();
        warn!(
            errors = ?errors,
            warnings = ?warnings,
            files = ?file_summaries(&files),
            "Climate document validation failed"
        );
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "message": "Climate document validation failed",
                "errors": errors,
                "warnings": warnings,
                "validationResults": climate_results,
            })),
        )
            .into_response());
    }
    if climate_results.iter().any(|r| !r.warnings.is_empty()) {
        let warnings: Vec<&str> = climate_results
            .iter()
            .flat_map(|r| r.warnings.iter().map(|w| w.message.as_str()))
            .collect();
        info!(warnings = ?warnings, files = ?file_summaries(&files), "Climate document validation warnings");
    }

    let aggregate = services::upload::process_files(&state, &files).await;
    let status = if aggregate.success {
        StatusCode::OK
    } else {
        StatusCode::MULTI_STATUS
    };

    Ok((status, Json(aggregate)).into_response())
}
