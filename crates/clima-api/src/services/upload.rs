//! Upload orchestration.
//!
//! Files are processed sequentially in extraction order. Each file moves
//! from `received` to exactly one terminal state: `skipped` when no
//! processing service is configured, `completed` on a successful forward,
//! `failed` on any forwarding error. A failed file never aborts its
//! siblings; failures surface in the aggregate response instead.

use std::time::Instant;

use clima_core::models::{AggregateUploadResponse, ProcessingStatus, UploadResponse, UploadedFile};
use tracing::{error, info};

use crate::state::AppState;

/// Unique file identifier: base36 millisecond timestamp plus 8 random bytes
/// in hex. The random suffix comes from a CSPRNG, so collisions within a
/// process run are negligible.
pub fn generate_file_id() -> String {
    let timestamp = to_base36(chrono::Utc::now().timestamp_millis() as u64);
    let random: [u8; 8] = rand::random();
    format!("{}-{}", timestamp, hex::encode(random))
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

async fn process_file(state: &AppState, file: &UploadedFile) -> UploadResponse {
    let file_id = generate_file_id();
    let start = Instant::now();

    info!(
        file_id,
        file_name = %file.original_name,
        file_size = file.size(),
        mime_type = %file.mime_type,
        "Processing file upload"
    );

    let Some(forwarding) = &state.forwarding else {
        info!(file_id, file_name = %file.original_name, "Python service not configured, simulating successful processing");
        return UploadResponse {
            success: true,
            message: "File uploaded successfully (Python service not configured - processing skipped)"
                .to_string(),
            file_id: Some(file_id),
            file_name: file.original_name.clone(),
            file_size: file.size(),
            processing_status: ProcessingStatus::Skipped,
            errors: None,
        };
    };

    match forwarding.process_file(file, &file_id).await {
        Ok(response) => {
            info!(
                file_id,
                file_name = %file.original_name,
                processing_ms = start.elapsed().as_millis() as u64,
                service_message = %response.message,
                "File processed successfully"
            );
            UploadResponse {
                success: true,
                message: "File uploaded and processed successfully".to_string(),
                file_id: Some(file_id),
                file_name: file.original_name.clone(),
                file_size: file.size(),
                processing_status: ProcessingStatus::Completed,
                errors: None,
            }
        }
        Err(err) => {
            error!(
                file_id,
                file_name = %file.original_name,
                processing_ms = start.elapsed().as_millis() as u64,
                error = %err,
                "File processing failed"
            );
            UploadResponse {
                success: false,
                message: format!("Failed to process file: {}", file.original_name),
                file_id: Some(file_id),
                file_name: file.original_name.clone(),
                file_size: file.size(),
                processing_status: ProcessingStatus::Failed,
                errors: Some(vec![err.to_string()]),
            }
        }
    }
}

/// Process every file in order and aggregate the results.
pub async fn process_files(state: &AppState, files: &[UploadedFile]) -> AggregateUploadResponse {
    let mut results = Vec::with_capacity(files.len());
    for file in files {
        results.push(process_file(state, file).await);
    }
    aggregate(results)
}

fn aggregate(results: Vec<UploadResponse>) -> AggregateUploadResponse {
    let total_files = results.len();
    let successful_files = results.iter().filter(|r| r.success).count();
    let failed_files = total_files - successful_files;
    let processed_files = results
        .iter()
        .filter(|r| r.success && r.processing_status == ProcessingStatus::Completed)
        .count();
    let skipped_files = results
        .iter()
        .filter(|r| r.success && r.processing_status == ProcessingStatus::Skipped)
        .count();

    let success = failed_files == 0;
    let message = if success {
        success_message(processed_files, skipped_files)
    } else {
        "Some files failed to upload".to_string()
    };

    AggregateUploadResponse {
        success,
        message,
        results,
        total_files,
        successful_files,
        failed_files,
        processed_files,
        skipped_files,
    }
}

fn success_message(processed_files: usize, skipped_files: usize) -> String {
    if processed_files > 0 && skipped_files > 0 {
        return format!(
            "All files uploaded successfully ({} processed, {} skipped - Python service not configured)",
            processed_files, skipped_files
        );
    }

    if processed_files > 0 {
        return "All files uploaded and processed successfully".to_string();
    }

    "All files uploaded successfully (Python service not configured - processing skipped)"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(success: bool, status: ProcessingStatus) -> UploadResponse {
        UploadResponse {
            success,
            message: String::new(),
            file_id: Some("id".to_string()),
            file_name: "f.pdf".to_string(),
            file_size: 1,
            processing_status: status,
            errors: None,
        }
    }

    #[test]
    fn test_file_id_shape() {
        let id = generate_file_id();
        let (timestamp, random) = id.split_once('-').expect("dash separator");
        assert!(!timestamp.is_empty());
        assert!(timestamp.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(random.len(), 16);
        assert!(random.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_file_ids_unique() {
        let a = generate_file_id();
        let b = generate_file_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_base36_digits() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(46_655), "zzz");
    }

    #[test]
    fn test_aggregate_all_processed() {
        let agg = aggregate(vec![
            result(true, ProcessingStatus::Completed),
            result(true, ProcessingStatus::Completed),
        ]);
        assert!(agg.success);
        assert_eq!(agg.message, "All files uploaded and processed successfully");
        assert_eq!(agg.processed_files, 2);
        assert_eq!(agg.skipped_files, 0);
    }

    #[test]
    fn test_aggregate_all_skipped() {
        let agg = aggregate(vec![result(true, ProcessingStatus::Skipped)]);
        assert!(agg.success);
        assert_eq!(
            agg.message,
            "All files uploaded successfully (Python service not configured - processing skipped)"
        );
    }

    #[test]
    fn test_aggregate_mixed_processed_and_skipped() {
        let agg = aggregate(vec![
            result(true, ProcessingStatus::Completed),
            result(true, ProcessingStatus::Skipped),
            result(true, ProcessingStatus::Skipped),
        ]);
        assert!(agg.success);
        assert_eq!(
            agg.message,
            "All files uploaded successfully (1 processed, 2 skipped - Python service not configured)"
        );
    }

    #[test]
    fn test_aggregate_partial_failure() {
        let agg = aggregate(vec![
            result(true, ProcessingStatus::Completed),
            result(false, ProcessingStatus::Failed),
        ]);
        assert!(!agg.success);
        assert_eq!(agg.message, "Some files failed to upload");
        assert_eq!(agg.total_files, 2);
        assert_eq!(agg.successful_files, 1);
        assert_eq!(agg.failed_files, 1);
        // counting invariants
        assert_eq!(agg.successful_files + agg.failed_files, agg.total_files);
        assert!(agg.processed_files + agg.skipped_files <= agg.successful_files);
    }
}
