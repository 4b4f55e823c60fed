//! Upload request/response models.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A file received in a multipart upload request.
///
/// Immutable once received; owned exclusively by the request-handling scope
/// and discarded when the response is sent. Never persisted.
#[derive(Clone, Debug)]
pub struct UploadedFile {
    /// Multipart field the file arrived under.
    pub field_name: String,
    pub original_name: String,
    pub mime_type: String,
    pub content: Bytes,
}

impl UploadedFile {
    pub fn new(
        field_name: impl Into<String>,
        original_name: impl Into<String>,
        mime_type: impl Into<String>,
        content: impl Into<Bytes>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            original_name: original_name.into(),
            mime_type: mime_type.into(),
            content: content.into(),
        }
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }

    /// Extension after the last dot, lowercased; empty when absent.
    pub fn extension(&self) -> String {
        match self.original_name.rfind('.') {
            Some(idx) => self.original_name[idx + 1..].to_lowercase(),
            None => String::new(),
        }
    }
}

/// Terminal (and forward-compatible) processing states for one file.
///
/// `Pending` and `Processing` exist for forward-compatibility with
/// asynchronous processing and are never observed today.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingStatus {
    Pending,
    Processing,
    Completed,
    Failed,
    Skipped,
}

/// Per-file upload result, one per uploaded file per request.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,
    pub file_name: String,
    pub file_size: usize,
    pub processing_status: ProcessingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

/// Aggregate response for a batch upload.
///
/// Invariants: `successful_files + failed_files == total_files`;
/// `processed_files + skipped_files <= successful_files`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateUploadResponse {
    pub success: bool,
    pub message: String,
    pub results: Vec<UploadResponse>,
    pub total_files: usize,
    pub successful_files: usize,
    pub failed_files: usize,
    pub processed_files: usize,
    pub skipped_files: usize,
}

/// Response contract of the external processing service.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessFileResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_time: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_lowercases_after_last_dot() {
        let file = UploadedFile::new("files", "Report.V2.PDF", "application/pdf", "x");
        assert_eq!(file.extension(), "pdf");
    }

    #[test]
    fn test_extension_empty_when_absent() {
        let file = UploadedFile::new("files", "README", "text/plain", "x");
        assert_eq!(file.extension(), "");
    }

    #[test]
    fn test_processing_status_serializes_lowercase() {
        let json = serde_json::to_string(&ProcessingStatus::Skipped).unwrap();
        assert_eq!(json, "\"skipped\"");
    }

    #[test]
    fn test_upload_response_camel_case_contract() {
        let response = UploadResponse {
            success: true,
            message: "ok".to_string(),
            file_id: Some("abc-123".to_string()),
            file_name: "a.pdf".to_string(),
            file_size: 10,
            processing_status: ProcessingStatus::Completed,
            errors: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["fileId"], "abc-123");
        assert_eq!(json["processingStatus"], "completed");
        assert!(json.get("errors").is_none());
    }
}
