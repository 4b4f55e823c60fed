//! HTTP client for the external document processing service.
//!
//! Files are forwarded one at a time as `multipart/form-data` to the
//! service's `POST /process-file` endpoint. The whole exchange, upload
//! included, runs under a single deadline; a missed deadline surfaces as
//! `ForwardError::Timeout` and fails only the file being forwarded.

use std::time::Duration;

use async_trait::async_trait;
use clima_core::models::{ProcessFileResponse, UploadedFile};
use reqwest::multipart::{Form, Part};
use reqwest::{Body, StatusCode};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum ForwardError {
    #[error("File processing timeout")]
    Timeout,

    #[error("Python service responded with status: {status}")]
    UnexpectedStatus { status: StatusCode },

    /// The service answered 2xx but reported `success: false`.
    #[error("{message}")]
    Rejected { message: String },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Seam for the upload orchestrator; lets tests substitute the real client.
#[async_trait]
pub trait ProcessorClient: Send + Sync {
    async fn process_file(
        &self,
        file: &UploadedFile,
        file_id: &str,
    ) -> Result<ProcessFileResponse, ForwardError>;
}

pub struct ForwardingClient {
    http_client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl ForwardingClient {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, ForwardError> {
        let http_client = reqwest::Client::builder().user_agent(user_agent).build()?;

        Ok(Self {
            http_client,
            base_url: base_url.into(),
            timeout,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/process-file", self.base_url.trim_end_matches('/'))
    }

    fn build_form(
        &self,
        file: &UploadedFile,
        file_id: &str,
    ) -> Result<Form, ForwardError> {
        let file_part = Part::stream_with_length(
            Body::from(file.content.clone()),
            file.size() as u64,
        )
        .file_name(file.original_name.clone())
        .mime_str(&file.mime_type)?;

        let metadata = build_metadata(file);

        Ok(Form::new()
            .part("file", file_part)
            .text("fileId", file_id.to_string())
            .text("metadata", metadata.to_string()))
    }

    async fn send(
        &self,
        file: &UploadedFile,
        file_id: &str,
    ) -> Result<ProcessFileResponse, ForwardError> {
        let form = self.build_form(file, file_id)?;

        let response = self
            .http_client
            .post(self.endpoint())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ForwardError::UnexpectedStatus { status });
        }

        let result: ProcessFileResponse = response.json().await?;
        if !result.success {
            let message = if result.message.is_empty() {
                "Python service processing failed".to_string()
            } else {
                result.message
            };
            return Err(ForwardError::Rejected { message });
        }

        Ok(result)
    }
}

#[async_trait]
impl ProcessorClient for ForwardingClient {
    async fn process_file(
        &self,
        file: &UploadedFile,
        file_id: &str,
    ) -> Result<ProcessFileResponse, ForwardError> {
        debug!(
            file_id,
            file_name = %file.original_name,
            file_size = file.size(),
            "forwarding file to processing service"
        );

        match tokio::time::timeout(self.timeout, self.send(file, file_id)).await {
            Ok(result) => result,
            Err(_) => Err(ForwardError::Timeout),
        }
    }
}

fn build_metadata(file: &UploadedFile) -> serde_json::Value {
    serde_json::json!({
        "originalName": file.original_name,
        "mimeType": file.mime_type,
        "size": file.size(),
        "uploadTimestamp": chrono::Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> ForwardingClient {
        ForwardingClient::new(base_url, Duration::from_secs(30), "clima-gateway/0.1.0")
            .unwrap()
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        assert_eq!(
            client("http://localhost:8000").endpoint(),
            "http://localhost:8000/process-file"
        );
        assert_eq!(
            client("http://localhost:8000/").endpoint(),
            "http://localhost:8000/process-file"
        );
    }

    #[test]
    fn test_metadata_carries_file_attributes() {
        let file = UploadedFile::new("files", "report.pdf", "application/pdf", "%PDF-1.7");
        let metadata = build_metadata(&file);

        assert_eq!(metadata["originalName"], "report.pdf");
        assert_eq!(metadata["mimeType"], "application/pdf");
        assert_eq!(metadata["size"], 8);
        assert!(metadata["uploadTimestamp"].is_string());
    }

    #[test]
    fn test_timeout_error_message() {
        assert_eq!(ForwardError::Timeout.to_string(), "File processing timeout");
    }

    #[test]
    fn test_unexpected_status_error_message() {
        let err = ForwardError::UnexpectedStatus {
            status: StatusCode::BAD_GATEWAY,
        };
        assert_eq!(
            err.to_string(),
            "Python service responded with status: 502 Bad Gateway"
        );
    }

    #[test]
    fn test_rejected_error_uses_service_message() {
        let err = ForwardError::Rejected {
            message: "unparseable document".to_string(),
        };
        assert_eq!(err.to_string(), "unparseable document");
    }
}
