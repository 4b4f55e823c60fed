//! Multipart file extraction.
//!
//! Drains every file field from the request in arrival order, groups by
//! field name in first-seen order, and flattens into a normalized list. No
//! validation happens here; transport-level failures map to a fixed message
//! table and always render as HTTP 400.

use axum::extract::multipart::MultipartError;
use axum::extract::Multipart;
use axum::http::StatusCode;
use clima_core::models::UploadedFile;

const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Files carried by an upload request.
#[derive(Debug)]
pub enum RequestFiles {
    None,
    One(UploadedFile),
    Many(Vec<UploadedFile>),
}

impl RequestFiles {
    fn from_vec(mut files: Vec<UploadedFile>) -> Self {
        match files.len() {
            0 => Self::None,
            1 => Self::One(files.remove(0)),
            _ => Self::Many(files),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn into_vec(self) -> Vec<UploadedFile> {
        match self {
            Self::None => Vec::new(),
            Self::One(file) => vec![file],
            Self::Many(files) => files,
        }
    }
}

/// Transport-level failure while reading the multipart body.
#[derive(Debug)]
pub enum ExtractError {
    FileTooLarge(MultipartError),
    TooManyFiles { max: usize },
    Malformed(MultipartError),
}

impl ExtractError {
    /// Fixed client-facing message per failure kind.
    pub fn message(&self) -> &'static str {
        match self {
            Self::FileTooLarge(_) => "File too large",
            Self::TooManyFiles { .. } => "Too many files",
            Self::Malformed(_) => "File upload error",
        }
    }

    /// Underlying detail for the response error list.
    pub fn detail(&self) -> String {
        match self {
            Self::FileTooLarge(err) | Self::Malformed(err) => err.body_text(),
            Self::TooManyFiles { max } => {
                format!("Maximum number of files exceeded (limit: {})", max)
            }
        }
    }
}

impl From<MultipartError> for ExtractError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::FileTooLarge(err)
        } else {
            Self::Malformed(err)
        }
    }
}

/// Drain all file fields from the request. Non-file fields are consumed and
/// ignored. Fails fast once more than `max_files` file fields arrive.
pub async fn collect_files(
    multipart: &mut Multipart,
    max_files: usize,
) -> Result<RequestFiles, ExtractError> {
    // field name order of first appearance -> files for that field
    let mut field_order: Vec<String> = Vec::new();
    let mut groups: Vec<Vec<UploadedFile>> = Vec::new();
    let mut total = 0usize;

    while let Some(field) = multipart.next_field().await? {
        let Some(file_name) = field.file_name().map(str::to_string) else {
            // text field; drain and ignore
            let _ = field.bytes().await?;
            continue;
        };

        let field_name = field.name().unwrap_or("files").to_string();
        let mime_type = field
            .content_type()
            .unwrap_or(DEFAULT_MIME_TYPE)
            .to_string();
        let content = field.bytes().await?;

        total += 1;
        if total > max_files {
            return Err(ExtractError::TooManyFiles { max: max_files });
        }

        let file = UploadedFile::new(field_name.clone(), file_name, mime_type, content);
        match field_order.iter().position(|name| *name == field_name) {
            Some(idx) => groups[idx].push(file),
            None => {
                field_order.push(field_name);
                groups.push(vec![file]);
            }
        }
    }

    Ok(RequestFiles::from_vec(groups.into_iter().flatten().collect()))
}
