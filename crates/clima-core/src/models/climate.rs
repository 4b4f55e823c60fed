//! Climate document types and metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The five supported climate document formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClimateFileType {
    Pdf,
    Csv,
    Txt,
    Docx,
    Xlsx,
}

impl ClimateFileType {
    /// Map a file extension (without dot, any case) to a canonical type.
    /// Unrecognized extensions default to `Txt`.
    pub fn from_extension(extension: &str) -> Self {
        match extension.to_lowercase().as_str() {
            "pdf" => Self::Pdf,
            "csv" => Self::Csv,
            "docx" => Self::Docx,
            "xlsx" => Self::Xlsx,
            _ => Self::Txt,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Csv => "csv",
            Self::Txt => "txt",
            Self::Docx => "docx",
            Self::Xlsx => "xlsx",
        }
    }

    /// Uppercase name for user-facing messages ("PDF file exceeds ...").
    pub fn upper(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Csv => "CSV",
            Self::Txt => "TXT",
            Self::Docx => "DOCX",
            Self::Xlsx => "XLSX",
        }
    }
}

/// Basic metadata derived from an uploaded climate document.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClimateDocumentMetadata {
    pub file_name: String,
    pub file_type: ClimateFileType,
    pub file_size: usize,
    pub mime_type: String,
    pub upload_timestamp: DateTime<Utc>,
}
