//! File validation for climate document uploads.
//!
//! Two validators share this crate: the generic upload validator
//! ([`validate_files`]) enforcing size/MIME/extension/count policy, and the
//! climate-specific validator ([`validate_climate_files`]) which adds
//! per-type size caps and structural sniffing (magic bytes and content
//! heuristics, never a full parse).

mod climate;
mod format;
mod sniffer;
mod types;
mod validator;

pub use climate::{validate_climate_file, validate_climate_files};
pub use format::format_bytes;
pub use sniffer::{
    validate_csv_structure, validate_docx_structure, validate_pdf_structure,
    validate_txt_structure, validate_xlsx_structure,
};
pub use types::{
    ClimateValidationResult, ErrorSeverity, FileValidationResult, ValidationError,
    ValidationWarning, WarningSeverity,
};
pub use validator::validate_files;
