//! Climate-document validation path.
//!
//! Runs after the generic upload validator. Resolves the canonical file
//! type from the extension, applies the per-type size ceiling, flags files
//! that do not look like climate risk documents, and dispatches to the
//! structural sniffer for the resolved type. The extension mapping is
//! total (unknown extensions resolve to `Txt`), so every file reaches a
//! supported type and its sniffer.

use clima_core::models::{ClimateDocumentMetadata, ClimateFileType, UploadedFile};
use clima_core::ClimateValidationConfig;

use crate::format::format_bytes;
use crate::sniffer::{
    validate_csv_structure, validate_docx_structure, validate_pdf_structure,
    validate_txt_structure, validate_xlsx_structure,
};
use crate::types::{ClimateValidationResult, ValidationError, ValidationWarning};

const SUSPICIOUS_EXTENSIONS: [&str; 27] = [
    // Executables and web scripts
    "exe", "bat", "cmd", "com", "scr", "pif", "vbs", "js", "jar", "php", "asp", "aspx", "jsp",
    // Shell scripts
    "sh", "bash", "zsh", "fish", "ps1", "psm1",
    // Source code
    "py", "rb", "pl", "go", "rs", "cpp", "c", "h",
];

const MALWARE_KEYWORDS: [&str; 9] = [
    "malware",
    "virus",
    "trojan",
    "backdoor",
    "keylogger",
    "rootkit",
    "spyware",
    "adware",
    "ransomware",
];

/// True when the filename suggests the upload is not a climate document.
fn is_suspicious_climate_file(file: &UploadedFile) -> bool {
    let file_name = file.original_name.to_lowercase();
    let extension = file.extension();

    SUSPICIOUS_EXTENSIONS.contains(&extension.as_str())
        || MALWARE_KEYWORDS.iter().any(|kw| file_name.contains(kw))
}

fn extract_metadata(file: &UploadedFile) -> ClimateDocumentMetadata {
    ClimateDocumentMetadata {
        file_name: file.original_name.clone(),
        file_type: ClimateFileType::from_extension(&file.extension()),
        file_size: file.size(),
        mime_type: file.mime_type.clone(),
        upload_timestamp: chrono::Utc::now(),
    }
}

fn validate_size(
    file: &UploadedFile,
    file_type: ClimateFileType,
    config: &ClimateValidationConfig,
    errors: &mut Vec<ValidationError>,
) {
    let max_size = config.max_size_for(file_type);
    if file.size() > max_size {
        errors.push(ValidationError::new(
            "FILE_TOO_LARGE",
            format!(
                "{} file exceeds maximum size of {}",
                file_type.upper(),
                format_bytes(max_size)
            ),
            "Please compress the file or split it into smaller parts",
        ));
    }
}

fn check_suspicious_file(file: &UploadedFile, warnings: &mut Vec<ValidationWarning>) {
    if is_suspicious_climate_file(file) {
        warnings.push(ValidationWarning::new(
            "SUSPICIOUS_FILE",
            "File has characteristics that may indicate it is not a climate risk document",
            "Please verify this is a legitimate climate risk document",
        ));
    }
}

fn validate_structure(
    file: &UploadedFile,
    file_type: ClimateFileType,
    errors: &mut Vec<ValidationError>,
    warnings: &mut Vec<ValidationWarning>,
) {
    let sniff = match file_type {
        ClimateFileType::Pdf => validate_pdf_structure,
        ClimateFileType::Csv => validate_csv_structure,
        ClimateFileType::Txt => validate_txt_structure,
        ClimateFileType::Docx => validate_docx_structure,
        ClimateFileType::Xlsx => validate_xlsx_structure,
    };
    sniff(&file.content, errors, warnings);
}

/// Validate a single file as a climate risk document.
pub fn validate_climate_file(
    file: &UploadedFile,
    config: &ClimateValidationConfig,
) -> ClimateValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let metadata = extract_metadata(file);
    let file_type = metadata.file_type;

    validate_size(file, file_type, config, &mut errors);
    check_suspicious_file(file, &mut warnings);
    validate_structure(file, file_type, &mut errors, &mut warnings);

    tracing::debug!(
        file_name = %file.original_name,
        file_type = file_type.as_str(),
        error_count = errors.len(),
        warning_count = warnings.len(),
        "Climate document validated"
    );

    ClimateValidationResult {
        is_valid: errors.is_empty(),
        errors,
        warnings,
        metadata,
    }
}

/// Validate every file in order, preserving input order in the results.
pub fn validate_climate_files(
    files: &[UploadedFile],
    config: &ClimateValidationConfig,
) -> Vec<ClimateValidationResult> {
    files
        .iter()
        .map(|file| validate_climate_file(file, config))
        .collect()
}
