//! Generic upload validator.
//!
//! Ordered, non-short-circuiting check list: every check runs for every
//! file and all violations are collected before the pass/fail decision.
//! Blocking errors are size, MIME type, extension, and file count;
//! suspicious names and empty files only warn.

use std::sync::LazyLock;

use clima_core::models::UploadedFile;
use clima_core::FileUploadConfig;
use regex::Regex;

use crate::format::format_bytes;
use crate::types::FileValidationResult;

static SUSPICIOUS_NAME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // Executable / script / shell extensions
        r"(?i)\.(exe|bat|cmd|com|scr|pif|vbs|js|jar|php|asp|aspx|jsp)$",
        r"(?i)\.(sh|bash|zsh|fish|ps1|psm1)$",
        // Database and log-like extensions
        r"(?i)\.(sql|db|sqlite|sqlite3)$",
        r"(?i)\.(log|tmp|temp|bak|backup)$",
        // Hidden files
        r"^\.",
        // Invalid filesystem characters
        r#"[<>:"|?*]"#,
        // Two or more consecutive dots
        r"\.{2,}",
        // Filename consisting only of dots
        r"^\.+$",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("suspicious filename pattern must compile"))
    .collect()
});

/// True when the filename matches any suspicious pattern.
fn is_suspicious_file_name(filename: &str) -> bool {
    SUSPICIOUS_NAME_PATTERNS
        .iter()
        .any(|pattern| pattern.is_match(filename))
}

fn validate_individual_file(
    file: &UploadedFile,
    index: usize,
    config: &FileUploadConfig,
    errors: &mut Vec<String>,
    warnings: &mut Vec<String>,
) {
    let label = format!("File {} ({})", index + 1, file.original_name);

    if file.size() > config.max_file_size_bytes {
        errors.push(format!(
            "{} exceeds maximum size of {}",
            label,
            format_bytes(config.max_file_size_bytes)
        ));
    }

    if !config.allowed_mime_types.contains(&file.mime_type) {
        errors.push(format!(
            "{} has unsupported MIME type: {}",
            label, file.mime_type
        ));
    }

    let extension = file.extension();
    if !config.allowed_extensions.contains(&extension) {
        errors.push(format!(
            "{} has unsupported extension: {}",
            label, extension
        ));
    }

    if is_suspicious_file_name(&file.original_name) {
        warnings.push(format!("{} has a suspicious name", label));
    }

    if file.size() == 0 {
        warnings.push(format!("{} is empty", label));
    }
}

/// Validate uploaded files against the upload configuration.
///
/// Returns all errors and warnings; `is_valid` is true iff no blocking
/// error was found across per-file checks and the count check.
pub fn validate_files(files: &[UploadedFile], config: &FileUploadConfig) -> FileValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if files.is_empty() {
        errors.push("No valid files provided".to_string());
        return FileValidationResult {
            is_valid: false,
            errors,
            warnings,
        };
    }

    if files.len() > config.max_files {
        errors.push(format!(
            "Too many files. Maximum allowed: {}, received: {}",
            config.max_files,
            files.len()
        ));
    }

    for (index, file) in files.iter().enumerate() {
        validate_individual_file(file, index, config, &mut errors, &mut warnings);
    }

    FileValidationResult {
        is_valid: errors.is_empty(),
        errors,
        warnings,
    }
}
