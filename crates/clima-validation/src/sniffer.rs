//! Structural sniffing for climate document formats.
//!
//! Each check inspects a bounded prefix of the content (magic bytes or a
//! shallow content heuristic), never a full document parse. Decode failures
//! are converted into `{TYPE}_VALIDATION_ERROR` findings; sniffers never
//! propagate errors to the caller.

use crate::types::{ValidationError, ValidationWarning};

const PDF_MAGIC: &[u8] = b"%PDF";
const ZIP_MAGIC: &[u8] = b"PK";
/// Window scanned for the PDF encryption dictionary marker.
const PDF_ENCRYPT_SCAN_BYTES: usize = 1024;
const TXT_MIN_CHARS: usize = 50;

fn contains_token(haystack: &[u8], token: &[u8]) -> bool {
    haystack.windows(token.len()).any(|w| w == token)
}

/// PDF: `%PDF` header, then reject password-protected documents outright.
pub fn validate_pdf_structure(
    content: &[u8],
    errors: &mut Vec<ValidationError>,
    _warnings: &mut Vec<ValidationWarning>,
) {
    if content.len() < PDF_MAGIC.len() || &content[..PDF_MAGIC.len()] != PDF_MAGIC {
        errors.push(ValidationError::new(
            "INVALID_PDF_FORMAT",
            "File does not appear to be a valid PDF document",
            "Please ensure the file is a valid PDF document",
        ));
        return;
    }

    let scan = &content[..content.len().min(PDF_ENCRYPT_SCAN_BYTES)];
    if contains_token(scan, b"/Encrypt") {
        errors.push(ValidationError::new(
            "PASSWORD_PROTECTED_PDF",
            "PDF file is password protected and cannot be processed",
            "Please provide an unprotected PDF version",
        ));
    }
}

/// CSV: UTF-8 text with at least one non-blank line; a lone header line is
/// only a warning.
pub fn validate_csv_structure(
    content: &[u8],
    errors: &mut Vec<ValidationError>,
    warnings: &mut Vec<ValidationWarning>,
) {
    let text = match std::str::from_utf8(content) {
        Ok(text) => text,
        Err(err) => {
            errors.push(ValidationError::new(
                "CSV_VALIDATION_ERROR",
                format!("Failed to validate CSV structure: {}", err),
                "Please ensure the file is a valid CSV document",
            ));
            return;
        }
    };

    let lines = text.split('\n').filter(|line| !line.trim().is_empty()).count();

    if lines == 0 {
        errors.push(ValidationError::new(
            "EMPTY_CSV",
            "CSV file is empty",
            "Please provide a CSV file with data",
        ));
        return;
    }

    if lines < 2 {
        warnings.push(ValidationWarning::new(
            "CSV_MINIMAL_DATA",
            "CSV file has minimal data (only header or single row)",
            "Ensure the CSV contains sufficient data for analysis",
        ));
    }
}

/// TXT: UTF-8 text, non-empty; very short content is only a warning.
pub fn validate_txt_structure(
    content: &[u8],
    errors: &mut Vec<ValidationError>,
    warnings: &mut Vec<ValidationWarning>,
) {
    let text = match std::str::from_utf8(content) {
        Ok(text) => text,
        Err(err) => {
            errors.push(ValidationError::new(
                "TXT_VALIDATION_ERROR",
                format!("Failed to validate text file structure: {}", err),
                "Please ensure the file is a valid text document",
            ));
            return;
        }
    };

    let length = text.chars().count();

    if length == 0 {
        errors.push(ValidationError::new(
            "EMPTY_TXT",
            "Text file is empty",
            "Please provide a text file with content",
        ));
        return;
    }

    if length < TXT_MIN_CHARS {
        warnings.push(ValidationWarning::new(
            "TXT_TOO_SHORT",
            "Text file appears to be very short",
            "Ensure the document contains sufficient content for analysis",
        ));
    }
}

/// DOCX: zip local-file-header signature.
pub fn validate_docx_structure(
    content: &[u8],
    errors: &mut Vec<ValidationError>,
    _warnings: &mut Vec<ValidationWarning>,
) {
    if content.len() < ZIP_MAGIC.len() || &content[..ZIP_MAGIC.len()] != ZIP_MAGIC {
        errors.push(ValidationError::new(
            "INVALID_DOCX_FORMAT",
            "File does not appear to be a valid DOCX document",
            "Please ensure the file is a valid DOCX document",
        ));
    }
}

/// XLSX: zip local-file-header signature.
pub fn validate_xlsx_structure(
    content: &[u8],
    errors: &mut Vec<ValidationError>,
    _warnings: &mut Vec<ValidationWarning>,
) {
    if content.len() < ZIP_MAGIC.len() || &content[..ZIP_MAGIC.len()] != ZIP_MAGIC {
        errors.push(ValidationError::new(
            "INVALID_XLSX_FORMAT",
            "File does not appear to be a valid XLSX document",
            "Please ensure the file is a valid XLSX document",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(
        f: impl Fn(&[u8], &mut Vec<ValidationError>, &mut Vec<ValidationWarning>),
        content: &[u8],
    ) -> (Vec<ValidationError>, Vec<ValidationWarning>) {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        f(content, &mut errors, &mut warnings);
        (errors, warnings)
    }

    fn codes(errors: &[ValidationError]) -> Vec<&str> {
        errors.iter().map(|e| e.code.as_str()).collect()
    }

    #[test]
    fn test_pdf_valid_header() {
        let (errors, warnings) = run(validate_pdf_structure, b"%PDF-1.4\nrest of file");
        assert!(errors.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_pdf_bad_header_single_error() {
        let (errors, _) = run(validate_pdf_structure, b"not a pdf at all");
        assert_eq!(codes(&errors), vec!["INVALID_PDF_FORMAT"]);
    }

    #[test]
    fn test_pdf_short_buffer_is_invalid() {
        let (errors, _) = run(validate_pdf_structure, b"%P");
        assert_eq!(codes(&errors), vec!["INVALID_PDF_FORMAT"]);
    }

    #[test]
    fn test_pdf_encrypted_passes_header_then_rejected() {
        let mut content = b"%PDF-1.7\n".to_vec();
        content.extend_from_slice(b"1 0 obj << /Encrypt 2 0 R >>\n");
        let (errors, _) = run(validate_pdf_structure, &content);
        assert_eq!(codes(&errors), vec!["PASSWORD_PROTECTED_PDF"]);
    }

    #[test]
    fn test_pdf_encrypt_beyond_scan_window_ignored() {
        let mut content = b"%PDF-1.7\n".to_vec();
        content.resize(2048, b' ');
        content.extend_from_slice(b"/Encrypt");
        let (errors, _) = run(validate_pdf_structure, &content);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_csv_empty_is_blocking() {
        let (errors, _) = run(validate_csv_structure, b"");
        assert_eq!(codes(&errors), vec!["EMPTY_CSV"]);
    }

    #[test]
    fn test_csv_blank_lines_only_is_empty() {
        let (errors, _) = run(validate_csv_structure, b"\n   \n\t\n");
        assert_eq!(codes(&errors), vec!["EMPTY_CSV"]);
    }

    #[test]
    fn test_csv_header_only_warns() {
        let (errors, warnings) = run(validate_csv_structure, b"region,risk,score\n");
        assert!(errors.is_empty());
        assert_eq!(warnings[0].code, "CSV_MINIMAL_DATA");
    }

    #[test]
    fn test_csv_with_data_clean() {
        let (errors, warnings) = run(validate_csv_structure, b"region,risk\neu,flood\n");
        assert!(errors.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_csv_invalid_utf8_converted() {
        let (errors, _) = run(validate_csv_structure, &[0xff, 0xfe, 0x00]);
        assert_eq!(errors[0].code, "CSV_VALIDATION_ERROR");
        assert!(errors[0].message.starts_with("Failed to validate CSV structure:"));
    }

    #[test]
    fn test_txt_empty_is_blocking() {
        let (errors, _) = run(validate_txt_structure, b"");
        assert_eq!(codes(&errors), vec!["EMPTY_TXT"]);
    }

    #[test]
    fn test_txt_short_warns() {
        let (errors, warnings) = run(validate_txt_structure, b"short note");
        assert!(errors.is_empty());
        assert_eq!(warnings[0].code, "TXT_TOO_SHORT");
    }

    #[test]
    fn test_txt_long_enough_clean() {
        let content = "a".repeat(50);
        let (errors, warnings) = run(validate_txt_structure, content.as_bytes());
        assert!(errors.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_docx_xlsx_zip_magic() {
        let (errors, _) = run(validate_docx_structure, b"PK\x03\x04rest");
        assert!(errors.is_empty());
        let (errors, _) = run(validate_docx_structure, b"no zip here");
        assert_eq!(codes(&errors), vec!["INVALID_DOCX_FORMAT"]);
        let (errors, _) = run(validate_xlsx_structure, b"zz");
        assert_eq!(codes(&errors), vec!["INVALID_XLSX_FORMAT"]);
    }

    #[test]
    fn test_sniffers_are_idempotent() {
        let content = b"%PDF-1.4 /Encrypt";
        let first = run(validate_pdf_structure, content);
        let second = run(validate_pdf_structure, content);
        assert_eq!(codes(&first.0), codes(&second.0));
    }
}
