//! Human-readable size formatting.

const UNITS: &[&str] = &["Bytes", "KB", "MB", "GB"];

/// Format a byte count with binary (1024-based) prefixes and two-decimal
/// rounding, e.g. `52428800` -> `"50 MB"`, `1536` -> `"1.5 KB"`.
pub fn format_bytes(bytes: usize) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let exponent = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    // Two decimals, trailing zeros stripped (matches parseFloat(x.toFixed(2))).
    let rounded = (value * 100.0).round() / 100.0;
    let mut text = format!("{:.2}", rounded);
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    format!("{} {}", text, UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes_zero() {
        assert_eq!(format_bytes(0), "0 Bytes");
    }

    #[test]
    fn test_format_bytes_exact_units() {
        assert_eq!(format_bytes(1024), "1 KB");
        assert_eq!(format_bytes(50 * 1024 * 1024), "50 MB");
        assert_eq!(format_bytes(2 * 1024 * 1024 * 1024), "2 GB");
    }

    #[test]
    fn test_format_bytes_fractional() {
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(1587), "1.55 KB");
    }

    #[test]
    fn test_format_bytes_sub_kilobyte() {
        assert_eq!(format_bytes(512), "512 Bytes");
    }
}
