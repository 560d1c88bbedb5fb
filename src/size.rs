//! Human-readable byte size formatting

use std::fmt;

/// Units for binary scaling (divisor 1024).
const BINARY_UNITS: [&str; 6] = ["bytes", "KiB", "MiB", "GiB", "TiB", "PiB"];

/// Units for decimal scaling (divisor 1000).
const DECIMAL_UNITS: [&str; 6] = ["bytes", "KB", "MB", "GB", "TB", "PB"];

/// Decimal digits shown when no precision is given.
pub const DEFAULT_PRECISION: usize = 2;

/// Error for size inputs that cannot be formatted.
///
/// The `Display` impl renders the exact user-facing message, so callers
/// that print the error directly show `Invalid size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeError {
    /// Negative or non-numeric input.
    InvalidInput,
}

impl fmt::Display for SizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeError::InvalidInput => write!(f, "Invalid size"),
        }
    }
}

impl std::error::Error for SizeError {}

/// Format a byte count with the default precision and binary units.
pub fn format_size(bytes: i64) -> Result<String, SizeError> {
    format_size_with(bytes, DEFAULT_PRECISION, true)
}

/// Format a byte count as a human-readable string.
///
/// The value is divided by the unit divisor until it drops below it or the
/// unit table runs out, so anything past the largest unit renders as a large
/// numeric prefix rather than failing. Counts that stay in the `bytes` unit
/// are rendered as integers; larger units get exactly `precision` decimals.
pub fn format_size_with(
    bytes: i64,
    precision: usize,
    use_binary: bool,
) -> Result<String, SizeError> {
    if bytes < 0 {
        return Err(SizeError::InvalidInput);
    }
    if bytes == 0 {
        return Ok("0 bytes".to_string());
    }

    let (units, divisor) = if use_binary {
        (&BINARY_UNITS, 1024.0)
    } else {
        (&DECIMAL_UNITS, 1000.0)
    };

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= divisor && unit < units.len() - 1 {
        value /= divisor;
        unit += 1;
    }

    if unit == 0 {
        Ok(format!("{} bytes", bytes))
    } else {
        Ok(format!("{:.*} {}", precision, value, units[unit]))
    }
}

/// Parse a raw byte count from user input.
///
/// Covers the non-numeric input case that the type system otherwise makes
/// unrepresentable: `"x"` and `"-5"` both come back as `InvalidInput`.
pub fn parse_byte_count(input: &str) -> Result<i64, SizeError> {
    let bytes: i64 = input.trim().parse().map_err(|_| SizeError::InvalidInput)?;
    if bytes < 0 {
        return Err(SizeError::InvalidInput);
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_spelled_out() {
        assert_eq!(format_size(0).unwrap(), "0 bytes");
    }

    #[test]
    fn test_small_counts_stay_integral() {
        assert_eq!(format_size(1).unwrap(), "1 bytes");
        assert_eq!(format_size(512).unwrap(), "512 bytes");
        assert_eq!(format_size(1023).unwrap(), "1023 bytes");
    }

    #[test]
    fn test_binary_units() {
        assert_eq!(format_size(1536).unwrap(), "1.50 KiB");
        assert_eq!(format_size(1024 * 1024).unwrap(), "1.00 MiB");
        assert_eq!(format_size(1024 * 1024 * 1024).unwrap(), "1.00 GiB");
    }

    #[test]
    fn test_decimal_units() {
        assert_eq!(format_size_with(1536, 2, false).unwrap(), "1.54 KB");
        assert_eq!(format_size_with(1_000_000, 2, false).unwrap(), "1.00 MB");
        // 1000 is exactly one decimal kilobyte
        assert_eq!(format_size_with(1000, 2, false).unwrap(), "1.00 KB");
    }

    #[test]
    fn test_precision_is_respected() {
        assert_eq!(format_size_with(1536, 0, true).unwrap(), "2 KiB");
        assert_eq!(format_size_with(1536, 4, true).unwrap(), "1.5000 KiB");
    }

    #[test]
    fn test_caps_at_largest_unit() {
        // 4 EiB worth of bytes renders as a large PiB count, not an error
        let formatted = format_size(1i64 << 62).unwrap();
        assert!(
            formatted.ends_with("PiB"),
            "exabyte-scale input should cap at PiB: {}",
            formatted
        );
        assert!(formatted.starts_with("4096"), "got: {}", formatted);
    }

    #[test]
    fn test_negative_is_invalid() {
        assert_eq!(format_size(-5), Err(SizeError::InvalidInput));
        assert_eq!(format_size(-5).unwrap_err().to_string(), "Invalid size");
    }

    #[test]
    fn test_parse_byte_count() {
        assert_eq!(parse_byte_count("1536"), Ok(1536));
        assert_eq!(parse_byte_count("  42 "), Ok(42));
        assert_eq!(parse_byte_count("x"), Err(SizeError::InvalidInput));
        assert_eq!(parse_byte_count("-5"), Err(SizeError::InvalidInput));
        assert_eq!(parse_byte_count("1.5"), Err(SizeError::InvalidInput));
    }

    #[test]
    fn test_advances_to_largest_fitting_unit() {
        // The chosen unit is the largest one the value still reaches,
        // unless the table runs out first.
        for (bytes, expected_unit) in [
            (1023i64, "bytes"),
            (1024, "KiB"),
            (1024 * 1024 - 1, "KiB"),
            (1024 * 1024, "MiB"),
            (1024i64.pow(4), "TiB"),
            (1024i64.pow(5), "PiB"),
            (1024i64.pow(5) * 500, "PiB"),
        ] {
            let formatted = format_size(bytes).unwrap();
            assert!(
                formatted.ends_with(expected_unit),
                "{} bytes should render in {}: {}",
                bytes,
                expected_unit,
                formatted
            );
        }
    }
}
