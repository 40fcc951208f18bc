//! Token helpers for emitting KiCad s-expressions

/// Format a number the way KiCad files spell them: no trailing `.0`, no `-0`
///
/// Values are written verbatim otherwise; nothing is rounded or range-checked.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Covers -0.0 as well
        return "0".to_string();
    }
    value.to_string()
}

/// Build a position token `(at x y r)`
pub fn at_token(x: f64, y: f64, rotation: f64) -> String {
    format!(
        "(at {} {} {})",
        format_number(x),
        format_number(y),
        format_number(rotation)
    )
}

/// Wrap a string in double quotes without escaping
///
/// Text content is passed through literally, so an embedded quote yields
/// malformed output for the consuming toolchain to report.
pub fn quoted(value: &str) -> String {
    format!("\"{}\"", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(0.15), "0.15");
        assert_eq!(format_number(-2.375), "-2.375");
        assert_eq!(format_number(0.59375), "0.59375");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(90.0), "90");
    }

    #[test]
    fn test_at_token() {
        assert_eq!(at_token(0.0, 0.0, 0.0), "(at 0 0 0)");
        assert_eq!(at_token(-1.5, 2.25, 180.0), "(at -1.5 2.25 180)");
    }

    #[test]
    fn test_quoted() {
        assert_eq!(quoted("Hi"), "\"Hi\"");
        assert_eq!(quoted(""), "\"\"");
    }
}
