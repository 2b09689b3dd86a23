//! Display helpers

use chrono::DateTime;

/// "2026-10-19T10:00:00.000Z" -> "October 19, 2026". Unparseable input is
/// shown as-is.
pub fn format_date(iso: &str) -> String {
    match DateTime::parse_from_rfc3339(iso) {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-10-19T10:00:00.000Z"), "October 19, 2026");
        assert_eq!(format_date("2026-01-05T23:59:59+02:00"), "January 5, 2026");
        assert_eq!(format_date("yesterday"), "yesterday");
    }
}
