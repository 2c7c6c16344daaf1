/// Utilities for date and time formatting
use chrono::{DateTime, Utc};

/// Format a timestamp as DD/MM/YYYY, HH:MM:SS (24-hour, UTC)
/// Example: 2023-01-15T10:00:00Z -> "15/01/2023, 10:00:00"
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.format("%d/%m/%Y, %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        let dt = DateTime::parse_from_rfc3339("2023-06-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_datetime(&dt), "01/06/2023, 12:00:00");
    }
}
