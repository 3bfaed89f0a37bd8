/// Utilities for date formatting
///
/// Provides consistent date formatting across the views
use chrono::NaiveDate;

/// Format a date as DD.MM.YYYY
/// Example: 2024-01-15 -> "15.01.2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(format_date(date), "15.01.2024");
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(format_date(date), "31.12.2024");
    }
}
