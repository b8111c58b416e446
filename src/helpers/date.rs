//! Date helper functions

use chrono::NaiveDateTime;

use crate::content::frontmatter::parse_date_string;

/// Format a date using a Moment.js-compatible format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "MMMM D, YYYY") // -> "January 5, 2024"
/// ```
pub fn format_date(date: &NaiveDateTime, format: &str) -> String {
    let chrono_format = moment_to_chrono_format(format);
    date.format(&chrono_format).to_string()
}

/// Format an ISO-8601 date string for display.
///
/// Strings that do not parse are returned unchanged.
pub fn display_date(iso: &str, format: &str) -> String {
    match parse_date_string(iso) {
        Some(date) => format_date(&date, format),
        None => {
            tracing::debug!("Cannot format date {:?}, showing it as is", iso);
            iso.to_string()
        }
    }
}

/// Convert Moment.js format to chrono format
fn moment_to_chrono_format(format: &str) -> String {
    // Longest tokens first within each unit so shorter ones don't eat them
    let replacements = [
        ("YYYY", "%Y"),
        ("YY", "%y"),
        ("MMMM", "%B"),
        ("MMM", "%b"),
        ("MM", "%m"),
        ("M", "%-m"),
        ("DDDD", "%j"),
        ("DD", "%d"),
        ("D", "%-d"),
        ("HH", "%H"),
        ("hh", "%I"),
        ("mm", "%M"),
        ("ss", "%S"),
        ("dddd", "%A"),
        ("ddd", "%a"),
    ];

    let mut result = format.to_string();

    for (from, to) in replacements {
        result = result.replace(from, to);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn jan_5() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&jan_5(), "YYYY-MM-DD"), "2024-01-05");
        assert_eq!(format_date(&jan_5(), "MMMM D, YYYY"), "January 5, 2024");
        assert_eq!(format_date(&jan_5(), "D/M/YY HH:mm"), "5/1/24 10:30");
    }

    #[test]
    fn test_display_date() {
        assert_eq!(
            display_date("2021-08-04T00:00:00.000Z", "MMMM D, YYYY"),
            "August 4, 2021"
        );
        assert_eq!(display_date("someday", "MMMM D, YYYY"), "someday");
    }

    #[test]
    fn test_moment_to_chrono() {
        assert_eq!(moment_to_chrono_format("YYYY-MM-DD"), "%Y-%m-%d");
        assert_eq!(moment_to_chrono_format("MMMM D, YYYY"), "%B %-d, %Y");
        assert_eq!(moment_to_chrono_format("HH:mm:ss"), "%H:%M:%S");
    }
}
