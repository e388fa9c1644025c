//! Date helper functions

use chrono::{DateTime, Datelike, TimeZone, Utc};

const MONTHS_FR: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Format a date using a Moment.js-style format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "YYYY-MM-DD") // -> "2024-01-15"
/// ```
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>, format: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format(&moment_to_chrono_format(format)).to_string()
}

/// Format a date in ISO 8601 / XML format
pub fn date_xml(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
}

/// Long French date ("1 juin 2024") in the given timezone
pub fn long_date_fr<Tz: TimeZone>(date: &DateTime<Utc>, tz: &Tz) -> String {
    let local = date.with_timezone(tz);
    format!(
        "{} {} {}",
        local.day(),
        MONTHS_FR[local.month0() as usize],
        local.year()
    )
}

/// Convert Moment.js format to chrono format
fn moment_to_chrono_format(format: &str) -> String {
    let replacements = [
        ("YYYY", "%Y"),
        ("YY", "%y"),
        ("MM", "%m"),
        ("DD", "%d"),
        ("HH", "%H"),
        ("mm", "%M"),
        ("ss", "%S"),
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

    #[test]
    fn test_format_date() {
        let date = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(format_date(&date, "YYYY-MM-DD"), "2024-01-15");
        assert_eq!(format_date(&date, "DD/MM/YYYY HH:mm"), "15/01/2024 10:30");
    }

    #[test]
    fn test_date_xml() {
        let date = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(date_xml(&date), "2024-06-01T00:00:00+00:00");
    }

    #[test]
    fn test_long_date_fr() {
        let date = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        assert_eq!(long_date_fr(&date, &chrono_tz::Europe::Paris), "1 juin 2024");

        let date = Utc.with_ymd_and_hms(2024, 2, 3, 0, 0, 0).unwrap();
        assert_eq!(long_date_fr(&date, &Utc), "3 février 2024");
    }

    #[test]
    fn test_long_date_fr_crosses_midnight() {
        // 23:30 UTC on New Year's Eve is already January in Paris
        let date = Utc.with_ymd_and_hms(2023, 12, 31, 23, 30, 0).unwrap();
        assert_eq!(
            long_date_fr(&date, &chrono_tz::Europe::Paris),
            "1 janvier 2024"
        );
    }
}
