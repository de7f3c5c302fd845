//! Timestamp rendering

use chrono::{Datelike, Local, Timelike};

/// Render `MM-DD-YYYY HH:MM:SS` with no timezone
pub fn format_timestamp<T: Datelike + Timelike>(time: &T) -> String {
    format!(
        "{:02}-{:02}-{:04} {:02}:{:02}:{:02}",
        time.month(),
        time.day(),
        time.year(),
        time.hour(),
        time.minute(),
        time.second(),
    )
}

/// Current local wall-clock time, rendered
pub fn now() -> String {
    format_timestamp(&Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_zero_padding() {
        assert_eq!(format_timestamp(&at(2020, 3, 7, 4, 5, 9)), "03-07-2020 04:05:09");
    }

    #[test]
    fn test_two_digit_fields_unchanged() {
        assert_eq!(format_timestamp(&at(1999, 12, 31, 23, 59, 58)), "12-31-1999 23:59:58");
    }

    #[test]
    fn test_midnight_first_of_year() {
        assert_eq!(format_timestamp(&at(2024, 1, 1, 0, 0, 0)), "01-01-2024 00:00:00");
    }

    #[test]
    fn test_short_year_padded_to_four() {
        assert_eq!(format_timestamp(&at(987, 6, 15, 12, 30, 0)), "06-15-0987 12:30:00");
    }

    #[test]
    fn test_now_shape() {
        let ts = now();
        assert_eq!(ts.len(), 19);
        let bytes = ts.as_bytes();
        assert_eq!(bytes[2], b'-');
        assert_eq!(bytes[5], b'-');
        assert_eq!(bytes[10], b' ');
        assert_eq!(bytes[13], b':');
        assert_eq!(bytes[16], b':');
    }
}
