//! Day bucketing for daily aggregates and streaks
//!
//! All persisted records carry a `YYYY-MM-DD` day bucket in local time so
//! that "did something today" questions are a string compare, not timezone
//! math at query time.

use chrono::{DateTime, Local, NaiveDate};

/// Day bucket ("YYYY-MM-DD", local time) for a Unix timestamp in milliseconds
pub fn day_bucket(timestamp_ms: i64) -> String {
    let dt = DateTime::from_timestamp_millis(timestamp_ms)
        .map(|dt| dt.with_timezone(&Local))
        .unwrap_or_else(Local::now);
    dt.format("%Y-%m-%d").to_string()
}

/// Today's day bucket
pub fn today_bucket() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Parse a day bucket back into a date
pub fn parse_day_bucket(bucket: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(bucket, "%Y-%m-%d").ok()
}

/// Days between two buckets (`later - earlier`), if both parse
pub fn days_between(earlier: &str, later: &str) -> Option<i64> {
    let earlier = parse_day_bucket(earlier)?;
    let later = parse_day_bucket(later)?;
    Some((later - earlier).num_days())
}

/// The bucket `days` days before today
pub fn bucket_days_ago(days: u32) -> String {
    (Local::now().date_naive() - chrono::Duration::days(days as i64))
        .format("%Y-%m-%d")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        let date = parse_day_bucket("2024-03-09").unwrap();
        assert_eq!(date.format("%Y-%m-%d").to_string(), "2024-03-09");
        assert!(parse_day_bucket("not-a-date").is_none());
    }

    #[test]
    fn test_days_between() {
        assert_eq!(days_between("2024-03-01", "2024-03-09"), Some(8));
        assert_eq!(days_between("2024-03-09", "2024-03-09"), Some(0));
        assert_eq!(days_between("2024-03-09", "2024-03-08"), Some(-1));
        assert_eq!(days_between("junk", "2024-03-08"), None);
    }

    #[test]
    fn test_today_is_parseable() {
        assert!(parse_day_bucket(&today_bucket()).is_some());
    }
}
