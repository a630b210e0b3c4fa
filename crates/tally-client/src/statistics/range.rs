use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

const INSTANT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Which end of the day a bare `YYYY-MM-DD` value should expand to when it
/// fills a range bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayBound {
    Start,
    End,
}

/// An inclusive reporting window. Both bounds participate in comparisons
/// down to the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl ReportingRange {
    /// Normalizes a raw bound pair. Inverted input is swapped rather than
    /// rejected, so every aggregator in one call sees the same window.
    pub fn resolve(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        if end < start {
            return Self {
                from: end,
                to: start,
            };
        }
        Self {
            from: start,
            to: end,
        }
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.from && instant <= self.to
    }

    /// Calendar days touched by the window, never less than 1.
    pub fn day_count(&self) -> i64 {
        let days = (self.to.date_naive() - self.from.date_naive()).num_days() + 1;
        days.max(1)
    }

    /// Every `YYYY-MM` month key touched by the window, in chronological
    /// order without duplicates.
    pub fn month_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        let mut year = self.from.year();
        let mut month = self.from.month();
        let end_year = self.to.year();
        let end_month = self.to.month();

        while (year, month) <= (end_year, end_month) {
            keys.push(format!("{year:04}-{month:02}"));
            if month == 12 {
                year += 1;
                month = 1;
            } else {
                month += 1;
            }
        }

        keys
    }
}

pub fn month_key(instant: &DateTime<Utc>) -> String {
    format!("{:04}-{:02}", instant.year(), instant.month())
}

pub fn format_instant(instant: &DateTime<Utc>) -> String {
    instant.format(INSTANT_FORMAT).to_string()
}

pub fn format_date(instant: &DateTime<Utc>) -> String {
    instant.format(DATE_FORMAT).to_string()
}

/// Parses a range bound: either a full UTC instant (`YYYY-MM-DDTHH:MM:SSZ`)
/// or a bare date that expands to the start or end of that day.
pub fn parse_bound_instant(value: &str, bound: DayBound) -> Option<DateTime<Utc>> {
    if value.len() == 10 {
        let date = NaiveDate::parse_from_str(value, DATE_FORMAT).ok()?;
        let time = match bound {
            DayBound::Start => date.and_hms_opt(0, 0, 0)?,
            DayBound::End => date.and_hms_opt(23, 59, 59)?,
        };
        return Some(time.and_utc());
    }

    parse_stored_instant(value)
}

/// Parses a stored `posted_at` / budget period value. Rows with values the
/// engine cannot interpret are skipped by the reader rather than failing
/// the whole query.
pub fn parse_stored_instant(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, INSTANT_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::{DayBound, ReportingRange, parse_bound_instant, parse_stored_instant};

    fn instant(value: &str) -> DateTime<Utc> {
        let parsed = parse_stored_instant(value);
        assert!(parsed.is_some(), "bad test instant {value}");
        parsed.unwrap_or_default()
    }

    #[test]
    fn inverted_bounds_are_swapped_not_rejected() {
        let start = instant("2026-03-31T00:00:00Z");
        let end = instant("2026-03-01T00:00:00Z");

        let range = ReportingRange::resolve(start, end);
        assert_eq!(range.from, end);
        assert_eq!(range.to, start);
        assert_eq!(range, ReportingRange::resolve(end, start));
    }

    #[test]
    fn bounds_are_inclusive_to_the_second() {
        let range = ReportingRange::resolve(
            instant("2026-01-01T00:00:00Z"),
            instant("2026-01-31T23:59:59Z"),
        );

        assert!(range.contains(instant("2026-01-01T00:00:00Z")));
        assert!(range.contains(instant("2026-01-31T23:59:59Z")));
        assert!(!range.contains(instant("2025-12-31T23:59:59Z")));
        assert!(!range.contains(instant("2026-02-01T00:00:00Z")));
    }

    #[test]
    fn day_count_counts_calendar_days_touched() {
        let single = ReportingRange::resolve(
            instant("2026-01-05T08:00:00Z"),
            instant("2026-01-05T20:00:00Z"),
        );
        assert_eq!(single.day_count(), 1);

        let january = ReportingRange::resolve(
            instant("2026-01-01T00:00:00Z"),
            instant("2026-01-31T23:59:59Z"),
        );
        assert_eq!(january.day_count(), 31);
    }

    #[test]
    fn month_keys_cover_every_month_touched_in_order() {
        let range = ReportingRange::resolve(
            instant("2025-11-15T00:00:00Z"),
            instant("2026-02-02T00:00:00Z"),
        );
        assert_eq!(range.month_keys(), vec!["2025-11", "2025-12", "2026-01", "2026-02"]);
    }

    #[test]
    fn bare_dates_expand_to_day_bounds() {
        let from = parse_bound_instant("2026-01-05", DayBound::Start);
        let to = parse_bound_instant("2026-01-05", DayBound::End);
        assert_eq!(from, Some(instant("2026-01-05T00:00:00Z")));
        assert_eq!(to, Some(instant("2026-01-05T23:59:59Z")));
    }

    #[test]
    fn malformed_bounds_are_rejected() {
        assert!(parse_bound_instant("2026-13-05", DayBound::Start).is_none());
        assert!(parse_bound_instant("yesterday", DayBound::Start).is_none());
        assert!(parse_stored_instant("2026-01-05 12:00:00").is_none());
    }
}
