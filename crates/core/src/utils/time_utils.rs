use chrono::{DateTime, Duration, Months, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer};

/// Approximate month length used when calendar arithmetic is not possible.
pub const FALLBACK_DAYS_PER_MONTH: i64 = 30;

const SECONDS_PER_YEAR: f64 = 365.0 * 24.0 * 60.0 * 60.0;

/// Steps `months` whole calendar months back from `date`.
///
/// Day-of-month is clamped to the target month's length (Mar 31 → Feb 28).
/// When the result falls outside chrono's range, a 30-day month is used instead.
pub fn months_before(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months))
        .or_else(|| date.checked_sub_signed(Duration::days(FALLBACK_DAYS_PER_MONTH * months as i64)))
        .unwrap_or(date)
}

/// Fractional years (365-day years) from `from` until midnight UTC of `until`.
/// Negative when `until` is in the past.
pub fn years_until(from: DateTime<Utc>, until: NaiveDate) -> f64 {
    let target = until.and_time(NaiveTime::MIN).and_utc();
    (target - from).num_seconds() as f64 / SECONDS_PER_YEAR
}

/// Accepts either a plain `YYYY-MM-DD` date or a full RFC 3339 timestamp,
/// which is what JavaScript `Date` values serialize to.
pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_flexible_date(value)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {value}"))),
    }
}

/// Parses `YYYY-MM-DD` or RFC 3339 into a date.
pub fn parse_flexible_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.with_timezone(&Utc).date_naive())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn months_before_clamps_day_of_month() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 31).unwrap();
        assert_eq!(
            months_before(date, 1),
            NaiveDate::from_ymd_opt(2026, 2, 28).unwrap()
        );
        assert_eq!(
            months_before(date, 12),
            NaiveDate::from_ymd_opt(2025, 3, 31).unwrap()
        );
    }

    #[test]
    fn months_before_zero_is_identity() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        assert_eq!(months_before(date, 0), date);
    }

    #[test]
    fn years_until_one_year_ahead() {
        let from = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let until = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        assert!((years_until(from, until) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn parses_plain_and_rfc3339_dates() {
        let expected = NaiveDate::from_ymd_opt(2027, 6, 30).unwrap();
        assert_eq!(parse_flexible_date("2027-06-30"), Some(expected));
        assert_eq!(
            parse_flexible_date("2027-06-30T00:00:00.000Z"),
            Some(expected)
        );
        assert_eq!(parse_flexible_date("30/06/2027"), None);
    }
}
