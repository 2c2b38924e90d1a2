use crate::error::{OrderError, Result};
use chrono::{DateTime, Days, NaiveDate, NaiveDateTime};

/// Days between the order date and the delivery date.
pub const DELIVERY_OFFSET_DAYS: u64 = 7;

const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%d %B %Y",
    "%Y%m%d",
];
// `%.f` also matches when there is no fractional part.
const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, Copy)]
pub struct DateCalculator {
    offset: Days,
}

impl Default for DateCalculator {
    fn default() -> Self {
        Self {
            offset: Days::new(DELIVERY_OFFSET_DAYS),
        }
    }
}

impl DateCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the order date as posted by a date input (`YYYY-MM-DD`), also
    /// accepting a few other unambiguous spellings and full timestamps.
    pub fn parse_order_date(&self, input: &str) -> Option<NaiveDate> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
            .or_else(|| {
                DATE_TIME_FORMATS
                    .iter()
                    .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
                    .map(|timestamp| timestamp.date())
            })
            .or_else(|| {
                DateTime::parse_from_rfc3339(input)
                    .ok()
                    .map(|timestamp| timestamp.date_naive())
            })
    }

    pub fn delivery_for(&self, order_date: NaiveDate) -> Option<NaiveDate> {
        order_date.checked_add_days(self.offset)
    }

    /// Delivery date for a raw order date, or `None` when it does not parse.
    pub fn delivery_date(&self, order_date: &str) -> Option<NaiveDate> {
        self.parse_order_date(order_date)
            .and_then(|date| self.delivery_for(date))
    }

    /// Parsed order date and its delivery date.
    pub fn schedule(&self, order_date: &str) -> Result<(NaiveDate, NaiveDate)> {
        self.parse_order_date(order_date)
            .and_then(|date| Some((date, self.delivery_for(date)?)))
            .ok_or_else(|| OrderError::DateParseFailure(order_date.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_crosses_into_leap_february() {
        let calculator = DateCalculator::new();
        assert_eq!(calculator.delivery_date("2024-01-28"), Some(date(2024, 2, 4)));
        assert_eq!(calculator.delivery_date("2024-02-25"), Some(date(2024, 3, 3)));
        assert_eq!(calculator.delivery_date("2023-02-25"), Some(date(2023, 3, 4)));
    }

    #[test]
    fn test_crosses_year_boundary() {
        let calculator = DateCalculator::new();
        assert_eq!(calculator.delivery_date("2024-12-28"), Some(date(2025, 1, 4)));
    }

    #[test]
    fn test_alternative_spellings() {
        let calculator = DateCalculator::new();
        let expected = Some(date(2024, 3, 8));
        assert_eq!(calculator.delivery_date("2024/03/01"), expected);
        assert_eq!(calculator.delivery_date("03/01/2024"), expected);
        assert_eq!(calculator.delivery_date("March 1, 2024"), expected);
        assert_eq!(calculator.delivery_date("1 March 2024"), expected);
        assert_eq!(calculator.delivery_date("2024-03-01T09:30"), expected);
        assert_eq!(calculator.delivery_date("2024-03-01T09:30:00+02:00"), expected);
        assert_eq!(calculator.delivery_date(" 2024-03-01 "), expected);
    }

    #[test]
    fn test_compact_and_fractional_timestamps() {
        let calculator = DateCalculator::new();
        let expected = Some(date(2024, 3, 8));
        assert_eq!(calculator.delivery_date("20240301"), expected);
        assert_eq!(calculator.delivery_date("2024-03-01 09:30"), expected);
        assert_eq!(calculator.delivery_date("2024-03-01 09:30:00"), expected);
        assert_eq!(calculator.delivery_date("2024-03-01 09:30:00.5"), expected);
        assert_eq!(calculator.delivery_date("2024-03-01T09:30:00"), expected);
        assert_eq!(calculator.delivery_date("2024-03-01T09:30:00.123"), expected);
        assert!(calculator.delivery_date("20241301").is_none());
    }

    #[test]
    fn test_schedule() {
        let calculator = DateCalculator::new();
        assert_eq!(
            calculator.schedule("2024-02-26").unwrap(),
            (date(2024, 2, 26), date(2024, 3, 4))
        );
        assert!(matches!(
            calculator.schedule("31/31/2024"),
            Err(OrderError::DateParseFailure(input)) if input == "31/31/2024"
        ));
        assert!(calculator.schedule(&NaiveDate::MAX.to_string()).is_err());
    }

    #[test]
    fn test_unparseable_dates() {
        let calculator = DateCalculator::new();
        assert!(calculator.delivery_date("not-a-date").is_none());
        assert!(calculator.delivery_date("2023-02-29").is_none());
        assert!(calculator.delivery_date("2024-13-01").is_none());
        assert!(calculator.delivery_date("").is_none());
    }
}
