use crate::Result;
use chrono::{Datelike, Months, NaiveDate};
use core::fmt::{Display, Formatter, Result as FmtResult};
use ohno::{app_err, bail};

/// A calendar month, spanning its first through last day inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Month {
    first_day: NaiveDate,
    last_day: NaiveDate,
}

impl Month {
    /// # Errors
    ///
    /// Returns an error if `month` is not in `1..=12` or `year` is out of range.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            bail!("month must be between 1 and 12, got {month}");
        }

        let first_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| app_err!("year {year} is out of range"))?;
        let last_day = first_day
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or_else(|| app_err!("year {year} is out of range"))?;

        Ok(Self { first_day, last_day })
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    #[must_use]
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    #[must_use]
    pub const fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    #[must_use]
    pub const fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.first_day..=self.last_day).contains(&date)
    }
}

impl Display for Month {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}/{}", self.month(), self.year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_may_2018_bounds() {
        let month = Month::new(2018, 5).unwrap();
        assert_eq!(month.first_day(), date(2018, 5, 1));
        assert_eq!(month.last_day(), date(2018, 5, 31));
    }

    #[test]
    fn test_december_rolls_into_next_year() {
        let month = Month::new(2018, 12).unwrap();
        assert_eq!(month.last_day(), date(2018, 12, 31));
    }

    #[test]
    fn test_leap_february() {
        assert_eq!(Month::new(2020, 2).unwrap().last_day(), date(2020, 2, 29));
        assert_eq!(Month::new(2019, 2).unwrap().last_day(), date(2019, 2, 28));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let month = Month::new(2018, 5).unwrap();
        assert!(month.contains(date(2018, 5, 1)));
        assert!(month.contains(date(2018, 5, 31)));
        assert!(!month.contains(date(2018, 4, 30)));
        assert!(!month.contains(date(2018, 6, 1)));
    }

    #[test]
    fn test_rejects_invalid_month() {
        let _ = Month::new(2018, 0).unwrap_err();
        let err = Month::new(2018, 13).unwrap_err();
        assert!(err.to_string().contains("between 1 and 12"), "{err}");
    }

    #[test]
    fn test_display() {
        assert_eq!(Month::new(2018, 5).unwrap().to_string(), "5/2018");
    }
}
