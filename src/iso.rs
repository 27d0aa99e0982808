//! Whole-date (year, month, day) triples and their validation.
//!
//! Era windows, birth dates, and reference dates are all plain
//! calendar dates; nothing in this crate needs time-of-day or epoch
//! arithmetic, so `IsoDate` is the only date representation.

use core::fmt;

use crate::error::ConversionError;
use crate::utils;

/// An ISO-8601 calendar date.
///
/// Field order matters: the derived `Ord` compares year, then month,
/// then day, which is exactly the whole-date ordering the resolver
/// and the age computation rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct IsoDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl IsoDate {
    /// Creates an `IsoDate` without validation.
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a new `IsoDate`, rejecting any combination of fields
    /// that does not name a real calendar day.
    pub fn try_new(year: i32, month: i32, day: i32) -> Result<Self, ConversionError> {
        if !is_valid_date(year, month, day) {
            return Err(ConversionError::InvalidDate { year, month, day });
        }
        Ok(Self::new_unchecked(year, month as u8, day as u8))
    }

    /// Returns the date one day earlier, rolling over month and year
    /// edges.
    pub(crate) fn previous_day(self) -> Self {
        if self.day > 1 {
            Self::new_unchecked(self.year, self.month, self.day - 1)
        } else if self.month > 1 {
            let month = self.month - 1;
            let day = utils::iso_days_in_month(self.year, i32::from(month)) as u8;
            Self::new_unchecked(self.year, month, day)
        } else {
            Self::new_unchecked(self.year - 1, 12, 31)
        }
    }
}

impl fmt::Display for IsoDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Determines if the month and day are valid for the given year.
#[inline]
pub(crate) fn is_valid_date(year: i32, month: i32, day: i32) -> bool {
    if !(1..=12).contains(&month) {
        return false;
    }
    is_valid_iso_day(year, month, day)
}

#[inline]
pub(crate) fn is_valid_iso_day(year: i32, month: i32, day: i32) -> bool {
    let days_in_month = utils::iso_days_in_month(year, month);
    (1..=days_in_month).contains(&day)
}

/// The number of days in a Gregorian month, or `None` when the month
/// is out of range. Useful for callers populating day selectors.
pub fn days_in_month(year: i32, month: i32) -> Option<u8> {
    if !(1..=12).contains(&month) {
        return None;
    }
    Some(utils::iso_days_in_month(year, month) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: i32, day: i32) -> IsoDate {
        IsoDate::try_new(year, month, day).unwrap()
    }

    #[test]
    fn rejects_impossible_dates() {
        // (year, month, day, valid)
        let cases = [
            (1999, 2, 30, false),
            (2000, 2, 29, true),
            (1900, 2, 28, true),
            (1900, 2, 29, false),
            (2024, 2, 29, true),
            (2023, 4, 31, false),
            (2023, 4, 30, true),
            (2023, 0, 1, false),
            (2023, 13, 1, false),
            (2023, 1, 0, false),
            (2023, 12, 31, true),
        ];
        for (year, month, day, valid) in cases {
            assert_eq!(
                IsoDate::try_new(year, month, day).is_ok(),
                valid,
                "{year}-{month}-{day}"
            );
        }
    }

    #[test]
    fn invalid_date_carries_the_offending_fields() {
        let err = IsoDate::try_new(1999, 2, 30).unwrap_err();
        assert_eq!(
            err,
            ConversionError::InvalidDate {
                year: 1999,
                month: 2,
                day: 30
            }
        );
    }

    #[test]
    fn whole_date_ordering() {
        assert!(date(2019, 4, 30) < date(2019, 5, 1));
        assert!(date(1989, 1, 7) < date(1989, 1, 8));
        assert!(date(2018, 12, 31) < date(2019, 1, 1));
    }

    #[test]
    fn previous_day_handles_month_and_year_edges() {
        assert_eq!(date(2019, 5, 1).previous_day(), date(2019, 4, 30));
        assert_eq!(date(2020, 3, 1).previous_day(), date(2020, 2, 29));
        assert_eq!(date(2019, 3, 1).previous_day(), date(2019, 2, 28));
        assert_eq!(date(2019, 1, 1).previous_day(), date(2018, 12, 31));
        assert_eq!(date(2019, 1, 2).previous_day(), date(2019, 1, 1));
    }

    #[test]
    fn display_is_iso8601() {
        assert_eq!(date(1989, 1, 8).to_string(), "1989-01-08");
        assert_eq!(date(2019, 5, 1).to_string(), "2019-05-01");
    }

    #[test]
    fn days_in_month_bounds() {
        assert_eq!(days_in_month(2023, 2), Some(28));
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2023, 4), Some(30));
        assert_eq!(days_in_month(2023, 0), None);
        assert_eq!(days_in_month(2023, 13), None);
    }
}
