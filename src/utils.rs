//! Calendar math helpers.
//!
//! Everything in this crate happens on whole Gregorian dates, so the
//! only math needed is the leap-year rule and month lengths.

/// Mathematically determine the days in a year.
pub(crate) fn mathematical_days_in_year(y: i32) -> i32 {
    if y % 4 != 0 {
        365
    } else if y % 4 == 0 && y % 100 != 0 {
        366
    } else if y % 100 == 0 && y % 400 != 0 {
        365
    } else {
        // Assert that y is divisible by 400 to ensure we are returning the correct result.
        assert_eq!(y % 400, 0);
        366
    }
}

/// `ISODaysInMonth ( year, month )`
///
/// Callers must hand in a month in `1..=12`; the public surface
/// validates the range first.
pub(crate) fn iso_days_in_month(year: i32, month: i32) -> i32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => 28 + (mathematical_days_in_year(year) - 365),
        _ => unreachable!("iso_days_in_month called with an unvalidated month."),
    }
}
