//! Error types for the conversion core.
//!
//! Every variant is a user-input or data error, never fatal to the
//! process: all of them are recovered at the converter boundary and
//! handed back as values. Each variant carries the offending and
//! limiting values so the caller can interpolate them into localized
//! messages; the core itself never localizes.

use thiserror::Error;
use tinystr::TinyAsciiStr;

use crate::iso::IsoDate;

/// Errors surfaced by year conversion and age computation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The calendar-year input is not a well-formed integer.
    #[error("`{0}` is not a well-formed calendar year")]
    InvalidYear(String),

    /// The era-year input is not a well-formed integer, or is zero or
    /// negative (era years are 1-based).
    #[error("`{0}` is not a well-formed era year; era years start at 1")]
    InvalidEraYear(String),

    /// The calendar year precedes the earliest known era.
    #[error("year {year} precedes the earliest known era, which begins in {earliest_start_year}")]
    YearTooEarly {
        year: i32,
        earliest_start_year: i32,
    },

    /// No era covers the given year. With an intact table this is
    /// unreachable past the minimum-year check; reaching it means the
    /// era table violates its coverage invariant.
    #[error("no era covers year {0}")]
    NoEraForYear(i32),

    /// The supplied era identifier matches no table entry.
    #[error("`{0}` does not name a known era")]
    EraNotFound(String),

    /// The era-relative year exceeds the era's span.
    #[error("{era} {year} does not exist; {era} ran for {max_year} years")]
    EraYearOutOfRange {
        era: TinyAsciiStr<16>,
        year: i32,
        max_year: i32,
    },

    /// The day/month combination does not name a real calendar date.
    #[error("{year:04}-{month:02}-{day:02} is not a real calendar date")]
    InvalidDate { year: i32, month: i32, day: i32 },

    /// The birth date is later than the reference date.
    #[error("birth date {birth} is after the reference date {reference}")]
    BirthDateInFuture { birth: IsoDate, reference: IsoDate },
}

/// Invariant violations detected while building an
/// [`EraTable`](crate::era::EraTable). These are configuration
/// errors, raised at construction so a broken table fails fast
/// instead of misresolving years later.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EraTableError {
    #[error("era table is empty")]
    Empty,

    #[error("the newest era ({0}) must be open-ended")]
    ClosedCurrentEra(TinyAsciiStr<16>),

    #[error("{0} is open-ended but is not the newest era")]
    OpenEraNotNewest(TinyAsciiStr<16>),

    #[error("{newer} does not start strictly after {older}")]
    OutOfOrder {
        newer: TinyAsciiStr<16>,
        older: TinyAsciiStr<16>,
    },

    #[error("{older} ends on {end} but {newer} starts on {start}; adjacent eras must abut")]
    BoundaryGap {
        older: TinyAsciiStr<16>,
        end: IsoDate,
        newer: TinyAsciiStr<16>,
        start: IsoDate,
    },
}
