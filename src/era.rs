//! Era records and the modern era table.
//!
//! The table is ordered newest-first. That order is load-bearing: the
//! year-granularity resolver scans it front to back and takes the
//! first match, which is what makes a shared boundary year resolve to
//! the era that starts in it (see `resolver`).

use tinystr::{tinystr, TinyAsciiStr};

use crate::error::EraTableError;
use crate::iso::IsoDate;

/// A single named era with its Gregorian validity window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EraRecord {
    /// Canonical romanized identifier, e.g. `"Reiwa"`.
    pub name: TinyAsciiStr<16>,
    /// Display glyphs, e.g. `"令和"`. Carried for presentation; the
    /// core never computes with it.
    pub kanji: &'static str,
    /// First day of the era (inclusive).
    pub start: IsoDate,
    /// Last day of the era (inclusive), or `None` while the era is
    /// still current.
    pub end: Option<IsoDate>,
}

impl EraRecord {
    /// First calendar year the era touches.
    #[inline]
    pub fn start_year(&self) -> i32 {
        self.start.year
    }

    /// Last calendar year the era touches, or `None` for the current
    /// era.
    #[inline]
    pub fn end_year(&self) -> Option<i32> {
        self.end.map(|end| end.year)
    }

    /// The 1-based era-relative year of `year` ("元年" is year 1), or
    /// `None` when the calendar year precedes the era.
    pub fn year_within(&self, year: i32) -> Option<i32> {
        (year >= self.start.year).then(|| year - self.start.year + 1)
    }

    /// The highest valid era-relative year: the count of calendar
    /// years the era touches, including the boundary year it shares
    /// with its successor. `None` for the open-ended current era.
    pub fn max_year(&self) -> Option<i32> {
        self.end.map(|end| end.year - self.start.year + 1)
    }

    /// Year-granularity containment. Adjacent eras share their
    /// boundary year, so two records can both contain it.
    pub(crate) fn contains_year(&self, year: i32) -> bool {
        year >= self.start.year && self.end.map_or(true, |end| year <= end.year)
    }

    /// Date-granularity containment. Never ambiguous.
    pub(crate) fn contains_date(&self, date: IsoDate) -> bool {
        date >= self.start && self.end.map_or(true, |end| date <= end)
    }
}

macro_rules! era_record {
    ($name:literal, $kanji:literal, ($sy:expr, $sm:expr, $sd:expr), None) => {
        EraRecord {
            name: tinystr!(16, $name),
            kanji: $kanji,
            start: IsoDate::new_unchecked($sy, $sm, $sd),
            end: None,
        }
    };
    ($name:literal, $kanji:literal, ($sy:expr, $sm:expr, $sd:expr), ($ey:expr, $em:expr, $ed:expr)) => {
        EraRecord {
            name: tinystr!(16, $name),
            kanji: $kanji,
            start: IsoDate::new_unchecked($sy, $sm, $sd),
            end: Some(IsoDate::new_unchecked($ey, $em, $ed)),
        }
    };
}

/// The modern eras, newest first. Each era starts on an accession (or
/// the Meiji restoration) and ends the day before its successor
/// starts.
pub(crate) const MODERN_ERAS: &[EraRecord] = &[
    era_record!("Reiwa", "令和", (2019, 5, 1), None),
    era_record!("Heisei", "平成", (1989, 1, 8), (2019, 4, 30)),
    era_record!("Showa", "昭和", (1926, 12, 25), (1989, 1, 7)),
    era_record!("Taisho", "大正", (1912, 7, 30), (1926, 12, 24)),
    era_record!("Meiji", "明治", (1868, 1, 25), (1912, 7, 29)),
];

/// An ordered, immutable set of era records.
///
/// The table is process-wide read-only data; all resolution scans are
/// O(number of eras).
#[derive(Debug, Clone, Copy)]
pub struct EraTable {
    eras: &'static [EraRecord],
}

impl EraTable {
    /// The built-in modern table, Meiji through Reiwa.
    pub const fn modern() -> Self {
        Self { eras: MODERN_ERAS }
    }

    /// Builds a table from caller-supplied records, rejecting any set
    /// that violates the ordering, single-open-era, or abutment
    /// invariants.
    pub fn new(eras: &'static [EraRecord]) -> Result<Self, EraTableError> {
        let table = Self { eras };
        table.validate()?;
        Ok(table)
    }

    /// Newest-first iteration over every record.
    pub fn all_eras(&self) -> impl Iterator<Item = &'static EraRecord> {
        self.eras.iter()
    }

    /// The open-ended current era.
    pub fn current(&self) -> &'static EraRecord {
        // The table is never empty: `modern` is a nonempty constant
        // and `new` rejects empty slices.
        &self.eras[0]
    }

    /// The earliest known era.
    pub fn oldest(&self) -> &'static EraRecord {
        &self.eras[self.eras.len() - 1]
    }

    /// Looks up a record by its romanized name, ASCII
    /// case-insensitively.
    pub fn era_by_name(&self, name: &str) -> Option<&'static EraRecord> {
        self.eras
            .iter()
            .find(|era| era.name.as_str().eq_ignore_ascii_case(name))
    }

    fn validate(&self) -> Result<(), EraTableError> {
        let Some(current) = self.eras.first() else {
            return Err(EraTableError::Empty);
        };
        if current.end.is_some() {
            return Err(EraTableError::ClosedCurrentEra(current.name));
        }
        for pair in self.eras.windows(2) {
            let (newer, older) = (&pair[0], &pair[1]);
            let Some(end) = older.end else {
                return Err(EraTableError::OpenEraNotNewest(older.name));
            };
            if older.start >= newer.start {
                return Err(EraTableError::OutOfOrder {
                    newer: newer.name,
                    older: older.name,
                });
            }
            if end != newer.start.previous_day() {
                return Err(EraTableError::BoundaryGap {
                    older: older.name,
                    end,
                    newer: newer.name,
                    start: newer.start,
                });
            }
        }
        Ok(())
    }
}
