//! The bidirectional year converter.
//!
//! Both directions are pure with respect to the era table; the only
//! state a `Converter` holds besides the table is a cooperative
//! re-entrancy latch. Callers that wire one direction's output into
//! the other direction's input (the usual two-field UI) would
//! otherwise trigger themselves endlessly; a nested call observes the
//! latch and reports [`Outcome::Suppressed`] instead of converting.

use core::cell::Cell;

use log::{debug, warn};

use crate::age::{self, AgeResult};
use crate::era::EraTable;
use crate::error::ConversionError;
use crate::iso::IsoDate;
use crate::resolver::{EraYear, TransitionNotice};
use crate::ConversionResult;

/// Outcome of a single conversion call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The conversion succeeded, possibly touching an era transition.
    Converted {
        value: T,
        notice: Option<TransitionNotice>,
    },
    /// The input was blank. A valid transient state, not an error.
    Empty,
    /// The converter was re-entered while a conversion was running;
    /// the nested call was ignored.
    Suppressed,
}

/// Bidirectional converter between Western calendar years and
/// era-relative years over an [`EraTable`].
#[derive(Debug)]
pub struct Converter {
    table: EraTable,
    converting: Cell<bool>,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    /// A converter over the built-in modern table.
    pub fn new() -> Self {
        Self::with_table(EraTable::modern())
    }

    pub fn with_table(table: EraTable) -> Self {
        Self {
            table,
            converting: Cell::new(false),
        }
    }

    pub fn table(&self) -> &EraTable {
        &self.table
    }

    /// Converts a raw Western-year input to an (era, era year) pair.
    ///
    /// Blank input is a no-op. Malformed input fails with
    /// [`ConversionError::InvalidYear`]; years before the earliest
    /// era fail with [`ConversionError::YearTooEarly`]. On a shared
    /// boundary year the era starting in it wins, and the result
    /// carries a [`TransitionNotice`] naming both sides.
    pub fn western_to_era(&self, input: &str) -> ConversionResult<Outcome<EraYear>> {
        let Some(_guard) = ReentryGuard::acquire(&self.converting) else {
            return Ok(Outcome::Suppressed);
        };
        let input = input.trim();
        if input.is_empty() {
            return Ok(Outcome::Empty);
        }
        let year: i32 = input
            .parse()
            .map_err(|_| ConversionError::InvalidYear(input.to_owned()))?;
        let earliest_start_year = self.table.oldest().start_year();
        if year < earliest_start_year {
            return Err(ConversionError::YearTooEarly {
                year,
                earliest_start_year,
            });
        }
        let Some(era) = self.table.era_for_year(year) else {
            // Unreachable with an intact table: the current era is
            // open-ended and the minimum-year check already ran.
            warn!("era table covers no era for year {year}");
            return Err(ConversionError::NoEraForYear(year));
        };
        let era_year = year - era.start_year() + 1;
        debug!("{year} resolved to {} {era_year}", era.name);
        Ok(Outcome::Converted {
            value: EraYear {
                era,
                year: era_year,
            },
            notice: self.table.transition_notice(year),
        })
    }

    /// Converts an era name and a raw era-year input to a Western
    /// calendar year.
    ///
    /// Blank input is a no-op. Era years are 1-based; zero, negative,
    /// and malformed inputs fail with
    /// [`ConversionError::InvalidEraYear`], as do era years of the
    /// current era whose Western year would not fit in an `i32`. For
    /// closed eras the year is checked against the era's span,
    /// counting the boundary year shared with the successor.
    pub fn era_to_western(&self, era_name: &str, input: &str) -> ConversionResult<Outcome<i32>> {
        let Some(_guard) = ReentryGuard::acquire(&self.converting) else {
            return Ok(Outcome::Suppressed);
        };
        let input = input.trim();
        if input.is_empty() {
            return Ok(Outcome::Empty);
        }
        let era_year: i32 = input
            .parse()
            .map_err(|_| ConversionError::InvalidEraYear(input.to_owned()))?;
        if era_year <= 0 {
            return Err(ConversionError::InvalidEraYear(input.to_owned()));
        }
        let era = self
            .table
            .era_by_name(era_name)
            .ok_or_else(|| ConversionError::EraNotFound(era_name.to_owned()))?;
        if let Some(max_year) = era.max_year() {
            if era_year > max_year {
                return Err(ConversionError::EraYearOutOfRange {
                    era: era.name,
                    year: era_year,
                    max_year,
                });
            }
        }
        // The current era has no upper bound, so a huge era year can
        // push past i32; reject it rather than wrap.
        let Some(western_year) = era.start_year().checked_add(era_year - 1) else {
            return Err(ConversionError::InvalidEraYear(input.to_owned()));
        };
        debug!("{} {era_year} resolved to {western_year}", era.name);
        Ok(Outcome::Converted {
            value: western_year,
            notice: self.table.transition_notice(western_year),
        })
    }

    /// Whole-year age on `reference` for a birth on the given
    /// (year, month, day), annotated with the era covering the birth
    /// date when the table has one.
    pub fn age_at(
        &self,
        birth_year: i32,
        birth_month: i32,
        birth_day: i32,
        reference: IsoDate,
    ) -> ConversionResult<AgeResult> {
        age::age_on(&self.table, birth_year, birth_month, birth_day, reference)
    }
}

/// Scoped re-entrancy latch. `acquire` fails while another guard is
/// live, and the flag clears on drop, so every exit path (including
/// `?`) releases it.
struct ReentryGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> ReentryGuard<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.get() {
            return None;
        }
        flag.set(true);
        Some(Self { flag })
    }
}

impl Drop for ReentryGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}
