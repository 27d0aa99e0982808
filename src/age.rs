//! Whole-year age computation with era-at-birth annotation.

use crate::era::EraTable;
use crate::error::ConversionError;
use crate::iso::IsoDate;
use crate::resolver::EraYear;
use crate::ConversionResult;

/// Age in completed years on the reference date, with the era
/// covering the birth date when it falls within the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeResult {
    pub age: i32,
    /// `None` when the birth date precedes the earliest era.
    pub era_at_birth: Option<EraYear>,
}

pub(crate) fn age_on(
    table: &EraTable,
    birth_year: i32,
    birth_month: i32,
    birth_day: i32,
    reference: IsoDate,
) -> ConversionResult<AgeResult> {
    let birth = IsoDate::try_new(birth_year, birth_month, birth_day)?;
    if birth > reference {
        return Err(ConversionError::BirthDateInFuture { birth, reference });
    }
    let mut age = reference.year - birth.year;
    // Not yet had the birthday this year.
    if (reference.month, reference.day) < (birth.month, birth.day) {
        age -= 1;
    }
    // Date granularity: the birth era is never ambiguous, even on a
    // transition day.
    let era_at_birth = table.era_for_date(birth).and_then(|era| {
        era.year_within(birth.year).map(|year| EraYear { era, year })
    });
    Ok(AgeResult { age, era_at_birth })
}
