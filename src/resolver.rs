//! Era resolution at year and date granularity.
//!
//! Year granularity is ambiguous by design: adjacent eras share the
//! calendar year of the transition, and the newest-first scan makes
//! the incoming era win. Date granularity partitions the timeline
//! exactly and should be preferred whenever a full date is available.

use crate::era::{EraRecord, EraTable};
use crate::iso::IsoDate;

/// A resolved (era, era-relative year) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EraYear {
    pub era: &'static EraRecord,
    /// 1-based year within the era.
    pub year: i32,
}

impl EraYear {
    /// Whether this is the era's first year, conventionally rendered
    /// "元年" rather than "1年".
    pub fn is_first_year(&self) -> bool {
        self.year == 1
    }
}

/// One side of an era transition: the era together with its first or
/// last day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EraBoundary {
    pub era: &'static EraRecord,
    /// The exact boundary day.
    pub date: IsoDate,
}

/// Advisory attached to conversions whose calendar year touches an
/// era transition. Purely informational: it never blocks a
/// conversion, and rendering is the caller's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionNotice {
    /// The era ending in the year, with its final day.
    pub ending: Option<EraBoundary>,
    /// The era starting in the year, with its first day.
    pub starting: Option<EraBoundary>,
}

impl TransitionNotice {
    /// True when one era ends and another starts in the same year
    /// (the 2019 Heisei/Reiwa case).
    pub fn is_crossover(&self) -> bool {
        self.ending.is_some() && self.starting.is_some()
    }
}

impl EraTable {
    /// Year-granularity resolution: the first era, scanning newest
    /// first, whose year span contains `year`. On a shared boundary
    /// year the era that starts in it wins.
    pub fn era_for_year(&self, year: i32) -> Option<&'static EraRecord> {
        self.all_eras().find(|era| era.contains_year(year))
    }

    /// Date-granularity resolution. Unlike [`EraTable::era_for_year`]
    /// each date belongs to at most one era, so there is no boundary
    /// ambiguity.
    pub fn era_for_date(&self, date: IsoDate) -> Option<&'static EraRecord> {
        self.all_eras().find(|era| era.contains_date(date))
    }

    /// The transition touching `year`, if any: the era ending in it,
    /// the era starting in it, or both.
    pub fn transition_notice(&self, year: i32) -> Option<TransitionNotice> {
        let starting = self
            .all_eras()
            .find(|era| era.start.year == year)
            .map(|era| EraBoundary {
                era,
                date: era.start,
            });
        let ending = self.all_eras().find_map(|era| {
            let end = era.end?;
            (end.year == year).then_some(EraBoundary { era, date: end })
        });
        if starting.is_none() && ending.is_none() {
            return None;
        }
        Some(TransitionNotice { ending, starting })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: i32, day: i32) -> IsoDate {
        IsoDate::try_new(year, month, day).unwrap()
    }

    #[test]
    fn every_year_since_meiji_resolves() {
        let table = EraTable::modern();
        for year in 1868..=2100 {
            let era = table.era_for_year(year).unwrap();
            assert!(era.year_within(year).unwrap() >= 1, "year {year}");
        }
    }

    #[test]
    fn boundary_years_resolve_to_the_newer_era() {
        let table = EraTable::modern();
        let cases = [
            (2019, "Reiwa"),
            (1989, "Heisei"),
            (1926, "Showa"),
            (1912, "Taisho"),
            (1868, "Meiji"),
        ];
        for (year, name) in cases {
            assert_eq!(
                table.era_for_year(year).unwrap().name.as_str(),
                name,
                "year {year}"
            );
        }
    }

    #[test]
    fn date_resolution_is_unambiguous_at_boundaries() {
        let table = EraTable::modern();
        let cases = [
            (date(2019, 4, 30), "Heisei"),
            (date(2019, 5, 1), "Reiwa"),
            (date(1989, 1, 7), "Showa"),
            (date(1989, 1, 8), "Heisei"),
            (date(1926, 12, 24), "Taisho"),
            (date(1926, 12, 25), "Showa"),
            (date(1912, 7, 29), "Meiji"),
            (date(1912, 7, 30), "Taisho"),
        ];
        for (day, name) in cases {
            assert_eq!(table.era_for_date(day).unwrap().name.as_str(), name, "{day}");
        }
    }

    #[test]
    fn nothing_resolves_before_meiji() {
        let table = EraTable::modern();
        assert!(table.era_for_year(1867).is_none());
        assert!(table.era_for_date(date(1868, 1, 24)).is_none());
        assert_eq!(
            table.era_for_date(date(1868, 1, 25)).unwrap().name.as_str(),
            "Meiji"
        );
    }

    #[test]
    fn crossover_notice_names_both_eras_and_their_days() {
        let table = EraTable::modern();
        let notice = table.transition_notice(2019).unwrap();
        assert!(notice.is_crossover());
        let ending = notice.ending.unwrap();
        let starting = notice.starting.unwrap();
        assert_eq!(ending.era.name.as_str(), "Heisei");
        assert_eq!(ending.date, date(2019, 4, 30));
        assert_eq!(starting.era.name.as_str(), "Reiwa");
        assert_eq!(starting.date, date(2019, 5, 1));
    }

    #[test]
    fn meiji_start_is_a_single_sided_notice() {
        // No era ends in 1868, so only the starting side is present.
        let notice = EraTable::modern().transition_notice(1868).unwrap();
        assert!(!notice.is_crossover());
        assert!(notice.ending.is_none());
        assert_eq!(notice.starting.unwrap().era.name.as_str(), "Meiji");
    }

    #[test]
    fn ordinary_years_carry_no_notice() {
        let table = EraTable::modern();
        for year in [1900, 2000, 2024] {
            assert!(table.transition_notice(year).is_none(), "year {year}");
        }
    }
}
