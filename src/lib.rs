//! Conversion between Western (Gregorian) calendar years and Japanese
//! era (wareki) years, covering the modern eras (Meiji onward).
//!
//! ```rust
//! use wareki_rs::{Converter, Outcome};
//!
//! let converter = Converter::new();
//!
//! // 2019 is the Heisei/Reiwa crossover year; at year granularity it
//! // resolves to the era that starts in it, with an advisory notice
//! // naming both sides of the transition.
//! let Ok(Outcome::Converted { value, notice }) = converter.western_to_era("2019") else {
//!     unreachable!();
//! };
//! assert_eq!(value.era.name.as_str(), "Reiwa");
//! assert_eq!(value.year, 1);
//! assert!(notice.is_some());
//!
//! // The reverse direction validates against the era's span.
//! let Ok(Outcome::Converted { value, .. }) = converter.era_to_western("Heisei", "31") else {
//!     unreachable!();
//! };
//! assert_eq!(value, 2019);
//! assert!(converter.era_to_western("Heisei", "32").is_err());
//! ```
//!
//! The era table is immutable, ordered newest-first, and validated
//! against its ordering and abutment invariants when built from
//! caller-supplied records. Resolution is available at year
//! granularity (where adjacent eras deliberately share the transition
//! year) and at date granularity (which is exact and preferred for
//! age calculation).
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]

pub mod age;
pub mod converter;
pub mod era;
pub mod error;
pub mod iso;
pub mod resolver;

pub(crate) mod utils;

pub use age::AgeResult;
pub use converter::{Converter, Outcome};
pub use era::{EraRecord, EraTable};
pub use error::{ConversionError, EraTableError};
pub use iso::{days_in_month, IsoDate};
pub use resolver::{EraBoundary, EraYear, TransitionNotice};

/// The conversion result type.
pub type ConversionResult<T> = Result<T, ConversionError>;
