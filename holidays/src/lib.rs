//! # holidays
//!
//! Public and financial-market holiday calendars computed from rules.
//!
//! This crate is a **façade** that re-exports the workspace crates and adds
//! code-based shortcuts over the built-in [`Registry`].
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! holidays = "0.1"
//! ```
//!
//! ```rust
//! use holidays::time::Date;
//!
//! let hu = holidays::get_holidays("HU", [2023], true).unwrap();
//! let national_day = Date::from_ymd(2023, 3, 15).unwrap();
//! assert_eq!(hu[&national_day], "Nemzeti ünnep");
//!
//! assert!(holidays::is_holiday("TH", national_day).is_ok_and(|h| !h));
//! assert!(holidays::get_holidays("XX", [2023], true).is_err());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::collections::BTreeMap;

/// Error definitions and jurisdiction configuration.
pub use hol_core as core;

/// Dates, weekdays, Easter and the Thai lunisolar calendar.
pub use hol_time as time;

/// Rule sets, holiday maps and the code registry.
pub use hol_calendars as calendars;

pub use hol_calendars::{HolidayMap, JointHolidays, Registry, RuleSet};
pub use hol_core::{Error, JurisdictionConfig, Result};

/// All holidays of `code` in `years`, ordered by date.
///
/// # Errors
/// [`Error::UnknownJurisdiction`] if `code` is not registered.
pub fn get_holidays(
    code: &str,
    years: impl IntoIterator<Item = hol_core::Year>,
    observed: bool,
) -> Result<BTreeMap<time::Date, String>> {
    Registry::global().get_holidays(code, years, observed)
}

/// A lazily populated holiday map for `code`.
pub fn holiday_map(code: &str, config: JurisdictionConfig) -> Result<HolidayMap> {
    Registry::global().holiday_map(code, config)
}

/// Whether `date` is a holiday in `code`, with observed rules applied.
pub fn is_holiday(code: &str, date: time::Date) -> Result<bool> {
    Registry::global().is_holiday(code, date)
}
