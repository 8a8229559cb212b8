//! # hol-calendars
//!
//! The holiday rule engine: per-jurisdiction rule sets, the observed-date
//! shift policy they are parameterized with, the lazily materialized
//! [`HolidayMap`], and the code → rule-set [`Registry`].
//!
//! Rule sets are pure: [`RuleSet::populate_year`] returns the ordered entries
//! for one year and the map merges them with last-write-wins precedence.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Country rule sets.
pub mod countries;

/// Financial-market rule sets.
pub mod financial;

/// `HolidayEntry`, a dated, labelled holiday.
pub mod holiday;

/// Lazy, year-indexed holiday cache.
pub mod holiday_map;

/// Union view over several holiday maps.
pub mod joint_holidays;

/// Observed / in-lieu date shifting.
pub mod observed;

/// Jurisdiction code registry.
pub mod registry;

/// `RuleSet` trait and special-holiday tables.
pub mod rule_set;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use countries::{HongKong, Hungary, Mozambique, Thailand};
pub use financial::UnitedStatesGovernmentSecurities;
pub use holiday::HolidayEntry;
pub use holiday_map::{is_holiday, HolidayMap};
pub use joint_holidays::JointHolidays;
pub use observed::{ObservedPolicy, RawDate, Shift, ShiftLabel};
pub use registry::Registry;
pub use rule_set::{JurisdictionKind, RuleSet, SpecialHolidayTable, YearBuilder};
