//! Observed-date shift policy.
//!
//! A holiday falling on a weekend (or, in some jurisdictions, next to one)
//! may earn a substitute day off.  The rules differ by jurisdiction, by
//! legislative era and sometimes by individual holiday, so the engine only
//! supplies the mechanism: an [`ObservedPolicy`] is a per-weekday table of
//! [`Shift`]s, gated by year ranges, plus a choice of what happens to the
//! raw date.  Each rule set builds the policies it needs.
//!
//! ```
//! use hol_calendars::observed::{ObservedPolicy, RawDate, ShiftLabel};
//! use hol_time::{Date, Weekday};
//!
//! // Saturday → preceding Friday, Sunday → following Monday.
//! let policy = ObservedPolicy::new(RawDate::ReplaceWhenShifted)
//!     .shift(Weekday::Saturday, -1, ShiftLabel::Suffix(" (Observed)"))
//!     .shift(Weekday::Sunday, 1, ShiftLabel::Suffix(" (Observed)"));
//!
//! let sunday = Date::from_ymd(2023, 1, 1).unwrap();
//! let entries = policy.apply(2023, sunday, "New Year's Day", true);
//! assert_eq!(entries.len(), 1);
//! assert_eq!(entries[0].date.to_string(), "2023-01-02");
//! assert_eq!(entries[0].label, "New Year's Day (Observed)");
//! ```

use std::ops::RangeInclusive;

use hol_core::Year;
use hol_time::{Date, Weekday};
use tracing::trace;

use crate::holiday::HolidayEntry;

/// How the label of a substitute date is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftLabel {
    /// Append to the original label, e.g. `" (in lieu)"`.
    Suffix(&'static str),
    /// Put text before the original label, e.g. `"The day following "`.
    Prefix(&'static str),
    /// Use a fixed label regardless of the original one.
    Replace(&'static str),
}

impl ShiftLabel {
    /// Apply to `label`.
    pub fn apply(&self, label: &str) -> String {
        match self {
            ShiftLabel::Suffix(suffix) => format!("{label}{suffix}"),
            ShiftLabel::Prefix(prefix) => format!("{prefix}{label}"),
            ShiftLabel::Replace(fixed) => (*fixed).to_string(),
        }
    }
}

/// A substitute day: `days` away from the raw date (negative = earlier).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shift {
    /// Signed offset from the raw date.
    pub days: i32,
    /// Label of the substitute entry.
    pub label: ShiftLabel,
}

/// What becomes of the raw holiday date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawDate {
    /// The raw date is always a holiday; a shift adds a second entry.
    Keep,
    /// A shift moves the holiday; the raw date is dropped when shifted.
    ReplaceWhenShifted,
    /// Only the substitute is produced; nothing when no shift triggers.
    /// Used for stand-alone in-lieu rules whose raw holiday is emitted
    /// elsewhere.
    Omit,
}

/// Per-weekday shift table, active in a set of eras.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservedPolicy {
    raw: RawDate,
    shifts: [Option<Shift>; 7],
    eras: Vec<RangeInclusive<Year>>,
}

impl ObservedPolicy {
    /// An empty policy (no shifts, active in every year).
    pub fn new(raw: RawDate) -> Self {
        Self {
            raw,
            shifts: [None; 7],
            eras: Vec::new(),
        }
    }

    /// Holidays on `weekday` get a substitute `days` away.
    pub fn shift(mut self, weekday: Weekday, days: i32, label: ShiftLabel) -> Self {
        self.shifts[weekday.index()] = Some(Shift { days, label });
        self
    }

    /// Remove the shift for `weekday`.
    pub fn without(mut self, weekday: Weekday) -> Self {
        self.shifts[weekday.index()] = None;
        self
    }

    /// Restrict the policy to `years`.  Repeated calls add further eras.
    pub fn during(mut self, years: RangeInclusive<Year>) -> Self {
        self.eras.push(years);
        self
    }

    /// Restrict the policy to `year` onwards.
    pub fn since(self, year: Year) -> Self {
        self.during(year..=Year::MAX)
    }

    /// Whether shifting applies in `year`.
    pub fn is_active(&self, year: Year) -> bool {
        self.eras.is_empty() || self.eras.iter().any(|era| era.contains(&year))
    }

    /// The shift triggered by `date`'s weekday, if any.
    pub fn shift_for(&self, date: Date) -> Option<Shift> {
        self.shifts[date.weekday().index()]
    }

    /// Entries for a holiday on `raw` labelled `label`, populated as part of
    /// `year`.
    ///
    /// `observed` is the jurisdiction's flag: when `false`, or when `year`
    /// lies outside the policy's eras, no shift happens.  The result is
    /// complete for this raw date; shifted dates are never re-examined.
    pub fn apply(&self, year: Year, raw: Date, label: &str, observed: bool) -> Vec<HolidayEntry> {
        let shift = if observed && self.is_active(year) {
            self.shift_for(raw)
        } else {
            None
        };
        let Some(shift) = shift else {
            return match self.raw {
                RawDate::Omit => Vec::new(),
                RawDate::Keep | RawDate::ReplaceWhenShifted => {
                    vec![HolidayEntry::new(raw, label)]
                }
            };
        };

        let substitute = HolidayEntry::new(raw + shift.days, shift.label.apply(label));
        trace!(raw = %raw, observed = %substitute.date, label, "observed shift");
        match self.raw {
            RawDate::Keep => vec![HolidayEntry::new(raw, label), substitute],
            RawDate::ReplaceWhenShifted | RawDate::Omit => vec![substitute],
        }
    }
}
