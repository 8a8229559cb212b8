//! `HolidayEntry`: one (date, label) pair produced by a rule set.

use hol_time::Date;

/// A holiday on a given date.
///
/// A date carries exactly one label inside a holiday map; when several
/// rules emit the same date the entry merged last wins.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HolidayEntry {
    /// The calendar date.
    pub date: Date,
    /// Human-readable name, in the jurisdiction's own language.
    pub label: String,
}

impl HolidayEntry {
    /// Create an entry.
    pub fn new(date: Date, label: impl Into<String>) -> Self {
        Self {
            date,
            label: label.into(),
        }
    }
}

impl std::fmt::Display for HolidayEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.date, self.label)
    }
}
