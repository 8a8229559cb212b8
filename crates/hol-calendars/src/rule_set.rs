//! The `RuleSet` capability and special-holiday tables.
//!
//! A rule set turns a year into the ordered list of holidays for one
//! jurisdiction.  Rule sets never hold mutable state: the lazy cache lives
//! in [`HolidayMap`](crate::HolidayMap), which merges the returned entries
//! under last-write-wins precedence.

use hol_core::errors::Result;
use hol_core::{JurisdictionConfig, Year};
use hol_time::Date;

use crate::holiday::HolidayEntry;
use crate::observed::ObservedPolicy;

/// Whether a rule set describes a country or a financial market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum JurisdictionKind {
    /// Public holidays of a country.
    Country,
    /// Closures of a financial market.
    FinancialMarket,
}

/// Holiday rules for one jurisdiction.
pub trait RuleSet: Send + Sync + std::fmt::Debug {
    /// Human-readable jurisdiction name.
    fn name(&self) -> &str;

    /// Codes resolving to this rule set; the first one is canonical.
    fn codes(&self) -> &'static [&'static str];

    /// Country or financial market.
    fn kind(&self) -> JurisdictionKind {
        JurisdictionKind::Country
    }

    /// One-off historical holidays, applied before the generic rules.
    fn special_holidays(&self) -> SpecialHolidayTable {
        SpecialHolidayTable::EMPTY
    }

    /// Generic rules for `year`, in application order.
    ///
    /// Years the jurisdiction has no rules for yield an empty list.
    fn populate_year(&self, year: Year, config: &JurisdictionConfig) -> Result<Vec<HolidayEntry>>;

    /// Everything for `year`: special entries first, then the generic rules,
    /// so that a generic rule wins a date collision.
    fn holidays_for_year(&self, year: Year, config: &JurisdictionConfig) -> Result<Vec<HolidayEntry>> {
        let mut entries = self.special_holidays().entries_for(year)?;
        entries.extend(self.populate_year(year, config)?);
        Ok(entries)
    }

    /// Canonical code.
    fn canonical_code(&self) -> &'static str {
        self.codes().first().copied().unwrap_or_default()
    }
}

/// Static year → `(month, day, label)` overrides.
///
/// Each row lists one year and its one-off holidays in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialHolidayTable(pub &'static [(Year, &'static [(u8, u8, &'static str)])]);

impl SpecialHolidayTable {
    /// A table without entries.
    pub const EMPTY: SpecialHolidayTable = SpecialHolidayTable(&[]);

    /// Entries recorded for `year`, in table order.
    pub fn entries_for(&self, year: Year) -> Result<Vec<HolidayEntry>> {
        let mut entries = Vec::new();
        for (_, days) in self.0.iter().filter(|(y, _)| *y == year) {
            for &(month, day, label) in days.iter() {
                entries.push(HolidayEntry::new(Date::from_ymd(year, month, day)?, label));
            }
        }
        Ok(entries)
    }

    /// Years with at least one entry.
    pub fn years(&self) -> impl Iterator<Item = Year> + '_ {
        self.0.iter().map(|(year, _)| *year)
    }
}

/// Ordered accumulator for the entries of one year.
///
/// Rule sets push entries in application order; observed variants go
/// through [`add_observed`](Self::add_observed) so that the jurisdiction's
/// `observed` flag is honoured uniformly.
#[derive(Debug)]
pub struct YearBuilder {
    year: Year,
    observed: bool,
    entries: Vec<HolidayEntry>,
}

impl YearBuilder {
    /// Start collecting `year` under `config`.
    pub fn new(year: Year, config: &JurisdictionConfig) -> Self {
        Self {
            year,
            observed: config.observed,
            entries: Vec::new(),
        }
    }

    /// The year being populated.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Whether observed shifting is enabled.
    pub fn observed(&self) -> bool {
        self.observed
    }

    /// `year`-`month`-`day`.
    pub fn date(&self, month: u8, day: u8) -> Result<Date> {
        Date::from_ymd(self.year, month, day)
    }

    /// Append a plain entry.
    pub fn add(&mut self, date: Date, label: impl Into<String>) {
        self.entries.push(HolidayEntry::new(date, label));
    }

    /// Append a fixed-date entry in the current year.
    pub fn add_fixed(&mut self, month: u8, day: u8, label: impl Into<String>) -> Result<()> {
        let date = self.date(month, day)?;
        self.add(date, label);
        Ok(())
    }

    /// Append `date` and whatever substitute `policy` assigns it.
    ///
    /// Returns the day the holiday is observed on: the substitute when one
    /// was added, otherwise `date`.
    pub fn add_observed(&mut self, policy: &ObservedPolicy, date: Date, label: &str) -> Date {
        let entries = policy.apply(self.year, date, label, self.observed);
        let observed_on = entries.last().map_or(date, |e| e.date);
        self.entries.extend(entries);
        observed_on
    }

    /// Entries collected so far.
    pub fn entries(&self) -> &[HolidayEntry] {
        &self.entries
    }

    /// Finish, returning the entries in application order.
    pub fn finish(self) -> Vec<HolidayEntry> {
        self.entries
    }
}
