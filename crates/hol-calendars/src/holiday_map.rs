//! Lazy, year-indexed holiday cache.
//!
//! A [`HolidayMap`] pairs a rule set with a [`JurisdictionConfig`] and
//! materializes whole years on demand: the first query touching a year
//! runs the rule set for that year and merges its entries (last write wins).
//! A materialized year is never recomputed unless the `observed` flag
//! changes.
//!
//! The cache uses interior mutability (`RefCell`) so that queries work
//! through `&self`.  A map is therefore single-owner: it is `Send` but not
//! `Sync`, and sharing one across threads requires an external lock around
//! every query.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::ops::RangeInclusive;
use std::sync::Arc;

use hol_core::errors::Result;
use hol_core::{fail, JurisdictionConfig, Year};
use hol_time::Date;
use tracing::{debug, warn};

use crate::holiday::HolidayEntry;
use crate::rule_set::RuleSet;

/// Separator between labels of distinct holidays sharing a date.
pub const LABEL_SEPARATOR: &str = "; ";

/// Years a rule set is run for.  Rules look one year back (in-lieu days of
/// the previous New Year's Eve) and may spill into the next year, so the
/// outermost representable years are left empty.
pub const SUPPORTED_YEARS: RangeInclusive<Year> = (Date::MIN_YEAR + 1)..=(Date::MAX_YEAR - 1);

#[derive(Debug, Default)]
struct YearCache {
    entries: BTreeMap<Date, String>,
    years: BTreeSet<Year>,
}

/// Holidays of one jurisdiction, computed lazily per year.
///
/// ```
/// use std::sync::Arc;
/// use hol_calendars::{HolidayMap, UnitedStatesGovernmentSecurities};
/// use hol_core::JurisdictionConfig;
/// use hol_time::Date;
///
/// let map = HolidayMap::new(
///     Arc::new(UnitedStatesGovernmentSecurities),
///     JurisdictionConfig::default(),
/// )
/// .unwrap();
/// let jan2 = Date::from_ymd(2023, 1, 2).unwrap();
/// assert!(map.contains(jan2));
/// assert_eq!(map.label_of(jan2).as_deref(), Some("New Year's Day (Observed)"));
/// assert!(map.years_materialized().contains(&2023));
/// ```
pub struct HolidayMap {
    rule_set: Arc<dyn RuleSet>,
    config: JurisdictionConfig,
    custom: BTreeMap<Date, String>,
    cache: RefCell<YearCache>,
}

impl std::fmt::Debug for HolidayMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HolidayMap")
            .field("jurisdiction", &self.rule_set.canonical_code())
            .field("config", &self.config)
            .field("years", &self.cache.borrow().years)
            .finish()
    }
}

impl HolidayMap {
    /// Create a map and eagerly materialize `config.years`.
    pub fn new(rule_set: Arc<dyn RuleSet>, config: JurisdictionConfig) -> Result<Self> {
        let map = Self {
            rule_set,
            config,
            custom: BTreeMap::new(),
            cache: RefCell::new(YearCache::default()),
        };
        map.materialize_configured()?;
        Ok(map)
    }

    fn materialize_configured(&self) -> Result<()> {
        for &year in &self.config.years {
            self.materialize(year)?;
        }
        Ok(())
    }

    /// The underlying rule set.
    pub fn rule_set(&self) -> &dyn RuleSet {
        self.rule_set.as_ref()
    }

    /// The configuration in effect.
    pub fn config(&self) -> &JurisdictionConfig {
        &self.config
    }

    /// Whether observed / in-lieu shifting is enabled.
    pub fn observed(&self) -> bool {
        self.config.observed
    }

    // ── Materialization ─────────────────────────────────────────────────────

    /// Compute `year` now if it has not been computed yet.
    ///
    /// Unlike queries, this ignores `config.expand`.  Years outside
    /// [`SUPPORTED_YEARS`] are recorded as materialized without entries.
    pub fn materialize(&self, year: Year) -> Result<()> {
        if self.cache.borrow().years.contains(&year) {
            return Ok(());
        }
        let entries = if SUPPORTED_YEARS.contains(&year) {
            self.rule_set.holidays_for_year(year, &self.config)?
        } else {
            Vec::new()
        };
        debug!(
            jurisdiction = self.rule_set.canonical_code(),
            year,
            entries = entries.len(),
            "materialized holiday year"
        );

        let Ok(mut cache) = self.cache.try_borrow_mut() else {
            fail!(
                "holiday cache of {} is in use during materialization",
                self.rule_set.canonical_code()
            );
        };
        for entry in entries {
            cache.entries.insert(entry.date, entry.label);
        }
        for (date, label) in &self.custom {
            cache.entries.insert(*date, label.clone());
        }
        cache.years.insert(year);
        Ok(())
    }

    /// Lazy path used by queries: honours `expand` and never fails.
    fn ensure_year(&self, year: Year) {
        if !self.config.expand {
            return;
        }
        if let Err(err) = self.materialize(year) {
            warn!(
                jurisdiction = self.rule_set.canonical_code(),
                year,
                error = %err,
                "failed to materialize holiday year"
            );
            if let Ok(mut cache) = self.cache.try_borrow_mut() {
                cache.years.insert(year);
            }
        }
    }

    /// Years computed so far.
    pub fn years_materialized(&self) -> BTreeSet<Year> {
        self.cache.borrow().years.clone()
    }

    // ── Queries ─────────────────────────────────────────────────────────────

    /// Whether `date` is a holiday, materializing its year if needed.
    pub fn contains(&self, date: Date) -> bool {
        self.ensure_year(date.year());
        self.cache.borrow().entries.contains_key(&date)
    }

    /// [`contains`](Self::contains) for an ISO `YYYY-MM-DD` string.
    pub fn contains_str(&self, date: &str) -> Result<bool> {
        Ok(self.contains(date.parse()?))
    }

    /// Label of the holiday on `date`, if any.
    pub fn label_of(&self, date: Date) -> Option<String> {
        self.ensure_year(date.year());
        self.cache.borrow().entries.get(&date).cloned()
    }

    /// Labels on `date`, split on [`LABEL_SEPARATOR`].
    pub fn get_list(&self, date: Date) -> Vec<String> {
        self.label_of(date)
            .map(|label| label.split(LABEL_SEPARATOR).map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Materialized dates whose label contains `name` (case-insensitive).
    pub fn get_named(&self, name: &str) -> Vec<Date> {
        let needle = name.to_lowercase();
        self.cache
            .borrow()
            .entries
            .iter()
            .filter(|(_, label)| label.to_lowercase().contains(&needle))
            .map(|(date, _)| *date)
            .collect()
    }

    /// Holidays in `[from, to]`, materializing every year of the range.
    pub fn range(&self, from: Date, to: Date) -> Vec<HolidayEntry> {
        for year in from.year()..=to.year() {
            self.ensure_year(year);
        }
        if from > to {
            return Vec::new();
        }
        self.cache
            .borrow()
            .entries
            .range(from..=to)
            .map(|(date, label)| HolidayEntry::new(*date, label.clone()))
            .collect()
    }

    /// Snapshot of every materialized holiday, in date order.
    pub fn entries(&self) -> Vec<HolidayEntry> {
        self.cache
            .borrow()
            .entries
            .iter()
            .map(|(date, label)| HolidayEntry::new(*date, label.clone()))
            .collect()
    }

    /// Snapshot as a date → label map.
    pub fn to_map(&self) -> BTreeMap<Date, String> {
        self.cache.borrow().entries.clone()
    }

    /// Number of materialized holidays.
    pub fn len(&self) -> usize {
        self.cache.borrow().entries.len()
    }

    /// `true` when nothing has been materialized.
    pub fn is_empty(&self) -> bool {
        self.cache.borrow().entries.is_empty()
    }

    // ── Mutation ────────────────────────────────────────────────────────────

    /// Add a custom holiday.  Custom entries take precedence over generated
    /// ones and survive cache invalidation.
    pub fn insert(&mut self, date: Date, label: impl Into<String>) {
        let label = label.into();
        self.cache.get_mut().entries.insert(date, label.clone());
        self.custom.insert(date, label);
    }

    /// Toggle observed shifting.  A change drops every cached year; the
    /// configured eager years are recomputed immediately, others on their
    /// next query.
    pub fn set_observed(&mut self, observed: bool) -> Result<()> {
        if self.config.observed == observed {
            return Ok(());
        }
        debug!(
            jurisdiction = self.rule_set.canonical_code(),
            observed, "observed flag changed, invalidating holiday cache"
        );
        self.config.observed = observed;
        *self.cache.get_mut() = YearCache {
            entries: self.custom.clone(),
            years: BTreeSet::new(),
        };
        self.materialize_configured()
    }
}

/// Whether `date` is a holiday in `map`.
pub fn is_holiday(map: &HolidayMap, date: Date) -> bool {
    map.contains(date)
}
