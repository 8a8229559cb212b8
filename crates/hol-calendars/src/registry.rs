//! Jurisdiction code registry.
//!
//! Maps country and market codes (case-insensitive) to rule sets.  The
//! built-in rule sets are available through the process-wide
//! [`Registry::global`] instance.
//!
//! ```
//! use hol_calendars::Registry;
//!
//! let holidays = Registry::global().get_holidays("USGS", [2023], true).unwrap();
//! let first = holidays.iter().next().unwrap();
//! assert_eq!(first.0.to_string(), "2023-01-02");
//! assert_eq!(first.1, "New Year's Day (Observed)");
//! ```

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, OnceLock};

use hol_core::errors::{Error, Result};
use hol_core::{JurisdictionConfig, Year};
use hol_time::Date;
use tracing::warn;

use crate::countries::{HongKong, Hungary, Mozambique, Thailand};
use crate::financial::UnitedStatesGovernmentSecurities;
use crate::holiday_map::HolidayMap;
use crate::rule_set::{JurisdictionKind, RuleSet};

/// Code → rule set lookup.
#[derive(Debug, Default)]
pub struct Registry {
    rule_sets: Vec<Arc<dyn RuleSet>>,
    by_code: HashMap<String, usize>,
}

static GLOBAL: OnceLock<Registry> = OnceLock::new();

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in rule set.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(HongKong::new()));
        registry.register(Arc::new(Hungary));
        registry.register(Arc::new(Mozambique));
        registry.register(Arc::new(Thailand::new()));
        registry.register(Arc::new(UnitedStatesGovernmentSecurities));
        registry
    }

    /// The process-wide registry of built-in rule sets.
    pub fn global() -> &'static Registry {
        GLOBAL.get_or_init(Registry::with_builtin)
    }

    /// Register `rule_set` under all of its codes.
    ///
    /// A code already taken is re-pointed to the new rule set.
    pub fn register(&mut self, rule_set: Arc<dyn RuleSet>) {
        let index = self.rule_sets.len();
        for code in rule_set.codes() {
            let key = code.to_ascii_uppercase();
            if let Some(previous) = self.by_code.insert(key, index) {
                warn!(
                    code,
                    previous = self.rule_sets[previous].name(),
                    replacement = rule_set.name(),
                    "jurisdiction code registered twice"
                );
            }
        }
        self.rule_sets.push(rule_set);
    }

    /// The rule set registered under `code`.
    ///
    /// # Errors
    /// [`Error::UnknownJurisdiction`] if no rule set has that code.
    pub fn rule_set(&self, code: &str) -> Result<Arc<dyn RuleSet>> {
        match self.by_code.get(&code.to_ascii_uppercase()) {
            Some(&index) => Ok(Arc::clone(&self.rule_sets[index])),
            None => {
                warn!(code, "unknown jurisdiction code");
                Err(Error::UnknownJurisdiction(code.to_string()))
            }
        }
    }

    /// A fresh holiday map for `code` under `config`.
    pub fn holiday_map(&self, code: &str, config: JurisdictionConfig) -> Result<HolidayMap> {
        HolidayMap::new(self.rule_set(code)?, config)
    }

    /// All holidays of `code` in `years`, ordered by date.
    pub fn get_holidays(
        &self,
        code: &str,
        years: impl IntoIterator<Item = Year>,
        observed: bool,
    ) -> Result<BTreeMap<Date, String>> {
        let config = JurisdictionConfig::new()
            .with_observed(observed)
            .with_years(years);
        Ok(self.holiday_map(code, config)?.to_map())
    }

    /// Whether `date` is a holiday in `code` (observed rules applied).
    pub fn is_holiday(&self, code: &str, date: Date) -> Result<bool> {
        let map = self.holiday_map(code, JurisdictionConfig::default())?;
        Ok(map.contains(date))
    }

    /// Countries: canonical code → every code.
    pub fn supported_countries(&self) -> BTreeMap<&'static str, Vec<&'static str>> {
        self.supported(JurisdictionKind::Country)
    }

    /// Financial markets: canonical code → every code.
    pub fn supported_financial(&self) -> BTreeMap<&'static str, Vec<&'static str>> {
        self.supported(JurisdictionKind::FinancialMarket)
    }

    fn supported(&self, kind: JurisdictionKind) -> BTreeMap<&'static str, Vec<&'static str>> {
        self.rule_sets
            .iter()
            .filter(|r| r.kind() == kind)
            .map(|r| (r.canonical_code(), r.codes().to_vec()))
            .collect()
    }

    /// Every registered code, sorted.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.by_code.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}
