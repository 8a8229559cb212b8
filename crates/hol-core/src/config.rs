//! Per-jurisdiction configuration.
//!
//! A [`JurisdictionConfig`] is handed to every rule set when it populates a
//! year.  It is immutable from the rule set's point of view; holiday maps
//! own a copy and invalidate their cache when the `observed` flag changes.

use std::collections::BTreeSet;

use crate::Year;

/// Configuration held by a jurisdiction instance.
///
/// # Example
/// ```
/// use hol_core::JurisdictionConfig;
///
/// let cfg = JurisdictionConfig::default()
///     .with_observed(false)
///     .with_years(2020..=2022);
/// assert!(!cfg.observed);
/// assert_eq!(cfg.years.len(), 3);
/// assert!(cfg.expand);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct JurisdictionConfig {
    /// Whether weekend / clash shifting rules ("observed", "in lieu") apply.
    pub observed: bool,
    /// Years materialized eagerly when a holiday map is constructed.
    pub years: BTreeSet<Year>,
    /// Whether queries for not-yet-materialized years grow the cache.
    pub expand: bool,
}

impl Default for JurisdictionConfig {
    fn default() -> Self {
        Self {
            observed: true,
            years: BTreeSet::new(),
            expand: true,
        }
    }
}

impl JurisdictionConfig {
    /// Create the default configuration (`observed = true`, no eager years,
    /// lazy expansion enabled).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `observed` flag.
    pub fn with_observed(mut self, observed: bool) -> Self {
        self.observed = observed;
        self
    }

    /// Add years to materialize eagerly.
    pub fn with_years(mut self, years: impl IntoIterator<Item = Year>) -> Self {
        self.years.extend(years);
        self
    }

    /// Enable or disable lazy expansion to new years.
    pub fn with_expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }
}
