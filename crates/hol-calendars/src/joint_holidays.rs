//! Joint holidays: the union of several holiday maps.

use hol_core::errors::{Error, Result};
use hol_time::Date;

use crate::holiday_map::{HolidayMap, LABEL_SEPARATOR};

/// A view combining several [`HolidayMap`]s.
///
/// A date is a holiday when any member has it; its label joins the distinct
/// member labels with `"; "`, in member order.
pub struct JointHolidays {
    maps: Vec<HolidayMap>,
    name: String,
}

impl std::fmt::Debug for JointHolidays {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JointHolidays")
            .field("name", &self.name)
            .finish()
    }
}

impl JointHolidays {
    /// Combine `maps`.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `maps` is empty.
    pub fn new(maps: Vec<HolidayMap>) -> Result<Self> {
        if maps.is_empty() {
            return Err(Error::InvalidArgument(
                "joint holidays need at least one member".into(),
            ));
        }
        let name = maps
            .iter()
            .map(|m| m.rule_set().canonical_code())
            .collect::<Vec<_>>()
            .join(" + ");
        Ok(Self { maps, name })
    }

    /// Member codes joined with `" + "`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The member maps.
    pub fn members(&self) -> &[HolidayMap] {
        &self.maps
    }

    /// Whether any member has a holiday on `date`.
    pub fn contains(&self, date: Date) -> bool {
        // No short-circuit: every member materializes the year.
        let mut found = false;
        for map in &self.maps {
            found |= map.contains(date);
        }
        found
    }

    /// Combined label on `date`.
    pub fn label_of(&self, date: Date) -> Option<String> {
        let labels = self.get_list(date);
        (!labels.is_empty()).then(|| labels.join(LABEL_SEPARATOR))
    }

    /// Distinct labels on `date`, in member order.
    pub fn get_list(&self, date: Date) -> Vec<String> {
        let mut labels: Vec<String> = Vec::new();
        for label in self.maps.iter().flat_map(|m| m.get_list(date)) {
            if !labels.contains(&label) {
                labels.push(label);
            }
        }
        labels
    }
}
