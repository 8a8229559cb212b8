//! US government securities market closures, per the SIFMA recommended
//! holiday schedule.
//!
//! Holidays:
//! * New Year's Day (no closure when it falls on a Saturday)
//! * Martin Luther King Jr. Day (3rd Monday in January, from 1986)
//! * Washington's Birthday (Feb 22 until 1970, then 3rd Monday in February)
//! * Good Friday, except when the Employment Situation report is released
//! * Memorial Day (May 30 until 1970, then last Monday in May)
//! * Juneteenth National Independence Day (from 2021)
//! * Independence Day
//! * Labor Day (1st Monday in September)
//! * Columbus Day (Oct 12)
//! * Veteran's Day (no closure when it falls on a Saturday)
//! * Thanksgiving Day (4th Thursday in November)
//! * Christmas Day
//!
//! Observed dates move a Saturday holiday to the Friday before and a
//! Sunday holiday to the Monday after.

use hol_core::errors::Result;
use hol_core::{JurisdictionConfig, Year};
use hol_time::{easter_sunday, Date, Weekday};

use crate::holiday::HolidayEntry;
use crate::observed::{ObservedPolicy, RawDate, ShiftLabel};
use crate::rule_set::{JurisdictionKind, RuleSet, YearBuilder};

const OBSERVED: ShiftLabel = ShiftLabel::Suffix(" (Observed)");

/// One-off market closures, applied after the regular schedule.
const CLOSURES: &[(Year, u8, u8, &str)] = &[
    (2012, 10, 30, "Hurricane Sandy"),
    (2018, 12, 5, "Death of George H.W. Bush"),
];

/// United States government securities market (SIFMA).
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitedStatesGovernmentSecurities;

impl UnitedStatesGovernmentSecurities {
    fn observed_policy() -> ObservedPolicy {
        ObservedPolicy::new(RawDate::ReplaceWhenShifted)
            .shift(Weekday::Saturday, -1, OBSERVED)
            .shift(Weekday::Sunday, 1, OBSERVED)
    }

    /// The Friday the Employment Situation report for March comes out:
    /// three weeks after the reference week containing the 12th.
    fn employment_report_friday(year: Year) -> Result<Date> {
        let reference = Date::from_ymd(year, 3, 12)?;
        Ok((reference + 21).weekday_on_or_after(Weekday::Friday))
    }
}

impl RuleSet for UnitedStatesGovernmentSecurities {
    fn name(&self) -> &str {
        "United States Government Securities"
    }

    fn codes(&self) -> &'static [&'static str] {
        &["USGS"]
    }

    fn kind(&self) -> JurisdictionKind {
        JurisdictionKind::FinancialMarket
    }

    fn populate_year(&self, year: Year, config: &JurisdictionConfig) -> Result<Vec<HolidayEntry>> {
        let policy = Self::observed_policy();
        let mut h = YearBuilder::new(year, config);

        let new_year = h.date(1, 1)?;
        if !new_year.is_saturday() {
            h.add_observed(&policy, new_year, "New Year's Day");
        }

        if year >= 1986 {
            let mlk = Date::nth_weekday_of_month(year, 1, Weekday::Monday, 3)?;
            h.add(mlk, "Martin Luther King Jr. Day");
        }

        if year < 1971 {
            let birthday = h.date(2, 22)?;
            h.add_observed(&policy, birthday, "Washington's Birthday");
        } else {
            let presidents = Date::nth_weekday_of_month(year, 2, Weekday::Monday, 3)?;
            h.add(presidents, "Washington's Birthday");
        }

        let good_friday = easter_sunday(year)? - 2;
        if good_friday != Self::employment_report_friday(year)? {
            h.add(good_friday, "Good Friday");
        }

        if year < 1971 {
            let memorial = h.date(5, 30)?;
            h.add_observed(&policy, memorial, "Memorial Day");
        } else {
            let memorial = Date::nth_weekday_of_month(year, 5, Weekday::Monday, -1)?;
            h.add(memorial, "Memorial Day");
        }

        if year >= 2021 {
            let juneteenth = h.date(6, 19)?;
            h.add_observed(&policy, juneteenth, "Juneteenth National Independence Day");
        }

        let independence = h.date(7, 4)?;
        h.add_observed(&policy, independence, "Independence Day");

        let labor = Date::nth_weekday_of_month(year, 9, Weekday::Monday, 1)?;
        h.add(labor, "Labor Day");

        let columbus = h.date(10, 12)?;
        h.add_observed(&policy, columbus, "Columbus Day");

        let veterans = h.date(11, 11)?;
        if !veterans.is_saturday() {
            h.add_observed(&policy, veterans, "Veteran's Day");
        }

        let thanksgiving = Date::nth_weekday_of_month(year, 11, Weekday::Thursday, 4)?;
        h.add(thanksgiving, "Thanksgiving Day");

        let christmas = h.date(12, 25)?;
        h.add_observed(&policy, christmas, "Christmas Day");

        for &(_, month, day, label) in CLOSURES.iter().filter(|(y, ..)| *y == year) {
            h.add_fixed(month, day, label)?;
        }

        Ok(h.finish())
    }
}
