//! Hungarian public holidays.
//!
//! Holidays:
//! * Újév (Jan 1)
//! * Nemzeti ünnep (Mar 15, 1945–1950 and from 1989)
//! * Soviet-era holidays (Mar 21, Apr 4, Nov 7; 1950–1989)
//! * Nagypéntek (Good Friday, from 2017)
//! * Húsvét, Húsvét Hétfő (Easter Sunday and Monday; no Monday in 1955)
//! * Pünkösd, Pünkösdhétfő (Whit Sunday; Monday until 1952 and from 1992)
//! * A Munka ünnepe (May 1 from 1946; also May 2 in 1950–1953)
//! * Aug 20 (A kenyér ünnepe 1950–1989, otherwise Az államalapítás ünnepe)
//! * Nemzeti ünnep (Oct 23, from 1991)
//! * Mindenszentek (Nov 1, from 1999)
//! * Karácsony, Karácsony másnapja (Dec 25–26; no Dec 26 in 1955)
//!
//! With `observed`, a holiday on a Tuesday makes the Monday before a rest
//! day ("előtti pihenőnap") and one on a Thursday makes the Friday after a
//! rest day ("utáni pihenőnap"), from 2010 unless stated otherwise.
//! Christmas Eve on a weekday (from 2010) and New Year's Eve on a Monday
//! (from 2014) are also days off.

use hol_core::errors::Result;
use hol_core::{JurisdictionConfig, Year};
use hol_time::{easter_sunday, Date, Month, Weekday};

use crate::holiday::HolidayEntry;
use crate::observed::{ObservedPolicy, RawDate, ShiftLabel};
use crate::rule_set::{RuleSet, YearBuilder};

/// Hungary.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hungary;

/// First year of the Tuesday/Thursday bridge days.
const DAY_OFF_SINCE: Year = 2010;

/// Bridge-day policy around one holiday.
///
/// The Monday before a Tuesday holiday and the Friday after a Thursday one
/// become rest days.  New Year's Day never gets the day before.
fn day_off_policy(day: Date, since: Year, before: bool, after: bool) -> ObservedPolicy {
    let mut policy = ObservedPolicy::new(RawDate::Keep).since(since);
    let new_years_day = day.month() == Month::January && day.day_of_month() == 1;
    if before && !new_years_day {
        policy = policy.shift(Weekday::Tuesday, -1, ShiftLabel::Suffix(" előtti pihenőnap"));
    }
    if after {
        policy = policy.shift(Weekday::Thursday, 1, ShiftLabel::Suffix(" utáni pihenőnap"));
    }
    policy
}

fn add_with_day_off(h: &mut YearBuilder, day: Date, label: &str) {
    h.add_observed(&day_off_policy(day, DAY_OFF_SINCE, true, true), day, label);
}

impl RuleSet for Hungary {
    fn name(&self) -> &str {
        "Hungary"
    }

    fn codes(&self) -> &'static [&'static str] {
        &["HU", "HUN"]
    }

    fn populate_year(&self, year: Year, config: &JurisdictionConfig) -> Result<Vec<HolidayEntry>> {
        let mut h = YearBuilder::new(year, config);

        let new_year = h.date(1, 1)?;
        h.add_observed(&day_off_policy(new_year, 2014, true, true), new_year, "Újév");
        let new_years_eve = h.date(12, 31)?;
        let monday_eve = new_years_eve.weekday() == Weekday::Monday;
        if year >= 2014 && h.observed() && monday_eve {
            h.add(new_years_eve, "Újév előtti pihenőnap");
        }

        if (1945..=1950).contains(&year) || year >= 1989 {
            let day = h.date(3, 15)?;
            add_with_day_off(&mut h, day, "Nemzeti ünnep");
        }

        if (1950..=1989).contains(&year) {
            h.add_fixed(3, 21, "A Tanácsköztársaság kikiáltásának ünnepe")?;
            h.add_fixed(4, 4, "A felszabadulás ünnepe")?;
            if year != 1956 && year != 1989 {
                h.add_fixed(11, 7, "A nagy októberi szocialista forradalom ünnepe")?;
            }
        }

        let easter = easter_sunday(year)?;
        if year >= 2017 {
            h.add(easter.weekday_on_or_before(Weekday::Friday), "Nagypéntek");
        }
        h.add(easter, "Húsvét");
        if year != 1955 {
            h.add(easter + 1, "Húsvét Hétfő");
        }
        h.add(easter + 49, "Pünkösd");
        if year <= 1952 || year >= 1992 {
            h.add(easter + 50, "Pünkösdhétfő");
        }

        if year >= 1946 {
            let day = h.date(5, 1)?;
            add_with_day_off(&mut h, day, "A Munka ünnepe");
        }
        if (1950..=1953).contains(&year) {
            h.add_fixed(5, 2, "A Munka ünnepe")?;
        }

        if (1950..1990).contains(&year) {
            h.add_fixed(8, 20, "A kenyér ünnepe")?;
        } else {
            let day = h.date(8, 20)?;
            add_with_day_off(&mut h, day, "Az államalapítás ünnepe");
        }

        if year >= 1991 {
            let day = h.date(10, 23)?;
            add_with_day_off(&mut h, day, "Nemzeti ünnep");
        }

        if year >= 1999 {
            let day = h.date(11, 1)?;
            add_with_day_off(&mut h, day, "Mindenszentek");
        }

        let christmas_eve = h.date(12, 24)?;
        if h.observed() && year >= 2010 && !christmas_eve.is_weekend() {
            h.add(christmas_eve, "Szenteste");
        }

        h.add_fixed(12, 25, "Karácsony")?;

        if year != 1955 {
            let boxing_day = h.date(12, 26)?;
            h.add_observed(
                &day_off_policy(boxing_day, 2013, false, true),
                boxing_day,
                "Karácsony másnapja",
            );
        }

        // Overrides "Újév előtti pihenőnap" on the same Monday.
        if h.observed() && year >= 2014 && monday_eve {
            h.add(new_years_eve, "Szilveszter");
        }

        Ok(h.finish())
    }
}
