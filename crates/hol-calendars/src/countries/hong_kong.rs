//! Hong Kong general holidays.
//!
//! Holidays:
//! * The first day of January
//! * Lunar New Year's Day and the two or three days around it
//! * Ching Ming Festival (Apr 4 or 5)
//! * Good Friday, the day following Good Friday, Easter Monday
//! * Birthday of the Buddha (8th day of the 4th lunar month)
//! * Labour Day (May 1)
//! * Tuen Ng Festival (5th day of the 5th lunar month)
//! * HKSAR Establishment Day (Jul 1)
//! * The day following the Chinese Mid-Autumn Festival (15th day of the 8th
//!   lunar month)
//! * National Day (Oct 1)
//! * Chung Yeung Festival (9th day of the 9th lunar month)
//! * Christmas Day and the first weekday after it
//!
//! With `observed`, a holiday on a Sunday moves to "The day following …" on
//! Monday.  Lunar New Year, Mid-Autumn, National Day and Christmas have
//! their own substitution rules.
//!
//! Lunar dates are only known for 1900–2100; other years have no holidays.

use hol_core::errors::Result;
use hol_core::{fail, JurisdictionConfig, Year};
use hol_time::date::is_leap_year;
use hol_time::{easter_sunday, ChineseFestival, ChineseLunisolar, Date, Weekday};

use crate::holiday::HolidayEntry;
use crate::observed::{ObservedPolicy, RawDate, ShiftLabel};
use crate::rule_set::{RuleSet, SpecialHolidayTable, YearBuilder};

const DAY_FOLLOWING: &str = "The day following ";

const LUNAR_NEW_YEAR: &str = "Lunar New Year's Day";
const LUNAR_NEW_YEAR_EVE: &str = "The day preceding Lunar New Year's Day";
const LUNAR_SECOND_DAY: &str = "The second day of Lunar New Year";
const LUNAR_THIRD_DAY: &str = "The third day of Lunar New Year";
const LUNAR_FOURTH_DAY: &str = "The fourth day of Lunar New Year";

const MID_AUTUMN: &str = "Chinese Mid-Autumn Festival";

const SPECIAL_HOLIDAYS: SpecialHolidayTable = SpecialHolidayTable(&[(
    2015,
    &[(
        9,
        3,
        "The 70th anniversary day of the victory of the Chinese people's war of \
         resistance against Japanese aggression",
    )],
)]);

/// Hong Kong.
#[derive(Debug, Clone)]
pub struct HongKong {
    lunar: ChineseLunisolar,
    sunday_following: ObservedPolicy,
    new_year: ObservedPolicy,
}

impl Default for HongKong {
    fn default() -> Self {
        Self::new()
    }
}

impl HongKong {
    /// Build the rule set, precomputing the lunisolar calendar.
    pub fn new() -> Self {
        let sunday_following = ObservedPolicy::new(RawDate::ReplaceWhenShifted).shift(
            Weekday::Sunday,
            1,
            ShiftLabel::Prefix(DAY_FOLLOWING),
        );
        let new_year = ObservedPolicy::new(RawDate::ReplaceWhenShifted).shift(
            Weekday::Sunday,
            1,
            ShiftLabel::Replace("The day following the first day of January"),
        );
        Self {
            lunar: ChineseLunisolar::new(),
            sunday_following,
            new_year,
        }
    }

    fn festival(&self, year: Year, festival: ChineseFestival) -> Result<Date> {
        match self.lunar.festival_date(year, festival) {
            Some(date) => Ok(date),
            None => fail!("no {festival:?} date for {year}"),
        }
    }

    fn covers(&self, year: Year) -> bool {
        self.lunar.new_year(year).is_some()
    }

    fn add_sunday_following(&self, h: &mut YearBuilder, day: Date, label: &str) -> Date {
        h.add_observed(&self.sunday_following, day, label)
    }

    fn add_lunar_new_year(&self, h: &mut YearBuilder) -> Result<()> {
        let day = self.festival(h.year(), ChineseFestival::LunarNewYear)?;
        let days: &[(i32, &str)] = match (h.observed(), day.weekday()) {
            (true, Weekday::Friday) => &[
                (0, LUNAR_NEW_YEAR),
                (1, LUNAR_SECOND_DAY),
                (3, LUNAR_FOURTH_DAY),
            ],
            (true, Weekday::Saturday) => &[
                (0, LUNAR_NEW_YEAR),
                (2, LUNAR_THIRD_DAY),
                (3, LUNAR_FOURTH_DAY),
            ],
            // The eve was gazetted instead of the fourth day.
            (true, Weekday::Sunday) if matches!(h.year(), 2006 | 2007 | 2010) => &[
                (0, LUNAR_NEW_YEAR),
                (-1, LUNAR_NEW_YEAR_EVE),
                (1, LUNAR_SECOND_DAY),
                (2, LUNAR_THIRD_DAY),
            ],
            (true, Weekday::Sunday) => &[
                (0, LUNAR_NEW_YEAR),
                (1, LUNAR_SECOND_DAY),
                (2, LUNAR_THIRD_DAY),
                (3, LUNAR_FOURTH_DAY),
            ],
            _ => &[
                (0, LUNAR_NEW_YEAR),
                (1, LUNAR_SECOND_DAY),
                (2, LUNAR_THIRD_DAY),
            ],
        };
        for &(offset, label) in days {
            h.add(day + offset, label);
        }
        Ok(())
    }

    /// Returns the day the festival holiday is taken.
    fn add_mid_autumn(&self, h: &mut YearBuilder) -> Result<Date> {
        let year = h.year();
        let day = self.festival(year, ChineseFestival::MidAutumn)?;
        let (taken, label) = match day.weekday() {
            _ if !h.observed() => (day, MID_AUTUMN.to_string()),
            Weekday::Saturday if (1983..=2010).contains(&year) => (day, MID_AUTUMN.to_string()),
            Weekday::Saturday => (day + 2, format!("The second day of the {MID_AUTUMN} (Monday)")),
            _ => (day + 1, format!("{DAY_FOLLOWING}the {MID_AUTUMN}")),
        };
        h.add(taken, label);
        Ok(taken)
    }

    fn add_christmas(&self, h: &mut YearBuilder) -> Result<()> {
        const FIRST_AFTER: &str = "The first weekday after Christmas Day";
        const SECOND_AFTER: &str = "The second weekday after Christmas Day";
        let christmas = h.date(12, 25)?;
        h.add(christmas, "Christmas Day");
        let after: &[(i32, &str)] = match christmas.weekday() {
            _ if !h.observed() => &[(1, "The day following Christmas Day")],
            Weekday::Sunday => &[(1, FIRST_AFTER), (2, SECOND_AFTER)],
            Weekday::Saturday => &[(2, FIRST_AFTER)],
            _ => &[(1, FIRST_AFTER)],
        };
        for &(offset, label) in after {
            h.add(christmas + offset, label);
        }
        Ok(())
    }
}

impl RuleSet for HongKong {
    fn name(&self) -> &str {
        "Hong Kong"
    }

    fn codes(&self) -> &'static [&'static str] {
        &["HK", "HKG"]
    }

    fn special_holidays(&self) -> SpecialHolidayTable {
        SPECIAL_HOLIDAYS
    }

    fn populate_year(&self, year: Year, config: &JurisdictionConfig) -> Result<Vec<HolidayEntry>> {
        let mut h = YearBuilder::new(year, config);
        if !self.covers(year) {
            return Ok(h.finish());
        }

        let new_year = h.date(1, 1)?;
        h.add_observed(&self.new_year, new_year, "The first day of January");

        self.add_lunar_new_year(&mut h)?;

        let ching_ming_day = if is_leap_year(year) || (is_leap_year(year - 1) && year > 2008) {
            4
        } else {
            5
        };
        let ching_ming = h.date(4, ching_ming_day)?;
        let ching_ming = self.add_sunday_following(&mut h, ching_ming, "Ching Ming Festival");

        let easter = easter_sunday(year)?;
        h.add(easter - 2, "Good Friday");
        h.add(easter - 1, "The day following Good Friday");
        let easter_monday = easter + 1;
        if h.observed() && ching_ming == easter_monday {
            h.add(easter_monday + 1, "The day following Easter Monday");
        } else {
            h.add(easter_monday, "Easter Monday");
        }

        let buddha = self.festival(year, ChineseFestival::BuddhasBirthday)?;
        self.add_sunday_following(&mut h, buddha, "Birthday of the Buddha");

        let labour = h.date(5, 1)?;
        self.add_sunday_following(&mut h, labour, "Labour Day");

        let tuen_ng = self.festival(year, ChineseFestival::TuenNg)?;
        self.add_sunday_following(&mut h, tuen_ng, "Tuen Ng Festival");

        let establishment = h.date(7, 1)?;
        self.add_sunday_following(
            &mut h,
            establishment,
            "Hong Kong Special Administrative Region Establishment Day",
        );

        let mid_autumn = self.add_mid_autumn(&mut h)?;

        let national = h.date(10, 1)?;
        if h.observed() && (national.is_sunday() || national == mid_autumn) {
            h.add(national + 1, "The day following National Day");
        } else {
            h.add(national, "National Day");
        }

        let chung_yeung = self.festival(year, ChineseFestival::ChungYeung)?;
        self.add_sunday_following(&mut h, chung_yeung, "Chung Yeung Festival");

        self.add_christmas(&mut h)?;

        Ok(h.finish())
    }
}
