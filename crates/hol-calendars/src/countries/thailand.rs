//! Thai public holidays.
//!
//! Thailand combines fixed royal and civic holidays, Buddhist feasts from the
//! Thai lunisolar calendar, the Royal Ploughing Ceremony (dated each year by
//! the court astrologers) and a long table of one-off holidays.
//!
//! In-lieu policy by era:
//!
//! | Years      | Weekend holiday                                  |
//! |------------|--------------------------------------------------|
//! | 1961–1973  | next Monday, automatically                       |
//! | 1974–1988  | none                                             |
//! | 1989–1994  | case by case (special table)                     |
//! | 1995–1997  | next working day, automatically                  |
//! | 1998–2000  | case by case (special table)                     |
//! | 2001–      | next working day, automatically                  |
//!
//! Nothing is produced for 1940 and earlier.

use std::ops::RangeInclusive;

use hol_core::errors::Result;
use hol_core::{JurisdictionConfig, Year};
use hol_time::{Date, ThaiFeast, ThaiLunisolar, Weekday};

use crate::holiday::HolidayEntry;
use crate::observed::{ObservedPolicy, RawDate, ShiftLabel};
use crate::rule_set::{RuleSet, SpecialHolidayTable, YearBuilder};

const IN_LIEU: ShiftLabel = ShiftLabel::Suffix(" (in lieu)");

const SPECIAL_IN_LIEU: &str = "Special In Lieu Holiday";
const ELECTION: &str = "Thai Election Day";
const ELECTION_IN_LIEU: &str = "Thai Election Day (in lieu)";
const BRIDGE: &str = "Bridge Public Holiday";
const GOLDEN_JUBILEE: &str = "HM King Bhumibol Adulyadej's Golden Jubilee";
const ACCESSION_60TH: &str = "HM King Bhumibol Adulyadej's 60th Anniversary of Accession Event";
const COUP_LOCKDOWN: &str = "Emergency Lockdown (Thai Military Coup d'état)";
const UNREST_LOCKDOWN: &str = "Emergency Lockdown (Thai Political Unrest)";
const FLOOD_LOCKDOWN: &str = "Emergency Lockdown (2011 Thailand Floods)";
const MOURNING: &str = "Day of Mourning for HM King Bhumibol Adulyadej";
const CREMATION: &str = "HM King Bhumibol Adulyadej's Royal Cremation Ceremony";
const CORONATION_CELEBRATIONS: &str = "HM King Maha Vajiralongkorn's Coronation Celebrations";
const SONGKRAN: &str = "Songkran Festival";
const SONGKRAN_IN_LIEU: &str = "Songkran Festival (in lieu)";

/// One-off holidays declared by cabinet resolution.
const SPECIAL_HOLIDAYS: SpecialHolidayTable = SpecialHolidayTable(&[
    (1992, &[(5, 18, SPECIAL_IN_LIEU), (12, 7, SPECIAL_IN_LIEU)]),
    (
        1993,
        &[
            (3, 8, SPECIAL_IN_LIEU),
            (5, 3, SPECIAL_IN_LIEU),
            (10, 25, SPECIAL_IN_LIEU),
            (12, 6, SPECIAL_IN_LIEU),
        ],
    ),
    (
        1994,
        &[
            (1, 3, SPECIAL_IN_LIEU),
            (5, 2, SPECIAL_IN_LIEU),
            (7, 25, SPECIAL_IN_LIEU),
            (10, 24, SPECIAL_IN_LIEU),
            (12, 12, SPECIAL_IN_LIEU),
        ],
    ),
    (1996, &[(6, 10, GOLDEN_JUBILEE)]),
    (1998, &[(5, 11, SPECIAL_IN_LIEU), (12, 7, SPECIAL_IN_LIEU)]),
    (
        1999,
        &[
            (5, 3, SPECIAL_IN_LIEU),
            (5, 31, SPECIAL_IN_LIEU),
            (10, 25, SPECIAL_IN_LIEU),
            (12, 6, SPECIAL_IN_LIEU),
        ],
    ),
    (
        2000,
        &[
            (1, 3, SPECIAL_IN_LIEU),
            (2, 21, SPECIAL_IN_LIEU),
            (8, 14, SPECIAL_IN_LIEU),
            (12, 11, SPECIAL_IN_LIEU),
            (12, 29, ELECTION),
        ],
    ),
    (
        2006,
        &[
            (4, 19, ELECTION),
            (6, 9, ACCESSION_60TH),
            (6, 12, ACCESSION_60TH),
            (6, 13, ACCESSION_60TH),
            (9, 20, COUP_LOCKDOWN),
        ],
    ),
    (2007, &[(12, 24, ELECTION_IN_LIEU)]),
    (
        2009,
        &[
            (1, 2, BRIDGE),
            (4, 10, UNREST_LOCKDOWN),
            (4, 16, UNREST_LOCKDOWN),
            (4, 17, UNREST_LOCKDOWN),
            (7, 6, BRIDGE),
        ],
    ),
    (2010, &[(5, 20, BRIDGE), (5, 21, BRIDGE), (8, 13, BRIDGE)]),
    (
        2011,
        &[
            (5, 16, BRIDGE),
            (10, 27, FLOOD_LOCKDOWN),
            (10, 28, FLOOD_LOCKDOWN),
            (10, 31, FLOOD_LOCKDOWN),
        ],
    ),
    (2012, &[(4, 9, BRIDGE)]),
    (2013, &[(12, 30, BRIDGE)]),
    (2014, &[(8, 11, BRIDGE)]),
    (2015, &[(1, 2, BRIDGE), (5, 4, BRIDGE)]),
    (2016, &[(5, 6, BRIDGE), (7, 18, BRIDGE), (10, 14, MOURNING)]),
    (2017, &[(10, 26, CREMATION)]),
    (2019, &[(5, 6, CORONATION_CELEBRATIONS)]),
    (
        2020,
        &[
            (7, 27, SONGKRAN_IN_LIEU),
            (9, 4, SONGKRAN_IN_LIEU),
            (9, 7, SONGKRAN_IN_LIEU),
            (11, 19, BRIDGE),
            (11, 20, BRIDGE),
            (12, 11, BRIDGE),
        ],
    ),
    (2021, &[(2, 12, BRIDGE), (4, 12, BRIDGE), (9, 24, BRIDGE)]),
    (
        2022,
        &[(7, 15, BRIDGE), (7, 29, BRIDGE), (10, 14, BRIDGE), (12, 30, BRIDGE)],
    ),
    (2023, &[(5, 5, BRIDGE)]),
]);

/// Royal Ploughing Ceremony dates announced by the palace.  1999 had none.
const ROYAL_PLOUGHING_DATES: &[(Year, u8, u8)] = &[
    (1997, 5, 13),
    (1998, 5, 13),
    (2000, 5, 15),
    (2001, 5, 16),
    (2002, 5, 9),
    (2003, 5, 8),
    (2004, 5, 7),
    (2005, 5, 11),
    (2006, 5, 11),
    (2007, 5, 10),
    (2008, 5, 9),
    (2009, 5, 11),
    (2010, 5, 10),
    (2011, 5, 13),
    (2012, 5, 9),
    (2013, 5, 13),
    (2014, 5, 9),
    (2015, 5, 13),
    (2016, 5, 9),
    (2017, 5, 12),
    (2018, 5, 14),
    (2019, 5, 9),
    (2020, 5, 11),
    (2021, 5, 13),
    (2022, 5, 17),
    (2023, 5, 11),
];

/// Years before the first announced date get May 13.
const ROYAL_PLOUGHING_APPROXIMATED: RangeInclusive<Year> = 1957..=1996;

/// Thailand.
#[derive(Debug, Clone)]
pub struct Thailand {
    lunar: ThaiLunisolar,
    in_lieu: ObservedPolicy,
    new_years_eve_in_lieu: ObservedPolicy,
    songkran_in_lieu: ObservedPolicy,
    asarnha_in_lieu: ObservedPolicy,
}

impl Default for Thailand {
    fn default() -> Self {
        Self::new()
    }
}

impl Thailand {
    /// Build the rule set, precomputing the lunisolar calendar.
    pub fn new() -> Self {
        let automatic_eras = |policy: ObservedPolicy| {
            policy.during(1961..=1973).during(1995..=1997).since(2001)
        };
        let in_lieu = automatic_eras(
            ObservedPolicy::new(RawDate::Keep)
                .shift(Weekday::Saturday, 2, IN_LIEU)
                .shift(Weekday::Sunday, 1, IN_LIEU),
        );
        let asarnha_in_lieu = automatic_eras(
            ObservedPolicy::new(RawDate::Omit)
                .shift(Weekday::Friday, 3, ShiftLabel::Replace("Buddhist Lent Day (in lieu)"))
                .shift(Weekday::Saturday, 2, IN_LIEU)
                .shift(Weekday::Sunday, 2, IN_LIEU),
        );

        // Applied to Dec 31 of the previous year.
        let nye = ShiftLabel::Replace("New Year's Eve (in lieu)");
        let new_years_eve_in_lieu = ObservedPolicy::new(RawDate::Omit)
            .shift(Weekday::Saturday, 3, nye)
            .shift(Weekday::Sunday, 2, nye)
            .during(1995..=1997)
            .since(2001);

        let songkran = ShiftLabel::Replace(SONGKRAN_IN_LIEU);
        let songkran_in_lieu = ObservedPolicy::new(RawDate::Omit)
            .shift(Weekday::Saturday, 2, songkran)
            .shift(Weekday::Sunday, 1, songkran)
            .shift(Weekday::Monday, 1, songkran)
            .during(1995..=1997)
            .since(2001);

        Self {
            lunar: ThaiLunisolar::new(),
            in_lieu,
            new_years_eve_in_lieu,
            songkran_in_lieu,
            asarnha_in_lieu,
        }
    }

    fn add_with_in_lieu(&self, h: &mut YearBuilder, month: u8, day: u8, label: &str) -> Result<()> {
        let date = h.date(month, day)?;
        h.add_observed(&self.in_lieu, date, label);
        Ok(())
    }

    fn add_songkran(&self, h: &mut YearBuilder) -> Result<()> {
        let days: &[u8] = match h.year() {
            1948..=1953 => &[13, 14, 15],
            1957..=1988 => return self.add_with_in_lieu(h, 4, 13, SONGKRAN),
            1989..=1997 => &[12, 13, 14],
            2020 => &[],
            y if y >= 1998 => &[13, 14, 15],
            _ => &[],
        };
        for &day in days {
            h.add_fixed(4, day, SONGKRAN)?;
        }

        let last_day = if h.year() >= 2001 { 15 } else { 14 };
        let last = h.date(4, last_day)?;
        h.add_observed(&self.songkran_in_lieu, last, SONGKRAN);
        Ok(())
    }

    fn add_lunar_feasts(&self, h: &mut YearBuilder) {
        let year = h.year();
        if let Some(d) = self.lunar.feast_date(year, ThaiFeast::MakhaBucha) {
            h.add_observed(&self.in_lieu, d, "Makha Bucha");
        }
        if let Some(d) = self.lunar.feast_date(year, ThaiFeast::VisakhaBucha) {
            h.add_observed(&self.in_lieu, d, "Visakha Bucha");
        }
        let asarnha = self.lunar.feast_date(year, ThaiFeast::AsarnhaBucha);
        if let Some(d) = asarnha {
            h.add(d, "Asarnha Bucha");
        }
        if let Some(d) = self.lunar.feast_date(year, ThaiFeast::BuddhistLent) {
            h.add(d, "Buddhist Lent Day");
        }
        // Asarnha and Lent are consecutive: a Friday Asarnha pushes Lent's
        // substitute to Monday, a weekend Asarnha gets its own.
        if let Some(d) = asarnha {
            h.add_observed(&self.asarnha_in_lieu, d, "Asarnha Bucha");
        }
    }

    fn add_royal_ploughing(&self, h: &mut YearBuilder) -> Result<()> {
        const LABEL: &str = "Royal Ploughing Ceremony";
        let year = h.year();
        match ROYAL_PLOUGHING_DATES.iter().find(|(y, _, _)| *y == year) {
            Some(&(_, month, day)) => self.add_with_in_lieu(h, month, day, LABEL),
            None if ROYAL_PLOUGHING_APPROXIMATED.contains(&year) => {
                self.add_with_in_lieu(h, 5, 13, LABEL)
            }
            None => Ok(()),
        }
    }
}

impl RuleSet for Thailand {
    fn name(&self) -> &str {
        "Thailand"
    }

    fn codes(&self) -> &'static [&'static str] {
        &["TH", "THA"]
    }

    fn special_holidays(&self) -> SpecialHolidayTable {
        SPECIAL_HOLIDAYS
    }

    fn holidays_for_year(&self, year: Year, config: &JurisdictionConfig) -> Result<Vec<HolidayEntry>> {
        if year <= 1940 {
            return Ok(Vec::new());
        }
        let mut entries = self.special_holidays().entries_for(year)?;
        entries.extend(self.populate_year(year, config)?);
        Ok(entries)
    }

    fn populate_year(&self, year: Year, config: &JurisdictionConfig) -> Result<Vec<HolidayEntry>> {
        let mut h = YearBuilder::new(year, config);
        if year <= 1940 {
            return Ok(h.finish());
        }

        self.add_with_in_lieu(&mut h, 1, 1, "New Year's Day")?;
        let previous_eve = Date::from_ymd(year - 1, 12, 31)?;
        h.add_observed(&self.new_years_eve_in_lieu, previous_eve, "New Year's Eve");

        self.add_with_in_lieu(&mut h, 4, 6, "Chakri Memorial Day")?;
        self.add_songkran(&mut h)?;

        if year >= 1974 {
            self.add_with_in_lieu(&mut h, 5, 1, "National Labour Day")?;
        }
        if year <= 1959 {
            self.add_with_in_lieu(&mut h, 6, 24, "National Day")?;
        }

        match year {
            1958..=2016 => self.add_with_in_lieu(&mut h, 5, 5, "Coronation Day")?,
            y if y >= 2020 => self.add_with_in_lieu(&mut h, 5, 4, "Coronation Day")?,
            _ => {}
        }
        if year >= 2019 {
            self.add_with_in_lieu(&mut h, 6, 3, "HM Queen Suthida's Birthday")?;
        }
        if year >= 2017 {
            self.add_with_in_lieu(&mut h, 7, 28, "HM King Maha Vajiralongkorn's Birthday")?;
        }
        match year {
            1976..=2016 => self.add_with_in_lieu(&mut h, 8, 12, "HM Queen Sirikit's Birthday")?,
            y if y >= 2017 => self.add_with_in_lieu(
                &mut h,
                8,
                12,
                "HM Queen Sirikit The Queen Mother's Birthday",
            )?,
            _ => {}
        }
        match year {
            1950..=1957 => self.add_with_in_lieu(&mut h, 4, 15, "National Mother's Day")?,
            y if y >= 1976 => self.add_with_in_lieu(&mut h, 8, 12, "National Mother's Day")?,
            _ => {}
        }
        if year >= 2017 {
            self.add_with_in_lieu(&mut h, 10, 13, "HM King Bhumibol Adulyadej Memorial Day")?;
        }
        self.add_with_in_lieu(&mut h, 10, 23, "Chulalongkorn Memorial Day")?;
        if year >= 1960 {
            self.add_with_in_lieu(&mut h, 12, 5, "HM King Bhumibol Adulyadej's Birthday")?;
        }
        if year >= 1980 {
            self.add_with_in_lieu(&mut h, 12, 5, "National Father's Day")?;
        }
        self.add_with_in_lieu(&mut h, 12, 10, "Constitution Day")?;
        h.add_fixed(12, 31, "New Year's Eve")?;

        self.add_lunar_feasts(&mut h);
        self.add_royal_ploughing(&mut h)?;

        Ok(h.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: Year, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn generic(year: Year, observed: bool) -> Vec<HolidayEntry> {
        let config = JurisdictionConfig::default().with_observed(observed);
        Thailand::new().populate_year(year, &config).unwrap()
    }

    #[test]
    fn special_table_is_well_formed() {
        let years: Vec<_> = SPECIAL_HOLIDAYS.years().collect();
        assert!(years.windows(2).all(|w| w[0] < w[1]));
        for year in years {
            assert!(!SPECIAL_HOLIDAYS.entries_for(year).unwrap().is_empty());
        }
    }

    #[test]
    fn ploughing_table_is_sorted() {
        assert!(ROYAL_PLOUGHING_DATES.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn nothing_before_1941() {
        assert!(generic(1940, true).is_empty());
        let th = Thailand::new();
        assert!(th
            .holidays_for_year(1900, &JurisdictionConfig::default())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn new_years_eve_in_lieu_reads_previous_year() {
        // 2022-12-31 is a Saturday.
        let entries = generic(2023, true);
        assert!(entries.contains(&HolidayEntry::new(date(2023, 1, 3), "New Year's Eve (in lieu)")));
        // 2017-12-31 is a Sunday.
        let entries = generic(2018, true);
        assert!(entries.contains(&HolidayEntry::new(date(2018, 1, 2), "New Year's Eve (in lieu)")));
        assert!(!generic(2023, false)
            .iter()
            .any(|e| e.label == "New Year's Eve (in lieu)"));
    }

    #[test]
    fn friday_asarnha_moves_lent_substitute() {
        // Asarnha Bucha 2021 is Saturday Jul 24.
        let entries = generic(2021, true);
        assert!(entries.contains(&HolidayEntry::new(date(2021, 7, 26), "Asarnha Bucha (in lieu)")));
        // Asarnha Bucha 2018 is Friday Jul 27, Lent Saturday Jul 28.
        let entries = generic(2018, true);
        assert!(entries.contains(&HolidayEntry::new(
            date(2018, 7, 30),
            "Buddhist Lent Day (in lieu)"
        )));
    }
}
