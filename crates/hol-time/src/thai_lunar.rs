//! Thai lunisolar calendar.
//!
//! The Thai Buddhist calendar alternates three kinds of lunar year:
//!
//! * normal: 354 days,
//! * *athikawan*: one intercalary day (355 days),
//! * *athikamat*: one intercalary month (384 days).
//!
//! Which years are intercalated is fixed by the Royal astrologers rather
//! than by a closed formula, so the kinds are tabulated for 1941–2057 and
//! the lunar new year (first day of the waxing moon of the first month) is
//! obtained by accumulating year lengths from a known anchor.  Buddhist feast
//! days are fixed offsets from that start, with the offsets depending on the
//! year kind.  Outside the tabulated window no dates are produced.

use crate::date::Date;
use hol_core::Year;

/// Buddhist feast days observed as Thai public holidays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThaiFeast {
    /// Full moon of the 3rd lunar month (4th in athikamat years).
    MakhaBucha,
    /// Full moon of the 6th lunar month (7th in athikamat years).
    VisakhaBucha,
    /// Full moon of the 8th lunar month (second 8th month in athikamat years).
    AsarnhaBucha,
    /// Start of the Buddhist Lent, the day after Asarnha Bucha.
    BuddhistLent,
}

/// Kind of Thai lunar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThaiYearKind {
    /// 354 days.
    Normal,
    /// 355 days: an extra day in the 7th month.
    Athikawan,
    /// 384 days: a repeated 8th month.
    Athikamat,
}

impl ThaiYearKind {
    /// Length of the lunar year in days.
    pub fn length(self) -> i32 {
        match self {
            ThaiYearKind::Normal => 354,
            ThaiYearKind::Athikawan => 355,
            ThaiYearKind::Athikamat => 384,
        }
    }
}

/// Lunar years with an intercalary month.
const ATHIKAMAT_YEARS: &[Year] = &[
    1942, 1945, 1947, 1950, 1953, 1955, 1958, 1961, 1964, 1966, 1969, 1972, 1974, 1977, 1980,
    1983, 1985, 1988, 1991, 1993, 1996, 1999, 2002, 2004, 2007, 2010, 2012, 2015, 2018, 2021,
    2023, 2026, 2029, 2031, 2034, 2037, 2040, 2042, 2045, 2048, 2050, 2053, 2056,
];

/// Lunar years with an intercalary day.
const ATHIKAWAN_YEARS: &[Year] = &[
    1943, 1948, 1952, 1959, 1963, 1968, 1975, 1979, 1984, 1989, 1994, 2000, 2005, 2009, 2016,
    2020, 2025, 2030, 2036, 2041, 2046, 2052, 2057,
];

/// Lunar new year of 1941 (waxing 1st day of the 1st month).
const ANCHOR: Date = Date::from_ymd_unchecked(1940, 11, 30);

/// Precomputed Thai lunar year starts for the supported window.
///
/// Construct once and reuse: the table is built eagerly in [`new`](Self::new).
///
/// ```
/// use hol_time::{Date, ThaiFeast, ThaiLunisolar};
///
/// let cal = ThaiLunisolar::new();
/// let makha = cal.feast_date(2023, ThaiFeast::MakhaBucha).unwrap();
/// assert_eq!(makha, Date::from_ymd(2023, 3, 6).unwrap());
/// assert!(cal.feast_date(1930, ThaiFeast::MakhaBucha).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ThaiLunisolar {
    years: Vec<(Date, ThaiYearKind)>,
}

impl Default for ThaiLunisolar {
    fn default() -> Self {
        Self::new()
    }
}

impl ThaiLunisolar {
    /// First Gregorian year with feast dates.
    pub const START_YEAR: Year = 1941;

    /// Last Gregorian year with feast dates.
    pub const END_YEAR: Year = 2057;

    /// Build the year table.
    pub fn new() -> Self {
        let mut years = Vec::with_capacity((Self::END_YEAR - Self::START_YEAR + 1) as usize);
        let mut start = ANCHOR;
        for year in Self::START_YEAR..=Self::END_YEAR {
            let kind = Self::year_kind(year);
            years.push((start, kind));
            start += kind.length();
        }
        Self { years }
    }

    fn year_kind(year: Year) -> ThaiYearKind {
        if ATHIKAMAT_YEARS.binary_search(&year).is_ok() {
            ThaiYearKind::Athikamat
        } else if ATHIKAWAN_YEARS.binary_search(&year).is_ok() {
            ThaiYearKind::Athikawan
        } else {
            ThaiYearKind::Normal
        }
    }

    fn entry(&self, year: Year) -> Option<(Date, ThaiYearKind)> {
        let idx = usize::try_from(year.checked_sub(Self::START_YEAR)?).ok()?;
        self.years.get(idx).copied()
    }

    /// Kind of the lunar year whose feasts fall in Gregorian `year`.
    pub fn kind(&self, year: Year) -> Option<ThaiYearKind> {
        self.entry(year).map(|(_, kind)| kind)
    }

    /// First day of the lunar year whose feasts fall in Gregorian `year`.
    ///
    /// This date itself lies in November or December of `year - 1`.
    pub fn lunar_year_start(&self, year: Year) -> Option<Date> {
        self.entry(year).map(|(start, _)| start)
    }

    /// Date of `feast` in Gregorian `year`, or `None` outside 1941–2057.
    pub fn feast_date(&self, year: Year, feast: ThaiFeast) -> Option<Date> {
        let (start, kind) = self.entry(year)?;
        let leap_month = kind == ThaiYearKind::Athikamat;
        let offset = match feast {
            ThaiFeast::MakhaBucha if leap_month => 102,
            ThaiFeast::MakhaBucha => 73,
            ThaiFeast::VisakhaBucha if leap_month => 191,
            ThaiFeast::VisakhaBucha => 161,
            ThaiFeast::AsarnhaBucha => match kind {
                ThaiYearKind::Normal => 220,
                ThaiYearKind::Athikawan => 221,
                ThaiYearKind::Athikamat => 250,
            },
            ThaiFeast::BuddhistLent => {
                return self
                    .feast_date(year, ThaiFeast::AsarnhaBucha)
                    .map(|d| d + 1);
            }
        };
        Some(start + offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: Year, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn tables_are_sorted_and_disjoint() {
        assert!(ATHIKAMAT_YEARS.windows(2).all(|w| w[0] < w[1]));
        assert!(ATHIKAWAN_YEARS.windows(2).all(|w| w[0] < w[1]));
        assert!(ATHIKAMAT_YEARS
            .iter()
            .all(|y| ATHIKAWAN_YEARS.binary_search(y).is_err()));
    }

    #[test]
    fn year_starts() {
        let cal = ThaiLunisolar::new();
        assert_eq!(cal.lunar_year_start(1941), Some(date(1940, 11, 30)));
        assert_eq!(cal.lunar_year_start(2000), Some(date(1999, 12, 8)));
        assert_eq!(cal.lunar_year_start(2023), Some(date(2022, 11, 24)));
        assert_eq!(cal.lunar_year_start(2024), Some(date(2023, 12, 13)));
    }

    #[test]
    fn window_bounds() {
        let cal = ThaiLunisolar::new();
        assert!(cal.feast_date(1940, ThaiFeast::VisakhaBucha).is_none());
        assert!(cal.feast_date(2058, ThaiFeast::VisakhaBucha).is_none());
        assert!(cal.feast_date(i32::MIN, ThaiFeast::VisakhaBucha).is_none());
        assert_eq!(cal.feast_date(1941, ThaiFeast::MakhaBucha), Some(date(1941, 2, 11)));
        assert_eq!(cal.feast_date(2057, ThaiFeast::AsarnhaBucha), Some(date(2057, 7, 16)));
    }

    #[test]
    fn lent_follows_asarnha() {
        let cal = ThaiLunisolar::new();
        for y in ThaiLunisolar::START_YEAR..=ThaiLunisolar::END_YEAR {
            let a = cal.feast_date(y, ThaiFeast::AsarnhaBucha).unwrap();
            let l = cal.feast_date(y, ThaiFeast::BuddhistLent).unwrap();
            assert_eq!(l - a, 1);
            assert_eq!(a.year(), y);
        }
    }

    #[test]
    fn kinds() {
        let cal = ThaiLunisolar::new();
        assert_eq!(cal.kind(2023), Some(ThaiYearKind::Athikamat));
        assert_eq!(cal.kind(2020), Some(ThaiYearKind::Athikawan));
        assert_eq!(cal.kind(2022), Some(ThaiYearKind::Normal));
        assert_eq!(cal.kind(2100), None);
    }
}
